//! Item definitions and their use effects.

use serde::{Deserialize, Serialize};

use super::{ItemId, ItemType};
use crate::mechanics::EquipmentBonuses;
use crate::player::Player;

/// An item the player can carry, use or equip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    #[serde(default)]
    pub effect: ItemEffect,
    /// Applied while the item sits in an equipment slot.
    #[serde(default)]
    pub bonuses: EquipmentBonuses,
}

impl Item {
    /// Create an item with no effect and no bonuses.
    pub fn new(id: impl Into<String>, name: impl Into<String>, item_type: ItemType) -> Self {
        Self {
            id: ItemId::new(id),
            name: name.into(),
            description: String::new(),
            item_type,
            effect: ItemEffect::None,
            bonuses: EquipmentBonuses::default(),
        }
    }

    /// Shorthand for a consumable that restores HP.
    pub fn healing(id: impl Into<String>, name: impl Into<String>, amount: u32) -> Self {
        Self::new(id, name, ItemType::Consumable).with_effect(ItemEffect::Heal { amount })
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_effect(mut self, effect: ItemEffect) -> Self {
        self.effect = effect;
        self
    }

    pub fn with_bonuses(mut self, bonuses: EquipmentBonuses) -> Self {
        self.bonuses = bonuses;
        self
    }

    pub fn is_consumable(&self) -> bool {
        self.item_type == ItemType::Consumable
    }

    /// Run this item's effect against the player.
    ///
    /// Returns whether the item was actually used. Removal of consumables
    /// is the inventory's job, see [`Player::use_item`].
    pub fn use_on(&self, player: &mut Player) -> bool {
        self.effect.apply(player)
    }
}

/// What happens when an item is used.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ItemEffect {
    /// Cannot be used directly (keys, quest items, most equipment).
    #[default]
    None,
    Heal {
        amount: u32,
    },
    RestoreMp {
        amount: u32,
    },
    GrantExperience {
        amount: u32,
    },
    /// Removes an active status effect; fails if it is not active.
    #[serde(rename_all = "camelCase")]
    Cure {
        effect_id: String,
    },
}

impl ItemEffect {
    /// Apply the effect and report whether anything was consumed.
    pub fn apply(&self, player: &mut Player) -> bool {
        match self {
            ItemEffect::None => false,
            ItemEffect::Heal { amount } => {
                player.stats.heal(*amount);
                true
            }
            ItemEffect::RestoreMp { amount } => {
                player.stats.restore_mp(*amount);
                true
            }
            ItemEffect::GrantExperience { amount } => {
                player.stats.add_experience(*amount);
                true
            }
            ItemEffect::Cure { effect_id } => player.status_effects.remove(effect_id).is_some(),
        }
    }
}
