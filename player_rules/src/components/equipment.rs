//! Equipment slots.

use serde::{Deserialize, Serialize};

use crate::entities::Item;
use crate::mechanics::{EquipmentBonuses, EquipmentSlot};

/// Three single-occupancy slots.
///
/// Displaced items are returned to the caller; the slots never decide where
/// they go.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Equipment {
    dice: Option<Item>,
    shield: Option<Item>,
    odd_tool: Option<Item>,
}

impl Equipment {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot_mut(&mut self, slot: EquipmentSlot) -> &mut Option<Item> {
        match slot {
            EquipmentSlot::Dice => &mut self.dice,
            EquipmentSlot::Shield => &mut self.shield,
            EquipmentSlot::OddTool => &mut self.odd_tool,
        }
    }

    /// Item currently in a slot.
    pub fn get(&self, slot: EquipmentSlot) -> Option<&Item> {
        match slot {
            EquipmentSlot::Dice => self.dice.as_ref(),
            EquipmentSlot::Shield => self.shield.as_ref(),
            EquipmentSlot::OddTool => self.odd_tool.as_ref(),
        }
    }

    /// Put an item in a slot, returning whatever was there before.
    pub fn equip(&mut self, slot: EquipmentSlot, item: Item) -> Option<Item> {
        tracing::debug!(slot = slot.name(), item = %item.id, "equip");
        self.slot_mut(slot).replace(item)
    }

    /// Empty a slot, returning whatever was there.
    pub fn unequip(&mut self, slot: EquipmentSlot) -> Option<Item> {
        self.slot_mut(slot).take()
    }

    /// Sum of bonuses over all occupied slots.
    pub fn bonuses(&self) -> EquipmentBonuses {
        EquipmentSlot::ALL
            .iter()
            .filter_map(|slot| self.get(*slot))
            .fold(EquipmentBonuses::default(), |total, item| total + item.bonuses)
    }

    pub fn to_data(&self) -> EquipmentData {
        EquipmentData {
            equipped_dice: self.dice.clone(),
            equipped_shield: self.shield.clone(),
            equipped_odd_tool: self.odd_tool.clone(),
        }
    }

    /// Overwrite all three slots from saved data.
    pub fn load_from_data(&mut self, data: EquipmentData) {
        self.dice = data.equipped_dice;
        self.shield = data.equipped_shield;
        self.odd_tool = data.equipped_odd_tool;
    }
}

/// Serializable equipment block of a player snapshot.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentData {
    #[serde(default)]
    pub equipped_dice: Option<Item>,
    #[serde(default)]
    pub equipped_shield: Option<Item>,
    #[serde(default)]
    pub equipped_odd_tool: Option<Item>,
}
