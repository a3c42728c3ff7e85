//! Flat, serializable player snapshots.
//!
//! [`Player::save`] gathers every component into a [`PlayerSnapshot`];
//! [`Player::load`] hands each section back to its component. For any
//! player `a`, loading `a.save()` into another player yields a value equal
//! to `a`.
//!
//! Status effects are rebuilt from their saved data and are not re-applied.

use serde::{Deserialize, Serialize};

use super::Player;
use crate::components::{EquipmentData, StatsData, StatusEffectData};
use crate::entities::{DiceId, Item};
use crate::error::Result;

/// Snapshot of a player, as stored by the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSnapshot {
    pub stats: StatsData,
    pub inventory: InventoryData,
    /// Owned dice.
    #[serde(default)]
    pub cards: Vec<DiceId>,
    #[serde(default)]
    pub equipment: EquipmentData,
    pub location: String,
    #[serde(default)]
    pub status_effects: Vec<StatusEffectData>,
}

/// Inventory section of a snapshot.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InventoryData {
    #[serde(default)]
    pub items: Vec<Item>,
    #[serde(default)]
    pub gold: u32,
}

impl PlayerSnapshot {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Player {
    /// Capture the full player state.
    pub fn save(&self) -> PlayerSnapshot {
        PlayerSnapshot {
            stats: self.stats.to_data(),
            inventory: InventoryData {
                items: self.inventory.items().to_vec(),
                gold: self.inventory.gold(),
            },
            cards: self.inventory.owned_dice().to_vec(),
            equipment: self.equipment.to_data(),
            location: self.location.current().to_string(),
            status_effects: self.status_effects.snapshot(),
        }
    }

    /// Overwrite the player state with a snapshot.
    ///
    /// Progression rules are configuration, not state, and are kept.
    pub fn load(&mut self, snapshot: PlayerSnapshot) {
        self.stats.load_from_data(&snapshot.stats);
        self.inventory.set_items(snapshot.inventory.items);
        self.inventory.set_gold(snapshot.inventory.gold);
        self.inventory.set_owned_dice(snapshot.cards);
        self.equipment.load_from_data(snapshot.equipment);
        self.location.set(snapshot.location);
        self.status_effects.restore(snapshot.status_effects);
        tracing::debug!(level = self.stats.level(), "player state loaded");
    }

    /// Build a player with the stock rules from a snapshot.
    pub fn from_snapshot(snapshot: PlayerSnapshot) -> Self {
        let mut player = Player::new();
        player.load(snapshot);
        player
    }
}
