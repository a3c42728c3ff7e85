//! The player aggregate - the unit of save and load.

mod snapshot;

pub use snapshot::*;

use crate::components::{
    Equipment, Inventory, LocationTracker, PlayerStats, StatusEffect, StatusEffectSet,
};
use crate::config::RulesConfig;
use crate::entities::ItemId;

/// Everything that describes the player's progression.
///
/// Mutated by gameplay (item use, shop purchases, dialogue choices) and by
/// the host's explicit [`Player::tick`] calls.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub stats: PlayerStats,
    pub inventory: Inventory,
    pub equipment: Equipment,
    pub location: LocationTracker,
    pub status_effects: StatusEffectSet,
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl Player {
    /// A fresh player with the stock rules.
    pub fn new() -> Self {
        Self::from_config(&RulesConfig::default())
    }

    /// A fresh player built from a rules configuration.
    pub fn from_config(config: &RulesConfig) -> Self {
        let mut inventory = Inventory::new();
        inventory.set_gold(config.starting_gold);

        Self {
            stats: PlayerStats::new(config.starting_stats, config.progression),
            inventory,
            equipment: Equipment::new(),
            location: LocationTracker::new(config.starting_location.clone()),
            status_effects: StatusEffectSet::new(),
        }
    }

    /// Use an owned item.
    ///
    /// Returns `false` if the item is not owned or its effect did nothing.
    /// Consumables are removed after a successful use; other item types are
    /// kept.
    pub fn use_item(&mut self, id: &ItemId) -> bool {
        let Some(item) = self.inventory.get_item(id).cloned() else {
            tracing::debug!(item = %id, "use of unowned item ignored");
            return false;
        };

        let used = item.use_on(self);
        if used && item.is_consumable() {
            self.inventory.remove_item(id);
        }
        tracing::debug!(item = %id, used, "item used");
        used
    }

    /// Activate a status effect and run its apply hook.
    pub fn add_status_effect(&mut self, effect: StatusEffect) {
        self.status_effects.add(effect, &mut self.stats);
    }

    /// Advance time-based effects by one step.
    pub fn tick(&mut self) -> Vec<StatusEffect> {
        self.status_effects.tick()
    }

    /// Luck including equipment bonuses, floored at zero.
    pub fn effective_luck(&self) -> u32 {
        let total = i64::from(self.stats.luck()) + i64::from(self.equipment.bonuses().luck);
        total.clamp(0, i64::from(u32::MAX)) as u32
    }

    pub fn is_alive(&self) -> bool {
        self.stats.is_alive()
    }
}
