//! Player stats: HP/MP pools, experience and leveling.

use serde::{Deserialize, Serialize};

use crate::config::{ProgressionRules, StartingStats};

/// Core numeric stats of the player.
///
/// Invariant: `hp <= max_hp` and `mp <= max_mp` after every operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerStats {
    hp: u32,
    max_hp: u32,
    mp: u32,
    max_mp: u32,
    exp: u32,
    level: u32,
    luck: u32,
    progression: ProgressionRules,
}

impl Default for PlayerStats {
    fn default() -> Self {
        Self::new(StartingStats::default(), ProgressionRules::default())
    }
}

impl PlayerStats {
    /// Fresh stats at full HP and MP.
    pub fn new(start: StartingStats, progression: ProgressionRules) -> Self {
        Self {
            hp: start.hp,
            max_hp: start.hp,
            mp: start.mp,
            max_mp: start.mp,
            exp: 0,
            level: start.level,
            luck: start.luck,
            progression,
        }
    }

    pub fn hp(&self) -> u32 {
        self.hp
    }

    pub fn max_hp(&self) -> u32 {
        self.max_hp
    }

    pub fn mp(&self) -> u32 {
        self.mp
    }

    pub fn max_mp(&self) -> u32 {
        self.max_mp
    }

    pub fn exp(&self) -> u32 {
        self.exp
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn luck(&self) -> u32 {
        self.luck
    }

    pub fn progression(&self) -> &ProgressionRules {
        &self.progression
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Lose HP, never dropping below zero.
    pub fn take_damage(&mut self, amount: u32) {
        self.hp = self.hp.saturating_sub(amount);
    }

    /// Gain HP, never exceeding `max_hp`.
    pub fn heal(&mut self, amount: u32) {
        self.hp = self.hp.saturating_add(amount).min(self.max_hp);
    }

    /// Spend MP. Fails without side effects when the pool is too small.
    pub fn use_mp(&mut self, amount: u32) -> bool {
        if self.mp >= amount {
            self.mp -= amount;
            true
        } else {
            false
        }
    }

    pub fn restore_mp(&mut self, amount: u32) {
        self.mp = self.mp.saturating_add(amount).min(self.max_mp);
    }

    /// Experience still needed to reach the next level.
    pub fn exp_to_next_level(&self) -> u32 {
        self.progression
            .threshold(self.level)
            .saturating_sub(self.exp)
    }

    /// Add experience and apply every level-up it pays for.
    ///
    /// Each level-up spends `level * exp_per_level` from `exp`, so one large
    /// gain can cross several thresholds in sequence. Leveling stops once
    /// the threshold no longer fits in `u32` or the level is at its maximum.
    /// Returns the number of levels gained.
    pub fn add_experience(&mut self, amount: u32) -> u32 {
        self.exp = self.exp.saturating_add(amount);

        let mut gained = 0;
        while let Some(needed) = self.next_threshold() {
            if self.exp < needed {
                break;
            }
            self.exp -= needed;
            self.level_up();
            gained += 1;
        }

        if gained > 0 {
            tracing::info!(level = self.level, gained, "player leveled up");
        }
        gained
    }

    /// Cost of the next level-up, or `None` when leveling is capped.
    fn next_threshold(&self) -> Option<u32> {
        if self.level == u32::MAX {
            return None;
        }
        // A zero threshold would level forever.
        self.progression
            .checked_threshold(self.level)
            .filter(|&needed| needed > 0)
    }

    fn level_up(&mut self) {
        self.level = self.level.saturating_add(1);

        self.max_hp = self.max_hp.saturating_add(self.progression.hp_per_level);
        self.hp = self.max_hp;
        self.max_mp = self.max_mp.saturating_add(self.progression.mp_per_level);
        self.mp = self.max_mp;

        if self.progression.grants_luck(self.level) {
            self.luck = self.luck.saturating_add(1);
        }
    }

    /// Flatten into the save format.
    pub fn to_data(&self) -> StatsData {
        StatsData {
            hp: self.hp,
            max_hp: self.max_hp,
            mp: self.mp,
            max_mp: self.max_mp,
            exp: self.exp,
            level: self.level,
            luck: self.luck,
        }
    }

    /// Overwrite every stat from saved data. Progression rules are kept.
    pub fn load_from_data(&mut self, data: &StatsData) {
        self.max_hp = data.max_hp;
        self.hp = data.hp.min(data.max_hp);
        self.max_mp = data.max_mp;
        self.mp = data.mp.min(data.max_mp);
        self.exp = data.exp;
        self.level = data.level;
        self.luck = data.luck;
    }
}

/// Serializable stats block of a player snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsData {
    pub hp: u32,
    pub max_hp: u32,
    pub mp: u32,
    pub max_mp: u32,
    pub exp: u32,
    pub level: u32,
    pub luck: u32,
}
