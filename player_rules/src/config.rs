//! Rules configuration loaded from TOML.
//!
//! Every field has a default, so an empty document reproduces the stock
//! progression curve:
//!
//! ```toml
//! starting_location = "Unknown"
//! starting_gold = 0
//!
//! [starting_stats]
//! hp = 100
//! mp = 50
//! level = 1
//! luck = 5
//!
//! [progression]
//! exp_per_level = 100
//! hp_per_level = 10
//! mp_per_level = 5
//! luck_interval = 3
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Result, RulesError};

/// Top-level rules configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    pub starting_stats: StartingStats,
    pub progression: ProgressionRules,
    pub starting_location: String,
    pub starting_gold: u32,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            starting_stats: StartingStats::default(),
            progression: ProgressionRules::default(),
            starting_location: crate::components::UNKNOWN_LOCATION.to_string(),
            starting_gold: 0,
        }
    }
}

impl RulesConfig {
    /// Parse a configuration document.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config = toml::from_str(source)?;
        Ok(config)
    }

    /// Read and parse a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| RulesError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&source)?;
        tracing::debug!(path = %path.display(), "loaded rules config");
        Ok(config)
    }
}

/// Initial stat values for a fresh player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StartingStats {
    pub hp: u32,
    pub mp: u32,
    pub level: u32,
    pub luck: u32,
}

impl Default for StartingStats {
    fn default() -> Self {
        Self {
            hp: 100,
            mp: 50,
            level: 1,
            luck: 5,
        }
    }
}

/// Experience curve and per-level gains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressionRules {
    /// Experience needed to leave level `n` is `n * exp_per_level`.
    pub exp_per_level: u32,
    pub hp_per_level: u32,
    pub mp_per_level: u32,
    /// Luck grows by one on every level divisible by this. Zero disables it.
    pub luck_interval: u32,
}

impl Default for ProgressionRules {
    fn default() -> Self {
        Self {
            exp_per_level: 100,
            hp_per_level: 10,
            mp_per_level: 5,
            luck_interval: 3,
        }
    }
}

impl ProgressionRules {
    /// Experience required to advance from `level` to `level + 1`.
    pub fn threshold(&self, level: u32) -> u32 {
        level.saturating_mul(self.exp_per_level)
    }

    /// Like [`threshold`](Self::threshold), but `None` once the cost no
    /// longer fits in `u32`.
    pub fn checked_threshold(&self, level: u32) -> Option<u32> {
        level.checked_mul(self.exp_per_level)
    }

    pub fn grants_luck(&self, level: u32) -> bool {
        self.luck_interval != 0 && level % self.luck_interval == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = RulesConfig::from_toml_str("").unwrap();
        assert_eq!(config, RulesConfig::default());
        assert_eq!(config.starting_location, "Unknown");
        assert_eq!(config.progression.threshold(3), 300);
    }

    #[test]
    fn test_partial_override() {
        let config = RulesConfig::from_toml_str(
            r#"
            starting_gold = 40

            [progression]
            exp_per_level = 50
            "#,
        )
        .unwrap();

        assert_eq!(config.starting_gold, 40);
        assert_eq!(config.progression.exp_per_level, 50);
        assert_eq!(config.progression.hp_per_level, 10);
        assert_eq!(config.starting_stats.hp, 100);
    }

    #[test]
    fn test_invalid_toml_is_reported() {
        let err = RulesConfig::from_toml_str("starting_gold = \"lots\"").unwrap_err();
        assert!(matches!(err, RulesError::Toml(_)));
    }

    #[test]
    fn test_missing_file_is_reported() {
        let err = RulesConfig::load("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, RulesError::Io { .. }));
    }

    #[test]
    fn test_checked_threshold_reports_overflow() {
        let rules = ProgressionRules::default();
        assert_eq!(rules.checked_threshold(7), Some(700));
        assert_eq!(rules.checked_threshold(u32::MAX / 50), None);
        assert_eq!(rules.threshold(u32::MAX / 50), u32::MAX);
    }

    #[test]
    fn test_luck_interval() {
        let rules = ProgressionRules::default();
        assert!(rules.grants_luck(3));
        assert!(!rules.grants_luck(4));

        let never = ProgressionRules {
            luck_interval: 0,
            ..Default::default()
        };
        assert!(!never.grants_luck(3));
    }
}
