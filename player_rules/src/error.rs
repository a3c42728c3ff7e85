//! Error types for the player rules crate.

use std::path::PathBuf;

use thiserror::Error;

use crate::entities::DiceId;

/// Errors raised while reading configuration, catalogs or snapshots.
#[derive(Debug, Error)]
pub enum RulesError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid snapshot: {0}")]
    Snapshot(#[from] serde_json::Error),

    #[error("dice '{0}' is defined more than once")]
    DuplicateDice(DiceId),
}

pub type Result<T> = std::result::Result<T, RulesError>;
