//! # Player Rules
//!
//! Everything that makes up the player's progression in Dicetale: stats and
//! leveling, inventory and dice ownership, equipment, timed status effects,
//! location, and the snapshot format used to save and load all of it.
//!
//! This crate knows nothing about dialogue. Hosts mutate a [`Player`]
//! directly or through `dialogue_core` choice effects.

pub mod components;
pub mod config;
pub mod entities;
pub mod error;
pub mod mechanics;
pub mod player;
pub mod shop;

pub use components::*;
pub use config::*;
pub use entities::*;
pub use error::RulesError;
pub use mechanics::*;
pub use player::*;
pub use shop::*;
