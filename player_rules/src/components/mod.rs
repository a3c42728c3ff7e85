//! Components of the player aggregate.

mod equipment;
mod inventory;
mod location;
mod stats;
mod status_effects;

pub use equipment::*;
pub use inventory::*;
pub use location::*;
pub use stats::*;
pub use status_effects::*;
