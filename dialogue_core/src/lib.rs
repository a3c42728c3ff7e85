//! # Dialogue Core
//!
//! Dialogue traversal for Dicetale. This crate loads authored dialogue
//! content, walks it as a branching state machine, and hands choice
//! effects to the `player_rules` player.
//!
//! ## Core Components
//!
//! - **graph**: Dialogue nodes, choices and the content loader
//! - **engine**: The advance/select state machine
//! - **events**: What the presentation layer is told to show
//! - **effects**: Player changes attached to choices
//! - **session**: The context object pairing a player with a dialogue
//!
//! ## Design Philosophy
//!
//! - **Synchronous**: Every command completes before the next is accepted
//! - **Event-Driven**: The engine queues events; the host decides how to render them
//! - **Forgiving**: Bad content and stray input never crash a session

pub mod effects;
pub mod engine;
pub mod events;
pub mod graph;
pub mod session;

pub use effects::*;
pub use engine::*;
pub use events::*;
pub use graph::*;
pub use session::*;
