//! Core game module - states, events, clock and settings.
//!
//! This module provides the foundation that all other game systems build upon.

mod clock;
mod events;
mod plugin;
mod settings;
mod states;

pub use clock::*;
pub use events::*;
pub use plugin::{CorePlugin, GameSet};
pub use settings::*;
pub use states::*;
