//! Player module - player entity, controls, and state machine.

mod components;
mod controls;
mod plugin;
mod systems;

pub use components::*;
pub use controls::Controls;
pub use plugin::PlayerPlugin;
pub use systems::{spawn_player, PLAYER_SIZE};
