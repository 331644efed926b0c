//! Enemies module - enemy entities, state machine, and spawning.

mod ai;
mod components;
mod data;
mod plugin;
mod spawning;

pub use ai::{distance_direction, next_status};
pub use components::*;
pub use data::{EnemyDefinition, EnemyRegistry};
pub use plugin::EnemyPlugin;
pub use spawning::spawn_enemy;
