//! MagiSpeech - a 2D top-down action-adventure in Bevy.
//!
//! A player explores tile maps, fights enemies in real time, walks between
//! connected maps and opens chests that start small puzzle games.
//!
//! # Architecture
//!
//! The game is organized into plugins, each handling a specific aspect:
//!
//! - **Core**: Game states, global events, clock, settings, tick ordering
//! - **Body**: Rectangles, hitboxes, axis-separated collision, animation
//! - **Player**: Controls and the player state machine
//! - **Enemies**: Species table and the enemy state machine
//! - **Combat**: Weapons, spells, hits, damage
//! - **World**: Map layouts, level building, transitions, treasure
//! - **MiniGame**: Sliding puzzle and trivia quiz
//! - **Rendering**: Camera offset, Y-sorted draw list, HUD, sprites

pub mod body;
pub mod combat;
pub mod core;
pub mod enemies;
pub mod minigame;
pub mod player;
pub mod rendering;
pub mod world;

use bevy::prelude::*;

/// The whole simulation, without disk access or a window.
///
/// Needs `StatesPlugin` (part of `DefaultPlugins`).
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app
            // Core systems (must be first)
            .add_plugins(core::CorePlugin)
            .add_plugins(player::PlayerPlugin)
            .add_plugins(combat::CombatPlugin)
            .add_plugins(enemies::EnemyPlugin)
            .add_plugins(world::WorldPlugin)
            .add_plugins(minigame::MiniGamePlugin)
            .add_plugins(rendering::PresentPlugin);
    }
}

/// Main game plugin: the simulation plus data files and rendering.
pub struct MagiSpeechPlugin;

impl Plugin for MagiSpeechPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(SimulationPlugin)
            .add_plugins(world::GameDataPlugin)
            .add_plugins(rendering::RenderingPlugin);
    }
}
