//! Game state definitions that control the overall flow of the game.
//!
//! States determine which systems run at any given time. The simulation
//! sets only advance while exploring; an open mini-game owns control until
//! it hands back.

use bevy::prelude::*;

/// Main game states - controls overall game flow.
///
/// - Start in `Loading` while data tables and maps are read
/// - Enter `InGame` once everything needed for the first map exists
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum GameState {
    /// Initial state - loading settings, tables and map layouts
    #[default]
    Loading,
    /// Active gameplay
    InGame,
}

/// Mode stack for gameplay - only active when `GameState::InGame`.
///
/// - `Exploring`: movement, combat, map transitions
/// - `MiniGame`: a treasure mini-game has control, the world is frozen
#[derive(SubStates, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
#[source(GameState = GameState::InGame)]
pub enum PlayState {
    /// Normal gameplay
    #[default]
    Exploring,
    /// A mini-game session is running
    MiniGame,
}
