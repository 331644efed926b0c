//! Core plugin that sets up game states, events, and frame ordering.

use bevy::prelude::*;

use super::clock::*;
use super::events::*;
use super::settings::GameSettings;
use super::states::*;

/// Ordered steps of one simulation tick.
///
/// `Player` through `Level` only run while exploring; `Input` and
/// `Present` run whenever a map is loaded.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum GameSet {
    /// Read devices into the `Controls` snapshot.
    Input,
    /// Player state machine, animation and movement.
    Player,
    /// Weapon and spell effects requested by the player.
    Actions,
    /// Enemy recoil, movement, animation, cooldowns and death.
    Enemies,
    /// Enemy status and actions against the player.
    Think,
    /// Overlap tests and damage application.
    Combat,
    /// Map transitions, treasure, respawn.
    Level,
    /// Viewport, draw list and HUD snapshot.
    Present,
}

/// Core plugin - must be added first as other plugins depend on it.
///
/// This plugin sets up:
/// - Game states (Loading, InGame) and the Exploring/MiniGame mode stack
/// - Global events (hits, player damage, experience, map changes)
/// - The millisecond game clock
/// - System-set ordering for one tick
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app
            // Initialize game states
            .init_state::<GameState>()
            .add_sub_state::<PlayState>()

            // Shared resources
            .init_resource::<GameClock>()
            .init_resource::<GameSettings>()

            // Register global events
            .add_event::<HitEvent>()
            .add_event::<PlayerDamageEvent>()
            .add_event::<ExperienceEvent>()
            .add_event::<PlayerAction>()
            .add_event::<MapChangeRequest>()
            .add_event::<PlayerDiedEvent>()
            .add_event::<TreasureOpenedEvent>()

            // One tick, in order
            .configure_sets(
                Update,
                (
                    GameSet::Input,
                    GameSet::Player,
                    GameSet::Actions,
                    GameSet::Enemies,
                    GameSet::Think,
                    GameSet::Combat,
                    GameSet::Level,
                    GameSet::Present,
                )
                    .chain()
                    .run_if(in_state(GameState::InGame)),
            )
            .configure_sets(
                Update,
                (
                    GameSet::Player,
                    GameSet::Actions,
                    GameSet::Enemies,
                    GameSet::Think,
                    GameSet::Combat,
                    GameSet::Level,
                )
                    .run_if(in_state(PlayState::Exploring)),
            )

            // Follow Bevy's clock when one is running (tests drive it by hand)
            .add_systems(PreUpdate, tick_game_clock.run_if(resource_exists::<Time>))

            // Loading state - data is read during Startup, so leave on the first frame
            .add_systems(Update, finish_loading.run_if(in_state(GameState::Loading)));
    }
}

/// Leave `Loading` once startup has run.
fn finish_loading(mut next_state: ResMut<NextState<GameState>>) {
    info!("Data loaded, entering game");
    next_state.set(GameState::InGame);
}
