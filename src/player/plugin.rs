//! Player plugin - input, state machine, and movement.

use bevy::prelude::*;

use super::components::PlayerStats;
use super::controls::{read_keyboard, Controls};
use super::systems::*;
use crate::core::GameSet;

/// Player plugin - handles input and the per-tick player update.
pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Controls>()
            .init_resource::<PlayerStats>()
            // Headless runs fill `Controls` themselves
            .add_systems(
                Update,
                read_keyboard
                    .in_set(GameSet::Input)
                    .run_if(resource_exists::<ButtonInput<KeyCode>>),
            )
            .add_systems(
                Update,
                (
                    player_input,
                    player_cooldowns,
                    update_player_status,
                    animate_player,
                    move_player,
                    regenerate_energy,
                )
                    .chain()
                    .in_set(GameSet::Player),
            );
    }
}
