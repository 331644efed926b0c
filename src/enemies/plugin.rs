//! Enemy plugin - registers all enemy systems.

use bevy::prelude::*;

use super::ai;
use super::data::EnemyRegistry;
use crate::combat::resolve_attacks;
use crate::core::GameSet;

/// Enemy plugin - handles the enemy state machine, hits and death.
pub struct EnemyPlugin;

impl Plugin for EnemyPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<EnemyRegistry>()
            // Own update, after the player moved
            .add_systems(
                Update,
                (
                    ai::enemy_hit_reaction,
                    ai::move_enemies,
                    ai::animate_enemies,
                    ai::enemy_cooldowns,
                    ai::enemy_death,
                )
                    .chain()
                    .in_set(GameSet::Enemies),
            )
            // Decide and act against the player
            .add_systems(
                Update,
                (ai::update_enemy_status, ai::enemy_actions)
                    .chain()
                    .in_set(GameSet::Think),
            )
            .add_systems(
                Update,
                ai::take_hits.after(resolve_attacks).in_set(GameSet::Combat),
            );
    }
}
