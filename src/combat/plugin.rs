//! Combat plugin - weapon and spell effects, hits, and player damage.

use bevy::prelude::*;

use super::data::CombatRegistry;
use super::effects;
use super::systems;
use crate::core::{GameSet, GameState};

/// Combat plugin - handles attacks, spells and damage.
pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CombatRegistry>()
            // Effects requested by the player this frame
            .add_systems(
                Update,
                (effects::handle_player_actions, effects::animate_spell_effects)
                    .chain()
                    .in_set(GameSet::Actions),
            )
            // Damage resolution
            .add_systems(
                Update,
                (
                    systems::resolve_attacks,
                    (systems::apply_player_damage, systems::check_player_death).chain(),
                )
                    .in_set(GameSet::Combat),
            )
            // Experience can come from the world or from a mini-game
            .add_systems(
                Update,
                systems::award_experience
                    .after(GameSet::Combat)
                    .before(GameSet::Level)
                    .run_if(in_state(GameState::InGame)),
            );
    }
}
