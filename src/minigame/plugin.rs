//! Mini-game plugin - starts a game from a chest and hands control back.

use bevy::prelude::*;

use super::session::{run_minigame, start_minigame, MiniGameSession};
use super::trivia::TriviaBank;
use crate::core::{GameSet, PlayState};
use crate::world::open_treasure;

/// Mini-game plugin - owns the `MiniGame` play state.
pub struct MiniGamePlugin;

impl Plugin for MiniGamePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MiniGameSession>()
            .init_resource::<TriviaBank>()
            .add_systems(
                Update,
                start_minigame.after(open_treasure).in_set(GameSet::Level),
            )
            .add_systems(
                Update,
                run_minigame
                    .after(GameSet::Input)
                    .before(GameSet::Present)
                    .run_if(in_state(PlayState::MiniGame)),
            );
    }
}
