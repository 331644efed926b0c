//! Startup loading of RON tables and CSV maps from `assets/`.
//!
//! Every table has built-in defaults; a missing or broken file is logged
//! and the defaults stay in place. A map that fails to load is skipped.

use bevy::prelude::*;
use serde::de::DeserializeOwned;
use std::path::Path;

use super::data::{load_map_layout, read_ron, MapRegistry};
use super::error::DataLoadError;
use crate::combat::CombatRegistry;
use crate::core::GameSettings;
use crate::enemies::EnemyRegistry;
use crate::minigame::TriviaBank;
use crate::player::PlayerStats;

const DATA_DIR: &str = "assets/data";
const MAP_DIR: &str = "assets/map";

/// Reads game data from disk during `Startup`.
///
/// Left out of headless runs, which insert their own resources.
pub struct GameDataPlugin;

impl Plugin for GameDataPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Startup,
            (
                load_table::<GameSettings>("settings.ron"),
                load_table::<PlayerStats>("player.ron"),
                load_table::<EnemyRegistry>("enemies.ron"),
                load_table::<CombatRegistry>("combat.ron"),
                load_table::<TriviaBank>("trivia.ron"),
                load_maps,
            )
                .chain(),
        );
    }
}

/// System loading one RON table into its resource.
fn load_table<T: Resource + DeserializeOwned>(
    file: &'static str,
) -> impl FnMut(Commands) {
    move |mut commands: Commands| {
        let path = Path::new(DATA_DIR).join(file);
        match read_ron::<T>(&path) {
            Ok(table) => {
                info!("Loaded {}", path.display());
                commands.insert_resource(table);
            }
            Err(DataLoadError::FileNotFound(_)) => {
                info!("{} not found, using built-in values", path.display());
            }
            Err(e) => {
                warn!("{}; using built-in values", e);
            }
        }
    }
}

/// Load every map listed in the settings.
fn load_maps(settings: Res<GameSettings>, mut registry: ResMut<MapRegistry>) {
    let dir = Path::new(MAP_DIR);
    for &id in &settings.maps {
        match load_map_layout(dir, id) {
            Ok(layout) => {
                info!("Loaded map {} ({}x{})", id, layout.columns, layout.rows);
                registry.insert(layout);
            }
            Err(e) => error!("Failed to load map {}: {}", id, e),
        }
    }
    info!("Loaded {} map(s)", registry.maps.len());
}
