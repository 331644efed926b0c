//! World module - maps, tiles, level building, and transitions.

mod builder;
mod components;
mod data;
mod error;
mod loading;
mod plugin;
mod spawning;

pub use builder::{arrival_position, plan_level, spawn_level, tile_rect, EnemyPlan, LevelPlan, TilePlan};
pub use components::*;
pub use data::{
    layer_file_name, load_map_layout, parse_grid, read_ron, CurrentMap, Grid, MapLayer, MapLayout,
    MapRegistry, EMPTY_CELL,
};
pub use error::DataLoadError;
pub use loading::GameDataPlugin;
pub use plugin::{open_treasure, WorldPlugin};
