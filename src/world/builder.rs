//! Level construction: a pure plan from a layout, then spawning it.

use bevy::prelude::*;

use super::components::TileKind;
use super::data::{MapLayer, MapLayout};
use super::error::DataLoadError;
use super::spawning::spawn_tile;
use crate::body::RectExt;
use crate::core::{Arrival, GameSettings};
use crate::enemies::{spawn_enemy, EnemyDefinition, EnemyRegistry};

/// Chest rects are grown by this much so the player can reach them.
const TREASURE_INFLATION: f32 = 15.0;

/// A tile to spawn.
#[derive(Debug, Clone, PartialEq)]
pub struct TilePlan {
    pub kind: TileKind,
    pub rect: Rect,
}

/// An enemy to spawn.
#[derive(Debug, Clone, PartialEq)]
pub struct EnemyPlan {
    pub species: String,
    pub definition: EnemyDefinition,
    pub top_left: Vec2,
}

/// Everything a map turns into, before touching the ECS.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LevelPlan {
    pub tiles: Vec<TilePlan>,
    pub enemies: Vec<EnemyPlan>,
    /// Top-left of the player marker cell, if the map has one.
    pub player_spawn: Option<Vec2>,
    /// Top-left next to the trigger leading back to the origin map.
    pub arrival: Option<Vec2>,
}

impl LevelPlan {
    /// Where the player's display rect goes.
    ///
    /// Arrival trigger first, then the spawn marker, then wherever the player
    /// already was.
    pub fn player_position(&self, previous: Vec2) -> Vec2 {
        self.arrival.or(self.player_spawn).unwrap_or(previous)
    }
}

/// Player top-left when arriving through the trigger at `cell`.
///
/// Left, right and top triggers put the player one step inside the map.
/// Anything else is treated as a bottom trigger, so the player lands one
/// step above it.
pub fn arrival_position(cell: Vec2, map_size: Vec2, tile_size: f32) -> Vec2 {
    let Vec2 { x, y } = cell;
    if x == 0.0 {
        Vec2::new(x + tile_size + 20.0, y)
    } else if x + tile_size >= map_size.x {
        Vec2::new(x - tile_size - 1.0, y)
    } else if y == 0.0 {
        Vec2::new(x, y + tile_size + 1.0)
    } else {
        Vec2::new(x, y - tile_size - 1.0)
    }
}

/// Rect of a tile whose cell's top-left is `cell`.
pub fn tile_rect(kind: TileKind, cell: Vec2, tile_size: f32) -> Rect {
    match kind {
        // Tall objects stand on their cell
        TileKind::Object { .. } => Rect::from_top_left(
            Vec2::new(cell.x, cell.y - tile_size),
            Vec2::new(tile_size, tile_size * 2.0),
        ),
        TileKind::Treasure { .. } => Rect::from_top_left(cell, Vec2::splat(tile_size))
            .inflated(TREASURE_INFLATION, TREASURE_INFLATION),
        TileKind::Boundary | TileKind::Transition { .. } => {
            Rect::from_top_left(cell, Vec2::splat(tile_size))
        }
    }
}

/// Turn a layout into a plan. Unknown entity codes and species are errors.
pub fn plan_level(
    layout: &MapLayout,
    settings: &GameSettings,
    registry: &EnemyRegistry,
    arrival: Arrival,
) -> Result<LevelPlan, DataLoadError> {
    let tile_size = settings.tile_size;
    let map_size = layout.pixel_size(tile_size);
    let cell_position =
        |row: usize, column: usize| Vec2::new(column as f32, row as f32) * tile_size;

    let mut plan = LevelPlan::default();

    for (row, column, _) in layout.cells(MapLayer::Boundary) {
        let kind = TileKind::Boundary;
        plan.tiles.push(TilePlan {
            kind,
            rect: tile_rect(kind, cell_position(row, column), tile_size),
        });
    }

    for (row, column, code) in layout.cells(MapLayer::Objects) {
        let kind = TileKind::Object { code };
        plan.tiles.push(TilePlan {
            kind,
            rect: tile_rect(kind, cell_position(row, column), tile_size),
        });
    }

    for (row, column, code) in layout.cells(MapLayer::Transitions) {
        let destination = u32::try_from(code).map_err(|_| DataLoadError::MalformedCell {
            source_name: MapLayer::Transitions.file_name().to_string(),
            row,
            column,
            value: code.to_string(),
        })?;
        let cell = cell_position(row, column);
        let kind = TileKind::Transition { destination };
        plan.tiles.push(TilePlan {
            kind,
            rect: tile_rect(kind, cell, tile_size),
        });
        // Several triggers may lead back; the last one wins
        if arrival == Arrival::From(destination) {
            plan.arrival = Some(arrival_position(cell, map_size, tile_size));
        }
    }

    for (row, column, code) in layout.cells(MapLayer::Entities) {
        let cell = cell_position(row, column);
        if code == settings.player_spawn_code {
            plan.player_spawn = Some(cell);
            continue;
        }
        let species = settings
            .enemy_spawn_codes
            .get(&code)
            .ok_or(DataLoadError::UnknownSpawnCode { code, row, column })?;
        let definition = registry
            .get(species)
            .ok_or_else(|| DataLoadError::UnknownSpecies(species.clone()))?;
        plan.enemies.push(EnemyPlan {
            species: species.clone(),
            definition: definition.clone(),
            top_left: cell,
        });
    }

    for (row, column, chest) in layout.cells(MapLayer::Treasure) {
        let kind = TileKind::Treasure {
            chest,
            opened: false,
        };
        plan.tiles.push(TilePlan {
            kind,
            rect: tile_rect(kind, cell_position(row, column), tile_size),
        });
    }

    Ok(plan)
}

/// Spawn every tile and enemy of a plan.
pub fn spawn_level(commands: &mut Commands, plan: &LevelPlan, settings: &GameSettings) {
    for tile in &plan.tiles {
        spawn_tile(commands, tile.kind, tile.rect);
    }
    for enemy in &plan.enemies {
        spawn_enemy(
            commands,
            &enemy.species,
            &enemy.definition,
            enemy.top_left,
            settings,
        );
    }
}
