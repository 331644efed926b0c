//! Headless game fixture shared by the integration tests.
#![allow(dead_code)]

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use std::collections::HashMap;

use magispeech::core::GameClock;
use magispeech::player::{Controls, Player};
use magispeech::world::{Grid, MapLayer, MapLayout, MapRegistry};
use magispeech::SimulationPlugin;

pub const MAP_SIDE: usize = 10;

/// A `MAP_SIDE` square grid with the given `(row, column, code)` cells set.
pub fn grid_with(cells: &[(usize, usize, i32)]) -> Grid {
    let mut grid = vec![vec![-1; MAP_SIDE]; MAP_SIDE];
    for &(row, column, code) in cells {
        grid[row][column] = code;
    }
    grid
}

/// Builder for a test map.
#[derive(Default)]
pub struct MapBuilder {
    layers: HashMap<MapLayer, Vec<(usize, usize, i32)>>,
}

impl MapBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cell(mut self, layer: MapLayer, row: usize, column: usize, code: i32) -> Self {
        self.layers.entry(layer).or_default().push((row, column, code));
        self
    }

    pub fn build(self, id: u32) -> MapLayout {
        let mut layers: HashMap<MapLayer, Grid> = self
            .layers
            .iter()
            .map(|(layer, cells)| (*layer, grid_with(cells)))
            .collect();
        for layer in [MapLayer::Boundary, MapLayer::Transitions, MapLayer::Entities] {
            layers.entry(layer).or_insert_with(|| grid_with(&[]));
        }
        MapLayout::from_layers(id, layers).expect("test map is well formed")
    }
}

/// A running simulation with maps already built.
pub struct TestGame {
    pub app: App,
}

impl TestGame {
    /// Load `maps`, enter the game and build the start map (id 0).
    pub fn new(maps: Vec<MapLayout>) -> Self {
        let mut app = App::new();
        app.add_plugins(StatesPlugin).add_plugins(SimulationPlugin);

        let mut registry = MapRegistry::default();
        for map in maps {
            registry.insert(map);
        }
        app.insert_resource(registry);
        app.insert_resource(GameClock::new(1_000));

        // Loading -> InGame, then OnEnter builds the map and the first tick runs
        app.update();
        app.update();
        Self { app }
    }

    pub fn update(&mut self) {
        self.app.update();
    }

    /// Move the clock forward, then run one tick.
    pub fn advance(&mut self, ms: u64) {
        self.app.world_mut().resource_mut::<GameClock>().advance_by(ms);
        self.app.update();
    }

    pub fn set_controls(&mut self, controls: Controls) {
        self.app.insert_resource(controls);
    }

    pub fn player(&mut self) -> Entity {
        self.app
            .world_mut()
            .query_filtered::<Entity, With<Player>>()
            .single(self.app.world())
    }

    pub fn get<T: Component>(&mut self, entity: Entity) -> &T {
        self.app
            .world()
            .get::<T>(entity)
            .expect("entity has the component")
    }

    pub fn get_mut<T: Component>(&mut self, entity: Entity) -> Mut<'_, T> {
        self.app
            .world_mut()
            .get_mut::<T>(entity)
            .expect("entity has the component")
    }

    pub fn resource<R: Resource>(&self) -> &R {
        self.app.world().resource::<R>()
    }

    /// All entities with component `T`.
    pub fn entities_with<T: Component>(&mut self) -> Vec<Entity> {
        self.app
            .world_mut()
            .query_filtered::<Entity, With<T>>()
            .iter(self.app.world())
            .collect()
    }
}
