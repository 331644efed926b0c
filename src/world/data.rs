//! Map layouts (CSV grids) and the helpers that read game data from disk.

use bevy::prelude::*;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use super::error::DataLoadError;

/// Cell value meaning "nothing here".
pub const EMPTY_CELL: i32 = -1;

/// Rows of integer codes, `grid[row][column]`.
pub type Grid = Vec<Vec<i32>>;

/// Parse a comma-separated grid. Blank lines are skipped.
pub fn parse_grid(text: &str, source_name: &str) -> Result<Grid, DataLoadError> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .enumerate()
        .map(|(row, line)| {
            line.split(',')
                .enumerate()
                .map(|(column, cell)| {
                    cell.trim()
                        .parse::<i32>()
                        .map_err(|_| DataLoadError::MalformedCell {
                            source_name: source_name.to_string(),
                            row,
                            column,
                            value: cell.trim().to_string(),
                        })
                })
                .collect()
        })
        .collect()
}

/// The grid layers a map is made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MapLayer {
    /// Invisible walls.
    Boundary,
    /// Triggers holding the destination map id.
    Transitions,
    /// Visible decor that blocks movement.
    Objects,
    /// Player spawn marker and enemy spawn codes.
    Entities,
    /// Chests.
    Treasure,
}

impl MapLayer {
    pub const ALL: [MapLayer; 5] = [
        MapLayer::Boundary,
        MapLayer::Transitions,
        MapLayer::Objects,
        MapLayer::Entities,
        MapLayer::Treasure,
    ];

    /// Layer name used in `level_{id}_{name}.csv`.
    pub fn file_name(&self) -> &'static str {
        match self {
            MapLayer::Boundary => "FloorBlocks",
            MapLayer::Transitions => "MapTransition",
            MapLayer::Objects => "Objects",
            MapLayer::Entities => "Entities",
            MapLayer::Treasure => "Treasure",
        }
    }

    /// Objects and treasure may be absent from a map.
    pub fn is_required(&self) -> bool {
        matches!(
            self,
            MapLayer::Boundary | MapLayer::Transitions | MapLayer::Entities
        )
    }
}

/// All layers of one map, validated to share dimensions.
#[derive(Debug, Clone, PartialEq)]
pub struct MapLayout {
    pub id: u32,
    pub columns: usize,
    pub rows: usize,
    layers: HashMap<MapLayer, Grid>,
}

impl MapLayout {
    /// Build from parsed layers. Missing required layers and dimension
    /// mismatches are errors.
    pub fn from_layers(id: u32, layers: HashMap<MapLayer, Grid>) -> Result<Self, DataLoadError> {
        let boundary = layers
            .get(&MapLayer::Boundary)
            .ok_or_else(|| DataLoadError::FileNotFound(layer_file_name(id, MapLayer::Boundary)))?;
        let rows = boundary.len();
        let columns = boundary.iter().map(Vec::len).max().unwrap_or(0);

        for layer in MapLayer::ALL {
            match layers.get(&layer) {
                Some(grid) => {
                    let actual_columns = grid.iter().map(Vec::len).max().unwrap_or(0);
                    if grid.len() != rows || actual_columns != columns {
                        return Err(DataLoadError::GridMismatch {
                            layer: layer.file_name().to_string(),
                            expected_columns: columns,
                            expected_rows: rows,
                            actual_columns,
                            actual_rows: grid.len(),
                        });
                    }
                }
                None if layer.is_required() => {
                    return Err(DataLoadError::FileNotFound(layer_file_name(id, layer)));
                }
                None => {}
            }
        }

        Ok(Self {
            id,
            columns,
            rows,
            layers,
        })
    }

    pub fn layer(&self, layer: MapLayer) -> Option<&Grid> {
        self.layers.get(&layer)
    }

    /// Non-empty cells of a layer as `(row, column, code)`.
    pub fn cells(&self, layer: MapLayer) -> impl Iterator<Item = (usize, usize, i32)> + '_ {
        self.layer(layer).into_iter().flat_map(|grid| {
            grid.iter().enumerate().flat_map(|(row, cells)| {
                cells
                    .iter()
                    .enumerate()
                    .filter(|(_, code)| **code != EMPTY_CELL)
                    .map(move |(column, code)| (row, column, *code))
            })
        })
    }

    /// Map size in pixels.
    pub fn pixel_size(&self, tile_size: f32) -> Vec2 {
        Vec2::new(self.columns as f32, self.rows as f32) * tile_size
    }
}

/// Every loaded map, by id.
#[derive(Resource, Debug, Default)]
pub struct MapRegistry {
    pub maps: HashMap<u32, MapLayout>,
}

impl MapRegistry {
    pub fn get(&self, id: u32) -> Result<&MapLayout, DataLoadError> {
        self.maps.get(&id).ok_or(DataLoadError::UnknownMap(id))
    }

    pub fn insert(&mut self, layout: MapLayout) {
        self.maps.insert(layout.id, layout);
    }
}

/// The map the player is on and the one it came from.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CurrentMap {
    pub id: u32,
    pub from: Option<u32>,
}

pub fn layer_file_name(id: u32, layer: MapLayer) -> String {
    format!("level_{id}_{}.csv", layer.file_name())
}

fn read_file(path: &Path) -> Result<String, DataLoadError> {
    if !path.exists() {
        return Err(DataLoadError::FileNotFound(path.display().to_string()));
    }
    fs::read_to_string(path).map_err(|e| DataLoadError::ReadError {
        path: path.display().to_string(),
        details: e.to_string(),
    })
}

/// Read and deserialize a RON file.
pub fn read_ron<T: DeserializeOwned>(path: &Path) -> Result<T, DataLoadError> {
    let contents = read_file(path)?;
    ron::from_str(&contents).map_err(|e| DataLoadError::ParseError {
        path: path.display().to_string(),
        details: e.to_string(),
    })
}

/// Read every layer of map `id` from `dir`.
pub fn load_map_layout(dir: &Path, id: u32) -> Result<MapLayout, DataLoadError> {
    let mut layers = HashMap::new();
    for layer in MapLayer::ALL {
        let path = dir.join(layer_file_name(id, layer));
        match read_file(&path) {
            Ok(text) => {
                layers.insert(layer, parse_grid(&text, &path.display().to_string())?);
            }
            Err(DataLoadError::FileNotFound(_)) if !layer.is_required() => {}
            Err(e) => return Err(e),
        }
    }
    MapLayout::from_layers(id, layers)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(text: &str) -> Grid {
        parse_grid(text, "test").expect("valid grid")
    }

    #[test]
    fn parses_signed_cells() {
        assert_eq!(grid("-1,395\n12,-1\n"), vec![vec![-1, 395], vec![12, -1]]);
    }

    #[test]
    fn rejects_malformed_cells() {
        let err = parse_grid("-1,x", "level_0_Entities.csv").unwrap_err();
        assert!(matches!(err, DataLoadError::MalformedCell { column: 1, .. }));
    }

    #[test]
    fn optional_layers_may_be_missing() {
        let layers = HashMap::from([
            (MapLayer::Boundary, grid("-1,-1\n-1,-1")),
            (MapLayer::Transitions, grid("-1,1\n-1,-1")),
            (MapLayer::Entities, grid("394,-1\n-1,-1")),
        ]);
        let layout = MapLayout::from_layers(0, layers).expect("valid layout");
        assert_eq!((layout.columns, layout.rows), (2, 2));
        assert_eq!(layout.cells(MapLayer::Transitions).collect::<Vec<_>>(), vec![(0, 1, 1)]);
        assert_eq!(layout.cells(MapLayer::Treasure).count(), 0);
    }

    #[test]
    fn mismatched_layers_are_rejected() {
        let layers = HashMap::from([
            (MapLayer::Boundary, grid("-1,-1\n-1,-1")),
            (MapLayer::Transitions, grid("-1,1")),
            (MapLayer::Entities, grid("394,-1\n-1,-1")),
        ]);
        assert!(matches!(
            MapLayout::from_layers(0, layers),
            Err(DataLoadError::GridMismatch { .. })
        ));
    }

    #[test]
    fn missing_required_layer_is_an_error() {
        let layers = HashMap::from([(MapLayer::Boundary, grid("-1"))]);
        assert!(matches!(
            MapLayout::from_layers(3, layers),
            Err(DataLoadError::FileNotFound(name)) if name == "level_3_MapTransition.csv"
        ));
    }
}
