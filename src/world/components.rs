//! Tiles and level membership tags.

use bevy::prelude::*;

/// What a map cell turned into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileKind {
    /// Invisible wall.
    Boundary,
    /// Visible decor; `code` selects the image.
    Object { code: i32 },
    /// Walking in loads `destination`.
    Transition { destination: u32 },
    /// Chest; `chest` selects the image.
    Treasure { chest: i32, opened: bool },
}

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub kind: TileKind,
}

/// Despawned when the map changes.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct LevelEntity;

/// Map-change trigger.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionTrigger {
    pub destination: u32,
}

/// Unopened chest. Removed once opened.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Treasure;
