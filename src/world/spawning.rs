//! Entity spawning functions for level construction.

use bevy::prelude::*;

use super::components::{LevelEntity, Tile, TileKind, TransitionTrigger, Treasure};
use crate::body::{Bounds, Drawable, Obstacle, SpriteKey};

/// Tile hitboxes are a little shorter than their rect.
const TILE_HITBOX_INFLATION: Vec2 = Vec2::new(0.0, -10.0);

/// Image key of a chest.
pub fn treasure_sprite(chest: i32, opened: bool) -> SpriteKey {
    let state = if opened { "opened" } else { "closed" };
    SpriteKey(format!("treasure/{chest}/{state}"))
}

/// Spawn one tile with the tags its kind calls for.
pub fn spawn_tile(commands: &mut Commands, kind: TileKind, rect: Rect) -> Entity {
    let mut entity = commands.spawn((
        Tile { kind },
        Bounds::new(rect, TILE_HITBOX_INFLATION),
        LevelEntity,
    ));

    match kind {
        TileKind::Boundary => {
            entity.insert(Obstacle);
        }
        TileKind::Object { code } => {
            entity.insert((Obstacle, Drawable, SpriteKey(format!("objects/{code}"))));
        }
        TileKind::Transition { destination } => {
            entity.insert(TransitionTrigger { destination });
        }
        TileKind::Treasure { chest, opened } => {
            entity.insert((Obstacle, Drawable, treasure_sprite(chest, opened)));
            if !opened {
                entity.insert(Treasure);
            }
        }
    }

    entity.id()
}
