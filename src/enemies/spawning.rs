//! Enemy construction from a species definition.

use bevy::prelude::*;

use super::components::{Enemy, EnemyBrain, EnemyStatus, Species};
use super::data::EnemyDefinition;
use crate::body::{Bounds, Drawable, FrameAnimation, Motion, RectExt, SpriteKey};
use crate::combat::{Damageable, Health, Vulnerability};
use crate::core::GameSettings;
use crate::world::LevelEntity;

/// Hitbox inflation relative to the display rect.
const ENEMY_HITBOX_INFLATION: Vec2 = Vec2::new(0.0, -10.0);

/// Spawn an enemy of `species` with its display rect's top-left at `top_left`.
pub fn spawn_enemy(
    commands: &mut Commands,
    species: &str,
    definition: &EnemyDefinition,
    top_left: Vec2,
    settings: &GameSettings,
) -> Entity {
    let status = EnemyStatus::default();
    commands
        .spawn((
            (
                Enemy,
                Species(species.to_string()),
                definition.to_stats(),
                status,
                EnemyBrain::default(),
                Health::new(definition.health),
                Vulnerability::new(settings.timings.enemy_invincibility),
                Damageable,
            ),
            Bounds::new(
                Rect::from_top_left(top_left, Vec2::splat(settings.tile_size)),
                ENEMY_HITBOX_INFLATION,
            ),
            Motion::new(definition.speed),
            FrameAnimation::new(settings.animation_speed),
            Drawable,
            SpriteKey(format!("enemies/{species}/{}/0", status.as_str())),
            LevelEntity,
            Name::new(format!("Enemy ({species})")),
        ))
        .id()
}
