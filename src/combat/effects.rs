//! Weapon hitboxes and spell effects spawned on the player's request.

use bevy::prelude::*;

use super::components::*;
use super::data::{CombatRegistry, SpellKind};
use crate::body::{Bounds, Drawable, FrameAnimation, RectExt, SpriteKey};
use crate::core::{GameSettings, PlayerAction};
use crate::player::{Energy, Facing, Player, PlayerStatus};
use crate::world::LevelEntity;

/// Vertical offset of a sideways weapon from the player's center.
const SIDE_GRIP_OFFSET: f32 = 16.0;
/// Horizontal offset of an up/down weapon from the player's center.
const VERTICAL_GRIP_OFFSET: f32 = -10.0;

/// Weapon rectangle attached to the side of `player` it is facing.
///
/// `size` is the sideways size; it is swapped when facing up or down.
pub fn weapon_rect(player: Rect, facing: Facing, size: Vec2) -> Rect {
    let center = player.center();
    match facing {
        Facing::Right => Rect::from_top_left(
            Vec2::new(player.max.x, center.y + SIDE_GRIP_OFFSET - size.y / 2.0),
            size,
        ),
        Facing::Left => Rect::from_top_left(
            Vec2::new(player.min.x - size.x, center.y + SIDE_GRIP_OFFSET - size.y / 2.0),
            size,
        ),
        Facing::Down => Rect::from_top_left(
            Vec2::new(center.x + VERTICAL_GRIP_OFFSET - size.y / 2.0, player.max.y),
            Vec2::new(size.y, size.x),
        ),
        Facing::Up => Rect::from_top_left(
            Vec2::new(center.x + VERTICAL_GRIP_OFFSET - size.y / 2.0, player.min.y - size.x),
            Vec2::new(size.y, size.x),
        ),
    }
}

/// Centers of the flames a flame spell places in front of the player.
///
/// One flame per tile out to `reach`, each jittered by up to a third of a
/// tile on both axes.
pub fn flame_positions(
    origin: Vec2,
    facing: Facing,
    reach: u32,
    tile_size: f32,
    rng: &mut impl rand::Rng,
) -> Vec<Vec2> {
    let step = facing.unit();
    let jitter = tile_size / 3.0;
    (1..=reach)
        .map(|i| {
            let along = origin + step * (i as f32 * tile_size);
            along
                + Vec2::new(
                    rng.gen_range(-jitter..jitter),
                    rng.gen_range(-jitter..jitter),
                )
        })
        .collect()
}

/// Spawn, remove and cast in response to `PlayerAction` events.
pub fn handle_player_actions(
    mut commands: Commands,
    mut actions: EventReader<PlayerAction>,
    mut player_query: Query<(&Bounds, &PlayerStatus, &mut Health, &mut Energy), With<Player>>,
    weapons: Query<Entity, With<WeaponAttack>>,
    registry: Res<CombatRegistry>,
    settings: Res<GameSettings>,
) {
    let Ok((bounds, status, mut health, mut energy)) = player_query.get_single_mut() else {
        actions.clear();
        return;
    };

    for action in actions.read() {
        match *action {
            PlayerAction::MeleeStarted { weapon: index } => {
                let Some(weapon) = registry.weapon(index) else {
                    warn!("No weapon {}, attack has no hitbox", index);
                    continue;
                };
                let size = Vec2::new(weapon.size.0, weapon.size.1);
                let rect = weapon_rect(bounds.rect, status.facing, size);
                commands.spawn((
                    Bounds::new(rect, Vec2::ZERO),
                    WeaponAttack { weapon: index },
                    Damaging(AttackKind::Weapon),
                    Drawable,
                    SpriteKey(format!("weapons/{}/{}", weapon.name, status.facing.as_str())),
                    LevelEntity,
                ));
            }
            PlayerAction::AttackEnded => {
                for entity in weapons.iter() {
                    commands.entity(entity).despawn_recursive();
                }
            }
            PlayerAction::SpellCast {
                spell,
                strength,
                cost,
            } => {
                let Some(definition) = registry.spell(spell) else {
                    continue;
                };
                if energy.current < cost {
                    debug!("Not enough energy for {}", definition.name);
                    continue;
                }
                energy.spend(cost);

                match definition.kind {
                    SpellKind::Heal => {
                        health.heal(strength);
                        let rect = Rect::from_center_size(
                            bounds.center(),
                            Vec2::splat(settings.tile_size),
                        );
                        spawn_spell_effect(
                            &mut commands,
                            rect,
                            &definition.name,
                            settings.frames.heal,
                            settings.animation_speed,
                            None,
                        );
                    }
                    SpellKind::Flame => {
                        let mut rng = rand::thread_rng();
                        for center in flame_positions(
                            bounds.center(),
                            status.facing,
                            settings.flame_reach,
                            settings.tile_size,
                            &mut rng,
                        ) {
                            let rect =
                                Rect::from_center_size(center, Vec2::splat(settings.tile_size));
                            spawn_spell_effect(
                                &mut commands,
                                rect,
                                &definition.name,
                                settings.frames.flame,
                                settings.animation_speed,
                                Some(Damaging(AttackKind::Magic)),
                            );
                        }
                    }
                }
            }
        }
    }
}

fn spawn_spell_effect(
    commands: &mut Commands,
    rect: Rect,
    name: &str,
    frames: usize,
    speed: f32,
    damaging: Option<Damaging>,
) {
    let mut entity = commands.spawn((
        Bounds::new(rect, Vec2::ZERO),
        SpellEffect { frames },
        FrameAnimation::new(speed),
        Drawable,
        SpriteKey(format!("particles/{name}/0")),
        LevelEntity,
    ));
    if let Some(damaging) = damaging {
        entity.insert(damaging);
    }
}

/// Play spell effects once, then remove them.
pub fn animate_spell_effects(
    mut commands: Commands,
    mut effects: Query<(Entity, &SpellEffect, &mut FrameAnimation, &mut SpriteKey)>,
) {
    for (entity, effect, mut animation, mut key) in effects.iter_mut() {
        if animation.advance(effect.frames) {
            commands.entity(entity).despawn_recursive();
            continue;
        }
        if let Some((prefix, _)) = key.0.rsplit_once('/') {
            key.0 = format!("{prefix}/{}", animation.index());
        }
    }
}
