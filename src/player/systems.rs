//! Player state machine: input, cooldowns, status, animation, movement.

use bevy::prelude::*;

use super::components::*;
use super::controls::Controls;
use crate::body::{move_body, Bounds, Drawable, FrameAnimation, Motion, Obstacle, RectExt, SpriteKey};
use crate::combat::{CombatRegistry, Health, Vulnerability};
use crate::core::{GameClock, GameSettings, PlayerAction};

/// Size of the player's display rect.
pub const PLAYER_SIZE: Vec2 = Vec2::new(64.0, 64.0);
/// Hitbox inflation relative to the display rect.
const PLAYER_HITBOX_INFLATION: Vec2 = Vec2::new(-2.0, -26.0);

/// Spawn the player with its display rect's top-left at `top_left`.
pub fn spawn_player(
    commands: &mut Commands,
    top_left: Vec2,
    stats: &PlayerStats,
    settings: &GameSettings,
) -> Entity {
    let status = PlayerStatus::default();
    commands
        .spawn((
            Player,
            Bounds::new(
                Rect::from_top_left(top_left, PLAYER_SIZE),
                PLAYER_HITBOX_INFLATION,
            ),
            Motion::new(stats.speed),
            FrameAnimation::new(settings.animation_speed),
            status,
            PlayerCombat::default(),
            Health::new(stats.health),
            Energy::new(stats.energy),
            Experience::default(),
            Vulnerability::new(settings.timings.player_invincibility),
            Drawable,
            SpriteKey(format!("player/{}/0", status.animation_key())),
            Name::new("Player"),
        ))
        .id()
}

/// Turn held keys into a direction, an attack or a spell.
///
/// Ignored entirely while an attack is running.
pub fn player_input(
    controls: Res<Controls>,
    clock: Res<GameClock>,
    registry: Res<CombatRegistry>,
    stats: Res<PlayerStats>,
    mut query: Query<(&mut Motion, &mut PlayerStatus, &mut PlayerCombat), With<Player>>,
    mut actions: EventWriter<PlayerAction>,
) {
    let Ok((mut motion, mut status, mut combat)) = query.get_single_mut() else {
        return;
    };
    if combat.attacking {
        return;
    }

    if controls.up {
        motion.direction.y = -1.0;
        status.facing = Facing::Up;
        status.action = Action::Moving;
    } else if controls.down {
        motion.direction.y = 1.0;
        status.facing = Facing::Down;
        status.action = Action::Moving;
    } else {
        motion.direction.y = 0.0;
    }

    if controls.right {
        motion.direction.x = 1.0;
        status.facing = Facing::Right;
        status.action = Action::Moving;
    } else if controls.left {
        motion.direction.x = -1.0;
        status.facing = Facing::Left;
        status.action = Action::Moving;
    } else {
        motion.direction.x = 0.0;
    }

    if controls.attack {
        combat.attacking = true;
        combat.attack_time = clock.now();
        actions.send(PlayerAction::MeleeStarted {
            weapon: combat.weapon,
        });
    }

    if controls.cast {
        combat.attacking = true;
        combat.attack_time = clock.now();
        if let Some(spell) = registry.spell(combat.selected_spell) {
            actions.send(PlayerAction::SpellCast {
                spell: combat.selected_spell,
                strength: stats.magic + spell.strength,
                cost: spell.cost,
            });
        }
    }

    if controls.cycle_spell && !combat.switch_locked && !registry.spells.is_empty() {
        combat.switch_locked = true;
        combat.spell_switch_time = clock.now();
        combat.selected_spell = (combat.selected_spell + 1) % registry.spells.len();
    }
}

/// End attacks, unlock spell switching, restore vulnerability.
pub fn player_cooldowns(
    clock: Res<GameClock>,
    settings: Res<GameSettings>,
    registry: Res<CombatRegistry>,
    mut query: Query<(&mut PlayerCombat, &mut Vulnerability), With<Player>>,
    mut actions: EventWriter<PlayerAction>,
) {
    let Ok((mut combat, mut vulnerability)) = query.get_single_mut() else {
        return;
    };
    let timings = &settings.timings;

    let attack_duration = timings.base_attack_cooldown + registry.weapon_cooldown(combat.weapon);
    if combat.attacking && clock.elapsed(combat.attack_time, attack_duration) {
        combat.attacking = false;
        actions.send(PlayerAction::AttackEnded);
    }

    if combat.switch_locked && clock.elapsed(combat.spell_switch_time, timings.spell_switch_cooldown)
    {
        combat.switch_locked = false;
    }

    vulnerability.refresh(clock.now());
}

/// Derive idle/attacking from this tick's intent.
pub fn update_player_status(
    mut query: Query<(&mut Motion, &mut PlayerStatus, &PlayerCombat), With<Player>>,
) {
    for (mut motion, mut status, combat) in query.iter_mut() {
        if status.derive(motion.direction, combat.attacking) {
            motion.direction = Vec2::ZERO;
        }
    }
}

/// Advance the current animation set and refresh the sprite key.
pub fn animate_player(
    settings: Res<GameSettings>,
    mut query: Query<
        (&PlayerStatus, &mut FrameAnimation, &mut SpriteKey, &mut Bounds),
        With<Player>,
    >,
) {
    for (status, mut animation, mut key, mut bounds) in query.iter_mut() {
        let frame_count = status.frame_count(&settings.frames);
        animation.advance(frame_count);
        // Switching sets can leave the frame past the end of the new one
        if animation.index() >= frame_count.max(1) {
            animation.reset();
        }
        key.0 = format!("player/{}/{}", status.animation_key(), animation.index());
        bounds.sync_rect_to_hitbox();
    }
}

/// Move the player against every obstacle.
pub fn move_player(
    mut player_query: Query<(&mut Bounds, &Motion), With<Player>>,
    obstacles: Query<&Bounds, (With<Obstacle>, Without<Player>)>,
) {
    let Ok((mut bounds, motion)) = player_query.get_single_mut() else {
        return;
    };
    let obstacle_hitboxes: Vec<Rect> = obstacles.iter().map(|b| b.hitbox).collect();
    move_body(&mut bounds, motion.direction, motion.speed, &obstacle_hitboxes);
}

/// Regenerate energy in proportion to the magic stat.
pub fn regenerate_energy(
    settings: Res<GameSettings>,
    stats: Res<PlayerStats>,
    mut query: Query<&mut Energy, With<Player>>,
) {
    for mut energy in query.iter_mut() {
        energy.regenerate(settings.energy_regen_factor * stats.magic);
    }
}
