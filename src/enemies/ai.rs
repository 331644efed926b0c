//! Enemy state machine: status from distance, actions, recoil and death.

use bevy::prelude::*;

use super::components::{Enemy, EnemyBrain, EnemyStats, EnemyStatus, Species};
use crate::body::{move_body, Bounds, FrameAnimation, Motion, Obstacle, SpriteKey};
use crate::combat::{AttackKind, CombatRegistry, Health, HitEvent, Vulnerability};
use crate::core::{ExperienceEvent, GameClock, GameSettings, PlayerDamageEvent};
use crate::player::{Player, PlayerCombat, PlayerStats};

/// Distance between two points and the unit vector from `from` to `to`.
///
/// The direction is zero when the points coincide.
pub fn distance_direction(from: Vec2, to: Vec2) -> (f32, Vec2) {
    let offset = to - from;
    (offset.length(), offset.normalize_or_zero())
}

/// Pick the status for this tick.
///
/// Returns `true` when the enemy just entered `Attack`, which restarts its
/// animation.
pub fn next_status(
    current: &mut EnemyStatus,
    distance: f32,
    stats: &EnemyStats,
    can_attack: bool,
) -> bool {
    let previous = *current;
    *current = if distance <= stats.attack_radius && can_attack {
        EnemyStatus::Attack
    } else if distance <= stats.notice_radius {
        EnemyStatus::Move
    } else {
        EnemyStatus::Idle
    };
    *current == EnemyStatus::Attack && previous != EnemyStatus::Attack
}

/// While invulnerable, push away from the player along the captured recoil.
pub fn enemy_hit_reaction(
    mut enemies: Query<(&Vulnerability, &EnemyBrain, &EnemyStats, &mut Motion), With<Enemy>>,
) {
    for (vulnerability, brain, stats, mut motion) in enemies.iter_mut() {
        if !vulnerability.vulnerable {
            motion.direction = -brain.recoil * stats.resistance;
        }
    }
}

pub fn move_enemies(
    mut enemies: Query<(&mut Bounds, &Motion), With<Enemy>>,
    obstacles: Query<&Bounds, (With<Obstacle>, Without<Enemy>)>,
) {
    let obstacle_hitboxes: Vec<Rect> = obstacles.iter().map(|b| b.hitbox).collect();
    for (mut bounds, motion) in enemies.iter_mut() {
        move_body(&mut bounds, motion.direction, motion.speed, &obstacle_hitboxes);
    }
}

/// Advance animations. Finishing an attack animation spends the attack.
pub fn animate_enemies(
    mut enemies: Query<
        (
            &Species,
            &EnemyStatus,
            &EnemyStats,
            &mut EnemyBrain,
            &mut FrameAnimation,
            &mut SpriteKey,
            &mut Bounds,
        ),
        With<Enemy>,
    >,
) {
    for (species, status, stats, mut brain, mut animation, mut key, mut bounds) in
        enemies.iter_mut()
    {
        let frame_count = stats.frame_count(*status);
        if animation.advance(frame_count) && *status == EnemyStatus::Attack {
            brain.can_attack = false;
        }
        if animation.index() >= frame_count.max(1) {
            animation.reset();
        }
        key.0 = format!("enemies/{}/{}/{}", species.0, status.as_str(), animation.index());
        bounds.sync_rect_to_hitbox();
    }
}

pub fn enemy_cooldowns(
    clock: Res<GameClock>,
    settings: Res<GameSettings>,
    mut enemies: Query<(&mut EnemyBrain, &mut Vulnerability), With<Enemy>>,
) {
    for (mut brain, mut vulnerability) in enemies.iter_mut() {
        if !brain.can_attack
            && clock.elapsed(brain.attack_time, settings.timings.enemy_attack_cooldown)
        {
            brain.can_attack = true;
        }
        vulnerability.refresh(clock.now());
    }
}

/// Remove dead enemies and pay out their experience.
pub fn enemy_death(
    mut commands: Commands,
    enemies: Query<(Entity, &Species, &Health, &EnemyStats), With<Enemy>>,
    mut experience: EventWriter<ExperienceEvent>,
) {
    for (entity, species, health, stats) in enemies.iter() {
        if health.is_dead() {
            info!("{} defeated, +{} exp", species.0, stats.exp);
            commands.entity(entity).despawn_recursive();
            experience.send(ExperienceEvent { amount: stats.exp });
        }
    }
}

pub fn update_enemy_status(
    player_query: Query<&Bounds, (With<Player>, Without<Enemy>)>,
    mut enemies: Query<
        (&Bounds, &EnemyStats, &EnemyBrain, &mut EnemyStatus, &mut FrameAnimation),
        With<Enemy>,
    >,
) {
    let Ok(player_bounds) = player_query.get_single() else {
        return;
    };

    for (bounds, stats, brain, mut status, mut animation) in enemies.iter_mut() {
        let (distance, _) = distance_direction(bounds.center(), player_bounds.center());
        if next_status(&mut status, distance, stats, brain.can_attack) {
            animation.reset();
        }
    }
}

pub fn enemy_actions(
    clock: Res<GameClock>,
    player_query: Query<&Bounds, (With<Player>, Without<Enemy>)>,
    mut enemies: Query<
        (&Bounds, &EnemyStats, &EnemyStatus, &mut EnemyBrain, &mut Motion),
        With<Enemy>,
    >,
    mut damage: EventWriter<PlayerDamageEvent>,
) {
    let Ok(player_bounds) = player_query.get_single() else {
        return;
    };

    for (bounds, stats, status, mut brain, mut motion) in enemies.iter_mut() {
        match status {
            EnemyStatus::Attack => {
                brain.attack_time = clock.now();
                damage.send(PlayerDamageEvent {
                    amount: stats.damage,
                    attack_type: stats.attack_type.clone(),
                });
            }
            EnemyStatus::Move => {
                motion.direction = distance_direction(bounds.center(), player_bounds.center()).1;
            }
            EnemyStatus::Idle => {
                motion.direction = Vec2::ZERO;
            }
        }
    }
}

/// Apply weapon and spell hits to vulnerable enemies.
pub fn take_hits(
    mut hits: EventReader<HitEvent>,
    clock: Res<GameClock>,
    registry: Res<CombatRegistry>,
    stats: Res<PlayerStats>,
    player_query: Query<(&Bounds, &PlayerCombat), (With<Player>, Without<Enemy>)>,
    mut enemies: Query<
        (
            &Bounds,
            &mut Health,
            &mut Vulnerability,
            &mut EnemyBrain,
            &mut Motion,
        ),
        With<Enemy>,
    >,
) {
    let Ok((player_bounds, combat)) = player_query.get_single() else {
        hits.clear();
        return;
    };

    for hit in hits.read() {
        // Already despawned or not an enemy
        let Ok((bounds, mut health, mut vulnerability, mut brain, mut motion)) =
            enemies.get_mut(hit.target)
        else {
            continue;
        };
        if !vulnerability.vulnerable {
            continue;
        }

        let recoil = distance_direction(bounds.center(), player_bounds.center()).1;
        brain.recoil = recoil;
        motion.direction = recoil;

        let amount = match hit.kind {
            AttackKind::Weapon => registry.weapon_damage(&stats, combat.weapon),
            AttackKind::Magic => registry.magic_damage(&stats, combat.selected_spell),
        };
        health.take_damage(amount);
        vulnerability.register_hit(clock.now());
        debug!("Enemy {:?} took {} damage", hit.target, amount);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enemies::EnemyRegistry;

    fn axolotl() -> EnemyStats {
        EnemyRegistry::default()
            .get("axolotl")
            .map(|d| d.to_stats())
            .expect("axolotl is built in")
    }

    #[test]
    fn status_follows_radii() {
        let stats = axolotl();
        let mut status = EnemyStatus::Idle;

        assert!(!next_status(&mut status, 500.0, &stats, true));
        assert_eq!(status, EnemyStatus::Idle);

        next_status(&mut status, 300.0, &stats, true);
        assert_eq!(status, EnemyStatus::Move);

        assert!(next_status(&mut status, 80.0, &stats, true));
        assert_eq!(status, EnemyStatus::Attack);

        // Staying in attack is not a fresh entry
        assert!(!next_status(&mut status, 50.0, &stats, true));

        next_status(&mut status, 50.0, &stats, false);
        assert_eq!(status, EnemyStatus::Move);
    }

    #[test]
    fn zero_distance_has_no_direction() {
        let (distance, direction) = distance_direction(Vec2::splat(10.0), Vec2::splat(10.0));
        assert_eq!(distance, 0.0);
        assert_eq!(direction, Vec2::ZERO);
    }
}
