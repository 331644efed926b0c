//! Damage resolution between attacks, enemies and the player.

use bevy::prelude::*;

use super::components::*;
use crate::body::{Bounds, RectExt};
use crate::core::{ExperienceEvent, GameClock, PlayerDiedEvent};
use crate::player::{Experience, Player};

/// Send a `HitEvent` for every damaging sprite overlapping a damageable one.
pub fn resolve_attacks(
    attacks: Query<(&Bounds, &Damaging)>,
    targets: Query<(Entity, &Bounds), With<Damageable>>,
    mut hits: EventWriter<HitEvent>,
) {
    for (attack_bounds, damaging) in attacks.iter() {
        for (target, target_bounds) in targets.iter() {
            if attack_bounds.rect.overlaps(&target_bounds.rect) {
                hits.send(HitEvent {
                    target,
                    kind: damaging.0,
                });
            }
        }
    }
}

/// Apply enemy attacks to the player while it is vulnerable.
pub fn apply_player_damage(
    mut damage_events: EventReader<PlayerDamageEvent>,
    mut player_query: Query<(&mut Health, &mut Vulnerability), With<Player>>,
    clock: Res<GameClock>,
) {
    let Ok((mut health, mut vulnerability)) = player_query.get_single_mut() else {
        damage_events.clear();
        return;
    };

    for event in damage_events.read() {
        if !vulnerability.vulnerable {
            continue;
        }
        health.take_damage(event.amount);
        vulnerability.register_hit(clock.now());
        debug!(
            "Player hit by {} for {}, {} left",
            event.attack_type, event.amount, health.current
        );
    }
}

/// Restore the player and ask for a respawn once health runs out.
pub fn check_player_death(
    mut player_query: Query<(&mut Health, &mut Experience), With<Player>>,
    mut died: EventWriter<PlayerDiedEvent>,
) {
    let Ok((mut health, mut experience)) = player_query.get_single_mut() else {
        return;
    };

    if health.is_dead() {
        info!("Player died with {} experience", experience.0);
        health.restore();
        experience.0 = 0;
        died.send(PlayerDiedEvent);
    }
}

/// Credit experience from defeated enemies and mini-games.
pub fn award_experience(
    mut events: EventReader<ExperienceEvent>,
    mut player_query: Query<&mut Experience, With<Player>>,
) {
    let Ok(mut experience) = player_query.get_single_mut() else {
        events.clear();
        return;
    };

    for event in events.read() {
        experience.0 += event.amount;
    }
}
