//! Casting, spending energy and cycling spells, through the full tick.

mod common;

use approx::assert_relative_eq;
use bevy::prelude::*;
use common::{MapBuilder, TestGame};
use magispeech::combat::{AttackKind, Damaging, Health, SpellEffect};
use magispeech::enemies::Enemy;
use magispeech::player::{Controls, Energy, Facing, PlayerCombat, PlayerStatus};
use magispeech::world::MapLayer;
use rstest::rstest;

const FLAME: usize = 0;
const HEAL: usize = 1;

/// Player alone at (320, 320).
fn alone() -> (TestGame, Entity) {
    let map = MapBuilder::new()
        .cell(MapLayer::Entities, 5, 5, 394)
        .build(0);
    let mut game = TestGame::new(vec![map]);
    let player = game.player();
    (game, player)
}

fn cast(game: &mut TestGame, spell: usize) {
    let player = game.player();
    game.get_mut::<PlayerCombat>(player).selected_spell = spell;
    game.set_controls(Controls {
        cast: true,
        ..default()
    });
    game.update();
    game.set_controls(Controls::default());
}

#[test]
fn flame_spends_energy_and_spawns_damaging_effects() {
    let (mut game, player) = alone();

    cast(&mut game, FLAME);

    assert_relative_eq!(game.get::<Energy>(player).current, 40.0);
    let effects = game.entities_with::<SpellEffect>();
    assert_eq!(effects.len(), 5);
    for effect in effects {
        assert_eq!(*game.get::<Damaging>(effect), Damaging(AttackKind::Magic));
    }
}

#[test]
fn flame_hits_enemy_for_magic_plus_strength() {
    let map = MapBuilder::new()
        .cell(MapLayer::Entities, 5, 5, 394)
        .cell(MapLayer::Entities, 5, 4, 393)
        .build(0);
    let mut game = TestGame::new(vec![map]);
    let player = game.player();
    let enemy = game.entities_with::<Enemy>()[0];
    game.get_mut::<PlayerStatus>(player).facing = Facing::Left;

    cast(&mut game, FLAME);

    // magic 4 + flame 25
    assert_eq!(game.get::<Health>(enemy).current, 71.0);
}

#[rstest]
#[case::flame(FLAME)]
#[case::heal(HEAL)]
fn cast_without_enough_energy_does_nothing(#[case] spell: usize) {
    let (mut game, player) = alone();
    game.get_mut::<Energy>(player).current = 5.0;
    game.get_mut::<Health>(player).current = 50.0;

    cast(&mut game, spell);

    assert!(game.entities_with::<SpellEffect>().is_empty());
    // Only this tick's regeneration
    assert_relative_eq!(game.get::<Energy>(player).current, 5.04, epsilon = 1e-4);
    assert_eq!(game.get::<Health>(player).current, 50.0);
}

#[rstest]
#[case::partial(50.0, 74.0)]
#[case::capped(90.0, 100.0)]
fn heal_restores_health_up_to_maximum(#[case] before: f32, #[case] after: f32) {
    let (mut game, player) = alone();
    game.get_mut::<Health>(player).current = before;

    cast(&mut game, HEAL);

    // magic 4 + heal 20
    assert_eq!(game.get::<Health>(player).current, after);
    assert_relative_eq!(game.get::<Energy>(player).current, 50.0);
    let effects = game.entities_with::<SpellEffect>();
    assert_eq!(effects.len(), 1);
    assert!(game.app.world().get::<Damaging>(effects[0]).is_none());
}

#[test]
fn cycling_wraps_and_waits_for_the_switch_cooldown() {
    let (mut game, player) = alone();
    game.set_controls(Controls {
        cycle_spell: true,
        ..default()
    });

    game.update();
    assert_eq!(game.get::<PlayerCombat>(player).selected_spell, HEAL);
    assert!(game.get::<PlayerCombat>(player).switch_locked);

    // Held key does nothing while locked
    game.advance(199);
    assert_eq!(game.get::<PlayerCombat>(player).selected_spell, HEAL);
    assert!(game.get::<PlayerCombat>(player).switch_locked);

    game.advance(1);
    assert_eq!(game.get::<PlayerCombat>(player).selected_spell, HEAL);
    assert!(!game.get::<PlayerCombat>(player).switch_locked);

    game.update();
    assert_eq!(game.get::<PlayerCombat>(player).selected_spell, FLAME);
    assert!(game.get::<PlayerCombat>(player).switch_locked);
}
