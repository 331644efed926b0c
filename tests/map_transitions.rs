//! Walking between maps.

mod common;

use bevy::prelude::*;
use common::{MapBuilder, TestGame};
use magispeech::body::Bounds;
use magispeech::player::Controls;
use magispeech::world::{CurrentMap, MapLayer, TransitionTrigger};
use rstest::rstest;

fn start_map() -> MapBuilder {
    MapBuilder::new()
        .cell(MapLayer::Entities, 5, 1, 394)
        .cell(MapLayer::Transitions, 5, 0, 1)
}

#[rstest]
#[case::through_return_trigger(true, Vec2::new(84.0, 192.0))]
#[case::spawn_marker_without_return_trigger(false, Vec2::new(512.0, 512.0))]
fn walking_into_trigger_changes_map(#[case] has_return: bool, #[case] expected: Vec2) {
    let mut destination = MapBuilder::new().cell(MapLayer::Entities, 8, 8, 394);
    if has_return {
        destination = destination.cell(MapLayer::Transitions, 3, 0, 0);
    }
    let mut game = TestGame::new(vec![start_map().build(0), destination.build(1)]);
    let player = game.player();
    assert_eq!(game.get::<Bounds>(player).rect.min, Vec2::new(64.0, 320.0));

    game.set_controls(Controls {
        left: true,
        ..default()
    });
    game.update();

    assert_eq!(game.get::<Bounds>(player).rect.min, expected);
    assert_eq!(
        *game.resource::<CurrentMap>(),
        CurrentMap { id: 1, from: Some(0) }
    );

    let triggers = game.entities_with::<TransitionTrigger>();
    let destinations: Vec<u32> = triggers
        .iter()
        .map(|&entity| game.get::<TransitionTrigger>(entity).destination)
        .collect();
    let expected_triggers = if has_return { vec![0] } else { vec![] };
    assert_eq!(destinations, expected_triggers);
}

#[test]
fn missing_destination_keeps_current_map() {
    let mut game = TestGame::new(vec![start_map().build(0)]);
    let player = game.player();
    game.set_controls(Controls {
        left: true,
        ..default()
    });
    game.update();

    assert_eq!(game.resource::<CurrentMap>().id, 0);
    assert_eq!(game.entities_with::<TransitionTrigger>().len(), 1);
    assert_eq!(game.get::<Bounds>(player).rect.min, Vec2::new(59.0, 320.0));
}
