//! Opening a chest hands control to a mini-game and back.

mod common;

use bevy::prelude::*;
use common::{MapBuilder, TestGame};
use magispeech::body::{Bounds, SpriteKey};
use magispeech::core::PlayState;
use magispeech::minigame::{ActiveGame, MiniGameSession, SlidingPuzzle};
use magispeech::player::{Controls, Experience, Facing};
use magispeech::world::{MapLayer, Tile, TileKind, Treasure};

/// Player at (320, 320) standing against chest 0.
fn treasure_game() -> TestGame {
    let map = MapBuilder::new()
        .cell(MapLayer::Entities, 5, 5, 394)
        .cell(MapLayer::Treasure, 5, 6, 0)
        .build(0);
    TestGame::new(vec![map])
}

fn open_chest(game: &mut TestGame) -> Entity {
    let chest = game.entities_with::<Treasure>()[0];
    game.set_controls(Controls {
        interact: true,
        ..default()
    });
    game.update();
    game.set_controls(Controls::default());
    game.update();
    chest
}

fn play_state(game: &TestGame) -> PlayState {
    *game.resource::<State<PlayState>>().get()
}

#[test]
fn opening_a_chest_starts_a_minigame() {
    let mut game = treasure_game();
    assert_eq!(play_state(&game), PlayState::Exploring);

    let chest = open_chest(&mut game);

    assert_eq!(play_state(&game), PlayState::MiniGame);
    assert!(game.resource::<MiniGameSession>().is_active());
    assert!(game.entities_with::<Treasure>().is_empty());
    assert_eq!(
        game.get::<Tile>(chest).kind,
        TileKind::Treasure {
            chest: 0,
            opened: true
        }
    );
    assert_eq!(game.get::<SpriteKey>(chest).0, "treasure/0/opened");
}

#[test]
fn world_is_frozen_during_minigame() {
    let mut game = treasure_game();
    open_chest(&mut game);
    let player = game.player();
    let before = game.get::<Bounds>(player).rect;

    game.set_controls(Controls {
        down: true,
        ..default()
    });
    game.update();
    game.update();

    assert_eq!(game.get::<Bounds>(player).rect, before);
}

#[test]
fn solved_puzzle_returns_with_reward() {
    let mut game = treasure_game();
    open_chest(&mut game);
    let player = game.player();

    let mut puzzle = SlidingPuzzle::new();
    puzzle.move_tile(Facing::Right);
    game.app.world_mut().resource_mut::<MiniGameSession>().game =
        Some(ActiveGame::SlidingPuzzle {
            puzzle,
            solved_at: None,
        });

    game.set_controls(Controls {
        navigate: Some(Facing::Left),
        ..default()
    });
    game.update();
    game.set_controls(Controls::default());

    // Solved, waiting out the exit delay
    game.advance(399);
    assert_eq!(play_state(&game), PlayState::MiniGame);

    game.advance(1);
    game.update();

    assert_eq!(play_state(&game), PlayState::Exploring);
    assert!(!game.resource::<MiniGameSession>().is_active());
    assert_eq!(game.get::<Experience>(player).0, 250);
}

#[test]
fn escape_leaves_unsolved_puzzle_without_reward() {
    let mut game = treasure_game();
    open_chest(&mut game);
    let player = game.player();
    game.app.world_mut().resource_mut::<MiniGameSession>().game =
        Some(ActiveGame::SlidingPuzzle {
            puzzle: SlidingPuzzle::shuffled(&mut rand::thread_rng()),
            solved_at: None,
        });

    game.set_controls(Controls {
        escape: true,
        ..default()
    });
    game.update();
    game.set_controls(Controls::default());
    game.update();

    assert_eq!(play_state(&game), PlayState::Exploring);
    assert_eq!(game.get::<Experience>(player).0, 0);
}
