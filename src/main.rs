//! MagiSpeech - Entry Point
//!
//! Controls:
//! - Arrows: Move (slide tiles in the puzzle)
//! - Space: Attack (select an answer in the quiz, reshuffle the puzzle)
//! - Left Ctrl: Cast the selected spell
//! - Q: Cycle spells
//! - E: Open a chest
//! - Enter: Confirm an answer
//! - Escape: Leave a mini-game

use bevy::prelude::*;

fn main() {
    App::new()
        // Bevy default plugins
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "MagiSpeech".to_string(),
                        resolution: (1280.0, 720.0).into(),
                        ..default()
                    }),
                    ..default()
                })
                .set(ImagePlugin::default_nearest()),
        )
        // Our game plugin
        .add_plugins(magispeech::MagiSpeechPlugin)
        .run();
}
