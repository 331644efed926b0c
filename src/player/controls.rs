//! Keyboard snapshot consumed by the simulation.
//!
//! Systems never read `ButtonInput` directly so tests can drive the game by
//! filling `Controls` by hand.

use bevy::prelude::*;

use super::components::Facing;

/// Input state for the current tick.
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub struct Controls {
    // Held
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub attack: bool,
    pub cast: bool,
    pub cycle_spell: bool,
    // Pressed this tick
    pub interact: bool,
    pub escape: bool,
    pub confirm: bool,
    pub select: bool,
    /// Arrow pressed this tick, used by mini-game navigation.
    pub navigate: Option<Facing>,
}

/// Copy the keyboard into `Controls`.
pub fn read_keyboard(keyboard: Res<ButtonInput<KeyCode>>, mut controls: ResMut<Controls>) {
    controls.up = keyboard.pressed(KeyCode::ArrowUp);
    controls.down = keyboard.pressed(KeyCode::ArrowDown);
    controls.left = keyboard.pressed(KeyCode::ArrowLeft);
    controls.right = keyboard.pressed(KeyCode::ArrowRight);
    controls.attack = keyboard.pressed(KeyCode::Space);
    controls.cast = keyboard.pressed(KeyCode::ControlLeft);
    controls.cycle_spell = keyboard.pressed(KeyCode::KeyQ);

    controls.interact = keyboard.just_pressed(KeyCode::KeyE);
    controls.escape = keyboard.just_pressed(KeyCode::Escape);
    controls.confirm = keyboard.just_pressed(KeyCode::Enter);
    controls.select = keyboard.just_pressed(KeyCode::Space);

    controls.navigate = [
        (KeyCode::ArrowUp, Facing::Up),
        (KeyCode::ArrowDown, Facing::Down),
        (KeyCode::ArrowLeft, Facing::Left),
        (KeyCode::ArrowRight, Facing::Right),
    ]
    .into_iter()
    .find(|(key, _)| keyboard.just_pressed(*key))
    .map(|(_, facing)| facing);
}
