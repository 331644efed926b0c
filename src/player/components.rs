//! Player-related components.

use bevy::prelude::*;
use serde::Deserialize;

use crate::core::FrameCounts;

/// Marker component for the player entity.
#[derive(Component)]
pub struct Player;

/// Which way the player looks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Facing {
    Up,
    #[default]
    Down,
    Left,
    Right,
}

impl Facing {
    pub fn as_str(&self) -> &'static str {
        match self {
            Facing::Up => "up",
            Facing::Down => "down",
            Facing::Left => "left",
            Facing::Right => "right",
        }
    }

    /// Unit vector in map space (Y down).
    pub fn unit(&self) -> Vec2 {
        match self {
            Facing::Up => Vec2::new(0.0, -1.0),
            Facing::Down => Vec2::new(0.0, 1.0),
            Facing::Left => Vec2::new(-1.0, 0.0),
            Facing::Right => Vec2::new(1.0, 0.0),
        }
    }
}

/// What the player is doing, independent of facing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Action {
    #[default]
    Moving,
    Idle,
    Attacking,
}

/// Facing × action; selects the animation set.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlayerStatus {
    pub facing: Facing,
    pub action: Action,
}

impl PlayerStatus {
    /// Animation set name: `"down"`, `"down_idle"`, `"down_attack"`...
    pub fn animation_key(&self) -> String {
        match self.action {
            Action::Moving => self.facing.as_str().to_string(),
            Action::Idle => format!("{}_idle", self.facing.as_str()),
            Action::Attacking => format!("{}_attack", self.facing.as_str()),
        }
    }

    /// Number of frames in the current animation set.
    pub fn frame_count(&self, frames: &FrameCounts) -> usize {
        match self.action {
            Action::Moving => frames.player_moving,
            Action::Idle => frames.player_idle,
            Action::Attacking => frames.player_attack,
        }
    }

    /// Derive the action from this tick's movement and attack flag.
    ///
    /// Returns `true` when movement must be zeroed because an attack is
    /// in progress.
    pub fn derive(&mut self, direction: Vec2, attacking: bool) -> bool {
        if direction == Vec2::ZERO && self.action == Action::Moving {
            self.action = Action::Idle;
        }
        if attacking {
            self.action = Action::Attacking;
            return true;
        }
        if self.action == Action::Attacking {
            self.action = Action::Moving;
        }
        false
    }
}

/// Base player statistics, loaded from `assets/data/player.ron`.
///
/// `health` and `energy` are the caps; the live values sit in `Health` and
/// `Energy` on the player entity.
#[derive(Resource, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct PlayerStats {
    pub health: f32,
    pub energy: f32,
    pub attack: f32,
    pub magic: f32,
    /// Pixels per tick.
    pub speed: f32,
}

impl Default for PlayerStats {
    fn default() -> Self {
        Self {
            health: 100.0,
            energy: 60.0,
            attack: 10.0,
            magic: 4.0,
            speed: 5.0,
        }
    }
}

/// Spell energy.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Energy {
    pub current: f32,
    pub maximum: f32,
}

impl Energy {
    pub fn new(max: f32) -> Self {
        Self {
            current: max,
            maximum: max,
        }
    }

    pub fn spend(&mut self, amount: f32) {
        self.current = (self.current - amount).max(0.0);
    }

    /// Add `amount` while below the cap, snap to the cap otherwise.
    pub fn regenerate(&mut self, amount: f32) {
        if self.current < self.maximum {
            self.current += amount;
        } else {
            self.current = self.maximum;
        }
    }
}

/// Accumulated experience points.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Experience(pub u32);

/// Attack and spell-selection timers.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayerCombat {
    pub attacking: bool,
    pub attack_time: u64,
    /// Index into `CombatRegistry::weapons`.
    pub weapon: usize,
    /// Index into `CombatRegistry::spells`.
    pub selected_spell: usize,
    pub switch_locked: bool,
    pub spell_switch_time: u64,
}
