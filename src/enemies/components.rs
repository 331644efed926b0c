//! Enemy-related components.

use bevy::prelude::*;

/// Marker component for all enemies.
#[derive(Component)]
pub struct Enemy;

/// Species name, the key into `EnemyRegistry`.
#[derive(Component, Debug, Clone, PartialEq, Eq)]
pub struct Species(pub String);

/// Behaviour chosen each tick from the distance to the player.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum EnemyStatus {
    /// Player out of notice range.
    #[default]
    Idle,
    /// Walking straight at the player.
    Move,
    /// In attack range with the attack ready.
    Attack,
}

impl EnemyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnemyStatus::Idle => "idle",
            EnemyStatus::Move => "move",
            EnemyStatus::Attack => "attack",
        }
    }
}

/// Per-species numbers copied onto each spawned enemy.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct EnemyStats {
    pub damage: f32,
    pub attack_type: String,
    /// Knockback multiplier while invulnerable.
    pub resistance: f32,
    pub attack_radius: f32,
    pub notice_radius: f32,
    /// Experience granted on death.
    pub exp: u32,
    pub idle_frames: usize,
    pub move_frames: usize,
    pub attack_frames: usize,
}

impl EnemyStats {
    pub fn frame_count(&self, status: EnemyStatus) -> usize {
        match status {
            EnemyStatus::Idle => self.idle_frames,
            EnemyStatus::Move => self.move_frames,
            EnemyStatus::Attack => self.attack_frames,
        }
    }
}

/// Attack readiness and the knockback captured on the last hit.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct EnemyBrain {
    pub can_attack: bool,
    pub attack_time: u64,
    /// Unit vector from the enemy toward the player at hit time.
    pub recoil: Vec2,
}

impl Default for EnemyBrain {
    fn default() -> Self {
        Self {
            can_attack: true,
            attack_time: 0,
            recoil: Vec2::ZERO,
        }
    }
}
