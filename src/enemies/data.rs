//! Species table, built in and overridable from `assets/data/enemies.ron`.

use bevy::prelude::*;
use serde::Deserialize;
use std::collections::HashMap;

use super::components::EnemyStats;

fn default_frames() -> usize {
    4
}

/// One species' numbers.
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct EnemyDefinition {
    pub health: f32,
    pub exp: u32,
    pub damage: f32,
    pub attack_type: String,
    /// Pixels per tick.
    pub speed: f32,
    pub resistance: f32,
    pub attack_radius: f32,
    pub notice_radius: f32,
    #[serde(default = "default_frames")]
    pub idle_frames: usize,
    #[serde(default = "default_frames")]
    pub move_frames: usize,
    #[serde(default = "default_frames")]
    pub attack_frames: usize,
}

impl EnemyDefinition {
    #[allow(clippy::too_many_arguments)]
    fn builtin(
        health: f32,
        exp: u32,
        damage: f32,
        attack_type: &str,
        speed: f32,
        resistance: f32,
        attack_radius: f32,
        notice_radius: f32,
    ) -> Self {
        Self {
            health,
            exp,
            damage,
            attack_type: attack_type.to_string(),
            speed,
            resistance,
            attack_radius,
            notice_radius,
            idle_frames: default_frames(),
            move_frames: default_frames(),
            attack_frames: default_frames(),
        }
    }

    /// Convert to EnemyStats component.
    pub fn to_stats(&self) -> EnemyStats {
        EnemyStats {
            damage: self.damage,
            attack_type: self.attack_type.clone(),
            resistance: self.resistance,
            attack_radius: self.attack_radius,
            notice_radius: self.notice_radius,
            exp: self.exp,
            idle_frames: self.idle_frames,
            move_frames: self.move_frames,
            attack_frames: self.attack_frames,
        }
    }
}

/// Resource holding all enemy definitions by species name.
#[derive(Resource, Deserialize, Debug, Clone)]
#[serde(transparent)]
pub struct EnemyRegistry {
    pub definitions: HashMap<String, EnemyDefinition>,
}

impl Default for EnemyRegistry {
    fn default() -> Self {
        Self {
            definitions: HashMap::from([
                (
                    "axolotl".to_string(),
                    EnemyDefinition::builtin(100.0, 150, 20.0, "slash", 3.0, 3.0, 80.0, 360.0),
                ),
                (
                    "raccoon".to_string(),
                    EnemyDefinition::builtin(300.0, 250, 40.0, "claw", 2.0, 3.0, 120.0, 400.0),
                ),
                (
                    "spirit".to_string(),
                    EnemyDefinition::builtin(100.0, 110, 8.0, "thunder", 4.0, 3.0, 60.0, 350.0),
                ),
                (
                    "bamboo".to_string(),
                    EnemyDefinition::builtin(70.0, 120, 6.0, "leaf_attack", 3.0, 3.0, 50.0, 300.0),
                ),
            ]),
        }
    }
}

impl EnemyRegistry {
    /// Get an enemy definition by species name.
    pub fn get(&self, species: &str) -> Option<&EnemyDefinition> {
        self.definitions.get(species)
    }
}
