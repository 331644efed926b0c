//! Global game settings loaded from `assets/data/settings.ron`.
//!
//! Every field has a default so a partial (or missing) file still yields a
//! playable configuration. Several constants are per-tick quantities
//! (animation speed, energy regeneration, knockback) and assume the 60 FPS
//! frame rate the game was tuned at.

use bevy::prelude::*;
use serde::Deserialize;
use std::collections::HashMap;

/// Cooldown and invincibility durations, in milliseconds.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Timings {
    /// Added to the weapon cooldown to get the full attack duration.
    pub base_attack_cooldown: u64,
    pub spell_switch_cooldown: u64,
    pub player_invincibility: u64,
    pub enemy_attack_cooldown: u64,
    pub enemy_invincibility: u64,
    /// Pause after the sliding puzzle is solved before handing back.
    pub puzzle_exit_delay: u64,
    /// Score screen duration after the last trivia question.
    pub trivia_exit_delay: u64,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            base_attack_cooldown: 400,
            spell_switch_cooldown: 200,
            player_invincibility: 500,
            enemy_attack_cooldown: 400,
            enemy_invincibility: 300,
            puzzle_exit_delay: 400,
            trivia_exit_delay: 5000,
        }
    }
}

/// Frame counts of the player and spell animation sets.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FrameCounts {
    pub player_moving: usize,
    pub player_idle: usize,
    pub player_attack: usize,
    pub flame: usize,
    pub heal: usize,
}

impl Default for FrameCounts {
    fn default() -> Self {
        Self {
            player_moving: 4,
            player_idle: 1,
            player_attack: 1,
            flame: 12,
            heal: 6,
        }
    }
}

/// Experience granted by the treasure mini-games.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MiniGameRewards {
    /// Flat reward for a solved sliding puzzle.
    pub sliding_puzzle: u32,
    /// Reward per correctly answered trivia question.
    pub trivia: u32,
}

impl Default for MiniGameRewards {
    fn default() -> Self {
        Self {
            sliding_puzzle: 250,
            trivia: 150,
        }
    }
}

fn default_enemy_spawn_codes() -> HashMap<i32, String> {
    HashMap::from([
        (390, "bamboo".to_string()),
        (391, "spirit".to_string()),
        (392, "raccoon".to_string()),
        (393, "axolotl".to_string()),
    ])
}

/// Top-level settings resource.
#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    /// Viewport size in pixels (width, height).
    pub screen_size: (f32, f32),
    /// Edge length of one grid cell in pixels.
    pub tile_size: f32,
    /// Map loaded at session start and after the player dies.
    pub start_map: u32,
    /// Map ids to load at startup.
    pub maps: Vec<u32>,
    /// Entity-layer code marking the player's spawn point.
    pub player_spawn_code: i32,
    /// Entity-layer code to species name.
    pub enemy_spawn_codes: HashMap<i32, String>,
    pub timings: Timings,
    /// Frames advanced per tick.
    pub animation_speed: f32,
    /// Energy regained per tick per point of magic.
    pub energy_regen_factor: f32,
    /// Number of flame effects a cast places in front of the player.
    pub flame_reach: u32,
    pub frames: FrameCounts,
    pub rewards: MiniGameRewards,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            screen_size: (1280.0, 720.0),
            tile_size: 64.0,
            start_map: 0,
            maps: vec![0],
            player_spawn_code: 394,
            enemy_spawn_codes: default_enemy_spawn_codes(),
            timings: Timings::default(),
            animation_speed: 0.15,
            energy_regen_factor: 0.01,
            flame_reach: 5,
            frames: FrameCounts::default(),
            rewards: MiniGameRewards::default(),
        }
    }
}

impl GameSettings {
    pub fn half_screen(&self) -> Vec2 {
        Vec2::new(self.screen_size.0, self.screen_size.1) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let settings: GameSettings =
            ron::from_str("(tile_size: 32.0, maps: [0, 1, 2])").expect("valid settings");
        assert_eq!(settings.tile_size, 32.0);
        assert_eq!(settings.maps, vec![0, 1, 2]);
        assert_eq!(settings.player_spawn_code, 394);
        assert_eq!(settings.timings.enemy_invincibility, 300);
        assert_eq!(
            settings.enemy_spawn_codes.get(&393).map(String::as_str),
            Some("axolotl")
        );
    }
}
