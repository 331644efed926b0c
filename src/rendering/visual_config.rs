//! Visual configuration loaded from external RON file.
//!
//! Allows tweaking colours and HUD sizes without recompilation.

use bevy::prelude::*;
use serde::Deserialize;
use std::path::Path;

use crate::world::{read_ron, DataLoadError};

const VISUAL_CONFIG_PATH: &str = "assets/data/rendering/visual_config.ron";

#[derive(Resource, Clone, Deserialize)]
#[serde(default)]
pub struct VisualConfig {
    /// Folder under `assets/` holding `{sprite key}.png` images.
    pub graphics_dir: String,
    pub clear_color: (f32, f32, f32),
    // HUD
    pub health_color: (f32, f32, f32),
    pub energy_color: (f32, f32, f32),
    pub bar_background: (f32, f32, f32),
    pub health_bar_width: f32,
    pub energy_bar_width: f32,
    pub bar_height: f32,
}

impl Default for VisualConfig {
    fn default() -> Self {
        Self {
            graphics_dir: "graphics".to_string(),
            clear_color: (0.0, 0.0, 0.0),
            health_color: (1.0, 0.0, 0.0),
            energy_color: (0.0, 0.0, 1.0),
            bar_background: (0.13, 0.13, 0.13),
            health_bar_width: 200.0,
            energy_bar_width: 140.0,
            bar_height: 20.0,
        }
    }
}

impl VisualConfig {
    /// Read `assets/data/rendering/visual_config.ron`, falling back to defaults.
    pub fn load() -> Self {
        let path = Path::new(VISUAL_CONFIG_PATH);
        match read_ron(path) {
            Ok(config) => {
                info!("Loaded visual config from {}", path.display());
                config
            }
            Err(DataLoadError::FileNotFound(_)) => Self::default(),
            Err(e) => {
                warn!("{}; using default visuals", e);
                Self::default()
            }
        }
    }

    pub fn color(&self, rgb: (f32, f32, f32)) -> Color {
        Color::srgb(rgb.0, rgb.1, rgb.2)
    }

    /// Asset path of a sprite key.
    pub fn image_path(&self, key: &str) -> String {
        format!("{}/{}.png", self.graphics_dir, key)
    }
}

/// System to load visual config at startup.
pub fn load_visual_config(mut commands: Commands) {
    let config = VisualConfig::load();
    commands.insert_resource(ClearColor(config.color(config.clear_color)));
    commands.insert_resource(config);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sprite_keys_map_to_png_files() {
        let config = VisualConfig::default();
        assert_eq!(
            config.image_path("enemies/axolotl/idle/0"),
            "graphics/enemies/axolotl/idle/0.png"
        );
    }

    #[test]
    fn partial_file_keeps_default_colors() {
        let config: VisualConfig = ron::from_str("(bar_height: 12.0)").expect("valid config");
        assert_eq!(config.bar_height, 12.0);
        assert_eq!(config.health_color, (1.0, 0.0, 0.0));
    }
}
