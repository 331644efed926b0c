//! Presentation plugins.
//!
//! `PresentPlugin` computes what should be on screen and runs headless.
//! `RenderingPlugin` turns that into Bevy sprites and UI and needs a window.

use bevy::prelude::*;

use super::draw_list::{build_draw_list, update_viewport, DrawList, Viewport};
use super::hud::{setup_hud_systems, update_hud_stats, HudStats};
use super::sprites::{attach_sprites, spawn_camera, sync_sprites, SpriteImages};
use super::visual_config::{load_visual_config, VisualConfig};
use crate::core::GameSet;

/// Viewport, draw list and HUD snapshot.
pub struct PresentPlugin;

impl Plugin for PresentPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Viewport>()
            .init_resource::<DrawList>()
            .init_resource::<HudStats>()
            .add_systems(
                Update,
                (update_viewport, build_draw_list, update_hud_stats)
                    .chain()
                    .in_set(GameSet::Present),
            );
    }
}

/// Rendering plugin - sprites, camera and HUD bars.
pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SpriteImages>()
            .init_resource::<VisualConfig>()
            .add_systems(Startup, (load_visual_config, spawn_camera))
            .add_systems(
                Update,
                (attach_sprites, sync_sprites)
                    .chain()
                    .after(GameSet::Present),
            );

        setup_hud_systems(app);
    }
}
