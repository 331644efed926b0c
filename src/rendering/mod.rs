//! Rendering module - camera offset, draw order, HUD, and sprites.

mod draw_list;
mod hud;
mod plugin;
mod sprites;
pub mod visual_config;

pub use draw_list::{sort_by_depth, DrawItem, DrawList, Viewport};
pub use hud::HudStats;
pub use plugin::{PresentPlugin, RenderingPlugin};
pub use sprites::world_translation;
pub use visual_config::VisualConfig;
