//! Body module - bounds, movement and animation shared by every entity.

mod collision;
mod components;
pub mod rect;

pub use collision::move_body;
pub use components::*;
pub use rect::RectExt;
