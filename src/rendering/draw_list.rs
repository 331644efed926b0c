//! Camera offset and the Y-sorted draw list.
//!
//! Everything here is in map space (pixels, Y down). Converting to Bevy's
//! world space happens in the sprite sync, which only the binary runs.

use bevy::prelude::*;

use crate::body::{Bounds, Drawable, SpriteKey};
use crate::core::GameSettings;
use crate::player::Player;
use crate::world::CurrentMap;

/// Offset subtracted from map positions to get screen positions.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct Viewport {
    pub offset: Vec2,
}

impl Viewport {
    /// Center the screen on `center`.
    pub fn centered_on(center: Vec2, half_screen: Vec2) -> Self {
        Self {
            offset: center - half_screen,
        }
    }

    pub fn to_screen(&self, map_position: Vec2) -> Vec2 {
        map_position - self.offset
    }
}

/// One image to draw this frame.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    /// `None` for the map background.
    pub entity: Option<Entity>,
    pub key: String,
    /// Screen-space top-left.
    pub position: Vec2,
    pub size: Vec2,
    /// Map-space center Y, the sort key.
    pub depth: f32,
}

/// Background first, then sprites back to front.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct DrawList {
    pub background: Option<DrawItem>,
    pub items: Vec<DrawItem>,
}

impl DrawList {
    /// Iterate in draw order.
    pub fn iter(&self) -> impl Iterator<Item = &DrawItem> {
        self.background.iter().chain(self.items.iter())
    }
}

/// Sort by center Y, keeping insertion order for ties.
pub fn sort_by_depth(items: &mut [DrawItem]) {
    items.sort_by(|a, b| a.depth.total_cmp(&b.depth));
}

/// Follow the player's display rect.
pub fn update_viewport(
    settings: Res<GameSettings>,
    player_query: Query<&Bounds, With<Player>>,
    mut viewport: ResMut<Viewport>,
) {
    if let Ok(bounds) = player_query.get_single() {
        *viewport = Viewport::centered_on(bounds.center(), settings.half_screen());
    }
}

/// Collect every drawable sprite, sorted for drawing.
pub fn build_draw_list(
    viewport: Res<Viewport>,
    current: Res<CurrentMap>,
    sprites: Query<(Entity, &Bounds, &SpriteKey), With<Drawable>>,
    mut draw_list: ResMut<DrawList>,
) {
    let mut items: Vec<DrawItem> = sprites
        .iter()
        .map(|(entity, bounds, key)| DrawItem {
            entity: Some(entity),
            key: key.0.clone(),
            position: viewport.to_screen(bounds.rect.min),
            size: bounds.rect.size(),
            depth: bounds.rect.center().y,
        })
        .collect();
    sort_by_depth(&mut items);

    draw_list.background = Some(DrawItem {
        entity: None,
        key: format!("map/level_{}", current.id),
        position: viewport.to_screen(Vec2::ZERO),
        size: Vec2::ZERO,
        depth: f32::NEG_INFINITY,
    });
    draw_list.items = items;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(key: &str, depth: f32) -> DrawItem {
        DrawItem {
            entity: None,
            key: key.to_string(),
            position: Vec2::ZERO,
            size: Vec2::ZERO,
            depth,
        }
    }

    #[test]
    fn ties_keep_insertion_order() {
        let mut items = vec![item("b", 10.0), item("a", 5.0), item("c", 10.0)];
        sort_by_depth(&mut items);
        let keys: Vec<_> = items.iter().map(|i| i.key.as_str()).collect();
        assert_eq!(keys, vec!["a", "b", "c"]);
    }

    #[test]
    fn viewport_centers_player() {
        let viewport = Viewport::centered_on(Vec2::new(700.0, 400.0), Vec2::new(640.0, 360.0));
        assert_eq!(viewport.offset, Vec2::new(60.0, 40.0));
        assert_eq!(viewport.to_screen(Vec2::ZERO), Vec2::new(-60.0, -40.0));
    }
}
