//! Camera offset and draw order.

mod common;

use bevy::prelude::*;
use common::{MapBuilder, TestGame};
use magispeech::body::{Bounds, Drawable, SpriteKey};
use magispeech::rendering::{DrawList, Viewport};
use magispeech::world::MapLayer;

fn sprite_at(center_y: f32, key: &str) -> (Bounds, Drawable, SpriteKey) {
    (
        Bounds::new(
            Rect::from_center_size(Vec2::new(200.0, center_y), Vec2::splat(64.0)),
            Vec2::ZERO,
        ),
        Drawable,
        SpriteKey(key.to_string()),
    )
}

#[test]
fn sprites_draw_in_center_y_order() {
    let map = MapBuilder::new().cell(MapLayer::Entities, 5, 5, 394).build(0);
    let mut game = TestGame::new(vec![map]);

    let world = game.app.world_mut();
    let ours = [
        world.spawn(sprite_at(300.0, "middle")).id(),
        world.spawn(sprite_at(100.0, "back")).id(),
        world.spawn(sprite_at(500.0, "front")).id(),
    ];
    game.update();

    let draw_list = game.resource::<DrawList>();
    let keys: Vec<&str> = draw_list
        .items
        .iter()
        .filter(|item| item.entity.is_some_and(|e| ours.contains(&e)))
        .map(|item| item.key.as_str())
        .collect();
    assert_eq!(keys, vec!["back", "middle", "front"]);

    let depths: Vec<f32> = draw_list.items.iter().map(|item| item.depth).collect();
    assert!(depths.windows(2).all(|pair| pair[0] <= pair[1]));

    let background = draw_list.iter().next().expect("background comes first");
    assert_eq!(background.key, "map/level_0");
    assert!(background.entity.is_none());
}

#[test]
fn viewport_follows_player() {
    let map = MapBuilder::new().cell(MapLayer::Entities, 5, 5, 394).build(0);
    let game = TestGame::new(vec![map]);

    // Player center (352, 352) minus half of 1280x720
    assert_eq!(
        game.resource::<Viewport>().offset,
        Vec2::new(352.0 - 640.0, 352.0 - 360.0)
    );

    let background = game
        .resource::<DrawList>()
        .background
        .clone()
        .expect("background is set");
    assert_eq!(background.position, Vec2::new(288.0, 8.0));
}
