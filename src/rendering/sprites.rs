//! Mirror the draw list onto Bevy sprites.
//!
//! The 2D camera sits at the origin, so screen position `(0, 0)` (top-left,
//! Y down) maps to `(-w/2, h/2)` in Bevy's world space (Y up).

use bevy::prelude::*;
use std::collections::HashMap;

use super::draw_list::{DrawItem, DrawList};
use super::visual_config::VisualConfig;
use crate::body::Drawable;
use crate::core::GameSettings;

/// Loaded image handles by sprite key.
#[derive(Resource, Default)]
pub struct SpriteImages {
    handles: HashMap<String, Handle<Image>>,
}

impl SpriteImages {
    fn get(&mut self, key: &str, asset_server: &AssetServer, config: &VisualConfig) -> Handle<Image> {
        self.handles
            .entry(key.to_string())
            .or_insert_with(|| asset_server.load(config.image_path(key)))
            .clone()
    }
}

/// Marker for the map background sprite.
#[derive(Component)]
pub struct MapBackground;

pub fn spawn_camera(mut commands: Commands) {
    commands.spawn((Camera2d, Name::new("Camera")));
}

/// Bevy translation of a draw item's center.
pub fn world_translation(item: &DrawItem, half_screen: Vec2, z: f32) -> Vec3 {
    let center = item.position + item.size / 2.0;
    Vec3::new(center.x - half_screen.x, half_screen.y - center.y, z)
}

/// Give newly drawable entities a sprite to update.
pub fn attach_sprites(mut commands: Commands, added: Query<Entity, Added<Drawable>>) {
    for entity in added.iter() {
        commands.entity(entity).insert(Sprite::default());
    }
}

/// Point a sprite at `image` and place it for `item`.
fn apply_item(
    sprite: &mut Sprite,
    transform: &mut Transform,
    item: &DrawItem,
    image: Handle<Image>,
    translation: Vec3,
) {
    if sprite.image != image {
        sprite.image = image;
    }
    if sprite.custom_size != Some(item.size) {
        sprite.custom_size = Some(item.size);
    }
    transform.translation = translation;
}

/// Update every drawable's `Sprite` and `Transform` from the draw list.
pub fn sync_sprites(
    mut commands: Commands,
    draw_list: Res<DrawList>,
    settings: Res<GameSettings>,
    config: Res<VisualConfig>,
    asset_server: Res<AssetServer>,
    mut images: ResMut<SpriteImages>,
    mut sprites: Query<(&mut Sprite, &mut Transform), With<Drawable>>,
    mut background: Query<
        (&mut Sprite, &mut Transform),
        (With<MapBackground>, Without<Drawable>),
    >,
) {
    let half_screen = settings.half_screen();

    for (rank, item) in draw_list.items.iter().enumerate() {
        let Some(entity) = item.entity else {
            continue;
        };
        let Ok((mut sprite, mut transform)) = sprites.get_mut(entity) else {
            continue;
        };
        let image = images.get(&item.key, &asset_server, &config);
        let translation = world_translation(item, half_screen, 1.0 + rank as f32 * 0.001);
        apply_item(&mut sprite, &mut transform, item, image, translation);
    }

    let Some(item) = &draw_list.background else {
        return;
    };
    let image = images.get(&item.key, &asset_server, &config);
    // Background is anchored by its top-left corner
    let translation = Vec3::new(
        item.position.x - half_screen.x,
        half_screen.y - item.position.y,
        0.0,
    );
    match background.get_single_mut() {
        Ok((mut sprite, mut transform)) => {
            sprite.image = image;
            transform.translation = translation;
        }
        Err(_) => {
            commands.spawn((
                Sprite {
                    image,
                    anchor: bevy::sprite::Anchor::TopLeft,
                    ..default()
                },
                Transform::from_translation(translation),
                MapBackground,
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sprite_is_attached_once() {
        let mut app = App::new();
        app.add_systems(Update, attach_sprites);
        let entity = app.world_mut().spawn(Drawable).id();
        app.update();

        let size = Some(Vec2::splat(64.0));
        app.world_mut()
            .get_mut::<Sprite>(entity)
            .expect("sprite attached")
            .custom_size = size;
        app.update();

        let sprite = app.world().get::<Sprite>(entity).expect("sprite kept");
        assert_eq!(sprite.custom_size, size);
    }

    #[test]
    fn item_moves_sprite_without_replacing_it() {
        let item = DrawItem {
            entity: None,
            key: "player/down_idle/0".to_string(),
            position: Vec2::new(100.0, 50.0),
            size: Vec2::splat(64.0),
            depth: 82.0,
        };
        let mut sprite = Sprite::default();
        let mut transform = Transform::default();
        let translation = world_translation(&item, Vec2::new(640.0, 360.0), 1.0);

        apply_item(&mut sprite, &mut transform, &item, Handle::default(), translation);

        assert_eq!(sprite.custom_size, Some(Vec2::splat(64.0)));
        assert_eq!(transform.translation, Vec3::new(-508.0, 278.0, 1.0));
    }
}
