//! Components shared by every moving or drawn entity.

use bevy::prelude::*;

use super::rect::RectExt;

/// Display rectangle plus the smaller collision hitbox nested inside it.
///
/// Both live in map space. The two centers coincide after every movement
/// and every animation step.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Where the sprite is drawn.
    pub rect: Rect,
    /// What collides.
    pub hitbox: Rect,
}

impl Bounds {
    /// Build from a display rect and the hitbox inflation (usually negative).
    pub fn new(rect: Rect, hitbox_inflation: Vec2) -> Self {
        Self {
            rect,
            hitbox: rect.inflated(hitbox_inflation.x, hitbox_inflation.y),
        }
    }

    pub fn center(&self) -> Vec2 {
        self.rect.center()
    }

    /// Re-anchor the display rect on the hitbox after the hitbox moved.
    pub fn sync_rect_to_hitbox(&mut self) {
        self.rect = self.rect.recentered(self.hitbox.center());
    }

    /// Re-anchor the hitbox on the display rect after the rect moved.
    pub fn sync_hitbox_to_rect(&mut self) {
        self.hitbox = self.hitbox.recentered(self.rect.center());
    }

    /// Teleport so the display rect's top-left sits at `top_left`.
    pub fn move_to(&mut self, top_left: Vec2) {
        self.rect = self.rect.moved_to(top_left);
        self.sync_hitbox_to_rect();
    }
}

/// Movement intent for this tick.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct Motion {
    /// Not necessarily normalised; movement normalises it.
    pub direction: Vec2,
    /// Pixels per tick along the normalised direction.
    pub speed: f32,
}

impl Motion {
    pub fn new(speed: f32) -> Self {
        Self {
            direction: Vec2::ZERO,
            speed,
        }
    }
}

/// Sprite-sheet playback position.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct FrameAnimation {
    /// Fractional frame index.
    pub frame: f32,
    /// Frames advanced per tick.
    pub speed: f32,
}

impl FrameAnimation {
    pub fn new(speed: f32) -> Self {
        Self { frame: 0.0, speed }
    }

    /// Step forward. Returns `true` when the animation wrapped back to 0.
    pub fn advance(&mut self, frame_count: usize) -> bool {
        self.frame += self.speed;
        if self.frame >= frame_count.max(1) as f32 {
            self.frame = 0.0;
            return true;
        }
        false
    }

    pub fn index(&self) -> usize {
        self.frame as usize
    }

    pub fn reset(&mut self) {
        self.frame = 0.0;
    }
}

/// Blocks movement of every `Motion` entity.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Obstacle;

/// Appears in the draw list, using `SpriteKey` as its image.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Drawable;

/// Image key of the current frame (`"player/down_idle/0"`, `"objects/12"`...).
#[derive(Component, Debug, Clone, Default, PartialEq, Eq)]
pub struct SpriteKey(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn animation_wraps_past_frame_count() {
        let mut animation = FrameAnimation::new(0.5);
        assert!(!animation.advance(2));
        assert_eq!(animation.index(), 0);
        assert!(!animation.advance(2));
        assert_eq!(animation.index(), 1);
        assert!(animation.advance(2));
        assert_eq!(animation.index(), 0);
    }

    #[test]
    fn move_to_recenters_hitbox() {
        let mut bounds = Bounds::new(
            Rect::from_top_left(Vec2::ZERO, Vec2::splat(64.0)),
            Vec2::new(0.0, -10.0),
        );
        bounds.move_to(Vec2::new(100.0, 50.0));
        assert_eq!(bounds.rect.min, Vec2::new(100.0, 50.0));
        assert_eq!(bounds.hitbox.center(), bounds.rect.center());
        assert_eq!(bounds.hitbox.height(), 54.0);
    }
}
