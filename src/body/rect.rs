//! Rectangle helpers in map space (pixels, Y pointing down).
//!
//! `Rect::min` is the top-left corner and `Rect::max` the bottom-right.

use bevy::prelude::*;

/// Sprite-style operations on Bevy's `Rect`.
pub trait RectExt {
    /// Rectangle with its top-left corner at `top_left`.
    fn from_top_left(top_left: Vec2, size: Vec2) -> Self;

    /// Strict overlap: rectangles that only share an edge do not collide.
    fn overlaps(&self, other: &Self) -> bool;

    /// Grow (or shrink, with negative values) by `dx`/`dy` in total, keeping the center.
    fn inflated(&self, dx: f32, dy: f32) -> Self;

    /// Same size, centered on `center`.
    fn recentered(&self, center: Vec2) -> Self;

    /// Same size, top-left corner moved to `top_left`.
    fn moved_to(&self, top_left: Vec2) -> Self;

    fn translated(&self, offset: Vec2) -> Self;

    fn top_left(&self) -> Vec2;
}

impl RectExt for Rect {
    fn from_top_left(top_left: Vec2, size: Vec2) -> Self {
        Rect::from_corners(top_left, top_left + size)
    }

    fn overlaps(&self, other: &Self) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }

    fn inflated(&self, dx: f32, dy: f32) -> Self {
        let size = (self.size() + Vec2::new(dx, dy)).max(Vec2::ZERO);
        Rect::from_center_size(self.center(), size)
    }

    fn recentered(&self, center: Vec2) -> Self {
        Rect::from_center_size(center, self.size())
    }

    fn moved_to(&self, top_left: Vec2) -> Self {
        Rect::from_top_left(top_left, self.size())
    }

    fn translated(&self, offset: Vec2) -> Self {
        Rect {
            min: self.min + offset,
            max: self.max + offset,
        }
    }

    fn top_left(&self) -> Vec2 {
        self.min
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn touching_edges_do_not_overlap() {
        let a = Rect::from_top_left(Vec2::ZERO, Vec2::splat(64.0));
        let b = Rect::from_top_left(Vec2::new(64.0, 0.0), Vec2::splat(64.0));
        assert!(!a.overlaps(&b));
        assert!(a.overlaps(&b.translated(Vec2::new(-1.0, 0.0))));
    }

    #[test]
    fn inflate_keeps_center() {
        let rect = Rect::from_top_left(Vec2::new(10.0, 20.0), Vec2::splat(64.0));
        let hitbox = rect.inflated(-2.0, -26.0);
        assert_eq!(hitbox.center(), rect.center());
        assert_eq!(hitbox.size(), Vec2::new(62.0, 38.0));
    }
}
