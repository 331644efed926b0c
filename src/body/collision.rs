//! Axis-separated movement against static obstacles.
//!
//! Displacement is applied on X, resolved, then on Y, resolved. Resolving
//! both axes at once lets diagonal movement slip through corners.

use bevy::prelude::*;

use super::components::Bounds;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    Horizontal,
    Vertical,
}

/// Move `bounds` by `direction * speed`, clamping the hitbox against every
/// obstacle hitbox it ends up intersecting.
///
/// A non-zero direction is normalised first; a zero direction passes through
/// untouched. Returns the direction actually used.
pub fn move_body(bounds: &mut Bounds, direction: Vec2, speed: f32, obstacles: &[Rect]) -> Vec2 {
    let direction = direction.normalize_or_zero();

    bounds.hitbox.min.x += direction.x * speed;
    bounds.hitbox.max.x += direction.x * speed;
    resolve_axis(&mut bounds.hitbox, Axis::Horizontal, direction, obstacles);

    bounds.hitbox.min.y += direction.y * speed;
    bounds.hitbox.max.y += direction.y * speed;
    resolve_axis(&mut bounds.hitbox, Axis::Vertical, direction, obstacles);

    bounds.sync_rect_to_hitbox();
    direction
}

/// Push the leading edge back onto the trailing edge of each obstacle hit.
fn resolve_axis(hitbox: &mut Rect, axis: Axis, direction: Vec2, obstacles: &[Rect]) {
    use super::rect::RectExt;

    for obstacle in obstacles {
        if !obstacle.overlaps(hitbox) {
            continue;
        }
        match axis {
            Axis::Horizontal => {
                let width = hitbox.width();
                if direction.x > 0.0 {
                    hitbox.max.x = obstacle.min.x;
                    hitbox.min.x = hitbox.max.x - width;
                }
                if direction.x < 0.0 {
                    hitbox.min.x = obstacle.max.x;
                    hitbox.max.x = hitbox.min.x + width;
                }
            }
            Axis::Vertical => {
                let height = hitbox.height();
                if direction.y > 0.0 {
                    hitbox.max.y = obstacle.min.y;
                    hitbox.min.y = hitbox.max.y - height;
                }
                if direction.y < 0.0 {
                    hitbox.min.y = obstacle.max.y;
                    hitbox.max.y = hitbox.min.y + height;
                }
            }
        }
    }
}
