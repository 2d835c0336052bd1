use bevy_ecs::prelude::Component;
use raylib::prelude::{Rectangle, Vector2};

/// Axis-aligned collision box relative to an entity's [`MapPosition`].
///
/// [`MapPosition`]: crate::components::mapposition::MapPosition
#[derive(Debug, Clone, Copy, PartialEq, Component)]
pub struct BoxCollider {
    pub size: Vector2,
    pub offset: Vector2,
}

impl BoxCollider {
    /// Create a BoxCollider with given size
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vector2::new(width, height),
            offset: Vector2::zero(),
        }
    }

    /// Collider covering a `width` x `height` sprite shrunk by `pad` on every side.
    ///
    /// A pad of half the sprite size or more yields an empty box that never
    /// overlaps anything.
    pub fn inset(width: f32, height: f32, pad: f32) -> Self {
        Self {
            size: Vector2::new(width - 2.0 * pad, height - 2.0 * pad),
            offset: Vector2::new(pad, pad),
        }
    }

    /// World-space rectangle of the collider for a given entity position.
    pub fn rect(&self, position: Vector2) -> Rectangle {
        Rectangle {
            x: position.x + self.offset.x,
            y: position.y + self.offset.y,
            width: self.size.x,
            height: self.size.y,
        }
    }

    /// AABB vs AABB overlap test against another BoxCollider at a different entity position.
    pub fn overlaps(&self, position: Vector2, other: &Self, other_position: Vector2) -> bool {
        rects_overlap(&self.rect(position), &other.rect(other_position))
    }
}

/// Interval-overlap test on both axes. Touching edges do not overlap, and a
/// rectangle with non-positive width or height overlaps nothing.
pub fn rects_overlap(a: &Rectangle, b: &Rectangle) -> bool {
    if a.width <= 0.0 || a.height <= 0.0 || b.width <= 0.0 || b.height <= 0.0 {
        return false;
    }
    a.x < b.x + b.width && a.x + a.width > b.x && a.y < b.y + b.height && a.y + a.height > b.y
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inset_shrinks_on_all_sides() {
        let c = BoxCollider::inset(100.0, 100.0, 20.0);
        let r = c.rect(Vector2::new(10.0, 10.0));
        assert_eq!((r.x, r.y, r.width, r.height), (30.0, 30.0, 60.0, 60.0));
    }

    #[test]
    fn test_inset_by_half_is_degenerate() {
        let character = BoxCollider::new(24.0, 24.0);
        let obstacle = BoxCollider::inset(100.0, 100.0, 50.0);
        let pos = Vector2::new(100.0, 100.0);
        let r = obstacle.rect(pos);
        assert_eq!((r.x, r.y, r.width, r.height), (150.0, 150.0, 0.0, 0.0));
        assert!(!character.overlaps(pos, &obstacle, pos));
    }

    #[test]
    fn test_degenerate_rect_inside_other_still_misses() {
        let big = Rectangle::new(0.0, 0.0, 100.0, 100.0);
        let empty = Rectangle::new(50.0, 50.0, 0.0, 0.0);
        assert!(!rects_overlap(&big, &empty));
        assert!(!rects_overlap(&empty, &big));
    }

    #[test]
    fn test_overlap_and_separation() {
        let a = BoxCollider::new(10.0, 10.0);
        let b = BoxCollider::new(10.0, 10.0);
        assert!(a.overlaps(Vector2::new(0.0, 0.0), &b, Vector2::new(5.0, 5.0)));
        assert!(!a.overlaps(Vector2::new(0.0, 0.0), &b, Vector2::new(20.0, 0.0)));
        assert!(!a.overlaps(Vector2::new(0.0, 0.0), &b, Vector2::new(0.0, 20.0)));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = BoxCollider::new(10.0, 10.0);
        let b = BoxCollider::new(10.0, 10.0);
        assert!(!a.overlaps(Vector2::new(0.0, 0.0), &b, Vector2::new(10.0, 0.0)));
    }

    #[test]
    fn test_offset_is_applied() {
        let a = BoxCollider::new(10.0, 10.0);
        let b = BoxCollider::inset(30.0, 30.0, 10.0);
        // b covers [10, 20) x [10, 20) relative to its position
        assert!(!a.overlaps(Vector2::new(0.0, 0.0), &b, Vector2::new(0.0, 0.0)));
        assert!(a.overlaps(Vector2::new(5.0, 5.0), &b, Vector2::new(0.0, 0.0)));
    }
}
