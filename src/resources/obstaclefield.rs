//! Shared state of the obstacle field.
//!
//! All obstacles slide left with one velocity, stored here rather than on each
//! entity. The finish marker starts at the last obstacle's x position and is
//! moved by the same rule; the level is complete once it reaches zero.

use bevy_ecs::prelude::Resource;

#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct ObstacleField {
    /// Horizontal velocity of every obstacle, in pixels per second.
    pub velocity: f32,
    /// Remaining scroll distance until the level is complete.
    pub finish_line: f32,
}

impl ObstacleField {
    pub fn new(velocity: f32, finish_line: f32) -> Self {
        Self {
            velocity,
            finish_line,
        }
    }

    /// Horizontal displacement of every obstacle over `delta` seconds.
    pub fn displacement(&self, delta: f32) -> f32 {
        self.velocity * delta
    }

    /// Move the finish marker by one tick.
    pub fn advance(&mut self, delta: f32) {
        self.finish_line += self.displacement(delta);
    }

    /// True once the finish marker reached the left edge of the world.
    pub fn finished(&self) -> bool {
        self.finish_line <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_moves_finish_line() {
        let mut field = ObstacleField::new(-200.0, 512.0);
        field.advance(0.5);
        assert_eq!(field.finish_line, 412.0);
        assert!(!field.finished());
    }

    #[test]
    fn test_finished_at_zero() {
        let mut field = ObstacleField::new(-200.0, 512.0);
        field.advance(2.56);
        assert!(field.finish_line.abs() < 1e-3);
        field.finish_line = 0.0;
        assert!(field.finished());
    }
}
