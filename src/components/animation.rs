//! Sprite-sheet frame animation state.
//!
//! [`Animation`] holds the fixed-cadence timer that walks a sprite's source
//! rectangle across a grid-shaped sheet. [`Animation::advance`] is the whole
//! algorithm; the [`animation`](crate::systems::animation::animation) system
//! only feeds it the frame delta.

use bevy_ecs::prelude::Component;

use crate::components::sprite::Sprite;

#[derive(Debug, Clone, PartialEq, Component)]
pub struct Animation {
    /// Frame that will be shown on the next advance, in `[0, total_frames)`.
    pub frame_index: usize,
    /// Seconds a frame is held before advancing.
    pub frame_interval: f32,
    /// Seconds accumulated since the last advance.
    pub elapsed_time: f32,
    /// Frames in the cycle. May be less than the grid size (unused cells).
    pub total_frames: usize,
    /// Columns of the sheet grid.
    pub frames_per_row: usize,
}

impl Animation {
    pub fn new(total_frames: usize, frames_per_row: usize, frame_interval: f32) -> Self {
        assert!(total_frames > 0, "animation needs at least one frame");
        assert!(frames_per_row > 0, "animation grid needs at least one column");
        assert!(frame_interval > 0.0, "frame interval must be positive");
        Self {
            frame_index: 0,
            frame_interval,
            elapsed_time: 0.0,
            total_frames,
            frames_per_row,
        }
    }

    /// Accumulate `delta` and, once the interval is reached, move the sprite's
    /// source rectangle to the current frame and step the index.
    ///
    /// At most one frame is advanced per call, however large `delta` is.
    /// Returns true when the frame changed.
    pub fn advance(&mut self, sprite: &mut Sprite, delta: f32) -> bool {
        self.elapsed_time += delta;
        if self.elapsed_time < self.frame_interval {
            return false;
        }

        let frame = self.frame_index % self.total_frames;
        sprite.offset.x = (frame % self.frames_per_row) as f32 * sprite.width;
        sprite.offset.y = (frame / self.frames_per_row) as f32 * sprite.height;

        self.elapsed_time = 0.0;
        self.frame_index = (self.frame_index + 1) % self.total_frames;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nebula() -> (Animation, Sprite) {
        (
            Animation::new(60, 8, 0.05),
            Sprite::from_sheet("nebula", 800.0, 800.0, 8, 8),
        )
    }

    #[test]
    fn test_no_advance_before_interval() {
        let (mut anim, mut sprite) = nebula();
        assert!(!anim.advance(&mut sprite, 0.02));
        assert_eq!(anim.frame_index, 0);
        assert!((anim.elapsed_time - 0.02).abs() < 1e-6);
        assert_eq!(sprite.offset.x, 0.0);
    }

    #[test]
    fn test_advance_shows_current_then_steps() {
        let (mut anim, mut sprite) = nebula();
        anim.frame_index = 3;
        assert!(anim.advance(&mut sprite, 0.05));
        assert_eq!(sprite.offset.x, 300.0);
        assert_eq!(sprite.offset.y, 0.0);
        assert_eq!(anim.frame_index, 4);
        assert_eq!(anim.elapsed_time, 0.0);
    }

    #[test]
    fn test_advance_moves_to_next_row() {
        let (mut anim, mut sprite) = nebula();
        anim.frame_index = 9;
        anim.advance(&mut sprite, 0.1);
        assert_eq!(sprite.offset.x, 100.0);
        assert_eq!(sprite.offset.y, 100.0);
    }

    #[test]
    fn test_index_wraps_at_total_frames() {
        let (mut anim, mut sprite) = nebula();
        anim.frame_index = 59;
        anim.advance(&mut sprite, 0.05);
        assert_eq!(anim.frame_index, 0);
        // frame 59 sits at column 3, row 7
        assert_eq!(sprite.offset.x, 300.0);
        assert_eq!(sprite.offset.y, 700.0);
    }

    #[test]
    fn test_large_delta_advances_once() {
        let (mut anim, mut sprite) = nebula();
        anim.advance(&mut sprite, 1.0);
        assert_eq!(anim.frame_index, 1);
        assert_eq!(anim.elapsed_time, 0.0);
    }

    #[test]
    fn test_offsets_stay_on_grid_over_many_cycles() {
        let (mut anim, mut sprite) = nebula();
        for _ in 0..500 {
            anim.advance(&mut sprite, 0.05);
            assert!(anim.frame_index < anim.total_frames);
            assert_eq!(sprite.offset.x % sprite.width, 0.0);
            assert_eq!(sprite.offset.y % sprite.height, 0.0);
            assert!(sprite.offset.x < 800.0 && sprite.offset.y < 800.0);
        }
    }

    #[test]
    #[should_panic]
    fn test_new_rejects_zero_frames() {
        let _ = Animation::new(0, 1, 0.1);
    }
}
