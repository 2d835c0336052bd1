use bevy_ecs::prelude::Component;
use raylib::prelude::{Rectangle, Vector2};

/// Sprite is identified by a texture key, the size of one frame and the offset
/// of the current frame inside the spritesheet.
///
/// `offset` + `width`/`height` is the source rectangle blitted every frame; the
/// [`Animation`](crate::components::animation::Animation) component moves the
/// offset across the sheet grid.
#[derive(Component, Clone, Debug)]
pub struct Sprite {
    pub tex_key: String,
    pub width: f32,
    pub height: f32,
    pub offset: Vector2,
}

impl Sprite {
    /// Sprite showing the top-left frame of a sheet split into a
    /// `columns` x `rows` grid. Frame sizes are whole pixels; leftover
    /// pixels on the right and bottom edges are never shown.
    pub fn from_sheet(
        tex_key: impl Into<String>,
        sheet_width: f32,
        sheet_height: f32,
        columns: usize,
        rows: usize,
    ) -> Self {
        assert!(columns > 0 && rows > 0, "sprite sheet grid must be non-empty");
        Self {
            tex_key: tex_key.into(),
            width: (sheet_width / columns as f32).floor(),
            height: (sheet_height / rows as f32).floor(),
            offset: Vector2::zero(),
        }
    }

    /// Source rectangle of the current frame inside the sheet.
    pub fn frame_rect(&self) -> Rectangle {
        Rectangle {
            x: self.offset.x,
            y: self.offset.y,
            width: self.width,
            height: self.height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_sheet_divides_grid() {
        let s = Sprite::from_sheet("nebula", 800.0, 800.0, 8, 8);
        assert_eq!(s.width, 100.0);
        assert_eq!(s.height, 100.0);
        assert_eq!(s.offset, Vector2::zero());
    }

    #[test]
    fn test_frame_rect_follows_offset() {
        let mut s = Sprite::from_sheet("scarfy", 768.0, 128.0, 6, 1);
        s.offset = Vector2 { x: 256.0, y: 0.0 };
        let r = s.frame_rect();
        assert_eq!((r.x, r.y, r.width, r.height), (256.0, 0.0, 128.0, 128.0));
    }

    #[test]
    fn test_from_sheet_floors_uneven_grid() {
        let s = Sprite::from_sheet("nebula", 805.0, 803.0, 8, 8);
        assert_eq!(s.width, 100.0);
        assert_eq!(s.height, 100.0);
    }

    #[test]
    #[should_panic]
    fn test_from_sheet_rejects_empty_grid() {
        let _ = Sprite::from_sheet("bad", 10.0, 10.0, 0, 1);
    }
}
