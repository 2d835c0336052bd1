//! World-space position component.
//!
//! [`MapPosition`] stores the top-left corner of an entity's sprite in world
//! pixels. Kinematics, the obstacle field and the renderer all read or write it.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Top-left world coordinate of an entity, in pixels.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct MapPosition {
    pub pos: Vector2,
}

impl MapPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vector2 { x, y },
        }
    }
}
