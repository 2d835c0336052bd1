//! World size resource.
//!
//! The world and the window share the same pixel dimensions. Kinematics uses
//! them for the ground line and horizontal clamp, setup for spawn positions,
//! and the renderer for the overlay text.

use bevy_ecs::prelude::Resource;

/// Current world size in pixels.
#[derive(Resource, Clone, Copy, Debug)]
pub struct ScreenSize {
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}
