//! Z-index component for render ordering.
//!
//! Only the parallax layers carry one: they are drawn back to front before any
//! sprite.

use bevy_ecs::prelude::Component;

/// Rendering order hint for 2D drawing. Higher values are drawn later (on top).
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct ZIndex(pub i32);
