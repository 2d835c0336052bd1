//! Collision event between the player and an obstacle.
//!
//! The [`collision_detector`](crate::systems::collision::collision_detector)
//! system triggers one [`CollisionEvent`] per overlapping pair each tick. The
//! [`collision_observer`](crate::systems::collision::collision_observer) turns
//! it into a lost game.
use bevy_ecs::prelude::*;

/// Event fired when the player's collider overlaps an obstacle's padded collider.
#[derive(Event, Debug, Clone, Copy)]
pub struct CollisionEvent {
    pub player: Entity,
    pub obstacle: Entity,
}
