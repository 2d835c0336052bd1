//! Input-controlled movement component.
//!
//! Read by [`crate::systems::kinematics::player_kinematics`] together with the
//! shared [`InputState`](crate::resources::input::InputState).

use bevy_ecs::prelude::Component;

/// Horizontal movement driven by the left/right keys.
///
/// The step is applied once per tick while a key is held, not scaled by the
/// frame delta.
#[derive(Component, Clone, Copy, Debug)]
pub struct InputControlled {
    /// Pixels moved per tick.
    pub step: f32,
}

impl InputControlled {
    pub fn new(step: f32) -> Self {
        Self { step }
    }
}
