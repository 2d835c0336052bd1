//! Jump capability for the player character.

use bevy_ecs::prelude::Component;

/// Vertical jump state.
///
/// `airborne` is recomputed by kinematics every tick from the ground test and
/// gates both jumping and the run-cycle animation.
#[derive(Component, Clone, Copy, Debug)]
pub struct Jumper {
    /// Velocity added on a jump, in pixels per second (negative is up).
    pub jump_velocity: f32,
    pub airborne: bool,
}

impl Jumper {
    pub fn new(jump_velocity: f32) -> Self {
        Self {
            jump_velocity,
            airborne: false,
        }
    }
}
