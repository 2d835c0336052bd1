//! Character kinematics.
//!
//! Each tick the character is tested against the ground line, gravity is
//! applied while airborne, a jump is started on the tick the jump key goes
//! down, and the left/right keys nudge the character by a fixed step. The
//! resulting vertical velocity is integrated later by
//! [`movement`](crate::systems::movement::movement).
use bevy_ecs::prelude::*;

use crate::components::inputcontrolled::InputControlled;
use crate::components::jumper::Jumper;
use crate::components::mapposition::MapPosition;
use crate::components::obstacle::Player;
use crate::components::rigidbody::RigidBody;
use crate::components::sprite::Sprite;
use crate::resources::input::InputState;
use crate::resources::screensize::ScreenSize;
use crate::resources::worldtime::WorldTime;

/// Name of the force toggled by the ground test.
pub const GRAVITY_FORCE: &str = "gravity";

/// True when a sprite of `height` at `y` rests on (or below) the world floor.
pub fn is_grounded(y: f32, height: f32, world_height: f32) -> bool {
    y >= world_height - height
}

/// Clamp a horizontal position so a sprite of `width` stays inside the world.
pub fn clamp_x(x: f32, width: f32, world_width: f32) -> f32 {
    x.clamp(0.0, (world_width - width).max(0.0))
}

pub fn player_kinematics(
    mut query: Query<
        (
            &mut MapPosition,
            &mut RigidBody,
            &mut Jumper,
            &Sprite,
            Option<&InputControlled>,
        ),
        With<Player>,
    >,
    input: Res<InputState>,
    screen: Res<ScreenSize>,
    time: Res<WorldTime>,
) {
    let world_w = screen.w as f32;
    let world_h = screen.h as f32;

    for (mut position, mut rigidbody, mut jumper, sprite, controlled) in query.iter_mut() {
        if is_grounded(position.pos.y, sprite.height, world_h) {
            rigidbody.velocity.y = 0.0;
            rigidbody.set_force_enabled(GRAVITY_FORCE, false);
            jumper.airborne = false;
        } else {
            rigidbody.set_force_enabled(GRAVITY_FORCE, true);
            let acceleration = rigidbody.total_acceleration();
            rigidbody.velocity.y += acceleration.y * time.delta;
            jumper.airborne = true;
        }

        if input.jump.just_pressed && !jumper.airborne {
            rigidbody.velocity.y += jumper.jump_velocity;
        }

        if let Some(controlled) = controlled {
            if input.move_left.active {
                position.pos.x -= controlled.step;
            }
            if input.move_right.active {
                position.pos.x += controlled.step;
            }
            position.pos.x = clamp_x(position.pos.x, sprite.width, world_w);
        }
    }
}
