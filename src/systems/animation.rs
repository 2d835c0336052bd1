//! Animation system.
//!
//! Advances every [`Animation`] by the frame delta and updates the visible
//! [`Sprite`] frame. Entities that can jump only animate while on the ground,
//! so the run cycle holds its frame mid-air.
use bevy_ecs::prelude::*;

use crate::components::animation::Animation;
use crate::components::jumper::Jumper;
use crate::components::sprite::Sprite;
use crate::resources::worldtime::WorldTime;

pub fn animation(
    mut query: Query<(&mut Animation, &mut Sprite, Option<&Jumper>)>,
    time: Res<WorldTime>,
) {
    for (mut anim, mut sprite, jumper) in query.iter_mut() {
        if jumper.is_some_and(|j| j.airborne) {
            continue;
        }
        anim.advance(&mut sprite, time.delta);
    }
}
