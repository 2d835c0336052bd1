//! Obstacle field system.
//!
//! Moves every [`Obstacle`] by the field's shared velocity and moves the
//! finish marker by the same amount. Obstacles are never respawned; once they
//! leave the screen they keep sliding left.
use bevy_ecs::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::obstacle::Obstacle;
use crate::resources::obstaclefield::ObstacleField;
use crate::resources::worldtime::WorldTime;

pub fn obstacle_field(
    mut query: Query<&mut MapPosition, With<Obstacle>>,
    mut field: ResMut<ObstacleField>,
    time: Res<WorldTime>,
) {
    let dx = field.displacement(time.delta);
    for mut position in query.iter_mut() {
        position.pos.x += dx;
    }
    field.advance(time.delta);
}
