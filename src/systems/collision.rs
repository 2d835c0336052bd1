//! Collision systems.
//!
//! - [`collision_detector`] tests the player's collider against every
//!   obstacle's padded collider and triggers a [`CollisionEvent`] per overlap.
//! - [`collision_observer`] latches [`GameOutcome::Lost`] on the first hit.
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;

use crate::components::boxcollider::BoxCollider;
use crate::components::mapposition::MapPosition;
use crate::components::obstacle::{Obstacle, Player};
use crate::events::collision::CollisionEvent;
use crate::events::outcome::OutcomeChangedEvent;
use crate::resources::outcome::GameOutcome;

/// Runs every tick, whatever the current outcome.
pub fn collision_detector(
    players: Query<(Entity, &MapPosition, &BoxCollider), With<Player>>,
    obstacles: Query<(Entity, &MapPosition, &BoxCollider), With<Obstacle>>,
    mut commands: Commands,
) {
    for (player, player_pos, player_box) in players.iter() {
        for (obstacle, obstacle_pos, obstacle_box) in obstacles.iter() {
            if player_box.overlaps(player_pos.pos, obstacle_box, obstacle_pos.pos) {
                commands.trigger(CollisionEvent { player, obstacle });
            }
        }
    }
}

pub fn collision_observer(
    trigger: On<CollisionEvent>,
    mut outcome: ResMut<GameOutcome>,
    mut commands: Commands,
) {
    let event = trigger.event();
    log::debug!(
        "Collision between player {:?} and obstacle {:?}",
        event.player,
        event.obstacle
    );
    if outcome.resolve(GameOutcome::Lost) {
        commands.trigger(OutcomeChangedEvent {
            outcome: GameOutcome::Lost,
        });
    }
}
