use bevy_ecs::prelude::*;

use crate::events::outcome::OutcomeChangedEvent;
use crate::resources::obstaclefield::ObstacleField;
use crate::resources::outcome::GameOutcome;

/// Declare the level won once the finish marker reaches the left edge.
///
/// Runs after collision handling, so a hit on the same tick wins the race and
/// the game stays lost.
pub fn update_outcome(
    mut outcome: ResMut<GameOutcome>,
    field: Res<ObstacleField>,
    mut commands: Commands,
) {
    if field.finished() && outcome.resolve(GameOutcome::Won) {
        commands.trigger(OutcomeChangedEvent {
            outcome: GameOutcome::Won,
        });
    }
}
