//! Notification that the run reached a terminal outcome.
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;

use crate::resources::outcome::GameOutcome;
use crate::resources::worldtime::WorldTime;

/// Fired exactly once per run, when [`GameOutcome`] leaves `InProgress`.
#[derive(Event, Debug, Clone, Copy)]
pub struct OutcomeChangedEvent {
    pub outcome: GameOutcome,
}

/// Observer that logs the terminal outcome with the time it took.
pub fn log_outcome_observer(trigger: On<OutcomeChangedEvent>, time: Res<WorldTime>) {
    match trigger.event().outcome {
        GameOutcome::Lost => log::info!(
            "Game over after {:.2}s ({} frames)",
            time.elapsed,
            time.frame_count
        ),
        GameOutcome::Won => log::info!(
            "Level complete after {:.2}s ({} frames)",
            time.elapsed,
            time.frame_count
        ),
        GameOutcome::InProgress => {}
    }
}
