//! Game outcome resource.
//!
//! Tri-state result of the run. Transitions only leave
//! [`GameOutcome::InProgress`]; once `Lost` or `Won` the value is latched for
//! the rest of the run.

use bevy_ecs::prelude::Resource;

#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameOutcome {
    #[default]
    InProgress,
    Lost,
    Won,
}

impl GameOutcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameOutcome::InProgress)
    }

    /// Move to `next` if the run is still in progress.
    ///
    /// Returns true when the value changed.
    pub fn resolve(&mut self, next: GameOutcome) -> bool {
        if self.is_terminal() || next == GameOutcome::InProgress {
            return false;
        }
        *self = next;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_in_progress() {
        let o = GameOutcome::default();
        assert_eq!(o, GameOutcome::InProgress);
        assert!(!o.is_terminal());
    }

    #[test]
    fn test_lost_is_latched() {
        let mut o = GameOutcome::InProgress;
        assert!(o.resolve(GameOutcome::Lost));
        assert!(!o.resolve(GameOutcome::Won));
        assert!(!o.resolve(GameOutcome::InProgress));
        assert_eq!(o, GameOutcome::Lost);
    }

    #[test]
    fn test_won_is_latched() {
        let mut o = GameOutcome::InProgress;
        assert!(o.resolve(GameOutcome::Won));
        assert!(!o.resolve(GameOutcome::Lost));
        assert_eq!(o, GameOutcome::Won);
    }
}
