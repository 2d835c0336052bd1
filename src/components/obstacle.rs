//! Markers for the two kinds of gameplay entity.

use bevy_ecs::prelude::Component;

/// The single keyboard-controlled character.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Player;

/// One entry of the obstacle field.
///
/// `index` is the ordinal in spawn order; the last index carries the finish
/// marker. Obstacles move with the field's shared velocity, never on their own.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Obstacle {
    pub index: usize,
}
