//! Parallax scrolling system.
use bevy_ecs::prelude::*;

use crate::components::scrolllayer::ScrollLayer;
use crate::resources::worldtime::WorldTime;

/// Slide every background layer left by its own speed.
pub fn scroll_layers(mut query: Query<&mut ScrollLayer>, time: Res<WorldTime>) {
    for mut layer in query.iter_mut() {
        layer.scroll(time.delta);
    }
}
