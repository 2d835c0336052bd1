use bevy_ecs::prelude::Resource;

/// Simulation clock, advanced once per tick with the measured frame time.
#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct WorldTime {
    pub elapsed: f32,
    pub delta: f32,
    pub frame_count: u64,
}
