use bevy_ecs::prelude::Resource;

/// Simulation clock plus the wall clock for animation timing.
///
/// `delta`/`elapsed` are simulation seconds (scaled by `time_scale`);
/// `now_ms` is the unscaled wall-clock timestamp handed into the tick,
/// consumed only by the animation frame advance.
#[derive(Resource, Clone, Copy)]
pub struct WorldTime {
    pub elapsed: f32,
    pub delta: f32,
    pub time_scale: f32,
    pub now_ms: f64,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed: 0.0,
            delta: 0.0,
            time_scale: 1.0,
            now_ms: 0.0,
        }
    }
}
