//! Time update.
//!
//! Updates the shared [`WorldTime`](crate::resources::worldtime::WorldTime)
//! resource once per tick, applying `time_scale` to the provided delta.
//! `now_ms` is stored unscaled; the animation clock follows the wall
//! clock, not the simulation clock.
use bevy_ecs::prelude::*;

use crate::resources::worldtime::WorldTime;

/// Write elapsed/delta seconds and the wall-clock timestamp.
pub fn update_world_time(world: &mut World, dt: f32, now_ms: f64) {
    let mut wt = world.resource_mut::<WorldTime>();
    let scaled_dt = dt * wt.time_scale;
    wt.elapsed += scaled_dt;
    wt.delta = scaled_dt;
    wt.now_ms = now_ms;
}
