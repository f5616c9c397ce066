// Counts down simulation seconds until the player respawns.
use bevy_ecs::prelude::Component;

#[derive(Component, Debug)]
pub struct RespawnTimer {
    pub remaining: f32,
}

impl RespawnTimer {
    pub fn new(duration: f32) -> Self {
        RespawnTimer {
            remaining: duration,
        }
    }
}
