use bevy_ecs::prelude::Component;
use glam::Vec2;

/// Fractional grid-space position (pivot) for an entity.
///
/// Coordinates are in grid cells, not pixels; screen placement is the
/// host's business. `angle` is carried for entities that render with a
/// heading but is never read by the simulation itself.
#[derive(Component, Clone, Copy, Debug)]
pub struct GridPosition {
    pub pos: Vec2,
    pub angle: f32,
}

impl GridPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            angle: 0.0,
        }
    }
}
