//! Platform attachment and patrol movement.
//!
//! [`PlatformRider`] locks a player's position to a platform entity plus a
//! relative offset. The offset accumulates the rider's own velocity so the
//! player can walk across the platform; the ride system detaches the rider
//! once the offset overruns the platform extent (with one unit of slack on
//! the negative side).
//!
//! [`PlatformPatrol`] is the mover for platform entities themselves: a
//! ping-pong sweep along one axis between `origin` and `origin + range`.

use bevy_ecs::prelude::{Component, Entity};
use glam::Vec2;

use crate::components::rigidbody::Axis;

/// Attachment of a rider to a platform entity.
///
/// Present only while riding; established by the contact resolver and
/// removed on overrun or respawn.
#[derive(Component, Debug, Clone, Copy)]
pub struct PlatformRider {
    pub platform: Entity,
    /// Rider position relative to the platform's position.
    pub offset: Vec2,
}

impl PlatformRider {
    pub fn new(platform: Entity, offset: Vec2) -> Self {
        Self { platform, offset }
    }

    /// True once the offset leaves the platform footprint: past the extent
    /// in the positive direction, or below -1 on either axis.
    pub fn overran(&self, width: f32, height: f32) -> bool {
        self.offset.x > width
            || self.offset.x < -1.0
            || self.offset.y > height
            || self.offset.y < -1.0
    }
}

/// Ping-pong patrol along one axis for a platform entity.
#[derive(Component, Debug, Clone, Copy)]
pub struct PlatformPatrol {
    pub origin: Vec2,
    pub axis: Axis,
    /// Sweep length in cells, from `origin` along `axis`.
    pub range: f32,
    /// Cells per second.
    pub speed: f32,
    /// Current travel direction, 1.0 or -1.0.
    pub dir: f32,
}

impl PlatformPatrol {
    pub fn new(origin: Vec2, axis: Axis, range: f32, speed: f32) -> Self {
        Self {
            origin,
            axis,
            range,
            speed,
            dir: 1.0,
        }
    }
}
