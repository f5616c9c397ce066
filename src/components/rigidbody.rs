//! Kinematic body component for board entities.
//!
//! The [`RigidBody`] component stores velocity plus the per-axis
//! acceleration parameters the kinematics system integrates each tick.
//! Acceleration is applied in fixed steps per tick while a control is
//! held; without a held control the velocity decays back toward zero by
//! the same step, never overshooting.

use bevy_ecs::prelude::Component;
use glam::Vec2;

/// Velocity and acceleration parameters for a controlled entity.
///
/// # Fields
/// - `velocity` - Current velocity in grid cells per second
/// - `acceleration_step` - Velocity change applied per tick while a
///   directional control is held (or released, for decay)
/// - `max_velocity` - Per-axis velocity magnitude clamp
#[derive(Component, Clone, Debug)]
pub struct RigidBody {
    pub velocity: Vec2,
    pub acceleration_step: f32,
    pub max_velocity: f32,
}

impl RigidBody {
    pub fn new(acceleration_step: f32, max_velocity: f32) -> Self {
        Self {
            velocity: Vec2::ZERO,
            acceleration_step,
            max_velocity,
        }
    }

    /// Accelerate one axis toward `sign * max_velocity * factor`.
    ///
    /// `sign` is -1.0 or 1.0. The clamp scales with `factor` so an ice
    /// pulse raises the reachable top speed for that tick.
    pub fn accelerate_axis(&mut self, axis: Axis, sign: f32, factor: f32) {
        let step = self.acceleration_step * factor;
        let limit = self.max_velocity * factor;
        let v = self.axis_mut(axis);
        *v = (*v + sign * step).clamp(-limit, limit);
    }

    /// Decay one axis toward zero by `acceleration_step * factor`.
    ///
    /// Returns true if the axis was nonzero and is therefore decelerating.
    /// The decay never flips the sign of the velocity.
    pub fn decelerate_axis(&mut self, axis: Axis, factor: f32) -> bool {
        let step = self.acceleration_step * factor;
        let v = self.axis_mut(axis);
        if *v < 0.0 {
            *v = (*v + step).min(0.0);
            true
        } else if *v > 0.0 {
            *v = (*v - step).max(0.0);
            true
        } else {
            false
        }
    }

    pub fn stop(&mut self) {
        self.velocity = Vec2::ZERO;
    }

    fn axis_mut(&mut self, axis: Axis) -> &mut f32 {
        match axis {
            Axis::X => &mut self.velocity.x,
            Axis::Y => &mut self.velocity.y,
        }
    }
}

/// Board axis selector for per-axis kinematics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}
