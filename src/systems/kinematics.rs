//! Control-driven kinematics integration.
//!
//! For each living player, each axis independently: accelerate toward the
//! held direction, or decay toward zero when nothing is held. The on-ice
//! pulse doubles acceleration and halves deceleration for exactly this
//! tick, then disarms itself. Position then integrates `velocity * delta`
//! clamped to board bounds — unless the player rides a platform, in which
//! case the platform offset accumulates the velocity instead and the ride
//! system owns the absolute position.

use bevy_ecs::prelude::*;

use crate::components::gridposition::GridPosition;
use crate::components::platform::PlatformRider;
use crate::components::player::{ControlScheme, Facing, Player};
use crate::components::rigidbody::{Axis, RigidBody};
use crate::resources::board::Board;
use crate::resources::input::{DirectionControl, InputState};
use crate::resources::worldtime::WorldTime;

/// Integrate velocity from held controls and velocity into position.
pub fn kinematics(
    mut query: Query<(
        &mut Player,
        &ControlScheme,
        &mut RigidBody,
        &mut GridPosition,
        Option<&mut PlatformRider>,
    )>,
    input: Res<InputState>,
    board: Res<Board>,
    time: Res<WorldTime>,
) {
    for (mut player, scheme, mut body, mut position, rider) in query.iter_mut() {
        if player.dead {
            continue;
        }

        player.blocked = false;
        player.prev_position = position.pos;
        player.decelerating = false;

        // One-tick ice pulse: consumed here, re-armed (or not) by the
        // contact resolver later this tick.
        let (accel_factor, decel_factor) = if player.on_ice {
            player.on_ice = false;
            (2.0, 0.5)
        } else {
            (1.0, 1.0)
        };

        if input.is_control_active(*scheme, DirectionControl::Left) {
            body.accelerate_axis(Axis::X, -1.0, accel_factor);
            player.facing = Facing::Left;
        } else if body.velocity.x < 0.0 && body.decelerate_axis(Axis::X, decel_factor) {
            player.decelerating = true;
        }

        if input.is_control_active(*scheme, DirectionControl::Right) {
            body.accelerate_axis(Axis::X, 1.0, accel_factor);
            player.facing = Facing::Right;
        } else if body.velocity.x > 0.0 && body.decelerate_axis(Axis::X, decel_factor) {
            player.decelerating = true;
        }

        if input.is_control_active(*scheme, DirectionControl::Up) {
            body.accelerate_axis(Axis::Y, -1.0, accel_factor);
            player.facing = Facing::Back;
        } else if body.velocity.y < 0.0 && body.decelerate_axis(Axis::Y, decel_factor) {
            player.decelerating = true;
        }

        if input.is_control_active(*scheme, DirectionControl::Down) {
            body.accelerate_axis(Axis::Y, 1.0, accel_factor);
            player.facing = Facing::Front;
        } else if body.velocity.y > 0.0 && body.decelerate_axis(Axis::Y, decel_factor) {
            player.decelerating = true;
        }

        match rider {
            Some(mut rider) => {
                // walking across the platform moves the offset, not the
                // absolute position
                rider.offset += body.velocity * time.delta;
            }
            None => {
                let max = board.max_pos();
                let next = position.pos + body.velocity * time.delta;
                position.pos.x = next.x.clamp(0.0, max.x);
                position.pos.y = next.y.clamp(0.0, max.y);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn setup_world() -> (World, Entity) {
        let mut world = World::new();
        world.insert_resource(InputState::default());
        world.insert_resource(Board::new(28, 16));
        world.insert_resource(WorldTime {
            delta: 1.0,
            ..Default::default()
        });
        let player = world
            .spawn((
                Player::new(0, Vec2::new(5.0, 5.0)),
                ControlScheme::Main,
                RigidBody::new(0.1, 0.5),
                GridPosition::new(5.0, 5.0),
            ))
            .id();
        (world, player)
    }

    fn run(world: &mut World) {
        let mut schedule = Schedule::default();
        schedule.add_systems(kinematics);
        schedule.run(world);
    }

    #[test]
    fn test_right_held_reaches_max_after_five_ticks() {
        let (mut world, player) = setup_world();
        world
            .resource_mut::<InputState>()
            .maindirection_right
            .press();

        run(&mut world);
        assert_eq!(world.get::<RigidBody>(player).unwrap().velocity.x, 0.1);

        for _ in 0..4 {
            run(&mut world);
        }
        assert_eq!(world.get::<RigidBody>(player).unwrap().velocity.x, 0.5);
        assert_eq!(
            world.get::<Player>(player).unwrap().facing,
            Facing::Right
        );
    }

    #[test]
    fn test_position_clamped_to_board_bounds() {
        let (mut world, player) = setup_world();
        world.get_mut::<GridPosition>(player).unwrap().pos = Vec2::new(26.9, 5.0);
        world.get_mut::<RigidBody>(player).unwrap().velocity = Vec2::new(0.5, 0.0);

        run(&mut world);
        let pos = world.get::<GridPosition>(player).unwrap().pos;
        assert_eq!(pos.x, 27.0, "clamped at width - 1");
    }

    #[test]
    fn test_release_decays_without_sign_flip() {
        let (mut world, player) = setup_world();
        world.get_mut::<RigidBody>(player).unwrap().velocity = Vec2::new(0.25, 0.0);

        for _ in 0..10 {
            run(&mut world);
            let v = world.get::<RigidBody>(player).unwrap().velocity.x;
            assert!(v >= 0.0);
        }
        assert_eq!(world.get::<RigidBody>(player).unwrap().velocity.x, 0.0);
    }

    #[test]
    fn test_decelerating_flag_set_only_while_decaying() {
        let (mut world, player) = setup_world();
        world.get_mut::<RigidBody>(player).unwrap().velocity = Vec2::new(0.05, 0.0);
        run(&mut world);
        assert!(world.get::<Player>(player).unwrap().decelerating);
        // velocity hit zero, next tick is a plain rest tick
        run(&mut world);
        assert!(!world.get::<Player>(player).unwrap().decelerating);
    }

    #[test]
    fn test_ice_pulse_lasts_one_tick() {
        let (mut world, player) = setup_world();
        world.get_mut::<Player>(player).unwrap().on_ice = true;
        world
            .resource_mut::<InputState>()
            .maindirection_right
            .press();

        run(&mut world);
        let world_ref = &world;
        assert_eq!(
            world_ref.get::<RigidBody>(player).unwrap().velocity.x,
            0.2,
            "doubled acceleration on the pulse tick"
        );
        assert!(!world.get::<Player>(player).unwrap().on_ice, "pulse disarmed");

        run(&mut world);
        assert_eq!(
            world.get::<RigidBody>(player).unwrap().velocity.x,
            0.3,
            "back to the normal step"
        );
    }

    #[test]
    fn test_dead_player_ignores_input() {
        let (mut world, player) = setup_world();
        world.get_mut::<Player>(player).unwrap().dead = true;
        world
            .resource_mut::<InputState>()
            .maindirection_right
            .press();

        run(&mut world);
        assert_eq!(world.get::<RigidBody>(player).unwrap().velocity.x, 0.0);
    }

    #[test]
    fn test_rider_accumulates_offset_instead_of_moving() {
        let (mut world, player) = setup_world();
        let platform = world.spawn_empty().id();
        world
            .entity_mut(player)
            .insert(PlatformRider::new(platform, Vec2::ZERO));
        // held control keeps the velocity at the clamp for the tick
        world
            .resource_mut::<InputState>()
            .maindirection_right
            .press();
        world.get_mut::<RigidBody>(player).unwrap().velocity = Vec2::new(0.5, 0.0);

        run(&mut world);
        assert_eq!(
            world.get::<PlatformRider>(player).unwrap().offset,
            Vec2::new(0.5, 0.0)
        );
        assert_eq!(
            world.get::<GridPosition>(player).unwrap().pos,
            Vec2::new(5.0, 5.0),
            "absolute position untouched by the integrator while riding"
        );
    }
}
