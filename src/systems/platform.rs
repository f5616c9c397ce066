//! Platform movement and rider tracking.
//!
//! [`platform_patrol`] moves platform entities along their ping-pong
//! sweep and keeps the board index in sync. [`platform_ride`] then pins
//! each rider to `platform.position + offset` and detaches riders whose
//! offset overran the platform extent.

use bevy_ecs::prelude::*;
use glam::Vec2;

use crate::components::contact::Contact;
use crate::components::gridposition::GridPosition;
use crate::components::platform::{PlatformPatrol, PlatformRider};
use crate::components::player::Player;
use crate::components::rigidbody::Axis;
use crate::resources::board::Board;
use crate::resources::worldtime::WorldTime;

/// Sweep platforms along their patrol and update their board cells.
pub fn platform_patrol(
    mut query: Query<(Entity, &mut GridPosition, &mut PlatformPatrol, &Contact), Without<Player>>,
    mut board: ResMut<Board>,
    time: Res<WorldTime>,
) {
    for (entity, mut position, mut patrol, contact) in query.iter_mut() {
        let from = position.pos;
        let (lo, hi) = match patrol.axis {
            Axis::X => (patrol.origin.x, patrol.origin.x + patrol.range),
            Axis::Y => (patrol.origin.y, patrol.origin.y + patrol.range),
        };
        let step = patrol.dir * patrol.speed * time.delta;
        let coord = match patrol.axis {
            Axis::X => &mut position.pos.x,
            Axis::Y => &mut position.pos.y,
        };
        *coord += step;
        if *coord >= hi {
            *coord = hi;
            patrol.dir = -1.0;
        } else if *coord <= lo {
            *coord = lo;
            patrol.dir = 1.0;
        }
        board.update_entity_position(entity, from, position.pos, contact.extent());
    }
}

/// Pin riders to their platform and detach on overrun.
pub fn platform_ride(
    mut riders: Query<(Entity, &PlatformRider, &mut GridPosition, &Player)>,
    platforms: Query<(&GridPosition, &Contact), Without<PlatformRider>>,
    mut commands: Commands,
) {
    for (entity, rider, mut position, player) in riders.iter_mut() {
        if player.dead {
            continue;
        }
        let Ok((platform_pos, contact)) = platforms.get(rider.platform) else {
            // platform despawned under the rider
            commands.entity(entity).remove::<PlatformRider>();
            continue;
        };
        position.pos = platform_pos.pos + rider.offset;

        let (width, height) = contact.extent();
        if rider.overran(width, height) {
            commands.entity(entity).remove::<PlatformRider>();
        }
    }
}

/// Rider offset for a fresh attachment.
pub fn attach_offset(player_pos: Vec2, platform_pos: Vec2) -> Vec2 {
    player_pos - platform_pos
}
