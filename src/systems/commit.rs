//! Block rollback and the board position commit.
//!
//! Runs after contact resolution. A blocked player is snapped to the
//! patched blocking snapshot and fully stopped; the free axis still
//! slides because its position advance survives the snap and the axis
//! re-accelerates next tick. Then every living player's board
//! registration moves from the pre-tick cell to the final one. Dead
//! players keep their pre-death cell until respawn moves them.

use bevy_ecs::prelude::*;

use crate::components::gridposition::GridPosition;
use crate::components::player::Player;
use crate::components::rigidbody::RigidBody;
use crate::resources::board::Board;

/// Finalize player positions and the board index for this tick.
pub fn commit_positions(
    mut query: Query<(Entity, &mut Player, &mut GridPosition, &mut RigidBody)>,
    mut board: ResMut<Board>,
) {
    for (entity, mut player, mut position, mut body) in query.iter_mut() {
        if player.dead {
            continue;
        }

        if player.blocked {
            body.stop();
            position.pos = player.blocking_position;
            player.blocked = false;
        }

        if position.pos != player.prev_position {
            board.update_entity_position(entity, player.prev_position, position.pos, (1.0, 1.0));
        }
    }
}
