//! Respawn countdown and the reset sequence.
//!
//! The contact resolver arms a [`RespawnTimer`] when a player dies; this
//! system counts it down in simulation seconds and, on expiry, resets the
//! player to its spawn point with everything zeroed: velocity, carried
//! parts, ice flags, locomotion state, animation cursor, and any platform
//! attachment.

use bevy_ecs::prelude::*;
use log::info;

use crate::components::animation::{AnimationCursor, ClipId};
use crate::components::gridposition::GridPosition;
use crate::components::inventory::ToyParts;
use crate::components::platform::PlatformRider;
use crate::components::player::{Facing, LocomotionState, Player, PlayerRig};
use crate::components::rigidbody::RigidBody;
use crate::components::timer::RespawnTimer;
use crate::events::effect::{EffectCmd, SoundEffect};
use crate::resources::board::Board;
use crate::resources::clipstore::ClipStore;
use crate::resources::worldtime::WorldTime;

/// Tick respawn timers and reset expired players at their spawn point.
#[allow(clippy::type_complexity)]
pub fn respawn_players(
    mut query: Query<(
        Entity,
        &mut RespawnTimer,
        &mut Player,
        &mut GridPosition,
        &mut RigidBody,
        &mut AnimationCursor,
        &mut ToyParts,
        &mut PlayerRig,
    )>,
    mut board: ResMut<Board>,
    clips: Res<ClipStore>,
    time: Res<WorldTime>,
    mut effects: MessageWriter<EffectCmd>,
    mut commands: Commands,
) {
    for (entity, mut timer, mut player, mut position, mut body, mut cursor, mut toy_parts, mut rig) in
        query.iter_mut()
    {
        timer.remaining -= time.delta;
        if timer.remaining > 0.0 {
            continue;
        }

        info!("player {} respawns at {:?}", player.id, player.start_pos);
        commands
            .entity(entity)
            .remove::<RespawnTimer>()
            .remove::<PlatformRider>();

        board.update_entity_position(entity, player.prev_position, player.start_pos, (1.0, 1.0));
        position.pos = player.start_pos;
        player.prev_position = player.start_pos;
        player.blocking_position = player.start_pos;
        player.dead = false;
        player.blocked = false;
        player.on_ice = false;
        player.decelerating = false;
        player.facing = Facing::Front;
        player.state = LocomotionState::Rest;
        body.stop();
        cursor.force(ClipId::Rest, clips.rest.start);
        toy_parts.clear();
        rig.visible = true;

        effects.write(EffectCmd::sound_for(SoundEffect::Respawn, player.id));
        if player.ice_effect_playing {
            player.ice_effect_playing = false;
            effects.write(EffectCmd::sound_for(SoundEffect::IceStop, player.id));
        }
    }
}
