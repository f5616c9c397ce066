//! Contact resolution.
//!
//! After integration, each living player asks the board for the entities
//! in its 3x3 cell neighborhood, collects the action tags their emitters
//! produce, and applies them in a fixed priority order. A restart
//! short-circuits everything else this tick; blockers patch the blocking
//! snapshot per axis so a diagonal push can still slide along a wall.

use bevy_ecs::prelude::*;
use glam::Vec2;
use log::{debug, info};
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::components::animation::{AnimationCursor, ClipId};
use crate::components::contact::{BlockingPosition, Contact, PlayerAction};
use crate::components::gridposition::GridPosition;
use crate::components::inventory::ToyParts;
use crate::components::platform::PlatformRider;
use crate::components::player::Player;
use crate::components::rigidbody::RigidBody;
use crate::components::timer::RespawnTimer;
use crate::events::effect::{EffectCmd, SoundEffect};
use crate::events::toy::ToyCompleted;
use crate::resources::board::Board;
use crate::resources::clipstore::ClipStore;
use crate::resources::gameconfig::GameConfig;
use crate::systems::platform::attach_offset;

/// Priority order the resolver applies action tags in.
const ACTION_ORDER: [PlayerAction; 6] = [
    PlayerAction::Restart,
    PlayerAction::Block,
    PlayerAction::AddToyPart,
    PlayerAction::AcceptToy,
    PlayerAction::StickToPlatform,
    PlayerAction::Ice,
];

/// Resolve board contacts for every living player.
#[allow(clippy::type_complexity)]
pub fn resolve_contacts(
    mut players: Query<(
        Entity,
        &mut Player,
        &mut GridPosition,
        &mut RigidBody,
        &mut AnimationCursor,
        &mut ToyParts,
        Option<&PlatformRider>,
    )>,
    emitters: Query<(&GridPosition, &Contact, Option<&BlockingPosition>), Without<Player>>,
    board: Res<Board>,
    config: Res<GameConfig>,
    clips: Res<ClipStore>,
    mut effects: MessageWriter<EffectCmd>,
    mut commands: Commands,
) {
    for (entity, mut player, position, mut body, mut cursor, mut toy_parts, rider) in
        players.iter_mut()
    {
        if player.dead {
            continue;
        }

        player.blocking_position = position.pos;

        let mut pending: FxHashMap<PlayerAction, SmallVec<[Entity; 4]>> = FxHashMap::default();
        for other in board.surrounding_entities(entity, position.pos) {
            let Ok((other_pos, contact, _)) = emitters.get(other) else {
                continue;
            };
            for action in contact.actions_on_contact(other_pos.pos, position.pos) {
                pending.entry(action).or_default().push(other);
            }
        }
        if pending.is_empty() && !player.ice_effect_playing {
            continue;
        }

        let mut restarted = false;
        for action in ACTION_ORDER {
            if restarted {
                break;
            }
            let Some(sources) = pending.get(&action) else {
                continue;
            };
            match action {
                PlayerAction::Restart => {
                    begin_restart(
                        &mut player,
                        &mut body,
                        &mut cursor,
                        &clips,
                        config.respawn_delay,
                        entity,
                        &mut commands,
                    );
                    restarted = true;
                }
                PlayerAction::Block => {
                    player.blocked = true;
                    let x_probe = Vec2::new(position.pos.x, player.prev_position.y);
                    let mut blocked_x = false;
                    for &blocker in sources {
                        let Ok((other_pos, contact, snap)) = emitters.get(blocker) else {
                            continue;
                        };
                        if !contact.actions_on_contact(other_pos.pos, x_probe).is_empty() {
                            blocked_x = true;
                            player.blocking_position.x =
                                snap.map(|s| s.0.x).unwrap_or(player.prev_position.x);
                        }
                    }
                    // y resolves against the already-settled x, so a wall
                    // cell diagonal to the motion cannot freeze the free
                    // axis
                    let resolved_x = if blocked_x {
                        player.blocking_position.x
                    } else {
                        position.pos.x
                    };
                    let y_probe = Vec2::new(resolved_x, position.pos.y);
                    for &blocker in sources {
                        let Ok((other_pos, contact, snap)) = emitters.get(blocker) else {
                            continue;
                        };
                        if !contact.actions_on_contact(other_pos.pos, y_probe).is_empty() {
                            player.blocking_position.y =
                                snap.map(|s| s.0.y).unwrap_or(player.prev_position.y);
                        }
                    }
                }
                PlayerAction::AddToyPart => {
                    for &pickup in sources {
                        let Ok((_, contact, _)) = emitters.get(pickup) else {
                            continue;
                        };
                        if let Contact::PartPickup { part } = contact
                            && toy_parts.add(part)
                        {
                            debug!("player {} picked up part '{}'", player.id, part);
                            effects.write(EffectCmd::sound_for(SoundEffect::PickItem, player.id));
                        }
                    }
                }
                PlayerAction::AcceptToy => {
                    if !toy_parts.is_empty() {
                        let delivered = toy_parts.clear();
                        debug!(
                            "player {} delivered {} part(s) at the station",
                            player.id,
                            delivered.len()
                        );
                        commands.trigger(ToyCompleted { player: entity });
                    }
                }
                PlayerAction::StickToPlatform => {
                    if rider.is_none()
                        && let Some(&platform) = sources.first()
                        && let Ok((platform_pos, _, _)) = emitters.get(platform)
                    {
                        debug!("player {} stuck to a platform", player.id);
                        commands.entity(entity).insert(PlatformRider::new(
                            platform,
                            attach_offset(position.pos, platform_pos.pos),
                        ));
                    }
                }
                PlayerAction::Ice => {
                    player.on_ice = true;
                    if !player.ice_effect_playing {
                        player.ice_effect_playing = true;
                        effects.write(EffectCmd::sound_for(SoundEffect::IceStart, player.id));
                    }
                }
            }
        }

        // falling edge of the ice loop
        if !restarted && player.ice_effect_playing && !pending.contains_key(&PlayerAction::Ice) {
            player.ice_effect_playing = false;
            effects.write(EffectCmd::sound_for(SoundEffect::IceStop, player.id));
        }
    }
}

/// Kill the player and arm the respawn countdown. Idempotent while dead.
pub fn begin_restart(
    player: &mut Player,
    body: &mut RigidBody,
    cursor: &mut AnimationCursor,
    clips: &ClipStore,
    respawn_delay: f32,
    entity: Entity,
    commands: &mut Commands,
) {
    if player.dead {
        return;
    }
    info!("player {} down, respawning in {}s", player.id, respawn_delay);
    player.dead = true;
    player.on_ice = false;
    player.blocked = false;
    body.stop();
    cursor.force(ClipId::Death, clips.death.start);
    commands.entity(entity).insert(RespawnTimer::new(respawn_delay));
}
