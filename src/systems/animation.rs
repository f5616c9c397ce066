//! Locomotion state selection and animation frame advance.
//!
//! [`select_locomotion`] derives the coarse rest/walk state from velocity
//! and queues the matching transition clips. [`advance_animation`] steps
//! the frame cursor against the wall clock and mirrors the result into
//! the [`PlayerRig`].
//!
//! The frame clock is the host timestamp, not the simulation delta, so a
//! paused or slowed simulation keeps animating at its own pace.

use bevy_ecs::prelude::*;

use crate::components::animation::{AnimationClip, AnimationCursor, ClipId};
use crate::components::player::{Facing, LocomotionState, Player, PlayerRig, Track};
use crate::components::rigidbody::RigidBody;
use crate::events::effect::{EffectCmd, SoundEffect};
use crate::resources::clipstore::ClipStore;
use crate::resources::gameconfig::GameConfig;
use crate::resources::worldtime::WorldTime;

/// Velocity magnitude under which a decelerating player counts as resting,
/// in acceleration steps.
const REST_THRESHOLD_STEPS: f32 = 8.0;

/// Derive rest/walk from velocity and queue the transition clips.
pub fn select_locomotion(
    mut query: Query<(&mut Player, &RigidBody, &mut AnimationCursor)>,
    mut effects: MessageWriter<EffectCmd>,
) {
    for (mut player, body, mut cursor) in query.iter_mut() {
        if player.dead {
            continue;
        }

        let threshold = REST_THRESHOLD_STEPS * body.acceleration_step;
        let at_rest = body.velocity == glam::Vec2::ZERO
            || (player.decelerating
                && body.velocity.x.abs() <= threshold
                && body.velocity.y.abs() <= threshold);
        let target = if at_rest {
            LocomotionState::Rest
        } else {
            LocomotionState::Walk
        };
        if target == player.state {
            continue;
        }

        match target {
            LocomotionState::Walk => {
                cursor.enqueue_once(ClipId::RestToWalk);
                cursor.enqueue_once(ClipId::Walk);
                effects.write(EffectCmd::sound_for(SoundEffect::WalkStart, player.id));
            }
            LocomotionState::Rest => {
                cursor.enqueue_once(ClipId::WalkToRest);
                cursor.enqueue(ClipId::Rest);
                effects.write(EffectCmd::sound_for(SoundEffect::WalkStop, player.id));
            }
        }
        player.state = target;
    }
}

/// Step the frame cursor and mirror it into the rig.
pub fn advance_animation(
    mut query: Query<(&mut AnimationCursor, &Player, &mut PlayerRig)>,
    clips: Res<ClipStore>,
    config: Res<GameConfig>,
    time: Res<WorldTime>,
) {
    let frame_ms = config.frame_duration_ms();
    for (mut cursor, player, mut rig) in query.iter_mut() {
        let clip = clips.get(cursor.active);
        // clip switched under the cursor, snap and restart the clock
        if !clip.contains(cursor.frame) {
            cursor.frame = clip.start;
            cursor.last_frame_at = None;
        }

        let looping = clip.looped && cursor.queue.is_empty();
        let (frame, stamped_at, finished) = next_frame(
            clip,
            cursor.frame,
            looping,
            cursor.last_frame_at,
            time.now_ms,
            frame_ms,
        );
        cursor.frame = frame;
        cursor.last_frame_at = Some(stamped_at);

        if finished
            && let Some(next) = cursor.queue.pop_front()
        {
            cursor.active = next;
            cursor.frame = clips.get(next).start;
            cursor.last_frame_at = None;
        }

        rig.track = if player.dead {
            Track::Death
        } else {
            player.facing.track()
        };
        rig.frame = cursor.frame;
        rig.flipped = player.facing == Facing::Left;
    }
}

/// Advance `current` within `clip` by however many whole frame periods
/// elapsed between `last_ms` and `now_ms`. Returns the new frame, the new
/// clock stamp, and whether a non-looping clip sits on its last frame.
///
/// The stamp moves in whole periods so the fractional remainder carries
/// into the next tick instead of being dropped.
fn next_frame(
    clip: AnimationClip,
    current: u32,
    looping: bool,
    last_ms: Option<f64>,
    now_ms: f64,
    frame_ms: f64,
) -> (u32, f64, bool) {
    let at_end = |frame: u32| !looping && frame == clip.end;
    let Some(last) = last_ms else {
        return (current, now_ms, at_end(current));
    };
    let elapsed = now_ms - last;
    if elapsed < frame_ms {
        return (current, last, at_end(current));
    }

    let steps = (elapsed / frame_ms).floor() as u32;
    let advanced = current - clip.start + steps;
    let frame = if looping {
        clip.start + advanced % clip.len()
    } else {
        clip.start + advanced.min(clip.len() - 1)
    };
    let stamped = last + f64::from(steps) * frame_ms;
    (frame, stamped, at_end(frame))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::player::ControlScheme;
    use bevy_ecs::message::Messages;
    use glam::Vec2;

    fn setup_world() -> (World, Entity) {
        let mut world = World::new();
        let mut config = GameConfig::new();
        // 25 fps keeps the frame period at a round 40 ms
        config.animation_fps = 25.0;
        world.insert_resource(config);
        world.insert_resource(ClipStore::default());
        world.insert_resource(WorldTime::default());
        world.insert_resource(Messages::<EffectCmd>::default());
        let player = world
            .spawn((
                Player::new(0, Vec2::new(5.0, 5.0)),
                ControlScheme::Main,
                RigidBody::new(0.1, 0.5),
                AnimationCursor::new(ClipId::Rest, 1),
                PlayerRig::default(),
            ))
            .id();
        (world, player)
    }

    fn run_at(world: &mut World, now_ms: f64) {
        world.resource_mut::<WorldTime>().now_ms = now_ms;
        let mut schedule = Schedule::default();
        schedule.add_systems(advance_animation);
        schedule.run(world);
    }

    fn run_select(world: &mut World) {
        let mut schedule = Schedule::default();
        schedule.add_systems(select_locomotion);
        schedule.run(world);
    }

    #[test]
    fn test_frames_follow_wall_clock() {
        let (mut world, player) = setup_world();
        run_at(&mut world, 1000.0);
        assert_eq!(world.get::<AnimationCursor>(player).unwrap().frame, 1);

        // 39 ms: under one period, holds
        run_at(&mut world, 1039.0);
        assert_eq!(world.get::<AnimationCursor>(player).unwrap().frame, 1);

        // 41 ms total: one period passed
        run_at(&mut world, 1041.0);
        assert_eq!(world.get::<AnimationCursor>(player).unwrap().frame, 2);

        // a stall catches up multiple frames at once
        run_at(&mut world, 1201.0);
        assert_eq!(world.get::<AnimationCursor>(player).unwrap().frame, 6);
    }

    #[test]
    fn test_looping_clip_wraps_to_start() {
        let (mut world, player) = setup_world();
        world.get_mut::<AnimationCursor>(player).unwrap().frame = 40;
        run_at(&mut world, 1000.0);
        run_at(&mut world, 1040.0);
        assert_eq!(
            world.get::<AnimationCursor>(player).unwrap().frame,
            1,
            "rest clip wraps 40 -> 1"
        );
    }

    #[test]
    fn test_queued_clip_suppresses_loop_and_takes_over() {
        let (mut world, player) = setup_world();
        {
            let mut cursor = world.get_mut::<AnimationCursor>(player).unwrap();
            cursor.active = ClipId::Walk;
            cursor.frame = 73;
            cursor.enqueue(ClipId::WalkToRest);
        }
        run_at(&mut world, 1000.0);
        // one period: 73 -> 74, the walk clip's last frame, finished
        run_at(&mut world, 1040.0);
        let cursor = world.get::<AnimationCursor>(player).unwrap();
        assert_eq!(cursor.active, ClipId::WalkToRest);
        assert_eq!(cursor.frame, 75);
        assert!(cursor.queue.is_empty());
    }

    #[test]
    fn test_death_clip_holds_last_frame() {
        let (mut world, player) = setup_world();
        {
            let mut cursor = world.get_mut::<AnimationCursor>(player).unwrap();
            cursor.force(ClipId::Death, 134);
        }
        world.get_mut::<Player>(player).unwrap().dead = true;
        run_at(&mut world, 1000.0);
        run_at(&mut world, 2000.0);
        let cursor = world.get::<AnimationCursor>(player).unwrap();
        assert_eq!(cursor.frame, 135, "held at the strip end");
        assert_eq!(cursor.active, ClipId::Death);
        assert_eq!(
            world.get::<PlayerRig>(player).unwrap().track,
            Track::Death
        );
    }

    #[test]
    fn test_out_of_range_frame_snaps_to_clip_start() {
        let (mut world, player) = setup_world();
        {
            let mut cursor = world.get_mut::<AnimationCursor>(player).unwrap();
            cursor.active = ClipId::Walk;
            cursor.frame = 3;
            cursor.last_frame_at = Some(500.0);
        }
        run_at(&mut world, 1000.0);
        let cursor = world.get::<AnimationCursor>(player).unwrap();
        assert_eq!(cursor.frame, 51);
        assert_eq!(cursor.last_frame_at, Some(1000.0), "clock restarted");
    }

    #[test]
    fn test_walk_transition_queued_once_with_effect() {
        let (mut world, player) = setup_world();
        world.get_mut::<RigidBody>(player).unwrap().velocity = Vec2::new(0.3, 0.0);
        run_select(&mut world);
        run_select(&mut world);

        let cursor = world.get::<AnimationCursor>(player).unwrap();
        assert_eq!(
            cursor.queue.iter().copied().collect::<Vec<_>>(),
            vec![ClipId::RestToWalk, ClipId::Walk]
        );
        assert_eq!(world.get::<Player>(player).unwrap().state, LocomotionState::Walk);
        let effects: Vec<EffectCmd> = world
            .resource_mut::<Messages<EffectCmd>>()
            .drain()
            .collect();
        assert_eq!(
            effects,
            vec![EffectCmd::sound_for(SoundEffect::WalkStart, 0)]
        );
    }

    #[test]
    fn test_slow_decay_counts_as_rest() {
        let (mut world, player) = setup_world();
        {
            let mut p = world.get_mut::<Player>(player).unwrap();
            p.state = LocomotionState::Walk;
            p.decelerating = true;
        }
        // 0.1 step puts the rest threshold at 0.8
        world.get_mut::<RigidBody>(player).unwrap().velocity = Vec2::new(0.5, 0.0);
        run_select(&mut world);
        assert_eq!(world.get::<Player>(player).unwrap().state, LocomotionState::Rest);

        let cursor = world.get::<AnimationCursor>(player).unwrap();
        assert_eq!(
            cursor.queue.iter().copied().collect::<Vec<_>>(),
            vec![ClipId::WalkToRest, ClipId::Rest]
        );
    }

    #[test]
    fn test_fast_decay_still_walks() {
        let (mut world, player) = setup_world();
        {
            let mut p = world.get_mut::<Player>(player).unwrap();
            p.state = LocomotionState::Walk;
            p.decelerating = true;
        }
        world.get_mut::<RigidBody>(player).unwrap().velocity = Vec2::new(0.9, 0.0);
        run_select(&mut world);
        assert_eq!(world.get::<Player>(player).unwrap().state, LocomotionState::Walk);
    }

    #[test]
    fn test_dead_player_state_untouched() {
        let (mut world, player) = setup_world();
        world.get_mut::<Player>(player).unwrap().dead = true;
        world.get_mut::<RigidBody>(player).unwrap().velocity = Vec2::new(0.3, 0.0);
        run_select(&mut world);
        assert_eq!(world.get::<Player>(player).unwrap().state, LocomotionState::Rest);
    }
}
