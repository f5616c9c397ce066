//! Player bookkeeping component and its small state enums.
//!
//! [`Player`] holds everything about a player that is neither position nor
//! velocity: coarse locomotion state, facing, the death flag, the one-tick
//! ice pulse, and the per-tick blocking snapshot the contact resolver and
//! commit system exchange.
//!
//! [`PlayerRig`] is the output stage: it mirrors what the per-direction
//! animation players of the presentation layer would show (active track,
//! displayed frame, visibility), so the simulation stays renderable and
//! testable without a renderer.

use bevy_ecs::prelude::Component;
use glam::Vec2;

/// Coarse locomotion state, distinct from the active animation clip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LocomotionState {
    Rest,
    Walk,
}

/// Facing direction set by the last held directional control.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Facing {
    Front,
    Back,
    Left,
    Right,
}

impl Facing {
    /// Animation track for this facing. Left and right share one side
    /// track; left is rendered by flipping it horizontally.
    pub fn track(self) -> Track {
        match self {
            Facing::Front => Track::Front,
            Facing::Back => Track::Back,
            Facing::Left | Facing::Right => Track::Side,
        }
    }
}

/// Animation track selector for the rig.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Track {
    Front,
    Back,
    Side,
    Death,
}

/// Which directional control group drives this player.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlScheme {
    Main,
    Secondary,
}

/// Per-player simulation bookkeeping.
#[derive(Component, Debug)]
pub struct Player {
    pub id: u32,
    /// Spawn position the respawn sequence resets to.
    pub start_pos: Vec2,
    pub state: LocomotionState,
    pub facing: Facing,
    pub dead: bool,
    /// One-tick acceleration pulse armed by ice contact, consumed by the
    /// next integration step.
    pub on_ice: bool,
    /// Edge tracker for the ice start/stop effects.
    pub ice_effect_playing: bool,
    /// Set by the integrator when an axis decays with no control held.
    pub decelerating: bool,
    /// Set by the contact resolver; commit rolls the position back.
    pub blocked: bool,
    /// Pre-resolution position snapshot, axis-patched by blockers.
    pub blocking_position: Vec2,
    /// Position at the start of the tick, used for the board commit.
    pub prev_position: Vec2,
    pub score: u32,
}

impl Player {
    pub fn new(id: u32, start_pos: Vec2) -> Self {
        Self {
            id,
            start_pos,
            state: LocomotionState::Rest,
            facing: Facing::Front,
            dead: false,
            on_ice: false,
            ice_effect_playing: false,
            decelerating: false,
            blocked: false,
            blocking_position: start_pos,
            prev_position: start_pos,
            score: 0,
        }
    }
}

/// Headless stand-in for the per-direction animation players.
///
/// The advance system keeps `track` and `frame` in sync with the cursor;
/// a host that owns real animation players maps this to
/// `goToAndStop(frame)` plus container visibility per track.
#[derive(Component, Clone, Copy, Debug)]
pub struct PlayerRig {
    pub track: Track,
    pub frame: u32,
    pub flipped: bool,
    pub visible: bool,
}

impl Default for PlayerRig {
    fn default() -> Self {
        Self {
            track: Track::Front,
            frame: 0,
            flipped: false,
            visible: true,
        }
    }
}
