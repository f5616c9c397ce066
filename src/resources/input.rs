//! Per-frame directional control resource.
//!
//! The host (window loop, test harness, demo script) writes control state
//! between ticks; the kinematics system only reads it. Controls come in
//! two groups so a second player is representable: main (WASD-style) and
//! secondary (arrow-style), matching a player's
//! [`ControlScheme`](crate::components::player::ControlScheme).

use bevy_ecs::prelude::Resource;

use crate::components::player::ControlScheme;

/// One directional control slot.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoolState {
    /// Whether the control is currently held this frame.
    pub active: bool,
    /// Whether the control was just pressed this frame.
    pub just_pressed: bool,
    /// Whether the control was just released this frame.
    pub just_released: bool,
}

impl BoolState {
    pub fn press(&mut self) {
        if !self.active {
            self.just_pressed = true;
        }
        self.active = true;
    }

    pub fn release(&mut self) {
        if self.active {
            self.just_released = true;
        }
        self.active = false;
    }

    /// Drop the edge flags at the end of a tick.
    pub fn settle(&mut self) {
        self.just_pressed = false;
        self.just_released = false;
    }
}

/// Directional control identifier within a control group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectionControl {
    Up,
    Down,
    Left,
    Right,
}

/// Resource capturing the per-frame control state relevant to gameplay.
#[derive(Resource, Debug, Clone, Default)]
pub struct InputState {
    pub maindirection_up: BoolState,
    pub maindirection_down: BoolState,
    pub maindirection_left: BoolState,
    pub maindirection_right: BoolState,
    pub secondarydirection_up: BoolState,
    pub secondarydirection_down: BoolState,
    pub secondarydirection_left: BoolState,
    pub secondarydirection_right: BoolState,
}

impl InputState {
    pub fn control(&self, scheme: ControlScheme, dir: DirectionControl) -> &BoolState {
        match (scheme, dir) {
            (ControlScheme::Main, DirectionControl::Up) => &self.maindirection_up,
            (ControlScheme::Main, DirectionControl::Down) => &self.maindirection_down,
            (ControlScheme::Main, DirectionControl::Left) => &self.maindirection_left,
            (ControlScheme::Main, DirectionControl::Right) => &self.maindirection_right,
            (ControlScheme::Secondary, DirectionControl::Up) => &self.secondarydirection_up,
            (ControlScheme::Secondary, DirectionControl::Down) => &self.secondarydirection_down,
            (ControlScheme::Secondary, DirectionControl::Left) => &self.secondarydirection_left,
            (ControlScheme::Secondary, DirectionControl::Right) => &self.secondarydirection_right,
        }
    }

    pub fn control_mut(&mut self, scheme: ControlScheme, dir: DirectionControl) -> &mut BoolState {
        match (scheme, dir) {
            (ControlScheme::Main, DirectionControl::Up) => &mut self.maindirection_up,
            (ControlScheme::Main, DirectionControl::Down) => &mut self.maindirection_down,
            (ControlScheme::Main, DirectionControl::Left) => &mut self.maindirection_left,
            (ControlScheme::Main, DirectionControl::Right) => &mut self.maindirection_right,
            (ControlScheme::Secondary, DirectionControl::Up) => &mut self.secondarydirection_up,
            (ControlScheme::Secondary, DirectionControl::Down) => &mut self.secondarydirection_down,
            (ControlScheme::Secondary, DirectionControl::Left) => &mut self.secondarydirection_left,
            (ControlScheme::Secondary, DirectionControl::Right) => &mut self.secondarydirection_right,
        }
    }

    /// Whether a directional control is currently held.
    pub fn is_control_active(&self, scheme: ControlScheme, dir: DirectionControl) -> bool {
        self.control(scheme, dir).active
    }

    /// Clear edge flags on every slot.
    pub fn settle(&mut self) {
        self.maindirection_up.settle();
        self.maindirection_down.settle();
        self.maindirection_left.settle();
        self.maindirection_right.settle();
        self.secondarydirection_up.settle();
        self.secondarydirection_down.settle();
        self.secondarydirection_left.settle();
        self.secondarydirection_right.settle();
    }
}
