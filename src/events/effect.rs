//! Effect trigger messages.
//!
//! The simulation describes effects by name only; playback is the host's
//! concern. `player` carries the id of the player the effect belongs to
//! for triggers the host scopes per player (the ice loop, walk loop).

use bevy_ecs::message::Message;

/// Named effect triggers the simulation can fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    Respawn,
    IceStart,
    IceStop,
    PickItem,
    WalkStart,
    WalkStop,
    ToyDone,
}

/// Message sent toward the host's effect sink.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectCmd {
    Sound {
        effect: SoundEffect,
        player: Option<u32>,
    },
}

impl EffectCmd {
    pub fn sound_for(effect: SoundEffect, player: u32) -> Self {
        EffectCmd::Sound {
            effect,
            player: Some(player),
        }
    }
}
