//! Effect message pump and channel forwarder.
//!
//! Runs at the end of the tick: first the mailbox swaps its buffers, then
//! the forwarder pushes everything written this tick onto the crossbeam
//! channel for the host to drain at its leisure.

use bevy_ecs::message::Messages;
use bevy_ecs::prelude::*;
use log::warn;

use crate::events::effect::EffectCmd;
use crate::resources::effects::EffectBus;

/// Swap the effect message buffers for this tick.
pub fn update_effect_cmds(mut messages: ResMut<Messages<EffectCmd>>) {
    messages.update();
}

/// Forward effect messages onto the host channel.
pub fn forward_effect_cmds(bus: Res<EffectBus>, mut reader: MessageReader<EffectCmd>) {
    for cmd in reader.read() {
        if bus.tx.send(*cmd).is_err() {
            // host dropped the receiver, effects go nowhere
            warn!("effect channel closed, dropping {:?}", cmd);
        }
    }
}
