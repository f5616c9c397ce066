//! Bridge carrying effect triggers from the simulation to the host.
//!
//! Systems write [`EffectCmd`](crate::events::effect::EffectCmd) messages;
//! a forwarding system pushes them onto a crossbeam channel whose receiver
//! the host owns. The simulation never blocks on the channel and never
//! knows what the host does with the triggers (sound, CSS classes,
//! nothing at all in tests).

use bevy_ecs::prelude::*;
use crossbeam_channel::{Receiver, Sender, unbounded};

use crate::events::effect::EffectCmd;

/// Sender half of the effect channel, owned by the ECS world.
#[derive(Resource)]
pub struct EffectBus {
    pub tx: Sender<EffectCmd>,
}

/// Create the effect channel and register the bus plus the message
/// mailbox. Returns the receiver for the host to drain.
pub fn setup_effects(world: &mut World) -> Receiver<EffectCmd> {
    let (tx, rx) = unbounded::<EffectCmd>();
    world.insert_resource(EffectBus { tx });
    world.insert_resource(Messages::<EffectCmd>::default());
    rx
}
