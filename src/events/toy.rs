//! Toy completion event and observer.
//!
//! The contact resolver triggers [`ToyCompleted`] when a player reaches
//! the toy station; the observer keeps score and fires the celebration
//! effect, decoupled from the resolver itself.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::info;

use crate::components::player::Player;
use crate::events::effect::{EffectCmd, SoundEffect};

/// Fired when a player delivers a toy at the station.
#[derive(Event, Debug, Clone, Copy)]
pub struct ToyCompleted {
    pub player: Entity,
}

/// Bump the delivering player's score and fire the celebration effect.
pub fn observe_toy_completed(
    trigger: On<ToyCompleted>,
    mut players: Query<&mut Player>,
    mut effects: MessageWriter<EffectCmd>,
) {
    let entity = trigger.event().player;
    let Ok(mut player) = players.get_mut(entity) else {
        return;
    };
    player.score += 1;
    info!("player {} completed a toy (score {})", player.id, player.score);
    effects.write(EffectCmd::sound_for(SoundEffect::ToyDone, player.id));
}
