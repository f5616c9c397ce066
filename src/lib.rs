//! Toydash: a headless, tick-based simulation of a top-down grid action
//! game. Players accelerate across a cell grid, slide on ice, ride
//! patrolling platforms, collect toy parts and deliver them at the
//! station, and respawn after touching a hazard.
//!
//! The crate is renderer-agnostic: a host drives [`game::Game::tick`]
//! with frame deltas and wall-clock timestamps, writes control state
//! into the input resource, and drains named effect triggers from a
//! channel. The [`components::player::PlayerRig`] component carries
//! everything a presentation layer needs to draw a player.

pub mod components;
pub mod events;
pub mod game;
pub mod resources;
pub mod systems;
