//! ECS components for entities.
//!
//! This module groups all component types that can be attached to entities
//! on the board. Components define data such as position, kinematics,
//! animation playback, inventory, and contact behavior.
//!
//! Submodules overview:
//! - [`animation`] – clip ranges, the clip id set, and the playback cursor
//! - [`contact`] – contact emitter variants and the action tag set
//! - [`gridposition`] – fractional grid-space position for an entity
//! - [`inventory`] – carried toy parts with unique membership
//! - [`platform`] – platform attachment and the patrol mover
//! - [`player`] – player bookkeeping: state, facing, death, ice pulse
//! - [`rigidbody`] – velocity with per-axis acceleration parameters
//! - [`timer`] – respawn countdown ticked by simulation time

pub mod animation;
pub mod contact;
pub mod gridposition;
pub mod inventory;
pub mod platform;
pub mod player;
pub mod rigidbody;
pub mod timer;
