//! Simulation systems.
//!
//! One tick runs these in a fixed chained order so the invariant
//! "integration, then contact resolution, then board commit" holds within
//! every tick.
//!
//! Submodules overview:
//! - [`animation`] – locomotion state selection and frame advance
//! - [`commit`] – block rollback and the board position commit
//! - [`contact`] – surrounding-entity query and priority action resolution
//! - [`effects`] – pump effect messages and forward them to the host channel
//! - [`input`] – settle input edge flags at the end of the tick
//! - [`kinematics`] – control-driven velocity and position integration
//! - [`platform`] – platform patrol movement and rider tracking
//! - [`respawn`] – respawn timer countdown and the reset sequence
//! - [`time`] – update the world clock from the host-provided delta

pub mod animation;
pub mod commit;
pub mod contact;
pub mod effects;
pub mod input;
pub mod kinematics;
pub mod platform;
pub mod respawn;
pub mod time;
