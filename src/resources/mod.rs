//! ECS resources shared across systems.
//!
//! Submodules overview:
//! - [`board`] – spatial index of board entities by grid cell
//! - [`clipstore`] – the player clip table with init-time validation
//! - [`effects`] – channel bridge carrying sound/effect triggers to the host
//! - [`gameconfig`] – tunables loaded from an INI file with safe defaults
//! - [`input`] – per-frame directional control state written by the host
//! - [`layout`] – JSON level layout (grid plus legend)
//! - [`worldtime`] – simulation delta/elapsed plus the wall clock

pub mod board;
pub mod clipstore;
pub mod effects;
pub mod gameconfig;
pub mod input;
pub mod layout;
pub mod worldtime;
