//! Event and message types exchanged across systems.
//!
//! Submodules:
//! - [`effect`] – sound/effect trigger messages forwarded to the host
//! - [`toy`] – toy completion event and its score-keeping observer

pub mod effect;
pub mod toy;
