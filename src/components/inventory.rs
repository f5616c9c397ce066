//! Carried toy parts.
//!
//! Membership is unique; insertion order is kept only so the host can
//! reverse visual markers in pickup order when the set is cleared.

use bevy_ecs::prelude::Component;

/// Set of toy part identifiers carried by a player.
#[derive(Component, Debug, Default)]
pub struct ToyParts {
    parts: Vec<String>,
}

impl ToyParts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a part. Returns true if it was new, false on a duplicate.
    pub fn add(&mut self, part: &str) -> bool {
        if self.parts.iter().any(|p| p == part) {
            return false;
        }
        self.parts.push(part.to_string());
        true
    }

    /// Empty the set, returning the parts that were carried so the host
    /// can undo any per-part markers.
    pub fn clear(&mut self) -> Vec<String> {
        std::mem::take(&mut self.parts)
    }

    pub fn contains(&self, part: &str) -> bool {
        self.parts.iter().any(|p| p == part)
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }
}
