//! Player clip table.
//!
//! All player clips live in one shared frame strip; this resource maps
//! each [`ClipId`] to its frame range. Malformed ranges are a programmer
//! or data error, so the table is validated once at init and never again
//! per tick.

use bevy_ecs::prelude::Resource;
use serde::{Deserialize, Serialize};

use crate::components::animation::{AnimationClip, ClipId};

/// The clip table for one player frame strip.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClipStore {
    pub rest: AnimationClip,
    pub rest_to_walk: AnimationClip,
    pub walk: AnimationClip,
    pub walk_to_rest: AnimationClip,
    pub death: AnimationClip,
}

impl Default for ClipStore {
    fn default() -> Self {
        Self {
            rest: AnimationClip {
                start: 1,
                end: 40,
                looped: true,
            },
            rest_to_walk: AnimationClip {
                start: 41,
                end: 50,
                looped: false,
            },
            walk: AnimationClip {
                start: 51,
                end: 74,
                looped: true,
            },
            walk_to_rest: AnimationClip {
                start: 75,
                end: 84,
                looped: false,
            },
            death: AnimationClip {
                start: 85,
                end: 135,
                looped: false,
            },
        }
    }
}

impl ClipStore {
    pub fn get(&self, id: ClipId) -> AnimationClip {
        match id {
            ClipId::Rest => self.rest,
            ClipId::RestToWalk => self.rest_to_walk,
            ClipId::Walk => self.walk,
            ClipId::WalkToRest => self.walk_to_rest,
            ClipId::Death => self.death,
        }
    }

    /// Load a clip table from a JSON file.
    pub fn load_from_file(path: &str) -> Result<Self, String> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read clip table {}: {}", path, e))?;
        serde_json::from_str(&json).map_err(|e| format!("Failed to parse clip table: {}", e))
    }

    /// Reject malformed ranges before the simulation starts.
    ///
    /// The death clip must not loop: the respawn timer, not the clip, ends
    /// the death sequence.
    pub fn validate(&self) -> Result<(), String> {
        for id in [
            ClipId::Rest,
            ClipId::RestToWalk,
            ClipId::Walk,
            ClipId::WalkToRest,
            ClipId::Death,
        ] {
            let clip = self.get(id);
            if clip.start > clip.end {
                return Err(format!(
                    "clip {:?} has inverted range {}..{}",
                    id, clip.start, clip.end
                ));
            }
        }
        if self.death.looped {
            return Err("death clip must not loop".to_string());
        }
        Ok(())
    }
}
