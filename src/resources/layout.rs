//! JSON level layout: a character grid plus a legend.
//!
//! The layout describes which board cells hold walls, ice, hazards,
//! pickups, the toy station, platforms, and the spawn point. It is data
//! for init-time spawning only; once entities are on the board the layout
//! is not consulted again.
//!
//! # JSON Format
//!
//! ```json
//! {
//!   "grid": [
//!     "WWWWWW",
//!     "W.S.IW",
//!     "WWWWWW"
//!   ],
//!   "legend": {
//!     "W": { "kind": "wall" },
//!     "I": { "kind": "ice" },
//!     "S": { "kind": "spawn" }
//!   }
//! }
//! ```
//!
//! `.` (or any character missing from the legend) is an empty cell.

use glam::Vec2;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::components::rigidbody::Axis;

/// Patrol axis in layout data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatrolAxis {
    X,
    Y,
}

impl From<PatrolAxis> for Axis {
    fn from(axis: PatrolAxis) -> Self {
        match axis {
            PatrolAxis::X => Axis::X,
            PatrolAxis::Y => Axis::Y,
        }
    }
}

/// One legend entry: what to spawn at cells marked with its character.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CellKind {
    Wall,
    Door {
        open: bool,
    },
    Hazard,
    Ice,
    PartPickup {
        part: String,
    },
    ToyStation,
    Platform {
        width: f32,
        height: f32,
        axis: PatrolAxis,
        range: f32,
        speed: f32,
    },
    Spawn,
}

/// Parsed level layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelLayout {
    pub grid: Vec<String>,
    pub legend: FxHashMap<String, CellKind>,
}

impl LevelLayout {
    /// Load a layout from a JSON file.
    pub fn load_from_file(path: &str) -> Result<Self, String> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read layout {}: {}", path, e))?;
        serde_json::from_str(&json).map_err(|e| format!("Failed to parse layout: {}", e))
    }

    /// Iterate non-empty cells as `(x, y, kind)`.
    pub fn iter_cells(&self) -> impl Iterator<Item = (f32, f32, &CellKind)> {
        self.grid.iter().enumerate().flat_map(move |(y, row)| {
            row.chars().enumerate().filter_map(move |(x, c)| {
                self.legend
                    .get(c.to_string().as_str())
                    .map(|kind| (x as f32, y as f32, kind))
            })
        })
    }

    /// Spawn position, if the layout marks one.
    pub fn spawn_pos(&self) -> Option<Vec2> {
        self.iter_cells()
            .find(|(_, _, kind)| matches!(kind, CellKind::Spawn))
            .map(|(x, y, _)| Vec2::new(x, y))
    }

    /// Reject layouts that do not fit the board.
    pub fn validate(&self, board_width: u32, board_height: u32) -> Result<(), String> {
        if self.grid.len() > board_height as usize {
            return Err(format!(
                "layout has {} rows but the board is {} cells tall",
                self.grid.len(),
                board_height
            ));
        }
        for (y, row) in self.grid.iter().enumerate() {
            if row.chars().count() > board_width as usize {
                return Err(format!(
                    "layout row {} is wider than the board ({} cells)",
                    y, board_width
                ));
            }
        }
        let spawns = self
            .iter_cells()
            .filter(|(_, _, kind)| matches!(kind, CellKind::Spawn))
            .count();
        if spawns > 1 {
            return Err(format!("layout marks {} spawn points, expected at most 1", spawns));
        }
        Ok(())
    }

    /// Empty layout: an open board with no entities.
    pub fn empty() -> Self {
        Self {
            grid: Vec::new(),
            legend: FxHashMap::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> LevelLayout {
        let json = r#"{
            "grid": [
                "WWWW",
                "WS.W",
                "W.IW",
                "WWWW"
            ],
            "legend": {
                "W": { "kind": "wall" },
                "I": { "kind": "ice" },
                "S": { "kind": "spawn" }
            }
        }"#;
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_iter_cells_skips_unmapped_chars() {
        let layout = sample();
        let cells: Vec<_> = layout.iter_cells().collect();
        // 12 walls + 1 ice + 1 spawn
        assert_eq!(cells.len(), 14);
        assert!(cells
            .iter()
            .any(|(x, y, kind)| *x == 2.0 && *y == 2.0 && matches!(kind, CellKind::Ice)));
    }

    #[test]
    fn test_spawn_pos_found() {
        assert_eq!(sample().spawn_pos(), Some(Vec2::new(1.0, 1.0)));
        assert_eq!(LevelLayout::empty().spawn_pos(), None);
    }

    #[test]
    fn test_validate_rejects_oversized_grid() {
        let layout = sample();
        assert!(layout.validate(4, 4).is_ok());
        assert!(layout.validate(3, 4).is_err());
        assert!(layout.validate(4, 3).is_err());
    }

    #[test]
    fn test_validate_rejects_multiple_spawns() {
        let mut layout = sample();
        layout.grid[2] = "WSIW".to_string();
        assert!(layout.validate(4, 4).is_err());
    }

    #[test]
    fn test_platform_legend_parses() {
        let json = r#"{
            "grid": ["P"],
            "legend": {
                "P": { "kind": "platform", "width": 3.0, "height": 1.0,
                       "axis": "x", "range": 4.0, "speed": 1.5 }
            }
        }"#;
        let layout: LevelLayout = serde_json::from_str(json).unwrap();
        let (_, _, kind) = layout.iter_cells().next().unwrap();
        assert_eq!(
            kind,
            &CellKind::Platform {
                width: 3.0,
                height: 1.0,
                axis: PatrolAxis::X,
                range: 4.0,
                speed: 1.5
            }
        );
    }
}
