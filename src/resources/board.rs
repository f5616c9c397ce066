//! Shared board: a spatial index of entities by grid cell.
//!
//! The board is a single-writer structure owned by the simulation thread.
//! Entities register with their position and cell extent; movers report
//! before/after positions so the index stays consistent. Contact queries
//! collect the entities registered in the 3x3 cell neighborhood around a
//! position; the emitters themselves decide whether they actually overlap.

use bevy_ecs::prelude::{Entity, Resource};
use glam::Vec2;
use rustc_hash::FxHashMap;

/// Spatial entity registry over the playing grid.
#[derive(Resource, Debug)]
pub struct Board {
    pub width: u32,
    pub height: u32,
    cells: FxHashMap<(i32, i32), Vec<Entity>>,
}

impl Board {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            cells: FxHashMap::default(),
        }
    }

    /// Largest in-bounds coordinate per axis, the clamp limit for movers.
    pub fn max_pos(&self) -> Vec2 {
        Vec2::new(self.width as f32 - 1.0, self.height as f32 - 1.0)
    }

    /// Register an entity occupying `extent` cells from `pos`.
    pub fn add_entity(&mut self, entity: Entity, pos: Vec2, extent: (f32, f32)) {
        for cell in footprint(pos, extent) {
            self.cells.entry(cell).or_default().push(entity);
        }
    }

    /// Move an entity's registration from `from` to `to`.
    pub fn update_entity_position(
        &mut self,
        entity: Entity,
        from: Vec2,
        to: Vec2,
        extent: (f32, f32),
    ) {
        for cell in footprint(from, extent) {
            if let Some(list) = self.cells.get_mut(&cell) {
                list.retain(|e| *e != entity);
                if list.is_empty() {
                    self.cells.remove(&cell);
                }
            }
        }
        self.add_entity(entity, to, extent);
    }

    /// Entities registered in the 3x3 neighborhood around `pos`, deduped,
    /// excluding `subject` itself. Order is cell-major and stable, which
    /// is what makes first-platform-wins and last-blocker-wins policies
    /// deterministic.
    pub fn surrounding_entities(&self, subject: Entity, pos: Vec2) -> Vec<Entity> {
        let cx = pos.x.floor() as i32;
        let cy = pos.y.floor() as i32;
        let mut found = Vec::new();
        for dy in -1..=1 {
            for dx in -1..=1 {
                if let Some(list) = self.cells.get(&(cx + dx, cy + dy)) {
                    for &e in list {
                        if e != subject && !found.contains(&e) {
                            found.push(e);
                        }
                    }
                }
            }
        }
        found
    }

    #[cfg(test)]
    fn entities_at(&self, cell: (i32, i32)) -> &[Entity] {
        self.cells.get(&cell).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Cells covered by an entity at `pos` spanning `extent` cells.
fn footprint(pos: Vec2, extent: (f32, f32)) -> Vec<(i32, i32)> {
    let x0 = pos.x.floor() as i32;
    let y0 = pos.y.floor() as i32;
    let x1 = (pos.x + extent.0 - 1.0).ceil() as i32;
    let y1 = (pos.y + extent.1 - 1.0).ceil() as i32;
    let mut cells = Vec::new();
    for y in y0..=y1.max(y0) {
        for x in x0..=x1.max(x0) {
            cells.push((x, y));
        }
    }
    cells
}
