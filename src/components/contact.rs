//! Contact emitters and the action tag set.
//!
//! Every non-player entity on the board carries a [`Contact`] component: a
//! closed set of variants, each deciding which action tags it emits when a
//! player stands close enough. The overlap test is the emitter's business;
//! the board only narrows candidates to the surrounding cells.
//!
//! Keeping [`PlayerAction`] a closed enum makes an unknown action tag
//! unrepresentable, so the resolver never has to handle that case at
//! runtime.

use bevy_ecs::prelude::Component;
use glam::Vec2;
use smallvec::SmallVec;

/// Action tags a contact emitter can hand to the resolver.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlayerAction {
    Restart,
    Block,
    AddToyPart,
    AcceptToy,
    StickToPlatform,
    Ice,
}

/// Contact behavior variants for board entities.
#[derive(Component, Debug, Clone)]
pub enum Contact {
    /// Solid cell: walls, fences.
    Block,
    /// Blocks only while closed.
    Door { open: bool },
    /// Kills on touch: pits, roaming hazards.
    Hazard,
    /// Arms the one-tick acceleration pulse.
    Ice,
    /// Pickup station for one toy part.
    PartPickup { part: String },
    /// Drop-off: accepts the carried toy.
    ToyStation,
    /// Rideable moving platform with a cell extent.
    Platform { width: f32, height: f32 },
}

impl Contact {
    /// Footprint of the emitter in cells.
    pub fn extent(&self) -> (f32, f32) {
        match self {
            Contact::Platform { width, height } => (*width, *height),
            _ => (1.0, 1.0),
        }
    }

    /// Actions emitted toward a player whose unit square sits at
    /// `subject`, given this emitter at `pos`. Empty when not overlapping.
    pub fn actions_on_contact(&self, pos: Vec2, subject: Vec2) -> SmallVec<[PlayerAction; 2]> {
        let mut actions = SmallVec::new();
        let (w, h) = self.extent();
        if !overlaps(pos, w, h, subject) {
            return actions;
        }
        match self {
            Contact::Block => actions.push(PlayerAction::Block),
            Contact::Door { open } => {
                if !open {
                    actions.push(PlayerAction::Block);
                }
            }
            Contact::Hazard => actions.push(PlayerAction::Restart),
            Contact::Ice => actions.push(PlayerAction::Ice),
            Contact::PartPickup { .. } => actions.push(PlayerAction::AddToyPart),
            Contact::ToyStation => actions.push(PlayerAction::AcceptToy),
            Contact::Platform { .. } => actions.push(PlayerAction::StickToPlatform),
        }
        actions
    }
}

/// Overlap between an emitter footprint at `pos` (w x h cells) and the
/// player's unit square at `subject`. Boundaries touch without contact.
fn overlaps(pos: Vec2, w: f32, h: f32, subject: Vec2) -> bool {
    subject.x + 1.0 > pos.x && subject.x < pos.x + w && subject.y + 1.0 > pos.y && subject.y < pos.y + h
}

/// Optional fixed snap point for a blocker.
///
/// Blockers without one snap the player back to its pre-tick position;
/// a door threshold, for example, can pin a specific spot instead.
#[derive(Component, Debug, Clone, Copy)]
pub struct BlockingPosition(pub Vec2);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_actions_without_overlap() {
        let wall = Contact::Block;
        assert!(wall
            .actions_on_contact(Vec2::new(5.0, 5.0), Vec2::new(2.0, 2.0))
            .is_empty());
        // exactly touching edges do not overlap
        assert!(wall
            .actions_on_contact(Vec2::new(5.0, 5.0), Vec2::new(4.0, 5.0))
            .is_empty());
    }

    #[test]
    fn test_wall_blocks_on_overlap() {
        let wall = Contact::Block;
        let actions = wall.actions_on_contact(Vec2::new(5.0, 5.0), Vec2::new(4.5, 5.0));
        assert_eq!(actions.as_slice(), &[PlayerAction::Block]);
    }

    #[test]
    fn test_open_door_emits_nothing() {
        let door = Contact::Door { open: true };
        assert!(door
            .actions_on_contact(Vec2::new(5.0, 5.0), Vec2::new(5.0, 5.0))
            .is_empty());
        let closed = Contact::Door { open: false };
        assert_eq!(
            closed
                .actions_on_contact(Vec2::new(5.0, 5.0), Vec2::new(5.0, 5.0))
                .as_slice(),
            &[PlayerAction::Block]
        );
    }

    #[test]
    fn test_platform_extent_widens_overlap() {
        let platform = Contact::Platform {
            width: 3.0,
            height: 1.0,
        };
        let actions = platform.actions_on_contact(Vec2::new(5.0, 5.0), Vec2::new(7.5, 5.0));
        assert_eq!(actions.as_slice(), &[PlayerAction::StickToPlatform]);
        // a unit emitter at the same spot would miss
        let ice = Contact::Ice;
        assert!(ice
            .actions_on_contact(Vec2::new(5.0, 5.0), Vec2::new(7.5, 5.0))
            .is_empty());
    }

    #[test]
    fn test_hazard_emits_restart() {
        let hazard = Contact::Hazard;
        assert_eq!(
            hazard
                .actions_on_contact(Vec2::new(1.0, 1.0), Vec2::new(1.2, 0.8))
                .as_slice(),
            &[PlayerAction::Restart]
        );
    }
}
