//! Animation playback state.
//!
//! A clip is a contiguous frame range with a loop flag; all player clips
//! live in one shared frame strip, addressed by the closed [`ClipId`] set.
//! The [`AnimationCursor`] advances against wall-clock timestamps handed
//! into each tick, independent of the simulation delta.

use std::collections::VecDeque;

use bevy_ecs::prelude::Component;
use serde::{Deserialize, Serialize};

/// Identifier for the player clip set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClipId {
    Rest,
    RestToWalk,
    Walk,
    WalkToRest,
    Death,
}

/// A named contiguous frame range with a loop flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationClip {
    pub start: u32,
    pub end: u32,
    pub looped: bool,
}

impl AnimationClip {
    pub fn contains(&self, frame: u32) -> bool {
        frame >= self.start && frame <= self.end
    }

    pub fn len(&self) -> u32 {
        self.end - self.start + 1
    }
}

/// Frame cursor plus the FIFO queue of clips to play next.
#[derive(Component, Debug)]
pub struct AnimationCursor {
    pub active: ClipId,
    pub frame: u32,
    /// Wall-clock timestamp (ms) of the last frame advance. `None` until
    /// the first advance after a clip switch or reset.
    pub last_frame_at: Option<f64>,
    pub queue: VecDeque<ClipId>,
}

impl AnimationCursor {
    pub fn new(active: ClipId, frame: u32) -> Self {
        Self {
            active,
            frame,
            last_frame_at: None,
            queue: VecDeque::new(),
        }
    }

    /// Enqueue a clip unless it is already pending anywhere in the queue.
    pub fn enqueue_once(&mut self, clip: ClipId) {
        if !self.queue.contains(&clip) {
            self.queue.push_back(clip);
        }
    }

    pub fn enqueue(&mut self, clip: ClipId) {
        self.queue.push_back(clip);
    }

    /// Switch to a clip immediately, dropping everything pending.
    pub fn force(&mut self, clip: ClipId, frame: u32) {
        self.active = clip;
        self.frame = frame;
        self.last_frame_at = None;
        self.queue.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enqueue_once_suppresses_duplicates() {
        let mut cursor = AnimationCursor::new(ClipId::Rest, 1);
        cursor.enqueue_once(ClipId::Walk);
        cursor.enqueue_once(ClipId::Walk);
        assert_eq!(cursor.queue.len(), 1);
    }

    #[test]
    fn test_enqueue_once_checks_whole_queue_not_just_tail() {
        let mut cursor = AnimationCursor::new(ClipId::Rest, 1);
        cursor.enqueue_once(ClipId::RestToWalk);
        cursor.enqueue_once(ClipId::Walk);
        cursor.enqueue_once(ClipId::RestToWalk);
        assert_eq!(
            cursor.queue.iter().copied().collect::<Vec<_>>(),
            vec![ClipId::RestToWalk, ClipId::Walk]
        );
    }

    #[test]
    fn test_force_clears_queue_and_resets_timer() {
        let mut cursor = AnimationCursor::new(ClipId::Walk, 30);
        cursor.last_frame_at = Some(1234.5);
        cursor.enqueue(ClipId::Rest);
        cursor.force(ClipId::Death, 85);
        assert_eq!(cursor.active, ClipId::Death);
        assert_eq!(cursor.frame, 85);
        assert!(cursor.last_frame_at.is_none());
        assert!(cursor.queue.is_empty());
    }

    #[test]
    fn test_clip_contains_is_inclusive() {
        let clip = AnimationClip {
            start: 10,
            end: 20,
            looped: false,
        };
        assert!(clip.contains(10));
        assert!(clip.contains(20));
        assert!(!clip.contains(9));
        assert!(!clip.contains(21));
        assert_eq!(clip.len(), 11);
    }
}
