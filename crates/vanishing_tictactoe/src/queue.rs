//! Per-player FIFO of marks currently on the board.

use super::action::Placement;
use super::position::Position;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Most marks a player may have on the board at once.
pub const MAX_MARKS: usize = 3;

/// Oldest-first queue of a player's live placements, capped at [`MAX_MARKS`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementQueue {
    entries: VecDeque<Placement>,
}

impl PlacementQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self {
            entries: VecDeque::with_capacity(MAX_MARKS + 1),
        }
    }

    /// Appends a placement, evicting and returning the oldest one when the
    /// queue would exceed [`MAX_MARKS`].
    pub fn push(&mut self, placement: Placement) -> Option<Placement> {
        self.entries.push_back(placement);
        if self.entries.len() > MAX_MARKS {
            self.entries.pop_front()
        } else {
            None
        }
    }

    /// The oldest live placement.
    pub fn oldest(&self) -> Option<&Placement> {
        self.entries.front()
    }

    /// The placement that the next push will evict, if the queue is full.
    pub fn next_to_vanish(&self) -> Option<&Placement> {
        if self.is_full() { self.oldest() } else { None }
    }

    /// Number of live placements.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no marks are live.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true once [`MAX_MARKS`] placements are live.
    pub fn is_full(&self) -> bool {
        self.entries.len() >= MAX_MARKS
    }

    /// Returns true if a live placement sits at `position`.
    pub fn contains(&self, position: Position) -> bool {
        self.entries.iter().any(|p| p.position() == position)
    }

    /// Iterates oldest-first.
    pub fn iter(&self) -> impl Iterator<Item = &Placement> {
        self.entries.iter()
    }

    /// Drops every placement.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
