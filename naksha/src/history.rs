//! Undo history for pixel toggles.
//!
//! Each toggle records the cell and its exact previous value, so undo
//! restores unknown grays as well as black and white. By default the history
//! is unbounded. With a nonzero `max_depth`, recording an entry while full
//! drops the oldest. There is no redo.

use std::collections::VecDeque;

use crate::core::GridCoord;

/// One reversible pixel change
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UndoEntry {
    /// Cell that changed
    pub coord: GridCoord,
    /// Pixel value before the change
    pub previous: u8,
}

/// Depth-capped undo stack (most recent last)
#[derive(Clone, Debug, Default)]
pub struct UndoHistory {
    entries: VecDeque<UndoEntry>,
    /// Maximum entries kept, 0 = unbounded
    max_depth: usize,
}

impl UndoHistory {
    /// Create an empty history keeping at most `max_depth` entries (0 = unbounded)
    pub fn new(max_depth: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            max_depth,
        }
    }

    /// Record a change, evicting the oldest entry when full
    pub fn push(&mut self, entry: UndoEntry) {
        if self.max_depth > 0 && self.entries.len() >= self.max_depth {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    /// Take the most recent change
    pub fn pop(&mut self) -> Option<UndoEntry> {
        self.entries.pop_back()
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// No entries stored?
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Configured capacity (0 = unbounded)
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }
}
