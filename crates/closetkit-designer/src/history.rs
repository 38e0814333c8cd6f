//! Linear undo/redo over full-state snapshots.
//!
//! The stack holds independent copies; `present` is the snapshot at the
//! cursor. Committing discards everything after the cursor, so an undone
//! branch can never be redone once a new state is recorded.

use std::collections::VecDeque;

use closetkit_core::constants::MAX_HISTORY_DEPTH;

use crate::model::{Door, Unit};

/// What a committed state captures: the unit list, the door and the room size.
#[derive(Debug, Clone, PartialEq)]
pub struct HistorySnapshot {
    pub units: Vec<Unit>,
    pub door: Door,
    pub room_width: f64,
    pub room_depth: f64,
}

impl HistorySnapshot {
    pub fn new(units: Vec<Unit>, door: Door, room_width: f64, room_depth: f64) -> Self {
        Self {
            units,
            door,
            room_width,
            room_depth,
        }
    }
}

/// Cursor-based snapshot stack with a bounded depth.
#[derive(Debug, Clone)]
pub struct UndoRedoManager<S> {
    snapshots: VecDeque<S>,
    cursor: usize,
    max_depth: usize,
}

impl<S> UndoRedoManager<S> {
    pub fn new() -> Self {
        Self::with_max_depth(MAX_HISTORY_DEPTH)
    }

    /// A depth of zero is treated as one; the present always survives.
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            snapshots: VecDeque::new(),
            cursor: 0,
            max_depth: max_depth.max(1),
        }
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Records `snapshot` as the new present.
    pub fn commit(&mut self, snapshot: S) {
        if !self.snapshots.is_empty() {
            self.snapshots.truncate(self.cursor + 1);
        }
        self.snapshots.push_back(snapshot);
        while self.snapshots.len() > self.max_depth {
            self.snapshots.pop_front();
        }
        self.cursor = self.snapshots.len() - 1;
    }

    /// Steps back one snapshot. Returns the new present, or `None` at the oldest entry.
    pub fn undo(&mut self) -> Option<&S> {
        if self.can_undo() {
            self.cursor -= 1;
            self.snapshots.get(self.cursor)
        } else {
            None
        }
    }

    /// Steps forward one snapshot. Returns the new present, or `None` at the newest entry.
    pub fn redo(&mut self) -> Option<&S> {
        if self.can_redo() {
            self.cursor += 1;
            self.snapshots.get(self.cursor)
        } else {
            None
        }
    }

    pub fn present(&self) -> Option<&S> {
        self.snapshots.get(self.cursor)
    }

    /// Rewrites the present in place without growing the stack.
    pub fn present_mut(&mut self) -> Option<&mut S> {
        self.snapshots.get_mut(self.cursor)
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.snapshots.len()
    }

    /// Number of undo steps available.
    pub fn undo_depth(&self) -> usize {
        self.cursor
    }

    /// Number of redo steps available.
    pub fn redo_depth(&self) -> usize {
        self.snapshots.len().saturating_sub(self.cursor + 1)
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn clear(&mut self) {
        self.snapshots.clear();
        self.cursor = 0;
    }

    /// Iterates from the oldest retained snapshot to the newest.
    pub fn iter(&self) -> impl Iterator<Item = &S> {
        self.snapshots.iter()
    }
}

impl<S> Default for UndoRedoManager<S> {
    fn default() -> Self {
        Self::new()
    }
}
