//! Undo/redo for the session.

use super::DesignerState;

impl DesignerState {
    /// Undo last change. Returns `false` at the oldest snapshot.
    pub fn undo(&mut self) -> bool {
        match self.history.undo().cloned() {
            Some(snapshot) => {
                self.restore(snapshot);
                self.version += 1;
                self.is_modified = true;
                true
            }
            None => {
                tracing::debug!("Nothing to undo");
                false
            }
        }
    }

    /// Redo last undo. Returns `false` at the newest snapshot.
    pub fn redo(&mut self) -> bool {
        match self.history.redo().cloned() {
            Some(snapshot) => {
                self.restore(snapshot);
                self.version += 1;
                self.is_modified = true;
                true
            }
            None => {
                tracing::debug!("Nothing to redo");
                false
            }
        }
    }

    /// Check if undo is available
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Check if redo is available
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Snapshots retained, including the present.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Forgets every step and keeps the current state as the only snapshot.
    pub fn clear_history(&mut self) {
        self.history.clear();
        self.history.commit(self.snapshot());
    }
}
