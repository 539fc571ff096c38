//! Undo/redo operations for designer state.

use super::DesignerState;

impl DesignerState {
    /// Reverts the last recorded edit. A gesture in progress is cancelled first.
    pub fn undo(&mut self) -> bool {
        self.abort_gesture();
        let undone = self.history.undo(&mut self.canvas);
        if undone {
            self.is_modified = true;
        }
        undone
    }

    pub fn redo(&mut self) -> bool {
        self.abort_gesture();
        let redone = self.history.redo(&mut self.canvas);
        if redone {
            self.is_modified = true;
        }
        redone
    }

    fn abort_gesture(&mut self) {
        if !self.controller.is_idle() {
            self.controller.cancel_gesture(&mut self.canvas);
        }
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn undo_depth(&self) -> usize {
        self.history.undo_depth()
    }

    pub fn redo_depth(&self) -> usize {
        self.history.redo_depth()
    }

    /// Name of the edit `undo` would revert, e.g. for an "Undo Resize" menu label.
    pub fn last_command_name(&self) -> Option<&'static str> {
        self.history.last_command_name()
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}
