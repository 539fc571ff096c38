//! Linear undo/redo history over [`DesignerCommand`]s.

use schemekit_core::constants::MAX_UNDO_DEPTH;

use crate::canvas::Canvas;
use crate::commands::DesignerCommand;

/// Two-stack command history.
///
/// Executing a new command always empties the redo stack. The undo stack is
/// capped at `max_depth`; the oldest command is dropped beyond that.
///
/// Replaying never records anything: `undo` and `redo` hold `&mut self` for
/// the whole replay and a command only ever sees the [`Canvas`], so nothing
/// it does can reach [`UndoRedoManager::execute`].
#[derive(Debug, Clone)]
pub struct UndoRedoManager {
    undo_stack: Vec<DesignerCommand>,
    redo_stack: Vec<DesignerCommand>,
    max_depth: usize,
}

impl Default for UndoRedoManager {
    fn default() -> Self {
        Self::with_depth(MAX_UNDO_DEPTH)
    }
}

impl UndoRedoManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_depth(max_depth: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_depth: max_depth.max(1),
        }
    }

    /// Applies `cmd` and records it.
    pub fn execute(&mut self, mut cmd: DesignerCommand, canvas: &mut Canvas) {
        cmd.apply(canvas);
        tracing::debug!("Executed {} on shape {}", cmd.name(), cmd.shape_id());
        self.redo_stack.clear();
        self.undo_stack.push(cmd);
        if self.undo_stack.len() > self.max_depth {
            self.undo_stack.remove(0);
        }
    }

    /// Reverts the most recent command. Returns `false` when there is nothing to undo.
    pub fn undo(&mut self, canvas: &mut Canvas) -> bool {
        let Some(mut cmd) = self.undo_stack.pop() else {
            return false;
        };
        cmd.undo(canvas);
        tracing::debug!("Undid {}", cmd.name());
        self.redo_stack.push(cmd);
        true
    }

    /// Re-applies the most recently undone command. Returns `false` when there is nothing to redo.
    pub fn redo(&mut self, canvas: &mut Canvas) -> bool {
        let Some(mut cmd) = self.redo_stack.pop() else {
            return false;
        };
        cmd.apply(canvas);
        tracing::debug!("Redid {}", cmd.name());
        self.undo_stack.push(cmd);
        true
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    /// Name of the command `undo` would revert, for menu labels.
    pub fn last_command_name(&self) -> Option<&'static str> {
        self.undo_stack.last().map(DesignerCommand::name)
    }

    /// Name of the command `redo` would re-apply.
    pub fn next_redo_name(&self) -> Option<&'static str> {
        self.redo_stack.last().map(DesignerCommand::name)
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}
