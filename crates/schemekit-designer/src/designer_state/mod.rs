//! Designer state: the editing facade used by the host UI.
//!
//! This module is split into submodules:
//! - `history`: undo/redo
//! - `pointer`: tool selection and pointer gestures
//! - `shapes`: shape creation, deletion, clipboard
//! - `properties`: colour, text, font and rotation setters for the selected shape
//! - `file_io`: scheme save/load through the record codec

mod file_io;
mod history;
mod pointer;
mod properties;
mod shapes;

use schemekit_settings::EditorConfig;

use crate::canvas::Canvas;
use crate::clipboard::Clipboard;
use crate::commands::DesignerCommand;
use crate::controller::DragController;
use crate::history::UndoRedoManager;
use crate::model::ShapeFactory;

/// Editing session for one open scheme.
#[derive(Debug, Clone)]
pub struct DesignerState {
    pub canvas: Canvas,
    pub clipboard: Clipboard,
    pub factory: ShapeFactory,
    pub config: EditorConfig,
    /// Set by every recorded edit; cleared when a scheme is loaded or saved.
    pub is_modified: bool,
    pub(crate) controller: DragController,
    pub(crate) history: UndoRedoManager,
}

impl Default for DesignerState {
    fn default() -> Self {
        Self::new()
    }
}

impl DesignerState {
    pub fn new() -> Self {
        Self::with_config(EditorConfig::default())
    }

    pub fn with_config(config: EditorConfig) -> Self {
        Self {
            canvas: Canvas::with_settings(config.handles.clone()),
            clipboard: Clipboard::with_offset(config.clipboard.paste_offset),
            factory: ShapeFactory::from_config(&config),
            controller: DragController::new(config.snapping.clone()),
            history: UndoRedoManager::with_depth(config.history.max_depth),
            is_modified: false,
            config,
        }
    }

    /// Applies `cmd` and records it in the history.
    pub(crate) fn push_command(&mut self, cmd: DesignerCommand) {
        self.history.execute(cmd, &mut self.canvas);
        self.is_modified = true;
    }
}
