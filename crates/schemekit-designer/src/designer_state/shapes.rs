//! Shape operations (create, delete, select, copy, paste) for designer state.

use super::DesignerState;
use crate::canvas::DrawingObject;
use crate::commands::{AddShape, DesignerCommand, RemoveShape};
use crate::model::{Point, Shape, ShapeType};

impl DesignerState {
    /// Adds a shape through the history and returns its id.
    pub fn add_shape(&mut self, shape: Shape) -> u64 {
        let id = self.canvas.generate_id();
        self.push_command(DesignerCommand::AddShape(AddShape::new(DrawingObject::new(
            id, shape,
        ))));
        id
    }

    /// Creates a shape spanning two points and records it. Text needs content,
    /// see [`DesignerState::add_text`].
    pub fn create_shape(&mut self, kind: ShapeType, start: Point, end: Point) -> Option<u64> {
        let shape = self.factory.create_shape(kind, start, end)?;
        Some(self.add_shape(shape))
    }

    /// Creates a text shape with its top-left corner at `anchor` and records it.
    pub fn add_text(&mut self, text: &str, anchor: Point) -> u64 {
        let shape = self.factory.create_text(text, anchor);
        self.add_shape(shape)
    }

    pub fn selected_id(&self) -> Option<u64> {
        self.canvas.selected_id()
    }

    pub fn selected_shape(&self) -> Option<&Shape> {
        self.canvas.selected_shape()
    }

    pub fn select(&mut self, id: u64) -> bool {
        self.canvas.select(id)
    }

    pub fn deselect_all(&mut self) {
        self.canvas.deselect_all();
    }

    pub fn shape(&self, id: u64) -> Option<&Shape> {
        self.canvas.get_shape(id).map(|obj| &obj.shape)
    }

    pub fn shape_count(&self) -> usize {
        self.canvas.shape_count()
    }

    /// Deletes the selected shape; undo puts it back at its former draw-order position.
    pub fn delete_selected(&mut self) -> bool {
        let Some(id) = self.canvas.selected_id() else {
            return false;
        };
        self.push_command(DesignerCommand::RemoveShape(RemoveShape::new(id)));
        true
    }

    /// Copies the selected shape into the clipboard slot.
    pub fn copy_selected(&mut self) -> bool {
        match self.canvas.selected_shape() {
            Some(shape) => {
                self.clipboard.copy(shape);
                true
            }
            None => false,
        }
    }

    pub fn has_clipboard_data(&self) -> bool {
        self.clipboard.has_data()
    }

    /// Pastes a fresh copy of the clipboard shape as one undoable addition and selects it.
    pub fn paste(&mut self) -> Option<u64> {
        let shape = self.clipboard.paste()?;
        let id = self.add_shape(shape);
        self.canvas.select(id);
        Some(id)
    }

    pub fn clear_clipboard(&mut self) {
        self.clipboard.clear();
    }
}
