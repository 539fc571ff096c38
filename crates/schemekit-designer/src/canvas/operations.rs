//! Adding, restoring and removing shapes.

use super::{Canvas, DrawingObject};
use crate::model::Shape;

impl Canvas {
    /// Adds a shape on top of the draw order and returns its id.
    pub fn add_shape(&mut self, shape: Shape) -> u64 {
        let id = self.shape_store.generate_id();
        self.shape_store.insert(id, DrawingObject::new(id, shape));
        id
    }

    /// Puts a previously removed object back, at `index` in the draw order when given.
    pub fn restore_shape(&mut self, obj: DrawingObject, index: Option<usize>) {
        let mut obj = obj;
        obj.selected = false;
        let id = obj.id;
        match index {
            Some(index) => self.shape_store.insert_at(index, id, obj),
            None => self.shape_store.insert(id, obj),
        }
    }

    /// Removes a shape, returning its draw-order index and the object.
    /// Removing the selected shape drops the selection and its decorations.
    pub fn remove_shape_return(&mut self, id: u64) -> Option<(usize, DrawingObject)> {
        if self.selected_id() == Some(id) {
            self.deselect_all();
        }
        let (index, mut obj) = self.shape_store.remove(id)?;
        obj.selected = false;
        Some((index, obj))
    }

    /// Removes every shape and the selection.
    pub fn clear(&mut self) {
        self.deselect_all();
        self.shape_store.clear();
    }
}
