//! Storage for the shapes of one scheme, keyed by id and kept in draw order.

use std::collections::HashMap;

use crate::canvas::DrawingObject;

#[derive(Debug, Clone)]
pub struct ShapeStore {
    shapes: HashMap<u64, DrawingObject>,
    draw_order: Vec<u64>,
    next_id: u64,
}

impl Default for ShapeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ShapeStore {
    pub fn new() -> Self {
        Self {
            shapes: HashMap::new(),
            draw_order: Vec::new(),
            next_id: 1,
        }
    }

    pub fn generate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Inserts on top of the draw order.
    pub fn insert(&mut self, id: u64, obj: DrawingObject) {
        let index = self.draw_order.len();
        self.insert_at(index, id, obj);
    }

    /// Inserts at a draw-order position (clamped to the end).
    pub fn insert_at(&mut self, index: usize, id: u64, obj: DrawingObject) {
        if self.shapes.insert(id, obj).is_some() {
            self.draw_order.retain(|&existing| existing != id);
        }
        let index = index.min(self.draw_order.len());
        self.draw_order.insert(index, id);
        if id >= self.next_id {
            self.next_id = id + 1;
        }
    }

    /// Removes a shape, returning its former draw-order index with it.
    pub fn remove(&mut self, id: u64) -> Option<(usize, DrawingObject)> {
        let obj = self.shapes.remove(&id)?;
        let index = self.index_of(id).unwrap_or(self.draw_order.len());
        self.draw_order.retain(|&existing| existing != id);
        Some((index, obj))
    }

    pub fn get(&self, id: u64) -> Option<&DrawingObject> {
        self.shapes.get(&id)
    }

    pub fn get_mut(&mut self, id: u64) -> Option<&mut DrawingObject> {
        self.shapes.get_mut(&id)
    }

    pub fn contains(&self, id: u64) -> bool {
        self.shapes.contains_key(&id)
    }

    pub fn index_of(&self, id: u64) -> Option<usize> {
        self.draw_order.iter().position(|&existing| existing == id)
    }

    /// Shapes bottom to top.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &DrawingObject> {
        self.draw_order.iter().filter_map(|id| self.shapes.get(id))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut DrawingObject> {
        self.shapes.values_mut()
    }

    pub fn draw_order_iter(&self) -> impl DoubleEndedIterator<Item = u64> + '_ {
        self.draw_order.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Removes every shape; ids keep increasing.
    pub fn clear(&mut self) {
        self.shapes.clear();
        self.draw_order.clear();
    }
}
