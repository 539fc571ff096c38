//! Canvas holding the shapes of the open scheme and its selection.

mod operations;
mod types;

pub use types::{DrawingObject, Tool};

use schemekit_settings::HandleSettings;

use crate::handles::HandleKind;
use crate::model::{Point, Shape};
use crate::selection_manager::{Decorations, SelectionManager};
use crate::shape_store::ShapeStore;

/// Canvas state: shapes in draw order, the selection and the active tool.
#[derive(Debug, Clone)]
pub struct Canvas {
    pub shape_store: ShapeStore,
    pub selection_manager: SelectionManager,
    tool: Tool,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas {
    pub fn new() -> Self {
        Self::with_settings(HandleSettings::default())
    }

    pub fn with_settings(settings: HandleSettings) -> Self {
        Self {
            shape_store: ShapeStore::new(),
            selection_manager: SelectionManager::new(settings),
            tool: Tool::Select,
        }
    }

    /// Switching tools keeps the current selection.
    pub fn set_tool(&mut self, tool: Tool) {
        if self.tool != tool {
            tracing::debug!("Tool changed: {:?} -> {:?}", self.tool, tool);
        }
        self.tool = tool;
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn shape_count(&self) -> usize {
        self.shape_store.len()
    }

    pub fn generate_id(&mut self) -> u64 {
        self.shape_store.generate_id()
    }

    pub fn get_shape(&self, id: u64) -> Option<&DrawingObject> {
        self.shape_store.get(id)
    }

    pub fn get_shape_mut(&mut self, id: u64) -> Option<&mut DrawingObject> {
        self.shape_store.get_mut(id)
    }

    /// Shapes bottom to top.
    pub fn shapes(&self) -> impl DoubleEndedIterator<Item = &DrawingObject> {
        self.shape_store.iter()
    }

    pub fn selected_id(&self) -> Option<u64> {
        self.selection_manager.selected_id()
    }

    pub fn selected_shape(&self) -> Option<&Shape> {
        self.selected_id()
            .and_then(|id| self.shape_store.get(id))
            .map(|obj| &obj.shape)
    }

    pub fn decorations(&self) -> Option<&Decorations> {
        self.selection_manager.decorations()
    }

    pub fn select(&mut self, id: u64) -> bool {
        self.selection_manager.select(&mut self.shape_store, id)
    }

    pub fn deselect_all(&mut self) {
        self.selection_manager.deselect_all(&mut self.shape_store);
    }

    pub fn select_at(&mut self, point: Point) -> Option<u64> {
        self.selection_manager.select_at(&mut self.shape_store, point)
    }

    /// Topmost shape under `point`, without changing the selection.
    pub fn shape_at(&self, point: Point) -> Option<u64> {
        SelectionManager::shape_at(
            &self.shape_store,
            point,
            self.selection_manager.settings().hit_tolerance,
        )
    }

    pub fn handle_at(&self, point: Point) -> Option<HandleKind> {
        self.selection_manager.handle_at(point)
    }

    /// Re-derives the decorations of the selected shape after it changed.
    pub fn refresh_selection(&mut self) {
        self.selection_manager.refresh(&mut self.shape_store);
    }

    pub fn set_snap_indicator(&mut self, indicator: Option<Point>) {
        self.selection_manager.set_snap_indicator(indicator);
    }

    pub fn handle_settings(&self) -> &HandleSettings {
        self.selection_manager.settings()
    }
}
