use schemekit_settings::HandleSettings;

use crate::handles::{box_handle_world_positions, rotation_handle_position, HandleKind};
use crate::model::{Point, SchemeShape, Shape};
use crate::shape_store::ShapeStore;

/// One grabbable decoration around the selected shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Handle {
    pub kind: HandleKind,
    pub position: Point,
}

/// Transient decorations of the selected shape.
///
/// Built when a shape is selected, rebuilt whenever it changes, and dropped on
/// deselection or deletion. Never part of the persisted model.
#[derive(Debug, Clone, PartialEq)]
pub struct Decorations {
    pub shape_id: u64,
    /// Eight resize handles for box shapes, two endpoint handles for lines.
    pub handles: Vec<Handle>,
    pub rotation_handle: Option<Handle>,
    /// Shown while a line endpoint is angle-snapped.
    pub snap_indicator: Option<Point>,
}

impl Decorations {
    pub fn build(shape_id: u64, shape: &Shape, settings: &HandleSettings) -> Self {
        match shape {
            Shape::Line(line) => {
                let (start, end) = line.world_endpoints();
                Self {
                    shape_id,
                    handles: vec![
                        Handle {
                            kind: HandleKind::Endpoint(0),
                            position: start,
                        },
                        Handle {
                            kind: HandleKind::Endpoint(1),
                            position: end,
                        },
                    ],
                    rotation_handle: None,
                    snap_indicator: None,
                }
            }
            _ => {
                let frame = shape.geometry().unwrap_or_else(|| {
                    let (x1, y1, x2, y2) = shape.bounds();
                    crate::model::BoxGeometry::new(x1, y1, x2 - x1, y2 - y1)
                });
                let rotation = shape.rotation();
                let handles = box_handle_world_positions(&frame, rotation)
                    .iter()
                    .enumerate()
                    .map(|(i, &position)| Handle {
                        kind: HandleKind::Resize(i),
                        position,
                    })
                    .collect();
                Self {
                    shape_id,
                    handles,
                    rotation_handle: Some(Handle {
                        kind: HandleKind::Rotation,
                        position: rotation_handle_position(
                            &frame,
                            rotation,
                            settings.rotation_handle_offset,
                        ),
                    }),
                    snap_indicator: None,
                }
            }
        }
    }

    /// All handles, rotation handle first.
    pub fn iter(&self) -> impl Iterator<Item = &Handle> {
        self.rotation_handle.iter().chain(self.handles.iter())
    }
}

/// Manages the single selection and its decoration layer.
///
/// - Tracks which shape is selected (at most one)
/// - Resolves pointer presses to the topmost shape
/// - Owns the decorations of the selected shape, keyed by its id
#[derive(Debug, Clone)]
pub struct SelectionManager {
    selected_id: Option<u64>,
    decorations: Option<Decorations>,
    settings: HandleSettings,
}

impl Default for SelectionManager {
    fn default() -> Self {
        Self::new(HandleSettings::default())
    }
}

impl SelectionManager {
    pub fn new(settings: HandleSettings) -> Self {
        Self {
            selected_id: None,
            decorations: None,
            settings,
        }
    }

    pub fn selected_id(&self) -> Option<u64> {
        self.selected_id
    }

    pub fn decorations(&self) -> Option<&Decorations> {
        self.decorations.as_ref()
    }

    pub fn settings(&self) -> &HandleSettings {
        &self.settings
    }

    /// Selects `id`, dropping any previous selection and its decorations.
    /// Returns `false` when the id is not in the store.
    pub fn select(&mut self, store: &mut ShapeStore, id: u64) -> bool {
        if !store.contains(id) {
            return false;
        }
        if self.selected_id == Some(id) {
            return true;
        }
        self.deselect_all(store);
        let Some(obj) = store.get_mut(id) else {
            return false;
        };
        obj.selected = true;
        self.selected_id = Some(id);
        self.decorations = Some(Decorations::build(id, &obj.shape, &self.settings));
        tracing::debug!("Selected shape {} ({})", id, obj.name);
        true
    }

    /// Clears the selection flag on every shape and tears down decorations.
    pub fn deselect_all(&mut self, store: &mut ShapeStore) {
        for obj in store.iter_mut() {
            obj.selected = false;
        }
        if let Some(id) = self.selected_id.take() {
            tracing::debug!("Deselected shape {}", id);
        }
        self.decorations = None;
    }

    /// Selects the topmost shape under `point`, or clears the selection when
    /// nothing is hit.
    pub fn select_at(&mut self, store: &mut ShapeStore, point: Point) -> Option<u64> {
        let hit = Self::shape_at(store, point, self.settings.hit_tolerance);
        match hit {
            Some(id) => {
                self.select(store, id);
            }
            None => self.deselect_all(store),
        }
        hit
    }

    /// Topmost shape whose body contains `point`.
    pub fn shape_at(store: &ShapeStore, point: Point, tolerance: f64) -> Option<u64> {
        store
            .iter()
            .rev()
            .find(|obj| obj.contains_point(point, tolerance))
            .map(|obj| obj.id)
    }

    /// Handle of the selected shape under `point`; the rotation handle wins ties.
    pub fn handle_at(&self, point: Point) -> Option<HandleKind> {
        let decorations = self.decorations.as_ref()?;
        let reach = self.settings.handle_size / 2.0 + self.settings.hit_tolerance;
        decorations
            .iter()
            .find(|h| {
                (point.x - h.position.x).abs() <= reach && (point.y - h.position.y).abs() <= reach
            })
            .map(|h| h.kind)
    }

    /// Rebuilds decorations after the selected shape changed; drops the selection
    /// if the shape is gone.
    pub fn refresh(&mut self, store: &mut ShapeStore) {
        let Some(id) = self.selected_id else {
            return;
        };
        match store.get(id) {
            Some(obj) => {
                let snap = self.decorations.as_ref().and_then(|d| d.snap_indicator);
                let mut decorations = Decorations::build(id, &obj.shape, &self.settings);
                decorations.snap_indicator = snap;
                self.decorations = Some(decorations);
            }
            None => {
                self.selected_id = None;
                self.decorations = None;
            }
        }
    }

    pub fn set_snap_indicator(&mut self, indicator: Option<Point>) {
        if let Some(decorations) = self.decorations.as_mut() {
            decorations.snap_indicator = indicator;
        }
    }
}
