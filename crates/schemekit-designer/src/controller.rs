//! Selection and drag controller.
//!
//! Interprets pointer press/drag/release against the active tool. While a
//! gesture is running the affected shape is updated live; on release the
//! controller hands back one command describing the whole gesture, which the
//! caller records in the history. A gesture that changed nothing yields no
//! command, and a cancelled gesture restores the pre-gesture state.

use schemekit_settings::SnapSettings;

use crate::canvas::{Canvas, DrawingObject, Tool};
use crate::commands::{AddShape, DesignerCommand, LineEndpoints, MoveShape, ResizeShape, RotateShape};
use crate::handles::{snap_line_endpoint, HandleKind, ResizeGesture, RotationGesture};
use crate::model::{Point, SchemeShape, Shape, ShapeFactory, ShapeType};

#[derive(Debug, Clone, PartialEq)]
enum Gesture {
    Idle,
    Drawing {
        kind: ShapeType,
        anchor: Point,
        current: Point,
        preview: Shape,
    },
    Moving {
        id: u64,
        /// Pointer position relative to the shape origin at press time.
        offset: Point,
        origin: Point,
    },
    Resizing {
        id: u64,
        gesture: ResizeGesture,
        before: Shape,
    },
    DraggingEndpoint {
        id: u64,
        index: usize,
        before: (Point, Point),
    },
    Rotating {
        id: u64,
        gesture: RotationGesture,
        before: f64,
    },
}

#[derive(Debug, Clone)]
pub struct DragController {
    gesture: Gesture,
    text_anchor: Option<Point>,
    last_pointer: Option<Point>,
    snap: SnapSettings,
}

impl Default for DragController {
    fn default() -> Self {
        Self::new(SnapSettings::default())
    }
}

impl DragController {
    pub fn new(snap: SnapSettings) -> Self {
        Self {
            gesture: Gesture::Idle,
            text_anchor: None,
            last_pointer: None,
            snap,
        }
    }

    pub fn is_idle(&self) -> bool {
        self.gesture == Gesture::Idle
    }

    /// Live preview of the shape being drawn. Never part of the scheme.
    pub fn preview(&self) -> Option<&Shape> {
        match &self.gesture {
            Gesture::Drawing { preview, .. } => Some(preview),
            _ => None,
        }
    }

    /// Handle index currently tracked by a resize gesture.
    pub fn active_handle(&self) -> Option<usize> {
        match &self.gesture {
            Gesture::Resizing { gesture, .. } => Some(gesture.handle()),
            Gesture::DraggingEndpoint { index, .. } => Some(*index),
            _ => None,
        }
    }

    /// Where the next text shape will be placed, once its content is supplied.
    pub fn text_anchor(&self) -> Option<Point> {
        self.text_anchor
    }

    pub fn take_text_anchor(&mut self) -> Option<Point> {
        self.text_anchor.take()
    }

    pub fn pointer_pressed(&mut self, canvas: &mut Canvas, factory: &ShapeFactory, p: Point) {
        if !self.is_idle() {
            self.cancel_gesture(canvas);
        }
        self.last_pointer = Some(p);

        match canvas.tool() {
            Tool::Select => self.press_select(canvas, p),
            Tool::Text => {
                canvas.deselect_all();
                self.text_anchor = Some(p);
            }
            Tool::AddDevice => {
                tracing::debug!("Device placement at ({:.1}, {:.1}) left to the host", p.x, p.y);
            }
            tool => {
                let Some(kind) = tool.drawn_shape() else {
                    return;
                };
                canvas.deselect_all();
                if let Some(preview) = factory.create_shape(kind, p, p) {
                    self.gesture = Gesture::Drawing {
                        kind,
                        anchor: p,
                        current: p,
                        preview,
                    };
                }
            }
        }
    }

    fn press_select(&mut self, canvas: &mut Canvas, p: Point) {
        if let (Some(id), Some(handle)) = (canvas.selected_id(), canvas.handle_at(p)) {
            if let Some(obj) = canvas.get_shape(id) {
                let shape = &obj.shape;
                self.gesture = match (handle, shape) {
                    (HandleKind::Resize(index), _) => match shape.geometry() {
                        Some(frame) => Gesture::Resizing {
                            id,
                            gesture: ResizeGesture::begin(
                                index,
                                frame,
                                shape.rotation(),
                                p,
                                canvas.handle_settings().min_gesture_size,
                            ),
                            before: shape.clone(),
                        },
                        None => Gesture::Idle,
                    },
                    (HandleKind::Endpoint(index), Shape::Line(line)) => Gesture::DraggingEndpoint {
                        id,
                        index,
                        before: (line.start, line.end),
                    },
                    (HandleKind::Rotation, _) => Gesture::Rotating {
                        id,
                        gesture: RotationGesture::begin(shape.center(), p, shape.rotation()),
                        before: shape.rotation(),
                    },
                    _ => Gesture::Idle,
                };
                if !self.is_idle() {
                    return;
                }
            }
        }

        let Some(id) = canvas.select_at(p) else {
            return;
        };
        if let Some(obj) = canvas.get_shape(id) {
            let origin = obj.shape.position();
            self.gesture = Gesture::Moving {
                id,
                offset: Point::new(p.x - origin.x, p.y - origin.y),
                origin,
            };
        }
    }

    pub fn pointer_dragged(&mut self, canvas: &mut Canvas, factory: &ShapeFactory, p: Point) {
        self.last_pointer = Some(p);
        match &mut self.gesture {
            Gesture::Idle => return,
            Gesture::Drawing {
                kind,
                anchor,
                current,
                preview,
            } => {
                *current = p;
                if let Some(shape) = factory.create_shape(*kind, *anchor, p) {
                    *preview = shape;
                }
                return;
            }
            Gesture::Moving { id, offset, .. } => {
                if let Some(obj) = canvas.get_shape_mut(*id) {
                    obj.shape.set_position(Point::new(p.x - offset.x, p.y - offset.y));
                }
            }
            Gesture::Resizing { id, gesture, .. } => {
                let frame = gesture.drag_to(p);
                if let Some(obj) = canvas.get_shape_mut(*id) {
                    obj.shape.set_geometry(frame);
                }
            }
            Gesture::DraggingEndpoint { id, index, .. } => {
                let mut indicator = None;
                if let Some(Shape::Line(line)) = canvas.get_shape_mut(*id).map(|o| &mut o.shape) {
                    let (start, end) = line.world_endpoints();
                    let fixed = if *index == 0 { end } else { start };
                    let snap = snap_line_endpoint(fixed, p, &self.snap);
                    indicator = snap.indicator;
                    if *index == 0 {
                        line.set_world_endpoints(snap.point, end);
                    } else {
                        line.set_world_endpoints(start, snap.point);
                    }
                }
                canvas.refresh_selection();
                canvas.set_snap_indicator(indicator);
                return;
            }
            Gesture::Rotating { id, gesture, .. } => {
                let rotation = gesture.drag_to(p);
                if let Some(obj) = canvas.get_shape_mut(*id) {
                    obj.shape.set_rotation(rotation);
                }
            }
        }
        canvas.refresh_selection();
    }

    /// Finishes the gesture and returns the command that records it, if anything changed.
    pub fn pointer_released(
        &mut self,
        canvas: &mut Canvas,
        factory: &ShapeFactory,
        p: Point,
    ) -> Option<DesignerCommand> {
        if self.last_pointer != Some(p) {
            self.pointer_dragged(canvas, factory, p);
        }
        self.last_pointer = None;

        let gesture = std::mem::replace(&mut self.gesture, Gesture::Idle);
        match gesture {
            Gesture::Idle => None,
            Gesture::Drawing {
                kind,
                anchor,
                current,
                ..
            } => {
                if anchor == current {
                    return None;
                }
                let shape = factory.create_shape(kind, anchor, current)?;
                let id = canvas.generate_id();
                Some(DesignerCommand::AddShape(AddShape::new(DrawingObject::new(
                    id, shape,
                ))))
            }
            Gesture::Moving { id, origin, .. } => {
                let to = canvas.get_shape(id)?.shape.position();
                (to != origin).then_some(DesignerCommand::MoveShape(MoveShape {
                    id,
                    from: origin,
                    to,
                }))
            }
            Gesture::Resizing { id, gesture, before } => {
                // The gesture floor only applies while dragging; the stored size floors at 1.
                let obj = canvas.get_shape_mut(id)?;
                obj.shape.set_geometry(gesture.raw_frame());
                let after = obj.shape.clone();
                canvas.refresh_selection();
                (after != before).then_some(DesignerCommand::ResizeShape(ResizeShape {
                    id,
                    old_shape: before,
                    new_shape: after,
                }))
            }
            Gesture::DraggingEndpoint { id, before, .. } => {
                canvas.set_snap_indicator(None);
                let after = canvas.get_shape(id)?.shape.endpoints()?;
                (after != before).then_some(DesignerCommand::LineEndpoints(LineEndpoints {
                    id,
                    old: before,
                    new: after,
                }))
            }
            Gesture::Rotating { id, before, .. } => {
                let to = canvas.get_shape(id)?.shape.rotation();
                (to != before).then_some(DesignerCommand::RotateShape(RotateShape {
                    id,
                    from: before,
                    to,
                }))
            }
        }
    }

    /// Aborts the running gesture, restoring the shape it was editing and
    /// dropping any preview or pending text anchor.
    pub fn cancel_gesture(&mut self, canvas: &mut Canvas) {
        let gesture = std::mem::replace(&mut self.gesture, Gesture::Idle);
        self.text_anchor = None;
        self.last_pointer = None;
        match gesture {
            Gesture::Idle => return,
            Gesture::Drawing { .. } => {}
            Gesture::Moving { id, origin, .. } => {
                if let Some(obj) = canvas.get_shape_mut(id) {
                    obj.shape.set_position(origin);
                }
            }
            Gesture::Resizing { id, before, .. } => {
                if let Some(obj) = canvas.get_shape_mut(id) {
                    obj.shape = before;
                }
            }
            Gesture::DraggingEndpoint { id, before, .. } => {
                if let Some(Shape::Line(line)) = canvas.get_shape_mut(id).map(|o| &mut o.shape) {
                    line.set_endpoints(before.0, before.1);
                }
                canvas.set_snap_indicator(None);
            }
            Gesture::Rotating { id, before, .. } => {
                if let Some(obj) = canvas.get_shape_mut(id) {
                    obj.shape.set_rotation(before);
                }
            }
        }
        tracing::debug!("Gesture cancelled");
        canvas.refresh_selection();
    }
}
