//! Reversible edits of a scheme.
//!
//! Every command stores absolute old and new values, so `apply` after `undo`
//! lands on exactly the state the command was recorded with. Applying a
//! command whose new state is already on the canvas (a finished drag) is a
//! no-op.

use crate::canvas::{Canvas, DrawingObject};
use crate::model::{Point, SchemeShape, SchemeText, Shape, ShapeStyle};

#[derive(Debug, Clone, PartialEq)]
#[allow(clippy::large_enum_variant)]
pub enum DesignerCommand {
    AddShape(AddShape),
    RemoveShape(RemoveShape),
    MoveShape(MoveShape),
    ResizeShape(ResizeShape),
    RotateShape(RotateShape),
    Recolor(Recolor),
    LineEndpoints(LineEndpoints),
    EditText(EditText),
}

#[derive(Debug, Clone, PartialEq)]
pub struct AddShape {
    pub id: u64,
    /// Draw-order slot the shape occupied when it was last undone.
    pub index: Option<usize>,
    pub object: Option<DrawingObject>, // Some while the shape is off the canvas
}

impl AddShape {
    pub fn new(object: DrawingObject) -> Self {
        Self {
            id: object.id,
            index: None,
            object: Some(object),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RemoveShape {
    pub id: u64,
    pub index: Option<usize>,
    pub object: Option<DrawingObject>, // Some while removed
}

impl RemoveShape {
    pub fn new(id: u64) -> Self {
        Self {
            id,
            index: None,
            object: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MoveShape {
    pub id: u64,
    pub from: Point,
    pub to: Point,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResizeShape {
    pub id: u64,
    pub old_shape: Shape,
    pub new_shape: Shape,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RotateShape {
    pub id: u64,
    pub from: f64,
    pub to: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Recolor {
    pub id: u64,
    pub old_style: ShapeStyle,
    pub new_style: ShapeStyle,
}

/// Stored (unrotated) start and end of a line before and after an endpoint drag.
#[derive(Debug, Clone, PartialEq)]
pub struct LineEndpoints {
    pub id: u64,
    pub old: (Point, Point),
    pub new: (Point, Point),
}

#[derive(Debug, Clone, PartialEq)]
pub struct EditText {
    pub id: u64,
    pub old: SchemeText,
    pub new: SchemeText,
}

impl DesignerCommand {
    /// Id of the shape the command acts on.
    pub fn shape_id(&self) -> u64 {
        match self {
            DesignerCommand::AddShape(cmd) => cmd.id,
            DesignerCommand::RemoveShape(cmd) => cmd.id,
            DesignerCommand::MoveShape(cmd) => cmd.id,
            DesignerCommand::ResizeShape(cmd) => cmd.id,
            DesignerCommand::RotateShape(cmd) => cmd.id,
            DesignerCommand::Recolor(cmd) => cmd.id,
            DesignerCommand::LineEndpoints(cmd) => cmd.id,
            DesignerCommand::EditText(cmd) => cmd.id,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            DesignerCommand::AddShape(_) => "Add Shape",
            DesignerCommand::RemoveShape(_) => "Delete Shape",
            DesignerCommand::MoveShape(_) => "Move",
            DesignerCommand::ResizeShape(_) => "Resize",
            DesignerCommand::RotateShape(_) => "Rotate",
            DesignerCommand::Recolor(_) => "Recolor",
            DesignerCommand::LineEndpoints(_) => "Edit Line",
            DesignerCommand::EditText(_) => "Edit Text",
        }
    }

    pub fn apply(&mut self, canvas: &mut Canvas) {
        match self {
            DesignerCommand::AddShape(cmd) => {
                if let Some(obj) = cmd.object.take() {
                    canvas.restore_shape(obj, cmd.index);
                }
            }
            DesignerCommand::RemoveShape(cmd) => {
                if let Some((index, obj)) = canvas.remove_shape_return(cmd.id) {
                    cmd.index = Some(index);
                    cmd.object = Some(obj);
                }
            }
            DesignerCommand::MoveShape(cmd) => {
                if let Some(obj) = canvas.get_shape_mut(cmd.id) {
                    obj.shape.set_position(cmd.to);
                }
            }
            DesignerCommand::ResizeShape(cmd) => {
                if let Some(obj) = canvas.get_shape_mut(cmd.id) {
                    obj.shape = cmd.new_shape.clone();
                }
            }
            DesignerCommand::RotateShape(cmd) => {
                if let Some(obj) = canvas.get_shape_mut(cmd.id) {
                    obj.shape.set_rotation(cmd.to);
                }
            }
            DesignerCommand::Recolor(cmd) => {
                if let Some(obj) = canvas.get_shape_mut(cmd.id) {
                    *obj.shape.style_mut() = cmd.new_style;
                }
            }
            DesignerCommand::LineEndpoints(cmd) => {
                if let Some(Shape::Line(line)) = canvas.get_shape_mut(cmd.id).map(|o| &mut o.shape) {
                    line.set_endpoints(cmd.new.0, cmd.new.1);
                }
            }
            DesignerCommand::EditText(cmd) => {
                if let Some(Shape::Text(text)) = canvas.get_shape_mut(cmd.id).map(|o| &mut o.shape) {
                    *text = cmd.new.clone();
                }
            }
        }
        canvas.refresh_selection();
    }

    pub fn undo(&mut self, canvas: &mut Canvas) {
        match self {
            DesignerCommand::AddShape(cmd) => {
                if let Some((index, obj)) = canvas.remove_shape_return(cmd.id) {
                    cmd.index = Some(index);
                    cmd.object = Some(obj);
                }
            }
            DesignerCommand::RemoveShape(cmd) => {
                if let Some(obj) = cmd.object.take() {
                    canvas.restore_shape(obj, cmd.index);
                }
            }
            DesignerCommand::MoveShape(cmd) => {
                if let Some(obj) = canvas.get_shape_mut(cmd.id) {
                    obj.shape.set_position(cmd.from);
                }
            }
            DesignerCommand::ResizeShape(cmd) => {
                if let Some(obj) = canvas.get_shape_mut(cmd.id) {
                    obj.shape = cmd.old_shape.clone();
                }
            }
            DesignerCommand::RotateShape(cmd) => {
                if let Some(obj) = canvas.get_shape_mut(cmd.id) {
                    obj.shape.set_rotation(cmd.from);
                }
            }
            DesignerCommand::Recolor(cmd) => {
                if let Some(obj) = canvas.get_shape_mut(cmd.id) {
                    *obj.shape.style_mut() = cmd.old_style;
                }
            }
            DesignerCommand::LineEndpoints(cmd) => {
                if let Some(Shape::Line(line)) = canvas.get_shape_mut(cmd.id).map(|o| &mut o.shape) {
                    line.set_endpoints(cmd.old.0, cmd.old.1);
                }
            }
            DesignerCommand::EditText(cmd) => {
                if let Some(Shape::Text(text)) = canvas.get_shape_mut(cmd.id).map(|o| &mut o.shape) {
                    *text = cmd.old.clone();
                }
            }
        }
        canvas.refresh_selection();
    }
}
