//! Canvas type definitions: DrawingObject, Tool.

use crate::model::{SchemeShape, Shape, ShapeType};

/// Interpretation mode for pointer gestures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    #[default]
    Select,
    Line,
    Rectangle,
    Ellipse,
    Rhombus,
    Text,
    /// Device icon placement; handled outside the editing engine.
    AddDevice,
}

impl Tool {
    /// Shape drawn by a press-drag-release gesture with this tool.
    pub fn drawn_shape(&self) -> Option<ShapeType> {
        match self {
            Tool::Line => Some(ShapeType::Line),
            Tool::Rectangle => Some(ShapeType::Rectangle),
            Tool::Ellipse => Some(ShapeType::Ellipse),
            Tool::Rhombus => Some(ShapeType::Rhombus),
            Tool::Select | Tool::Text | Tool::AddDevice => None,
        }
    }
}

/// Shape on the canvas with its identity and selection flag.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawingObject {
    pub id: u64,
    pub name: String,
    pub shape: Shape,
    pub selected: bool,
}

impl DrawingObject {
    pub fn new(id: u64, shape: Shape) -> Self {
        Self {
            id,
            name: shape.shape_type().to_string(),
            shape,
            selected: false,
        }
    }

    pub fn contains_point(&self, point: crate::model::Point, tolerance: f64) -> bool {
        self.shape.contains_point(point, tolerance)
    }
}
