//! Property setters for the selected shape. Every effective change is recorded
//! as a command; setting a value equal to the current one records nothing.

use super::DesignerState;
use crate::commands::{DesignerCommand, EditText, Recolor, RotateShape};
use crate::model::{normalize_angle, Color, FontDescriptor, SchemeShape, SchemeText, ShapeStyle};

impl DesignerState {
    /// Replaces stroke and fill of the selected shape.
    pub fn recolor_selected(&mut self, stroke: Color, fill: Color) -> bool {
        let Some(id) = self.canvas.selected_id() else {
            return false;
        };
        let Some(old_style) = self.canvas.selected_shape().map(|s| *s.style()) else {
            return false;
        };
        let new_style = ShapeStyle::new(stroke, fill);
        if new_style == old_style {
            return false;
        }
        self.push_command(DesignerCommand::Recolor(Recolor {
            id,
            old_style,
            new_style,
        }));
        true
    }

    pub fn set_stroke_color(&mut self, stroke: Color) -> bool {
        match self.canvas.selected_shape().map(|s| s.style().fill) {
            Some(fill) => self.recolor_selected(stroke, fill),
            None => false,
        }
    }

    pub fn set_fill_color(&mut self, fill: Color) -> bool {
        match self.canvas.selected_shape().map(|s| s.style().stroke) {
            Some(stroke) => self.recolor_selected(stroke, fill),
            None => false,
        }
    }

    /// Rotates the selected shape by `delta` degrees.
    pub fn rotate_selected_by(&mut self, delta: f64) -> bool {
        match self.canvas.selected_shape().map(|s| s.rotation()) {
            Some(current) => self.set_rotation(current + delta),
            None => false,
        }
    }

    /// Sets the rotation of the selected shape; the angle is normalized into `[0, 360)`.
    pub fn set_rotation(&mut self, degrees: f64) -> bool {
        let Some(id) = self.canvas.selected_id() else {
            return false;
        };
        let Some(from) = self.canvas.selected_shape().map(|s| s.rotation()) else {
            return false;
        };
        let to = normalize_angle(degrees);
        if to == from {
            return false;
        }
        self.push_command(DesignerCommand::RotateShape(RotateShape { id, from, to }));
        true
    }

    /// Replaces the content of the selected text shape.
    pub fn set_text(&mut self, text: &str) -> bool {
        self.edit_selected_text(|t| t.set_text(text))
    }

    /// Replaces the font of the selected text shape; the size is clamped to `[8, 72]`.
    pub fn set_font(&mut self, font: FontDescriptor) -> bool {
        self.edit_selected_text(|t| t.set_font(font))
    }

    fn edit_selected_text(&mut self, edit: impl FnOnce(&mut SchemeText)) -> bool {
        let Some(id) = self.canvas.selected_id() else {
            return false;
        };
        let Some(old) = self
            .canvas
            .selected_shape()
            .and_then(|s| s.as_text())
            .cloned()
        else {
            return false;
        };
        let mut new = old.clone();
        edit(&mut new);
        if new == old {
            return false;
        }
        self.push_command(DesignerCommand::EditText(EditText { id, old, new }));
        true
    }
}
