//! Tool selection and pointer gestures for designer state.

use super::DesignerState;
use crate::canvas::Tool;
use crate::model::{Point, Shape};
use crate::renderer::{render_canvas, RenderItem};

impl DesignerState {
    /// Sets the active tool. The selection is kept.
    pub fn set_tool(&mut self, tool: Tool) {
        if !self.controller.is_idle() {
            self.controller.cancel_gesture(&mut self.canvas);
        }
        self.canvas.set_tool(tool);
    }

    pub fn tool(&self) -> Tool {
        self.canvas.tool()
    }

    pub fn pointer_pressed(&mut self, x: f64, y: f64) {
        self.controller
            .pointer_pressed(&mut self.canvas, &self.factory, Point::new(x, y));
    }

    pub fn pointer_dragged(&mut self, x: f64, y: f64) {
        self.controller
            .pointer_dragged(&mut self.canvas, &self.factory, Point::new(x, y));
    }

    /// Ends the gesture and records it. Returns `true` when an edit was recorded.
    pub fn pointer_released(&mut self, x: f64, y: f64) -> bool {
        let cmd = self
            .controller
            .pointer_released(&mut self.canvas, &self.factory, Point::new(x, y));
        match cmd {
            Some(cmd) => {
                self.push_command(cmd);
                true
            }
            None => false,
        }
    }

    /// Aborts the gesture in progress; nothing is recorded.
    pub fn cancel_gesture(&mut self) {
        self.controller.cancel_gesture(&mut self.canvas);
    }

    /// Anchor recorded by a press with the text tool, waiting for content.
    pub fn pending_text_anchor(&self) -> Option<Point> {
        self.controller.text_anchor()
    }

    /// Creates a text shape at the pending anchor with the supplied content.
    /// Empty content discards the anchor.
    pub fn submit_text(&mut self, text: &str) -> Option<u64> {
        let anchor = self.controller.take_text_anchor()?;
        if text.is_empty() {
            return None;
        }
        let shape = self.factory.create_text(text, anchor);
        Some(self.add_shape(shape))
    }

    /// Shape being drawn, if a drawing gesture is running.
    pub fn preview(&self) -> Option<&Shape> {
        self.controller.preview()
    }

    /// Active handle index of a running resize or endpoint drag.
    pub fn active_handle(&self) -> Option<usize> {
        self.controller.active_handle()
    }

    /// Drawable primitives for the current canvas, preview and decorations.
    pub fn render(&self) -> Vec<RenderItem> {
        render_canvas(&self.canvas, self.controller.preview())
    }
}
