use serde::{Deserialize, Serialize};

use super::{
    clamp_stored_size, local_offset, normalize_angle, BoxGeometry, PaintStyle, Point,
    SchemeShape, ShapeStyle, ShapeType,
};

/// Ellipse inscribed in its stored box; radii are half the box dimensions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemeEllipse {
    pub frame: BoxGeometry,
    rotation: f64,
    pub style: ShapeStyle,
}

impl SchemeEllipse {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            frame: BoxGeometry::new(x, y, width, height).clamped(),
            rotation: 0.0,
            style: ShapeStyle::default(),
        }
    }

    /// Creates an ellipse from its centre and radii.
    pub fn from_center(center: Point, rx: f64, ry: f64) -> Self {
        Self::new(center.x - rx, center.y - ry, rx * 2.0, ry * 2.0)
    }

    pub fn radii(&self) -> (f64, f64) {
        (self.frame.width / 2.0, self.frame.height / 2.0)
    }
}

impl SchemeShape for SchemeEllipse {
    fn shape_type(&self) -> ShapeType {
        ShapeType::Ellipse
    }

    fn position(&self) -> Point {
        Point::new(self.frame.x, self.frame.y)
    }

    fn set_position(&mut self, p: Point) {
        self.frame.x = p.x;
        self.frame.y = p.y;
    }

    fn width(&self) -> f64 {
        self.frame.width
    }

    fn height(&self) -> f64 {
        self.frame.height
    }

    fn resize(&mut self, width: f64, height: f64) {
        self.frame.width = clamp_stored_size(width);
        self.frame.height = clamp_stored_size(height);
    }

    fn rotation(&self) -> f64 {
        self.rotation
    }

    fn set_rotation(&mut self, degrees: f64) {
        self.rotation = normalize_angle(degrees);
    }

    fn style(&self) -> &ShapeStyle {
        &self.style
    }

    fn style_mut(&mut self) -> &mut ShapeStyle {
        &mut self.style
    }

    fn apply_style(&self) -> PaintStyle {
        PaintStyle {
            stroke: Some(self.style.stroke),
            fill: Some(self.style.fill),
            stroke_width: 2.0,
        }
    }

    fn center(&self) -> Point {
        self.frame.center()
    }

    fn bounds(&self) -> (f64, f64, f64, f64) {
        let f = &self.frame;
        (f.x, f.y, f.x + f.width, f.y + f.height)
    }

    fn contains_point(&self, p: Point, tolerance: f64) -> bool {
        let local = local_offset(p, self.center(), self.rotation);
        let (rx, ry) = self.radii();
        let (rx, ry) = (rx + tolerance, ry + tolerance);
        (local.x / rx).powi(2) + (local.y / ry).powi(2) <= 1.0
    }
}
