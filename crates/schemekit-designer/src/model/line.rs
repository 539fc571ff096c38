use serde::{Deserialize, Serialize};

use super::{normalize_angle, rotate_point, PaintStyle, Point, SchemeShape, ShapeStyle, ShapeType};

/// Straight connector between two absolute points.
///
/// Width and height are the signed deltas from start to end, so a persisted
/// line is rebuilt as `(x, y) -> (x + width, y + height)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemeLine {
    pub start: Point,
    pub end: Point,
    rotation: f64,
    pub style: ShapeStyle,
}

impl SchemeLine {
    pub fn new(start: Point, end: Point) -> Self {
        Self {
            start,
            end,
            rotation: 0.0,
            style: ShapeStyle::default(),
        }
    }

    pub fn length(&self) -> f64 {
        self.start.distance_to(&self.end)
    }

    /// Direction from start to end in degrees.
    pub fn angle_degrees(&self) -> f64 {
        self.start.angle_to(&self.end)
    }

    pub fn set_endpoints(&mut self, start: Point, end: Point) {
        self.start = start;
        self.end = end;
    }

    /// Endpoints as drawn on the canvas, rotated about the midpoint.
    pub fn world_endpoints(&self) -> (Point, Point) {
        let center = self.center();
        (
            rotate_point(self.start, center, self.rotation),
            rotate_point(self.end, center, self.rotation),
        )
    }

    /// Places the endpoints so that they are drawn at `start` and `end`
    /// with the current rotation kept.
    pub fn set_world_endpoints(&mut self, start: Point, end: Point) {
        let center = Point::new((start.x + end.x) / 2.0, (start.y + end.y) / 2.0);
        self.start = rotate_point(start, center, -self.rotation);
        self.end = rotate_point(end, center, -self.rotation);
    }

    /// Endpoint by handle index: 0 is the start, anything else the end.
    pub fn endpoint(&self, index: usize) -> Point {
        if index == 0 {
            self.start
        } else {
            self.end
        }
    }
}

impl SchemeShape for SchemeLine {
    fn shape_type(&self) -> ShapeType {
        ShapeType::Line
    }

    fn position(&self) -> Point {
        self.start
    }

    fn set_position(&mut self, p: Point) {
        let dx = p.x - self.start.x;
        let dy = p.y - self.start.y;
        self.start = p;
        self.end = Point::new(self.end.x + dx, self.end.y + dy);
    }

    fn width(&self) -> f64 {
        self.end.x - self.start.x
    }

    fn height(&self) -> f64 {
        self.end.y - self.start.y
    }

    /// Lines change shape only through their endpoint handles.
    fn resize(&mut self, _width: f64, _height: f64) {}

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
            fill: None,
            stroke_width: 2.0,
        }
    }

    fn center(&self) -> Point {
        Point::new(
            (self.start.x + self.end.x) / 2.0,
            (self.start.y + self.end.y) / 2.0,
        )
    }

    fn bounds(&self) -> (f64, f64, f64, f64) {
        (
            self.start.x.min(self.end.x),
            self.start.y.min(self.end.y),
            self.start.x.max(self.end.x),
            self.start.y.max(self.end.y),
        )
    }

    fn contains_point(&self, p: Point, tolerance: f64) -> bool {
        let p = rotate_point(p, self.center(), -self.rotation);
        let l2 = (self.end.x - self.start.x).powi(2) + (self.end.y - self.start.y).powi(2);
        if l2 == 0.0 {
            return p.distance_to(&self.start) <= tolerance;
        }
        let t = ((p.x - self.start.x) * (self.end.x - self.start.x)
            + (p.y - self.start.y) * (self.end.y - self.start.y))
            / l2;
        let t = t.clamp(0.0, 1.0);
        let proj = Point::new(
            self.start.x + t * (self.end.x - self.start.x),
            self.start.y + t * (self.end.y - self.start.y),
        );
        p.distance_to(&proj) <= tolerance
    }
}
