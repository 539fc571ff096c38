use serde::{Deserialize, Serialize};

use super::{
    clamp_stored_size, local_offset, normalize_angle, BoxGeometry, PaintStyle, Point,
    SchemeShape, ShapeStyle, ShapeType,
};

/// Rhombus built from two equilateral-bounded triangles sharing the horizontal diagonal.
///
/// The outline never grows taller than `√3 · width`. A taller requested height is
/// still stored (and persisted) unchanged; only the drawn outline is capped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemeRhombus {
    pub frame: BoxGeometry,
    rotation: f64,
    pub style: ShapeStyle,
}

impl SchemeRhombus {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            frame: BoxGeometry::new(x, y, width, height).clamped(),
            rotation: 0.0,
            style: ShapeStyle::default(),
        }
    }

    /// Height actually used for the outline.
    pub fn effective_height(&self) -> f64 {
        self.frame.height.min(3f64.sqrt() * self.frame.width)
    }

    /// Outline vertices (top, right, bottom, left) before rotation, centred in the stored box.
    pub fn vertices(&self) -> [Point; 4] {
        let c = self.frame.center();
        let half_w = self.frame.width / 2.0;
        let half_h = self.effective_height() / 2.0;
        [
            Point::new(c.x, c.y - half_h),
            Point::new(c.x + half_w, c.y),
            Point::new(c.x, c.y + half_h),
            Point::new(c.x - half_w, c.y),
        ]
    }
}

impl SchemeShape for SchemeRhombus {
    fn shape_type(&self) -> ShapeType {
        ShapeType::Rhombus
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
        let half_w = self.frame.width / 2.0 + tolerance;
        let half_h = self.effective_height() / 2.0 + tolerance;
        local.x.abs() / half_w + local.y.abs() / half_h <= 1.0
    }
}
