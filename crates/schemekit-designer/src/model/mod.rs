//! Shape model: the persisted entities of a scheme.
//!
//! Every variant stores its geometry explicitly. Width and height are the
//! authoritative values used by the codec and by resize, never something
//! recomputed from a rendered outline.

use serde::{Deserialize, Serialize};

use schemekit_core::constants::MIN_STORED_SIZE;

mod ellipse;
mod factory;
mod line;
mod rectangle;
mod rhombus;
mod text;

pub use ellipse::SchemeEllipse;
pub use factory::ShapeFactory;
pub use line::SchemeLine;
pub use rectangle::SchemeRectangle;
pub use rhombus::SchemeRhombus;
pub use text::{FontDescriptor, SchemeText};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Angle in degrees of the vector from `self` to `other`, in `(-180, 180]`.
    pub fn angle_to(&self, other: &Point) -> f64 {
        (other.y - self.y).atan2(other.x - self.x).to_degrees()
    }
}

/// RGBA colour, each channel in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    pub const BLACK: Color = Color::rgba_const(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Color = Color::rgba_const(1.0, 1.0, 1.0, 1.0);
    pub const TRANSPARENT: Color = Color::rgba_const(0.0, 0.0, 0.0, 0.0);

    const fn rgba_const(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a colour, clamping every channel into `[0, 1]`.
    pub fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        let c = |v: f64| if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) };
        Self {
            r: c(r),
            g: c(g),
            b: c(b),
            a: c(a),
        }
    }

    pub fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self::rgba(r, g, b, 1.0)
    }
}

/// Stroke and fill colours of a shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShapeStyle {
    pub stroke: Color,
    pub fill: Color,
}

impl ShapeStyle {
    pub fn new(stroke: Color, fill: Color) -> Self {
        Self { stroke, fill }
    }
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self {
            stroke: Color::BLACK,
            fill: Color::TRANSPARENT,
        }
    }
}

/// Paint instructions produced by [`SchemeShape::apply_style`] for the render adapter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaintStyle {
    pub stroke: Option<Color>,
    pub fill: Option<Color>,
    pub stroke_width: f64,
}

/// Axis-aligned box in the shape's unrotated frame: top-left corner plus size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxGeometry {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoxGeometry {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Builds a box from two opposite corners given in any order.
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            x: a.x.min(b.x),
            y: a.y.min(b.y),
            width: (b.x - a.x).abs(),
            height: (b.y - a.y).abs(),
        }
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Returns a copy whose size respects the stored minimum.
    pub fn clamped(self) -> Self {
        Self {
            width: clamp_stored_size(self.width),
            height: clamp_stored_size(self.height),
            ..self
        }
    }
}

/// Floors a stored dimension at the model minimum; non-finite input becomes the minimum.
pub fn clamp_stored_size(value: f64) -> f64 {
    if value.is_finite() {
        value.max(MIN_STORED_SIZE)
    } else {
        MIN_STORED_SIZE
    }
}

/// Normalizes an angle in degrees into `[0, 360)`.
pub fn normalize_angle(degrees: f64) -> f64 {
    if !degrees.is_finite() {
        return 0.0;
    }
    ((degrees % 360.0) + 360.0) % 360.0
}

pub fn rotate_point(p: Point, center: Point, angle_deg: f64) -> Point {
    if angle_deg == 0.0 {
        return p;
    }
    let angle_rad = angle_deg.to_radians();
    let s = angle_rad.sin();
    let c = angle_rad.cos();
    let dx = p.x - center.x;
    let dy = p.y - center.y;
    Point {
        x: center.x + dx * c - dy * s,
        y: center.y + dx * s + dy * c,
    }
}

/// Behaviour shared by every shape variant.
pub trait SchemeShape {
    fn shape_type(&self) -> ShapeType;

    /// Top-left for box shapes, start point for lines.
    fn position(&self) -> Point;
    fn set_position(&mut self, p: Point);

    fn width(&self) -> f64;
    fn height(&self) -> f64;

    /// Sets new dimensions following the variant's resize rule.
    fn resize(&mut self, width: f64, height: f64);

    fn rotation(&self) -> f64;
    fn set_rotation(&mut self, degrees: f64);

    fn style(&self) -> &ShapeStyle;
    fn style_mut(&mut self) -> &mut ShapeStyle;

    /// Paint derived from the stored colours.
    fn apply_style(&self) -> PaintStyle;

    /// Point about which the shape rotates.
    fn center(&self) -> Point;

    /// Axis-aligned extent of the unrotated geometry as `(min_x, min_y, max_x, max_y)`.
    fn bounds(&self) -> (f64, f64, f64, f64);

    fn contains_point(&self, p: Point, tolerance: f64) -> bool;

    fn translate(&mut self, dx: f64, dy: f64) {
        let p = self.position();
        self.set_position(Point::new(p.x + dx, p.y + dy));
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeType {
    Rectangle,
    Ellipse,
    Line,
    Rhombus,
    Text,
}

impl ShapeType {
    /// Type tag used by the persisted record format.
    pub fn tag(&self) -> &'static str {
        match self {
            ShapeType::Rectangle => "RECTANGLE",
            ShapeType::Ellipse => "ELLIPSE",
            ShapeType::Line => "LINE",
            ShapeType::Rhombus => "RHOMBUS",
            ShapeType::Text => "TEXT",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim() {
            "RECTANGLE" => Some(ShapeType::Rectangle),
            "ELLIPSE" => Some(ShapeType::Ellipse),
            "LINE" => Some(ShapeType::Line),
            "RHOMBUS" => Some(ShapeType::Rhombus),
            "TEXT" => Some(ShapeType::Text),
            _ => None,
        }
    }

    /// Box shapes get eight resize handles and a rotation handle; lines get two endpoint handles.
    pub fn is_box(&self) -> bool {
        !matches!(self, ShapeType::Line)
    }
}

impl std::fmt::Display for ShapeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ShapeType::Rectangle => "Rectangle",
            ShapeType::Ellipse => "Ellipse",
            ShapeType::Line => "Line",
            ShapeType::Rhombus => "Rhombus",
            ShapeType::Text => "Text",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Rectangle(SchemeRectangle),
    Ellipse(SchemeEllipse),
    Line(SchemeLine),
    Rhombus(SchemeRhombus),
    Text(SchemeText),
}

impl SchemeShape for Shape {
    fn shape_type(&self) -> ShapeType {
        match self {
            Shape::Rectangle(_) => ShapeType::Rectangle,
            Shape::Ellipse(_) => ShapeType::Ellipse,
            Shape::Line(_) => ShapeType::Line,
            Shape::Rhombus(_) => ShapeType::Rhombus,
            Shape::Text(_) => ShapeType::Text,
        }
    }

    fn position(&self) -> Point {
        match self {
            Shape::Rectangle(s) => s.position(),
            Shape::Ellipse(s) => s.position(),
            Shape::Line(s) => s.position(),
            Shape::Rhombus(s) => s.position(),
            Shape::Text(s) => s.position(),
        }
    }

    fn set_position(&mut self, p: Point) {
        match self {
            Shape::Rectangle(s) => s.set_position(p),
            Shape::Ellipse(s) => s.set_position(p),
            Shape::Line(s) => s.set_position(p),
            Shape::Rhombus(s) => s.set_position(p),
            Shape::Text(s) => s.set_position(p),
        }
    }

    fn width(&self) -> f64 {
        match self {
            Shape::Rectangle(s) => s.width(),
            Shape::Ellipse(s) => s.width(),
            Shape::Line(s) => s.width(),
            Shape::Rhombus(s) => s.width(),
            Shape::Text(s) => s.width(),
        }
    }

    fn height(&self) -> f64 {
        match self {
            Shape::Rectangle(s) => s.height(),
            Shape::Ellipse(s) => s.height(),
            Shape::Line(s) => s.height(),
            Shape::Rhombus(s) => s.height(),
            Shape::Text(s) => s.height(),
        }
    }

    fn resize(&mut self, width: f64, height: f64) {
        match self {
            Shape::Rectangle(s) => s.resize(width, height),
            Shape::Ellipse(s) => s.resize(width, height),
            Shape::Line(s) => s.resize(width, height),
            Shape::Rhombus(s) => s.resize(width, height),
            Shape::Text(s) => s.resize(width, height),
        }
    }

    fn rotation(&self) -> f64 {
        match self {
            Shape::Rectangle(s) => s.rotation(),
            Shape::Ellipse(s) => s.rotation(),
            Shape::Line(s) => s.rotation(),
            Shape::Rhombus(s) => s.rotation(),
            Shape::Text(s) => s.rotation(),
        }
    }

    fn set_rotation(&mut self, degrees: f64) {
        match self {
            Shape::Rectangle(s) => s.set_rotation(degrees),
            Shape::Ellipse(s) => s.set_rotation(degrees),
            Shape::Line(s) => s.set_rotation(degrees),
            Shape::Rhombus(s) => s.set_rotation(degrees),
            Shape::Text(s) => s.set_rotation(degrees),
        }
    }

    fn style(&self) -> &ShapeStyle {
        match self {
            Shape::Rectangle(s) => s.style(),
            Shape::Ellipse(s) => s.style(),
            Shape::Line(s) => s.style(),
            Shape::Rhombus(s) => s.style(),
            Shape::Text(s) => s.style(),
        }
    }

    fn style_mut(&mut self) -> &mut ShapeStyle {
        match self {
            Shape::Rectangle(s) => s.style_mut(),
            Shape::Ellipse(s) => s.style_mut(),
            Shape::Line(s) => s.style_mut(),
            Shape::Rhombus(s) => s.style_mut(),
            Shape::Text(s) => s.style_mut(),
        }
    }

    fn apply_style(&self) -> PaintStyle {
        match self {
            Shape::Rectangle(s) => s.apply_style(),
            Shape::Ellipse(s) => s.apply_style(),
            Shape::Line(s) => s.apply_style(),
            Shape::Rhombus(s) => s.apply_style(),
            Shape::Text(s) => s.apply_style(),
        }
    }

    fn center(&self) -> Point {
        match self {
            Shape::Rectangle(s) => s.center(),
            Shape::Ellipse(s) => s.center(),
            Shape::Line(s) => s.center(),
            Shape::Rhombus(s) => s.center(),
            Shape::Text(s) => s.center(),
        }
    }

    fn bounds(&self) -> (f64, f64, f64, f64) {
        match self {
            Shape::Rectangle(s) => s.bounds(),
            Shape::Ellipse(s) => s.bounds(),
            Shape::Line(s) => s.bounds(),
            Shape::Rhombus(s) => s.bounds(),
            Shape::Text(s) => s.bounds(),
        }
    }

    fn contains_point(&self, p: Point, tolerance: f64) -> bool {
        match self {
            Shape::Rectangle(s) => s.contains_point(p, tolerance),
            Shape::Ellipse(s) => s.contains_point(p, tolerance),
            Shape::Line(s) => s.contains_point(p, tolerance),
            Shape::Rhombus(s) => s.contains_point(p, tolerance),
            Shape::Text(s) => s.contains_point(p, tolerance),
        }
    }
}

impl Shape {
    /// Type tag of the persisted record.
    pub fn shape_type_tag(&self) -> &'static str {
        self.shape_type().tag()
    }

    /// Encodes the shape as one persisted record.
    pub fn serialize(&self) -> String {
        crate::serialization::encode_shape(self)
    }

    /// Box geometry of the unrotated shape; `None` for lines.
    pub fn geometry(&self) -> Option<BoxGeometry> {
        match self {
            Shape::Rectangle(s) => Some(s.frame),
            Shape::Ellipse(s) => Some(s.frame),
            Shape::Rhombus(s) => Some(s.frame),
            Shape::Text(s) => Some(s.frame),
            Shape::Line(_) => None,
        }
    }

    /// Moves and resizes a box shape in one step. Lines are left untouched.
    pub fn set_geometry(&mut self, geometry: BoxGeometry) {
        if matches!(self, Shape::Line(_)) {
            return;
        }
        self.set_position(Point::new(geometry.x, geometry.y));
        self.resize(geometry.width, geometry.height);
    }

    /// Start and end points of a line; `None` for box shapes.
    pub fn endpoints(&self) -> Option<(Point, Point)> {
        match self {
            Shape::Line(l) => Some((l.start, l.end)),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&SchemeText> {
        match self {
            Shape::Text(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_text_mut(&mut self) -> Option<&mut SchemeText> {
        match self {
            Shape::Text(t) => Some(t),
            _ => None,
        }
    }
}

/// Offset of `p` from `center` expressed in the shape's unrotated frame.
pub(crate) fn local_offset(p: Point, center: Point, rotation: f64) -> Point {
    let local = rotate_point(p, center, -rotation);
    Point::new(local.x - center.x, local.y - center.y)
}
