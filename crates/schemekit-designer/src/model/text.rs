use serde::{Deserialize, Serialize};

use schemekit_core::constants::{
    DEFAULT_FONT_FAMILY, DEFAULT_FONT_SIZE, MAX_FONT_SIZE, MAX_RESIZE_FONT_SIZE, MIN_FONT_SIZE,
    MIN_RESIZE_FONT_SIZE,
};

use super::{
    clamp_stored_size, local_offset, normalize_angle, BoxGeometry, PaintStyle, Point,
    SchemeShape, ShapeStyle, ShapeType,
};

/// Average glyph advance relative to the font size, used to size the text box.
const GLYPH_WIDTH_FACTOR: f64 = 0.6;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontDescriptor {
    pub family: String,
    pub size: f64,
    pub bold: bool,
    pub italic: bool,
}

impl FontDescriptor {
    pub fn new(family: impl Into<String>, size: f64) -> Self {
        Self {
            family: family.into(),
            size: clamp_font_size(size),
            bold: false,
            italic: false,
        }
    }

    /// Style string of the persisted record: `Regular`, `Bold`, `Italic` or `Bold Italic`.
    pub fn style_string(&self) -> &'static str {
        match (self.bold, self.italic) {
            (false, false) => "Regular",
            (true, false) => "Bold",
            (false, true) => "Italic",
            (true, true) => "Bold Italic",
        }
    }

    /// Applies a persisted style string; `Bold` and `Italic` substrings toggle the flags.
    pub fn with_style_string(mut self, style: &str) -> Self {
        self.bold = style.contains("Bold");
        self.italic = style.contains("Italic");
        self
    }
}

impl Default for FontDescriptor {
    fn default() -> Self {
        Self::new(DEFAULT_FONT_FAMILY, DEFAULT_FONT_SIZE)
    }
}

fn clamp_font_size(size: f64) -> f64 {
    if size.is_finite() {
        size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE)
    } else {
        DEFAULT_FONT_SIZE
    }
}

/// Text label. The stored box drives selection handles; its height maps to the font size on resize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemeText {
    pub frame: BoxGeometry,
    rotation: f64,
    pub style: ShapeStyle,
    text: String,
    font: FontDescriptor,
}

impl SchemeText {
    /// Creates a text shape with its top-left corner at `(x, y)`, sized from the content.
    pub fn new(text: impl Into<String>, x: f64, y: f64, font: FontDescriptor) -> Self {
        let text = text.into();
        let font = FontDescriptor {
            size: clamp_font_size(font.size),
            ..font
        };
        let (width, height) = estimate_box(&text, font.size);
        Self {
            frame: BoxGeometry::new(x, y, width, height),
            rotation: 0.0,
            style: ShapeStyle::default(),
            text,
            font,
        }
    }

    /// Rebuilds a text shape from persisted values without re-deriving its box.
    pub fn with_frame(text: impl Into<String>, frame: BoxGeometry, font: FontDescriptor) -> Self {
        Self {
            frame: frame.clamped(),
            rotation: 0.0,
            style: ShapeStyle::default(),
            text: text.into(),
            font: FontDescriptor {
                size: clamp_font_size(font.size),
                ..font
            },
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn font(&self) -> &FontDescriptor {
        &self.font
    }

    /// Replaces the content and re-derives the box width.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.frame.width = estimate_box(&self.text, self.font.size).0;
    }

    /// Replaces the font (size clamped to the accepted range) and re-derives the box.
    pub fn set_font(&mut self, font: FontDescriptor) {
        self.font = FontDescriptor {
            size: clamp_font_size(font.size),
            ..font
        };
        let (width, height) = estimate_box(&self.text, self.font.size);
        self.frame.width = width;
        self.frame.height = height;
    }
}

/// Box of a text run: an average advance per character and twice the font size in height,
/// so that resizing to the same height keeps the font size unchanged.
fn estimate_box(text: &str, font_size: f64) -> (f64, f64) {
    let chars = text.chars().count().max(1) as f64;
    (
        clamp_stored_size(chars * font_size * GLYPH_WIDTH_FACTOR),
        clamp_stored_size(font_size * 2.0),
    )
}

impl SchemeShape for SchemeText {
    fn shape_type(&self) -> ShapeType {
        ShapeType::Text
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
        self.font.size = (self.frame.height / 2.0).clamp(MIN_RESIZE_FONT_SIZE, MAX_RESIZE_FONT_SIZE);
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
            stroke: None,
            fill: Some(self.style.fill),
            stroke_width: 0.0,
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
        local.x.abs() <= self.frame.width / 2.0 + tolerance
            && local.y.abs() <= self.frame.height / 2.0 + tolerance
    }
}
