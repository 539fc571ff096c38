use schemekit_settings::EditorConfig;

use super::{
    BoxGeometry, Color, FontDescriptor, Point, SchemeEllipse, SchemeLine, SchemeRectangle,
    SchemeRhombus, SchemeShape, SchemeText, Shape, ShapeStyle, ShapeType,
};

/// Builds new shapes with the editor's default style and font.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeFactory {
    pub style: ShapeStyle,
    pub text_style: ShapeStyle,
    pub font: FontDescriptor,
}

impl Default for ShapeFactory {
    fn default() -> Self {
        Self {
            style: ShapeStyle::default(),
            text_style: ShapeStyle::new(Color::BLACK, Color::BLACK),
            font: FontDescriptor::default(),
        }
    }
}

impl ShapeFactory {
    pub fn from_config(config: &EditorConfig) -> Self {
        Self {
            font: FontDescriptor::new(
                config.text.default_font_family.clone(),
                config.text.default_font_size,
            ),
            ..Self::default()
        }
    }

    /// Creates a shape spanning two pointer positions.
    ///
    /// Box shapes use the two points as opposite corners; lines run from `start` to `end`.
    /// Text needs content and is created through [`ShapeFactory::create_text`], so `None`
    /// is returned for it.
    pub fn create_shape(&self, kind: ShapeType, start: Point, end: Point) -> Option<Shape> {
        match kind {
            ShapeType::Line => {
                let mut line = SchemeLine::new(start, end);
                line.style = self.style;
                Some(Shape::Line(line))
            }
            _ => self.box_shape(kind, BoxGeometry::from_corners(start, end)),
        }
    }

    /// Creates a shape from a persisted `x, y, width, height` tuple.
    ///
    /// For lines the size is the signed end-minus-start delta.
    pub fn from_record(
        &self,
        kind: ShapeType,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    ) -> Option<Shape> {
        match kind {
            ShapeType::Line => {
                self.create_shape(kind, Point::new(x, y), Point::new(x + width, y + height))
            }
            _ => self.box_shape(kind, BoxGeometry::new(x, y, width, height)),
        }
    }

    fn box_shape(&self, kind: ShapeType, f: BoxGeometry) -> Option<Shape> {
        let mut shape = match kind {
            ShapeType::Rectangle => {
                Shape::Rectangle(SchemeRectangle::new(f.x, f.y, f.width, f.height))
            }
            ShapeType::Ellipse => Shape::Ellipse(SchemeEllipse::new(f.x, f.y, f.width, f.height)),
            ShapeType::Rhombus => Shape::Rhombus(SchemeRhombus::new(f.x, f.y, f.width, f.height)),
            ShapeType::Line | ShapeType::Text => return None,
        };
        *shape.style_mut() = self.style;
        Some(shape)
    }

    /// Creates a text shape with its top-left corner at `anchor`.
    pub fn create_text(&self, text: impl Into<String>, anchor: Point) -> Shape {
        let mut shape = SchemeText::new(text, anchor.x, anchor.y, self.font.clone());
        shape.style = self.text_style;
        Shape::Text(shape)
    }
}
