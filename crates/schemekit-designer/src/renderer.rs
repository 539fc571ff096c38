//! Render adapter.
//!
//! Maps shapes and selection decorations to `lyon` paths plus paint. The
//! geometry lives in the model; this module only decides what gets drawn.
//! Text is drawn as its box outline in the stroke colour; glyphs are laid out
//! by the host toolkit, painted with [`SchemeShape::apply_style`].

use lyon::math::{point, vector, Angle, Box2D, Transform};
use lyon::path::{Path, Winding};

use crate::canvas::Canvas;
use crate::model::{Color, PaintStyle, Point, SchemeShape, Shape};
use crate::selection_manager::Decorations;

/// Colour of resize, endpoint and rotation handles.
pub const HANDLE_COLOR: Color = Color {
    r: 0.2,
    g: 0.6,
    b: 1.0,
    a: 1.0,
};

/// Colour of the line snap indicator.
pub const SNAP_INDICATOR_COLOR: Color = Color {
    r: 1.0,
    g: 0.4,
    b: 0.0,
    a: 1.0,
};

const SNAP_INDICATOR_RADIUS: f32 = 5.0;
const TEXT_BOX_STROKE_WIDTH: f64 = 1.0;

/// One drawable primitive.
#[derive(Debug, Clone)]
pub struct RenderItem {
    pub path: Path,
    pub paint: PaintStyle,
}

fn to_lyon(p: Point) -> lyon::math::Point {
    point(p.x as f32, p.y as f32)
}

fn rotate_about(path: Path, center: Point, degrees: f64) -> Path {
    if degrees.abs() < 1e-9 {
        return path;
    }
    let (cx, cy) = (center.x as f32, center.y as f32);
    let transform = Transform::translation(-cx, -cy)
        .then_rotate(Angle::degrees(degrees as f32))
        .then_translate(vector(cx, cy));
    path.transformed(&transform)
}

/// Outline of a shape in canvas coordinates, rotation applied.
pub fn shape_path(shape: &Shape) -> Path {
    let mut builder = Path::builder();
    match shape {
        Shape::Rectangle(_) | Shape::Text(_) => {
            let (x1, y1, x2, y2) = shape.bounds();
            builder.add_rectangle(
                &Box2D::new(point(x1 as f32, y1 as f32), point(x2 as f32, y2 as f32)),
                Winding::Positive,
            );
        }
        Shape::Ellipse(ellipse) => {
            let (rx, ry) = ellipse.radii();
            builder.add_ellipse(
                to_lyon(ellipse.center()),
                vector(rx as f32, ry as f32),
                Angle::radians(0.0),
                Winding::Positive,
            );
        }
        Shape::Rhombus(rhombus) => {
            let [top, right, bottom, left] = rhombus.vertices();
            builder.begin(to_lyon(top));
            builder.line_to(to_lyon(right));
            builder.line_to(to_lyon(bottom));
            builder.line_to(to_lyon(left));
            builder.close();
        }
        Shape::Line(line) => {
            builder.begin(to_lyon(line.start));
            builder.line_to(to_lyon(line.end));
            builder.end(false);
        }
    }
    rotate_about(builder.build(), shape.center(), shape.rotation())
}

pub fn render_shape(shape: &Shape) -> RenderItem {
    let paint = match shape {
        Shape::Text(text) => PaintStyle {
            stroke: Some(text.style.stroke),
            fill: None,
            stroke_width: TEXT_BOX_STROKE_WIDTH,
        },
        _ => shape.apply_style(),
    };
    RenderItem {
        path: shape_path(shape),
        paint,
    }
}

/// Handles, rotation handle and snap indicator of the selected shape.
pub fn render_decorations(decorations: &Decorations, handle_size: f64) -> Vec<RenderItem> {
    let half = (handle_size / 2.0) as f32;
    let handle_paint = PaintStyle {
        stroke: Some(HANDLE_COLOR),
        fill: Some(Color::WHITE),
        stroke_width: 1.0,
    };

    let mut items: Vec<RenderItem> = decorations
        .iter()
        .map(|handle| {
            let c = to_lyon(handle.position);
            let mut builder = Path::builder();
            builder.add_rectangle(
                &Box2D::new(point(c.x - half, c.y - half), point(c.x + half, c.y + half)),
                Winding::Positive,
            );
            RenderItem {
                path: builder.build(),
                paint: handle_paint,
            }
        })
        .collect();

    if let Some(indicator) = decorations.snap_indicator {
        let mut builder = Path::builder();
        builder.add_circle(to_lyon(indicator), SNAP_INDICATOR_RADIUS, Winding::Positive);
        items.push(RenderItem {
            path: builder.build(),
            paint: PaintStyle {
                stroke: Some(SNAP_INDICATOR_COLOR),
                fill: None,
                stroke_width: 2.0,
            },
        });
    }
    items
}

/// Everything on the canvas in paint order: shapes bottom to top, then the
/// live preview, then the selection decorations.
pub fn render_canvas(canvas: &Canvas, preview: Option<&Shape>) -> Vec<RenderItem> {
    let mut items: Vec<RenderItem> = canvas.shapes().map(|obj| render_shape(&obj.shape)).collect();
    if let Some(preview) = preview {
        items.push(render_shape(preview));
    }
    if let Some(decorations) = canvas.decorations() {
        items.extend(render_decorations(
            decorations,
            canvas.handle_settings().handle_size,
        ));
    }
    items
}
