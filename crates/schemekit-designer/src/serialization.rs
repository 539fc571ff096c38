//! Record codec for persisted schemes.
//!
//! One shape per record, fields separated by `|`:
//!
//! ```text
//! TYPE|x|y|width|height|rotation|r,g,b,a|r,g,b,a
//! TEXT|x|y|width|height|rotation|text|fontSize|family|style|r,g,b,a|r,g,b,a
//! ```
//!
//! The last two groups are the stroke and fill colours. Lines store their
//! start as `x|y` and the signed end-minus-start delta as `width|height`.
//! In text fields a literal `|` is written as `\|`, a backslash as `\\` and
//! line breaks as `\n` / `\r`, so a record always stays on one line. Any other
//! backslash is read back literally.
//!
//! Decoding is lenient: commas in scalar numbers are read as decimal points,
//! an unreadable rotation, font or colour falls back to its default, and only
//! structural faults (field count, type tag, primary geometry) reject a record.
//! A whole scheme is a list of records; [`join_records`] and [`split_records`]
//! map it to and from a newline-separated blob.

use schemekit_core::constants::{DEFAULT_FONT_FAMILY, DEFAULT_FONT_SIZE};

use crate::error::{CodecError, CodecResult};
use crate::model::{
    BoxGeometry, Color, FontDescriptor, SchemeShape, SchemeText, Shape, ShapeFactory, ShapeStyle,
    ShapeType,
};

const FIELD_DELIMITER: char = '|';
const RECORD_DELIMITER: char = '\n';
const SHAPE_FIELD_COUNT: usize = 8;
const TEXT_FIELD_COUNT: usize = 12;

/// Outcome of a best-effort batch load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadReport {
    pub loaded: usize,
    pub failed: usize,
}

impl LoadReport {
    pub fn attempted(&self) -> usize {
        self.loaded + self.failed
    }

    pub fn is_clean(&self) -> bool {
        self.failed == 0
    }
}

fn format_color(c: &Color) -> String {
    format!("{:.3},{:.3},{:.3},{:.3}", c.r, c.g, c.b, c.a)
}

fn escape_field(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            FIELD_DELIMITER => escaped.push_str("\\|"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Encodes one shape as a record.
pub fn encode_shape(shape: &Shape) -> String {
    let style = shape.style();
    let (x, y, width, height) = match shape {
        Shape::Line(line) => (
            line.start.x,
            line.start.y,
            line.end.x - line.start.x,
            line.end.y - line.start.y,
        ),
        _ => {
            let p = shape.position();
            (p.x, p.y, shape.width(), shape.height())
        }
    };
    let head = format!(
        "{}|{:.2}|{:.2}|{:.2}|{:.2}|{:.1}",
        shape.shape_type_tag(),
        x,
        y,
        width,
        height,
        shape.rotation()
    );

    match shape {
        Shape::Text(text) => {
            let font = text.font();
            format!(
                "{}|{}|{:.1}|{}|{}|{}|{}",
                head,
                escape_field(text.text()),
                font.size,
                escape_field(&font.family),
                font.style_string(),
                format_color(&style.stroke),
                format_color(&style.fill)
            )
        }
        _ => format!(
            "{}|{}|{}",
            head,
            format_color(&style.stroke),
            format_color(&style.fill)
        ),
    }
}

/// Encodes shapes in the given order.
pub fn encode_all<'a>(shapes: impl IntoIterator<Item = &'a Shape>) -> Vec<String> {
    shapes.into_iter().map(encode_shape).collect()
}

/// Splits a record on `|`, resolving the escapes written by the encoder.
pub fn split_fields(record: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut chars = record.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.peek().copied() {
                Some(next @ ('\\' | FIELD_DELIMITER)) => {
                    current.push(next);
                    chars.next();
                }
                Some('n') => {
                    current.push('\n');
                    chars.next();
                }
                Some('r') => {
                    current.push('\r');
                    chars.next();
                }
                _ => current.push(c),
            },
            FIELD_DELIMITER => fields.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    fields.push(current);
    fields
}

/// Parses a scalar number, reading `,` as a decimal point. Non-finite values are rejected.
pub fn parse_number(raw: &str) -> Option<f64> {
    raw.trim()
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

/// Parses an `r,g,b,a` group.
///
/// Also accepts the eight-part form produced when every channel was written
/// with a comma decimal separator (`0,500,1,000,...`).
pub fn parse_color(raw: &str) -> Option<Color> {
    let parts: Vec<&str> = raw.trim().split(',').map(str::trim).collect();
    let channels: Vec<f64> = match parts.len() {
        4 => parts
            .iter()
            .map(|p| p.parse::<f64>().ok().filter(|v| v.is_finite()))
            .collect::<Option<_>>()?,
        8 => parts
            .chunks(2)
            .map(|pair| parse_number(&format!("{}.{}", pair[0], pair[1])))
            .collect::<Option<_>>()?,
        _ => return None,
    };
    Some(Color::rgba(channels[0], channels[1], channels[2], channels[3]))
}

fn required_number(fields: &[String], index: usize, name: &'static str) -> CodecResult<f64> {
    let raw = fields.get(index).map(String::as_str).unwrap_or("");
    parse_number(raw).ok_or_else(|| CodecError::invalid_number(name, raw))
}

fn color_or_default(raw: &str, default: Color, what: &str) -> Color {
    parse_color(raw).unwrap_or_else(|| {
        tracing::warn!("Unreadable {} colour '{}', using default", what, raw);
        default
    })
}

/// Decodes one record.
pub fn decode_shape(record: &str) -> CodecResult<Shape> {
    let record = record.trim_end_matches(['\r', '\n']);
    if record.trim().is_empty() {
        return Err(CodecError::EmptyRecord);
    }

    let fields = split_fields(record);
    let tag = fields[0].trim();
    let kind = ShapeType::from_tag(tag).ok_or_else(|| CodecError::UnknownType(tag.to_string()))?;

    let expected = if kind == ShapeType::Text {
        TEXT_FIELD_COUNT
    } else {
        SHAPE_FIELD_COUNT
    };
    if fields.len() != expected {
        return Err(CodecError::FieldCount {
            tag: tag.to_string(),
            expected,
            found: fields.len(),
        });
    }

    let x = required_number(&fields, 1, "x")?;
    let y = required_number(&fields, 2, "y")?;
    let width = required_number(&fields, 3, "width")?;
    let height = required_number(&fields, 4, "height")?;
    let rotation = parse_number(&fields[5]).unwrap_or_else(|| {
        tracing::warn!("Unreadable rotation '{}' in {} record, using 0", fields[5], tag);
        0.0
    });

    let factory = ShapeFactory::default();
    let mut shape = if kind == ShapeType::Text {
        decode_text(&fields, BoxGeometry::new(x, y, width, height), &factory)
    } else {
        factory
            .from_record(kind, x, y, width, height)
            .ok_or_else(|| CodecError::UnknownType(tag.to_string()))?
    };

    let defaults = if kind == ShapeType::Text {
        factory.text_style
    } else {
        factory.style
    };
    let n = fields.len();
    *shape.style_mut() = ShapeStyle::new(
        color_or_default(&fields[n - 2], defaults.stroke, "stroke"),
        color_or_default(&fields[n - 1], defaults.fill, "fill"),
    );
    shape.set_rotation(rotation);
    Ok(shape)
}

fn decode_text(fields: &[String], frame: BoxGeometry, factory: &ShapeFactory) -> Shape {
    let size = parse_number(&fields[7]).unwrap_or_else(|| {
        tracing::warn!("Unreadable font size '{}', using {}", fields[7], DEFAULT_FONT_SIZE);
        DEFAULT_FONT_SIZE
    });
    let family = match fields[8].trim() {
        "" => DEFAULT_FONT_FAMILY.to_string(),
        family => family.to_string(),
    };
    let font = FontDescriptor::new(family, size).with_style_string(&fields[9]);

    let mut text = SchemeText::with_frame(fields[6].clone(), frame, font);
    text.style = factory.text_style;
    Shape::Text(text)
}

/// Decodes a list of records, skipping and counting those that fail.
/// Blank entries are ignored.
pub fn decode_all<S: AsRef<str>>(records: &[S]) -> (Vec<Shape>, LoadReport) {
    let mut shapes = Vec::with_capacity(records.len());
    let mut report = LoadReport::default();
    for (i, record) in records.iter().enumerate() {
        let record = record.as_ref();
        if record.trim().is_empty() {
            continue;
        }
        match decode_shape(record) {
            Ok(shape) => {
                shapes.push(shape);
                report.loaded += 1;
            }
            Err(e) => {
                tracing::warn!("Skipping record {}: {}", i, e);
                report.failed += 1;
            }
        }
    }
    (shapes, report)
}

/// Joins records into one persisted blob.
pub fn join_records<S: AsRef<str>>(records: &[S]) -> String {
    let mut blob = String::new();
    for (i, record) in records.iter().enumerate() {
        if i > 0 {
            blob.push(RECORD_DELIMITER);
        }
        blob.push_str(record.as_ref());
    }
    blob
}

/// Splits a persisted blob into records; blank lines are dropped and `\r` is stripped.
pub fn split_records(blob: &str) -> Vec<String> {
    blob.split(RECORD_DELIMITER)
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect()
}
