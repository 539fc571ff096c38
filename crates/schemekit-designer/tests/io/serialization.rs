use proptest::prelude::*;
use schemekit_designer::serialization::{join_records, split_records};
use schemekit_designer::{
    decode_all, decode_shape, encode_shape, CodecError, Color, FontDescriptor, Point,
    SchemeEllipse, SchemeLine, SchemeRectangle, SchemeRhombus, SchemeShape, SchemeText, Shape,
    ShapeStyle, ShapeType,
};

const BLACK: &str = "0.000,0.000,0.000,1.000";
const CLEAR: &str = "0.000,0.000,0.000,0.000";

fn channel() -> impl Strategy<Value = f64> {
    (0u32..=1000).prop_map(|k| k as f64 / 1000.0)
}

fn color() -> impl Strategy<Value = Color> {
    (channel(), channel(), channel(), channel()).prop_map(|(r, g, b, a)| Color::rgba(r, g, b, a))
}

fn style() -> impl Strategy<Value = ShapeStyle> {
    (color(), color()).prop_map(|(stroke, fill)| ShapeStyle::new(stroke, fill))
}

fn box_shape() -> impl Strategy<Value = Shape> {
    (
        0usize..3,
        -1000.0f64..1000.0,
        -1000.0f64..1000.0,
        1.0f64..500.0,
        1.0f64..500.0,
        0.0f64..359.9,
        style(),
    )
        .prop_map(|(kind, x, y, w, h, rotation, style)| {
            let mut shape = match kind {
                0 => Shape::Rectangle(SchemeRectangle::new(x, y, w, h)),
                1 => Shape::Ellipse(SchemeEllipse::new(x, y, w, h)),
                _ => Shape::Rhombus(SchemeRhombus::new(x, y, w, h)),
            };
            shape.set_rotation(rotation);
            *shape.style_mut() = style;
            shape
        })
}

fn line_shape() -> impl Strategy<Value = Shape> {
    (
        -1000.0f64..1000.0,
        -1000.0f64..1000.0,
        -500.0f64..500.0,
        -500.0f64..500.0,
        0.0f64..359.9,
        style(),
    )
        .prop_map(|(x, y, dx, dy, rotation, style)| {
            let mut line = SchemeLine::new(Point::new(x, y), Point::new(x + dx, y + dy));
            line.set_rotation(rotation);
            line.style = style;
            Shape::Line(line)
        })
}

fn text_shape() -> impl Strategy<Value = Shape> {
    (
        "[a-zA-Z0-9 |,.\\\\\n]{1,20}",
        -1000.0f64..1000.0,
        -1000.0f64..1000.0,
        8.0f64..72.0,
        prop::sample::select(vec!["Arial", "Courier New", "DejaVu Sans"]),
        any::<bool>(),
        any::<bool>(),
        0.0f64..359.9,
        style(),
    )
        .prop_map(|(content, x, y, size, family, bold, italic, rotation, style)| {
            let font = FontDescriptor {
                bold,
                italic,
                ..FontDescriptor::new(family, size)
            };
            let mut text = SchemeText::new(content, x, y, font);
            text.set_rotation(rotation);
            text.style = style;
            Shape::Text(text)
        })
}

fn any_shape() -> impl Strategy<Value = Shape> {
    prop_oneof![box_shape(), line_shape(), text_shape()]
}

fn close(a: f64, b: f64, tolerance: f64) -> bool {
    (a - b).abs() <= tolerance
}

proptest! {
    #[test]
    fn prop_round_trip_within_format_precision(shape in any_shape()) {
        let record = encode_shape(&shape);
        let decoded = decode_shape(&record).unwrap();

        prop_assert_eq!(decoded.shape_type(), shape.shape_type());
        prop_assert_eq!(decoded.style(), shape.style());
        prop_assert!(close(decoded.rotation(), shape.rotation(), 0.051));

        match (&shape, &decoded) {
            (Shape::Line(a), Shape::Line(b)) => {
                prop_assert!(close(a.start.x, b.start.x, 0.0051));
                prop_assert!(close(a.start.y, b.start.y, 0.0051));
                prop_assert!(close(a.end.x, b.end.x, 0.011));
                prop_assert!(close(a.end.y, b.end.y, 0.011));
            }
            _ => {
                let (a, b) = (shape.geometry().unwrap(), decoded.geometry().unwrap());
                prop_assert!(close(a.x, b.x, 0.0051));
                prop_assert!(close(a.y, b.y, 0.0051));
                prop_assert!(close(a.width, b.width, 0.0051));
                prop_assert!(close(a.height, b.height, 0.0051));
            }
        }

        if let (Shape::Text(a), Shape::Text(b)) = (&shape, &decoded) {
            prop_assert_eq!(a.text(), b.text());
            prop_assert_eq!(&a.font().family, &b.font().family);
            prop_assert_eq!(a.font().bold, b.font().bold);
            prop_assert_eq!(a.font().italic, b.font().italic);
            prop_assert!(close(a.font().size, b.font().size, 0.051));
        }

        // A decoded shape re-encodes to the same record.
        prop_assert_eq!(encode_shape(&decoded), record);
    }
}

#[test]
fn test_encode_rectangle() {
    let mut rect = SchemeRectangle::new(10.0, 20.0, 30.0, 40.0);
    rect.set_rotation(15.0);
    assert_eq!(
        encode_shape(&Shape::Rectangle(rect)),
        format!("RECTANGLE|10.00|20.00|30.00|40.00|15.0|{}|{}", BLACK, CLEAR)
    );
}

#[test]
fn test_encode_line_as_start_and_delta() {
    let line = SchemeLine::new(Point::new(100.0, 50.0), Point::new(40.0, 80.0));
    let record = encode_shape(&Shape::Line(line));
    assert!(record.starts_with("LINE|100.00|50.00|-60.00|30.00|0.0|"));

    let decoded = decode_shape(&record).unwrap();
    assert_eq!(
        decoded.endpoints(),
        Some((Point::new(100.0, 50.0), Point::new(40.0, 80.0)))
    );
}

#[test]
fn test_text_escapes_field_delimiter() {
    let text = SchemeText::new("A|B", 0.0, 0.0, FontDescriptor::default());
    let record = encode_shape(&Shape::Text(text));
    assert!(record.contains("|A\\|B|18.0|Arial|Regular|"));

    let decoded = decode_shape(&record).unwrap();
    assert_eq!(decoded.as_text().unwrap().text(), "A|B");
}

#[test]
fn test_lenient_scalars_and_colors() {
    let record = "ELLIPSE|12,5|7,25|20|10|45,5|0,000,0,500,1,000,1,000|1.000,1.000,1.000,1.000";
    let shape = decode_shape(record).unwrap();
    let frame = shape.geometry().unwrap();
    assert_eq!((frame.x, frame.y), (12.5, 7.25));
    assert_eq!(shape.rotation(), 45.5);
    assert_eq!(shape.style().stroke, Color::rgba(0.0, 0.5, 1.0, 1.0));
    assert_eq!(shape.style().fill, Color::WHITE);
}

#[test]
fn test_bad_optional_fields_fall_back() {
    let record = format!("RHOMBUS|0|0|10|10|sideways|{}|not-a-color", BLACK);
    let shape = decode_shape(&record).unwrap();
    assert_eq!(shape.rotation(), 0.0);
    assert_eq!(shape.style().fill, ShapeStyle::default().fill);

    let record = format!("TEXT|0|0|60|36|0|Hi|big||Bold Italic|{}|{}", BLACK, BLACK);
    let shape = decode_shape(&record).unwrap();
    let font = shape.as_text().unwrap().font();
    assert_eq!(font.size, 18.0);
    assert_eq!(font.family, "Arial");
    assert!(font.bold && font.italic);
}

#[test]
fn test_structural_errors() {
    assert_eq!(decode_shape("   "), Err(CodecError::EmptyRecord));
    assert!(matches!(
        decode_shape("HEXAGON|0|0|1|1|0|a|b"),
        Err(CodecError::UnknownType(tag)) if tag == "HEXAGON"
    ));
    assert!(matches!(
        decode_shape("RECTANGLE|0|0|1|1"),
        Err(CodecError::FieldCount { expected: 8, found: 5, .. })
    ));
    assert!(matches!(
        decode_shape(&format!("RECTANGLE|0|0|1|1|0|{}", BLACK)),
        Err(CodecError::FieldCount { expected: 8, found: 7, .. })
    ));
    assert!(matches!(
        decode_shape(&format!("LINE|x|0|1|1|0|{}|{}", BLACK, CLEAR)),
        Err(CodecError::InvalidNumber { field: "x", .. })
    ));
    assert!(matches!(
        decode_shape(&format!("RECTANGLE|0|0|NaN|1|0|{}|{}", BLACK, CLEAR)),
        Err(CodecError::InvalidNumber { field: "width", .. })
    ));
}

#[test]
fn test_batch_load_skips_bad_records() {
    let records = [
        format!("RECTANGLE|10.00|20.00|30.00|40.00|15.0|{}|{}", BLACK, CLEAR),
        format!("ELLIPSE|5.00|5.00|20.00|10.00|abc|{}|{}", BLACK, CLEAR),
        format!("HEXAGON|0|0|1|1|0|{}|{}", BLACK, CLEAR),
    ];
    let (shapes, report) = decode_all(&records);

    assert_eq!(report.loaded, 2);
    assert_eq!(report.failed, 1);
    assert_eq!(report.attempted(), 3);
    assert!(!report.is_clean());

    assert_eq!(shapes.len(), 2);
    assert_eq!(shapes[0].shape_type(), ShapeType::Rectangle);
    assert_eq!(shapes[1].shape_type(), ShapeType::Ellipse);
    assert_eq!(shapes[1].rotation(), 0.0);
}

#[test]
fn test_blank_entries_are_ignored() {
    let (shapes, report) = decode_all(&["", "  ", "LINE|0|0|10|0|0|0,0,0,1|0,0,0,0"]);
    assert_eq!(shapes.len(), 1);
    assert_eq!(report.attempted(), 1);
    assert!(report.is_clean());
}

#[test]
fn test_blob_join_and_split() {
    let records = vec!["A|1".to_string(), "B|2".to_string()];
    let blob = join_records(&records);
    assert_eq!(blob, "A|1\nB|2");
    assert_eq!(split_records("A|1\r\n\r\nB|2\n"), records);
}
