use schemekit_designer::{
    Canvas, HandleKind, Point, SchemeLine, SchemeRectangle, Shape, Tool,
};

fn rect(x: f64, y: f64, w: f64, h: f64) -> Shape {
    Shape::Rectangle(SchemeRectangle::new(x, y, w, h))
}

#[test]
fn test_topmost_shape_wins() {
    let mut canvas = Canvas::new();
    let bottom = canvas.add_shape(rect(0.0, 0.0, 100.0, 100.0));
    let top = canvas.add_shape(rect(50.0, 50.0, 100.0, 100.0));

    assert_eq!(canvas.shape_at(Point::new(75.0, 75.0)), Some(top));
    assert_eq!(canvas.shape_at(Point::new(10.0, 10.0)), Some(bottom));
    assert_eq!(canvas.shape_at(Point::new(500.0, 500.0)), None);
}

#[test]
fn test_single_selection() {
    let mut canvas = Canvas::new();
    let a = canvas.add_shape(rect(0.0, 0.0, 10.0, 10.0));
    let b = canvas.add_shape(rect(50.0, 0.0, 10.0, 10.0));

    assert!(canvas.select(a));
    assert!(canvas.select(b));
    assert_eq!(canvas.selected_id(), Some(b));
    assert!(!canvas.get_shape(a).unwrap().selected);
    assert!(canvas.get_shape(b).unwrap().selected);

    assert_eq!(canvas.select_at(Point::new(500.0, 500.0)), None);
    assert_eq!(canvas.selected_id(), None);
    assert!(canvas.decorations().is_none());
}

#[test]
fn test_box_decorations() {
    let mut canvas = Canvas::new();
    let id = canvas.add_shape(rect(10.0, 10.0, 50.0, 30.0));
    canvas.select(id);

    let decorations = canvas.decorations().unwrap();
    assert_eq!(decorations.shape_id, id);
    assert_eq!(decorations.handles.len(), 8);
    assert!(decorations.rotation_handle.is_some());
    assert_eq!(decorations.snap_indicator, None);

    assert_eq!(canvas.handle_at(Point::new(60.0, 40.0)), Some(HandleKind::Resize(7)));
    assert_eq!(canvas.handle_at(Point::new(35.0, -20.0)), Some(HandleKind::Rotation));
    assert_eq!(canvas.handle_at(Point::new(35.0, 25.0)), None);
}

#[test]
fn test_line_decorations_are_endpoints() {
    let mut canvas = Canvas::new();
    let id = canvas.add_shape(Shape::Line(SchemeLine::new(
        Point::new(0.0, 0.0),
        Point::new(100.0, 0.0),
    )));
    canvas.select(id);

    let decorations = canvas.decorations().unwrap();
    assert_eq!(decorations.handles.len(), 2);
    assert!(decorations.rotation_handle.is_none());
    assert_eq!(canvas.handle_at(Point::new(100.0, 0.0)), Some(HandleKind::Endpoint(1)));
    assert_eq!(canvas.handle_at(Point::new(0.0, 0.0)), Some(HandleKind::Endpoint(0)));
}

#[test]
fn test_switching_tool_keeps_selection() {
    let mut canvas = Canvas::new();
    let id = canvas.add_shape(rect(0.0, 0.0, 10.0, 10.0));
    canvas.select(id);

    canvas.set_tool(Tool::Ellipse);
    assert_eq!(canvas.tool(), Tool::Ellipse);
    assert_eq!(canvas.selected_id(), Some(id));
}

#[test]
fn test_clear_removes_everything() {
    let mut canvas = Canvas::new();
    let id = canvas.add_shape(rect(0.0, 0.0, 10.0, 10.0));
    canvas.add_shape(rect(20.0, 0.0, 10.0, 10.0));
    canvas.select(id);

    canvas.clear();
    assert_eq!(canvas.shape_count(), 0);
    assert_eq!(canvas.selected_id(), None);
    assert!(canvas.decorations().is_none());
}
