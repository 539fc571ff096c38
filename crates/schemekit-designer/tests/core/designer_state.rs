use schemekit_designer::{
    BoxGeometry, Color, DesignerState, FontDescriptor, Point, SchemeShape, ShapeType, Tool,
};

fn draw(state: &mut DesignerState, tool: Tool, from: (f64, f64), to: (f64, f64)) -> bool {
    state.set_tool(tool);
    state.pointer_pressed(from.0, from.1);
    state.pointer_dragged(to.0, to.1);
    state.pointer_released(to.0, to.1)
}

fn last_id(state: &DesignerState) -> u64 {
    state.canvas.shapes().last().map(|obj| obj.id).unwrap()
}

#[test]
fn test_draw_each_box_tool() {
    let mut state = DesignerState::new();
    for (tool, kind) in [
        (Tool::Rectangle, ShapeType::Rectangle),
        (Tool::Ellipse, ShapeType::Ellipse),
        (Tool::Rhombus, ShapeType::Rhombus),
    ] {
        assert!(draw(&mut state, tool, (60.0, 40.0), (10.0, 10.0)));
        let shape = state.shape(last_id(&state)).unwrap();
        assert_eq!(shape.shape_type(), kind);
        assert_eq!(shape.geometry(), Some(BoxGeometry::new(10.0, 10.0, 50.0, 30.0)));
    }
    assert_eq!(state.shape_count(), 3);
    assert_eq!(state.undo_depth(), 3);
}

#[test]
fn test_draw_line_keeps_direction() {
    let mut state = DesignerState::new();
    assert!(draw(&mut state, Tool::Line, (100.0, 20.0), (40.0, 80.0)));
    let shape = state.shape(last_id(&state)).unwrap();
    assert_eq!(
        shape.endpoints(),
        Some((Point::new(100.0, 20.0), Point::new(40.0, 80.0)))
    );
}

#[test]
fn test_preview_is_not_part_of_the_scheme() {
    let mut state = DesignerState::new();
    state.set_tool(Tool::Ellipse);
    state.pointer_pressed(0.0, 0.0);
    state.pointer_dragged(30.0, 20.0);

    let preview = state.preview().unwrap();
    assert_eq!(preview.geometry(), Some(BoxGeometry::new(0.0, 0.0, 30.0, 20.0)));
    assert_eq!(state.shape_count(), 0);
    assert!(state.serialize_all().is_empty());

    state.pointer_released(30.0, 20.0);
    assert!(state.preview().is_none());
    assert_eq!(state.shape_count(), 1);
}

#[test]
fn test_click_without_drag_draws_nothing() {
    let mut state = DesignerState::new();
    state.set_tool(Tool::Rectangle);
    state.pointer_pressed(10.0, 10.0);
    assert!(!state.pointer_released(10.0, 10.0));
    assert_eq!(state.shape_count(), 0);
    assert!(!state.can_undo());
}

#[test]
fn test_drawing_clears_selection_and_new_shape_is_not_selected() {
    let mut state = DesignerState::new();
    let first = state
        .create_shape(ShapeType::Rectangle, Point::new(0.0, 0.0), Point::new(20.0, 20.0))
        .unwrap();
    state.select(first);

    state.set_tool(Tool::Rectangle);
    assert_eq!(state.selected_id(), Some(first));

    state.pointer_pressed(100.0, 100.0);
    assert_eq!(state.selected_id(), None);
    state.pointer_released(150.0, 150.0);
    assert_eq!(state.selected_id(), None);
    assert_eq!(state.shape_count(), 2);
}

#[test]
fn test_text_tool_waits_for_content() {
    let mut state = DesignerState::new();
    state.set_tool(Tool::Text);
    state.pointer_pressed(40.0, 50.0);
    state.pointer_released(40.0, 50.0);

    assert_eq!(state.pending_text_anchor(), Some(Point::new(40.0, 50.0)));
    assert_eq!(state.shape_count(), 0);

    let id = state.submit_text("Router").unwrap();
    assert_eq!(state.pending_text_anchor(), None);
    let text = state.shape(id).unwrap().as_text().unwrap();
    assert_eq!(text.text(), "Router");
    assert_eq!(text.position(), Point::new(40.0, 50.0));
    assert_eq!(text.font().size, 18.0);

    state.undo();
    assert_eq!(state.shape_count(), 0);
}

#[test]
fn test_text_tool_empty_content_is_discarded() {
    let mut state = DesignerState::new();
    state.set_tool(Tool::Text);
    state.pointer_pressed(0.0, 0.0);
    assert_eq!(state.submit_text(""), None);
    assert_eq!(state.pending_text_anchor(), None);
    assert_eq!(state.submit_text("late"), None);
    assert_eq!(state.shape_count(), 0);
}

#[test]
fn test_device_tool_leaves_scheme_untouched() {
    let mut state = DesignerState::new();
    state.set_tool(Tool::AddDevice);
    state.pointer_pressed(10.0, 10.0);
    state.pointer_dragged(50.0, 50.0);
    assert!(!state.pointer_released(50.0, 50.0));
    assert_eq!(state.shape_count(), 0);
}

#[test]
fn test_move_by_dragging_body() {
    let mut state = DesignerState::new();
    let id = state
        .create_shape(ShapeType::Rectangle, Point::new(10.0, 10.0), Point::new(60.0, 40.0))
        .unwrap();

    state.pointer_pressed(30.0, 20.0);
    assert_eq!(state.selected_id(), Some(id));
    state.pointer_dragged(50.0, 35.0);
    assert!(state.pointer_released(50.0, 35.0));
    assert_eq!(state.shape(id).unwrap().position(), Point::new(30.0, 25.0));
    assert_eq!(state.last_command_name(), Some("Move"));

    state.undo();
    assert_eq!(state.shape(id).unwrap().position(), Point::new(10.0, 10.0));
}

#[test]
fn test_select_without_moving_records_nothing() {
    let mut state = DesignerState::new();
    let id = state
        .create_shape(ShapeType::Ellipse, Point::new(0.0, 0.0), Point::new(40.0, 40.0))
        .unwrap();
    let depth = state.undo_depth();

    state.pointer_pressed(20.0, 20.0);
    assert!(!state.pointer_released(20.0, 20.0));
    assert_eq!(state.selected_id(), Some(id));
    assert_eq!(state.undo_depth(), depth);
}

#[test]
fn test_cancel_gesture_restores_shape() {
    let mut state = DesignerState::new();
    let id = state
        .create_shape(ShapeType::Rectangle, Point::new(10.0, 10.0), Point::new(60.0, 40.0))
        .unwrap();
    state.select(id);
    let before = state.shape(id).unwrap().clone();

    state.pointer_pressed(60.0, 40.0);
    state.pointer_dragged(120.0, 90.0);
    assert_ne!(state.shape(id).unwrap(), &before);

    state.cancel_gesture();
    assert_eq!(state.shape(id).unwrap(), &before);
    assert!(!state.pointer_released(120.0, 90.0));
    assert_eq!(state.undo_depth(), 1);
}

#[test]
fn test_rotation_handle_drag() {
    let mut state = DesignerState::new();
    let id = state
        .create_shape(ShapeType::Rectangle, Point::new(10.0, 10.0), Point::new(60.0, 40.0))
        .unwrap();
    state.select(id);

    // Handle sits above the centre (35, 25); sweeping to the right turns the shape by 90°.
    state.pointer_pressed(35.0, -20.0);
    state.pointer_dragged(80.0, 25.0);
    assert!(state.pointer_released(80.0, 25.0));

    let rotation = state.shape(id).unwrap().rotation();
    assert!((rotation - 90.0).abs() < 1e-9);
    assert_eq!(state.last_command_name(), Some("Rotate"));

    state.undo();
    assert_eq!(state.shape(id).unwrap().rotation(), 0.0);
}

#[test]
fn test_property_setters_record_changes_only() {
    let mut state = DesignerState::new();
    assert!(!state.set_rotation(45.0));

    let id = state
        .create_shape(ShapeType::Rhombus, Point::new(0.0, 0.0), Point::new(40.0, 40.0))
        .unwrap();
    state.select(id);
    let depth = state.undo_depth();

    assert!(state.set_fill_color(Color::rgb(0.0, 0.5, 1.0)));
    assert!(!state.set_fill_color(Color::rgb(0.0, 0.5, 1.0)));
    assert_eq!(state.shape(id).unwrap().style().fill, Color::rgb(0.0, 0.5, 1.0));

    assert!(state.set_rotation(-90.0));
    assert_eq!(state.shape(id).unwrap().rotation(), 270.0);
    assert!(state.rotate_selected_by(180.0));
    assert_eq!(state.shape(id).unwrap().rotation(), 90.0);

    // Text setters do not apply to a rhombus.
    assert!(!state.set_text("nope"));

    assert_eq!(state.undo_depth(), depth + 3);
    while state.undo_depth() > depth {
        state.undo();
    }
    let shape = state.shape(id).unwrap();
    assert_eq!(shape.rotation(), 0.0);
    assert_eq!(shape.style(), &state.factory.style);
}

#[test]
fn test_replaying_setter_edits_records_nothing_new() {
    let mut state = DesignerState::new();
    let id = state.add_text("Core switch", Point::new(0.0, 0.0));
    state.select(id);
    assert!(state.set_rotation(30.0));
    assert!(state.set_stroke_color(Color::rgb(1.0, 0.0, 0.0)));
    assert!(state.set_text("Core switch 2"));
    assert_eq!((state.undo_depth(), state.redo_depth()), (4, 0));

    for expected_undo in (1..4).rev() {
        assert!(state.undo());
        assert_eq!(state.undo_depth(), expected_undo);
        assert_eq!(state.redo_depth(), 4 - expected_undo);
    }
    while state.redo() {}
    assert_eq!((state.undo_depth(), state.redo_depth()), (4, 0));

    let shape = state.shape(id).unwrap();
    assert_eq!(shape.rotation(), 30.0);
    assert_eq!(shape.as_text().map(|t| t.text()), Some("Core switch 2"));
}

#[test]
fn test_text_and_font_edits() {
    let mut state = DesignerState::new();
    let id = state.add_text("Switch", Point::new(0.0, 0.0));
    state.select(id);

    assert!(state.set_text("Core switch"));
    assert!(state.set_font(FontDescriptor::new("Courier", 100.0)));

    let text = state.shape(id).unwrap().as_text().unwrap();
    assert_eq!(text.text(), "Core switch");
    assert_eq!(text.font().family, "Courier");
    assert_eq!(text.font().size, 72.0);

    state.undo();
    state.undo();
    let text = state.shape(id).unwrap().as_text().unwrap();
    assert_eq!(text.text(), "Switch");
    assert_eq!(text.font().family, "Arial");
}

#[test]
fn test_delete_and_undo() {
    let mut state = DesignerState::new();
    assert!(!state.delete_selected());

    let id = state
        .create_shape(ShapeType::Ellipse, Point::new(0.0, 0.0), Point::new(10.0, 10.0))
        .unwrap();
    state.select(id);
    assert!(state.delete_selected());
    assert_eq!(state.shape_count(), 0);
    assert_eq!(state.selected_id(), None);
    assert!(state.canvas.decorations().is_none());

    state.undo();
    assert_eq!(state.shape_count(), 1);
    assert!(state.shape(id).is_some());
}

#[test]
fn test_undo_cancels_running_gesture() {
    let mut state = DesignerState::new();
    let id = state
        .create_shape(ShapeType::Rectangle, Point::new(0.0, 0.0), Point::new(40.0, 40.0))
        .unwrap();
    state.pointer_pressed(20.0, 20.0);
    state.pointer_dragged(200.0, 200.0);

    assert!(state.undo());
    assert!(state.shape(id).is_none());
    assert!(!state.pointer_released(200.0, 200.0));
}

#[test]
fn test_switch_scheme_resets_session() {
    let mut state = DesignerState::new();
    let id = state
        .create_shape(ShapeType::Rectangle, Point::new(0.0, 0.0), Point::new(40.0, 40.0))
        .unwrap();
    state.select(id);
    state.copy_selected();
    assert!(state.is_modified);

    let report = state.switch_scheme(&["ELLIPSE|5.00|5.00|20.00|10.00|0.0|0.000,0.000,0.000,1.000|1.000,1.000,1.000,1.000"]);
    assert_eq!(report.loaded, 1);
    assert_eq!(state.shape_count(), 1);
    assert!(!state.can_undo());
    assert!(!state.has_clipboard_data());
    assert_eq!(state.selected_id(), None);
    assert!(!state.is_modified);
}

#[test]
fn test_loading_is_not_an_edit() {
    let mut state = DesignerState::new();
    state.load_all(&["RECTANGLE|0.00|0.00|10.00|10.00|0.0|0.000,0.000,0.000,1.000|0.000,0.000,0.000,0.000"]);
    assert_eq!(state.shape_count(), 1);
    assert!(!state.can_undo());
}
