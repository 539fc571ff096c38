use proptest::prelude::*;
use schemekit_designer::handles::{
    box_handle_world_positions, remap_handle, snap_line_endpoint, HEIGHT_FLIP_REMAP,
    WIDTH_FLIP_REMAP,
};
use schemekit_designer::{BoxGeometry, Point, ResizeGesture, RotationGesture};
use schemekit_settings::SnapSettings;

const MIN_GESTURE: f64 = 20.0;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

fn assert_frame(actual: BoxGeometry, x: f64, y: f64, w: f64, h: f64) {
    assert!(
        approx(actual.x, x) && approx(actual.y, y) && approx(actual.width, w) && approx(actual.height, h),
        "expected ({}, {}, {}, {}), got {:?}",
        x,
        y,
        w,
        h,
        actual
    );
}

fn gesture_on(handle: usize) -> ResizeGesture {
    let frame = BoxGeometry::new(10.0, 10.0, 50.0, 30.0);
    let pointer = box_handle_world_positions(&frame, 0.0)[handle];
    ResizeGesture::begin(handle, frame, 0.0, pointer, MIN_GESTURE)
}

#[test]
fn test_bottom_right_past_left_edge_tracks_bottom_left() {
    // (-80, -10) is sometimes quoted as taking handle 7 to the top-left handle 0.
    // Only the width flips here (height 30 - 10 = 20 stays positive), so the
    // visual corner under the pointer is the bottom-left one, handle 5. Handle 0
    // needs both axes to flip, see the next test.
    let mut g = gesture_on(7);
    let frame = g.apply_delta(-80.0, -10.0);
    assert_frame(frame, -20.0, 10.0, 30.0, 20.0);
    assert_eq!(g.handle(), 5);
}

#[test]
fn test_bottom_right_past_both_edges_tracks_top_left() {
    let mut g = gesture_on(7);
    let frame = g.apply_delta(-80.0, -50.0);
    assert_frame(frame, -20.0, -10.0, 30.0, 20.0);
    assert_eq!(g.handle(), 0);

    // Further movement follows the remapped handle.
    let frame = g.apply_delta(-10.0, -10.0);
    assert_frame(frame, -30.0, -20.0, 40.0, 30.0);
    assert_eq!(g.handle(), 0);
}

#[test]
fn test_flip_back_restores_original_handle() {
    let mut g = gesture_on(7);
    g.apply_delta(-80.0, 0.0);
    assert_eq!(g.handle(), 5);
    g.apply_delta(80.0, 0.0);
    assert_eq!(g.handle(), 7);
    assert_frame(g.raw_frame(), 10.0, 10.0, 50.0, 30.0);
}

#[test]
fn test_edge_handles_only_flip_their_own_axis() {
    assert_eq!(remap_handle(1, false, true), 6);
    assert_eq!(remap_handle(3, true, false), 4);
    assert_eq!(remap_handle(3, false, true), 3);
    for i in 0..8 {
        assert_eq!(
            remap_handle(i, true, true),
            HEIGHT_FLIP_REMAP[WIDTH_FLIP_REMAP[i]]
        );
    }
}

#[test]
fn test_rotated_resize_keeps_opposite_corner_in_place() {
    let frame = BoxGeometry::new(0.0, 0.0, 40.0, 20.0);
    let rotation = 30.0;
    let before = box_handle_world_positions(&frame, rotation);
    let mut g = ResizeGesture::begin(7, frame, rotation, before[7], MIN_GESTURE);

    let target = Point::new(before[7].x + 12.0, before[7].y + 9.0);
    let after = box_handle_world_positions(&g.drag_to(target), rotation);
    assert!(approx(after[0].x, before[0].x));
    assert!(approx(after[0].y, before[0].y));
}

proptest! {
    #[test]
    fn prop_displayed_size_never_below_floor(
        handle in 0usize..8,
        rotation in prop_oneof![Just(0.0f64), 0.0f64..360.0],
        deltas in prop::collection::vec((-200.0f64..200.0, -200.0f64..200.0), 1..12),
    ) {
        let frame = BoxGeometry::new(10.0, 10.0, 50.0, 30.0);
        let mut g = ResizeGesture::begin(handle, frame, rotation, Point::default(), MIN_GESTURE);
        for (dx, dy) in deltas {
            let shown = g.apply_delta(dx, dy);
            prop_assert!(shown.width >= MIN_GESTURE - 1e-9);
            prop_assert!(shown.height >= MIN_GESTURE - 1e-9);
            prop_assert!(g.raw_frame().width >= 0.0);
            prop_assert!(g.raw_frame().height >= 0.0);
            prop_assert!(g.handle() < 8);
        }
    }
}

#[test]
fn test_line_snap_to_horizontal() {
    let snap = snap_line_endpoint(Point::new(0.0, 0.0), Point::new(98.0, 5.0), &SnapSettings::default());
    let expected = 98.0f64.hypot(5.0);
    assert!(approx(snap.point.x, expected));
    assert!(approx(snap.point.y, 0.0));
    assert!((snap.point.x - 98.13).abs() < 0.01);
    assert_eq!(snap.indicator, Some(snap.point));
}

#[test]
fn test_line_snap_to_diagonal() {
    let fixed = Point::new(100.0, 0.0);
    let snap = snap_line_endpoint(fixed, Point::new(45.0, 52.0), &SnapSettings::default());
    assert!(approx(fixed.angle_to(&snap.point), 135.0));
    assert!(approx(
        fixed.distance_to(&snap.point),
        fixed.distance_to(&Point::new(45.0, 52.0))
    ));
    assert!(snap.indicator.is_some());
}

#[test]
fn test_line_axis_snap_without_indicator() {
    let snap = snap_line_endpoint(Point::new(0.0, 0.0), Point::new(14.0, 40.0), &SnapSettings::default());
    assert_eq!(snap.point, Point::new(0.0, 40.0));
    assert_eq!(snap.indicator, None);
}

#[test]
fn test_line_snap_disabled() {
    let settings = SnapSettings {
        enabled: false,
        ..SnapSettings::default()
    };
    let candidate = Point::new(98.0, 5.0);
    let snap = snap_line_endpoint(Point::new(0.0, 0.0), candidate, &settings);
    assert_eq!(snap.point, candidate);
    assert_eq!(snap.indicator, None);
}

#[test]
fn test_rotation_gesture_accumulates_across_wrap() {
    let center = Point::new(0.0, 0.0);
    let mut g = RotationGesture::begin(center, Point::new(-10.0, 1.0), 350.0);
    // Crossing the ±180° seam of atan2 adds a small positive step.
    let rotation = g.drag_to(Point::new(-10.0, -1.0));
    let step = 2.0 * (0.1f64).atan().to_degrees();
    assert!(approx(rotation, normalize(350.0 + step)));
    assert!((0.0..360.0).contains(&g.rotation()));
}

fn normalize(deg: f64) -> f64 {
    ((deg % 360.0) + 360.0) % 360.0
}
