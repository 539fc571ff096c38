//! Handle geometry.
//!
//! Layout of the eight box resize handles and how each one moves the box,
//! the index remap applied when a drag turns a box inside out, line endpoint
//! snapping, and the incremental rotation gesture.
//!
//! Box handles sit on a 3×3 grid over the unrotated frame, centre excluded,
//! indexed in row-major order:
//!
//! ```text
//! 0 --- 1 --- 2
//! |           |
//! 3           4
//! |           |
//! 5 --- 6 --- 7
//! ```

use schemekit_settings::SnapSettings;

use crate::model::{normalize_angle, rotate_point, BoxGeometry, Point};

pub const BOX_HANDLE_COUNT: usize = 8;
pub const LINE_HANDLE_COUNT: usize = 2;

/// Grid cell `(column, row)` of each box handle.
const HANDLE_CELLS: [(usize, usize); BOX_HANDLE_COUNT] = [
    (0, 0),
    (1, 0),
    (2, 0),
    (0, 1),
    (2, 1),
    (0, 2),
    (1, 2),
    (2, 2),
];

/// Handle index that ends up on the same visual spot after the width turns negative.
pub const WIDTH_FLIP_REMAP: [usize; BOX_HANDLE_COUNT] = [2, 1, 0, 4, 3, 7, 6, 5];

/// Handle index that ends up on the same visual spot after the height turns negative.
pub const HEIGHT_FLIP_REMAP: [usize; BOX_HANDLE_COUNT] = [5, 6, 7, 3, 4, 0, 1, 2];

/// What a selection decoration does when grabbed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandleKind {
    /// Box resize handle, index 0..8.
    Resize(usize),
    /// Line endpoint handle: 0 is the start, 1 the end.
    Endpoint(usize),
    Rotation,
}

pub fn handle_cell(index: usize) -> Option<(usize, usize)> {
    HANDLE_CELLS.get(index).copied()
}

/// Remaps the active handle after a flip. A corner handle flipped on both axes
/// lands on the diagonally opposite index.
pub fn remap_handle(index: usize, width_flipped: bool, height_flipped: bool) -> usize {
    if index >= BOX_HANDLE_COUNT {
        return index;
    }
    let mut index = index;
    if width_flipped {
        index = WIDTH_FLIP_REMAP[index];
    }
    if height_flipped {
        index = HEIGHT_FLIP_REMAP[index];
    }
    index
}

fn grid_point(frame: &BoxGeometry, column: usize, row: usize) -> Point {
    let xs = [frame.x, frame.x + frame.width / 2.0, frame.x + frame.width];
    let ys = [frame.y, frame.y + frame.height / 2.0, frame.y + frame.height];
    Point::new(xs[column.min(2)], ys[row.min(2)])
}

/// Handle positions over the unrotated frame.
pub fn box_handle_positions(frame: &BoxGeometry) -> [Point; BOX_HANDLE_COUNT] {
    HANDLE_CELLS.map(|(column, row)| grid_point(frame, column, row))
}

/// Handle positions on the canvas, rotated with the shape about its centre.
pub fn box_handle_world_positions(frame: &BoxGeometry, rotation: f64) -> [Point; BOX_HANDLE_COUNT] {
    let center = frame.center();
    box_handle_positions(frame).map(|p| rotate_point(p, center, rotation))
}

/// Rotation handle position: `height / 2 + offset` from the centre along
/// `rotation - 90°`, so an unrotated shape has it straight above.
pub fn rotation_handle_position(frame: &BoxGeometry, rotation: f64, offset: f64) -> Point {
    let center = frame.center();
    let radius = frame.height / 2.0 + offset;
    let angle = (rotation - 90.0).to_radians();
    Point::new(
        center.x + radius * angle.cos(),
        center.y + radius * angle.sin(),
    )
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum AxisEffect {
    /// Moves the origin and shrinks the size by the same amount.
    Leading,
    Fixed,
    /// Grows the size, origin stays.
    Trailing,
}

impl AxisEffect {
    fn of(cell: usize) -> Self {
        match cell {
            0 => AxisEffect::Leading,
            2 => AxisEffect::Trailing,
            _ => AxisEffect::Fixed,
        }
    }

    fn apply(self, origin: f64, size: f64, delta: f64) -> (f64, f64) {
        match self {
            AxisEffect::Leading => (origin + delta, size - delta),
            AxisEffect::Fixed => (origin, size),
            AxisEffect::Trailing => (origin, size + delta),
        }
    }
}

/// Normalizes a possibly negative size. Returns `true` when it flipped.
fn unflip(origin: &mut f64, size: &mut f64) -> bool {
    if *size < 0.0 {
        *origin += *size;
        *size = -*size;
        true
    } else {
        false
    }
}

/// Floors `size` at `min`, keeping the edge opposite the dragged one in place.
fn floor_axis(origin: f64, size: f64, min: f64, leading: bool) -> (f64, f64) {
    if size >= min {
        (origin, size)
    } else if leading {
        (origin + size - min, min)
    } else {
        (origin, min)
    }
}

/// Translates `frame` so that `anchor` (given in unrotated coordinates) lands on
/// the same canvas point it had when rotated about `reference_center`.
fn pin_anchor(
    mut frame: BoxGeometry,
    anchor: Point,
    reference_center: Point,
    rotation: f64,
) -> BoxGeometry {
    if rotation == 0.0 {
        return frame;
    }
    let before = rotate_point(anchor, reference_center, rotation);
    let after = rotate_point(anchor, frame.center(), rotation);
    frame.x += before.x - after.x;
    frame.y += before.y - after.y;
    frame
}

/// An in-progress drag of a box resize handle.
///
/// Keeps the raw geometry produced by the pointer so that a drag which passes
/// the opposite edge can keep going; [`ResizeGesture::display_frame`] applies
/// the gesture floor on top of it.
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeGesture {
    handle: usize,
    frame: BoxGeometry,
    rotation: f64,
    last_pointer: Point,
    min_size: f64,
}

impl ResizeGesture {
    pub fn begin(
        handle: usize,
        frame: BoxGeometry,
        rotation: f64,
        pointer: Point,
        min_size: f64,
    ) -> Self {
        Self {
            handle,
            frame,
            rotation,
            last_pointer: pointer,
            min_size,
        }
    }

    /// Active handle index, after any remapping.
    pub fn handle(&self) -> usize {
        self.handle
    }

    pub fn raw_frame(&self) -> BoxGeometry {
        self.frame
    }

    /// Moves the active handle to follow the pointer and returns the displayed frame.
    pub fn drag_to(&mut self, pointer: Point) -> BoxGeometry {
        let dx = pointer.x - self.last_pointer.x;
        let dy = pointer.y - self.last_pointer.y;
        self.last_pointer = pointer;
        self.apply_delta(dx, dy)
    }

    /// Applies a canvas-space pointer delta to the active handle.
    pub fn apply_delta(&mut self, dx: f64, dy: f64) -> BoxGeometry {
        let Some((column, row)) = handle_cell(self.handle) else {
            return self.display_frame();
        };

        // Pointer movement expressed in the shape's own axes.
        let local = rotate_point(Point::new(dx, dy), Point::default(), -self.rotation);

        let old = self.frame;
        let anchor = grid_point(&old, 2 - column, 2 - row);

        let (mut x, mut width) = AxisEffect::of(column).apply(old.x, old.width, local.x);
        let (mut y, mut height) = AxisEffect::of(row).apply(old.y, old.height, local.y);
        let width_flipped = unflip(&mut x, &mut width);
        let height_flipped = unflip(&mut y, &mut height);

        if width_flipped || height_flipped {
            let remapped = remap_handle(self.handle, width_flipped, height_flipped);
            tracing::debug!(
                "Resize handle {} crossed the opposite edge, now tracking handle {}",
                self.handle,
                remapped
            );
            self.handle = remapped;
        }

        self.frame = pin_anchor(
            BoxGeometry::new(x, y, width, height),
            anchor,
            old.center(),
            self.rotation,
        );
        self.display_frame()
    }

    /// Raw frame floored at the gesture minimum on both axes, anchored on the
    /// side opposite the active handle.
    pub fn display_frame(&self) -> BoxGeometry {
        let (column, row) = handle_cell(self.handle).unwrap_or((2, 2));
        let raw = self.frame;
        let (x, width) = floor_axis(raw.x, raw.width, self.min_size, column == 0);
        let (y, height) = floor_axis(raw.y, raw.height, self.min_size, row == 0);
        let anchor = grid_point(&raw, 2 - column, 2 - row);
        pin_anchor(
            BoxGeometry::new(x, y, width, height),
            anchor,
            raw.center(),
            self.rotation,
        )
    }
}

/// Outcome of snapping a dragged line endpoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EndpointSnap {
    pub point: Point,
    /// Where to show the snap indicator; only set for an angle snap.
    pub indicator: Option<Point>,
}

/// Snaps a dragged endpoint relative to the fixed one.
///
/// Within the angle threshold of a multiple of 45° the point is projected onto
/// that ray at the same distance. Otherwise a coordinate within the axis
/// threshold of the fixed point's is aligned to it.
pub fn snap_line_endpoint(fixed: Point, candidate: Point, settings: &SnapSettings) -> EndpointSnap {
    let unsnapped = EndpointSnap {
        point: candidate,
        indicator: None,
    };
    if !settings.enabled {
        return unsnapped;
    }

    let dx = candidate.x - fixed.x;
    let dy = candidate.y - fixed.y;
    let distance = dx.hypot(dy);
    if distance <= f64::EPSILON {
        return unsnapped;
    }

    let angle = dy.atan2(dx).to_degrees();
    let canonical = (angle / 45.0).round() * 45.0;
    if (angle - canonical).abs() <= settings.angle_threshold_deg {
        let rad = canonical.to_radians();
        let point = Point::new(fixed.x + distance * rad.cos(), fixed.y + distance * rad.sin());
        return EndpointSnap {
            point,
            indicator: Some(point),
        };
    }

    let mut point = candidate;
    if dy.abs() <= settings.axis_threshold {
        point.y = fixed.y;
    }
    if dx.abs() <= settings.axis_threshold {
        point.x = fixed.x;
    }
    EndpointSnap {
        point,
        indicator: None,
    }
}

/// An in-progress drag of the rotation handle.
///
/// Each step adds the change in pointer angle since the previous step, so the
/// result never jumps when the raw `atan2` angle wraps at ±180°.
#[derive(Debug, Clone, PartialEq)]
pub struct RotationGesture {
    center: Point,
    last_angle: f64,
    rotation: f64,
}

impl RotationGesture {
    pub fn begin(center: Point, pointer: Point, rotation: f64) -> Self {
        Self {
            center,
            last_angle: center.angle_to(&pointer),
            rotation: normalize_angle(rotation),
        }
    }

    pub fn drag_to(&mut self, pointer: Point) -> f64 {
        let angle = self.center.angle_to(&pointer);
        let delta = angle - self.last_angle;
        self.last_angle = angle;
        self.rotation = normalize_angle(self.rotation + delta);
        self.rotation
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }
}
