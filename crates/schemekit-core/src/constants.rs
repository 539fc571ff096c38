//! Engine-wide constants.
//!
//! These are the built-in values of the scheme editor. Tunable interaction
//! values are mirrored in the settings crate, which uses these as defaults.

/// Smallest width or height a box shape may store.
pub const MIN_STORED_SIZE: f64 = 1.0;

/// Smallest width or height shown while a resize gesture is in progress.
pub const MIN_GESTURE_SIZE: f64 = 20.0;

/// Side length of a square resize handle, in canvas units.
pub const HANDLE_SIZE: f64 = 8.0;

/// Extra slack around shapes and handles when hit-testing a pointer press.
pub const HIT_TOLERANCE: f64 = 3.0;

/// Distance of the rotation handle beyond the top edge of an unrotated shape.
pub const ROTATION_HANDLE_OFFSET: f64 = 30.0;

/// Line endpoints within this many degrees of a multiple of 45° snap onto it.
pub const SNAP_ANGLE_THRESHOLD_DEG: f64 = 10.0;

/// Line endpoints within this distance of an axis through the fixed point snap onto it.
pub const AXIS_SNAP_THRESHOLD: f64 = 15.0;

/// Offset applied on both axes to a pasted shape.
pub const PASTE_OFFSET: f64 = 20.0;

/// Maximum number of commands kept on the undo stack.
pub const MAX_UNDO_DEPTH: usize = 100;

/// Font family used when none is given or a persisted one cannot be read.
pub const DEFAULT_FONT_FAMILY: &str = "Arial";

/// Font size used when none is given or a persisted one cannot be read.
pub const DEFAULT_FONT_SIZE: f64 = 18.0;

/// Range accepted for an explicit font size.
pub const MIN_FONT_SIZE: f64 = 8.0;
pub const MAX_FONT_SIZE: f64 = 72.0;

/// Range of font sizes reachable by resizing a text shape.
pub const MIN_RESIZE_FONT_SIZE: f64 = 10.0;
pub const MAX_RESIZE_FONT_SIZE: f64 = 50.0;
