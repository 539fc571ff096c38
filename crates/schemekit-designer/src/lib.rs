//! # SchemeKit Designer
//!
//! Interactive shape-editing engine for scheme diagrams: users draw and
//! manipulate rectangles, ellipses, lines, rhombi and text labels on a
//! canvas, with undo/redo, copy/paste and persistence to a flat record format.
//!
//! ## Core Components
//!
//! - **Model**: shape variants with explicitly stored geometry and per-variant resize rules
//! - **Handles**: resize-handle layout and index remapping, line endpoint snapping, rotation
//! - **Canvas**: shapes in draw order, the single selection and its decorations
//! - **Controller**: pointer gestures against the active tool
//! - **Commands/History**: reversible edits on a two-stack undo/redo history
//! - **Serialization**: lenient record codec
//! - **Clipboard**: single-slot copy/paste built on the codec
//! - **Renderer**: `lyon` paths for shapes, decorations and the live preview
//!
//! ## Architecture
//!
//! ```text
//! pointer events + tool
//!   └── DragController ── mutates shapes live (Handles for resize/rotate/snap)
//!         └── on release: DesignerCommand ── UndoRedoManager
//! Canvas
//!   ├── ShapeStore (draw order)
//!   └── SelectionManager (selection + decorations)
//! Serialization ── persisted records, Clipboard
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use schemekit_designer::{DesignerState, Tool};
//!
//! let mut state = DesignerState::new();
//! state.set_tool(Tool::Rectangle);
//! state.pointer_pressed(10.0, 10.0);
//! state.pointer_dragged(60.0, 40.0);
//! state.pointer_released(60.0, 40.0);
//!
//! assert_eq!(state.shape_count(), 1);
//! let records = state.serialize_all();
//! assert!(records[0].starts_with("RECTANGLE|10.00|10.00|50.00|30.00"));
//!
//! state.undo();
//! assert_eq!(state.shape_count(), 0);
//! ```

pub mod canvas;
pub mod clipboard;
pub mod commands;
pub mod controller;
pub mod designer_state;
pub mod error;
pub mod handles;
pub mod history;
pub mod model;
pub mod renderer;
pub mod selection_manager;
pub mod serialization;
pub mod shape_store;

pub use canvas::{Canvas, DrawingObject, Tool};
pub use clipboard::Clipboard;
pub use commands::DesignerCommand;
pub use controller::DragController;
pub use designer_state::DesignerState;
pub use error::{CodecError, CodecResult};
pub use handles::{EndpointSnap, HandleKind, ResizeGesture, RotationGesture};
pub use history::UndoRedoManager;
pub use model::{
    normalize_angle, BoxGeometry, Color, FontDescriptor, PaintStyle, Point, SchemeEllipse,
    SchemeLine, SchemeRectangle, SchemeRhombus, SchemeShape, SchemeText, Shape, ShapeFactory,
    ShapeStyle, ShapeType,
};
pub use selection_manager::{Decorations, Handle, SelectionManager};
pub use serialization::{decode_all, decode_shape, encode_all, encode_shape, LoadReport};
