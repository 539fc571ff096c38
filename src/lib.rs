//! # SchemeKit
//!
//! Interactive scheme editor core for the device inventory manager. A scheme is
//! a free-form diagram of rectangles, ellipses, lines, rhombi and text labels
//! drawn on a canvas and persisted as a flat list of records.
//!
//! ## Architecture
//!
//! SchemeKit is organized as a workspace with multiple crates:
//!
//! 1. **schemekit-core** - Shared error type and engine constants
//! 2. **schemekit-settings** - Editor configuration (handles, snapping, history, clipboard, text)
//! 3. **schemekit-designer** - Shape model, handles, selection, drag controller, undo/redo, record codec, clipboard
//! 4. **schemekit** - This crate: logging setup and the `schemekit` command line tool
//!
//! ## Features
//!
//! - **Shapes**: rectangle, ellipse, line, rhombus and text with rotation and per-shape colours
//! - **Direct manipulation**: eight resize handles with flip remapping, rotation handle, line endpoint snapping
//! - **Undo/Redo**: every edit is one reversible command
//! - **Persistence**: lenient record codec that skips unreadable records and reports them

pub mod cli;

pub use schemekit_core::{Error, Result};
pub use schemekit_designer as designer;
pub use schemekit_settings::EditorConfig;

pub use schemekit_designer::{
    Canvas, Clipboard, Color, DesignerCommand, DesignerState, FontDescriptor, LoadReport, Point,
    Shape, ShapeType, Tool, UndoRedoManager,
};

pub use cli::{run, CheckSummary, CliArgs};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Pretty formatted output on stderr, keeping stdout for command results
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
