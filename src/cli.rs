//! Command line interface for SchemeKit
//!
//! `schemekit` opens a persisted scheme with the editor engine, reports how many
//! records were loaded or skipped, and can write the scheme back in canonical
//! form.

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use schemekit_designer::{DesignerState, LoadReport, SchemeShape};
use schemekit_settings::EditorConfig;

/// SchemeKit CLI arguments
///
/// Examples:
///   schemekit office.scheme                        # Check a scheme
///   schemekit office.scheme --write clean.scheme   # Rewrite with canonical formatting
///   schemekit office.scheme --config editor.toml   # Use a specific editor config
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "schemekit",
    version,
    about = "Check and normalize scheme diagrams",
    long_about = "Loads a scheme diagram with the SchemeKit editing engine, reports records that could not be read, and optionally writes the scheme back with canonical number formatting."
)]
pub struct CliArgs {
    /// Scheme file to open
    #[clap(help = "Scheme file (one record per line)")]
    pub scheme: PathBuf,

    /// Editor configuration file (TOML or JSON)
    #[clap(
        long = "config",
        short = 'c',
        help = "Editor config file",
        long_help = "Editor configuration file in TOML or JSON format. Defaults to editor.toml in the platform config directory; missing or invalid files fall back to built-in defaults."
    )]
    pub config: Option<PathBuf>,

    /// Where to write the normalized scheme
    #[clap(
        long = "write",
        short = 'w',
        help = "Write the loaded scheme to this path",
        long_help = "Write every record that could be loaded to this path, re-encoded with canonical formatting. Records that failed to load are dropped."
    )]
    pub write: Option<PathBuf>,
}

impl CliArgs {
    /// Editor configuration for this run.
    pub fn load_config(&self) -> EditorConfig {
        match &self.config {
            Some(path) => EditorConfig::load_or_default(path),
            None => EditorConfig::default_config_path()
                .map(|path| EditorConfig::load_or_default(&path))
                .unwrap_or_default(),
        }
    }
}

/// Result of checking one scheme.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckSummary {
    pub report: LoadReport,
    /// Loaded shapes per record type tag.
    pub shapes_by_type: BTreeMap<&'static str, usize>,
    pub written: Option<PathBuf>,
}

impl fmt::Display for CheckSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} of {} records loaded, {} skipped",
            self.report.loaded,
            self.report.attempted(),
            self.report.failed
        )?;
        for (tag, count) in &self.shapes_by_type {
            writeln!(f, "  {:<10} {}", tag, count)?;
        }
        if let Some(path) = &self.written {
            writeln!(f, "Wrote {}", path.display())?;
        }
        Ok(())
    }
}

/// Loads the scheme named in `args` and optionally writes it back.
pub fn run(args: &CliArgs) -> anyhow::Result<CheckSummary> {
    let mut state = DesignerState::with_config(args.load_config());
    let report = state
        .load_from_file(&args.scheme)
        .with_context(|| format!("Failed to read scheme {}", args.scheme.display()))?;

    let mut shapes_by_type = BTreeMap::new();
    for obj in state.canvas.shapes() {
        *shapes_by_type.entry(obj.shape.shape_type().tag()).or_insert(0) += 1;
    }

    if let Some(path) = &args.write {
        state
            .save_to_file(path)
            .with_context(|| format!("Failed to write scheme {}", path.display()))?;
    }

    Ok(CheckSummary {
        report,
        shapes_by_type,
        written: args.write.clone(),
    })
}
