//! Scheme save/load for designer state.

use std::path::Path;

use schemekit_core::Result;

use super::DesignerState;
use crate::canvas::DrawingObject;
use crate::serialization::{decode_all, encode_all, join_records, split_records, LoadReport};

impl DesignerState {
    /// Encodes every shape in draw order.
    pub fn serialize_all(&self) -> Vec<String> {
        encode_all(self.canvas.shapes().map(|obj| &obj.shape))
    }

    /// Adds the shapes of `records` on top of the canvas, skipping records that
    /// cannot be decoded. Loading is not an edit and is not recorded in the history.
    pub fn load_all<S: AsRef<str>>(&mut self, records: &[S]) -> LoadReport {
        let (shapes, report) = decode_all(records);
        for shape in shapes {
            let id = self.canvas.generate_id();
            self.canvas.restore_shape(DrawingObject::new(id, shape), None);
        }
        if report.is_clean() {
            tracing::info!("Loaded {} shapes", report.loaded);
        } else {
            tracing::warn!(
                "Loaded {} of {} records, {} skipped",
                report.loaded,
                report.attempted(),
                report.failed
            );
        }
        report
    }

    /// Replaces the open scheme: clears shapes, selection, history and clipboard,
    /// then loads `records`.
    pub fn switch_scheme<S: AsRef<str>>(&mut self, records: &[S]) -> LoadReport {
        self.controller.cancel_gesture(&mut self.canvas);
        self.canvas.clear();
        self.history.clear();
        self.clipboard.clear();
        tracing::info!("Switching scheme");
        let report = self.load_all(records);
        self.is_modified = false;
        report
    }

    /// The whole scheme as one persisted blob.
    pub fn to_blob(&self) -> String {
        join_records(&self.serialize_all())
    }

    /// Replaces the open scheme with the one stored in `blob`.
    pub fn load_blob(&mut self, blob: &str) -> LoadReport {
        self.switch_scheme(&split_records(blob))
    }

    pub fn save_to_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path.as_ref(), self.to_blob())?;
        self.is_modified = false;
        tracing::info!("Saved scheme to {}", path.as_ref().display());
        Ok(())
    }

    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> Result<LoadReport> {
        let blob = std::fs::read_to_string(path.as_ref())?;
        Ok(self.load_blob(&blob))
    }
}
