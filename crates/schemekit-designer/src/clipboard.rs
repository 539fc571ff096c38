//! Single-slot shape clipboard built on the record codec.

use schemekit_core::constants::PASTE_OFFSET;

use crate::model::{SchemeShape, Shape};
use crate::serialization::{decode_shape, encode_shape};

/// Holds at most one encoded shape. Owned by the editor for the lifetime of
/// the open scheme.
#[derive(Debug, Clone, PartialEq)]
pub struct Clipboard {
    slot: Option<String>,
    paste_offset: f64,
}

impl Default for Clipboard {
    fn default() -> Self {
        Self::with_offset(PASTE_OFFSET)
    }
}

impl Clipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_offset(paste_offset: f64) -> Self {
        Self {
            slot: None,
            paste_offset,
        }
    }

    /// Replaces the slot content with `shape`.
    pub fn copy(&mut self, shape: &Shape) {
        self.slot = Some(encode_shape(shape));
    }

    pub fn has_data(&self) -> bool {
        self.slot.as_deref().is_some_and(|s| !s.is_empty())
    }

    /// Encoded content of the slot.
    pub fn contents(&self) -> Option<&str> {
        self.slot.as_deref()
    }

    /// Decodes a fresh shape from the slot, moved by the paste offset on both axes.
    pub fn paste(&self) -> Option<Shape> {
        let record = self.slot.as_deref()?;
        match decode_shape(record) {
            Ok(mut shape) => {
                shape.translate(self.paste_offset, self.paste_offset);
                Some(shape)
            }
            Err(e) => {
                tracing::warn!("Clipboard content could not be pasted: {}", e);
                None
            }
        }
    }

    pub fn clear(&mut self) {
        self.slot = None;
    }
}
