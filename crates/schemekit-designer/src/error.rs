//! Errors of the record codec.

use thiserror::Error;

/// Why a persisted record could not be turned into a shape.
///
/// These never escape the batch loader; each one is logged and counted as a
/// skipped record.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CodecError {
    #[error("Empty record")]
    EmptyRecord,

    #[error("{tag} record has {found} fields, expected {expected}")]
    FieldCount {
        tag: String,
        expected: usize,
        found: usize,
    },

    #[error("Unknown shape type tag '{0}'")]
    UnknownType(String),

    #[error("Invalid number in field '{field}': '{value}'")]
    InvalidNumber { field: &'static str, value: String },
}

impl CodecError {
    pub fn invalid_number(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidNumber {
            field,
            value: value.into(),
        }
    }
}

impl From<CodecError> for schemekit_core::Error {
    fn from(err: CodecError) -> Self {
        schemekit_core::Error::other(err.to_string())
    }
}

pub type CodecResult<T> = std::result::Result<T, CodecError>;
