//! Error types for survey ingestion.

use std::path::PathBuf;

use survey_model::ModelError;
use thiserror::Error;

/// Errors that abort reading a dictionary or building a dataset.
#[derive(Debug, Error)]
pub enum IngestError {
    /// A dictionary line does not follow the field grammar.
    #[error("dictionary line {line}: {message}")]
    Schema { line: usize, message: String },

    /// The field list cannot describe a dataset.
    #[error("invalid field layout: {message}")]
    Layout { message: String },

    /// Decoded columns could not form a dataset.
    #[error(transparent)]
    Model(#[from] ModelError),

    /// A data line could not be decoded.
    #[error("data line {line}: {source}")]
    Decode {
        line: usize,
        #[source]
        source: DecodeError,
    },

    /// A file could not be opened, read or decompressed.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl IngestError {
    pub(crate) fn schema(line: usize, message: impl Into<String>) -> Self {
        Self::Schema {
            line,
            message: message.into(),
        }
    }

    pub(crate) fn layout(message: impl Into<String>) -> Self {
        Self::Layout {
            message: message.into(),
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Errors decoding a single fixed-width record.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The line ends before the last field does.
    #[error("line has {actual} bytes, layout needs {required}")]
    LineTooShort { required: usize, actual: usize },

    /// An integer field holds something else.
    #[error("field {field}: invalid integer {text:?}")]
    InvalidInteger { field: String, text: String },

    /// A float field holds something else.
    #[error("field {field}: invalid float {text:?}")]
    InvalidFloat { field: String, text: String },

    /// The line is not valid UTF-8.
    #[error("invalid UTF-8 after byte {valid_up_to}")]
    InvalidEncoding { valid_up_to: usize },

    /// The field boundaries split a multi-byte character.
    #[error("field {field}: byte range does not fall on character boundaries")]
    InvalidSlice { field: String },
}

/// Result type alias for ingestion.
pub type Result<T> = std::result::Result<T, IngestError>;
