//! Error types for dataset construction.

use thiserror::Error;

/// Errors raised when a dataset would violate its shape invariants.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    /// Two columns share a name.
    #[error("duplicate column name: {name}")]
    DuplicateColumn { name: String },

    /// A column does not have the dataset's row count.
    #[error("column {name} has {actual} values, expected {expected}")]
    ColumnLengthMismatch {
        name: String,
        expected: usize,
        actual: usize,
    },

    /// A named column does not exist.
    #[error("unknown column: {name}")]
    UnknownColumn { name: String },
}

impl ModelError {
    /// Create an UnknownColumn error.
    pub fn unknown_column(name: impl Into<String>) -> Self {
        Self::UnknownColumn { name: name.into() }
    }
}

/// Result type alias for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;
