use survey_model::ModelError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransformError {
    #[error("transform {target}: unknown source column {column}")]
    UnknownColumn { target: String, column: String },

    #[error("transform {target}: no source columns")]
    NoSources { target: String },

    #[error("transform {target}: expected {expected} source column(s), got {actual}")]
    ArityMismatch {
        target: String,
        expected: usize,
        actual: usize,
    },

    #[error("transform {target}: divisor must be finite and non-zero")]
    InvalidDivisor { target: String },

    #[error("column {column} row {row}: numeric operation on a text value")]
    NonNumeric { column: String, row: usize },

    #[error("transform {target}: combination failed at row {row}")]
    CombineFailed { target: String, row: usize },

    #[error(transparent)]
    Model(#[from] ModelError),
}

pub type Result<T> = std::result::Result<T, TransformError>;
