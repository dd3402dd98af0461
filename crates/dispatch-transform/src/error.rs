//! Error types for dataset transformations.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransformError {
    /// Named column does not exist in the dataset.
    #[error("column '{column}' not found")]
    ColumnNotFound { column: String },

    /// Column has a type the transformation cannot read.
    #[error("column '{column}' has unsupported type {dtype}")]
    UnsupportedType { column: String, dtype: String },

    /// A time-of-day value is not `HH:MM:SS`.
    #[error("invalid time '{value}' in column '{column}' at row {row}: expected HH:MM:SS")]
    InvalidTime {
        column: String,
        row: usize,
        value: String,
    },

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for TransformError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TransformError>;
