//! Error types for aggregate statistics.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StatsError {
    /// Named column does not exist in the dataset.
    #[error("column '{column}' not found")]
    ColumnNotFound { column: String },

    /// Column has no non-null values left to aggregate.
    #[error("column '{column}' has no values")]
    EmptyColumn { column: String },

    /// Mean requested over a value that is not a number.
    #[error("column '{column}' is not numeric: '{value}'")]
    NonNumericColumn { column: String, value: String },

    /// Column type cannot be aggregated.
    #[error("column '{column}' has unsupported type {dtype}")]
    UnsupportedType { column: String, dtype: String },

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for StatsError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, StatsError>;
