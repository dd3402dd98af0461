//! Activation data transformation utilities.
//!
//! - **normalization**: missing-row filtering, month-name and time-of-day
//!   conversion
//! - **columns**: structural column operations

pub mod columns;
pub mod error;
pub mod normalization;

pub use columns::drop_column;
pub use error::{Result, TransformError};
pub use normalization::{
    MONTHS, drop_incomplete_rows, map_month_names, minutes_since_midnight, missing_counts,
    month_number, parse_time_of_day, time_to_minutes, time_value_to_minutes,
};
