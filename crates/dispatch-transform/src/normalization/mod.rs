//! Normalization of raw activation columns into canonical numeric form.
//!
//! - **missing**: hard filter of rows with any missing field
//! - **month**: Spanish month names to 1..=12
//! - **time**: `HH:MM:SS` to minutes since midnight

pub mod missing;
pub mod month;
pub mod time;

pub use missing::{drop_incomplete_rows, is_missing, missing_counts};
pub use month::{MONTHS, map_month_names, month_number};
pub use time::{minutes_since_midnight, parse_time_of_day, time_to_minutes, time_value_to_minutes};
