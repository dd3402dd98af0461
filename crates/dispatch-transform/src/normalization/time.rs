//! Time-of-day conversion to minutes since midnight.

use chrono::{NaiveTime, Timelike};
use dispatch_ingest::Dataset;
use polars::prelude::Column;
use tracing::debug;

use crate::error::{Result, TransformError};

const TIME_FORMAT: &str = "%H:%M:%S";

/// Parses an `HH:MM:SS` time of day.
///
/// Seconds run 0..=59; chrono's leap-second form (`:60`) is rejected.
pub fn parse_time_of_day(value: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), TIME_FORMAT)
        .ok()
        .filter(|time| time.nanosecond() < 1_000_000_000)
}

/// Minutes since midnight, rounding the seconds fraction half to even.
///
/// `23:59:59` rounds up to 1440; the result is not clamped.
pub fn minutes_since_midnight(time: NaiveTime) -> i64 {
    let exact =
        f64::from(time.hour()) * 60.0 + f64::from(time.minute()) + f64::from(time.second()) / 60.0;
    exact.round_ties_even() as i64
}

/// Converts one textual `HH:MM:SS` value into minutes since midnight.
pub fn time_value_to_minutes(value: &str) -> Option<i64> {
    parse_time_of_day(value).map(minutes_since_midnight)
}

/// Replaces an `HH:MM:SS` column with integer minutes since midnight.
///
/// Nulls stay null. Any other value that does not parse fails the whole
/// conversion. A column that is already integer typed is left as is.
/// Returns the number of converted values.
pub fn time_to_minutes(dataset: &mut Dataset, column: &str) -> Result<usize> {
    let df = dataset.data_mut();
    let source = df
        .column(column)
        .map_err(|_| TransformError::ColumnNotFound {
            column: column.to_string(),
        })?;

    if source.dtype().is_integer() {
        debug!(column, "time column already in minutes");
        return Ok(0);
    }

    let values = source.str().map_err(|_| TransformError::UnsupportedType {
        column: column.to_string(),
        dtype: source.dtype().to_string(),
    })?;

    let mut minutes = Vec::with_capacity(values.len());
    for (row, value) in values.into_iter().enumerate() {
        let converted = match value {
            None => None,
            Some(text) => Some(time_value_to_minutes(text).ok_or_else(|| {
                TransformError::InvalidTime {
                    column: column.to_string(),
                    row,
                    value: text.to_string(),
                }
            })?),
        };
        minutes.push(converted);
    }

    let converted = minutes.iter().filter(|value| value.is_some()).count();
    df.with_column(Column::new(column.into(), minutes))?;
    debug!(column, converted, "converted times of day to minutes");
    Ok(converted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::DataFrame;

    #[test]
    fn boundaries() {
        assert_eq!(time_value_to_minutes("00:00:00"), Some(0));
        assert_eq!(time_value_to_minutes("23:59:59"), Some(1440));
        assert_eq!(time_value_to_minutes("12:00:00"), Some(720));
    }

    #[test]
    fn seconds_round_half_to_even() {
        assert_eq!(time_value_to_minutes("00:00:29"), Some(0));
        assert_eq!(time_value_to_minutes("00:00:30"), Some(0));
        assert_eq!(time_value_to_minutes("00:01:30"), Some(2));
        assert_eq!(time_value_to_minutes("00:00:31"), Some(1));
    }

    #[test]
    fn malformed_values() {
        assert_eq!(time_value_to_minutes("24:00:00"), None);
        assert_eq!(time_value_to_minutes("12:60:00"), None);
        assert_eq!(time_value_to_minutes("12:00"), None);
        assert_eq!(time_value_to_minutes("12:30:60"), None);
        assert_eq!(time_value_to_minutes("23:59:60"), None);
        assert_eq!(time_value_to_minutes("mediodía"), None);
        assert_eq!(time_value_to_minutes(""), None);
    }

    #[test]
    fn convert_column() {
        let df = DataFrame::new(vec![Column::new(
            "Hora Solicitud".into(),
            vec![Some("08:15:00"), None, Some("23:59:59")],
        )])
        .unwrap();
        let mut dataset = Dataset::new(df);

        assert_eq!(time_to_minutes(&mut dataset, "Hora Solicitud").unwrap(), 2);
        let minutes = dataset
            .data()
            .column("Hora Solicitud")
            .unwrap()
            .i64()
            .unwrap();
        assert_eq!(minutes.get(0), Some(495));
        assert_eq!(minutes.get(1), None);
        assert_eq!(minutes.get(2), Some(1440));

        // Second pass sees an integer column and changes nothing.
        assert_eq!(time_to_minutes(&mut dataset, "Hora Solicitud").unwrap(), 0);
    }

    #[test]
    fn convert_column_rejects_leap_second() {
        let df = DataFrame::new(vec![Column::new("Hora Solicitud".into(), vec!["12:30:60"])])
            .unwrap();
        let mut dataset = Dataset::new(df);

        match time_to_minutes(&mut dataset, "Hora Solicitud") {
            Err(TransformError::InvalidTime { row, value, .. }) => {
                assert_eq!(row, 0);
                assert_eq!(value, "12:30:60");
            }
            other => panic!("expected InvalidTime, got {other:?}"),
        }
    }

    #[test]
    fn convert_column_reports_bad_row() {
        let df = DataFrame::new(vec![Column::new(
            "Hora Intervención".into(),
            vec!["08:15:00", "8h15"],
        )])
        .unwrap();
        let mut dataset = Dataset::new(df);

        match time_to_minutes(&mut dataset, "Hora Intervención") {
            Err(TransformError::InvalidTime { row, value, .. }) => {
                assert_eq!(row, 1);
                assert_eq!(value, "8h15");
            }
            other => panic!("expected InvalidTime, got {other:?}"),
        }
    }
}
