//! Missing-value filtering.

use dispatch_ingest::Dataset;
use polars::prelude::{AnyValue, BooleanChunked, NewChunkedArray};
use tracing::debug;

use crate::error::Result;

/// Returns true for nulls and for text that is blank after trimming.
pub fn is_missing(value: &AnyValue) -> bool {
    match value {
        AnyValue::Null => true,
        AnyValue::String(s) => s.trim().is_empty(),
        AnyValue::StringOwned(s) => s.trim().is_empty(),
        _ => false,
    }
}

/// Counts missing fields per column, in column order.
pub fn missing_counts(dataset: &Dataset) -> Vec<(String, usize)> {
    dataset
        .data()
        .get_columns()
        .iter()
        .map(|column| {
            let missing = (0..column.len())
                .filter(|idx| is_missing(&column.get(*idx).unwrap_or(AnyValue::Null)))
                .count();
            (column.name().to_string(), missing)
        })
        .collect()
}

/// Removes every row that has a missing value in any column.
///
/// This is a filter, never an imputation. Returns the number of rows removed.
pub fn drop_incomplete_rows(dataset: &mut Dataset) -> Result<usize> {
    let df = dataset.data_mut();
    let height = df.height();
    if height == 0 {
        return Ok(0);
    }

    let mut keep = vec![true; height];
    for column in df.get_columns() {
        for (idx, slot) in keep.iter_mut().enumerate() {
            if *slot && is_missing(&column.get(idx).unwrap_or(AnyValue::Null)) {
                *slot = false;
            }
        }
    }

    let dropped = keep.iter().filter(|kept| !**kept).count();
    if dropped > 0 {
        let mask = BooleanChunked::from_slice("complete".into(), &keep);
        *df = df.filter(&mask)?;
    }
    debug!(rows = height, dropped, "filtered incomplete rows");
    Ok(dropped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{Column, DataFrame};

    fn dataset(months: Vec<Option<&str>>, times: Vec<Option<&str>>) -> Dataset {
        Dataset::new(
            DataFrame::new(vec![
                Column::new("Mes".into(), months),
                Column::new("Hora Solicitud".into(), times),
            ])
            .unwrap(),
        )
    }

    #[test]
    fn drops_null_and_blank_fields() {
        let mut data = dataset(
            vec![Some("ENERO"), None, Some("MARZO"), Some("ABRIL")],
            vec![Some("08:00:00"), Some("09:00:00"), Some("   "), Some("10:00:00")],
        );

        let dropped = drop_incomplete_rows(&mut data).unwrap();

        assert_eq!(dropped, 2);
        assert_eq!(data.height(), 2);
        let months = data.data().column("Mes").unwrap().str().unwrap();
        assert_eq!(months.get(0), Some("ENERO"));
        assert_eq!(months.get(1), Some("ABRIL"));
    }

    #[test]
    fn complete_data_is_untouched() {
        let mut data = dataset(
            vec![Some("ENERO"), Some("MAYO")],
            vec![Some("08:00:00"), Some("09:00:00")],
        );
        assert_eq!(drop_incomplete_rows(&mut data).unwrap(), 0);
        assert_eq!(drop_incomplete_rows(&mut data).unwrap(), 0);
        assert_eq!(data.height(), 2);
    }

    #[test]
    fn numeric_nulls_are_missing() {
        let mut data = Dataset::new(
            DataFrame::new(vec![Column::new("Mes".into(), vec![Some(1i64), None, Some(3)])])
                .unwrap(),
        );
        assert_eq!(drop_incomplete_rows(&mut data).unwrap(), 1);
        assert_eq!(data.height(), 2);
    }

    #[test]
    fn counts_missing_per_column() {
        let data = dataset(
            vec![Some("ENERO"), None, Some(" "), Some("ABRIL")],
            vec![Some("08:00:00"), None, Some("09:00:00"), Some("10:00:00")],
        );

        let counts = missing_counts(&data);

        assert_eq!(
            counts,
            vec![("Mes".to_string(), 2), ("Hora Solicitud".to_string(), 1)]
        );
        assert_eq!(data.height(), 4);
    }

    #[test]
    fn is_missing_values() {
        assert!(is_missing(&AnyValue::Null));
        assert!(is_missing(&AnyValue::String("")));
        assert!(!is_missing(&AnyValue::String("ENERO")));
        assert!(!is_missing(&AnyValue::Int64(0)));
    }
}
