//! Spanish month-name lookup.

use dispatch_ingest::Dataset;
use polars::prelude::Column;
use tracing::{debug, warn};

use crate::error::{Result, TransformError};

/// Month names as they appear in the activations export, January first.
pub const MONTHS: [&str; 12] = [
    "ENERO",
    "FEBRERO",
    "MARZO",
    "ABRIL",
    "MAYO",
    "JUNIO",
    "JULIO",
    "AGOSTO",
    "SEPTIEMBRE",
    "OCTUBRE",
    "NOVIEMBRE",
    "DICIEMBRE",
];

/// Maps an uppercase Spanish month name to 1..=12.
///
/// Surrounding whitespace is ignored; matching is otherwise exact.
pub fn month_number(name: &str) -> Option<i64> {
    let name = name.trim();
    MONTHS
        .iter()
        .position(|month| *month == name)
        .map(|idx| idx as i64 + 1)
}

/// Replaces a month-name column with its month numbers.
///
/// Names outside the lookup become null. A column that is already integer
/// typed is left as is. Returns the number of values that could not be mapped.
pub fn map_month_names(dataset: &mut Dataset, column: &str) -> Result<usize> {
    let df = dataset.data_mut();
    let source = df
        .column(column)
        .map_err(|_| TransformError::ColumnNotFound {
            column: column.to_string(),
        })?;

    if source.dtype().is_integer() {
        debug!(column, "month column already numeric");
        return Ok(0);
    }

    let names = source.str().map_err(|_| TransformError::UnsupportedType {
        column: column.to_string(),
        dtype: source.dtype().to_string(),
    })?;

    let mut numbers = Vec::with_capacity(names.len());
    let mut unmapped = 0usize;
    for name in names.into_iter() {
        let number = name.and_then(month_number);
        if name.is_some() && number.is_none() {
            unmapped += 1;
        }
        numbers.push(number);
    }

    df.with_column(Column::new(column.into(), numbers))?;

    if unmapped > 0 {
        warn!(column, unmapped, "month names outside the lookup were set to null");
    }
    Ok(unmapped)
}
