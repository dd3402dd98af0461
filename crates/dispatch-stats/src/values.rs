//! Extraction of the non-null values of a column.

use dispatch_ingest::Dataset;
use polars::prelude::DataType;

use crate::error::{Result, StatsError};

/// Non-null values of one column, in row order.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnValues {
    Int(Vec<i64>),
    Float(Vec<f64>),
    Text(Vec<String>),
}

impl ColumnValues {
    pub fn len(&self) -> usize {
        match self {
            ColumnValues::Int(values) => values.len(),
            ColumnValues::Float(values) => values.len(),
            ColumnValues::Text(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Reads the non-null values of a column.
///
/// Integer columns of any width come back as `Int`, float columns as `Float`
/// and text columns as `Text`.
pub fn column_values(dataset: &Dataset, column: &str) -> Result<ColumnValues> {
    let series = dataset
        .data()
        .column(column)
        .map_err(|_| StatsError::ColumnNotFound {
            column: column.to_string(),
        })?;
    let dtype = series.dtype();

    if dtype.is_integer() {
        let cast = series.cast(&DataType::Int64)?;
        let values = cast.i64()?.into_iter().flatten().collect();
        Ok(ColumnValues::Int(values))
    } else if dtype.is_float() {
        let cast = series.cast(&DataType::Float64)?;
        let values = cast.f64()?.into_iter().flatten().collect();
        Ok(ColumnValues::Float(values))
    } else if dtype == &DataType::String {
        let values = series
            .str()?
            .into_iter()
            .flatten()
            .map(ToString::to_string)
            .collect();
        Ok(ColumnValues::Text(values))
    } else {
        Err(StatsError::UnsupportedType {
            column: column.to_string(),
            dtype: dtype.to_string(),
        })
    }
}
