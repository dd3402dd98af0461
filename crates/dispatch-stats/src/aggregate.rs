//! Mode and mean, and the table that maps a statistic to its computation.

use std::collections::BTreeMap;

use dispatch_ingest::Dataset;
use dispatch_model::{DispatchColumns, StatQuery, StatValue, Statistic};
use tracing::trace;

use crate::error::{Result, StatsError};
use crate::values::{ColumnValues, column_values};

/// A statistic evaluated over one named column.
pub type StatFn = fn(&Dataset, &str) -> Result<Vec<StatValue>>;

/// Returns the computation for a statistic.
pub fn computation(statistic: Statistic) -> StatFn {
    match statistic {
        Statistic::Mode => mode,
        Statistic::Mean => mean_values,
    }
}

fn mean_values(dataset: &Dataset, column: &str) -> Result<Vec<StatValue>> {
    mean(dataset, column).map(|value| vec![StatValue::Float(value)])
}

/// Evaluates a `(statistic, column)` query.
pub fn compute(dataset: &Dataset, query: &StatQuery) -> Result<Vec<StatValue>> {
    let result = computation(query.statistic)(dataset, &query.column);
    trace!(
        statistic = %query.statistic,
        column = %query.column,
        ok = result.is_ok(),
        "evaluated statistic"
    );
    result
}

/// Mode and mean for the month, request-time and intervention-time columns.
pub fn default_queries(columns: &DispatchColumns) -> Vec<StatQuery> {
    [
        &columns.request_time,
        &columns.month,
        &columns.intervention_time,
    ]
    .into_iter()
    .flat_map(|column| {
        Statistic::ALL
            .into_iter()
            .map(move |statistic| StatQuery::new(statistic, column.as_str()))
    })
    .collect()
}

/// Most frequent non-null value(s) of a column.
///
/// When several values share the highest count they are all returned in
/// ascending order.
pub fn mode(dataset: &Dataset, column: &str) -> Result<Vec<StatValue>> {
    let values = column_values(dataset, column)?;
    if values.is_empty() {
        return Err(StatsError::EmptyColumn {
            column: column.to_string(),
        });
    }

    let modes = match values {
        ColumnValues::Int(values) => most_frequent(values)
            .into_iter()
            .map(StatValue::Int)
            .collect(),
        ColumnValues::Text(values) => most_frequent(values)
            .into_iter()
            .map(StatValue::Text)
            .collect(),
        ColumnValues::Float(mut values) => {
            values.sort_by(f64::total_cmp);
            float_modes(&values)
                .into_iter()
                .map(StatValue::Float)
                .collect()
        }
    };
    Ok(modes)
}

/// Arithmetic mean of the non-null values of a column.
///
/// Text columns are accepted when every value parses as a number.
pub fn mean(dataset: &Dataset, column: &str) -> Result<f64> {
    let numbers: Vec<f64> = match column_values(dataset, column)? {
        ColumnValues::Int(values) => values.into_iter().map(|v| v as f64).collect(),
        ColumnValues::Float(values) => values,
        ColumnValues::Text(values) => values
            .iter()
            .map(|value| {
                value
                    .trim()
                    .parse::<f64>()
                    .map_err(|_| StatsError::NonNumericColumn {
                        column: column.to_string(),
                        value: value.clone(),
                    })
            })
            .collect::<Result<_>>()?,
    };

    if numbers.is_empty() {
        return Err(StatsError::EmptyColumn {
            column: column.to_string(),
        });
    }
    Ok(numbers.iter().sum::<f64>() / numbers.len() as f64)
}

/// Keys with the highest count, in ascending key order.
fn most_frequent<K: Ord>(items: Vec<K>) -> Vec<K> {
    let mut counts: BTreeMap<K, usize> = BTreeMap::new();
    for key in items {
        *counts.entry(key).or_default() += 1;
    }
    let Some(best) = counts.values().copied().max() else {
        return Vec::new();
    };
    counts
        .into_iter()
        .filter(|(_, count)| *count == best)
        .map(|(key, _)| key)
        .collect()
}

/// Modes of an already sorted float slice.
fn float_modes(sorted: &[f64]) -> Vec<f64> {
    let runs: Vec<(f64, usize)> = sorted
        .chunk_by(|a, b| a.total_cmp(b).is_eq())
        .map(|run| (run[0], run.len()))
        .collect();
    let best = runs.iter().map(|(_, len)| *len).max().unwrap_or(0);
    runs.into_iter()
        .filter(|(_, len)| *len == best)
        .map(|(value, _)| value)
        .collect()
}
