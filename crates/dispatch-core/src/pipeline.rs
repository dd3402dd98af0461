//! The fixed normalization sequence and the aggregation step.

use std::path::Path;

use dispatch_ingest::Dataset;
use dispatch_model::{DispatchColumns, PipelineOptions, Report, ReportEntry, StatOutcome, StatQuery};
use dispatch_transform::{drop_column, drop_incomplete_rows, map_month_names, time_to_minutes};
use tracing::{info, warn};

use crate::error::Result;
use crate::pipeline_context::PipelineContext;

/// Counts produced by [`normalize`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizeSummary {
    pub rows_dropped: usize,
    pub unmapped_months: usize,
    pub times_converted: usize,
    pub year_dropped: bool,
}

/// Applies drop-missing, month mapping, time conversion and year removal, in
/// that order. Reapplying it to its own output changes nothing.
pub fn normalize(dataset: &mut Dataset, columns: &DispatchColumns) -> Result<NormalizeSummary> {
    let rows_dropped = drop_incomplete_rows(dataset)?;
    let unmapped_months = map_month_names(dataset, &columns.month)?;
    let mut times_converted = 0;
    for column in columns.time_columns() {
        times_converted += time_to_minutes(dataset, column)?;
    }
    let year_dropped = drop_column(dataset, &columns.year)?;

    let summary = NormalizeSummary {
        rows_dropped,
        unmapped_months,
        times_converted,
        year_dropped,
    };
    info!(
        rows = dataset.height(),
        dropped = rows_dropped,
        unmapped_months,
        times_converted,
        "normalized activations"
    );
    Ok(summary)
}

/// Evaluates every query. Failures are recorded per entry, not propagated.
pub fn summarize(dataset: &Dataset, queries: &[StatQuery]) -> Vec<ReportEntry> {
    queries
        .iter()
        .map(|query| {
            let outcome = match dispatch_stats::compute(dataset, query) {
                Ok(values) => StatOutcome::Values(values),
                Err(error) => {
                    warn!(
                        statistic = %query.statistic,
                        column = %query.column,
                        %error,
                        "statistic failed"
                    );
                    StatOutcome::Failed(error.to_string())
                }
            };
            ReportEntry {
                column: query.column.clone(),
                statistic: query.statistic,
                outcome,
            }
        })
        .collect()
}

/// Loads `source`, normalizes it, and reports mode and mean for the month and
/// time columns.
pub fn run(source: &Path, options: &PipelineOptions) -> Result<Report> {
    PipelineContext::new()
        .with_options(options.clone())
        .run(source)
}
