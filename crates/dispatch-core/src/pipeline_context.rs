//! Pipeline context for a single run.
//!
//! Bundles the load options with the statistics to report so a run can be
//! configured once and executed against any number of sources.

use std::path::Path;

use dispatch_ingest::Dataset;
use dispatch_model::{MissingCount, PipelineOptions, Report, StatQuery};
use dispatch_stats::default_queries;

use crate::error::Result;
use crate::pipeline;

#[derive(Debug, Clone)]
pub struct PipelineContext {
    /// Delimiter, encoding and column names.
    pub options: PipelineOptions,
    /// Statistics to evaluate after normalization, in report order.
    pub queries: Vec<StatQuery>,
}

impl Default for PipelineContext {
    fn default() -> Self {
        Self::new()
    }
}

impl PipelineContext {
    /// Default options and the default mode/mean queries.
    pub fn new() -> Self {
        let options = PipelineOptions::default();
        let queries = default_queries(&options.columns);
        Self { options, queries }
    }

    /// Sets the options and rebuilds the default queries for their columns.
    #[must_use]
    pub fn with_options(mut self, options: PipelineOptions) -> Self {
        self.queries = default_queries(&options.columns);
        self.options = options;
        self
    }

    /// Replaces the statistics to evaluate.
    #[must_use]
    pub fn with_queries(mut self, queries: Vec<StatQuery>) -> Self {
        self.queries = queries;
        self
    }

    /// Loads `source` and runs the full pipeline over it.
    pub fn run(&self, source: &Path) -> Result<Report> {
        let dataset = tracing::info_span!("ingest", source = %source.display())
            .in_scope(|| dispatch_ingest::load(source, &self.options))?;
        self.run_dataset(dataset)
    }

    /// Runs the pipeline over an already loaded dataset.
    pub fn run_dataset(&self, mut dataset: Dataset) -> Result<Report> {
        let rows_loaded = dataset.height();
        let missing_values = dispatch_transform::missing_counts(&dataset)
            .into_iter()
            .map(|(column, missing)| MissingCount { column, missing })
            .collect();
        let summary = tracing::info_span!("normalize", rows = rows_loaded)
            .in_scope(|| pipeline::normalize(&mut dataset, &self.options.columns))?;
        let entries = tracing::info_span!("aggregate", queries = self.queries.len())
            .in_scope(|| pipeline::summarize(&dataset, &self.queries));

        Ok(Report {
            rows_loaded,
            rows_retained: rows_loaded - summary.rows_dropped,
            unmapped_months: summary.unmapped_months,
            missing_values,
            entries,
        })
    }
}
