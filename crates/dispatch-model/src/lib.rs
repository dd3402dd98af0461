//! Shared vocabulary for the dispatch activations workspace.
//!
//! Every stage of the pipeline (ingest, transform, stats, core) speaks in
//! terms of the types defined here so that no crate depends on another's
//! internals.

pub mod columns;
pub mod options;
pub mod report;
pub mod statistic;

pub use columns::DispatchColumns;
pub use options::{PipelineOptions, SourceEncoding};
pub use report::{MissingCount, Report, ReportEntry, StatOutcome};
pub use statistic::{StatQuery, StatValue, Statistic};
