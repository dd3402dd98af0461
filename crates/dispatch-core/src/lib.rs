//! Activation normalization pipeline.
//!
//! Ties the stages together: [`dispatch_ingest::load`], the normalizations in
//! [`dispatch_transform`], and the aggregates in [`dispatch_stats`]. The
//! entry point is [`run`], which holds no process-wide state.

pub mod error;
pub mod pipeline;
pub mod pipeline_context;

pub use error::{PipelineError, Result};
pub use pipeline::{NormalizeSummary, normalize, run, summarize};
pub use pipeline_context::PipelineContext;
