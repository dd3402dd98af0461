use dispatch_ingest::IngestError;
use dispatch_transform::TransformError;
use thiserror::Error;

/// Terminal failures of a pipeline run.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Ingest(#[from] IngestError),
    #[error(transparent)]
    Transform(#[from] TransformError),
}

pub type Result<T> = std::result::Result<T, PipelineError>;
