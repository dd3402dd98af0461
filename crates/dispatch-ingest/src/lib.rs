//! Activation data ingestion.
//!
//! Loads a delimited activations export into a [`Dataset`] backed by a Polars
//! DataFrame. Every field is read as text; normalization into numeric columns
//! happens in `dispatch-transform`.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use dispatch_ingest::load;
//! use dispatch_model::PipelineOptions;
//!
//! let dataset = load(Path::new("activaciones_samur_2022.csv"), &PipelineOptions::default())?;
//! println!("{} rows", dataset.height());
//! ```

mod csv;
mod error;
mod frame;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use csv::{CsvHeaders, decode_source, load, load_from_bytes, read_headers};

// === Dataset ===
pub use frame::Dataset;
