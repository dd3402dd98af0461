//! CLI library components for the dispatch activations normalizer.

pub mod logging;
pub mod summary;
