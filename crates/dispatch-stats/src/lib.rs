//! Per-column aggregate statistics.
//!
//! Statistics are selected by a `(Statistic, column)` pair; see [`compute`].
//! Nulls never take part in an aggregate.

mod aggregate;
mod error;
mod values;

pub use aggregate::{StatFn, compute, computation, default_queries, mean, mode};
pub use error::{Result, StatsError};
pub use values::{ColumnValues, column_values};
