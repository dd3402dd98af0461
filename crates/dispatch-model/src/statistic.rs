//! Statistic identifiers and aggregate values.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Aggregate statistic that can be computed over a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Statistic {
    /// Most frequent value(s); ties are all reported in ascending order.
    Mode,
    /// Arithmetic mean of the non-null values.
    Mean,
}

impl Statistic {
    pub const ALL: [Statistic; 2] = [Statistic::Mode, Statistic::Mean];

    pub fn as_str(self) -> &'static str {
        match self {
            Statistic::Mode => "mode",
            Statistic::Mean => "mean",
        }
    }
}

impl fmt::Display for Statistic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A `(statistic, column)` pair to evaluate against a dataset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StatQuery {
    pub statistic: Statistic,
    pub column: String,
}

impl StatQuery {
    pub fn new(statistic: Statistic, column: impl Into<String>) -> Self {
        Self {
            statistic,
            column: column.into(),
        }
    }

    pub fn mode(column: impl Into<String>) -> Self {
        Self::new(Statistic::Mode, column)
    }

    pub fn mean(column: impl Into<String>) -> Self {
        Self::new(Statistic::Mean, column)
    }
}

/// A single aggregate result value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StatValue {
    Int(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for StatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatValue::Int(value) => write!(f, "{value}"),
            StatValue::Float(value) => write!(f, "{value}"),
            StatValue::Text(value) => f.write_str(value),
        }
    }
}

impl From<i64> for StatValue {
    fn from(value: i64) -> Self {
        StatValue::Int(value)
    }
}

impl From<f64> for StatValue {
    fn from(value: f64) -> Self {
        StatValue::Float(value)
    }
}

impl From<&str> for StatValue {
    fn from(value: &str) -> Self {
        StatValue::Text(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_values() {
        assert_eq!(StatValue::Int(42).to_string(), "42");
        assert_eq!(StatValue::Float(2.5).to_string(), "2.5");
        assert_eq!(StatValue::from("ENERO").to_string(), "ENERO");
    }

    #[test]
    fn statistic_serializes_lowercase() {
        let json = serde_json::to_string(&Statistic::Mean).unwrap();
        assert_eq!(json, "\"mean\"");
    }
}
