//! Run report: one entry per requested statistic.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::statistic::{StatValue, Statistic};

/// Result of evaluating one statistic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatOutcome {
    /// Computed value(s). Mode may hold several tied values; mean holds one.
    Values(Vec<StatValue>),
    /// The statistic could not be computed; the message says why.
    Failed(String),
}

impl StatOutcome {
    pub fn is_failed(&self) -> bool {
        matches!(self, StatOutcome::Failed(_))
    }
}

impl fmt::Display for StatOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatOutcome::Values(values) => {
                let rendered: Vec<String> = values.iter().map(ToString::to_string).collect();
                f.write_str(&rendered.join(", "))
            }
            StatOutcome::Failed(message) => write!(f, "error: {message}"),
        }
    }
}

/// Missing fields in one source column, counted before rows are dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissingCount {
    pub column: String,
    pub missing: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportEntry {
    pub column: String,
    pub statistic: Statistic,
    pub outcome: StatOutcome,
}

/// Summary of a pipeline run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Rows read from the source.
    pub rows_loaded: usize,
    /// Rows that survived the missing-value filter.
    pub rows_retained: usize,
    /// Month names that were not in the lookup and became null.
    pub unmapped_months: usize,
    /// Missing fields per source column, in header order.
    #[serde(default)]
    pub missing_values: Vec<MissingCount>,
    pub entries: Vec<ReportEntry>,
}

impl Report {
    pub fn rows_dropped(&self) -> usize {
        self.rows_loaded.saturating_sub(self.rows_retained)
    }

    /// Missing fields across all columns. A row can contribute several.
    pub fn missing_total(&self) -> usize {
        self.missing_values.iter().map(|count| count.missing).sum()
    }

    pub fn has_errors(&self) -> bool {
        self.entries.iter().any(|entry| entry.outcome.is_failed())
    }

    /// Looks up the outcome for a `(statistic, column)` pair.
    pub fn get(&self, statistic: Statistic, column: &str) -> Option<&StatOutcome> {
        self.entries
            .iter()
            .find(|entry| entry.statistic == statistic && entry.column == column)
            .map(|entry| &entry.outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Report {
        Report {
            rows_loaded: 3,
            rows_retained: 2,
            unmapped_months: 0,
            missing_values: vec![
                MissingCount {
                    column: "Mes".to_string(),
                    missing: 1,
                },
                MissingCount {
                    column: "Hora Solicitud".to_string(),
                    missing: 2,
                },
            ],
            entries: vec![
                ReportEntry {
                    column: "Mes".to_string(),
                    statistic: Statistic::Mode,
                    outcome: StatOutcome::Values(vec![StatValue::Int(1), StatValue::Int(2)]),
                },
                ReportEntry {
                    column: "Mes".to_string(),
                    statistic: Statistic::Mean,
                    outcome: StatOutcome::Failed("column 'Mes' has no values".to_string()),
                },
            ],
        }
    }

    #[test]
    fn report_counts() {
        let report = sample();
        assert_eq!(report.rows_dropped(), 1);
        assert_eq!(report.missing_total(), 3);
        assert!(report.has_errors());
    }

    #[test]
    fn outcome_display_joins_ties() {
        let report = sample();
        let mode = report.get(Statistic::Mode, "Mes").unwrap();
        assert_eq!(mode.to_string(), "1, 2");
        assert!(report.get(Statistic::Mean, "Hora Solicitud").is_none());
    }

    #[test]
    fn report_serializes() {
        let report = sample();
        let json = serde_json::to_string(&report).expect("serialize report");
        let round: Report = serde_json::from_str(&json).expect("deserialize report");
        assert_eq!(round, report);
    }

    #[test]
    fn report_without_missing_counts_deserializes() {
        let json = r#"{"rows_loaded":1,"rows_retained":1,"unmapped_months":0,"entries":[]}"#;
        let report: Report = serde_json::from_str(json).expect("deserialize report");
        assert!(report.missing_values.is_empty());
        assert_eq!(report.missing_total(), 0);
    }
}
