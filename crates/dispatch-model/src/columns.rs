//! Column names of the activations dataset.

use serde::{Deserialize, Serialize};

/// Month-name column in the published dataset.
pub const MONTH_COLUMN: &str = "Mes";
/// Request time (`HH:MM:SS`) column in the published dataset.
pub const REQUEST_TIME_COLUMN: &str = "Hora Solicitud";
/// Intervention time (`HH:MM:SS`) column in the published dataset.
pub const INTERVENTION_TIME_COLUMN: &str = "Hora Intervención";
/// Year column in the published dataset.
pub const YEAR_COLUMN: &str = "Año";

/// Names of the columns the pipeline reads or rewrites.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchColumns {
    pub month: String,
    pub request_time: String,
    pub intervention_time: String,
    pub year: String,
}

impl Default for DispatchColumns {
    fn default() -> Self {
        Self {
            month: MONTH_COLUMN.to_string(),
            request_time: REQUEST_TIME_COLUMN.to_string(),
            intervention_time: INTERVENTION_TIME_COLUMN.to_string(),
            year: YEAR_COLUMN.to_string(),
        }
    }
}

impl DispatchColumns {
    /// Columns that must be present in the header row of a source file.
    pub fn required(&self) -> [&str; 4] {
        [
            self.month.as_str(),
            self.request_time.as_str(),
            self.intervention_time.as_str(),
            self.year.as_str(),
        ]
    }

    /// The two time-of-day columns, request first.
    pub fn time_columns(&self) -> [&str; 2] {
        [self.request_time.as_str(), self.intervention_time.as_str()]
    }

    #[must_use]
    pub fn with_month(mut self, name: impl Into<String>) -> Self {
        self.month = name.into();
        self
    }

    #[must_use]
    pub fn with_request_time(mut self, name: impl Into<String>) -> Self {
        self.request_time = name.into();
        self
    }

    #[must_use]
    pub fn with_intervention_time(mut self, name: impl Into<String>) -> Self {
        self.intervention_time = name.into();
        self
    }

    #[must_use]
    pub fn with_year(mut self, name: impl Into<String>) -> Self {
        self.year = name.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_published_dataset() {
        let columns = DispatchColumns::default();
        assert_eq!(
            columns.required(),
            ["Mes", "Hora Solicitud", "Hora Intervención", "Año"]
        );
    }

    #[test]
    fn builders_override_single_column() {
        let columns = DispatchColumns::default().with_year("YEAR");
        assert_eq!(columns.year, "YEAR");
        assert_eq!(columns.month, MONTH_COLUMN);
    }
}
