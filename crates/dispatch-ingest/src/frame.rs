//! Dataset wrapper around a Polars DataFrame.

use std::path::{Path, PathBuf};

use polars::prelude::DataFrame;

/// An ordered table of activation records sharing one column set.
///
/// Wraps the Polars DataFrame together with the file it was loaded from so
/// later stages can name the source in log events.
#[derive(Debug, Clone)]
pub struct Dataset {
    data: DataFrame,
    source: Option<PathBuf>,
}

impl Dataset {
    /// Wraps an in-memory DataFrame that has no backing file.
    pub fn new(data: DataFrame) -> Self {
        Self { data, source: None }
    }

    #[must_use]
    pub fn with_source(mut self, source: impl Into<PathBuf>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// File the dataset was loaded from, if any.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn data(&self) -> &DataFrame {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut DataFrame {
        &mut self.data
    }

    /// Number of records.
    pub fn height(&self) -> usize {
        self.data.height()
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.data.width()
    }

    pub fn column_names(&self) -> Vec<String> {
        self.data
            .get_column_names()
            .into_iter()
            .map(ToString::to_string)
            .collect()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.data.column(name).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{Column, DataFrame};

    #[test]
    fn dataset_reports_shape() {
        let df = DataFrame::new(vec![
            Column::new("Mes".into(), vec!["ENERO", "MAYO"]),
            Column::new("Año".into(), vec!["2022", "2022"]),
        ])
        .unwrap();
        let dataset = Dataset::new(df).with_source("activaciones.csv");

        assert_eq!(dataset.height(), 2);
        assert_eq!(dataset.width(), 2);
        assert_eq!(dataset.column_names(), vec!["Mes", "Año"]);
        assert!(dataset.has_column("Mes"));
        assert!(!dataset.has_column("Hora Solicitud"));
        assert_eq!(dataset.source(), Some(Path::new("activaciones.csv")));
    }
}
