//! Structural column operations.

use dispatch_ingest::Dataset;
use tracing::debug;

use crate::error::Result;

/// Removes a column from the dataset.
///
/// Returns `false` when the column was already absent, which keeps the
/// pipeline safe to reapply to an already-normalized dataset.
pub fn drop_column(dataset: &mut Dataset, name: &str) -> Result<bool> {
    if !dataset.has_column(name) {
        debug!(column = name, "column already absent, nothing to drop");
        return Ok(false);
    }
    dataset.data_mut().drop_in_place(name)?;
    debug!(column = name, "dropped column");
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{Column, DataFrame};

    #[test]
    fn drop_column_removes_only_named_column() {
        let df = DataFrame::new(vec![
            Column::new("Año".into(), vec!["2022"]),
            Column::new("Mes".into(), vec!["ENERO"]),
        ])
        .unwrap();
        let mut dataset = Dataset::new(df);

        assert!(drop_column(&mut dataset, "Año").unwrap());
        assert_eq!(dataset.column_names(), vec!["Mes"]);
        assert!(!drop_column(&mut dataset, "Año").unwrap());
        assert_eq!(dataset.width(), 1);
    }
}
