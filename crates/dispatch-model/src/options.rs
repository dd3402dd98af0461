//! Configuration options for a pipeline run.

use serde::{Deserialize, Serialize};

use crate::columns::DispatchColumns;

/// Text encoding of the source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SourceEncoding {
    /// UTF-8, with or without BOM.
    #[default]
    Utf8,
    /// ISO-8859-1, as served by the Madrid open-data portal.
    Latin1,
}

/// Options controlling how a source is loaded and normalized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineOptions {
    /// Field separator (`;` for the published dataset).
    pub delimiter: u8,
    /// Source text encoding.
    pub encoding: SourceEncoding,
    /// Names of the month, time and year columns.
    pub columns: DispatchColumns,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            delimiter: b';',
            encoding: SourceEncoding::default(),
            columns: DispatchColumns::default(),
        }
    }
}

impl PipelineOptions {
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    #[must_use]
    pub fn with_encoding(mut self, encoding: SourceEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    #[must_use]
    pub fn with_columns(mut self, columns: DispatchColumns) -> Self {
        self.columns = columns;
        self
    }
}
