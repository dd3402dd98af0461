//! Source loading: bytes → text → header checks → DataFrame.

use std::borrow::Cow;
use std::io::Cursor;
use std::path::Path;

use dispatch_model::{PipelineOptions, SourceEncoding};
use polars::prelude::*;

use crate::error::{IngestError, Result};
use crate::frame::Dataset;

use super::header::CsvHeaders;

/// Decodes raw file bytes into UTF-8 text.
///
/// A UTF-8 BOM is removed. Latin-1 input is decoded with the WHATWG
/// `windows-1252` table, which is what the `ISO-8859-1` label resolves to.
pub fn decode_source<'a>(
    bytes: &'a [u8],
    encoding: SourceEncoding,
    path: &Path,
) -> Result<Cow<'a, str>> {
    let (text, had_errors) = match encoding {
        SourceEncoding::Utf8 => encoding_rs::UTF_8.decode_with_bom_removal(bytes),
        SourceEncoding::Latin1 => encoding_rs::WINDOWS_1252.decode_without_bom_handling(bytes),
    };
    if had_errors {
        return Err(IngestError::InvalidEncoding {
            path: path.to_path_buf(),
            encoding: match encoding {
                SourceEncoding::Utf8 => "UTF-8",
                SourceEncoding::Latin1 => "ISO-8859-1",
            },
        });
    }
    Ok(text)
}

/// Reads and parses the header row of decoded text.
pub fn read_headers(text: &str, delimiter: u8, path: &Path) -> Result<CsvHeaders> {
    let Some(first_line) = text.lines().next() else {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    };
    CsvHeaders::parse(first_line, delimiter, path)
}

/// Loads a delimited activations file into a [`Dataset`].
///
/// The file handle lives only for the duration of the read. Every column is
/// loaded as text and empty fields become nulls.
pub fn load(path: &Path, options: &PipelineOptions) -> Result<Dataset> {
    let bytes = std::fs::read(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "read source file");

    let dataset = load_from_bytes(&bytes, options, path)?;
    Ok(dataset.with_source(path))
}

/// Parses in-memory file contents. `origin` is only used in error messages.
pub fn load_from_bytes(bytes: &[u8], options: &PipelineOptions, origin: &Path) -> Result<Dataset> {
    if bytes.is_empty() {
        return Err(IngestError::EmptyCsv {
            path: origin.to_path_buf(),
        });
    }

    let text = decode_source(bytes, options.encoding, origin)?;
    let headers = read_headers(&text, options.delimiter, origin)?;
    headers.validate(&options.columns.required(), origin)?;

    let csv_error = |e: PolarsError| IngestError::CsvParse {
        path: origin.to_path_buf(),
        message: e.to_string(),
    };

    let mut df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .with_parse_options(CsvParseOptions::default().with_separator(options.delimiter))
        .into_reader_with_file_handle(Cursor::new(text.into_owned().into_bytes()))
        .finish()
        .map_err(csv_error)?;

    if df.width() != headers.len() {
        return Err(IngestError::CsvParse {
            path: origin.to_path_buf(),
            message: format!(
                "header declares {} columns but {} were parsed",
                headers.len(),
                df.width()
            ),
        });
    }
    // Header names are trimmed; keep the frame in sync with them.
    df.set_column_names(headers.columns.iter().map(String::as_str))?;

    tracing::info!(
        path = %origin.display(),
        rows = df.height(),
        columns = df.width(),
        "loaded activations"
    );

    Ok(Dataset::new(df))
}
