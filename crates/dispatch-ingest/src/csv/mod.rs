//! Delimited file reading.

mod header;
mod reader;

pub use header::CsvHeaders;
pub use reader::{decode_source, load, load_from_bytes, read_headers};
