//! Header row parsing and validation.

use std::collections::BTreeSet;
use std::path::Path;

use crate::error::{IngestError, Result};

/// Column names read from the header row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvHeaders {
    /// Trimmed column names, in file order.
    pub columns: Vec<String>,
}

impl CsvHeaders {
    /// Parses a header line. Fails when the line holds no names at all.
    pub fn parse(line: &str, delimiter: u8, path: &Path) -> Result<Self> {
        let columns = parse_csv_line(line, char::from(delimiter));
        if columns.iter().all(String::is_empty) {
            return Err(IngestError::NoHeaderDetected {
                path: path.to_path_buf(),
            });
        }
        Ok(Self { columns })
    }

    /// Returns the number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns true if there are no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn contains(&self, column: &str) -> bool {
        self.columns.iter().any(|c| c == column)
    }

    /// Rejects blank or duplicate names and checks every required column exists.
    pub fn validate(&self, required: &[&str], path: &Path) -> Result<()> {
        let mut seen = BTreeSet::new();
        for (position, column) in self.columns.iter().enumerate() {
            if column.is_empty() {
                return Err(IngestError::EmptyColumnName {
                    position: position + 1,
                    path: path.to_path_buf(),
                });
            }
            if !seen.insert(column.as_str()) {
                return Err(IngestError::DuplicateColumn {
                    column: column.clone(),
                    path: path.to_path_buf(),
                });
            }
        }
        if let Some(missing) = required.iter().find(|name| !self.contains(name)) {
            return Err(IngestError::MissingColumn {
                column: (*missing).to_string(),
                path: path.to_path_buf(),
            });
        }
        Ok(())
    }
}

/// Normalizes a header value by trimming whitespace.
pub fn normalize_header(value: &str) -> String {
    value.trim().to_string()
}

/// Parses a delimited line into fields, handling quoted values.
pub fn parse_csv_line(line: &str, delimiter: char) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if !in_quotes => {
                in_quotes = true;
            }
            '"' if in_quotes => {
                // Check for escaped quote ("")
                if chars.peek() == Some(&'"') {
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            }
            c if c == delimiter && !in_quotes => {
                fields.push(normalize_header(&current));
                current.clear();
            }
            _ => {
                current.push(c);
            }
        }
    }

    fields.push(normalize_header(&current));
    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(line: &str) -> CsvHeaders {
        CsvHeaders::parse(line, b';', Path::new("test.csv")).unwrap()
    }

    #[test]
    fn test_parse_csv_line_semicolon() {
        let result = parse_csv_line("Año;Mes;Hora Solicitud", ';');
        assert_eq!(result, vec!["Año", "Mes", "Hora Solicitud"]);
    }

    #[test]
    fn test_parse_csv_line_quoted_delimiter() {
        let result = parse_csv_line("\"Distrito; zona\";Mes", ';');
        assert_eq!(result, vec!["Distrito; zona", "Mes"]);
    }

    #[test]
    fn test_parse_csv_line_escaped_quotes() {
        let result = parse_csv_line("\"he said \"\"hola\"\"\";b", ';');
        assert_eq!(result, vec!["he said \"hola\"", "b"]);
    }

    #[test]
    fn test_parse_csv_line_trimmed() {
        let result = parse_csv_line("  a  ;  b  ", ';');
        assert_eq!(result, vec!["a", "b"]);
    }

    #[test]
    fn test_parse_blank_header_fails() {
        let result = CsvHeaders::parse(" ; ", b';', Path::new("test.csv"));
        assert!(matches!(result, Err(IngestError::NoHeaderDetected { .. })));
    }

    #[test]
    fn test_validate_missing_column() {
        let result = headers("Mes;Año").validate(&["Mes", "Hora Solicitud"], Path::new("x.csv"));
        match result {
            Err(IngestError::MissingColumn { column, .. }) => assert_eq!(column, "Hora Solicitud"),
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_duplicate_and_empty() {
        let dup = headers("Mes;Mes").validate(&[], Path::new("x.csv"));
        assert!(matches!(dup, Err(IngestError::DuplicateColumn { .. })));

        let empty = headers("Mes;;Año").validate(&[], Path::new("x.csv"));
        assert!(matches!(
            empty,
            Err(IngestError::EmptyColumnName { position: 2, .. })
        ));
    }

    #[test]
    fn test_validate_ok() {
        let parsed = headers("Año;Mes");
        assert_eq!(parsed.len(), 2);
        assert!(parsed.validate(&["Mes"], Path::new("x.csv")).is_ok());
    }
}
