//! CSV reader for uploaded gradebook exports.

use anyhow::{Context, Result, bail};
use csv::ReaderBuilder;
use tracing::debug;

/// A gradebook read as raw text: trimmed header names plus one cell per header
/// in every row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Returns the raw cell at (`row`, `column`), or `None` when out of range.
    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows.get(row)?.get(column).map(String::as_str)
    }
}

/// Decodes bytes as UTF-8, dropping invalid sequences instead of replacing them.
pub fn decode_lossy(bytes: &[u8]) -> String {
    let mut text = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        text.push_str(chunk.valid());
    }
    match text.strip_prefix('\u{feff}') {
        Some(rest) => rest.to_string(),
        None => text,
    }
}

/// Reads a comma-delimited gradebook, treating the first record as the header.
///
/// Every cell stays text. Short rows are padded with blank cells and surplus
/// cells are dropped, so a ragged export still yields a rectangular table.
///
/// # Errors
///
/// Returns an error if the input has no header record or is not valid CSV.
pub fn parse_table(bytes: &[u8]) -> Result<RawTable> {
    let text = decode_lossy(bytes);

    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let columns: Vec<String> = rdr
        .headers()
        .context("reading CSV header")?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    if columns.is_empty() || columns.iter().all(String::is_empty) {
        bail!("no columns found");
    }

    let mut rows = Vec::new();
    for (idx, result) in rdr.records().enumerate() {
        let record = result.with_context(|| format!("parsing CSV record {}", idx + 1))?;
        let mut row: Vec<String> = record
            .iter()
            .take(columns.len())
            .map(str::to_string)
            .collect();
        row.resize(columns.len(), String::new());
        rows.push(row);
    }

    debug!(columns = columns.len(), rows = rows.len(), "Parsed gradebook table");

    Ok(RawTable { columns, rows })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_headers() {
        let table = parse_table(b" Student , Lab - 1.2 Build \nAlice,90\n").unwrap();
        assert_eq!(table.columns, vec!["Student", "Lab - 1.2 Build"]);
        assert_eq!(table.rows, vec![vec!["Alice".to_string(), "90".to_string()]]);
    }

    #[test]
    fn test_parse_pads_short_rows_and_drops_extra_cells() {
        let table = parse_table(b"Student,A,B\nAlice\nBob,1,2,3\n").unwrap();
        assert_eq!(table.rows[0], vec!["Alice", "", ""]);
        assert_eq!(table.rows[1], vec!["Bob", "1", "2"]);
    }

    #[test]
    fn test_parse_empty_input_is_an_error() {
        let err = parse_table(b"").unwrap_err();
        assert!(err.to_string().contains("no columns"));
    }

    #[test]
    fn test_parse_header_only() {
        let table = parse_table(b"Student,Assessment - 1.1 Quiz\n").unwrap();
        assert_eq!(table.columns.len(), 2);
        assert!(table.rows.is_empty());
    }

    #[test]
    fn test_parse_skips_blank_lines() {
        let table = parse_table(b"Student,A\n\nAlice,1\n\n").unwrap();
        assert_eq!(table.rows.len(), 1);
    }

    #[test]
    fn test_decode_drops_invalid_bytes() {
        assert_eq!(decode_lossy(b"Ali\xffce"), "Alice");
    }

    #[test]
    fn test_decode_strips_bom() {
        let table = parse_table(b"\xef\xbb\xbfStudent,A\nAlice,1\n").unwrap();
        assert_eq!(table.columns[0], "Student");
    }

    #[test]
    fn test_cell_out_of_range() {
        let table = parse_table(b"Student\nAlice\n").unwrap();
        assert_eq!(table.cell(0, 0), Some("Alice"));
        assert_eq!(table.cell(0, 1), None);
        assert_eq!(table.cell(5, 0), None);
    }
}
