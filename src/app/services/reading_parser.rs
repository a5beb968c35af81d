//! Observation file parser for station daily temperature archives.
//!
//! Archive files carry a fixed 20-line preamble followed by one observation
//! per line, delimited by whitespace and/or commas: a YYYYMMDD date field and
//! a raw integer temperature in tenths of a degree. The raw value -9999 marks
//! a missing measurement and is mapped to "no data" rather than a number.
//!
//! Parsing is strict: a malformed data row fails the whole file. Corrupt
//! archives surface as internal errors at the request boundary, never as
//! client errors.

use chrono::NaiveDate;
use std::path::Path;
use tracing::debug;

use crate::app::models::{Reading, ReadingTable};
use crate::constants::{
    DATE_FIELD_INDEX, DATE_FORMAT, PREAMBLE_LINES, TEMPERATURE_FIELD_INDEX,
};
use crate::{Error, Result};

/// Parse a station observation file into a reading table
///
/// The file is read and converted in full before any lookup happens, so the
/// sentinel cleanup and unit conversion are applied uniformly to every row.
pub fn parse_file(path: &Path) -> Result<ReadingTable> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::io(format!("Failed to read file {}", path.display()), e))?;

    let table = parse_content(&content, &path.display().to_string())?;
    debug!(
        "Parsed {} readings from {}",
        table.len(),
        path.display()
    );
    Ok(table)
}

/// Parse observation file content, skipping the fixed preamble
pub fn parse_content(content: &str, file: &str) -> Result<ReadingTable> {
    let mut readings = Vec::new();

    for (line_number, line) in content.lines().enumerate().skip(PREAMBLE_LINES) {
        if line.trim().is_empty() {
            continue;
        }
        readings.push(parse_row(line, file, line_number + 1)?);
    }

    Ok(ReadingTable::new(readings))
}

/// Parse one observation row into a reading
fn parse_row(line: &str, file: &str, line_number: usize) -> Result<Reading> {
    let fields: Vec<&str> = line
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|field| !field.is_empty())
        .collect();

    let date_field = fields.get(DATE_FIELD_INDEX).ok_or_else(|| {
        Error::data_format(file, format!("Line {}: missing date field", line_number))
    })?;
    let temperature_field = fields.get(TEMPERATURE_FIELD_INDEX).ok_or_else(|| {
        Error::data_format(
            file,
            format!("Line {}: missing temperature field", line_number),
        )
    })?;

    let date = NaiveDate::parse_from_str(date_field, DATE_FORMAT).map_err(|e| {
        Error::data_format(
            file,
            format!("Line {}: invalid date '{}' ({})", line_number, date_field, e),
        )
    })?;

    let raw: i32 = temperature_field.parse().map_err(|e| {
        Error::data_format(
            file,
            format!(
                "Line {}: invalid temperature '{}' ({})",
                line_number, temperature_field, e
            ),
        )
    })?;

    Ok(Reading::from_raw(date, raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt::Write as _;

    /// Build file content with the standard 20-line preamble and given rows
    fn archive_with_rows(rows: &[&str]) -> String {
        let mut content = String::new();
        for i in 0..PREAMBLE_LINES {
            writeln!(content, "# preamble line {}", i + 1).unwrap();
        }
        for row in rows {
            writeln!(content, "{}", row).unwrap();
        }
        content
    }

    #[test]
    fn test_parse_comma_delimited_rows() {
        let content = archive_with_rows(&["20200101, 235", "20200102, -52"]);
        let table = parse_content(&content, "test.txt").unwrap();

        assert_eq!(table.len(), 2);
        let readings: Vec<_> = table.iter().collect();
        assert_eq!(readings[0].temperature, Some(23.5));
        assert_eq!(readings[1].temperature, Some(-5.2));
    }

    #[test]
    fn test_parse_whitespace_delimited_rows() {
        let content = archive_with_rows(&["20200101   235", "20200102\t-52"]);
        let table = parse_content(&content, "test.txt").unwrap();

        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_parse_masks_sentinel_values() {
        let content = archive_with_rows(&["20200101, -9999"]);
        let table = parse_content(&content, "test.txt").unwrap();

        let readings: Vec<_> = table.iter().collect();
        assert_eq!(readings[0].temperature, None);
    }

    #[test]
    fn test_parse_skips_preamble_that_looks_like_data() {
        // Preamble lines are positional, not pattern-matched
        let mut content = String::new();
        for _ in 0..PREAMBLE_LINES {
            content.push_str("19990101, 100\n");
        }
        content.push_str("20200101, 235\n");

        let table = parse_content(&content, "test.txt").unwrap();
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_parse_skips_blank_lines() {
        let content = archive_with_rows(&["20200101, 235", "", "20200102, 240"]);
        let table = parse_content(&content, "test.txt").unwrap();

        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_parse_rejects_malformed_date() {
        let content = archive_with_rows(&["2020-01-01, 235"]);
        let result = parse_content(&content, "test.txt");

        assert!(matches!(result, Err(Error::DataFormat { .. })));
    }

    #[test]
    fn test_parse_rejects_non_numeric_temperature() {
        let content = archive_with_rows(&["20200101, warm"]);
        let result = parse_content(&content, "test.txt");

        assert!(matches!(result, Err(Error::DataFormat { .. })));
    }

    #[test]
    fn test_parse_rejects_truncated_row() {
        let content = archive_with_rows(&["20200101"]);
        let result = parse_content(&content, "test.txt");

        assert!(matches!(result, Err(Error::DataFormat { .. })));
    }

    #[test]
    fn test_parse_file_missing_path() {
        let result = parse_file(Path::new("/nonexistent/archive.txt"));
        assert!(matches!(result, Err(Error::Io { .. })));
    }

    #[test]
    fn test_parse_empty_data_section() {
        let content = archive_with_rows(&[]);
        let table = parse_content(&content, "test.txt").unwrap();

        assert!(table.is_empty());
    }
}
