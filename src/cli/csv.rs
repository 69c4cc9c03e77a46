//! CSV file adapter for the CLI.
//!
//! The core consumes already-parsed tables; this module is the file-reading
//! collaborator. Plain comma-separated values with a header row; quoted
//! fields are not supported.

use std::path::Path;

use crate::domain::RawTable;
use crate::error::Result;

/// Read a campaign data CSV into a [`RawTable`].
pub fn read_table(path: &Path) -> Result<RawTable> {
    let content = std::fs::read_to_string(path)?;
    Ok(parse_table(&content))
}

/// Parse CSV text: first non-empty line is the header, every later
/// non-empty line is a row. Cells are comma-split and trimmed.
#[must_use]
pub fn parse_table(content: &str) -> RawTable {
    let mut lines = content.lines().filter(|l| !l.trim().is_empty());

    let Some(header) = lines.next() else {
        return RawTable::default();
    };

    let columns = split_line(header);
    let rows = lines.map(split_line).collect();
    RawTable::new(columns, rows)
}

fn split_line(line: &str) -> Vec<String> {
    line.split(',').map(|cell| cell.trim().to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_header_and_rows() {
        let table = parse_table("Channel_Used,ROI\nSearch,1.2\nSocial,0.8\n");

        assert_eq!(table.columns(), ["Channel_Used", "ROI"]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.cell(0, 0), Some("Search"));
        assert_eq!(table.cell(1, 1), Some("0.8"));
    }

    #[test]
    fn skips_blank_lines_and_trims_cells() {
        let table = parse_table("Channel_Used , ROI\n\nSearch , 1.2\r\n\n");

        assert_eq!(table.columns(), ["Channel_Used", "ROI"]);
        assert_eq!(table.row_count(), 1);
        assert_eq!(table.cell(0, 1), Some("1.2"));
    }

    #[test]
    fn empty_input_yields_empty_table() {
        let table = parse_table("");
        assert!(table.columns().is_empty());
        assert_eq!(table.row_count(), 0);
    }
}
