//! CSV loading implementation.

use std::path::Path;

use tracing::warn;

use crate::error::SummaryResult;
use crate::types::{DataSet, Schema};

/// Load a CSV file into an in-memory [`DataSet`].
///
/// Rules:
///
/// - The first line is the header; every later line is one data row.
/// - Quoted fields may contain the delimiter or line breaks.
/// - Rows are not required to match the header width (see [`load_csv_from_reader`]).
pub fn load_csv_from_path(path: impl AsRef<Path>, delimiter: u8) -> SummaryResult<DataSet> {
    let mut rdr = reader_builder(delimiter).from_path(path)?;
    load_csv_from_reader(&mut rdr)
}

/// Load CSV data from an existing CSV reader.
///
/// The reader must be configured with `has_headers(true)`. Rows shorter than the header are
/// padded with empty cells and longer rows are cut to the header width, so every row of the
/// returned dataset has exactly one cell per header column.
pub fn load_csv_from_reader<R: std::io::Read>(rdr: &mut csv::Reader<R>) -> SummaryResult<DataSet> {
    let headers = rdr.headers()?.clone();
    let width = headers.len();
    let schema = Schema::new(headers.iter().map(str::to_owned).collect());

    let mut rows: Vec<Vec<String>> = Vec::new();
    for (row_idx0, result) in rdr.records().enumerate() {
        let record = result?;
        if record.len() != width {
            // 1-based data record number; the header is not counted.
            warn!(
                record = row_idx0 + 1,
                expected = width,
                found = record.len(),
                "row width differs from header"
            );
        }

        let mut row: Vec<String> = record.iter().take(width).map(str::to_owned).collect();
        row.resize(width, String::new());
        rows.push(row);
    }

    Ok(DataSet::new(schema, rows))
}

/// Reader settings shared by every CSV entry point.
pub fn reader_builder(delimiter: u8) -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder.has_headers(true).flexible(true).delimiter(delimiter);
    builder
}

#[cfg(test)]
mod tests {
    use super::{load_csv_from_reader, reader_builder};

    fn load(input: &str) -> crate::types::DataSet {
        let mut rdr = reader_builder(b',').from_reader(input.as_bytes());
        load_csv_from_reader(&mut rdr).unwrap()
    }

    #[test]
    fn header_is_not_a_row() {
        let ds = load("id,value\n1,100\n2,200\n");
        assert_eq!(ds.schema.columns, vec!["id", "value"]);
        assert_eq!(ds.row_count(), 2);
        assert_eq!(ds.rows[1], vec!["2", "200"]);
    }

    #[test]
    fn quoted_fields_keep_delimiters_and_newlines() {
        let ds = load("name,note\n\"Smith, Ada\",\"line one\nline two\"\n");
        assert_eq!(ds.row_count(), 1);
        assert_eq!(ds.rows[0][0], "Smith, Ada");
        assert_eq!(ds.rows[0][1], "line one\nline two");
    }

    #[test]
    fn ragged_rows_are_normalized_to_header_width() {
        let ds = load("a,b,c\n1\n1,2,3,4\n");
        assert_eq!(ds.rows[0], vec!["1", "", ""]);
        assert_eq!(ds.rows[1], vec!["1", "2", "3"]);
    }

    #[test]
    fn empty_input_yields_empty_dataset() {
        let ds = load("");
        assert!(ds.schema.is_empty());
        assert_eq!(ds.row_count(), 0);
    }

    #[test]
    fn header_only_input_has_no_rows() {
        let ds = load("id,value\n");
        assert_eq!(ds.schema.len(), 2);
        assert_eq!(ds.row_count(), 0);
    }

    #[test]
    fn custom_delimiter_is_honored() {
        let mut rdr = reader_builder(b';').from_reader("a;b\n1;2\n".as_bytes());
        let ds = load_csv_from_reader(&mut rdr).unwrap();
        assert_eq!(ds.rows[0], vec!["1", "2"]);
    }
}
