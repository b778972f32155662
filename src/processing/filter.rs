//! Exact-match row filtering for [`crate::types::DataSet`].

use crate::error::SummaryResult;
use crate::types::DataSet;

use super::column_index;

/// Returns a new [`DataSet`] with only the rows whose `column` equals `value` exactly.
///
/// Comparison is plain text equality on the raw cell; row order is preserved. Returns
/// [`crate::SummaryError::MissingColumn`] if `column` is not in the header.
pub fn filter_by_value(dataset: &DataSet, column: &str, value: &str) -> SummaryResult<DataSet> {
    let idx = column_index(dataset, column)?;
    Ok(dataset.filter_rows(|row| row.get(idx).map(String::as_str).unwrap_or("") == value))
}
