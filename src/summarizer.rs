//! One loaded dataset plus the views computed from it.

use std::path::Path;

use crate::error::SummaryResult;
use crate::ingestion::{load_from_path, load_from_reader, LoadOptions};
use crate::processing::{self, FrequencyTable, Summary, DEFAULT_TOP_LIMIT};
use crate::types::{ColumnKind, DataSet};

/// Owns one immutable [`DataSet`] for the duration of a single invocation.
///
/// Every view is computed on demand; nothing is cached and the dataset is never mutated.
#[derive(Debug, Clone)]
pub struct Summarizer {
    dataset: DataSet,
}

impl Summarizer {
    pub fn new(dataset: DataSet) -> Self {
        Self { dataset }
    }

    /// Load a CSV file and wrap it.
    pub fn from_path(path: impl AsRef<Path>, options: &LoadOptions) -> SummaryResult<Self> {
        load_from_path(path, options).map(Self::new)
    }

    /// Load CSV data from a reader and wrap it.
    pub fn from_reader<R: std::io::Read>(reader: R, options: &LoadOptions) -> SummaryResult<Self> {
        load_from_reader(reader, options).map(Self::new)
    }

    pub fn dataset(&self) -> &DataSet {
        &self.dataset
    }

    /// Number of data rows read. The header line is not counted.
    pub fn row_count(&self) -> usize {
        self.dataset.row_count()
    }

    /// First-row classification of every column.
    pub fn column_kinds(&self) -> Vec<(String, ColumnKind)> {
        processing::column_kinds(&self.dataset)
    }

    /// Min/max/average of every numeric column, in header order.
    pub fn summarize(&self) -> SummaryResult<Summary> {
        processing::summarize(&self.dataset)
    }

    /// The `limit` most frequent values of `column`.
    pub fn top_values(&self, column: &str, limit: usize) -> SummaryResult<FrequencyTable> {
        processing::top_values(&self.dataset, column, limit)
    }

    /// [`Self::top_values`] with the default limit of ten.
    pub fn top_values_default(&self, column: &str) -> SummaryResult<FrequencyTable> {
        self.top_values(column, DEFAULT_TOP_LIMIT)
    }

    /// Rows whose `column` equals `value` exactly, in original order.
    pub fn filter_by_value(&self, column: &str, value: &str) -> SummaryResult<DataSet> {
        processing::filter_by_value(&self.dataset, column, value)
    }
}

#[cfg(test)]
mod tests {
    use super::Summarizer;
    use crate::ingestion::LoadOptions;

    const DATA: &str = "id,value,category\n1,100,A\n2,200,B\n3,150,A\n";

    #[test]
    fn row_count_is_the_number_of_data_lines() {
        // Regression guard: the header must not be counted and nothing is subtracted.
        let s = Summarizer::from_reader(DATA.as_bytes(), &LoadOptions::default()).unwrap();
        assert_eq!(s.row_count(), 3);

        let empty = Summarizer::from_reader("id,value\n".as_bytes(), &LoadOptions::default())
            .unwrap();
        assert_eq!(empty.row_count(), 0);
    }

    #[test]
    fn default_limit_is_ten() {
        let mut data = String::from("n\n");
        for i in 0..15 {
            data.push_str(&format!("{i}\n"));
        }
        let s = Summarizer::from_reader(data.as_bytes(), &LoadOptions::default()).unwrap();
        assert_eq!(s.top_values_default("n").unwrap().len(), 10);
    }
}
