//! Value frequency ranking for a single column.

use std::collections::HashMap;

use serde::Serialize;

use crate::error::SummaryResult;
use crate::types::DataSet;

use super::column_index;

/// Number of entries returned by [`top_values`] when the caller does not choose.
pub const DEFAULT_TOP_LIMIT: usize = 10;

/// A raw value and how many rows hold it. Serializes as `[value, count]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValueCount(pub String, pub usize);

impl ValueCount {
    pub fn value(&self) -> &str {
        &self.0
    }

    pub fn count(&self) -> usize {
        self.1
    }
}

/// Ranked `(value, count)` pairs for one column.
pub type FrequencyTable = Vec<ValueCount>;

/// Return the `limit` most frequent raw values of `column`.
///
/// Counts descend; values with equal counts keep the order in which they first appear.
/// Returns [`crate::SummaryError::MissingColumn`] before counting if `column` is not in the
/// header.
pub fn top_values(dataset: &DataSet, column: &str, limit: usize) -> SummaryResult<FrequencyTable> {
    let idx = column_index(dataset, column)?;

    let mut counts: Vec<(&str, usize)> = Vec::new();
    let mut slots: HashMap<&str, usize> = HashMap::new();
    for raw in dataset.column_values(idx) {
        match slots.get(raw) {
            Some(&slot) => counts[slot].1 += 1,
            None => {
                slots.insert(raw, counts.len());
                counts.push((raw, 1));
            }
        }
    }

    // Stable sort: ties stay in first-appearance order.
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    Ok(counts
        .into_iter()
        .take(limit)
        .map(|(value, count)| ValueCount(value.to_owned(), count))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::{top_values, ValueCount};
    use crate::error::SummaryError;
    use crate::types::{DataSet, Schema};

    fn categories(values: &[&str]) -> DataSet {
        DataSet::new(
            Schema::new(vec!["category".to_string()]),
            values.iter().map(|v| vec![v.to_string()]).collect(),
        )
    }

    fn vc(value: &str, count: usize) -> ValueCount {
        ValueCount(value.to_string(), count)
    }

    #[test]
    fn ranks_by_count_and_applies_limit() {
        let ds = categories(&["A", "B", "A", "C", "B", "A"]);
        assert_eq!(top_values(&ds, "category", 2).unwrap(), vec![vc("A", 3), vc("B", 2)]);
    }

    #[test]
    fn ties_keep_first_appearance_order() {
        let ds = categories(&["x", "y", "z", "y", "x", "z"]);
        assert_eq!(
            top_values(&ds, "category", 10).unwrap(),
            vec![vc("x", 2), vc("y", 2), vc("z", 2)]
        );
    }

    #[test]
    fn zero_limit_and_empty_dataset_give_empty_tables() {
        let ds = categories(&["A", "B"]);
        assert!(top_values(&ds, "category", 0).unwrap().is_empty());
        assert!(top_values(&categories(&[]), "category", 5).unwrap().is_empty());
    }

    #[test]
    fn unknown_column_is_reported_by_name() {
        let ds = categories(&["A"]);
        match top_values(&ds, "nonexistent_column", 5).unwrap_err() {
            SummaryError::MissingColumn { column, available } => {
                assert_eq!(column, "nonexistent_column");
                assert_eq!(available, vec!["category".to_string()]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn serializes_as_pairs() {
        let json = serde_json::to_string(&vec![vc("A", 3)]).unwrap();
        assert_eq!(json, r#"[["A",3]]"#);
    }
}
