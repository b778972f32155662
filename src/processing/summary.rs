//! Per-column numeric summaries for [`crate::types::DataSet`].

use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

use crate::error::{SummaryError, SummaryResult};
use crate::types::{ColumnKind, DataSet, parse_number};

/// Minimum, maximum and arithmetic mean of one numeric column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NumericSummary {
    pub min: f64,
    pub max: f64,
    pub avg: f64,
}

/// Numeric summaries keyed by column name, in header order.
///
/// Serializes as a JSON object whose keys keep that order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Summary {
    columns: Vec<(String, NumericSummary)>,
}

impl Summary {
    /// Summary of `column`, if it was classified as numeric.
    pub fn get(&self, column: &str) -> Option<&NumericSummary> {
        self.columns
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, s)| s)
    }

    /// Number of summarized columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Iterate `(column, summary)` pairs in header order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &NumericSummary)> {
        self.columns.iter().map(|(name, s)| (name.as_str(), s))
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(name, _)| name.as_str())
    }
}

impl Serialize for Summary {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for (name, s) in self.iter() {
            map.serialize_entry(name, s)?;
        }
        map.end()
    }
}

/// Classify every column by the value in the first row.
///
/// Returns an empty list for a dataset without rows: there is nothing to classify by.
pub fn column_kinds(dataset: &DataSet) -> Vec<(String, ColumnKind)> {
    let Some(first) = dataset.record(0) else {
        return Vec::new();
    };
    first
        .iter()
        .map(|(name, raw)| (name.to_owned(), ColumnKind::of(raw)))
        .collect()
}

/// Summarize every numeric column.
///
/// - An empty dataset yields an empty [`Summary`].
/// - A column is numeric iff its value in the first row parses as `f64`; that choice holds
///   for every later row.
/// - A later value in a numeric column that does not parse aborts the whole operation with
///   [`SummaryError::ValueFormat`]. No partial summary is returned.
pub fn summarize(dataset: &DataSet) -> SummaryResult<Summary> {
    let mut columns = Vec::new();
    for (name, kind) in column_kinds(dataset) {
        if kind != ColumnKind::Numeric {
            continue;
        }
        let Some(idx) = dataset.schema.index_of(&name) else {
            continue;
        };
        let summary = summarize_column(dataset, idx, &name)?;
        columns.push((name, summary));
    }
    Ok(Summary { columns })
}

fn summarize_column(dataset: &DataSet, idx: usize, column: &str) -> SummaryResult<NumericSummary> {
    let mut bounds: Option<(f64, f64)> = None;
    let mut sum = 0.0;

    for (row_idx0, raw) in dataset.column_values(idx).enumerate() {
        let v = parse_number(raw).map_err(|e| SummaryError::ValueFormat {
            record: row_idx0 + 1,
            column: column.to_owned(),
            raw: raw.to_owned(),
            message: e.to_string(),
        })?;
        bounds = Some(match bounds {
            None => (v, v),
            Some((min, max)) => (nan_min(min, v), nan_max(max, v)),
        });
        sum += v;
    }

    let (min, max) = bounds.unwrap_or((f64::NAN, f64::NAN));
    Ok(NumericSummary {
        min,
        max,
        avg: sum / dataset.row_count() as f64,
    })
}

// NaN-propagating bounds. `f64::min`/`f64::max` return the other operand instead.
fn nan_min(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() { f64::NAN } else { a.min(b) }
}

fn nan_max(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() { f64::NAN } else { a.max(b) }
}

#[cfg(test)]
mod tests {
    use super::{column_kinds, summarize};
    use crate::error::SummaryError;
    use crate::types::{ColumnKind, DataSet, Schema};

    fn dataset(header: &[&str], rows: &[&[&str]]) -> DataSet {
        DataSet::new(
            Schema::new(header.iter().map(|s| s.to_string()).collect()),
            rows.iter()
                .map(|r| r.iter().map(|s| s.to_string()).collect())
                .collect(),
        )
    }

    #[test]
    fn min_max_avg_over_all_rows() {
        let ds = dataset(
            &["id", "value", "category"],
            &[&["1", "100", "A"], &["2", "200", "B"], &["3", "150", "A"]],
        );
        let summary = summarize(&ds).unwrap();

        let value = summary.get("value").unwrap();
        assert_eq!(value.min, 100.0);
        assert_eq!(value.max, 200.0);
        assert_eq!(value.avg, 150.0);
        assert!(summary.get("category").is_none());
        assert_eq!(summary.column_names().collect::<Vec<_>>(), vec!["id", "value"]);
    }

    #[test]
    fn empty_dataset_has_empty_summary() {
        let ds = dataset(&["id", "value"], &[]);
        assert!(summarize(&ds).unwrap().is_empty());
        assert!(column_kinds(&ds).is_empty());
    }

    #[test]
    fn kind_is_fixed_by_first_row() {
        // Numeric-looking later rows do not promote a text column.
        let ds = dataset(&["code"], &[&["x1"], &["2"], &["3"]]);
        assert_eq!(column_kinds(&ds), vec![("code".to_string(), ColumnKind::Text)]);
        assert!(summarize(&ds).unwrap().is_empty());
    }

    #[test]
    fn later_non_numeric_value_aborts_with_context() {
        let ds = dataset(&["id", "amount"], &[&["1", "5.5"], &["2", "n/a"], &["3", "7"]]);
        let err = summarize(&ds).unwrap_err();
        match err {
            SummaryError::ValueFormat {
                record, column, raw, ..
            } => {
                assert_eq!(record, 2);
                assert_eq!(column, "amount");
                assert_eq!(raw, "n/a");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn nan_values_propagate_to_min_and_max() {
        let ds = dataset(&["x", "y"], &[&["nan", "nan"], &["1", "nan"], &["2", "nan"]]);
        let summary = summarize(&ds).unwrap();

        for column in ["x", "y"] {
            let s = summary.get(column).unwrap();
            assert!(s.min.is_nan(), "{column} min = {}", s.min);
            assert!(s.max.is_nan(), "{column} max = {}", s.max);
            assert!(s.avg.is_nan());
        }

        // A NaN after finite values is not skipped either.
        let ds = dataset(&["x"], &[&["1"], &["NaN"], &["2"]]);
        let x = *summarize(&ds).unwrap().get("x").unwrap();
        assert!(x.min.is_nan() && x.max.is_nan());
    }

    #[test]
    fn infinite_values_are_real_bounds() {
        let ds = dataset(&["x"], &[&["inf"], &["-inf"], &["3"]]);
        let x = *summarize(&ds).unwrap().get("x").unwrap();
        assert_eq!(x.min, f64::NEG_INFINITY);
        assert_eq!(x.max, f64::INFINITY);
        assert!(x.min <= x.max);
    }

    #[test]
    fn serializes_in_header_order() {
        let ds = dataset(&["z", "a"], &[&["1", "2"], &["3", "4"]]);
        let json = serde_json::to_string(&summarize(&ds).unwrap()).unwrap();
        assert_eq!(
            json,
            r#"{"z":{"min":1.0,"max":3.0,"avg":2.0},"a":{"min":2.0,"max":4.0,"avg":3.0}}"#
        );
    }
}
