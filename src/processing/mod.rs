//! In-memory computations over a loaded [`crate::types::DataSet`].
//!
//! Currently implemented:
//!
//! - [`summarize()`]: min/max/average of every numeric column
//! - [`top_values()`]: most frequent raw values of one column
//! - [`filter_by_value()`]: rows whose column equals a value
//!
//! Column-keyed operations check the column name against the header before touching any
//! row, and fail with [`crate::SummaryError::MissingColumn`] when it is absent.
//!
//! ## Example
//!
//! ```rust
//! use csvstat::processing::{filter_by_value, summarize, top_values};
//! use csvstat::types::{DataSet, Schema};
//!
//! let schema = Schema::new(vec!["value".to_string(), "category".to_string()]);
//! let ds = DataSet::new(
//!     schema,
//!     vec![
//!         vec!["100".to_string(), "A".to_string()],
//!         vec!["200".to_string(), "B".to_string()],
//!         vec!["150".to_string(), "A".to_string()],
//!     ],
//! );
//!
//! let summary = summarize(&ds).unwrap();
//! assert_eq!(summary.get("value").unwrap().avg, 150.0);
//!
//! let top = top_values(&ds, "category", 1).unwrap();
//! assert_eq!((top[0].value(), top[0].count()), ("A", 2));
//!
//! assert_eq!(filter_by_value(&ds, "category", "B").unwrap().row_count(), 1);
//! ```

pub mod filter;
pub mod frequency;
pub mod summary;

pub use filter::filter_by_value;
pub use frequency::{top_values, FrequencyTable, ValueCount, DEFAULT_TOP_LIMIT};
pub use summary::{column_kinds, summarize, NumericSummary, Summary};

use crate::error::{SummaryError, SummaryResult};
use crate::types::DataSet;

/// Resolve `column` to its cell index or fail with [`SummaryError::MissingColumn`].
pub(crate) fn column_index(dataset: &DataSet, column: &str) -> SummaryResult<usize> {
    dataset
        .schema
        .index_of(column)
        .ok_or_else(|| SummaryError::MissingColumn {
            column: column.to_owned(),
            available: dataset.schema.column_names().map(str::to_owned).collect(),
        })
}
