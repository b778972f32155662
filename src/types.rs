//! Core data model types.
//!
//! A loaded file becomes a [`DataSet`]: the header row as a [`Schema`] plus the raw text of
//! every data row. Cells are never converted at load time; numeric interpretation happens
//! in [`crate::processing`], driven by [`ColumnKind`].

use std::num::ParseFloatError;

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Whether a column is summarized as numbers or treated as opaque text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// The column's first value parses as a floating-point number.
    Numeric,
    /// Anything else.
    Text,
}

impl ColumnKind {
    /// Classify a single raw cell.
    pub fn of(raw: &str) -> Self {
        if parse_number(raw).is_ok() {
            Self::Numeric
        } else {
            Self::Text
        }
    }
}

/// Parse a raw cell as `f64`. Surrounding whitespace is ignored.
pub fn parse_number(raw: &str) -> Result<f64, ParseFloatError> {
    raw.trim().parse::<f64>()
}

/// The header row: column names in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    /// Column names exactly as they appear in the header, duplicates included.
    pub columns: Vec<String>,
}

impl Schema {
    /// Create a new schema from header names.
    pub fn new(columns: Vec<String>) -> Self {
        Self { columns }
    }

    /// Number of header cells.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Iterate distinct column names in header order.
    ///
    /// A repeated header name is reported once, at its first position.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns
            .iter()
            .enumerate()
            .filter(|&(i, name)| !self.columns[..i].contains(name))
            .map(|(_, name)| name.as_str())
    }

    /// Returns the cell index backing a column name, if present.
    ///
    /// When a name repeats, the right-most cell wins, the same way a later key overwrites
    /// an earlier one in a map built from the row.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.columns.iter().rposition(|c| c == name)
    }
}

/// In-memory tabular dataset.
///
/// Rows are stored as `Vec<Vec<String>>`, one cell per [`Schema`] column.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataSet {
    /// Header describing row shape.
    pub schema: Schema,
    /// Row-major raw cell storage.
    pub rows: Vec<Vec<String>>,
}

impl DataSet {
    /// Create a dataset from a header and rows.
    pub fn new(schema: Schema, rows: Vec<Vec<String>>) -> Self {
        Self { schema, rows }
    }

    /// Number of data rows in the dataset. The header is not a row.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Borrow the row at `index` as a [`Record`].
    pub fn record(&self, index: usize) -> Option<Record<'_>> {
        self.rows.get(index).map(|values| Record {
            schema: &self.schema,
            values,
        })
    }

    /// Iterate all rows as [`Record`]s, in file order.
    pub fn records(&self) -> impl Iterator<Item = Record<'_>> {
        self.rows.iter().map(|values| Record {
            schema: &self.schema,
            values,
        })
    }

    /// Iterate the raw values of the cell at `index` down all rows.
    ///
    /// Rows too short to hold `index` yield an empty string.
    pub fn column_values(&self, index: usize) -> impl Iterator<Item = &str> {
        self.rows
            .iter()
            .map(move |row| row.get(index).map(String::as_str).unwrap_or(""))
    }

    /// Create a new dataset containing only rows that match `predicate`.
    ///
    /// The returned dataset preserves the original schema and row order.
    pub fn filter_rows<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&[String]) -> bool,
    {
        let rows = self
            .rows
            .iter()
            .filter(|row| predicate(row.as_slice()))
            .cloned()
            .collect();
        Self {
            schema: self.schema.clone(),
            rows,
        }
    }
}

/// One row viewed as a column-name-to-value mapping.
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    schema: &'a Schema,
    values: &'a [String],
}

impl<'a> Record<'a> {
    /// Value of `column` in this row, if the column exists.
    pub fn get(&self, column: &str) -> Option<&'a str> {
        let idx = self.schema.index_of(column)?;
        Some(self.values.get(idx).map(String::as_str).unwrap_or(""))
    }

    /// Iterate `(column, value)` pairs in header order.
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a str)> + '_ {
        self.schema
            .column_names()
            .map(move |name| (name, self.get(name).unwrap_or("")))
    }
}

impl Serialize for Record<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        for (name, value) in self.iter() {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
