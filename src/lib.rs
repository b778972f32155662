//! `csvstat` loads a CSV file (header row first) into an in-memory [`types::DataSet`] and
//! reports descriptive statistics about it:
//!
//! - the number of data rows
//! - min / max / average of every numeric column
//! - the most frequent values of a chosen column
//!
//! It also filters rows by exact value. The same report is available from the `csvstat`
//! binary and from a small HTTP service ([`server`]).
//!
//! ## Column kinds
//!
//! A column is numeric when its value in the **first** data row parses as `f64`. That
//! choice is applied to every row; a later value that does not parse makes
//! [`summarizer::Summarizer::summarize`] fail with [`SummaryError::ValueFormat`] instead
//! of skipping the value.
//!
//! ## Quick example
//!
//! ```rust
//! use csvstat::ingestion::LoadOptions;
//! use csvstat::report::{Report, TopRequest};
//! use csvstat::summarizer::Summarizer;
//!
//! # fn main() -> Result<(), csvstat::SummaryError> {
//! let csv = "id,value,category\n1,100,A\n2,200,B\n3,150,A\n";
//! let s = Summarizer::from_reader(csv.as_bytes(), &LoadOptions::default())?;
//!
//! assert_eq!(s.row_count(), 3);
//! let summary = s.summarize()?;
//! assert_eq!(summary.get("value").unwrap().max, 200.0);
//!
//! let report = Report::build(&s, Some(&TopRequest::new("category", 5)))?;
//! println!("{}", serde_json::to_string_pretty(&report).unwrap());
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`ingestion`]: loader entrypoints and load observers
//! - [`types`]: header, dataset and record types
//! - [`processing`]: summaries, value frequencies and filtering
//! - [`summarizer`]: one dataset plus its views
//! - [`report`]: serializable result shape
//! - [`config`], [`server`], [`telemetry`]: the HTTP service and its ambient setup
//! - [`sample`]: the canonical sample dataset
//! - [`error`]: error types

pub mod config;
pub mod error;
pub mod ingestion;
pub mod processing;
pub mod report;
pub mod sample;
pub mod server;
pub mod summarizer;
pub mod telemetry;
pub mod types;

pub use error::{ErrorKind, SummaryError, SummaryResult};
