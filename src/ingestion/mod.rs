//! Loader entrypoints and implementation.
//!
//! Most callers should use [`load_from_path`] (from [`loader`]) which:
//!
//! - reads the whole CSV source into an in-memory [`crate::types::DataSet`]
//! - treats the first line as the header
//! - optionally reports success/failure/alerts to an [`LoadObserver`]
//!
//! The CSV-specific functions live under [`csv`].

pub mod csv;
pub mod loader;
pub mod observability;

pub use loader::{load_from_path, load_from_reader, LoadOptions};
pub use observability::{
    CompositeObserver, LoadContext, LoadObserver, LoadSeverity, LoadStats, TracingObserver,
};
