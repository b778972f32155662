//! Loader entrypoints.
//!
//! Most callers should use [`load_from_path`], which reads a CSV file into an in-memory
//! [`crate::types::DataSet`]. If an [`LoadObserver`] is set on the [`LoadOptions`],
//! success/failure/alerts are reported to it.

use std::fmt;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use crate::error::SummaryResult;
use crate::types::DataSet;

use super::csv;
use super::observability::{LoadContext, LoadObserver, LoadSeverity, LoadStats};

/// Options controlling how a source is loaded.
///
/// Use [`Default`] for comma-separated input without an observer.
#[derive(Clone)]
pub struct LoadOptions {
    /// Field delimiter byte.
    pub delimiter: u8,
    /// Optional observer for logging/alerts.
    pub observer: Option<Arc<dyn LoadObserver>>,
    /// Severity threshold at which `on_alert` is invoked.
    pub alert_at_or_above: LoadSeverity,
}

impl fmt::Debug for LoadOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadOptions")
            .field("delimiter", &(self.delimiter as char))
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            observer: None,
            alert_at_or_above: LoadSeverity::Critical,
        }
    }
}

/// Load a CSV file from disk.
///
/// When an observer is configured, this function reports:
///
/// - `on_success` on success, with row/column counts
/// - `on_failure` on failure, with a computed severity
/// - `on_alert` on failure when the computed severity is >= `options.alert_at_or_above`
///
/// ```no_run
/// use csvstat::ingestion::{load_from_path, LoadOptions};
///
/// # fn main() -> Result<(), csvstat::SummaryError> {
/// let ds = load_from_path("data/sample.csv", &LoadOptions::default())?;
/// println!("rows={}", ds.row_count());
/// # Ok(())
/// # }
/// ```
pub fn load_from_path(path: impl AsRef<Path>, options: &LoadOptions) -> SummaryResult<DataSet> {
    let path = path.as_ref();
    let ctx = LoadContext {
        path: Some(path.to_path_buf()),
    };
    let result = csv::load_csv_from_path(path, options.delimiter);
    report(&ctx, options, &result);
    result
}

/// Load CSV data from any reader (an upload body, a byte slice, ...).
pub fn load_from_reader<R: Read>(reader: R, options: &LoadOptions) -> SummaryResult<DataSet> {
    let ctx = LoadContext { path: None };
    let mut rdr = csv::reader_builder(options.delimiter).from_reader(reader);
    let result = csv::load_csv_from_reader(&mut rdr);
    report(&ctx, options, &result);
    result
}

fn report(ctx: &LoadContext, options: &LoadOptions, result: &SummaryResult<DataSet>) {
    let Some(obs) = options.observer.as_ref() else {
        return;
    };
    match result {
        Ok(ds) => obs.on_success(
            ctx,
            LoadStats {
                rows: ds.row_count(),
                columns: ds.schema.len(),
            },
        ),
        Err(e) => {
            let sev = LoadSeverity::for_error(e);
            obs.on_failure(ctx, sev, e);
            if sev >= options.alert_at_or_above {
                obs.on_alert(ctx, sev, e);
            }
        }
    }
}
