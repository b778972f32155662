use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use tracing::{error, info, warn};

use crate::error::{ErrorKind, SummaryError};

/// Severity classification used for observer callbacks and alerting thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LoadSeverity {
    /// Informational event.
    Info,
    /// Warning-level event (non-fatal).
    Warning,
    /// Error-level event (load failed because of the input).
    Error,
    /// Critical error (the source could not be opened or read).
    Critical,
}

impl LoadSeverity {
    /// Severity of a failed load.
    pub fn for_error(error: &SummaryError) -> Self {
        match error.kind() {
            ErrorKind::Io => Self::Critical,
            ErrorKind::Parse | ErrorKind::ValueFormat | ErrorKind::MissingColumn => Self::Error,
        }
    }
}

/// Context about a load attempt.
#[derive(Debug, Clone)]
pub struct LoadContext {
    /// The input path, or `None` when loading from an in-memory reader.
    pub path: Option<PathBuf>,
}

impl fmt::Display for LoadContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.path {
            Some(p) => write!(f, "{}", p.display()),
            None => f.write_str("<reader>"),
        }
    }
}

/// Minimal stats reported on a successful load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadStats {
    /// Number of data rows.
    pub rows: usize,
    /// Number of header columns.
    pub columns: usize,
}

/// Observer interface for load outcomes.
///
/// Implementors can record metrics, logs, or trigger alerts.
pub trait LoadObserver: Send + Sync {
    /// Called when a load succeeds.
    fn on_success(&self, _ctx: &LoadContext, _stats: LoadStats) {}

    /// Called when a load fails.
    fn on_failure(&self, _ctx: &LoadContext, _severity: LoadSeverity, _error: &SummaryError) {}

    /// Called when a load failure meets an alert threshold.
    ///
    /// Default behavior forwards to [`Self::on_failure`].
    fn on_alert(&self, ctx: &LoadContext, severity: LoadSeverity, error: &SummaryError) {
        self.on_failure(ctx, severity, error)
    }
}

/// An observer that fans out callbacks to a list of observers.
#[derive(Default)]
pub struct CompositeObserver {
    observers: Vec<Arc<dyn LoadObserver>>,
}

impl CompositeObserver {
    pub fn new(observers: Vec<Arc<dyn LoadObserver>>) -> Self {
        Self { observers }
    }
}

impl fmt::Debug for CompositeObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeObserver")
            .field("observers_len", &self.observers.len())
            .finish()
    }
}

impl LoadObserver for CompositeObserver {
    fn on_success(&self, ctx: &LoadContext, stats: LoadStats) {
        for o in &self.observers {
            o.on_success(ctx, stats);
        }
    }

    fn on_failure(&self, ctx: &LoadContext, severity: LoadSeverity, error: &SummaryError) {
        for o in &self.observers {
            o.on_failure(ctx, severity, error);
        }
    }

    fn on_alert(&self, ctx: &LoadContext, severity: LoadSeverity, error: &SummaryError) {
        for o in &self.observers {
            o.on_alert(ctx, severity, error);
        }
    }
}

/// Reports load events through `tracing`.
#[derive(Debug, Default)]
pub struct TracingObserver;

impl LoadObserver for TracingObserver {
    fn on_success(&self, ctx: &LoadContext, stats: LoadStats) {
        info!(source = %ctx, rows = stats.rows, columns = stats.columns, "loaded csv");
    }

    fn on_failure(&self, ctx: &LoadContext, severity: LoadSeverity, error: &SummaryError) {
        warn!(source = %ctx, ?severity, %error, "csv load failed");
    }

    fn on_alert(&self, ctx: &LoadContext, severity: LoadSeverity, error: &SummaryError) {
        error!(source = %ctx, ?severity, %error, "ALERT: csv load failed");
    }
}
