//! Holder for the current parse result.
//!
//! The pipeline is triggered once per uploaded file; the store keeps the
//! result of the last successful pass and atomically replaces it when a new
//! file loads. A failed load leaves the previous report in place and
//! records the error, so the caller never observes a half-replaced state.

use std::path::Path;

use report_data::report::{load_report, UsageReport};

/// Externally-injected state container for the current [`UsageReport`].
///
/// # Example
/// ```no_run
/// use std::path::Path;
/// use report_runtime::store::ReportStore;
///
/// let mut store = ReportStore::new();
/// store.load(Path::new("usage.csv"))?;
/// if let Some(report) = store.current() {
///     println!("total: {}", report.grand_total);
/// }
/// # Ok::<(), report_core::error::ReportError>(())
/// ```
#[derive(Default)]
pub struct ReportStore {
    /// Result of the last successful load, if any.
    current: Option<UsageReport>,
    /// Human-readable description of the last failed load.
    last_error: Option<String>,
}

impl ReportStore {
    /// Create an empty store with no report loaded.
    pub fn new() -> Self {
        Self::default()
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Run the pipeline over `path` and replace the current report.
    ///
    /// On success the previous report is discarded in the same assignment
    /// that installs the new one. On failure the previous report is kept
    /// and the error is both recorded and returned.
    pub fn load(&mut self, path: &Path) -> report_core::error::Result<()> {
        match load_report(path) {
            Ok(report) => {
                tracing::debug!(
                    rows = report.records.len(),
                    days = report.daily_totals.len(),
                    "report store updated"
                );
                self.current = Some(report);
                self.last_error = None;
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "load failed; keeping previous report");
                self.last_error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// The current report, or `None` before the first successful load.
    pub fn current(&self) -> Option<&UsageReport> {
        self.current.as_ref()
    }

    /// Drop the current report, returning the store to its empty state.
    pub fn clear(&mut self) {
        self.current = None;
        self.last_error = None;
    }

    /// Description of the last failed load, or `None`.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
