//! Top-level report pipeline.
//!
//! Orchestrates parsing, pricing, day aggregation and total reduction,
//! returning a [`UsageReport`] ready for the presentation layer.

use std::path::Path;

use chrono::Utc;
use report_core::error::{ReportError, Result};
use report_core::models::{DailyTotal, RowIssue, UsageRecord};
use report_core::pricing::price_record;
use tracing::{debug, warn};

use crate::aggregator::DayAggregator;
use crate::parser::parse_report;

// ── Public types ──────────────────────────────────────────────────────────────

/// Metadata produced alongside the report.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ReportMetadata {
    /// ISO-8601 timestamp when this report was built.
    pub generated_at: String,
    /// Number of rows that were priced successfully.
    pub rows_priced: usize,
    /// Number of rows skipped for parse or price failures.
    pub rows_skipped: usize,
    /// Wall-clock seconds spent in the pipeline.
    pub build_time_seconds: f64,
}

/// The complete output of one pipeline pass over an uploaded file.
#[derive(Debug, Clone)]
pub struct UsageReport {
    /// All successfully priced records, in input order.
    pub records: Vec<UsageRecord>,
    /// Per-day cost buckets, first-seen date order.
    pub daily_totals: Vec<DailyTotal>,
    /// Sum of all per-day totals.
    pub grand_total: f64,
    /// Rows excluded from the totals, with line numbers and reasons.
    pub issues: Vec<RowIssue>,
    /// Metadata about this pipeline pass.
    pub metadata: ReportMetadata,
}

// ── Public functions ──────────────────────────────────────────────────────────

/// Run the full pipeline over raw report text.
///
/// 1. Parse rows into typed records (row failures → issues).
/// 2. Price each record (price failures → issues, record excluded).
/// 3. Fold priced records into per-day totals.
/// 4. Reduce the daily totals into the grand total.
///
/// Only file-level problems (no header, missing required column) abort;
/// every per-row problem is carried on `issues`.
pub fn build_report(text: &str) -> Result<UsageReport> {
    let build_start = std::time::Instant::now();

    let parsed = parse_report(text)?;
    let mut issues = parsed.issues;

    let mut records: Vec<UsageRecord> = Vec::with_capacity(parsed.records.len());
    for raw in parsed.records {
        match price_record(raw) {
            Ok(record) => records.push(record),
            Err(ReportError::PriceParse { line, value }) => issues.push(RowIssue {
                line,
                reason: format!("invalid per-unit price {value:?}"),
            }),
            Err(other) => return Err(other),
        }
    }

    // Price issues are appended after the parse issues, so restore file
    // order before anything prints them.
    issues.sort_by_key(|issue| issue.line);

    let daily_totals = DayAggregator::aggregate_daily(&records);
    let grand_total = DayAggregator::grand_total(&daily_totals);

    for issue in &issues {
        warn!(line = issue.line, reason = %issue.reason, "row skipped");
    }
    debug!(
        rows = records.len(),
        days = daily_totals.len(),
        skipped = issues.len(),
        "usage report built"
    );

    let metadata = ReportMetadata {
        generated_at: Utc::now().to_rfc3339(),
        rows_priced: records.len(),
        rows_skipped: issues.len(),
        build_time_seconds: build_start.elapsed().as_secs_f64(),
    };

    Ok(UsageReport {
        records,
        daily_totals,
        grand_total,
        issues,
        metadata,
    })
}

/// Read a report file from disk and run [`build_report`] over it.
///
/// I/O failures and an empty/blank file abort with no partial results.
pub fn load_report(path: &Path) -> Result<UsageReport> {
    let text = std::fs::read_to_string(path).map_err(|source| ReportError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    if text.trim().is_empty() {
        return Err(ReportError::EmptyReport(path.to_path_buf()));
    }

    build_report(&text)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
