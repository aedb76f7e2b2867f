//! CSV row parsing for usage report files.
//!
//! Splits the raw report text into rows, normalizes the header row, and
//! converts each data row into a typed [`RawRecord`]. Per-column parsing is
//! explicit: `quantity` must be a number and `date` must be `YYYY-MM-DD`.
//! Malformed rows are recorded as [`RowIssue`]s with their line number and
//! reason; they never abort the file.

use std::collections::HashMap;

use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord, Trim};
use report_core::error::{ReportError, Result};
use report_core::headers::{columns, normalize_header, REQUIRED_COLUMNS};
use report_core::models::{RawRecord, RowIssue};
use tracing::debug;

// ── Public types ──────────────────────────────────────────────────────────────

/// The outcome of parsing one report: typed rows plus recorded failures.
#[derive(Debug, Clone, Default)]
pub struct ParseOutput {
    /// Rows that parsed cleanly, in input order.
    pub records: Vec<RawRecord>,
    /// Rows that were skipped, with line numbers and reasons.
    pub issues: Vec<RowIssue>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Parse raw report text into typed records.
///
/// The header row is required; each header cell is normalized via
/// [`normalize_header`] and columns are located by their canonical key, so
/// `"Price Per Unit"`, `"price_per_unit"` and `"pricePerUnit"` are all
/// equivalent. A header missing one of [`REQUIRED_COLUMNS`] aborts with
/// [`ReportError::MissingColumn`] since every row would fail identically.
/// Fully empty lines are skipped.
pub fn parse_report(text: &str) -> Result<ParseOutput> {
    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(text.as_bytes());

    let column_index = index_headers(reader.headers()?);
    for required in REQUIRED_COLUMNS {
        if !column_index.contains_key(required) {
            return Err(ReportError::MissingColumn(required.to_string()));
        }
    }

    let mut output = ParseOutput::default();

    // Fallback for the rare record without a position; the header is line 1,
    // so data starts at line 2.
    let mut next_line: u64 = 2;

    for row in reader.records() {
        let record = match row {
            Ok(r) => r,
            Err(e) => {
                let line = e.position().map(|p| p.line()).unwrap_or(next_line);
                next_line = line + 1;
                output.issues.push(RowIssue {
                    line,
                    reason: format!("unreadable row: {e}"),
                });
                continue;
            }
        };

        let line = record.position().map(|p| p.line()).unwrap_or(next_line);
        next_line = line + 1;
        match map_record(&record, &column_index, line) {
            Ok(raw) => output.records.push(raw),
            Err(issue) => output.issues.push(issue),
        }
    }

    debug!(
        rows = output.records.len(),
        skipped = output.issues.len(),
        "parsed usage report"
    );

    Ok(output)
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Map each normalized header to its column position. First occurrence wins
/// when a file carries duplicate headers.
fn index_headers(headers: &StringRecord) -> HashMap<String, usize> {
    let mut index = HashMap::with_capacity(headers.len());
    for (pos, raw) in headers.iter().enumerate() {
        index.entry(normalize_header(raw)).or_insert(pos);
    }
    index
}

/// Convert one CSV record into a [`RawRecord`], or a [`RowIssue`] naming
/// what went wrong.
fn map_record(
    record: &StringRecord,
    column_index: &HashMap<String, usize>,
    line: u64,
) -> std::result::Result<RawRecord, RowIssue> {
    let cell = |key: &str| -> std::result::Result<&str, RowIssue> {
        column_index
            .get(key)
            .and_then(|&pos| record.get(pos))
            .ok_or_else(|| RowIssue {
                line,
                reason: format!("missing value for column {key}"),
            })
    };

    let date_str = cell(columns::DATE)?;
    if NaiveDate::parse_from_str(date_str, "%Y-%m-%d").is_err() {
        return Err(RowIssue {
            line,
            reason: format!("date {date_str:?} is not YYYY-MM-DD"),
        });
    }

    let quantity_str = cell(columns::QUANTITY)?;
    let quantity: f64 = quantity_str.parse().map_err(|_| RowIssue {
        line,
        reason: format!("quantity {quantity_str:?} is not a number"),
    })?;

    Ok(RawRecord {
        actions_workflow: cell(columns::ACTIONS_WORKFLOW)?.to_string(),
        date: date_str.to_string(),
        price_per_unit: cell(columns::PRICE_PER_UNIT)?.to_string(),
        product: cell(columns::PRODUCT)?.to_string(),
        quantity,
        repository_slug: cell(columns::REPOSITORY_SLUG)?.to_string(),
        unit_type: cell(columns::UNIT_TYPE)?.to_string(),
        line,
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
