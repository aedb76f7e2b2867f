use serde::{Deserialize, Serialize};

/// One row of the usage report before it has been priced.
///
/// Field values are already typed (quantity parsed, date validated) but the
/// per-unit price is still the raw currency-prefixed string from the file.
/// Carries its 1-based source line number so downstream failures can point
/// back at the offending row.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRecord {
    /// Name of the Actions workflow that consumed the units.
    pub actions_workflow: String,
    /// Usage date as it appeared in the file, `YYYY-MM-DD`.
    pub date: String,
    /// Currency-prefixed per-unit price string, e.g. `"$0.008"`.
    pub price_per_unit: String,
    /// Billed product name.
    pub product: String,
    /// Number of units consumed (integer or decimal).
    pub quantity: f64,
    /// `owner/repo` identifier the usage was billed against.
    pub repository_slug: String,
    /// Kind of unit being billed (e.g. minutes, gigabytes).
    pub unit_type: String,
    /// 1-based line number of the row in the source file.
    pub line: u64,
}

/// A fully priced usage record. Immutable once constructed.
///
/// Produced only by the price calculator; the `price` field is the per-unit
/// price multiplied by the quantity. Serializes with the report's own
/// camel-case column vocabulary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageRecord {
    pub actions_workflow: String,
    pub date: String,
    pub price_per_unit: String,
    pub product: String,
    pub quantity: f64,
    pub repository_slug: String,
    pub unit_type: String,
    /// Computed monetary cost for this row.
    pub price: f64,
}

/// Aggregated cost for one calendar date.
///
/// One entry per distinct date; ordering follows the first occurrence of
/// the date in the input sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyTotal {
    pub date: String,
    pub price: f64,
}

/// A recorded per-row failure: the row was skipped, not the whole file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowIssue {
    /// 1-based line number in the source file.
    pub line: u64,
    /// Human-readable reason the row was skipped.
    pub reason: String,
}
