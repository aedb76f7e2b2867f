//! Price computation for parsed usage records.
//!
//! The report carries the per-unit price as a display string with a single
//! leading currency symbol (`"$0.008"`). The calculator strips exactly one
//! symbol character, parses the remainder as a decimal and multiplies by
//! the row's quantity. Multi-character currency prefixes (`"US$"`) are not
//! supported and fail like any other malformed price.

use crate::error::{ReportError, Result};
use crate::models::{RawRecord, UsageRecord};

/// Parse a currency-prefixed per-unit price string into its numeric value.
///
/// Returns `None` when:
/// * the string is empty,
/// * the first character is not a one-character currency symbol (it must
///   not be alphanumeric, a digit sign, or a decimal point — `"0.01"` has
///   no symbol and is rejected rather than misread as `".01"`),
/// * the remainder is not a finite decimal number (`"$abc"`).
///
/// # Examples
///
/// ```
/// use report_core::pricing::parse_unit_price;
///
/// assert_eq!(parse_unit_price("$0.008"), Some(0.008));
/// assert_eq!(parse_unit_price("€1.50"), Some(1.5));
/// assert_eq!(parse_unit_price("0.01"), None);
/// assert_eq!(parse_unit_price("$abc"), None);
/// ```
pub fn parse_unit_price(raw: &str) -> Option<f64> {
    let mut chars = raw.chars();
    let symbol = chars.next()?;
    if symbol.is_alphanumeric() || symbol == '.' || symbol == '-' || symbol == '+' {
        return None;
    }

    let remainder = chars.as_str().trim();
    if remainder.is_empty() {
        return None;
    }

    remainder.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Derive the monetary cost for `raw` and seal it into a [`UsageRecord`].
///
/// `price = unit price × quantity`. A malformed per-unit price yields
/// [`ReportError::PriceParse`] carrying the source line, so the caller can
/// exclude the record from aggregation instead of propagating a NaN.
pub fn price_record(raw: RawRecord) -> Result<UsageRecord> {
    let unit_price =
        parse_unit_price(&raw.price_per_unit).ok_or_else(|| ReportError::PriceParse {
            line: raw.line,
            value: raw.price_per_unit.clone(),
        })?;

    Ok(UsageRecord {
        price: unit_price * raw.quantity,
        actions_workflow: raw.actions_workflow,
        date: raw.date,
        price_per_unit: raw.price_per_unit,
        product: raw.product,
        quantity: raw.quantity,
        repository_slug: raw.repository_slug,
        unit_type: raw.unit_type,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_raw(price_per_unit: &str, quantity: f64) -> RawRecord {
        RawRecord {
            actions_workflow: "ci.yml".to_string(),
            date: "2024-01-15".to_string(),
            price_per_unit: price_per_unit.to_string(),
            product: "Actions".to_string(),
            quantity,
            repository_slug: "octo/widgets".to_string(),
            unit_type: "minute".to_string(),
            line: 2,
        }
    }

    // ── parse_unit_price ─────────────────────────────────────────────────────

    #[test]
    fn test_parse_unit_price_dollar() {
        assert_eq!(parse_unit_price("$0.008"), Some(0.008));
    }

    #[test]
    fn test_parse_unit_price_other_symbol() {
        assert_eq!(parse_unit_price("€1.50"), Some(1.5));
        assert_eq!(parse_unit_price("£0.25"), Some(0.25));
    }

    #[test]
    fn test_parse_unit_price_zero() {
        assert_eq!(parse_unit_price("$0"), Some(0.0));
    }

    #[test]
    fn test_parse_unit_price_missing_symbol() {
        // A bare decimal must not be misread by stripping its first digit.
        assert_eq!(parse_unit_price("0.01"), None);
    }

    #[test]
    fn test_parse_unit_price_leading_point_or_sign() {
        assert_eq!(parse_unit_price(".01"), None);
        assert_eq!(parse_unit_price("-0.01"), None);
        assert_eq!(parse_unit_price("+0.01"), None);
    }

    #[test]
    fn test_parse_unit_price_non_decimal_remainder() {
        assert_eq!(parse_unit_price("$abc"), None);
        assert_eq!(parse_unit_price("$"), None);
    }

    #[test]
    fn test_parse_unit_price_multi_char_prefix_rejected() {
        // Only one symbol character is stripped; "US$" leaves "S$0.008".
        assert_eq!(parse_unit_price("US$0.008"), None);
    }

    #[test]
    fn test_parse_unit_price_empty() {
        assert_eq!(parse_unit_price(""), None);
    }

    // ── price_record ─────────────────────────────────────────────────────────

    #[test]
    fn test_price_record_multiplies_by_quantity() {
        let record = price_record(make_raw("$0.0080", 500.0)).unwrap();
        assert!((record.price - 4.0).abs() < 1e-9);
        assert_eq!(record.date, "2024-01-15");
        assert_eq!(record.price_per_unit, "$0.0080");
    }

    #[test]
    fn test_price_record_fractional_quantity() {
        let record = price_record(make_raw("$0.25", 1.5)).unwrap();
        assert!((record.price - 0.375).abs() < 1e-9);
    }

    #[test]
    fn test_price_record_malformed_price_is_error() {
        let err = price_record(make_raw("$abc", 10.0)).unwrap_err();
        match err {
            ReportError::PriceParse { line, value } => {
                assert_eq!(line, 2);
                assert_eq!(value, "$abc");
            }
            other => panic!("expected PriceParse, got {other}"),
        }
    }

    #[test]
    fn test_price_record_never_produces_nan() {
        for bad in ["0.01", "$abc", "", "$", "$NaN", "$inf"] {
            let result = price_record(make_raw(bad, 3.0));
            if let Ok(record) = result {
                assert!(record.price.is_finite(), "{bad:?} produced {}", record.price);
            }
        }
    }
}
