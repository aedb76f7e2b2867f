use crate::models::DailyTotal;

/// Round a price to the cent boundary, half-up.
///
/// # Examples
///
/// ```
/// use report_core::formatting::round_price;
///
/// assert_eq!(round_price(4.005), 4.01);
/// assert_eq!(round_price(4.004), 4.0);
/// assert_eq!(round_price(0.0), 0.0);
/// ```
pub fn round_price(price: f64) -> f64 {
    // Nudge by half a ULP at cent precision so values stored just below an
    // exact midpoint (an IEEE 754 artefact) still round up.
    let cents = price * 100.0;
    (cents + f64::EPSILON * cents.abs()).round() / 100.0
}

/// Format a price for display: leading dollar sign, exactly two decimals.
///
/// # Examples
///
/// ```
/// use report_core::formatting::format_price;
///
/// assert_eq!(format_price(6.0), "$6.00");
/// assert_eq!(format_price(1234.567), "$1234.57");
/// assert_eq!(format_price(0.0), "$0.00");
/// ```
pub fn format_price(price: f64) -> String {
    format!("${:.2}", round_price(price))
}

/// Describe the span of a report's daily totals, first bucket to last.
///
/// The buckets are in first-seen order, not sorted, so this names the span
/// of the file as written. Returns `None` for an empty report.
pub fn format_date_range(totals: &[DailyTotal]) -> Option<String> {
    let first = totals.first()?;
    let last = totals.last()?;
    Some(format!("From: {} to {}", first.date, last.date))
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── round_price ──────────────────────────────────────────────────────────

    #[test]
    fn test_round_price_exact_cents_unchanged() {
        assert_eq!(round_price(4.0), 4.0);
        assert_eq!(round_price(0.01), 0.01);
    }

    #[test]
    fn test_round_price_half_up() {
        assert_eq!(round_price(1.005), 1.01);
        assert_eq!(round_price(2.675), 2.68);
    }

    #[test]
    fn test_round_price_down() {
        assert_eq!(round_price(1.004), 1.0);
        assert_eq!(round_price(0.0049), 0.0);
    }

    #[test]
    fn test_round_price_zero() {
        assert_eq!(round_price(0.0), 0.0);
    }

    // ── format_price ─────────────────────────────────────────────────────────

    #[test]
    fn test_format_price_whole_number() {
        assert_eq!(format_price(6.0), "$6.00");
    }

    #[test]
    fn test_format_price_sub_cent_rounds() {
        assert_eq!(format_price(0.008), "$0.01");
        assert_eq!(format_price(0.004), "$0.00");
    }

    #[test]
    fn test_format_price_zero() {
        assert_eq!(format_price(0.0), "$0.00");
    }

    #[test]
    fn test_format_price_two_decimals_always() {
        assert_eq!(format_price(3.1), "$3.10");
        assert_eq!(format_price(1234.567), "$1234.57");
    }

    // ── format_date_range ────────────────────────────────────────────────────

    fn day(date: &str) -> DailyTotal {
        DailyTotal {
            date: date.to_string(),
            price: 1.0,
        }
    }

    #[test]
    fn test_format_date_range_first_to_last() {
        let totals = vec![day("2024-01-01"), day("2024-01-05"), day("2024-01-02")];
        assert_eq!(
            format_date_range(&totals).unwrap(),
            "From: 2024-01-01 to 2024-01-02"
        );
    }

    #[test]
    fn test_format_date_range_single_day() {
        let totals = vec![day("2024-01-01")];
        assert_eq!(
            format_date_range(&totals).unwrap(),
            "From: 2024-01-01 to 2024-01-01"
        );
    }

    #[test]
    fn test_format_date_range_empty_is_none() {
        assert!(format_date_range(&[]).is_none());
    }
}
