//! Cost aggregation into per-day buckets.
//!
//! The chart shows days in the order the report mentions them, so the
//! reduction keeps an explicit first-seen ordering rather than sorting
//! chronologically.

use std::collections::HashMap;

use report_core::models::{DailyTotal, UsageRecord};

/// Stateless helper that folds priced records into daily totals.
pub struct DayAggregator;

impl DayAggregator {
    /// Fold `records` into one [`DailyTotal`] per distinct date.
    ///
    /// The first occurrence of a date establishes its position in the
    /// output; every later occurrence adds its price into the existing
    /// bucket. The sum over the result equals the sum over the input
    /// prices (modulo floating-point rounding).
    pub fn aggregate_daily(records: &[UsageRecord]) -> Vec<DailyTotal> {
        let mut totals: Vec<DailyTotal> = Vec::new();
        let mut slot_by_date: HashMap<&str, usize> = HashMap::new();

        for record in records {
            match slot_by_date.get(record.date.as_str()) {
                Some(&slot) => totals[slot].price += record.price,
                None => {
                    slot_by_date.insert(record.date.as_str(), totals.len());
                    totals.push(DailyTotal {
                        date: record.date.clone(),
                        price: record.price,
                    });
                }
            }
        }

        totals
    }

    /// Sum all per-day totals into the grand total.
    pub fn grand_total(totals: &[DailyTotal]) -> f64 {
        totals.iter().map(|t| t.price).sum()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn make_record(date: &str, price: f64) -> UsageRecord {
        UsageRecord {
            actions_workflow: "ci.yml".to_string(),
            date: date.to_string(),
            price_per_unit: "$1.00".to_string(),
            product: "Actions".to_string(),
            quantity: price,
            repository_slug: "octo/widgets".to_string(),
            unit_type: "minute".to_string(),
            price,
        }
    }

    // ── aggregate_daily ──────────────────────────────────────────────────────

    #[test]
    fn test_aggregate_groups_by_date_first_seen_order() {
        let records = vec![
            make_record("2024-01-01", 1.0),
            make_record("2024-01-02", 2.0),
            make_record("2024-01-01", 3.0),
        ];
        let totals = DayAggregator::aggregate_daily(&records);

        assert_eq!(totals.len(), 2);
        assert_eq!(totals[0].date, "2024-01-01");
        assert!((totals[0].price - 4.0).abs() < 1e-9);
        assert_eq!(totals[1].date, "2024-01-02");
        assert!((totals[1].price - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_aggregate_preserves_input_order_not_chronological() {
        // A later date appearing first must stay first.
        let records = vec![
            make_record("2024-03-09", 5.0),
            make_record("2024-03-01", 1.0),
            make_record("2024-03-09", 5.0),
        ];
        let totals = DayAggregator::aggregate_daily(&records);

        let dates: Vec<&str> = totals.iter().map(|t| t.date.as_str()).collect();
        assert_eq!(dates, vec!["2024-03-09", "2024-03-01"]);
        assert!((totals[0].price - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_aggregate_empty_input() {
        assert!(DayAggregator::aggregate_daily(&[]).is_empty());
    }

    #[test]
    fn test_aggregate_single_date_many_rows() {
        let records: Vec<UsageRecord> =
            (0..10).map(|i| make_record("2024-01-01", i as f64)).collect();
        let totals = DayAggregator::aggregate_daily(&records);

        assert_eq!(totals.len(), 1);
        assert!((totals[0].price - 45.0).abs() < 1e-9);
    }

    // ── grand_total ──────────────────────────────────────────────────────────

    #[test]
    fn test_grand_total_sums_days() {
        let records = vec![
            make_record("2024-01-01", 1.0),
            make_record("2024-01-02", 2.0),
            make_record("2024-01-01", 3.0),
        ];
        let totals = DayAggregator::aggregate_daily(&records);
        assert!((DayAggregator::grand_total(&totals) - 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_grand_total_empty() {
        assert_eq!(DayAggregator::grand_total(&[]), 0.0);
    }

    #[test]
    fn test_fold_property_day_sum_equals_record_sum() {
        // Day bucketing must never gain or lose money.
        let records: Vec<UsageRecord> = (0..50)
            .map(|i| make_record(&format!("2024-01-{:02}", (i * 7) % 9 + 1), 0.013 * i as f64))
            .collect();
        let record_sum: f64 = records.iter().map(|r| r.price).sum();
        let totals = DayAggregator::aggregate_daily(&records);
        let day_sum = DayAggregator::grand_total(&totals);

        assert!((record_sum - day_sum).abs() < 1e-9);
    }
}
