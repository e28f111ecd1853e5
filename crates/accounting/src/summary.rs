//! Cost-side aggregations for the dashboard stat cards.

use crate::cost::CostRecord;

/// Absolute variance above which a record is flagged for CO follow-up.
pub const HIGH_VARIANCE_THRESHOLD: f64 = 500.0;

/// Sum of inventory value over all records (0 for none).
pub fn total_inventory_value(costs: &[CostRecord]) -> f64 {
    costs.iter().map(|c| c.total_inventory_value).sum()
}

/// Records whose absolute variance strictly exceeds [`HIGH_VARIANCE_THRESHOLD`].
pub fn high_variance_count(costs: &[CostRecord]) -> usize {
    costs
        .iter()
        .filter(|c| c.variance().abs() > HIGH_VARIANCE_THRESHOLD)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn record(value: f64, planned: f64, actual: f64) -> CostRecord {
        CostRecord::new("MAT", 1.0, 1.0, value, planned, actual)
    }

    #[test]
    fn empty_set_totals_to_zero() {
        assert_eq!(total_inventory_value(&[]), 0.0);
        assert_eq!(high_variance_count(&[]), 0);
    }

    #[test]
    fn threshold_is_strict_in_both_directions() {
        let costs = vec![
            record(0.0, 1000.0, 1500.0),  // +500, not flagged
            record(0.0, 1000.0, 500.0),   // -500, not flagged
            record(0.0, 1000.0, 1500.5),  // +500.5
            record(0.0, 2250.0, 1212.5),  // -1037.5
        ];
        assert_eq!(high_variance_count(&costs), 2);
    }

    #[test]
    fn sums_seed_like_values() {
        let costs = vec![
            record(6975.0, 7000.0, 7290.0),
            record(1125.0, 2250.0, 1212.5),
            record(144000.0, 144000.0, 138000.0),
        ];
        assert_eq!(total_inventory_value(&costs), 152_100.0);
        assert_eq!(high_variance_count(&costs), 2);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: the total equals the sum of each record's value (integral
        /// inputs keep the float sum exact).
        #[test]
        fn total_equals_sum_of_parts(
            values in prop::collection::vec(0u32..1_000_000u32, 0..20)
        ) {
            let costs: Vec<CostRecord> = values
                .iter()
                .map(|v| record(*v as f64, 0.0, 0.0))
                .collect();
            let expected: u64 = values.iter().map(|v| *v as u64).sum();
            prop_assert_eq!(total_inventory_value(&costs), expected as f64);
        }
    }
}
