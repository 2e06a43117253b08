//! Revenue-ranked ABC classification.
//!
//! This is the one stage that needs the whole population at once: an
//! item's class depends on where it falls in the cumulative revenue
//! ranking, not on the item alone.

use std::cmp::Ordering;

use crate::policy::{ABC_A_CUTOFF_PCT, ABC_B_CUTOFF_PCT, WEEKS_PER_YEAR};
use crate::types::AbcClass;

/// One item's stake in the revenue ranking.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevenueRank<'a> {
    pub sku: &'a str,
    pub annual_revenue: f64,
}

/// Projected annual revenue for an item: raw weekly velocity annualized at
/// unit cost. Uses the reported velocity on purpose, so a forecaster
/// correction cannot move an item between classes.
pub fn annual_revenue(weekly_vel: f64, cost: f64) -> f64 {
    weekly_vel.max(0.0) * WEEKS_PER_YEAR * cost.max(0.0)
}

/// Classify every entry by cumulative revenue share, returned in input
/// order.
///
/// Entries are ranked by revenue descending with ties broken by SKU
/// ascending, so equal-revenue items always classify the same way from run
/// to run. The share each item lands on includes its own revenue: at or
/// under 80% is A, at or under 95% is B, the tail is C. A population with
/// no revenue at all is entirely C.
pub fn classify_abc(entries: &[RevenueRank<'_>]) -> Vec<AbcClass> {
    if entries.is_empty() {
        return Vec::new();
    }

    let total: f64 = entries.iter().map(|e| e.annual_revenue).sum();
    if total <= 0.0 {
        return vec![AbcClass::C; entries.len()];
    }

    let mut order: Vec<usize> = (0..entries.len()).collect();
    order.sort_by(|&a, &b| {
        entries[b]
            .annual_revenue
            .partial_cmp(&entries[a].annual_revenue)
            .unwrap_or(Ordering::Equal)
            .then_with(|| entries[a].sku.cmp(entries[b].sku))
    });

    let mut classes = vec![AbcClass::C; entries.len()];
    let mut running = 0.0;
    for &i in &order {
        running += entries[i].annual_revenue;
        let share = running / total * 100.0;
        classes[i] = if share <= ABC_A_CUTOFF_PCT {
            AbcClass::A
        } else if share <= ABC_B_CUTOFF_PCT {
            AbcClass::B
        } else {
            AbcClass::C
        };
    }
    classes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(sku: &str, annual_revenue: f64) -> RevenueRank<'_> {
        RevenueRank {
            sku,
            annual_revenue,
        }
    }

    #[test]
    fn annual_revenue_is_weekly_times_52_at_cost() {
        assert_eq!(annual_revenue(10.0, 2.5), 1300.0);
        assert_eq!(annual_revenue(0.0, 2.5), 0.0);
        // Unknown cost degrades to zero revenue rather than erroring.
        assert_eq!(annual_revenue(10.0, 0.0), 0.0);
        assert_eq!(annual_revenue(-5.0, 2.5), 0.0);
    }

    #[test]
    fn partitions_population_at_80_and_95_percent() {
        // Shares: 60%, then 90% cumulative, then 95%, then 100%.
        let entries = vec![
            entry("D", 50.0),
            entry("A", 600.0),
            entry("C", 50.0),
            entry("B", 300.0),
        ];
        let classes = classify_abc(&entries);
        assert_eq!(
            classes,
            vec![AbcClass::C, AbcClass::A, AbcClass::B, AbcClass::B]
        );
    }

    #[test]
    fn class_is_assigned_in_input_order() {
        let entries = vec![entry("LOW", 1.0), entry("HIGH", 99.0)];
        let classes = classify_abc(&entries);
        assert_eq!(classes[0], AbcClass::C);
        assert_eq!(classes[1], AbcClass::A);
    }

    #[test]
    fn equal_revenue_ties_rank_by_sku() {
        // Four equal items land on 25/50/75/100% cumulative. The first
        // three by SKU order are A, the last is C.
        let entries = vec![
            entry("D", 100.0),
            entry("B", 100.0),
            entry("C", 100.0),
            entry("A", 100.0),
        ];
        let classes = classify_abc(&entries);
        assert_eq!(
            classes,
            vec![AbcClass::C, AbcClass::A, AbcClass::A, AbcClass::A]
        );
    }

    #[test]
    fn zero_revenue_population_is_all_c() {
        let entries = vec![entry("A", 0.0), entry("B", 0.0)];
        assert_eq!(classify_abc(&entries), vec![AbcClass::C, AbcClass::C]);
    }

    #[test]
    fn single_item_population_is_c() {
        // One item lands on 100% cumulative share.
        assert_eq!(classify_abc(&[entry("ONLY", 500.0)]), vec![AbcClass::C]);
    }

    #[test]
    fn empty_population_yields_nothing() {
        assert_eq!(classify_abc(&[]), Vec::<AbcClass>::new());
    }

    #[test]
    fn dominant_item_is_a_when_exactly_at_cutoff() {
        // 80 of 100 is exactly the A cutoff, inclusive.
        let entries = vec![entry("BIG", 80.0), entry("REST", 20.0)];
        assert_eq!(classify_abc(&entries), vec![AbcClass::A, AbcClass::C]);
    }

    #[test]
    fn every_item_gets_a_class() {
        let entries: Vec<RevenueRank> = vec![
            entry("A1", 500.0),
            entry("A2", 0.0),
            entry("A3", 12.5),
            entry("A4", 80.0),
            entry("A5", 3.0),
        ];
        let classes = classify_abc(&entries);
        assert_eq!(classes.len(), entries.len());
    }
}
