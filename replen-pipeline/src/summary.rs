//! Population rollups for the digest header.

use serde::Serialize;

use replen_engine::kpi::{round1, round2};
use replen_engine::types::{AbcClass, ComputedItem, HealthStatus};

/// Headline numbers across the whole scored population.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct InventorySummary {
    pub item_count: usize,

    pub critical_count: usize,
    pub low_count: usize,
    pub healthy_count: usize,
    pub overstock_count: usize,
    pub alert_count: usize,

    pub class_a_count: usize,
    pub class_b_count: usize,
    pub class_c_count: usize,

    // Aged units by channel.
    pub total_units: f64,
    pub amazon_units: f64,
    pub threepl_units: f64,
    pub awd_units: f64,

    // Aged stock value by channel (dollars, two decimals).
    pub total_value: f64,
    pub amazon_value: f64,
    pub threepl_value: f64,
    pub awd_value: f64,

    /// Mean turnover across items that have turns, one decimal.
    pub avg_turnover_rate: f64,
    /// Mean sell-through across items that sell, percent, one decimal.
    pub avg_sell_through_rate: f64,
}

/// Roll one pass of computed items up into the summary block.
pub fn summarize(items: &[ComputedItem]) -> InventorySummary {
    let mut summary = InventorySummary {
        item_count: items.len(),
        ..InventorySummary::default()
    };

    let mut turnover_sum = 0.0;
    let mut turnover_n = 0usize;
    let mut sell_through_sum = 0.0;
    let mut sell_through_n = 0usize;

    for item in items {
        match item.health {
            HealthStatus::Critical => summary.critical_count += 1,
            HealthStatus::Low => summary.low_count += 1,
            HealthStatus::Healthy => summary.healthy_count += 1,
            HealthStatus::Overstock => summary.overstock_count += 1,
            HealthStatus::Unknown => {}
        }
        match item.abc_class {
            AbcClass::A => summary.class_a_count += 1,
            AbcClass::B => summary.class_b_count += 1,
            AbcClass::C => summary.class_c_count += 1,
        }
        if item.alert {
            summary.alert_count += 1;
        }

        summary.total_units += item.total_qty;
        summary.amazon_units += item.amazon_qty;
        summary.threepl_units += item.threepl_qty;
        summary.awd_units += item.awd_qty;

        let cost = item.cost.max(0.0);
        summary.total_value += item.total_qty * cost;
        summary.amazon_value += item.amazon_qty * cost;
        summary.threepl_value += item.threepl_qty * cost;
        summary.awd_value += item.awd_qty * cost;

        if item.turnover_rate > 0.0 {
            turnover_sum += item.turnover_rate;
            turnover_n += 1;
        }
        if item.sell_through_rate > 0.0 {
            sell_through_sum += item.sell_through_rate;
            sell_through_n += 1;
        }
    }

    summary.total_value = round2(summary.total_value);
    summary.amazon_value = round2(summary.amazon_value);
    summary.threepl_value = round2(summary.threepl_value);
    summary.awd_value = round2(summary.awd_value);
    if turnover_n > 0 {
        summary.avg_turnover_rate = round1(turnover_sum / turnover_n as f64);
    }
    if sell_through_n > 0 {
        summary.avg_sell_through_rate = round1(sell_through_sum / sell_through_n as f64);
    }
    summary
}
