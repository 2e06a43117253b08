//! Per-item supply-chain KPIs.
//!
//! Every formula degrades to a defined value instead of erroring when a
//! denominator is missing: value KPIs go to zero without a unit cost, and
//! supply ratios report the 999 cap without velocity.

use crate::policy::{
    CARRYING_COST_RATE, CV_RISK_WEIGHT, ORDER_COST, RISK_BASELINE, RISK_UNDER_HALF_LEAD,
    RISK_UNDER_ONE_HALF_LEAD, RISK_UNDER_ONE_LEAD, RISK_UNDER_TWO_HALF_LEAD, WEEKS_OF_SUPPLY_CAP,
    WEEKS_PER_MONTH, WEEKS_PER_YEAR,
};
use crate::types::SnapshotRecord;

/// Supply-chain metrics for one item.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SupplyChainKpis {
    /// Annualized inventory turns, one decimal.
    pub turnover_rate: f64,
    /// Annual cost of carrying the aged stock, two decimals (dollars).
    pub annual_carrying_cost: f64,
    /// Economic order quantity in whole units.
    pub eoq: f64,
    /// Share of a month's supply that sells through, percent, two decimals.
    pub sell_through_rate: f64,
    /// Aged stock in weeks of demand, one decimal, capped at 999.
    pub weeks_of_supply: f64,
    /// Aged stock over monthly demand, one decimal, capped at 999.
    pub stock_to_sales_ratio: f64,
    /// Stockout likelihood, 0-100.
    pub stockout_risk: f64,
}

/// Round to one decimal place.
///
/// `round1(3.14)` is `3.1`, `round1(3.15)` is `3.2`.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Round to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Compute the KPI block for one item from its raw record and the aged
/// quantities and timeline already derived from it.
///
/// Unit KPIs run on the reported `weekly_vel`; only `stockout_risk` looks
/// at the (supply-cover) timeline, which runs on the effective velocity.
pub fn compute_kpis(
    record: &SnapshotRecord,
    adjusted_total_qty: f64,
    days_of_supply: i64,
    lead_time_days: i64,
) -> SupplyChainKpis {
    let weekly_vel = record.weekly_vel.max(0.0);
    let cost = record.cost.max(0.0);

    let annual_units = weekly_vel * WEEKS_PER_YEAR;
    let annual_demand_cost = annual_units * cost;
    let item_value = adjusted_total_qty * cost;

    let turnover_rate = if item_value > 0.0 {
        round1(annual_demand_cost / item_value)
    } else {
        0.0
    };

    let annual_carrying_cost = round2(item_value * CARRYING_COST_RATE);

    let holding_cost = cost * CARRYING_COST_RATE;
    let eoq = if holding_cost > 0.0 && annual_units > 0.0 {
        (2.0 * annual_units * ORDER_COST / holding_cost).sqrt().ceil()
    } else {
        0.0
    };

    let monthly_vel = weekly_vel * WEEKS_PER_MONTH;
    let sell_through_denom = monthly_vel + adjusted_total_qty;
    let sell_through_rate = if sell_through_denom > 0.0 {
        round2(monthly_vel / sell_through_denom * 100.0)
    } else {
        0.0
    };

    let weeks_of_supply = if weekly_vel > 0.0 {
        round1(adjusted_total_qty / weekly_vel)
    } else {
        WEEKS_OF_SUPPLY_CAP
    };

    let stock_to_sales_ratio = if monthly_vel > 0.0 {
        round1(adjusted_total_qty / monthly_vel)
    } else {
        WEEKS_OF_SUPPLY_CAP
    };

    let stockout_risk = stockout_risk(record, days_of_supply, lead_time_days);

    SupplyChainKpis {
        turnover_rate,
        annual_carrying_cost,
        eoq,
        sell_through_rate,
        weeks_of_supply,
        stock_to_sales_ratio,
        stockout_risk,
    }
}

/// Stockout risk for one item, 0-100.
///
/// An upstream model's figure passes through untouched. Otherwise the base
/// risk comes from how many lead times of cover remain, plus a demand
/// variability surcharge of `cv * 15`, clamped into range. No velocity
/// means nothing is draining the stock, so the risk is zero.
fn stockout_risk(record: &SnapshotRecord, days_of_supply: i64, lead_time_days: i64) -> f64 {
    if let Some(risk) = record.stockout_risk {
        return risk;
    }
    if record.weekly_vel.max(0.0) <= 0.0 {
        return 0.0;
    }

    let lead_cover = days_of_supply as f64 / lead_time_days.max(1) as f64;
    let base = if lead_cover < 0.5 {
        RISK_UNDER_HALF_LEAD
    } else if lead_cover < 1.0 {
        RISK_UNDER_ONE_LEAD
    } else if lead_cover < 1.5 {
        RISK_UNDER_ONE_HALF_LEAD
    } else if lead_cover < 2.5 {
        RISK_UNDER_TWO_HALF_LEAD
    } else {
        RISK_BASELINE
    };

    (base + record.cv.max(0.0) * CV_RISK_WEIGHT).clamp(0.0, 100.0)
}
