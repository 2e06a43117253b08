//! Centralized policy constants for replenishment scoring.
//!
//! Every tunable the engine relies on lives here so operational policy can
//! be audited in one place. Settings files may override the lead-time trio
//! per deployment; the remaining constants are fixed business policy.

/// Suffix that marks a web-shop channel variant of a SKU ("ABCShop" is the
/// shop listing of "ABC"). Matched case-insensitively.
pub const SHOP_VARIANT_SUFFIX: &str = "Shop";

/// Lead time assumed when neither SKU, category, nor global settings
/// provide one (days).
pub const FALLBACK_LEAD_TIME_DAYS: i64 = 14;

/// Reorder trigger window assumed when settings provide none (days).
pub const FALLBACK_REORDER_TRIGGER_DAYS: i64 = 60;

/// Minimum order coverage assumed when settings provide none (weeks).
pub const FALLBACK_MIN_ORDER_WEEKS: i64 = 22;

/// Floor for the critical days-of-supply threshold. Items under
/// `max(this, lead_time)` days of cover are critical (days).
pub const CRITICAL_FLOOR_DAYS: i64 = 14;

/// Floor for the low-stock threshold, `max(this, lead_time + LOW_LEAD_PAD_DAYS)`.
pub const LOW_FLOOR_DAYS: i64 = 30;

/// Padding added to lead time when deriving the low-stock threshold (days).
pub const LOW_LEAD_PAD_DAYS: i64 = 14;

/// Floor for the overstock threshold,
/// `max(this, min_order_weeks * 7 + reorder_trigger + lead_time)` (days).
pub const OVERSTOCK_FLOOR_DAYS: i64 = 90;

/// Days-of-supply reported when velocity is zero. Treated as "no stockout
/// on the horizon"; timeline fields stay unset at or above this value.
pub const DAYS_OF_SUPPLY_CAP: i64 = 999;

/// Weeks-of-supply / stock-to-sales sentinel for zero-velocity items.
pub const WEEKS_OF_SUPPLY_CAP: f64 = 999.0;

/// Days-until-must-order below this puts an item in the critical band.
pub const MUST_ORDER_CRITICAL_DAYS: i64 = 7;

/// Days-until-must-order below this puts an item in the low band.
pub const MUST_ORDER_LOW_DAYS: i64 = 14;

/// Cumulative revenue share (percent) covered by class A.
pub const ABC_A_CUTOFF_PCT: f64 = 80.0;

/// Cumulative revenue share (percent) covered by classes A and B together.
pub const ABC_B_CUTOFF_PCT: f64 = 95.0;

/// Annual carrying cost as a fraction of on-hand inventory value.
pub const CARRYING_COST_RATE: f64 = 0.25;

/// Fixed cost charged per purchase order in the EOQ model (dollars).
pub const ORDER_COST: f64 = 150.0;

/// Average weeks per month used for monthly demand conversion.
pub const WEEKS_PER_MONTH: f64 = 4.33;

/// Weeks per year used to annualize weekly velocity.
pub const WEEKS_PER_YEAR: f64 = 52.0;

/// Stockout risk contributed per unit of demand variability (cv).
pub const CV_RISK_WEIGHT: f64 = 15.0;

/// Base stockout risk bands on days-of-supply / lead-time.
/// Under half a lead time of cover is a near-certain stockout.
pub const RISK_UNDER_HALF_LEAD: f64 = 95.0;
pub const RISK_UNDER_ONE_LEAD: f64 = 80.0;
pub const RISK_UNDER_ONE_HALF_LEAD: f64 = 50.0;
pub const RISK_UNDER_TWO_HALF_LEAD: f64 = 25.0;
pub const RISK_BASELINE: f64 = 5.0;
