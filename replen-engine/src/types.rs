//! Shared data types for the replenishment engine.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Snapshot input
// ---------------------------------------------------------------------------

/// One raw inventory row as reported by a snapshot sync.
///
/// Rows arrive one per channel listing, so a logical SKU may appear twice
/// (base and "Shop" variant). Quantities are floats because upstream feeds
/// report them that way; negative values are treated as zero at point of use.
/// A `cost` of zero means the unit cost is unknown, and value-based KPIs
/// degrade to zero rather than erroring.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SnapshotRecord {
    pub sku: String,
    pub name: String,
    pub amazon_qty: f64,
    pub threepl_qty: f64,
    pub awd_qty: f64,
    pub amazon_inbound_qty: f64,
    pub threepl_inbound_qty: f64,
    pub cost: f64,
    /// Trailing weekly sales velocity across all channels (units/week).
    pub weekly_vel: f64,
    pub amz_weekly_vel: f64,
    pub shop_weekly_vel: f64,
    /// Model-corrected weekly velocity, when the forecaster produced one.
    pub corrected_vel: Option<f64>,
    /// Coefficient of variation of weekly demand (dimensionless).
    pub cv: f64,
    pub safety_stock: Option<f64>,
    pub seasonal_factor: Option<f64>,
    pub demand_class: Option<String>,
    /// Upstream-computed stockout risk (0-100). Passed through unchanged
    /// when present; derived from supply cover otherwise.
    pub stockout_risk: Option<f64>,
}

impl SnapshotRecord {
    /// Total on-hand units across the three stocking channels. Inbound
    /// quantities are excluded; negative channel values count as zero.
    pub fn total_qty(&self) -> f64 {
        self.amazon_qty.max(0.0) + self.threepl_qty.max(0.0) + self.awd_qty.max(0.0)
    }

    /// The velocity the decay and health stages run on: the corrected
    /// figure when the forecaster supplied one, the raw weekly velocity
    /// otherwise. Revenue ranking and unit KPIs deliberately stay on
    /// `weekly_vel`.
    pub fn effective_velocity(&self) -> f64 {
        self.corrected_vel.unwrap_or(self.weekly_vel)
    }
}

/// Capture and per-channel sync timestamps for a snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SnapshotMeta {
    /// When the snapshot as a whole was captured.
    pub captured_at: DateTime<Utc>,
    pub threepl_synced_at: Option<DateTime<Utc>>,
    pub amazon_synced_at: Option<DateTime<Utc>>,
}

impl SnapshotMeta {
    /// The freshest timestamp the reported quantities reflect. A channel
    /// sync that ran after the capture moves the baseline forward; older
    /// syncs are ignored.
    pub fn effective_data_date(&self) -> DateTime<Utc> {
        let mut effective = self.captured_at;
        for synced in [self.threepl_synced_at, self.amazon_synced_at]
            .into_iter()
            .flatten()
        {
            if synced > effective {
                effective = synced;
            }
        }
        effective
    }
}

/// A full inventory snapshot: the raw rows plus when they were captured.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InventorySnapshot {
    pub records: Vec<SnapshotRecord>,
    pub meta: SnapshotMeta,
}

// ---------------------------------------------------------------------------
// Resolved parameters
// ---------------------------------------------------------------------------

/// Lead-time parameters for one SKU after the settings cascade has run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedLeadTime {
    /// Supplier lead time in days.
    pub lead_time_days: i64,
    /// How many days of cover should remain when a purchase order is placed.
    pub reorder_trigger_days: i64,
    /// Minimum coverage an order must buy, in weeks of demand.
    pub min_order_weeks: i64,
}

// ---------------------------------------------------------------------------
// Classification enums
// ---------------------------------------------------------------------------

/// Health status of a single SKU, most urgent first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    /// Stockout imminent or the reorder window has already passed.
    Critical,
    /// Needs a purchase decision soon.
    Low,
    Healthy,
    /// Cover exceeds the overstock horizon.
    Overstock,
    /// Not yet assessed.
    #[default]
    Unknown,
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            HealthStatus::Critical => "critical",
            HealthStatus::Low => "low",
            HealthStatus::Healthy => "healthy",
            HealthStatus::Overstock => "overstock",
            HealthStatus::Unknown => "unknown",
        };
        write!(f, "{label}")
    }
}

/// Revenue-ranked ABC class. A-items carry the top 80% of annual revenue,
/// B-items the next 15%, C-items the tail.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AbcClass {
    A,
    B,
    C,
}

impl fmt::Display for AbcClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AbcClass::A => "A",
            AbcClass::B => "B",
            AbcClass::C => "C",
        };
        write!(f, "{label}")
    }
}

/// Why an opted-in SKU is alerting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertReason {
    /// Aged 3PL quantity at or below the configured floor.
    ThreeplBelowFloor,
    /// Amazon channel days-of-supply at or below the configured floor.
    AmazonDaysBelowFloor,
    /// Aged total quantity at or below the per-SKU reorder point.
    BelowReorderPoint,
}

impl fmt::Display for AlertReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AlertReason::ThreeplBelowFloor => "3PL stock at alert floor",
            AlertReason::AmazonDaysBelowFloor => "Amazon days-of-supply at alert floor",
            AlertReason::BelowReorderPoint => "total stock at reorder point",
        };
        write!(f, "{label}")
    }
}

// ---------------------------------------------------------------------------
// Computed output
// ---------------------------------------------------------------------------

/// Fully scored state of one logical SKU: aged quantities, reorder
/// timeline, health, ABC class, supply-chain KPIs, and alert flags,
/// plus the original snapshot figures retained for display.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ComputedItem {
    /// Canonical SKU with any channel-variant suffix stripped.
    pub sku: String,
    /// The raw SKU of the snapshot row this item was built from.
    pub source_sku: String,
    pub name: String,

    // Aged on-hand quantities (non-negative).
    pub amazon_qty: f64,
    pub threepl_qty: f64,
    pub awd_qty: f64,
    pub total_qty: f64,

    // Inbound stock is in transit and does not age.
    pub amazon_inbound_qty: f64,
    pub threepl_inbound_qty: f64,

    // Snapshot figures retained for display.
    pub original_total_qty: f64,
    pub cost: f64,
    pub weekly_vel: f64,
    pub amz_weekly_vel: f64,
    pub shop_weekly_vel: f64,
    pub effective_velocity: f64,
    pub cv: f64,
    pub safety_stock: Option<f64>,
    pub seasonal_factor: Option<f64>,
    pub demand_class: Option<String>,

    /// Whole days between the effective data date and `now`.
    pub days_elapsed: i64,

    // Reorder timeline.
    pub days_of_supply: i64,
    pub stockout_date: Option<NaiveDate>,
    pub reorder_by_date: Option<NaiveDate>,
    pub days_until_must_order: Option<i64>,

    pub health: HealthStatus,
    pub lead_time: ResolvedLeadTime,
    pub abc_class: AbcClass,

    // Supply-chain KPIs.
    pub turnover_rate: f64,
    pub annual_carrying_cost: f64,
    pub eoq: f64,
    pub sell_through_rate: f64,
    pub weeks_of_supply: f64,
    pub stock_to_sales_ratio: f64,
    pub stockout_risk: f64,

    pub alert: bool,
    pub alert_reasons: Vec<AlertReason>,
}

impl ComputedItem {
    /// Dollar value of aged on-hand stock.
    pub fn item_value(&self) -> f64 {
        self.total_qty * self.cost.max(0.0)
    }
}

// ---------------------------------------------------------------------------
