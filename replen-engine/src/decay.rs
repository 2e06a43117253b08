//! Temporal decay: age snapshot quantities forward to `now`.
//!
//! Snapshots are often hours or days old by the time a digest runs. Rather
//! than score stale counts, the engine subtracts the stock the item has
//! presumably sold since the data date, at the item's effective velocity.
//! Inbound stock is in transit and untouched by sales, so it never decays.

use chrono::{DateTime, Utc};

use crate::types::{SnapshotMeta, SnapshotRecord};

/// Aged channel quantities for one record.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DecayedQuantities {
    pub amazon_qty: f64,
    pub threepl_qty: f64,
    pub awd_qty: f64,
    /// Aged total across channels, floored at zero.
    pub total_qty: f64,
    /// Whole days between the effective data date and `now`, floored at zero.
    pub days_elapsed: i64,
}

/// Age one record's quantities from the snapshot's effective data date
/// to `now`.
///
/// The estimated sales are `round(effective_velocity / 7 * days_elapsed)`
/// against the total; channels are then scaled by the surviving fraction
/// and rounded, so the aged channel split mirrors the reported one. A
/// snapshot from the future, or from today, passes through unchanged.
pub fn decay_quantities(
    record: &SnapshotRecord,
    meta: &SnapshotMeta,
    now: DateTime<Utc>,
) -> DecayedQuantities {
    let amazon = record.amazon_qty.max(0.0);
    let threepl = record.threepl_qty.max(0.0);
    let awd = record.awd_qty.max(0.0);
    let original_total = amazon + threepl + awd;

    let days_elapsed = (now - meta.effective_data_date()).num_days().max(0);
    if days_elapsed == 0 {
        return DecayedQuantities {
            amazon_qty: amazon,
            threepl_qty: threepl,
            awd_qty: awd,
            total_qty: original_total,
            days_elapsed: 0,
        };
    }

    let daily_velocity = record.effective_velocity().max(0.0) / 7.0;
    let estimated_sold = (daily_velocity * days_elapsed as f64).round();
    let total_qty = (original_total - estimated_sold).max(0.0);

    let ratio = if original_total > 0.0 {
        total_qty / original_total
    } else {
        1.0
    };

    DecayedQuantities {
        amazon_qty: (amazon * ratio).round(),
        threepl_qty: (threepl * ratio).round(),
        awd_qty: (awd * ratio).round(),
        total_qty,
        days_elapsed,
    }
}
