//! Threshold alerts for opted-in SKUs.
//!
//! Alerts are an opt-in channel: only SKUs whose override block sets
//! `alert_enabled` are ever evaluated. All quantity checks run on aged
//! quantities so a stale snapshot cannot mask a breach that has already
//! happened.

use crate::decay::DecayedQuantities;
use crate::policy::DAYS_OF_SUPPLY_CAP;
use crate::settings::{ChannelRules, SkuOverride};
use crate::types::{AlertReason, SnapshotRecord};

/// Alert evaluation result for one SKU.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AlertOutcome {
    pub alert: bool,
    /// Every threshold that tripped, in evaluation order.
    pub reasons: Vec<AlertReason>,
}

/// Evaluate the three alert checks for one SKU.
///
/// Channel floors resolve per SKU first and fall back to the channel
/// rules; the reorder point is per-SKU only. A floor configured nowhere
/// disables its check. Checks are independent, so one SKU can trip
/// several at once.
pub fn evaluate_alerts(
    record: &SnapshotRecord,
    aged: &DecayedQuantities,
    override_: Option<&SkuOverride>,
    channel_rules: &ChannelRules,
) -> AlertOutcome {
    let Some(override_) = override_ else {
        return AlertOutcome::default();
    };
    if !override_.alert_enabled {
        return AlertOutcome::default();
    }

    let mut reasons = Vec::new();

    let threepl_floor = override_
        .threepl_alert_qty
        .or(channel_rules.threepl_alert_qty);
    if let Some(floor) = threepl_floor {
        if aged.threepl_qty <= floor {
            reasons.push(AlertReason::ThreeplBelowFloor);
        }
    }

    let amazon_floor = override_
        .amazon_alert_days
        .or(channel_rules.amazon_alert_days);
    if let Some(floor) = amazon_floor {
        if amazon_days_of_supply(record, aged) <= floor as f64 {
            reasons.push(AlertReason::AmazonDaysBelowFloor);
        }
    }

    if let Some(reorder_point) = override_.reorder_point {
        if aged.total_qty <= reorder_point {
            reasons.push(AlertReason::BelowReorderPoint);
        }
    }

    AlertOutcome {
        alert: !reasons.is_empty(),
        reasons,
    }
}

/// Days the aged Amazon stock lasts at the Amazon channel velocity,
/// capped at 999 when that channel is not selling.
fn amazon_days_of_supply(record: &SnapshotRecord, aged: &DecayedQuantities) -> f64 {
    let daily = record.amz_weekly_vel.max(0.0) / 7.0;
    if daily > 0.0 {
        aged.amazon_qty / daily
    } else {
        DAYS_OF_SUPPLY_CAP as f64
    }
}
