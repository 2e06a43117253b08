//! Days-of-supply, reorder timeline, and health classification.

use chrono::{DateTime, Duration, NaiveDate, Utc};

use crate::policy::{
    CRITICAL_FLOOR_DAYS, DAYS_OF_SUPPLY_CAP, LOW_FLOOR_DAYS, LOW_LEAD_PAD_DAYS,
    MUST_ORDER_CRITICAL_DAYS, MUST_ORDER_LOW_DAYS, OVERSTOCK_FLOOR_DAYS,
};
use crate::types::{HealthStatus, ResolvedLeadTime};

/// Timeline and status for one SKU.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HealthTimeline {
    /// Days the aged stock lasts at the effective velocity. Capped at 999
    /// when there is no velocity to burn it down.
    pub days_of_supply: i64,
    /// Projected date the item runs out, when a stockout is on the horizon.
    pub stockout_date: Option<NaiveDate>,
    /// Date a purchase order must be placed to land before the trigger
    /// window opens. May already be in the past.
    pub reorder_by_date: Option<NaiveDate>,
    /// Days until `reorder_by_date`; negative when it has passed.
    pub days_until_must_order: Option<i64>,
    pub health: HealthStatus,
}

/// The (critical, low, overstock) day thresholds for a resolved lead time.
///
/// Longer supply chains push every band out: a 30-day lead makes anything
/// under 30 days of cover critical, and the overstock horizon grows with
/// the minimum order size since a big order arriving on a slow boat is
/// normal cover, not excess.
pub fn health_thresholds(lead: &ResolvedLeadTime) -> (i64, i64, i64) {
    let critical = CRITICAL_FLOOR_DAYS.max(lead.lead_time_days);
    let low = LOW_FLOOR_DAYS.max(lead.lead_time_days + LOW_LEAD_PAD_DAYS);
    let overstock = OVERSTOCK_FLOOR_DAYS
        .max(lead.min_order_weeks * 7 + lead.reorder_trigger_days + lead.lead_time_days);
    (critical, low, overstock)
}

/// Score one SKU's supply position.
///
/// With velocity, days-of-supply is `round(qty / vel * 7)` and the reorder
/// deadline is that minus the trigger window and the lead time. The first
/// matching rule decides the status:
///
/// 1. reorder deadline already passed (negative days remaining)
/// 2. under the critical threshold, or under a week to the deadline
/// 3. under the low threshold, or under two weeks to the deadline
/// 4. within the overstock horizon
/// 5. beyond it
///
/// Without velocity there is no timeline at all; the item is critical when
/// it is also out of stock and healthy otherwise.
pub fn assess_health(
    adjusted_total_qty: f64,
    effective_velocity: f64,
    lead: &ResolvedLeadTime,
    now: DateTime<Utc>,
) -> HealthTimeline {
    let (critical, low, overstock) = health_thresholds(lead);

    if effective_velocity <= 0.0 {
        let health = if adjusted_total_qty <= 0.0 {
            HealthStatus::Critical
        } else {
            HealthStatus::Healthy
        };
        return HealthTimeline {
            days_of_supply: DAYS_OF_SUPPLY_CAP,
            stockout_date: None,
            reorder_by_date: None,
            days_until_must_order: None,
            health,
        };
    }

    let days_of_supply = (adjusted_total_qty / effective_velocity * 7.0).round() as i64;

    let mut stockout_date = None;
    let mut reorder_by_date = None;
    let mut days_until_must_order = None;
    if days_of_supply < DAYS_OF_SUPPLY_CAP {
        let must_order = days_of_supply - lead.reorder_trigger_days - lead.lead_time_days;
        stockout_date = Some((now + Duration::days(days_of_supply)).date_naive());
        reorder_by_date = Some((now + Duration::days(must_order)).date_naive());
        days_until_must_order = Some(must_order);
    }

    let under = |limit: i64| matches!(days_until_must_order, Some(d) if d < limit);
    let health = if under(0) {
        HealthStatus::Critical
    } else if days_of_supply < critical || under(MUST_ORDER_CRITICAL_DAYS) {
        HealthStatus::Critical
    } else if days_of_supply < low || under(MUST_ORDER_LOW_DAYS) {
        HealthStatus::Low
    } else if days_of_supply <= overstock {
        HealthStatus::Healthy
    } else {
        HealthStatus::Overstock
    };

    HealthTimeline {
        days_of_supply,
        stockout_date,
        reorder_by_date,
        days_until_must_order,
        health,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    const DEFAULT_LEAD: ResolvedLeadTime = ResolvedLeadTime {
        lead_time_days: 14,
        reorder_trigger_days: 60,
        min_order_weeks: 22,
    };

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 25, 12, 0, 0).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn thresholds_with_default_lead() {
        // critical 14, low 30, overstock 22*7 + 60 + 14 = 228.
        assert_eq!(health_thresholds(&DEFAULT_LEAD), (14, 30, 228));
    }

    #[test]
    fn thresholds_track_long_lead_times() {
        let lead = ResolvedLeadTime {
            lead_time_days: 45,
            reorder_trigger_days: 10,
            min_order_weeks: 2,
        };
        // critical max(14,45), low max(30,59), overstock max(90, 14+10+45).
        assert_eq!(health_thresholds(&lead), (45, 59, 90));
    }

    #[test]
    fn missed_reorder_window_is_critical_despite_cover() {
        // 430 units at 70/week is 43 days of supply, comfortably above the
        // 14-day critical threshold, but the order deadline passed 31 days
        // ago (43 - 60 - 14).
        let timeline = assess_health(430.0, 70.0, &DEFAULT_LEAD, now());
        assert_eq!(timeline.days_of_supply, 43);
        assert_eq!(timeline.days_until_must_order, Some(-31));
        assert_eq!(timeline.health, HealthStatus::Critical);
        assert_eq!(timeline.stockout_date, Some(date(2026, 10, 7)));
        assert_eq!(timeline.reorder_by_date, Some(date(2026, 7, 25)));
    }

    #[test]
    fn below_critical_days_of_supply() {
        // 10 days of cover with a short trigger so the deadline rule
        // stays out of the way at the critical boundary.
        let lead = ResolvedLeadTime {
            lead_time_days: 5,
            reorder_trigger_days: 0,
            min_order_weeks: 22,
        };
        let timeline = assess_health(10.0, 7.0, &lead, now());
        assert_eq!(timeline.days_of_supply, 10);
        assert_eq!(timeline.health, HealthStatus::Critical);
    }

    #[test]
    fn deadline_inside_a_week_is_critical() {
        // 70 days of supply, deadline in 70 - 60 - 5 = 5 days.
        let lead = ResolvedLeadTime {
            lead_time_days: 5,
            reorder_trigger_days: 60,
            min_order_weeks: 22,
        };
        let timeline = assess_health(70.0, 7.0, &lead, now());
        assert_eq!(timeline.days_until_must_order, Some(5));
        assert_eq!(timeline.health, HealthStatus::Critical);
    }

    #[test]
    fn deadline_inside_two_weeks_is_low() {
        // 80 days of supply, deadline in 80 - 60 - 10 = 10 days.
        let lead = ResolvedLeadTime {
            lead_time_days: 10,
            reorder_trigger_days: 60,
            min_order_weeks: 22,
        };
        let timeline = assess_health(80.0, 7.0, &lead, now());
        assert_eq!(timeline.days_until_must_order, Some(10));
        assert_eq!(timeline.health, HealthStatus::Low);
    }

    #[test]
    fn comfortable_cover_is_healthy() {
        // 100 days of supply, deadline in 100 - 10 - 5 = 85 days,
        // overstock horizon at 22*7 + 10 + 5 = 169.
        let lead = ResolvedLeadTime {
            lead_time_days: 5,
            reorder_trigger_days: 10,
            min_order_weeks: 22,
        };
        let timeline = assess_health(100.0, 7.0, &lead, now());
        assert_eq!(timeline.health, HealthStatus::Healthy);
        assert_eq!(timeline.stockout_date, Some(date(2026, 12, 3)));
    }

    #[test]
    fn cover_beyond_horizon_is_overstock() {
        let lead = ResolvedLeadTime {
            lead_time_days: 5,
            reorder_trigger_days: 10,
            min_order_weeks: 2,
        };
        // 200 days of supply against a 90-day horizon.
        let timeline = assess_health(200.0, 7.0, &lead, now());
        assert_eq!(timeline.health, HealthStatus::Overstock);
    }

    #[test]
    fn overstock_boundary_is_inclusive() {
        let lead = ResolvedLeadTime {
            lead_time_days: 5,
            reorder_trigger_days: 10,
            min_order_weeks: 2,
        };
        // Exactly 90 days of supply is still healthy.
        let timeline = assess_health(90.0, 7.0, &lead, now());
        assert_eq!(timeline.days_of_supply, 90);
        assert_eq!(timeline.health, HealthStatus::Healthy);
    }

    #[test]
    fn zero_velocity_zero_stock_is_critical() {
        let timeline = assess_health(0.0, 0.0, &DEFAULT_LEAD, now());
        assert_eq!(timeline.health, HealthStatus::Critical);
        assert_eq!(timeline.days_of_supply, 999);
        assert_eq!(timeline.stockout_date, None);
        assert_eq!(timeline.reorder_by_date, None);
        assert_eq!(timeline.days_until_must_order, None);
    }

    #[test]
    fn zero_velocity_with_stock_is_healthy() {
        let timeline = assess_health(250.0, 0.0, &DEFAULT_LEAD, now());
        assert_eq!(timeline.health, HealthStatus::Healthy);
        assert_eq!(timeline.days_of_supply, 999);
        assert_eq!(timeline.stockout_date, None);
    }

    #[test]
    fn negative_velocity_is_treated_as_no_velocity() {
        let timeline = assess_health(10.0, -3.0, &DEFAULT_LEAD, now());
        assert_eq!(timeline.days_of_supply, 999);
        assert_eq!(timeline.health, HealthStatus::Healthy);
    }

    #[test]
    fn huge_cover_past_the_cap_has_no_dates() {
        // 1000+ days of supply: no stockout on the horizon, classified on
        // days-of-supply alone.
        let timeline = assess_health(1000.0, 7.0, &DEFAULT_LEAD, now());
        assert_eq!(timeline.days_of_supply, 1000);
        assert_eq!(timeline.stockout_date, None);
        assert_eq!(timeline.days_until_must_order, None);
        assert_eq!(timeline.health, HealthStatus::Overstock);
    }

    #[test]
    fn out_of_stock_with_velocity_is_critical_now() {
        let timeline = assess_health(0.0, 70.0, &DEFAULT_LEAD, now());
        assert_eq!(timeline.days_of_supply, 0);
        assert_eq!(timeline.stockout_date, Some(date(2026, 8, 25)));
        assert_eq!(timeline.days_until_must_order, Some(-74));
        assert_eq!(timeline.health, HealthStatus::Critical);
    }

    #[test]
    fn urgency_never_increases_with_more_cover() {
        fn severity(status: HealthStatus) -> u8 {
            match status {
                HealthStatus::Critical => 0,
                HealthStatus::Low => 1,
                HealthStatus::Healthy => 2,
                HealthStatus::Overstock => 3,
                HealthStatus::Unknown => 4,
            }
        }
        // One unit per day of cover at 7/week.
        let mut last = 0;
        for days in 0..400 {
            let timeline = assess_health(days as f64, 7.0, &DEFAULT_LEAD, now());
            let rank = severity(timeline.health);
            assert!(
                rank >= last,
                "health regressed to {} at {days} days of cover",
                timeline.health
            );
            last = rank;
        }
    }
}
