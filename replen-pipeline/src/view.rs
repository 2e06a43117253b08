//! The full scoring pass: snapshot in, computed items out.

use chrono::{DateTime, Utc};
use rayon::prelude::*;

use replen_engine::abc::{annual_revenue, classify_abc, RevenueRank};
use replen_engine::alerts::evaluate_alerts;
use replen_engine::decay::decay_quantities;
use replen_engine::health::assess_health;
use replen_engine::kpi::compute_kpis;
use replen_engine::normalize::normalize_snapshot;
use replen_engine::settings::{LeadTimeResolver, ReplenSettings};
use replen_engine::sku_key::canonical_sku;
use replen_engine::types::{
    AbcClass, ComputedItem, InventorySnapshot, SnapshotMeta, SnapshotRecord,
};

/// Run every scoring stage over a snapshot.
///
/// Output order matches the normalized snapshot order (first appearance
/// per SKU), and the whole pass is deterministic for identical inputs:
/// `now` is an argument, not a clock read. Per-item scoring fans out
/// across threads; the ABC pass then ranks the whole population in one
/// sweep and stamps classes back onto the items.
pub fn compute_inventory_view(
    snapshot: &InventorySnapshot,
    settings: &ReplenSettings,
    now: DateTime<Utc>,
) -> Vec<ComputedItem> {
    let normalized = normalize_snapshot(&snapshot.records);
    let resolver = LeadTimeResolver::new(settings);

    let mut items: Vec<ComputedItem> = normalized
        .par_iter()
        .map(|record| score_item(record, &resolver, &snapshot.meta, now))
        .collect();

    let classes = {
        let entries: Vec<RevenueRank> = items
            .iter()
            .map(|item| RevenueRank {
                sku: item.sku.as_str(),
                annual_revenue: annual_revenue(item.weekly_vel, item.cost),
            })
            .collect();
        classify_abc(&entries)
    };
    for (item, class) in items.iter_mut().zip(classes) {
        item.abc_class = class;
    }

    log::info!(
        "scored {} items from {} snapshot rows",
        items.len(),
        snapshot.records.len()
    );
    items
}

/// Score one canonical record: decay, timeline, KPIs, alerts. The ABC
/// class is stamped on in the population pass afterwards.
fn score_item(
    record: &SnapshotRecord,
    resolver: &LeadTimeResolver<'_>,
    meta: &SnapshotMeta,
    now: DateTime<Utc>,
) -> ComputedItem {
    let lead = resolver.resolve(&record.sku);
    let aged = decay_quantities(record, meta, now);
    let timeline = assess_health(aged.total_qty, record.effective_velocity(), &lead, now);
    let kpis = compute_kpis(record, aged.total_qty, timeline.days_of_supply, lead.lead_time_days);
    let alerts = evaluate_alerts(
        record,
        &aged,
        resolver.override_for(&record.sku),
        resolver.channel_rules(),
    );

    ComputedItem {
        sku: canonical_sku(&record.sku).to_string(),
        source_sku: record.sku.clone(),
        name: record.name.clone(),

        amazon_qty: aged.amazon_qty,
        threepl_qty: aged.threepl_qty,
        awd_qty: aged.awd_qty,
        total_qty: aged.total_qty,

        amazon_inbound_qty: record.amazon_inbound_qty.max(0.0),
        threepl_inbound_qty: record.threepl_inbound_qty.max(0.0),

        original_total_qty: record.total_qty(),
        cost: record.cost,
        weekly_vel: record.weekly_vel,
        amz_weekly_vel: record.amz_weekly_vel,
        shop_weekly_vel: record.shop_weekly_vel,
        effective_velocity: record.effective_velocity(),
        cv: record.cv,
        safety_stock: record.safety_stock,
        seasonal_factor: record.seasonal_factor,
        demand_class: record.demand_class.clone(),

        days_elapsed: aged.days_elapsed,

        days_of_supply: timeline.days_of_supply,
        stockout_date: timeline.stockout_date,
        reorder_by_date: timeline.reorder_by_date,
        days_until_must_order: timeline.days_until_must_order,

        health: timeline.health,
        lead_time: lead,
        abc_class: AbcClass::C,

        turnover_rate: kpis.turnover_rate,
        annual_carrying_cost: kpis.annual_carrying_cost,
        eoq: kpis.eoq,
        sell_through_rate: kpis.sell_through_rate,
        weeks_of_supply: kpis.weeks_of_supply,
        stock_to_sales_ratio: kpis.stock_to_sales_ratio,
        stockout_risk: kpis.stockout_risk,

        alert: alerts.alert,
        alert_reasons: alerts.reasons,
    }
}
