//! Flat CSV export of scored items, one row per SKU.

use std::io::Write;

use serde::Serialize;

use replen_engine::types::ComputedItem;

use crate::error::{CliError, CliResult};

/// One scored item flattened for spreadsheet use. Alert reasons collapse
/// to a `;`-joined cell; absent dates and deadlines stay empty.
#[derive(Serialize)]
struct ExportRow<'a> {
    sku: &'a str,
    source_sku: &'a str,
    name: &'a str,
    health: String,
    abc_class: String,
    total_qty: f64,
    amazon_qty: f64,
    threepl_qty: f64,
    awd_qty: f64,
    amazon_inbound_qty: f64,
    threepl_inbound_qty: f64,
    days_elapsed: i64,
    days_of_supply: i64,
    stockout_date: Option<chrono::NaiveDate>,
    reorder_by_date: Option<chrono::NaiveDate>,
    days_until_must_order: Option<i64>,
    lead_time_days: i64,
    reorder_trigger_days: i64,
    min_order_weeks: i64,
    weekly_vel: f64,
    effective_velocity: f64,
    cost: f64,
    turnover_rate: f64,
    annual_carrying_cost: f64,
    eoq: f64,
    sell_through_rate: f64,
    weeks_of_supply: f64,
    stock_to_sales_ratio: f64,
    stockout_risk: f64,
    alert: bool,
    alert_reasons: String,
}

impl<'a> ExportRow<'a> {
    fn from_item(item: &'a ComputedItem) -> Self {
        Self {
            sku: &item.sku,
            source_sku: &item.source_sku,
            name: &item.name,
            health: item.health.to_string(),
            abc_class: item.abc_class.to_string(),
            total_qty: item.total_qty,
            amazon_qty: item.amazon_qty,
            threepl_qty: item.threepl_qty,
            awd_qty: item.awd_qty,
            amazon_inbound_qty: item.amazon_inbound_qty,
            threepl_inbound_qty: item.threepl_inbound_qty,
            days_elapsed: item.days_elapsed,
            days_of_supply: item.days_of_supply,
            stockout_date: item.stockout_date,
            reorder_by_date: item.reorder_by_date,
            days_until_must_order: item.days_until_must_order,
            lead_time_days: item.lead_time.lead_time_days,
            reorder_trigger_days: item.lead_time.reorder_trigger_days,
            min_order_weeks: item.lead_time.min_order_weeks,
            weekly_vel: item.weekly_vel,
            effective_velocity: item.effective_velocity,
            cost: item.cost,
            turnover_rate: item.turnover_rate,
            annual_carrying_cost: item.annual_carrying_cost,
            eoq: item.eoq,
            sell_through_rate: item.sell_through_rate,
            weeks_of_supply: item.weeks_of_supply,
            stock_to_sales_ratio: item.stock_to_sales_ratio,
            stockout_risk: item.stockout_risk,
            alert: item.alert,
            alert_reasons: item
                .alert_reasons
                .iter()
                .map(|reason| reason.to_string())
                .collect::<Vec<_>>()
                .join("; "),
        }
    }
}

pub fn write_items<W: Write>(writer: W, items: &[ComputedItem]) -> Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for item in items {
        csv_writer.serialize(ExportRow::from_item(item))?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn write_items_csv(path: &str, items: &[ComputedItem]) -> CliResult<()> {
    let file = std::fs::File::create(path).map_err(|source| CliError::Write {
        path: path.to_string(),
        source: source.into(),
    })?;
    write_items(file, items).map_err(|source| CliError::Write {
        path: path.to_string(),
        source,
    })?;
    log::info!("exported {} items to {path}", items.len());
    Ok(())
}
