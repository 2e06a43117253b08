//! Command-line digest for the inventory replenishment engine.
//!
//! Reads a snapshot CSV (plus optional TOML settings), scores every SKU as
//! of an explicit or current instant, and prints either a human digest or
//! the full JSON payload. Optionally exports all scored items to CSV.

mod error;
mod export;
mod settings_toml;
mod snapshot_csv;

use std::time::Instant;

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use replen_engine::settings::ReplenSettings;
use replen_engine::types::{ComputedItem, InventorySnapshot, SnapshotMeta};
use replen_pipeline::{compute_inventory_view, rank_by_urgency, summarize, InventorySummary};

use crate::error::{CliError, CliResult};

const DEFAULT_TOP: usize = 15;

// ---------------------------------------------------------------------------
// Arguments
// ---------------------------------------------------------------------------

#[derive(Debug, PartialEq)]
struct CliArgs {
    snapshot_path: String,
    settings_path: Option<String>,
    captured_at: Option<DateTime<Utc>>,
    threepl_synced_at: Option<DateTime<Utc>>,
    amazon_synced_at: Option<DateTime<Utc>>,
    now: Option<DateTime<Utc>>,
    top: usize,
    json: bool,
    export_path: Option<String>,
}

fn print_usage() {
    eprintln!("Usage: replen-server <snapshot.csv> [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --settings <file.toml>   replenishment settings (built-in defaults when omitted)");
    eprintln!("  --captured-at <when>     when the snapshot was captured (default: now)");
    eprintln!("  --threepl-synced <when>  last 3PL sync, if later than the capture");
    eprintln!("  --amazon-synced <when>   last Amazon sync, if later than the capture");
    eprintln!("  --now <when>             score as of this instant (default: system clock)");
    eprintln!("  --top <n>                rows in the urgent list (default: {DEFAULT_TOP})");
    eprintln!("  --json                   emit the full JSON payload instead of the digest");
    eprintln!("  --export <out.csv>       also write every scored item to a CSV");
    eprintln!();
    eprintln!("<when> accepts RFC 3339 or YYYY-MM-DD (midnight UTC).");
    eprintln!();
    eprintln!("Example:");
    eprintln!("  replen-server fixtures/sample_snapshot.csv --settings fixtures/settings.toml \\");
    eprintln!("      --captured-at 2026-08-18 --now 2026-08-25 --top 10");
}

fn parse_args(args: &[String]) -> Result<CliArgs, String> {
    let mut snapshot_path: Option<String> = None;
    let mut settings_path = None;
    let mut captured_at = None;
    let mut threepl_synced_at = None;
    let mut amazon_synced_at = None;
    let mut now = None;
    let mut top = DEFAULT_TOP;
    let mut json = false;
    let mut export_path = None;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--settings" => settings_path = Some(take_value(&mut iter, arg)?),
            "--captured-at" => captured_at = Some(parse_when(&take_value(&mut iter, arg)?)?),
            "--threepl-synced" => {
                threepl_synced_at = Some(parse_when(&take_value(&mut iter, arg)?)?)
            }
            "--amazon-synced" => {
                amazon_synced_at = Some(parse_when(&take_value(&mut iter, arg)?)?)
            }
            "--now" => now = Some(parse_when(&take_value(&mut iter, arg)?)?),
            "--top" => {
                let value = take_value(&mut iter, arg)?;
                top = value
                    .parse::<usize>()
                    .map_err(|_| format!("--top needs a number, got {value:?}"))?;
            }
            "--json" => json = true,
            "--export" => export_path = Some(take_value(&mut iter, arg)?),
            other if other.starts_with('-') => return Err(format!("unknown flag {other}")),
            other => {
                if snapshot_path.is_some() {
                    return Err(format!("unexpected extra argument {other:?}"));
                }
                snapshot_path = Some(other.to_string());
            }
        }
    }

    Ok(CliArgs {
        snapshot_path: snapshot_path.ok_or("missing snapshot CSV path")?,
        settings_path,
        captured_at,
        threepl_synced_at,
        amazon_synced_at,
        now,
        top,
        json,
        export_path,
    })
}

fn take_value(iter: &mut std::slice::Iter<'_, String>, flag: &str) -> Result<String, String> {
    iter.next()
        .cloned()
        .ok_or_else(|| format!("{flag} needs a value"))
}

fn parse_when(value: &str) -> Result<DateTime<Utc>, String> {
    parse_timestamp(value).map_err(|error| error.to_string())
}

/// Accepts RFC 3339 or a plain date, which counts as midnight UTC.
fn parse_timestamp(value: &str) -> CliResult<DateTime<Utc>> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(value) {
        return Ok(instant.with_timezone(&Utc));
    }
    if let Ok(date) = value.parse::<NaiveDate>() {
        if let Some(instant) = date.and_hms_opt(0, 0, 0) {
            return Ok(instant.and_utc());
        }
    }
    Err(CliError::Timestamp {
        value: value.to_string(),
    })
}

// ---------------------------------------------------------------------------
// Scoring run
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct DigestPayload<'a> {
    generated_at: DateTime<Utc>,
    data_date: DateTime<Utc>,
    summary: &'a InventorySummary,
    items: &'a [ComputedItem],
}

fn run(args: &CliArgs) -> CliResult<()> {
    let records = snapshot_csv::load_snapshot_file(&args.snapshot_path)?;
    let settings = match &args.settings_path {
        Some(path) => settings_toml::load_settings_file(path)?,
        None => {
            log::info!("no settings file given, using built-in defaults");
            ReplenSettings::default()
        }
    };

    let now = args.now.unwrap_or_else(Utc::now);
    let meta = SnapshotMeta {
        captured_at: args.captured_at.unwrap_or(now),
        threepl_synced_at: args.threepl_synced_at,
        amazon_synced_at: args.amazon_synced_at,
    };
    let snapshot = InventorySnapshot { records, meta };

    let started = Instant::now();
    let items = compute_inventory_view(&snapshot, &settings, now);
    let summary = summarize(&items);
    let order = rank_by_urgency(&items);
    log::info!("scored {} items in {:?}", items.len(), started.elapsed());

    if let Some(path) = &args.export_path {
        export::write_items_csv(path, &items)?;
    }

    if args.json {
        let payload = DigestPayload {
            generated_at: now,
            data_date: meta.effective_data_date(),
            summary: &summary,
            items: &items,
        };
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        print_digest(&items, &summary, &order, &meta, now, args.top);
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Digest output
// ---------------------------------------------------------------------------

fn print_digest(
    items: &[ComputedItem],
    summary: &InventorySummary,
    order: &[usize],
    meta: &SnapshotMeta,
    now: DateTime<Utc>,
    top: usize,
) {
    let data_age_days = (now - meta.effective_data_date()).num_days().max(0);

    println!("===============================================================");
    println!(
        " Inventory Replenishment Digest - {}",
        now.format("%Y-%m-%d %H:%M UTC")
    );
    println!("===============================================================");
    println!(
        " data date ........ {} ({data_age_days}d old)",
        meta.effective_data_date().format("%Y-%m-%d")
    );
    println!(" SKUs scored ...... {}", summary.item_count);
    println!(
        " health ........... {} critical / {} low / {} healthy / {} overstock",
        summary.critical_count, summary.low_count, summary.healthy_count, summary.overstock_count
    );
    println!(" alerts ........... {}", summary.alert_count);
    println!(
        " ABC .............. {} A / {} B / {} C",
        summary.class_a_count, summary.class_b_count, summary.class_c_count
    );
    println!(
        " on hand .......... {:.0} units worth ${:.2}",
        summary.total_units, summary.total_value
    );
    println!(
        " avg turns ........ {:.1}   avg sell-through {:.1}%",
        summary.avg_turnover_rate, summary.avg_sell_through_rate
    );

    if items.is_empty() {
        return;
    }
    println!();
    println!(" MOST URGENT");
    for (rank, &i) in order.iter().take(top).enumerate() {
        let item = &items[i];
        println!(
            " {:>3}. {:<22} {:<10} {:>4}d supply   {}{}",
            rank + 1,
            item.sku,
            item.health.to_string(),
            item.days_of_supply,
            deadline_note(item),
            alert_note(item),
        );
    }
}

fn deadline_note(item: &ComputedItem) -> String {
    match (item.days_until_must_order, item.reorder_by_date) {
        (Some(days), Some(date)) if days < 0 => {
            format!("order was due {} ({}d overdue)", date.format("%Y-%m-%d"), -days)
        }
        (Some(days), Some(date)) => {
            format!("order by {} (in {days}d)", date.format("%Y-%m-%d"))
        }
        _ => "no reorder deadline".to_string(),
    }
}

fn alert_note(item: &ComputedItem) -> String {
    if !item.alert {
        return String::new();
    }
    let reasons: Vec<String> = item
        .alert_reasons
        .iter()
        .map(|reason| reason.to_string())
        .collect();
    format!("  [ALERT: {}]", reasons.join("; "))
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() || args.iter().any(|arg| arg == "--help" || arg == "-h") {
        print_usage();
        std::process::exit(if args.is_empty() { 2 } else { 0 });
    }

    let cli = match parse_args(&args) {
        Ok(cli) => cli,
        Err(message) => {
            eprintln!("error: {message}");
            eprintln!();
            print_usage();
            std::process::exit(2);
        }
    };

    if let Err(error) = run(&cli) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

// ---------------------------------------------------------------------------
