//! Core computation engine for inventory replenishment and health scoring.
//!
//! Everything in this crate is synchronous and side-effect free: functions
//! take an inventory snapshot, resolved settings, and an explicit `now`
//! timestamp, and return derived values. Nothing here reads the clock,
//! touches the filesystem, or talks to the network, so the same inputs
//! always produce the same outputs. Ingestion (CSV, TOML) and presentation
//! live in the server crate; orchestration lives in `replen-pipeline`.
//!
//! The stages, in dependency order:
//!
//! 1. [`normalize`] - collapse channel-variant SKU rows into canonical records
//! 2. [`settings`] - resolve lead-time parameters through the settings cascade
//! 3. [`decay`] - age reported quantities by velocity since the data date
//! 4. [`health`] - days-of-supply, reorder timeline, and health status
//! 5. [`abc`] - revenue-ranked ABC classification (whole-population pass)
//! 6. [`kpi`] - turnover, carrying cost, EOQ, and related per-item metrics
//! 7. [`alerts`] - threshold alerts for opted-in SKUs

pub mod abc;
pub mod alerts;
pub mod decay;
pub mod health;
pub mod kpi;
pub mod normalize;
pub mod policy;
pub mod settings;
pub mod sku_key;
pub mod types;

pub use abc::{annual_revenue, classify_abc, RevenueRank};
pub use alerts::{evaluate_alerts, AlertOutcome};
pub use decay::{decay_quantities, DecayedQuantities};
pub use health::{assess_health, health_thresholds, HealthTimeline};
pub use kpi::{compute_kpis, SupplyChainKpis};
pub use normalize::normalize_snapshot;
pub use settings::{
    CategoryLeadTime, ChannelRules, LeadTimeResolver, ReplenSettings, SkuOverride,
};
pub use types::{
    AbcClass, AlertReason, ComputedItem, HealthStatus, InventorySnapshot, ResolvedLeadTime,
    SnapshotMeta, SnapshotRecord,
};
