//! Replenishment settings and the per-SKU resolution cascade.
//!
//! Settings resolve with most-specific-wins semantics, independently per
//! field: SKU override, then the SKU's category, then the global default.
//! A settings file that omits a field inherits the library fallback, so an
//! empty `ReplenSettings::default()` is a fully working configuration.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::policy::{
    FALLBACK_LEAD_TIME_DAYS, FALLBACK_MIN_ORDER_WEEKS, FALLBACK_REORDER_TRIGGER_DAYS,
};
use crate::sku_key::base_key;
use crate::types::ResolvedLeadTime;

// ---------------------------------------------------------------------------
// Settings model
// ---------------------------------------------------------------------------

/// Channel-level alert defaults, used when a SKU override does not set its
/// own floors. A `None` here disables that check for SKUs without an
/// override of their own.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChannelRules {
    /// Units of 3PL stock at or below which opted-in SKUs alert.
    pub threepl_alert_qty: Option<f64>,
    /// Amazon days-of-supply at or below which opted-in SKUs alert.
    pub amazon_alert_days: Option<i64>,
}

/// Lead-time parameters attached to a product category. Fields left unset
/// fall through to the global defaults.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryLeadTime {
    pub lead_time_days: Option<i64>,
    pub reorder_trigger_days: Option<i64>,
    pub min_order_weeks: Option<i64>,
}

/// Per-SKU overrides and alert opt-in.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkuOverride {
    pub lead_time_days: Option<i64>,
    /// Alert when aged total stock falls to this many units.
    pub reorder_point: Option<f64>,
    pub threepl_alert_qty: Option<f64>,
    pub amazon_alert_days: Option<i64>,
    /// Desired days of cover for purchase suggestions; carried for display.
    pub target_days: Option<i64>,
    /// Alerts only fire for SKUs that opted in.
    pub alert_enabled: bool,
}

/// Operator-editable replenishment configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplenSettings {
    pub default_lead_time_days: i64,
    pub reorder_trigger_days: i64,
    pub min_order_weeks: i64,
    /// Extra days of cover added to purchase suggestions; carried for display.
    pub reorder_buffer_days: i64,
    pub channel_rules: ChannelRules,
    /// Category name to lead-time parameters.
    pub category_lead_times: HashMap<String, CategoryLeadTime>,
    /// SKU (base or shop-variant form, any case) to category name.
    pub sku_categories: HashMap<String, String>,
    /// SKU (base or shop-variant form, any case) to overrides.
    pub sku_settings: HashMap<String, SkuOverride>,
}

impl Default for ReplenSettings {
    fn default() -> Self {
        Self {
            default_lead_time_days: FALLBACK_LEAD_TIME_DAYS,
            reorder_trigger_days: FALLBACK_REORDER_TRIGGER_DAYS,
            min_order_weeks: FALLBACK_MIN_ORDER_WEEKS,
            reorder_buffer_days: 7,
            channel_rules: ChannelRules::default(),
            category_lead_times: HashMap::new(),
            sku_categories: HashMap::new(),
            sku_settings: HashMap::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// Resolver
// ---------------------------------------------------------------------------

/// Pre-indexed view of [`ReplenSettings`] for O(1) per-SKU resolution.
///
/// Settings maps may key entries by either the base SKU or the shop-variant
/// form, in any case. The resolver indexes both spellings up front so every
/// lookup tolerates either form. Index construction iterates keys in sorted
/// order, so a pathological config that maps two spellings of one SKU to
/// different values still resolves deterministically (exact spelling wins
/// over a folded one).
pub struct LeadTimeResolver<'a> {
    settings: &'a ReplenSettings,
    categories_by_sku: HashMap<String, &'a str>,
    category_params: HashMap<String, &'a CategoryLeadTime>,
    overrides_by_sku: HashMap<String, &'a SkuOverride>,
}

impl<'a> LeadTimeResolver<'a> {
    pub fn new(settings: &'a ReplenSettings) -> Self {
        Self {
            settings,
            categories_by_sku: index_by_sku(&settings.sku_categories, |cat| cat.as_str()),
            category_params: index_lowercase(&settings.category_lead_times),
            overrides_by_sku: index_by_sku(&settings.sku_settings, |ov| ov),
        }
    }

    /// Resolve the lead-time trio for one SKU. Each field cascades
    /// independently; a category that sets only `lead_time_days` still
    /// inherits the global trigger and minimum-order values.
    pub fn resolve(&self, sku: &str) -> ResolvedLeadTime {
        let override_ = self.override_for(sku);
        let category = self.category_for(sku);

        let lead_time_days = override_
            .and_then(|ov| ov.lead_time_days)
            .or_else(|| category.and_then(|c| c.lead_time_days))
            .unwrap_or(self.settings.default_lead_time_days);
        let reorder_trigger_days = category
            .and_then(|c| c.reorder_trigger_days)
            .unwrap_or(self.settings.reorder_trigger_days);
        let min_order_weeks = category
            .and_then(|c| c.min_order_weeks)
            .unwrap_or(self.settings.min_order_weeks);

        ResolvedLeadTime {
            lead_time_days,
            reorder_trigger_days,
            min_order_weeks,
        }
    }

    /// The override block for a SKU, if one is configured under either
    /// spelling.
    pub fn override_for(&self, sku: &str) -> Option<&'a SkuOverride> {
        lookup_sku(&self.overrides_by_sku, sku).copied()
    }

    /// The category parameters for a SKU, if it is assigned to a category
    /// that has an entry in `category_lead_times`.
    pub fn category_for(&self, sku: &str) -> Option<&'a CategoryLeadTime> {
        let category = lookup_sku(&self.categories_by_sku, sku)?;
        self.category_params.get(&category.to_lowercase()).copied()
    }

    pub fn channel_rules(&self) -> &'a ChannelRules {
        &self.settings.channel_rules
    }
}

/// Index a SKU-keyed map under both the exact lowercased key and the folded
/// base key. Exact spellings are inserted first and never overwritten by a
/// folded form.
fn index_by_sku<'a, V, T: ?Sized>(
    map: &'a HashMap<String, V>,
    project: impl Fn(&'a V) -> &'a T,
) -> HashMap<String, &'a T> {
    let mut keys: Vec<&String> = map.keys().collect();
    keys.sort();

    let mut index = HashMap::with_capacity(map.len() * 2);
    for key in &keys {
        if let Some(value) = map.get(*key) {
            index.insert(key.to_lowercase(), project(value));
        }
    }
    for key in &keys {
        if let Some(value) = map.get(*key) {
            index.entry(base_key(key)).or_insert_with(|| project(value));
        }
    }
    index
}

fn index_lowercase<V>(map: &HashMap<String, V>) -> HashMap<String, &V> {
    let mut keys: Vec<&String> = map.keys().collect();
    keys.sort();

    let mut index = HashMap::with_capacity(map.len());
    for key in keys {
        if let Some(value) = map.get(key) {
            index.entry(key.to_lowercase()).or_insert(value);
        }
    }
    index
}

/// Look a SKU up by exact lowercased spelling first, then by base key.
fn lookup_sku<'a, T>(index: &'a HashMap<String, T>, sku: &str) -> Option<&'a T> {
    let exact = sku.trim().to_lowercase();
    index.get(&exact).or_else(|| index.get(&base_key(sku)))
}

// ---------------------------------------------------------------------------
