//! SKU canonicalization.
//!
//! Upstream channels list the same product under two SKUs: the base form
//! ("WIDGET-10") and a web-shop variant with a trailing "Shop"
//! ("WIDGET-10Shop"). Both refer to one physical stock pool, so the engine
//! folds them onto a shared dedup key before scoring.

use crate::policy::SHOP_VARIANT_SUFFIX;

/// True when the trimmed SKU carries the shop-variant suffix
/// (case-insensitive). A SKU that is nothing but the suffix is left alone.
pub fn has_variant_suffix(sku: &str) -> bool {
    let trimmed = sku.trim();
    let n = trimmed.len();
    let m = SHOP_VARIANT_SUFFIX.len();
    n > m
        && trimmed.is_char_boundary(n - m)
        && trimmed[n - m..].eq_ignore_ascii_case(SHOP_VARIANT_SUFFIX)
}

/// The trimmed SKU with a trailing shop-variant suffix removed, original
/// casing preserved. "ABCShop" and "abcSHOP" both map to their base form;
/// anything else passes through trimmed.
pub fn canonical_sku(sku: &str) -> &str {
    let trimmed = sku.trim();
    if has_variant_suffix(trimmed) {
        &trimmed[..trimmed.len() - SHOP_VARIANT_SUFFIX.len()]
    } else {
        trimmed
    }
}

/// Case-insensitive dedup key for a SKU: the canonical form, lowercased.
pub fn base_key(sku: &str) -> String {
    canonical_sku(sku).to_lowercase()
}

/// Dedup key for a snapshot row, or `None` when the SKU is blank after
/// trimming and the row must be dropped.
pub fn dedup_key(sku: &str) -> Option<String> {
    let trimmed = sku.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(base_key(trimmed))
    }
}
