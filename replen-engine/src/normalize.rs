//! Snapshot normalization: one canonical record per logical SKU.
//!
//! Raw snapshots carry separate rows for a SKU's base and shop-variant
//! listings even though both draw on the same physical stock. Scoring a
//! SKU twice would double-count inventory, so before anything else runs
//! the snapshot is folded onto case-insensitive base keys.

use std::collections::HashMap;

use crate::sku_key::{dedup_key, has_variant_suffix};
use crate::types::SnapshotRecord;

/// Collapse raw snapshot rows to one record per base key.
///
/// Rows with a blank SKU are dropped (with a warning). When two rows share
/// a base key the winner is picked by, in order:
///
/// 1. the row with on-hand inventory, when only one has any
/// 2. the suffix-carrying row (shop listings report fresher quantities)
/// 3. the row with the larger total quantity
///
/// Ties keep the incumbent, so the fold is stable. Output preserves the
/// input order of first appearance per key.
pub fn normalize_snapshot(records: &[SnapshotRecord]) -> Vec<SnapshotRecord> {
    let mut out: Vec<SnapshotRecord> = Vec::with_capacity(records.len());
    let mut slot_by_key: HashMap<String, usize> = HashMap::with_capacity(records.len());
    let mut dropped = 0usize;

    for record in records {
        let Some(key) = dedup_key(&record.sku) else {
            log::warn!("dropping snapshot row with blank SKU (name: {:?})", record.name);
            dropped += 1;
            continue;
        };
        match slot_by_key.get(&key) {
            None => {
                slot_by_key.insert(key, out.len());
                out.push(record.clone());
            }
            Some(&slot) => {
                if beats(record, &out[slot]) {
                    out[slot] = record.clone();
                }
            }
        }
    }

    if dropped > 0 {
        log::warn!("normalizer dropped {dropped} blank-SKU rows");
    }
    log::debug!(
        "normalized {} snapshot rows to {} canonical records",
        records.len(),
        out.len()
    );
    out
}

/// True when the challenger should replace the incumbent for a shared key.
fn beats(challenger: &SnapshotRecord, incumbent: &SnapshotRecord) -> bool {
    let challenger_stocked = challenger.total_qty() > 0.0;
    let incumbent_stocked = incumbent.total_qty() > 0.0;
    if challenger_stocked != incumbent_stocked {
        return challenger_stocked;
    }

    let challenger_suffixed = has_variant_suffix(&challenger.sku);
    let incumbent_suffixed = has_variant_suffix(&incumbent.sku);
    if challenger_suffixed != incumbent_suffixed {
        return challenger_suffixed;
    }

    challenger.total_qty() > incumbent.total_qty()
}
