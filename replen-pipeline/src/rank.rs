//! Attention-first ordering for the digest.

use replen_engine::types::ComputedItem;

/// Indices of `items` sorted most-urgent-first.
///
/// Urgency is days until the reorder deadline (overdue items sort first,
/// items with no deadline last), then days of supply, then SKU, so the
/// ordering is total and stable across runs.
pub fn rank_by_urgency(items: &[ComputedItem]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..items.len()).collect();
    order.sort_by(|&a, &b| {
        let ka = urgency_key(&items[a]);
        let kb = urgency_key(&items[b]);
        ka.cmp(&kb)
    });
    order
}

fn urgency_key(item: &ComputedItem) -> (i64, i64, &str) {
    (
        item.days_until_must_order.unwrap_or(i64::MAX),
        item.days_of_supply,
        item.sku.as_str(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use replen_engine::settings::ReplenSettings;
    use replen_engine::types::{InventorySnapshot, SnapshotMeta, SnapshotRecord};

    use crate::view::compute_inventory_view;

    fn scored(records: Vec<SnapshotRecord>) -> Vec<ComputedItem> {
        let captured = chrono::DateTime::parse_from_rfc3339("2026-08-25T00:00:00Z")
            .map(|dt| dt.with_timezone(&chrono::Utc))
            .unwrap();
        let snapshot = InventorySnapshot {
            records,
            meta: SnapshotMeta {
                captured_at: captured,
                threepl_synced_at: None,
                amazon_synced_at: None,
            },
        };
        compute_inventory_view(&snapshot, &ReplenSettings::default(), captured)
    }

    fn record(sku: &str, qty: f64, weekly_vel: f64) -> SnapshotRecord {
        SnapshotRecord {
            sku: sku.to_string(),
            name: sku.to_string(),
            threepl_qty: qty,
            weekly_vel,
            ..SnapshotRecord::default()
        }
    }

    #[test]
    fn overdue_items_sort_before_comfortable_ones() {
        // At 70/week under default settings: 100 units is 10 days of
        // supply (deadline 64 days gone), 3000 units is 300 days.
        let items = scored(vec![
            record("COMFY", 3000.0, 70.0),
            record("URGENT", 100.0, 70.0),
        ]);
        let order = rank_by_urgency(&items);
        assert_eq!(items[order[0]].sku, "URGENT");
        assert_eq!(items[order[1]].sku, "COMFY");
    }

    #[test]
    fn no_deadline_sorts_last_and_ties_break_by_sku() {
        let items = scored(vec![
            record("ZED", 0.0, 0.0),
            record("URGENT", 100.0, 70.0),
            record("ALSO-DEAD", 0.0, 0.0),
        ]);
        let order = rank_by_urgency(&items);
        let skus: Vec<&str> = order.iter().map(|&i| items[i].sku.as_str()).collect();
        // The two zero-velocity items share (no deadline, 999 days), so
        // SKU order decides between them.
        assert_eq!(skus, vec!["URGENT", "ALSO-DEAD", "ZED"]);
    }
}
