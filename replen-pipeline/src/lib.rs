//! Orchestration layer: runs the engine stages over a full snapshot.
//!
//! [`compute_inventory_view`] is the one entry point callers need. It
//! takes a snapshot, settings, and an explicit `now`, and returns fully
//! scored items in stable order, ready for a digest, a JSON payload, or
//! an export. [`summarize`] and [`rank_by_urgency`] derive the dashboard
//! headline numbers and the attention-first ordering from that output.

pub mod rank;
pub mod summary;
pub mod view;

pub use rank::rank_by_urgency;
pub use summary::{summarize, InventorySummary};
pub use view::compute_inventory_view;
