//! Per-search counters.

/// Diagnostic counters for the most recent search.
///
/// Reset at the start of every search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes popped and expanded (stale pops excluded).
    pub expanded: u64,
    /// Vertices handed to the engine, start included.
    pub generated: u64,
    /// Successors accepted by the dominance rule and queued.
    pub insertions: u64,
    /// Successors pruned by the dominance rule.
    pub rejected: u64,
    /// Open list inserts plus extractions.
    pub heap_ops: u64,
    /// Extractions discarded because the node was already closed.
    pub stale_skipped: u64,
    /// Largest open list size reached.
    pub open_high_water: u64,
}

impl SearchStats {
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "expanded": self.expanded,
            "generated": self.generated,
            "heap_ops": self.heap_ops,
            "insertions": self.insertions,
            "open_high_water": self.open_high_water,
            "rejected": self.rejected,
            "stale_skipped": self.stale_skipped,
        })
    }
}
