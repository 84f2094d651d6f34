//! Open list: binary min-heap of node handles keyed by `f`.
//!
//! There is no decrease-key. Each accepted insertion pushes a fresh entry, so
//! several entries for one node can be queued at once; the engine discards
//! the superseded ones when they surface (their node is already closed).

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use crate::node::NodeHandle;

/// Ordering key of an open list entry: `(f, g, stamp)`.
///
/// Lower `f` first; among equal `f`, larger `g` first (the entry is closer to
/// the goal); then the older stamp. `f64::total_cmp` gives the total order.
#[derive(Debug, Clone, Copy)]
pub struct OpenKey {
    pub f: f64,
    pub g: f64,
    pub stamp: u64,
}

impl PartialEq for OpenKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OpenKey {}

impl PartialOrd for OpenKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OpenKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.f
            .total_cmp(&other.f)
            .then_with(|| other.g.total_cmp(&self.g))
            .then(self.stamp.cmp(&other.stamp))
    }
}

/// A queued handle with the key values it was inserted under.
#[derive(Debug, Clone, Copy)]
pub struct OpenEntry {
    pub handle: NodeHandle,
    pub key: OpenKey,
}

#[derive(Debug)]
struct HeapItem(Reverse<OpenKey>, NodeHandle);

impl PartialEq for HeapItem {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl Eq for HeapItem {}

impl PartialOrd for HeapItem {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapItem {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

/// Min-priority queue over node handles.
#[derive(Debug, Default)]
pub struct OpenList {
    heap: BinaryHeap<HeapItem>,
    next_stamp: u64,
    high_water: usize,
}

impl OpenList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `handle` under `(f, g)` and return the entry's stamp.
    pub fn insert(&mut self, handle: NodeHandle, f: f64, g: f64) -> u64 {
        let stamp = self.next_stamp;
        self.next_stamp += 1;
        self.heap
            .push(HeapItem(Reverse(OpenKey { f, g, stamp }), handle));
        self.high_water = self.high_water.max(self.heap.len());
        stamp
    }

    /// Remove and return the entry with the lowest key.
    pub fn extract_min(&mut self) -> Option<OpenEntry> {
        self.heap.pop().map(|HeapItem(Reverse(key), handle)| OpenEntry { handle, key })
    }

    /// Key of the entry `extract_min` would return next.
    #[must_use]
    pub fn peek_key(&self) -> Option<OpenKey> {
        self.heap.peek().map(|item| item.0 .0)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Largest size reached since the last [`clear`](Self::clear).
    #[must_use]
    pub fn high_water(&self) -> usize {
        self.high_water
    }

    /// Drop every entry. Entries are plain data, so this keeps the allocation
    /// and costs no per-entry work.
    pub fn clear(&mut self) {
        self.heap.clear();
        self.next_stamp = 0;
        self.high_water = 0;
    }
}
