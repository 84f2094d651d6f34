//! Node pool: one reusable [`SearchNode`] record per vertex identity.
//!
//! Records are never freed while the pool lives. Instead of clearing every
//! record between searches the pool advances a generation counter; a record
//! stamped with an older generation reads as absent and is reinitialised the
//! first time the current search touches it.

use std::collections::HashMap;

use crate::contract::IntervalVertex;
use crate::node::{NodeHandle, SearchNode, UNSEEN_GENERATION};

struct PoolSlot<V> {
    vertex: V,
    node: SearchNode,
}

/// Arena of search nodes keyed by vertex id.
pub struct NodePool<V> {
    slots: Vec<PoolSlot<V>>,
    index: HashMap<u32, NodeHandle>,
    generation: u32,
}

impl<V: IntervalVertex> NodePool<V> {
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
            generation: UNSEEN_GENERATION,
        }
    }

    /// Advance to a new search id and return it.
    ///
    /// Every record becomes stale at once. If the counter wraps, all records
    /// are stamped unseen so that no old stamp can alias the new id.
    pub fn begin_search(&mut self) -> u32 {
        self.generation = self.generation.wrapping_add(1);
        if self.generation == UNSEEN_GENERATION {
            for slot in &mut self.slots {
                slot.node.generation = UNSEEN_GENERATION;
            }
            self.generation = UNSEEN_GENERATION + 1;
        }
        self.generation
    }

    /// Current search id.
    #[must_use]
    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Handle for `vertex`, allocating a record on first sight.
    ///
    /// The record is not reset; callers decide when it becomes current.
    pub fn get_or_create(&mut self, vertex: &V) -> NodeHandle {
        let id = vertex.id();
        if let Some(&handle) = self.index.get(&id) {
            return handle;
        }
        let handle = NodeHandle::from_index(self.slots.len());
        self.slots.push(PoolSlot {
            vertex: vertex.clone(),
            node: SearchNode::unseen(id),
        });
        self.index.insert(id, handle);
        handle
    }

    /// Reinitialise the record for the current search.
    pub fn reset(&mut self, handle: NodeHandle) {
        let generation = self.generation;
        self.slots[handle.index()].node.reset(generation);
    }

    /// Reset the record only if it belongs to an earlier search.
    ///
    /// Returns `true` if a reset happened.
    pub fn ensure_current(&mut self, handle: NodeHandle) -> bool {
        if self.is_current(handle) {
            false
        } else {
            self.reset(handle);
            true
        }
    }

    /// Whether the record was touched by the current search.
    #[must_use]
    pub fn is_current(&self, handle: NodeHandle) -> bool {
        self.slots[handle.index()].node.generation == self.generation
    }

    /// The record, if it is valid for the current search.
    #[must_use]
    pub fn node(&self, handle: NodeHandle) -> Option<&SearchNode> {
        let node = &self.slots[handle.index()].node;
        (node.generation == self.generation).then_some(node)
    }

    /// Unchecked mutable access; callers must have made the record current.
    pub(crate) fn node_mut(&mut self, handle: NodeHandle) -> &mut SearchNode {
        &mut self.slots[handle.index()].node
    }

    /// The vertex the record wraps.
    #[must_use]
    pub fn vertex(&self, handle: NodeHandle) -> &V {
        &self.slots[handle.index()].vertex
    }

    /// Handle previously issued for `vertex_id`, if any.
    #[must_use]
    pub fn handle_of(&self, vertex_id: u32) -> Option<NodeHandle> {
        self.index.get(&vertex_id).copied()
    }

    /// Number of records ever allocated.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl<V: IntervalVertex> Default for NodePool<V> {
    fn default() -> Self {
        Self::new()
    }
}
