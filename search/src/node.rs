//! Search node records and the handles that address them.

/// Generation value carried by records that no search has touched yet.
///
/// The pool's generation counter starts at this value and is advanced before
/// every search, so a live search id is never equal to it.
pub const UNSEEN_GENERATION: u32 = 0;

/// Index of a [`SearchNode`] inside a [`NodePool`](crate::pool::NodePool).
///
/// Handles are only meaningful for the pool that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeHandle(u32);

impl NodeHandle {
    #[allow(clippy::cast_possible_truncation)]
    pub(crate) fn from_index(index: usize) -> Self {
        Self(index as u32)
    }

    /// Position of the record in the pool arena.
    #[must_use]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Per-search metadata wrapping one vertex identity.
///
/// Fields other than `vertex_id` are only valid while `generation` matches the
/// owning pool's current search id. The pool hides stale records from readers
/// and resets them lazily.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchNode {
    pub(crate) vertex_id: u32,
    pub(crate) parent: Option<NodeHandle>,
    pub(crate) g: f64,
    pub(crate) f: f64,
    pub(crate) closed: bool,
    pub(crate) generation: u32,
    /// Stamp of this node's newest Open List entry, while it is queued.
    /// Diagnostic only: the search never reads it to decide anything.
    pub(crate) heap_stamp: Option<u64>,
}

impl SearchNode {
    pub(crate) fn unseen(vertex_id: u32) -> Self {
        Self {
            vertex_id,
            parent: None,
            g: f64::INFINITY,
            f: f64::INFINITY,
            closed: false,
            generation: UNSEEN_GENERATION,
            heap_stamp: None,
        }
    }

    /// Reinitialise for search `generation`, discarding whatever an earlier
    /// search left behind.
    pub(crate) fn reset(&mut self, generation: u32) {
        self.parent = None;
        self.g = f64::INFINITY;
        self.f = f64::INFINITY;
        self.closed = false;
        self.generation = generation;
        self.heap_stamp = None;
    }

    #[must_use]
    pub fn vertex_id(&self) -> u32 {
        self.vertex_id
    }

    /// The node this one was generated from; `None` for the start node.
    #[must_use]
    pub fn parent(&self) -> Option<NodeHandle> {
        self.parent
    }

    /// Cost from the start.
    #[must_use]
    pub fn g(&self) -> f64 {
        self.g
    }

    /// `g` plus the heuristic estimate to the target.
    #[must_use]
    pub fn f(&self) -> f64 {
        self.f
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    #[must_use]
    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Whether the node's newest Open List entry has not been extracted yet.
    #[must_use]
    pub fn is_queued(&self) -> bool {
        self.heap_stamp.is_some()
    }
}
