//! Root dominance table and the pruning rule it drives.
//!
//! Many intervals share one root point. The table remembers, per root hash,
//! the accepted node with the lowest `g`; a newly generated node for the same
//! root is only queued if it is better, or equally good and locally related to
//! the current best.

use std::collections::HashMap;

use crate::contract::IntervalVertex;
use crate::node::NodeHandle;
use crate::pool::NodePool;

/// Outcome of the dominance test for one generated successor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// No node has been accepted for this root yet.
    Unclaimed,
    /// Cheaper than the best known path to the root by more than epsilon.
    Improves,
    /// Tie, and the successor shares the expanded node's own root.
    TieSameRoot,
    /// Tie, and the current best for the root was generated from a node with
    /// the same root as the expanded node.
    TieSharedParent,
    /// Tie with a path through an unrelated branch.
    TieUnrelated,
    /// Worse than the best known path by more than epsilon.
    Dominated,
}

impl Verdict {
    /// Whether the successor is queued.
    #[must_use]
    pub fn is_accepted(self) -> bool {
        matches!(
            self,
            Self::Unclaimed | Self::Improves | Self::TieSameRoot | Self::TieSharedParent
        )
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unclaimed => "unclaimed",
            Self::Improves => "improves",
            Self::TieSameRoot => "tie_same_root",
            Self::TieSharedParent => "tie_shared_parent",
            Self::TieUnrelated => "tie_unrelated",
            Self::Dominated => "dominated",
        }
    }
}

/// Compare a successor's `new_g` against the best `g` recorded for its root.
///
/// - `root_hash`: root of the successor (and of the recorded best).
/// - `parent_hash`: root of the node being expanded.
/// - `best_parent_hash`: root of the recorded best's parent, `None` when the
///   recorded best is the start node.
///
/// The tie band is inclusive: `|new_g - best_g| <= epsilon` is a tie.
#[must_use]
pub fn judge(
    new_g: f64,
    best_g: f64,
    root_hash: u64,
    parent_hash: u64,
    best_parent_hash: Option<u64>,
    epsilon: f64,
) -> Verdict {
    let delta = new_g - best_g;
    if delta > epsilon {
        Verdict::Dominated
    } else if delta < -epsilon {
        Verdict::Improves
    } else if root_hash == parent_hash {
        Verdict::TieSameRoot
    } else if best_parent_hash == Some(parent_hash) {
        Verdict::TieSharedParent
    } else {
        Verdict::TieUnrelated
    }
}

/// Root hash → best accepted node, for the current search.
#[derive(Debug, Default)]
pub struct RootTable {
    best: HashMap<u64, NodeHandle>,
}

impl RootTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            best: HashMap::with_capacity(capacity),
        }
    }

    /// Forget every root; called once at the start of each search.
    pub fn clear(&mut self) {
        self.best.clear();
    }

    /// Node currently representing `root_hash`.
    #[must_use]
    pub fn get(&self, root_hash: u64) -> Option<NodeHandle> {
        self.best.get(&root_hash).copied()
    }

    /// Best `g` accepted for `root_hash` in the current search.
    #[must_use]
    pub fn best_g<V: IntervalVertex>(&self, root_hash: u64, pool: &NodePool<V>) -> Option<f64> {
        self.get(root_hash)
            .and_then(|handle| pool.node(handle))
            .map(crate::node::SearchNode::g)
    }

    /// Make `handle` the representative of `root_hash`, replacing any previous
    /// one. Only called after the dominance test accepted `handle`.
    pub fn record(&mut self, root_hash: u64, handle: NodeHandle) {
        self.best.insert(root_hash, handle);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.best.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.best.is_empty()
    }
}
