//! Path reconstruction from parent links.

use crate::contract::IntervalVertex;
use crate::node::NodeHandle;
use crate::pool::NodePool;

/// One vertex on a found path with the cost accumulated up to it.
#[derive(Debug, Clone, PartialEq)]
pub struct PathStep<V> {
    pub vertex: V,
    pub g: f64,
}

/// A start-to-target sequence of vertices.
#[derive(Debug, Clone, PartialEq)]
pub struct Path<V> {
    steps: Vec<PathStep<V>>,
    cost: f64,
}

impl<V: IntervalVertex> Path<V> {
    /// Steps in start-to-target order.
    #[must_use]
    pub fn steps(&self) -> &[PathStep<V>] {
        &self.steps
    }

    /// Total cost reported by the search.
    #[must_use]
    pub fn cost(&self) -> f64 {
        self.cost
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    #[must_use]
    pub fn vertex_ids(&self) -> Vec<u32> {
        self.steps.iter().map(|s| s.vertex.id()).collect()
    }

    /// Cost of each segment, from consecutive accumulated costs.
    #[must_use]
    pub fn segment_costs(&self) -> Vec<f64> {
        self.steps.windows(2).map(|w| w[1].g - w[0].g).collect()
    }

    /// JSON echo for reports.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        let steps: Vec<serde_json::Value> = self
            .steps
            .iter()
            .map(|s| {
                let root = s.vertex.root();
                serde_json::json!({
                    "g": s.g,
                    "id": s.vertex.id(),
                    "root": [root.x, root.y],
                })
            })
            .collect();
        serde_json::json!({
            "cost": self.cost,
            "steps": steps,
        })
    }
}

/// Walk parent links from `goal` back to the start node.
///
/// If the goal's root is not the target's root (the goal interval merely
/// covers the target), `target` is appended as the final step at `cost`.
///
/// Returns `None` if `goal` is not valid in the pool's current search, or if
/// the parent chain is longer than the pool; the latter only happens when an
/// expansion policy breaks its contract and creates a parent cycle.
#[must_use]
pub fn reconstruct_path<V: IntervalVertex>(
    pool: &NodePool<V>,
    goal: NodeHandle,
    target: &V,
    cost: f64,
    epsilon: f64,
) -> Option<Path<V>> {
    let mut steps = Vec::new();
    let mut cursor = Some(goal);

    while let Some(handle) = cursor {
        if steps.len() >= pool.len() {
            tracing::warn!(goal = goal.index(), "parent chain does not terminate");
            return None;
        }
        let node = pool.node(handle)?;
        steps.push(PathStep {
            vertex: pool.vertex(handle).clone(),
            g: node.g(),
        });
        cursor = node.parent();
    }
    steps.reverse();

    let reaches_target = steps
        .last()
        .is_some_and(|s| s.vertex.root().approx_eq(target.root(), epsilon));
    if !reaches_target {
        steps.push(PathStep {
            vertex: target.clone(),
            g: cost,
        });
    }

    Some(Path { steps, cost })
}
