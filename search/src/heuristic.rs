//! Heuristic estimates of the remaining cost to the target.

use crate::contract::IntervalVertex;

/// Estimate of the cost from `vertex` to `target`.
///
/// Implementations must be admissible (never overestimate) for the engine to
/// return optimal costs. This is not checked.
pub trait Heuristic<V> {
    fn estimate(&self, vertex: &V, target: &V) -> f64;
}

/// Straight-line distance between the two root points.
#[derive(Debug, Clone, Copy, Default)]
pub struct EuclideanHeuristic;

impl<V: IntervalVertex> Heuristic<V> for EuclideanHeuristic {
    fn estimate(&self, vertex: &V, target: &V) -> f64 {
        vertex.root().distance(target.root())
    }
}

/// Always zero; turns the engine into uniform-cost search.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroHeuristic;

impl<V> Heuristic<V> for ZeroHeuristic {
    fn estimate(&self, _vertex: &V, _target: &V) -> f64 {
        0.0
    }
}

impl<V, F> Heuristic<V> for F
where
    F: Fn(&V, &V) -> f64,
{
    fn estimate(&self, vertex: &V, target: &V) -> f64 {
        self(vertex, target)
    }
}
