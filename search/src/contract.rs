//! Collaborator contracts: interval vertices and expansion policies.
//!
//! The engine never computes visibility itself. Successor intervals, their
//! costs and the identity of their root points all come from an
//! [`ExpansionPolicy`]; the engine only borrows the vertices it is handed.

use crate::geometry::{Interval, Point};

/// A visibility interval anchored to a root point.
///
/// # Contract
///
/// - `id()` is stable: two vertices with the same id describe the same
///   interval and root. The node pool keys its records on it.
/// - `contains()` is the goal test; the default checks the interval.
pub trait IntervalVertex: Clone {
    /// Stable integer identity.
    fn id(&self) -> u32;

    /// The point the interval is observed from.
    fn root(&self) -> Point;

    /// The visible span on a single row.
    fn interval(&self) -> Interval;

    /// Whether `point` lies inside this vertex's interval.
    fn contains(&self, point: Point) -> bool {
        self.interval().contains(point)
    }
}

/// Successor generation for interval vertices.
///
/// Successors are produced lazily: [`expand`](Self::expand) primes the
/// iteration for one vertex, then the engine drains it with
/// [`has_next`](Self::has_next) / [`next`](Self::next). The sequence is
/// finite and is not restarted until the next `expand` call.
///
/// # Contract
///
/// - [`step_cost`](Self::step_cost) reports the cost of the edge to the
///   successor most recently returned by `next`, and is never negative.
/// - The expanded vertex is never yielded as its own successor, and no
///   zero-cost cycle exists between vertices that share a root.
/// - [`root_hash`](Self::root_hash) is equal for two vertices iff they share
///   a root point.
///
/// Violations are not detected by the engine; optimality and termination of
/// path reconstruction depend on them.
pub trait ExpansionPolicy {
    type Vertex: IntervalVertex;

    /// Whether `(start, target)` is a searchable instance.
    fn validate(&self, start: &Self::Vertex, target: &Self::Vertex) -> bool;

    /// Prime successor iteration for `vertex`.
    fn expand(&mut self, vertex: &Self::Vertex);

    /// Whether another successor is pending.
    fn has_next(&self) -> bool;

    /// The next pending successor, or `None` once drained.
    fn next(&mut self) -> Option<Self::Vertex>;

    /// Cost of the edge to the last successor returned by `next`.
    fn step_cost(&self) -> f64;

    /// Identity of the root point `vertex` is anchored to.
    fn root_hash(&self, vertex: &Self::Vertex) -> u64;
}
