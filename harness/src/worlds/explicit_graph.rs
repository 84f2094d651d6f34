//! `ExplicitGraph`: an expansion policy over listed vertices and edges.
//!
//! Stands in for grid visibility when testing the engine. Each vertex is an
//! interval with a root; each directed edge carries its traversal cost.
//! Successors are yielded in edge insertion order.

use std::collections::{BTreeMap, BTreeSet};

use thiserror::Error;

use anya_search::contract::{ExpansionPolicy, IntervalVertex};
use anya_search::geometry::{root_fingerprint, Interval, Point};

/// A vertex of an [`ExplicitGraph`].
#[derive(Debug, Clone, PartialEq)]
pub struct GraphVertex {
    pub id: u32,
    pub root: Point,
    pub interval: Interval,
}

impl GraphVertex {
    /// Vertex whose interval is its own root point.
    #[must_use]
    pub fn point(id: u32, x: f64, y: f64) -> Self {
        let root = Point::new(x, y);
        Self {
            id,
            root,
            interval: Interval::at(root),
        }
    }

    /// Vertex observing `left..=right` on `row` from `root`.
    #[must_use]
    pub fn span(id: u32, root: Point, row: f64, left: f64, right: f64) -> Self {
        Self {
            id,
            root,
            interval: Interval::new(row, left, right),
        }
    }
}

impl IntervalVertex for GraphVertex {
    fn id(&self) -> u32 {
        self.id
    }

    fn root(&self) -> Point {
        self.root
    }

    fn interval(&self) -> Interval {
        self.interval
    }
}

/// Error building an [`ExplicitGraph`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    #[error("vertex {id} is already defined")]
    DuplicateVertex { id: u32 },
    #[error("vertex {id} is not defined")]
    UnknownVertex { id: u32 },
    #[error("edge {from} -> {to} has invalid cost {cost}")]
    InvalidCost { from: u32, to: u32, cost: f64 },
    #[error("edge {id} -> {id} loops on itself")]
    SelfLoop { id: u32 },
    #[error("zero-cost edge {from} -> {to} closes a cycle on a shared root")]
    ZeroCostCycle { from: u32, to: u32 },
}

/// Directed, weighted graph of interval vertices.
#[derive(Debug, Clone, Default)]
pub struct ExplicitGraph {
    vertices: BTreeMap<u32, GraphVertex>,
    edges: BTreeMap<u32, Vec<(u32, f64)>>,
    /// Successors of the vertex being expanded, in reverse yield order.
    pending: Vec<(u32, f64)>,
    last_cost: f64,
}

impl ExplicitGraph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a vertex.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::DuplicateVertex`] if the id is taken.
    pub fn add_vertex(&mut self, vertex: GraphVertex) -> Result<(), GraphError> {
        if self.vertices.contains_key(&vertex.id) {
            return Err(GraphError::DuplicateVertex { id: vertex.id });
        }
        self.vertices.insert(vertex.id, vertex);
        Ok(())
    }

    /// Add a directed edge `from -> to`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError`] if either endpoint is undefined, the edge is a
    /// self-loop, or `cost` is negative or not finite. Returns
    /// [`GraphError::ZeroCostCycle`] if the edge costs zero and `to` already
    /// reaches `from` through zero-cost edges between vertices of the same
    /// root.
    pub fn add_edge(&mut self, from: u32, to: u32, cost: f64) -> Result<(), GraphError> {
        for id in [from, to] {
            if !self.vertices.contains_key(&id) {
                return Err(GraphError::UnknownVertex { id });
            }
        }
        if from == to {
            return Err(GraphError::SelfLoop { id: from });
        }
        if !cost.is_finite() || cost < 0.0 {
            return Err(GraphError::InvalidCost { from, to, cost });
        }
        if cost == 0.0 && self.zero_cost_reach(to, from) {
            return Err(GraphError::ZeroCostCycle { from, to });
        }
        self.edges.entry(from).or_default().push((to, cost));
        Ok(())
    }

    /// Add `a -> b` and `b -> a` with the same cost.
    ///
    /// # Errors
    ///
    /// See [`add_edge`](Self::add_edge).
    pub fn add_undirected(&mut self, a: u32, b: u32, cost: f64) -> Result<(), GraphError> {
        self.add_edge(a, b, cost)?;
        self.add_edge(b, a, cost)
    }

    /// Whether `to` is reachable from `from` along zero-cost edges whose
    /// endpoints all share `from`'s root.
    fn zero_cost_reach(&self, from: u32, to: u32) -> bool {
        let Some(root) = self.vertices.get(&from).map(|v| v.root) else {
            return false;
        };
        if self.vertices.get(&to).map(|v| v.root) != Some(root) {
            return false;
        }
        let mut seen = BTreeSet::from([from]);
        let mut stack = vec![from];
        while let Some(id) = stack.pop() {
            if id == to {
                return true;
            }
            for &(next, cost) in self.edges_from(id) {
                let same_root = self.vertices.get(&next).is_some_and(|v| v.root == root);
                if cost == 0.0 && same_root && seen.insert(next) {
                    stack.push(next);
                }
            }
        }
        false
    }

    #[must_use]
    pub fn vertex(&self, id: u32) -> Option<&GraphVertex> {
        self.vertices.get(&id)
    }

    /// Outgoing edges of `id` in insertion order.
    #[must_use]
    pub fn edges_from(&self, id: u32) -> &[(u32, f64)] {
        self.edges.get(&id).map_or(&[], Vec::as_slice)
    }

    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.values().map(Vec::len).sum()
    }
}

impl ExpansionPolicy for ExplicitGraph {
    type Vertex = GraphVertex;

    fn validate(&self, start: &GraphVertex, target: &GraphVertex) -> bool {
        self.vertices.get(&start.id) == Some(start) && self.vertices.get(&target.id) == Some(target)
    }

    fn expand(&mut self, vertex: &GraphVertex) {
        self.pending.clear();
        self.pending.extend(
            self.edges
                .get(&vertex.id)
                .map_or(&[][..], Vec::as_slice)
                .iter()
                .rev()
                .copied(),
        );
    }

    fn has_next(&self) -> bool {
        !self.pending.is_empty()
    }

    fn next(&mut self) -> Option<GraphVertex> {
        let (to, cost) = self.pending.pop()?;
        self.last_cost = cost;
        self.vertices.get(&to).cloned()
    }

    fn step_cost(&self) -> f64 {
        self.last_cost
    }

    fn root_hash(&self, vertex: &GraphVertex) -> u64 {
        root_fingerprint(vertex.root)
    }
}
