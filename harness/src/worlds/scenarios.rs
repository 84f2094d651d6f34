//! Named search scenarios with known outcomes.
//!
//! | name | shape | expected cost |
//! |---|---|---|
//! | `straight_line` | one edge of cost 5 | `5.0` |
//! | `diamond` | two routes, the lower one cheaper | `5.0` |
//! | `sibling_tie` | two intervals of one root, same parent | `4.5` |
//! | `unrelated_tie` | one root reached at equal cost from two roots | none |
//! | `disconnected` | target has no incoming edge | none |
//!
//! `unrelated_tie` has a route to the target, but the only interval covering
//! it loses the dominance tie and is pruned.

use crate::worlds::explicit_graph::{ExplicitGraph, GraphError, GraphVertex};

use anya_search::geometry::Point;

/// A graph with a start, a target and the cost the search must report.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub name: &'static str,
    pub graph: ExplicitGraph,
    pub start: u32,
    pub target: u32,
    /// `None` when the search must report no path.
    pub expected_cost: Option<f64>,
}

/// Every scenario name, in table order.
pub const SCENARIO_NAMES: &[&str] = &[
    "straight_line",
    "diamond",
    "sibling_tie",
    "unrelated_tie",
    "disconnected",
];

/// Look up a scenario by name.
///
/// # Errors
///
/// Returns [`GraphError`] if the scenario's graph fails to build.
pub fn by_name(name: &str) -> Result<Option<Scenario>, GraphError> {
    let scenario = match name {
        "straight_line" => straight_line()?,
        "diamond" => diamond()?,
        "sibling_tie" => sibling_tie()?,
        "unrelated_tie" => unrelated_tie()?,
        "disconnected" => disconnected()?,
        _ => return Ok(None),
    };
    Ok(Some(scenario))
}

/// All scenarios, in table order.
///
/// # Errors
///
/// Returns [`GraphError`] if a scenario's graph fails to build.
pub fn all() -> Result<Vec<Scenario>, GraphError> {
    Ok(vec![
        straight_line()?,
        diamond()?,
        sibling_tie()?,
        unrelated_tie()?,
        disconnected()?,
    ])
}

fn points(coords: &[(f64, f64)]) -> Result<ExplicitGraph, GraphError> {
    let mut graph = ExplicitGraph::new();
    for (id, &(x, y)) in (0u32..).zip(coords) {
        graph.add_vertex(GraphVertex::point(id, x, y))?;
    }
    Ok(graph)
}

/// `(0,0) -> (5,0)` over a single edge of cost 5.
///
/// # Errors
///
/// Returns [`GraphError`] if the graph fails to build.
pub fn straight_line() -> Result<Scenario, GraphError> {
    let mut graph = points(&[(0.0, 0.0), (5.0, 0.0)])?;
    graph.add_edge(0, 1, 5.0)?;
    Ok(Scenario {
        name: "straight_line",
        graph,
        start: 0,
        target: 1,
        expected_cost: Some(5.0),
    })
}

/// Upper route `0 -> 1 -> 3` costs 6, lower route `0 -> 2 -> 3` costs 5.
///
/// # Errors
///
/// Returns [`GraphError`] if the graph fails to build.
pub fn diamond() -> Result<Scenario, GraphError> {
    let mut graph = points(&[(0.0, 0.0), (2.0, 1.0), (2.0, -1.0), (4.0, 0.0)])?;
    graph.add_edge(0, 1, 3.0)?;
    graph.add_edge(0, 2, 2.5)?;
    graph.add_edge(1, 3, 3.0)?;
    graph.add_edge(2, 3, 2.5)?;
    Ok(Scenario {
        name: "diamond",
        graph,
        start: 0,
        target: 3,
        expected_cost: Some(5.0),
    })
}

/// The start sees two intervals on row 2, both rooted at `(2,0)` and reached
/// at the same cost. Only the second covers the target, so the sibling must
/// survive the tie.
///
/// # Errors
///
/// Returns [`GraphError`] if the graph fails to build.
pub fn sibling_tie() -> Result<Scenario, GraphError> {
    let corner = Point::new(2.0, 0.0);
    let mut graph = ExplicitGraph::new();
    graph.add_vertex(GraphVertex::point(0, 0.0, 0.0))?;
    graph.add_vertex(GraphVertex::span(1, corner, 2.0, 0.0, 1.0))?;
    graph.add_vertex(GraphVertex::span(2, corner, 2.0, 3.0, 4.0))?;
    graph.add_vertex(GraphVertex::point(3, 3.5, 2.0))?;
    graph.add_edge(0, 1, 2.0)?;
    graph.add_edge(0, 2, 2.0)?;
    Ok(Scenario {
        name: "sibling_tie",
        graph,
        start: 0,
        target: 3,
        expected_cost: Some(4.5),
    })
}

/// Root `(2,0)` is reached at cost 2 via `(1,1)` and via `(1,-1)`. The
/// second arrival ties but shares no lineage with the first and is pruned,
/// taking the only interval that covers the target with it.
///
/// # Errors
///
/// Returns [`GraphError`] if the graph fails to build.
pub fn unrelated_tie() -> Result<Scenario, GraphError> {
    let corner = Point::new(2.0, 0.0);
    let mut graph = ExplicitGraph::new();
    graph.add_vertex(GraphVertex::point(0, 0.0, 0.0))?;
    graph.add_vertex(GraphVertex::point(1, 1.0, 1.0))?;
    graph.add_vertex(GraphVertex::point(2, 1.0, -1.0))?;
    graph.add_vertex(GraphVertex::span(3, corner, 0.0, 2.0, 2.0))?;
    graph.add_vertex(GraphVertex::span(4, corner, 0.0, 2.0, 6.0))?;
    graph.add_vertex(GraphVertex::point(5, 5.0, 0.0))?;
    graph.add_edge(0, 1, 1.0)?;
    graph.add_edge(0, 2, 1.0)?;
    graph.add_edge(1, 3, 1.0)?;
    graph.add_edge(2, 4, 1.0)?;
    Ok(Scenario {
        name: "unrelated_tie",
        graph,
        start: 0,
        target: 5,
        expected_cost: None,
    })
}

/// The target is an island.
///
/// # Errors
///
/// Returns [`GraphError`] if the graph fails to build.
pub fn disconnected() -> Result<Scenario, GraphError> {
    let mut graph = points(&[(0.0, 0.0), (1.0, 0.0), (9.0, 9.0)])?;
    graph.add_edge(0, 1, 1.0)?;
    Ok(Scenario {
        name: "disconnected",
        graph,
        start: 0,
        target: 2,
        expected_cost: None,
    })
}
