//! Root dominance tie rule on small synthetic graphs.

use anya_harness::runner::{run_scenario, RunConfig};
use anya_harness::worlds::explicit_graph::{ExplicitGraph, GraphVertex};
use anya_harness::worlds::scenarios;
use anya_search::engine::{AnyaSearch, SearchOutcome};
use anya_search::geometry::{root_fingerprint, Point, EPSILON};
use anya_search::heuristic::{EuclideanHeuristic, ZeroHeuristic};
use anya_search::policy::SearchPolicy;
use anya_search::roots::{judge, Verdict};

#[test]
fn sibling_interval_of_same_root_survives_tie() {
    let scenario = scenarios::sibling_tie().unwrap();
    let report = run_scenario(&scenario, &RunConfig::default()).unwrap();

    assert!((report.cost().unwrap() - 4.5).abs() < 1e-9);
    assert_eq!(report.path.unwrap().vertex_ids(), vec![0, 2, 3]);
    assert_eq!(report.stats.rejected, 0);
    assert_eq!(report.stats.insertions, 2);
}

#[test]
fn unrelated_equal_cost_arrival_is_pruned() {
    let scenario = scenarios::unrelated_tie().unwrap();
    let report = run_scenario(&scenario, &RunConfig::default()).unwrap();

    assert_eq!(report.outcome, SearchOutcome::Exhausted);
    assert!(report.path.is_none());
    assert_eq!(report.stats.rejected, 1);
}

/// Three vertices: `p` at the origin, and two intervals `a` and `b` that
/// both hang off root `r`.
fn three_node(b_from_p: bool) -> (ExplicitGraph, GraphVertex, GraphVertex) {
    let r = Point::new(1.0, 0.0);
    let mut g = ExplicitGraph::new();
    g.add_vertex(GraphVertex::point(0, 0.0, 0.0)).unwrap();
    g.add_vertex(GraphVertex::span(1, r, 1.0, -1.0, 0.0)).unwrap();
    g.add_vertex(GraphVertex::span(2, r, 1.0, 2.0, 3.0)).unwrap();
    g.add_vertex(GraphVertex::point(3, 0.0, -1.0)).unwrap();
    g.add_vertex(GraphVertex::point(9, 2.5, 1.0)).unwrap();
    g.add_edge(0, 1, 1.0).unwrap();
    if b_from_p {
        g.add_edge(0, 2, 1.0).unwrap();
    } else {
        // Detour through (0,-1) that lands on r at the same cost.
        g.add_edge(0, 3, 0.5).unwrap();
        g.add_edge(3, 2, 0.5).unwrap();
    }
    let start = g.vertex(0).unwrap().clone();
    let target = g.vertex(9).unwrap().clone();
    (g, start, target)
}

#[test]
fn three_node_sibling_accepted_unrelated_rejected() {
    let (sibling, s, t) = three_node(true);
    let mut engine = AnyaSearch::new(sibling, ZeroHeuristic, SearchPolicy::default()).unwrap();
    assert_eq!(engine.search_cost_only(&s, &t), Some(1.0));

    let (unrelated, s, t) = three_node(false);
    let mut engine = AnyaSearch::new(unrelated, ZeroHeuristic, SearchPolicy::default()).unwrap();
    assert_eq!(engine.search_cost_only(&s, &t), None);
    assert_eq!(engine.stats().rejected, 1);
}

#[test]
fn zero_cost_chain_on_start_root_ties_and_survives() {
    // Two intervals seen from the start point itself, one row apart.
    let origin = Point::new(0.0, 0.0);
    let mut g = ExplicitGraph::new();
    g.add_vertex(GraphVertex::point(0, 0.0, 0.0)).unwrap();
    g.add_vertex(GraphVertex::span(1, origin, 2.0, -1.0, 1.0)).unwrap();
    g.add_vertex(GraphVertex::span(2, origin, 4.0, 1.0, 3.0)).unwrap();
    g.add_vertex(GraphVertex::point(9, 2.0, 4.0)).unwrap();
    g.add_edge(0, 1, 0.0).unwrap();
    g.add_edge(1, 2, 0.0).unwrap();
    let start = g.vertex(0).unwrap().clone();
    let target = g.vertex(9).unwrap().clone();

    let mut engine = AnyaSearch::new(g, EuclideanHeuristic, SearchPolicy::default()).unwrap();
    let path = engine.search(&start, &target).unwrap();

    assert!((path.cost() - 20f64.sqrt()).abs() < 1e-9);
    assert_eq!(path.vertex_ids(), vec![0, 1, 2, 9]);
    assert_eq!(engine.stats().rejected, 0);
    assert_eq!(engine.stats().insertions, 2);
}

#[test]
fn verdicts_follow_lineage() {
    let r = root_fingerprint(Point::new(1.0, 0.0));
    let p = root_fingerprint(Point::new(0.0, 0.0));
    let q = root_fingerprint(Point::new(0.0, -1.0));

    assert_eq!(judge(1.0, 1.0, r, p, Some(p), EPSILON), Verdict::TieSharedParent);
    assert_eq!(judge(1.0, 1.0, r, q, Some(p), EPSILON), Verdict::TieUnrelated);
    assert_eq!(judge(1.0, 1.0, r, r, Some(p), EPSILON), Verdict::TieSameRoot);
    assert_eq!(judge(1.0, 1.0, r, q, None, EPSILON), Verdict::TieUnrelated);
    assert_eq!(judge(0.5, 1.0, r, q, Some(p), EPSILON), Verdict::Improves);
    assert_eq!(judge(2.0, 1.0, r, p, Some(p), EPSILON), Verdict::Dominated);
}
