//! Search costs match a reference Dijkstra on random lattice graphs, and
//! reconstructed paths are consistent with the reported cost.

use proptest::prelude::*;

use anya_search::engine::AnyaSearch;
use anya_search::heuristic::{EuclideanHeuristic, ZeroHeuristic};
use anya_search::policy::SearchPolicy;
use lock_tests::{lattice_graph, reference_cost};

const TOLERANCE: f64 = 1e-6;

fn edge_strategy(n: u32) -> impl Strategy<Value = Vec<(u32, u32, u8)>> {
    prop::collection::vec((0..n, 0..n, 0u8..5), 0..40)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]
    #[test]
    fn cost_matches_dijkstra(
        edges in edge_strategy(12),
        start in 0u32..12,
        target in 0u32..12,
    ) {
        let graph = lattice_graph(12, &edges).unwrap();
        let expected = reference_cost(&graph, start, target);
        let s = graph.vertex(start).unwrap().clone();
        let t = graph.vertex(target).unwrap().clone();

        let mut engine =
            AnyaSearch::new(graph, EuclideanHeuristic, SearchPolicy::default()).unwrap();
        let actual = engine.search_cost_only(&s, &t);

        match (expected, actual) {
            (Some(e), Some(a)) => {
                prop_assert!((e - a).abs() < TOLERANCE, "expected {e}, got {a}");
            }
            (None, None) => {}
            (e, a) => {
                prop_assert!(false, "expected {e:?}, got {a:?}");
            }
        }
    }

    #[test]
    fn path_g_strictly_increases_and_ends_at_cost(
        edges in edge_strategy(12),
        target in 1u32..12,
    ) {
        let graph = lattice_graph(12, &edges).unwrap();
        let s = graph.vertex(0).unwrap().clone();
        let t = graph.vertex(target).unwrap().clone();

        let mut engine = AnyaSearch::new(graph, ZeroHeuristic, SearchPolicy::default()).unwrap();
        if let Some(path) = engine.search(&s, &t) {
            let steps = path.steps();
            prop_assert_eq!(steps[0].vertex.id, 0);
            prop_assert!(steps[0].g.abs() < TOLERANCE);
            prop_assert_eq!(steps[steps.len() - 1].vertex.id, target);
            prop_assert!((steps[steps.len() - 1].g - path.cost()).abs() < TOLERANCE);
            for pair in steps.windows(2) {
                prop_assert!(pair[1].g > pair[0].g, "g must increase: {} -> {}", pair[0].g, pair[1].g);
            }
            for cost in path.segment_costs() {
                prop_assert!(cost > 0.0);
            }
        }
    }
}

#[test]
fn zero_and_euclidean_heuristics_agree() {
    let edges = [
        (0, 1, 0),
        (1, 2, 1),
        (2, 3, 0),
        (0, 5, 3),
        (5, 10, 0),
        (10, 11, 0),
        (3, 7, 2),
        (7, 11, 0),
        (1, 6, 0),
        (6, 11, 4),
    ];
    let graph = lattice_graph(12, &edges).unwrap();
    let s = graph.vertex(0).unwrap().clone();
    let t = graph.vertex(11).unwrap().clone();
    let expected = reference_cost(&graph, 0, 11).unwrap();

    let mut informed =
        AnyaSearch::new(graph.clone(), EuclideanHeuristic, SearchPolicy::default()).unwrap();
    let mut uniform = AnyaSearch::new(graph, ZeroHeuristic, SearchPolicy::default()).unwrap();
    let a = informed.search_cost_only(&s, &t).unwrap();
    let b = uniform.search_cost_only(&s, &t).unwrap();

    assert!((a - expected).abs() < TOLERANCE);
    assert!((b - expected).abs() < TOLERANCE);
}
