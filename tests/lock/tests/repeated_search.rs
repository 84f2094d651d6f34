//! One engine, many searches: results do not depend on what ran before.

use anya_harness::worlds::scenarios;
use anya_search::engine::{AnyaSearch, SearchState};
use anya_search::heuristic::EuclideanHeuristic;
use anya_search::policy::SearchPolicy;
use lock_tests::lattice_graph;

#[test]
fn same_query_twice_gives_identical_results() {
    let scenario = scenarios::diamond().unwrap();
    let s = scenario.graph.vertex(scenario.start).unwrap().clone();
    let t = scenario.graph.vertex(scenario.target).unwrap().clone();
    let mut engine =
        AnyaSearch::new(scenario.graph, EuclideanHeuristic, SearchPolicy::default()).unwrap();

    let first = engine.search(&s, &t).unwrap();
    let first_stats = *engine.stats();
    let second = engine.search(&s, &t).unwrap();

    assert_eq!(first, second);
    assert_eq!(first_stats, *engine.stats());
    assert_eq!(engine.pool().generation(), 2);
}

#[test]
fn interleaved_queries_match_fresh_engines() {
    let edges: Vec<(u32, u32, u8)> = (0..11)
        .flat_map(|i| [(i, i + 1, 0), (i + 1, i, 1), (i, (i + 5) % 12, 2)])
        .collect();
    let graph = lattice_graph(12, &edges).unwrap();
    let queries = [(0, 11), (11, 0), (3, 8), (0, 11), (7, 7), (5, 2)];

    let mut shared =
        AnyaSearch::new(graph.clone(), EuclideanHeuristic, SearchPolicy::default()).unwrap();
    for (from, to) in queries {
        let s = graph.vertex(from).unwrap().clone();
        let t = graph.vertex(to).unwrap().clone();
        let mut fresh =
            AnyaSearch::new(graph.clone(), EuclideanHeuristic, SearchPolicy::default()).unwrap();

        assert_eq!(
            shared.search(&s, &t),
            fresh.search(&s, &t),
            "query {from} -> {to}"
        );
        assert_eq!(shared.stats(), fresh.stats(), "query {from} -> {to}");
    }
}

#[test]
fn found_then_exhausted_then_found() {
    let scenario = scenarios::disconnected().unwrap();
    let g = &scenario.graph;
    let (a, b, island) = (
        g.vertex(0).unwrap().clone(),
        g.vertex(1).unwrap().clone(),
        g.vertex(2).unwrap().clone(),
    );
    let mut engine =
        AnyaSearch::new(g.clone(), EuclideanHeuristic, SearchPolicy::default()).unwrap();

    assert_eq!(engine.search_cost_only(&a, &b), Some(1.0));
    assert!(engine.search_cost_only(&a, &island).is_none());
    assert_eq!(engine.state(), SearchState::Exhausted);
    assert!(engine.last_path(&island).is_none());
    assert_eq!(engine.search_cost_only(&a, &b), Some(1.0));
    assert_eq!(engine.last_path(&b).unwrap().vertex_ids(), vec![0, 1]);
}
