//! Unreachable targets end the search with an empty open list.

use anya_harness::worlds::scenarios;
use anya_search::engine::{AnyaSearch, SearchOutcome, SearchState};
use anya_search::heuristic::EuclideanHeuristic;
use anya_search::policy::SearchPolicy;
use anya_search::tracer::{SearchTracer, VertexAttrs};
use lock_tests::lattice_graph;

#[derive(Default)]
struct Endings {
    finished: u32,
    exhausted: u32,
    closed: u32,
}

impl SearchTracer for Endings {
    fn on_close(&mut self, _id: u32) {
        self.closed += 1;
    }

    fn on_finish(&mut self, _target_id: u32, _target: &VertexAttrs, _parent_id: u32, _cost: f64) {
        self.finished += 1;
    }

    fn on_exhausted(&mut self) {
        self.exhausted += 1;
    }
}

#[test]
fn island_target_exhausts() {
    let scenario = scenarios::disconnected().unwrap();
    let s = scenario.graph.vertex(scenario.start).unwrap().clone();
    let t = scenario.graph.vertex(scenario.target).unwrap().clone();
    let mut endings = Endings::default();
    let mut engine = AnyaSearch::with_tracer(
        scenario.graph,
        EuclideanHeuristic,
        SearchPolicy::default(),
        &mut endings,
    )
    .unwrap();

    assert_eq!(engine.run(&s, &t), SearchOutcome::Exhausted);
    assert!(engine.search(&s, &t).is_none());
    assert_eq!(engine.open_len(), 0);
    assert_eq!(engine.state(), SearchState::Exhausted);
    assert_eq!(engine.stats().expanded, 2);
    drop(engine);

    assert_eq!(endings.exhausted, 2);
    assert_eq!(endings.finished, 0);
    assert_eq!(endings.closed, 4);
}

#[test]
fn cycles_without_target_terminate() {
    // A strongly connected ring that never reaches vertex 11.
    let edges: Vec<(u32, u32, u8)> = (0..8).map(|i| (i, (i + 1) % 8, 0)).collect();
    let graph = lattice_graph(12, &edges).unwrap();
    let s = graph.vertex(0).unwrap().clone();
    let t = graph.vertex(11).unwrap().clone();
    let mut engine = AnyaSearch::new(graph, EuclideanHeuristic, SearchPolicy::default()).unwrap();

    assert!(engine.search(&s, &t).is_none());
    assert_eq!(engine.open_len(), 0);
    assert_eq!(engine.stats().expanded, 8);
    assert_eq!(engine.stats().rejected, 1, "the ring closes back on the start");
}
