//! Recorded trace documents: event order, node bookkeeping and persistence.

use std::collections::BTreeSet;

use anya_harness::worlds::explicit_graph::ExplicitGraph;
use anya_harness::worlds::scenarios::{self, Scenario};
use anya_search::engine::AnyaSearch;
use anya_search::heuristic::EuclideanHeuristic;
use anya_search::policy::SearchPolicy;
use anya_search::recorder::TraceRecorder;

type TracedEngine = AnyaSearch<ExplicitGraph, EuclideanHeuristic, TraceRecorder>;

fn traced_diamond() -> (TracedEngine, Scenario) {
    let scenario = scenarios::diamond().unwrap();
    let engine = AnyaSearch::with_tracer(
        scenario.graph.clone(),
        EuclideanHeuristic,
        SearchPolicy::default(),
        TraceRecorder::new(),
    )
    .unwrap();
    (engine, scenario)
}

#[test]
fn events_bracket_the_search() {
    let (mut engine, scenario) = traced_diamond();
    let s = scenario.graph.vertex(scenario.start).unwrap().clone();
    let t = scenario.graph.vertex(scenario.target).unwrap().clone();
    engine.search(&s, &t).unwrap();

    let types = engine.tracer().event_types();
    assert_eq!(&types[..3], &["source", "destination", "generating"]);
    assert_eq!(types.last(), Some(&"end"));
    assert_eq!(types.iter().filter(|t| **t == "end").count(), 1);

    let end = engine.tracer().events().last().unwrap();
    assert_eq!(end["id"], 3);
    assert_eq!(end["pId"], 3, "the goal node is the target vertex itself");
    assert_eq!(end["f"], 5.0);
}

#[test]
fn every_expanded_id_was_generated_first() {
    let (mut engine, scenario) = traced_diamond();
    let s = scenario.graph.vertex(scenario.start).unwrap().clone();
    let t = scenario.graph.vertex(scenario.target).unwrap().clone();
    engine.search(&s, &t).unwrap();

    let mut generated = BTreeSet::new();
    for event in engine.tracer().events() {
        let id = event["id"].as_str().map(str::to_string);
        match event["type"].as_str().unwrap() {
            "generating" => {
                generated.insert(id.unwrap());
            }
            "expanding" | "closing" | "updating" => {
                let id = id.unwrap();
                assert!(generated.contains(&id), "{id} used before generation");
                assert!(event["variables"].is_object());
            }
            _ => {}
        }
    }
}

#[test]
fn second_search_appends_to_the_document() {
    let (mut engine, scenario) = traced_diamond();
    let s = scenario.graph.vertex(scenario.start).unwrap().clone();
    let t = scenario.graph.vertex(scenario.target).unwrap().clone();
    engine.search(&s, &t).unwrap();
    let once = engine.tracer().len();
    engine.search(&s, &t).unwrap();
    assert_eq!(engine.tracer().len(), once * 2);

    let sources = engine
        .tracer()
        .event_types()
        .into_iter()
        .filter(|t| *t == "source")
        .count();
    assert_eq!(sources, 2);
}

#[test]
fn written_document_parses_back() {
    let (mut engine, scenario) = traced_diamond();
    let s = scenario.graph.vertex(scenario.start).unwrap().clone();
    let t = scenario.graph.vertex(scenario.target).unwrap().clone();
    engine.search(&s, &t).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("trace.json");
    engine.tracer().write_json(&path).unwrap();

    let doc: serde_json::Value = serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
    assert_eq!(doc, engine.tracer().to_json_value());
    assert_eq!(doc["nodeStructure"][0]["type"], "circle");
    assert_eq!(doc["eventList"][1]["variables"]["cx"], 4.0);
}

#[test]
fn tracing_leaves_results_untouched() {
    let (mut traced, scenario) = traced_diamond();
    let s = scenario.graph.vertex(scenario.start).unwrap().clone();
    let t = scenario.graph.vertex(scenario.target).unwrap().clone();
    let mut plain =
        AnyaSearch::new(scenario.graph, EuclideanHeuristic, SearchPolicy::default()).unwrap();

    assert_eq!(traced.search(&s, &t), plain.search(&s, &t));
    assert_eq!(traced.stats(), plain.stats());
}
