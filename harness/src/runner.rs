//! Scenario runner: drives one engine per scenario and packages the result.
//!
//! # Pipeline
//!
//! ```text
//! RunConfig.policy.validate()
//!   → resolve start/target → AnyaSearch::run() → last_path()
//!   → RunReport (+ trace document) → [write_run_dir()]
//! ```
//!
//! # Run directory layout
//!
//! ```text
//! <dir>/
//!   report.json   pretty JSON of RunReport::to_json_value()
//!   trace.json    visualiser document, only when a trace was recorded
//! ```

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use anya_search::engine::{AnyaSearch, SearchOutcome};
use anya_search::error::SearchError;
use anya_search::heuristic::EuclideanHeuristic;
use anya_search::path::Path as SearchPath;
use anya_search::policy::SearchPolicy;
use anya_search::recorder::{TraceRecorder, TraceWriteError};
use anya_search::stats::SearchStats;
use anya_search::tracer::{NoopTracer, SearchTracer};

use crate::worlds::explicit_graph::{ExplicitGraph, GraphVertex};
use crate::worlds::scenarios::Scenario;

const REPORT_FILENAME: &str = "report.json";
const TRACE_FILENAME: &str = "trace.json";

/// How to run a scenario.
#[derive(Debug, Clone, Default)]
pub struct RunConfig {
    pub policy: SearchPolicy,
    /// Record a [`TraceRecorder`] document alongside the report.
    pub record_trace: bool,
    /// When set, the report (and trace) are written here.
    pub output_dir: Option<PathBuf>,
}

/// Error during a scenario run.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("invalid search policy: {0}")]
    Policy(#[from] SearchError),
    #[error("scenario {scenario} has no vertex {id}")]
    UnknownVertex { scenario: String, id: u32 },
    #[error("failed to write trace: {0}")]
    Trace(#[from] TraceWriteError),
    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to write run directory: {0}")]
    Io(#[from] std::io::Error),
}

/// Everything one scenario run produced.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub scenario: String,
    pub outcome: SearchOutcome,
    pub path: Option<SearchPath<GraphVertex>>,
    pub stats: SearchStats,
    pub policy: SearchPolicy,
    /// The visualiser document, when [`RunConfig::record_trace`] was set.
    pub trace: Option<serde_json::Value>,
}

impl RunReport {
    /// Cost reported by the search, if it found a path.
    #[must_use]
    pub fn cost(&self) -> Option<f64> {
        self.outcome.cost()
    }

    /// JSON echo without the trace document.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "cost": self.cost(),
            "outcome": self.outcome.as_str(),
            "path": self.path.as_ref().map(SearchPath::to_json_value),
            "policy": self.policy.to_json_value(),
            "scenario": self.scenario,
            "stats": self.stats.to_json_value(),
        })
    }
}

/// Run `scenario` under `config`.
///
/// # Errors
///
/// Returns [`RunError`] if the policy is invalid, the scenario names a
/// vertex its graph does not have, or the run directory cannot be written.
pub fn run_scenario(scenario: &Scenario, config: &RunConfig) -> Result<RunReport, RunError> {
    let lookup = |id: u32| {
        scenario
            .graph
            .vertex(id)
            .cloned()
            .ok_or_else(|| RunError::UnknownVertex {
                scenario: scenario.name.to_string(),
                id,
            })
    };
    let start = lookup(scenario.start)?;
    let target = lookup(scenario.target)?;

    let (outcome, path, stats, trace) = if config.record_trace {
        let (outcome, path, stats, recorder) = execute(
            scenario.graph.clone(),
            &start,
            &target,
            &config.policy,
            TraceRecorder::new(),
        )?;
        (outcome, path, stats, Some(recorder.to_json_value()))
    } else {
        let (outcome, path, stats, _) = execute(
            scenario.graph.clone(),
            &start,
            &target,
            &config.policy,
            NoopTracer,
        )?;
        (outcome, path, stats, None)
    };

    info!(
        scenario = scenario.name,
        outcome = outcome.as_str(),
        cost = ?outcome.cost(),
        expanded = stats.expanded,
        "scenario finished"
    );

    let report = RunReport {
        scenario: scenario.name.to_string(),
        outcome,
        path,
        stats,
        policy: config.policy.clone(),
        trace,
    };

    if let Some(dir) = &config.output_dir {
        write_run_dir(dir, &report)?;
    }
    Ok(report)
}

type Execution<T> = (SearchOutcome, Option<SearchPath<GraphVertex>>, SearchStats, T);

fn execute<T: SearchTracer>(
    graph: ExplicitGraph,
    start: &GraphVertex,
    target: &GraphVertex,
    policy: &SearchPolicy,
    tracer: T,
) -> Result<Execution<T>, SearchError> {
    let mut engine = AnyaSearch::with_tracer(graph, EuclideanHeuristic, policy.clone(), tracer)?;
    let outcome = engine.run(start, target);
    let path = engine.last_path(target);
    let stats = *engine.stats();
    Ok((outcome, path, stats, engine.into_tracer()))
}

/// Persist `report` into `dir`, creating the directory if needed.
///
/// # Errors
///
/// Returns [`RunError::Io`] or [`RunError::Json`] on failure.
pub fn write_run_dir(dir: &Path, report: &RunReport) -> Result<(), RunError> {
    std::fs::create_dir_all(dir)?;
    std::fs::write(
        dir.join(REPORT_FILENAME),
        serde_json::to_vec_pretty(&report.to_json_value())?,
    )?;
    if let Some(trace) = &report.trace {
        std::fs::write(dir.join(TRACE_FILENAME), serde_json::to_vec_pretty(trace)?)?;
    }
    Ok(())
}
