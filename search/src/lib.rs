//! Anya Search: optimal any-angle path search over interval successors.
//!
//! The engine runs a best-first search where every search node is an
//! interval of visible points anchored to a root point. Successor generation
//! is delegated to an [`ExpansionPolicy`]; this crate owns the search state
//! and the rules for pruning it.
//!
//! # Crate dependency graph
//!
//! ```text
//! anya_search  ←  anya_harness  ←  lock_tests
//! (engine)        (worlds, runner)  (acceptance, fixtures)
//! ```
//!
//! # Key types
//!
//! - [`AnyaSearch`]: the engine, with `search` and `search_cost_only`
//! - [`ExpansionPolicy`] / [`IntervalVertex`]: the successor contract
//! - [`NodePool`]: generation-stamped node records reused across searches
//! - [`OpenList`]: min-heap by `f`, larger `g` first on ties
//! - [`RootTable`]: best node per root point, with [`judge`] as the
//!   dominance rule
//! - [`SearchTracer`] / [`TraceRecorder`]: lifecycle events for offline
//!   visualisation
//! - [`SearchPolicy`]: tolerance and capacity knobs

#![forbid(unsafe_code)]

pub mod contract;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod heuristic;
pub mod node;
pub mod open_list;
pub mod path;
pub mod policy;
pub mod pool;
pub mod recorder;
pub mod roots;
pub mod stats;
pub mod tracer;

pub use contract::{ExpansionPolicy, IntervalVertex};
pub use engine::{AnyaSearch, SearchOutcome, SearchState};
pub use error::SearchError;
pub use geometry::{root_fingerprint, root_hash_hex, Interval, Point, EPSILON};
pub use heuristic::{EuclideanHeuristic, Heuristic, ZeroHeuristic};
pub use node::{NodeHandle, SearchNode};
pub use open_list::{OpenEntry, OpenKey, OpenList};
pub use path::{reconstruct_path, Path, PathStep};
pub use policy::SearchPolicy;
pub use pool::NodePool;
pub use recorder::{TraceEventKind, TraceRecorder, TraceWriteError};
pub use roots::{judge, RootTable, Verdict};
pub use stats::SearchStats;
pub use tracer::{NoopTracer, SearchTracer, VertexAttrs};
