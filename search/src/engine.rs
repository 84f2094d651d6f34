//! Search entry point and expansion loop.

use tracing::{debug, debug_span, trace};

use crate::contract::{ExpansionPolicy, IntervalVertex};
use crate::error::SearchError;
use crate::geometry::{root_hash_hex, Point};
use crate::heuristic::Heuristic;
use crate::node::{NodeHandle, SearchNode};
use crate::open_list::OpenList;
use crate::path::{reconstruct_path, Path};
use crate::policy::SearchPolicy;
use crate::pool::NodePool;
use crate::roots::{judge, RootTable, Verdict};
use crate::stats::SearchStats;
use crate::tracer::{NoopTracer, SearchTracer, VertexAttrs};

/// Where the engine is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SearchState {
    /// No search has completed yet, or the last instance was rejected.
    Idle,
    /// Inside the expansion loop.
    Running,
    /// The last search reached the target.
    Found { goal: NodeHandle, cost: f64 },
    /// The last search emptied the open list.
    Exhausted,
}

/// Result of one search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SearchOutcome {
    /// The expansion policy rejected `(start, target)`.
    Invalid,
    Found { cost: f64 },
    /// No path exists.
    Exhausted,
}

impl SearchOutcome {
    #[must_use]
    pub fn cost(self) -> Option<f64> {
        match self {
            Self::Found { cost } => Some(cost),
            Self::Invalid | Self::Exhausted => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Invalid => "invalid",
            Self::Found { .. } => "found",
            Self::Exhausted => "exhausted",
        }
    }
}

/// Best-first interval search with root-level dominance pruning.
///
/// The engine owns its node pool, open list and root table and reuses them
/// across searches. Every search takes `&mut self`, so one engine runs one
/// search at a time; run concurrent searches on separate engines.
pub struct AnyaSearch<P: ExpansionPolicy, H, T = NoopTracer> {
    expander: P,
    heuristic: H,
    tracer: T,
    policy: SearchPolicy,
    pool: NodePool<P::Vertex>,
    open: OpenList,
    roots: RootTable,
    stats: SearchStats,
    state: SearchState,
}

impl<P, H> AnyaSearch<P, H, NoopTracer>
where
    P: ExpansionPolicy,
    H: Heuristic<P::Vertex>,
{
    /// Engine without tracing.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError`] if `policy` fails validation.
    pub fn new(expander: P, heuristic: H, policy: SearchPolicy) -> Result<Self, SearchError> {
        Self::with_tracer(expander, heuristic, policy, NoopTracer)
    }
}

impl<P, H, T> AnyaSearch<P, H, T>
where
    P: ExpansionPolicy,
    H: Heuristic<P::Vertex>,
    T: SearchTracer,
{
    /// Engine reporting lifecycle events to `tracer`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError`] if `policy` fails validation.
    pub fn with_tracer(
        expander: P,
        heuristic: H,
        policy: SearchPolicy,
        tracer: T,
    ) -> Result<Self, SearchError> {
        policy.validate()?;
        Ok(Self {
            expander,
            heuristic,
            tracer,
            pool: NodePool::with_capacity(policy.pool_capacity),
            open: OpenList::new(),
            roots: RootTable::with_capacity(policy.root_table_capacity),
            stats: SearchStats::default(),
            state: SearchState::Idle,
            policy,
        })
    }

    /// Cost of the shortest path from `start` to `target`, if one exists.
    pub fn search_cost_only(&mut self, start: &P::Vertex, target: &P::Vertex) -> Option<f64> {
        self.run(start, target).cost()
    }

    /// Shortest path from `start` to `target`, if one exists.
    pub fn search(&mut self, start: &P::Vertex, target: &P::Vertex) -> Option<Path<P::Vertex>> {
        match self.run(start, target) {
            SearchOutcome::Found { .. } => self.last_path(target),
            SearchOutcome::Invalid | SearchOutcome::Exhausted => None,
        }
    }

    /// Path found by the most recent search, if it reached the target.
    #[must_use]
    pub fn last_path(&self, target: &P::Vertex) -> Option<Path<P::Vertex>> {
        match self.state {
            SearchState::Found { goal, cost } => {
                reconstruct_path(&self.pool, goal, target, cost, self.policy.epsilon)
            }
            SearchState::Idle | SearchState::Running | SearchState::Exhausted => None,
        }
    }

    /// Run one search and report how it ended.
    pub fn run(&mut self, start: &P::Vertex, target: &P::Vertex) -> SearchOutcome {
        let search_id = self.begin();
        let span = debug_span!("anya.search", search_id, start = start.id(), target = target.id());
        let _enter = span.enter();

        if !self.expander.validate(start, target) {
            debug!("instance rejected by expansion policy");
            return SearchOutcome::Invalid;
        }

        self.state = SearchState::Running;
        self.tracer.on_start(
            start.id(),
            &VertexAttrs::of(start),
            target.id(),
            &VertexAttrs::of(target),
        );
        self.seed(start, target);

        let target_root = target.root();
        while let Some(entry) = self.open.extract_min() {
            self.stats.heap_ops += 1;
            let current = entry.handle;

            let node = self.pool.node_mut(current);
            if node.heap_stamp == Some(entry.key.stamp) {
                node.heap_stamp = None;
            }
            if node.closed {
                self.stats.stale_skipped += 1;
                trace!(handle = current.index(), f = entry.key.f, "skipping stale entry");
                continue;
            }
            node.closed = true;
            let (current_g, current_f) = (node.g, node.f);

            if let Some(cost) = self.expand(current, current_g, current_f, target, target_root) {
                self.state = SearchState::Found {
                    goal: current,
                    cost,
                };
                return SearchOutcome::Found { cost };
            }
        }

        debug!(
            expanded = self.stats.expanded,
            generated = self.stats.generated,
            "open list exhausted"
        );
        self.state = SearchState::Exhausted;
        self.tracer.on_exhausted();
        SearchOutcome::Exhausted
    }

    /// Counters of the most recent search.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    #[must_use]
    pub fn state(&self) -> SearchState {
        self.state
    }

    #[must_use]
    pub fn policy(&self) -> &SearchPolicy {
        &self.policy
    }

    #[must_use]
    pub fn tracer(&self) -> &T {
        &self.tracer
    }

    pub fn tracer_mut(&mut self) -> &mut T {
        &mut self.tracer
    }

    #[must_use]
    pub fn expander(&self) -> &P {
        &self.expander
    }

    /// Node records, for inspection between searches.
    #[must_use]
    pub fn pool(&self) -> &NodePool<P::Vertex> {
        &self.pool
    }

    /// Entries still queued after the most recent search.
    #[must_use]
    pub fn open_len(&self) -> usize {
        self.open.len()
    }

    /// Give back the tracer, dropping the engine.
    pub fn into_tracer(self) -> T {
        self.tracer
    }

    /// Start a new search generation with empty open list and root table.
    fn begin(&mut self) -> u32 {
        self.stats = SearchStats::default();
        self.state = SearchState::Idle;
        self.open.clear();
        self.roots.clear();
        self.pool.begin_search()
    }

    /// Queue the start node with `g = 0` and record it as its root's best.
    fn seed(&mut self, start: &P::Vertex, target: &P::Vertex) {
        let h = self.heuristic.estimate(start, target);
        let handle = self.pool.get_or_create(start);
        self.pool.reset(handle);
        let node = self.pool.node_mut(handle);
        node.g = 0.0;
        node.f = h;

        self.stats.generated += 1;
        self.tracer
            .on_generate(start.id(), None, &VertexAttrs::of(start), 0.0, h);
        self.push(handle, h, 0.0);
        self.roots.record(self.expander.root_hash(start), handle);
    }

    fn push(&mut self, handle: NodeHandle, f: f64, g: f64) {
        let stamp = self.open.insert(handle, f, g);
        self.pool.node_mut(handle).heap_stamp = Some(stamp);
        self.stats.heap_ops += 1;
        self.stats.open_high_water = self.open.high_water() as u64;
    }

    /// Expand a freshly closed node. Returns the path cost if it covers the
    /// target.
    fn expand(
        &mut self,
        current: NodeHandle,
        current_g: f64,
        current_f: f64,
        target: &P::Vertex,
        target_root: Point,
    ) -> Option<f64> {
        let vertex = self.pool.vertex(current).clone();
        let current_id = vertex.id();
        self.stats.expanded += 1;
        self.tracer.on_expand(current_id);
        debug!(vertex = current_id, g = current_g, f = current_f, "expanding");

        if vertex.contains(target_root) {
            debug!(
                vertex = current_id,
                cost = current_f,
                expanded = self.stats.expanded,
                "target reached"
            );
            self.tracer
                .on_finish(target.id(), &VertexAttrs::of(target), current_id, current_f);
            return Some(current_f);
        }

        let parent_hash = self.expander.root_hash(&vertex);
        self.expander.expand(&vertex);
        while self.expander.has_next() {
            let Some(succ) = self.expander.next() else {
                break;
            };
            self.relax(current, current_id, current_g, parent_hash, &succ, target);
        }

        self.tracer.on_close(current_id);
        None
    }

    /// Apply the root dominance rule to one successor and queue it if it
    /// survives.
    fn relax(
        &mut self,
        current: NodeHandle,
        current_id: u32,
        current_g: f64,
        parent_hash: u64,
        succ: &P::Vertex,
        target: &P::Vertex,
    ) {
        let handle = self.pool.get_or_create(succ);
        self.pool.ensure_current(handle);
        self.stats.generated += 1;

        let succ_id = succ.id();
        let new_g = current_g + self.expander.step_cost();
        let new_f = new_g + self.heuristic.estimate(succ, target);
        self.tracer
            .on_generate(succ_id, Some(current_id), &VertexAttrs::of(succ), new_g, new_f);

        let root_hash = self.expander.root_hash(succ);
        let verdict = self.dominance(new_g, root_hash, parent_hash);

        if !verdict.is_accepted() {
            self.stats.rejected += 1;
            trace!(
                vertex = succ_id,
                g = new_g,
                root = %root_hash_hex(root_hash),
                verdict = verdict.as_str(),
                "pruned"
            );
            return;
        }

        self.pool.reset(handle);
        let node = self.pool.node_mut(handle);
        node.parent = Some(current);
        node.g = new_g;
        node.f = new_f;
        self.push(handle, new_f, new_g);
        self.roots.record(root_hash, handle);
        self.stats.insertions += 1;
        self.tracer.on_update(succ_id, current_id, new_g, new_f);
        trace!(
            vertex = succ_id,
            parent = current_id,
            g = new_g,
            f = new_f,
            root = %root_hash_hex(root_hash),
            verdict = verdict.as_str(),
            "inserted"
        );
    }

    fn dominance(&self, new_g: f64, root_hash: u64, parent_hash: u64) -> Verdict {
        let Some(best_g) = self.roots.best_g(root_hash, &self.pool) else {
            return Verdict::Unclaimed;
        };
        let rep_parent_hash = self
            .roots
            .get(root_hash)
            .and_then(|rep| self.pool.node(rep))
            .and_then(SearchNode::parent)
            .map(|p| self.expander.root_hash(self.pool.vertex(p)));
        judge(
            new_g,
            best_g,
            root_hash,
            parent_hash,
            rep_parent_hash,
            self.policy.epsilon,
        )
    }
}
