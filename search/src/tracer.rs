//! Search lifecycle events for offline visualisation.
//!
//! The engine calls a [`SearchTracer`] at fixed points of the loop. Every
//! method has an empty default, so [`NoopTracer`] is the disabled state and a
//! recorder only overrides what it stores. Tracers observe; nothing they do
//! feeds back into the search.
//!
//! # Emission order
//!
//! ```text
//! on_start
//! on_generate(start)
//! repeat:
//!     on_expand(current)
//!     [goal]  on_finish → stop
//!     per successor: on_generate, then on_update if accepted
//!     on_close(current)
//! on_exhausted
//! ```

use crate::contract::IntervalVertex;

/// Drawing attributes of a vertex: root `(cx, cy)` and interval endpoints
/// `(x1, y1)`-`(x2, y2)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VertexAttrs {
    pub cx: f64,
    pub cy: f64,
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl VertexAttrs {
    #[must_use]
    pub fn of<V: IntervalVertex>(vertex: &V) -> Self {
        let root = vertex.root();
        let interval = vertex.interval();
        Self {
            cx: root.x,
            cy: root.y,
            x1: interval.left,
            y1: interval.row,
            x2: interval.right,
            y2: interval.row,
        }
    }
}

/// Receiver of search lifecycle events. Ids are vertex ids.
#[allow(unused_variables)]
pub trait SearchTracer {
    /// A search over `(start, target)` begins.
    fn on_start(&mut self, start_id: u32, start: &VertexAttrs, target_id: u32, target: &VertexAttrs) {
    }

    /// A vertex was generated with tentative `g` and `f`.
    fn on_generate(&mut self, id: u32, parent_id: Option<u32>, attrs: &VertexAttrs, g: f64, f: f64) {
    }

    /// A node was popped and is being expanded.
    fn on_expand(&mut self, id: u32) {}

    /// A generated vertex passed the dominance test and was queued.
    fn on_update(&mut self, id: u32, parent_id: u32, g: f64, f: f64) {}

    /// All successors of a node have been processed.
    fn on_close(&mut self, id: u32) {}

    /// The node `parent_id` covers the target; the search ends with `cost`.
    fn on_finish(&mut self, target_id: u32, target: &VertexAttrs, parent_id: u32, cost: f64) {}

    /// The open list ran dry without reaching the target.
    fn on_exhausted(&mut self) {}
}

/// Tracer that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopTracer;

impl SearchTracer for NoopTracer {}

impl<T: SearchTracer + ?Sized> SearchTracer for &mut T {
    fn on_start(&mut self, start_id: u32, start: &VertexAttrs, target_id: u32, target: &VertexAttrs) {
        (**self).on_start(start_id, start, target_id, target);
    }

    fn on_generate(&mut self, id: u32, parent_id: Option<u32>, attrs: &VertexAttrs, g: f64, f: f64) {
        (**self).on_generate(id, parent_id, attrs, g, f);
    }

    fn on_expand(&mut self, id: u32) {
        (**self).on_expand(id);
    }

    fn on_update(&mut self, id: u32, parent_id: u32, g: f64, f: f64) {
        (**self).on_update(id, parent_id, g, f);
    }

    fn on_close(&mut self, id: u32) {
        (**self).on_close(id);
    }

    fn on_finish(&mut self, target_id: u32, target: &VertexAttrs, parent_id: u32, cost: f64) {
        (**self).on_finish(target_id, target, parent_id, cost);
    }

    fn on_exhausted(&mut self) {
        (**self).on_exhausted();
    }
}
