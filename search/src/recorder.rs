//! `TraceRecorder`: in-memory [`SearchTracer`] producing the JSON event
//! document consumed by the search visualiser.
//!
//! # Document layout
//!
//! ```text
//! {
//!   "nodeStructure": [ ...shape templates... ],
//!   "eventList": [
//!     {"type": "source", "id": 0, "variables": {...}},
//!     {"type": "destination", "id": 9, "variables": {...}},
//!     {"id": "0", "pId": null, "type": "generating", "variables": {...}, "g": 0.0, "f": 5.0},
//!     {"id": "0", "pId": null, "type": "expanding", ...},
//!     ...
//!     {"type": "end", "id": 9, "variables": {...}, "f": 5.0, "g": 5.0, "pId": 4}
//!   ]
//! }
//! ```
//!
//! Node events carry string ids; `source`, `destination` and `end` carry
//! numeric ids with coordinates rounded to one decimal. Several searches
//! recorded by the same recorder append to one event list.

use std::collections::BTreeMap;
use std::path::Path;

use thiserror::Error;

use crate::tracer::{SearchTracer, VertexAttrs};

/// Event type tags used in the `type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceEventKind {
    Source,
    Destination,
    Generating,
    Updating,
    Expanding,
    Closing,
    End,
}

impl TraceEventKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Source => "source",
            Self::Destination => "destination",
            Self::Generating => "generating",
            Self::Updating => "updating",
            Self::Expanding => "expanding",
            Self::Closing => "closing",
            Self::End => "end",
        }
    }
}

/// Errors persisting a trace document.
#[derive(Debug, Error)]
pub enum TraceWriteError {
    #[error("trace serialization failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("trace write failed: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy)]
struct NodeRecord {
    attrs: VertexAttrs,
    parent_id: Option<u32>,
    g: f64,
    f: f64,
}

/// Records search events as JSON values.
#[derive(Debug, Default)]
pub struct TraceRecorder {
    events: Vec<serde_json::Value>,
    nodes: BTreeMap<u32, NodeRecord>,
}

impl TraceRecorder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Events recorded so far, in emission order.
    #[must_use]
    pub fn events(&self) -> &[serde_json::Value] {
        &self.events
    }

    /// The `type` tag of every recorded event.
    #[must_use]
    pub fn event_types(&self) -> Vec<&str> {
        self.events
            .iter()
            .map(|e| e["type"].as_str().unwrap_or_default())
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Drop all events and node bookkeeping.
    pub fn clear(&mut self) {
        self.events.clear();
        self.nodes.clear();
    }

    /// The complete visualiser document.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "eventList": self.events,
            "nodeStructure": node_structure(),
        })
    }

    /// Serialize the document to compact JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns [`TraceWriteError::Json`] if serialization fails.
    pub fn to_json_bytes(&self) -> Result<Vec<u8>, TraceWriteError> {
        Ok(serde_json::to_vec(&self.to_json_value())?)
    }

    /// Write the document to `path`, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns [`TraceWriteError`] on serialization or I/O failure.
    pub fn write_json(&self, path: &Path) -> Result<(), TraceWriteError> {
        let bytes = serde_json::to_vec_pretty(&self.to_json_value())?;
        std::fs::write(path, bytes)?;
        Ok(())
    }

    fn push_node_event(&mut self, kind: TraceEventKind, id: u32) {
        let event = match self.nodes.get(&id) {
            Some(rec) => node_event(kind, id, rec.parent_id, Some(&rec.attrs), rec.g, rec.f),
            None => serde_json::json!({
                "id": id.to_string(),
                "type": kind.as_str(),
            }),
        };
        self.events.push(event);
    }
}

impl SearchTracer for TraceRecorder {
    fn on_start(&mut self, start_id: u32, start: &VertexAttrs, target_id: u32, target: &VertexAttrs) {
        self.nodes.clear();
        self.events
            .push(endpoint_event(TraceEventKind::Source, start_id, start));
        self.events
            .push(endpoint_event(TraceEventKind::Destination, target_id, target));
    }

    fn on_generate(&mut self, id: u32, parent_id: Option<u32>, attrs: &VertexAttrs, g: f64, f: f64) {
        // A queued node keeps its accepted values; later generations of the
        // same vertex that lose the dominance test must not overwrite them.
        self.nodes.entry(id).or_insert(NodeRecord {
            attrs: *attrs,
            parent_id,
            g,
            f,
        });
        self.events.push(node_event(
            TraceEventKind::Generating,
            id,
            parent_id,
            Some(attrs),
            g,
            f,
        ));
    }

    fn on_expand(&mut self, id: u32) {
        self.push_node_event(TraceEventKind::Expanding, id);
    }

    fn on_update(&mut self, id: u32, parent_id: u32, g: f64, f: f64) {
        let attrs = self.nodes.get(&id).map(|rec| rec.attrs);
        if let Some(attrs) = attrs {
            self.nodes.insert(
                id,
                NodeRecord {
                    attrs,
                    parent_id: Some(parent_id),
                    g,
                    f,
                },
            );
        }
        self.events.push(node_event(
            TraceEventKind::Updating,
            id,
            Some(parent_id),
            attrs.as_ref(),
            g,
            f,
        ));
    }

    fn on_close(&mut self, id: u32) {
        self.push_node_event(TraceEventKind::Closing, id);
    }

    fn on_finish(&mut self, target_id: u32, target: &VertexAttrs, parent_id: u32, cost: f64) {
        let mut event = endpoint_event(TraceEventKind::End, target_id, target);
        event["f"] = serde_json::json!(cost);
        event["g"] = serde_json::json!(cost);
        event["pId"] = serde_json::json!(parent_id);
        self.events.push(event);
    }
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

fn variables_json(attrs: &VertexAttrs) -> serde_json::Value {
    serde_json::json!({
        "cx": attrs.cx,
        "cy": attrs.cy,
        "x1": attrs.x1,
        "x2": attrs.x2,
        "y1": attrs.y1,
        "y2": attrs.y2,
    })
}

/// Start, target and end markers collapse the vertex onto its root point.
fn endpoint_event(kind: TraceEventKind, id: u32, attrs: &VertexAttrs) -> serde_json::Value {
    let cx = round1(attrs.cx);
    let cy = round1(attrs.cy);
    serde_json::json!({
        "id": id,
        "type": kind.as_str(),
        "variables": {
            "cx": cx,
            "cy": cy,
            "x1": cx,
            "x2": cx,
            "y1": cy,
            "y2": cy,
        },
    })
}

fn node_event(
    kind: TraceEventKind,
    id: u32,
    parent_id: Option<u32>,
    attrs: Option<&VertexAttrs>,
    g: f64,
    f: f64,
) -> serde_json::Value {
    serde_json::json!({
        "f": f,
        "g": g,
        "id": id.to_string(),
        "pId": parent_id.map(|p| p.to_string()),
        "type": kind.as_str(),
        "variables": attrs.map(variables_json),
    })
}

/// Shape templates: the root as a persisted circle, the interval as a line,
/// the two rays from the root to the interval ends, and the visibility
/// triangle.
fn node_structure() -> serde_json::Value {
    serde_json::json!([
        {
            "type": "circle",
            "variables": {"cx": "cx", "cy": "cy"},
            "persisted": true,
            "drawPath": true,
        },
        {
            "type": "line",
            "variables": {"x1": "x1", "y1": "y1", "x2": "x2", "y2": "y2"},
            "persisted": false,
        },
        {
            "type": "line",
            "variables": {"x1": "cx", "y1": "cy", "x2": "x1", "y2": "y1"},
            "persisted": false,
        },
        {
            "type": "line",
            "variables": {"x1": "cx", "y1": "cy", "x2": "x2", "y2": "y2"},
            "persisted": false,
        },
        {
            "type": "polygon",
            "variables": {"points": ["x1", "y1", "x2", "y2", "cx", "cy"]},
            "persisted": false,
        },
    ])
}
