//! Plain, reference-free graph data
//!
//! `GraphData` is both the construction input of `DirectedGraphStore::create`
//! and the snapshot produced by `to_plain_object`. JSON shape:
//!
//! ```json
//! {
//!   "name": "...",
//!   "description": "...",
//!   "vertices": [{ "id": "apple", "property": "Edible skin" }],
//!   "edges": [{ "u": "apple", "v": "orange", "property": "Not the same" }]
//! }
//! ```

use super::config::GraphOptions;
use super::edge::Edge;
use super::store::{GraphError, GraphResult};
use super::vertex::Vertex;
use serde::{Deserialize, Serialize};

/// Value-type snapshot of a whole graph
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphData {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub vertices: Vec<Vertex>,

    #[serde(default)]
    pub edges: Vec<Edge>,
}

impl GraphData {
    pub fn new(vertices: Vec<Vertex>, edges: Vec<Edge>) -> Self {
        GraphData {
            vertices,
            edges,
            ..Default::default()
        }
    }

    pub fn with_options(options: GraphOptions, vertices: Vec<Vertex>, edges: Vec<Edge>) -> Self {
        GraphData {
            name: options.name,
            description: options.description,
            vertices,
            edges,
        }
    }

    pub fn options(&self) -> GraphOptions {
        GraphOptions::new(self.name.clone(), self.description.clone())
    }

    /// Parse graph data from JSON text
    pub fn from_json(json: &str) -> GraphResult<Self> {
        serde_json::from_str(json).map_err(|e| GraphError::Json(e.to_string()))
    }

    /// Serialize graph data to compact JSON text
    pub fn to_json(&self) -> GraphResult<String> {
        serde_json::to_string(self).map_err(|e| GraphError::Json(e.to_string()))
    }

    /// Put vertices in id order and edges in `(u, v)` order.
    pub(crate) fn canonicalize(&mut self) {
        self.vertices.sort_by(|a, b| a.id.cmp(&b.id));
        self.edges
            .sort_by(|a, b| (&a.u, &a.v).cmp(&(&b.u, &b.v)));
    }
}
