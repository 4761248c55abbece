//! In-memory directed graph storage
//!
//! A `DirectedGraphStore` exclusively owns its vertices, edges and every
//! property value. Nothing is shared by reference between two stores, so a
//! clone (`Clone::clone`) is a full deep copy of both topology and
//! properties: mutating one side is never observable on the other.

use super::config::{GraphOptions, StringifyFormat};
use super::edge::Edge;
use super::property::PropertyValue;
use super::snapshot::GraphData;
use super::types::{EdgeKey, VertexId};
use super::vertex::Vertex;
use indexmap::{IndexMap, IndexSet};
use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur during graph operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("Vertex {0} already exists")]
    DuplicateVertex(VertexId),

    #[error("Edge {0} already exists")]
    DuplicateEdge(EdgeKey),

    #[error("Invalid edge {edge}: vertex {missing} does not exist")]
    DanglingEdge { edge: EdgeKey, missing: VertexId },

    #[error("Vertex {0} not found")]
    VertexNotFound(VertexId),

    #[error("Edge {0} not found")]
    EdgeNotFound(EdgeKey),

    #[error("Property of {0} is not finite: NaN and infinities have no JSON form")]
    NonFiniteProperty(String),

    #[error("Invalid graph JSON: {0}")]
    Json(String),
}

pub type GraphResult<T> = Result<T, GraphError>;

/// In-memory directed graph
///
/// Storage layout:
/// - vertices: VertexId -> Vertex (insertion ordered)
/// - edges: (u, v) -> Edge (insertion ordered)
/// - outgoing: VertexId -> heads of edges leaving it
/// - incoming: VertexId -> tails of edges entering it
///
/// Every vertex has an (possibly empty) entry in both adjacency maps.
#[derive(Debug, Clone, Default)]
pub struct DirectedGraphStore {
    name: String,
    description: String,
    vertices: IndexMap<VertexId, Vertex>,
    edges: IndexMap<EdgeKey, Edge>,
    outgoing: FxHashMap<VertexId, IndexSet<VertexId>>,
    incoming: FxHashMap<VertexId, IndexSet<VertexId>>,
}

impl DirectedGraphStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store carrying the given metadata
    pub fn with_options(options: GraphOptions) -> Self {
        DirectedGraphStore {
            name: options.name,
            description: options.description,
            ..Default::default()
        }
    }

    /// Build a store from vertex and edge lists.
    ///
    /// Fails with `DuplicateVertex`, `DanglingEdge`, `DuplicateEdge` or
    /// `NonFiniteProperty`; no store is produced on failure.
    pub fn create(vertices: Vec<Vertex>, edges: Vec<Edge>) -> GraphResult<Self> {
        Self::from_data(GraphData::new(vertices, edges))
    }

    /// Build a store from a snapshot
    pub fn from_data(data: GraphData) -> GraphResult<Self> {
        let GraphData {
            name,
            description,
            vertices,
            edges,
        } = data;

        let mut store = Self::with_options(GraphOptions { name, description });

        for vertex in vertices {
            if store.vertices.contains_key(&vertex.id) {
                return Err(GraphError::DuplicateVertex(vertex.id));
            }
            ensure_finite(&vertex.property, || format!("vertex {}", vertex.id))?;
            store.insert_vertex(vertex);
        }

        for edge in edges {
            for endpoint in [&edge.u, &edge.v] {
                if !store.vertices.contains_key(endpoint) {
                    return Err(GraphError::DanglingEdge {
                        edge: edge.key(),
                        missing: endpoint.clone(),
                    });
                }
            }
            if store.is_edge(edge.u.as_str(), edge.v.as_str()) {
                return Err(GraphError::DuplicateEdge(edge.key()));
            }
            ensure_finite(&edge.property, || format!("edge {}", edge.key()))?;
            store.insert_edge(edge);
        }

        debug!(
            "Created graph '{}' with {} vertices and {} edges",
            store.name,
            store.vertex_count(),
            store.edge_count()
        );
        Ok(store)
    }

    /// Parse a JSON snapshot and build a store from it
    pub fn from_json(json: &str) -> GraphResult<Self> {
        Self::from_data(GraphData::from_json(json)?)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Get a vertex record
    pub fn get_vertex(&self, id: &str) -> Option<&Vertex> {
        self.vertices.get(id)
    }

    /// Check if a vertex exists
    pub fn is_vertex(&self, id: &str) -> bool {
        self.vertices.contains_key(id)
    }

    /// Add a vertex. Fails if the id is taken.
    pub fn add_vertex(
        &mut self,
        id: impl Into<VertexId>,
        property: impl Into<PropertyValue>,
    ) -> GraphResult<()> {
        let id = id.into();
        if self.vertices.contains_key(&id) {
            return Err(GraphError::DuplicateVertex(id));
        }
        let property = property.into();
        ensure_finite(&property, || format!("vertex {}", id))?;
        debug!("Adding vertex {}", id);
        self.insert_vertex(Vertex::with_property(id, property));
        Ok(())
    }

    /// Remove a vertex along with every edge into or out of it
    pub fn remove_vertex(&mut self, id: &str) -> GraphResult<Vertex> {
        let vertex_id = match self.vertices.get_key_value(id) {
            Some((key, _)) => key.clone(),
            None => return Err(GraphError::VertexNotFound(VertexId::new(id))),
        };

        let heads = self.outgoing.remove(id).unwrap_or_default();
        let tails = self.incoming.remove(id).unwrap_or_default();

        for head in heads {
            self.edges
                .shift_remove(&EdgeKey::new(vertex_id.clone(), head.clone()));
            if let Some(inc) = self.incoming.get_mut(&head) {
                inc.shift_remove(id);
            }
        }
        for tail in tails {
            // Self-loop already removed with the outgoing edges
            if tail == vertex_id {
                continue;
            }
            self.edges
                .shift_remove(&EdgeKey::new(tail.clone(), vertex_id.clone()));
            if let Some(out) = self.outgoing.get_mut(&tail) {
                out.shift_remove(id);
            }
        }

        debug!("Removed vertex {}", vertex_id);
        self.vertices
            .shift_remove(id)
            .ok_or(GraphError::VertexNotFound(vertex_id))
    }

    /// Get the property of a vertex
    pub fn get_vertex_property(&self, id: &str) -> GraphResult<&PropertyValue> {
        self.vertices
            .get(id)
            .map(|vertex| &vertex.property)
            .ok_or_else(|| GraphError::VertexNotFound(VertexId::new(id)))
    }

    /// Replace the property of a vertex, returning the previous value
    pub fn set_vertex_property(
        &mut self,
        id: &str,
        property: impl Into<PropertyValue>,
    ) -> GraphResult<PropertyValue> {
        let property = property.into();
        let vertex = self
            .vertices
            .get_mut(id)
            .ok_or_else(|| GraphError::VertexNotFound(VertexId::new(id)))?;
        ensure_finite(&property, || format!("vertex {}", id))?;
        debug!("Setting property on vertex {}", id);
        Ok(vertex.set_property(property))
    }

    /// Get an edge record
    pub fn get_edge(&self, u: &str, v: &str) -> Option<&Edge> {
        self.edges.get(&EdgeKey::new(u, v))
    }

    /// Check if the directed edge `(u, v)` exists. Never fails.
    pub fn is_edge(&self, u: &str, v: &str) -> bool {
        self.outgoing
            .get(u)
            .is_some_and(|heads| heads.contains(v))
    }

    /// Add the directed edge `(u, v)`
    pub fn add_edge(
        &mut self,
        u: &str,
        v: &str,
        property: impl Into<PropertyValue>,
    ) -> GraphResult<()> {
        // Validate vertices exist
        if !self.is_vertex(u) {
            return Err(GraphError::VertexNotFound(VertexId::new(u)));
        }
        if !self.is_vertex(v) {
            return Err(GraphError::VertexNotFound(VertexId::new(v)));
        }
        if self.is_edge(u, v) {
            return Err(GraphError::DuplicateEdge(EdgeKey::new(u, v)));
        }
        let property = property.into();
        ensure_finite(&property, || format!("edge {}", EdgeKey::new(u, v)))?;

        debug!("Adding edge {} -> {}", u, v);
        self.insert_edge(Edge::with_property(u, v, property));
        Ok(())
    }

    /// Remove the directed edge `(u, v)`
    pub fn remove_edge(&mut self, u: &str, v: &str) -> GraphResult<Edge> {
        let key = EdgeKey::new(u, v);
        let edge = self
            .edges
            .shift_remove(&key)
            .ok_or(GraphError::EdgeNotFound(key))?;

        if let Some(heads) = self.outgoing.get_mut(u) {
            heads.shift_remove(v);
        }
        if let Some(tails) = self.incoming.get_mut(v) {
            tails.shift_remove(u);
        }

        debug!("Removed edge {} -> {}", u, v);
        Ok(edge)
    }

    /// Get the property of an edge
    pub fn get_edge_property(&self, u: &str, v: &str) -> GraphResult<&PropertyValue> {
        self.get_edge(u, v)
            .map(|edge| &edge.property)
            .ok_or_else(|| GraphError::EdgeNotFound(EdgeKey::new(u, v)))
    }

    /// Replace the property of an edge, returning the previous value
    pub fn set_edge_property(
        &mut self,
        u: &str,
        v: &str,
        property: impl Into<PropertyValue>,
    ) -> GraphResult<PropertyValue> {
        let key = EdgeKey::new(u, v);
        let property = property.into();
        ensure_finite(&property, || format!("edge {}", key))?;
        let edge = self
            .edges
            .get_mut(&key)
            .ok_or(GraphError::EdgeNotFound(key))?;
        debug!("Setting property on edge {} -> {}", u, v);
        Ok(edge.set_property(property))
    }

    /// Edges leaving `u`, in insertion order
    pub fn out_edges(&self, u: &str) -> GraphResult<Vec<EdgeKey>> {
        let heads = Self::adjacency(&self.outgoing, u)?;
        Ok(heads.iter().map(|v| EdgeKey::new(u, v)).collect())
    }

    /// Edges entering `v`, in insertion order
    pub fn in_edges(&self, v: &str) -> GraphResult<Vec<EdgeKey>> {
        let tails = Self::adjacency(&self.incoming, v)?;
        Ok(tails.iter().map(|u| EdgeKey::new(u, v)).collect())
    }

    pub fn out_degree(&self, u: &str) -> GraphResult<usize> {
        Ok(Self::adjacency(&self.outgoing, u)?.len())
    }

    pub fn in_degree(&self, v: &str) -> GraphResult<usize> {
        Ok(Self::adjacency(&self.incoming, v)?.len())
    }

    /// Vertices with no incoming edges
    pub fn root_vertices(&self) -> Vec<&VertexId> {
        self.vertices
            .keys()
            .filter(|id| self.incoming.get(*id).is_none_or(IndexSet::is_empty))
            .collect()
    }

    /// Vertices with no outgoing edges
    pub fn leaf_vertices(&self) -> Vec<&VertexId> {
        self.vertices
            .keys()
            .filter(|id| self.outgoing.get(*id).is_none_or(IndexSet::is_empty))
            .collect()
    }

    /// All vertices in insertion order
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.values()
    }

    /// All edges in insertion order
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.values()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Value-type snapshot of the store, in insertion order.
    ///
    /// Feeding the result back to `from_data` yields an equivalent store.
    pub fn to_plain_object(&self) -> GraphData {
        GraphData {
            name: self.name.clone(),
            description: self.description.clone(),
            vertices: self.vertices.values().cloned().collect(),
            edges: self.edges.values().cloned().collect(),
        }
    }

    /// Snapshot as compact JSON, in insertion order
    pub fn to_json(&self) -> GraphResult<String> {
        self.to_plain_object().to_json()
    }

    /// Canonical compact serialization, used for content equality.
    pub fn stringify(&self) -> String {
        self.stringify_with(StringifyFormat::Compact)
    }

    pub fn stringify_with(&self, format: StringifyFormat) -> String {
        match format {
            StringifyFormat::Compact => format!("{}", self),
            StringifyFormat::Pretty => format!("{:#}", self),
        }
    }

    /// Remove all vertices and edges, keeping the metadata
    pub fn clear(&mut self) {
        debug!("Clearing graph '{}'", self.name);
        self.vertices.clear();
        self.edges.clear();
        self.outgoing.clear();
        self.incoming.clear();
    }

    fn adjacency<'a>(
        map: &'a FxHashMap<VertexId, IndexSet<VertexId>>,
        id: &str,
    ) -> GraphResult<&'a IndexSet<VertexId>> {
        map.get(id)
            .ok_or_else(|| GraphError::VertexNotFound(VertexId::new(id)))
    }

    fn insert_vertex(&mut self, vertex: Vertex) {
        self.outgoing.insert(vertex.id.clone(), IndexSet::new());
        self.incoming.insert(vertex.id.clone(), IndexSet::new());
        self.vertices.insert(vertex.id.clone(), vertex);
    }

    /// Caller has validated both endpoints and uniqueness
    fn insert_edge(&mut self, edge: Edge) {
        self.outgoing
            .entry(edge.u.clone())
            .or_default()
            .insert(edge.v.clone());
        self.incoming
            .entry(edge.v.clone())
            .or_default()
            .insert(edge.u.clone());
        self.edges.insert(edge.key(), edge);
    }
}

/// Every property entering a store must survive a JSON round-trip.
fn ensure_finite(property: &PropertyValue, owner: impl FnOnce() -> String) -> GraphResult<()> {
    if property.is_finite() {
        Ok(())
    } else {
        Err(GraphError::NonFiniteProperty(owner()))
    }
}

/// Canonical JSON: vertices sorted by id, edges by `(u, v)`.
/// `{:#}` renders it indented.
impl fmt::Display for DirectedGraphStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut data = self.to_plain_object();
        data.canonicalize();

        let json = if f.alternate() {
            serde_json::to_string_pretty(&data)
        } else {
            serde_json::to_string(&data)
        };
        f.write_str(&json.map_err(|_| fmt::Error)?)
    }
}
