//! Directed graph store
//!
//! An in-memory directed graph whose vertices and edges each carry one opaque
//! property value, with a precise ownership contract:
//!
//! - A store owns every vertex, edge and property it holds.
//! - `clone()` is a full deep copy of topology and properties. Mutating a
//!   clone (properties or edges) is never visible on its source, and the
//!   other way around.
//! - `to_plain_object()` produces a reference-free snapshot; building a store
//!   from it is equivalent to cloning.
//! - `stringify()` is a canonical serialization used to compare contents.
//!
//! ## Example Usage
//!
//! ```rust
//! use digraph_store::{DirectedGraphStore, Edge, Vertex};
//!
//! let source = DirectedGraphStore::create(
//!     vec![
//!         Vertex::with_property("apple", "Edible skin"),
//!         Vertex::with_property("orange", "Inedible skin"),
//!     ],
//!     vec![Edge::with_property("apple", "orange", "Not the same")],
//! )
//! .unwrap();
//!
//! let mut clone = source.clone();
//! assert_eq!(source.stringify(), clone.stringify());
//!
//! clone.set_vertex_property("apple", "updated").unwrap();
//! assert_eq!(
//!     source.get_vertex_property("apple").unwrap().as_string(),
//!     Some("Edible skin")
//! );
//! ```

#![warn(clippy::all)]

pub mod graph;

// Re-export main types for convenience
pub use graph::{
    DirectedGraphStore, Edge, EdgeKey, GraphData, GraphError, GraphOptions, GraphResult,
    PropertyValue, StringifyFormat, Vertex, VertexId,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
