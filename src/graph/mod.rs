//! Directed graph data model
//!
//! This module implements:
//! - Vertices keyed by string id, each owning one property value
//! - Directed edges keyed by the ordered `(u, v)` pair, each owning one property value
//! - A store that owns all of the above, with deep-copy clone semantics
//! - Plain snapshots (`GraphData`) for reconstruction and JSON exchange

pub mod config;
pub mod edge;
pub mod property;
pub mod snapshot;
pub mod store;
pub mod types;
pub mod vertex;

// Re-export main types
pub use config::{GraphOptions, StringifyFormat};
pub use edge::Edge;
pub use property::PropertyValue;
pub use snapshot::GraphData;
pub use store::{DirectedGraphStore, GraphError, GraphResult};
pub use types::{EdgeKey, VertexId};
pub use vertex::Vertex;
