//! Edge record
//!
//! An edge is identified by its ordered `(u, v)` pair, so there are no
//! parallel edges between the same ordered pair of vertices.

use super::property::PropertyValue;
use super::types::{EdgeKey, VertexId};
use serde::{Deserialize, Serialize};

/// A directed edge in the graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// Tail vertex (edge goes FROM this vertex)
    pub u: VertexId,

    /// Head vertex (edge goes TO this vertex)
    pub v: VertexId,

    /// Property owned by this edge
    #[serde(default, skip_serializing_if = "PropertyValue::is_null")]
    pub property: PropertyValue,
}

impl Edge {
    /// Create a new directed edge without a property
    pub fn new(u: impl Into<VertexId>, v: impl Into<VertexId>) -> Self {
        Edge {
            u: u.into(),
            v: v.into(),
            property: PropertyValue::Null,
        }
    }

    /// Create a new directed edge carrying a property
    pub fn with_property(
        u: impl Into<VertexId>,
        v: impl Into<VertexId>,
        property: impl Into<PropertyValue>,
    ) -> Self {
        Edge {
            u: u.into(),
            v: v.into(),
            property: property.into(),
        }
    }

    /// The `(u, v)` identity of this edge
    pub fn key(&self) -> EdgeKey {
        EdgeKey::new(self.u.clone(), self.v.clone())
    }

    /// Replace the property, returning the previous one
    pub fn set_property(&mut self, property: impl Into<PropertyValue>) -> PropertyValue {
        std::mem::replace(&mut self.property, property.into())
    }
}
