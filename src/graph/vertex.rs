//! Vertex record

use super::property::PropertyValue;
use super::types::VertexId;
use serde::{Deserialize, Serialize};

/// A vertex in the directed graph
///
/// Vertices have:
/// - A unique ID within their store
/// - One opaque property value (`Null` when unset)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    /// Unique identifier for this vertex
    pub id: VertexId,

    /// Property owned by this vertex
    #[serde(default, skip_serializing_if = "PropertyValue::is_null")]
    pub property: PropertyValue,
}

impl Vertex {
    /// Create a vertex without a property
    pub fn new(id: impl Into<VertexId>) -> Self {
        Vertex {
            id: id.into(),
            property: PropertyValue::Null,
        }
    }

    /// Create a vertex carrying a property
    pub fn with_property(id: impl Into<VertexId>, property: impl Into<PropertyValue>) -> Self {
        Vertex {
            id: id.into(),
            property: property.into(),
        }
    }

    /// Replace the property, returning the previous one
    pub fn set_property(&mut self, property: impl Into<PropertyValue>) -> PropertyValue {
        std::mem::replace(&mut self.property, property.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_vertex() {
        let vertex = Vertex::new("apple");
        assert_eq!(vertex.id, VertexId::new("apple"));
        assert!(vertex.property.is_null());
    }

    #[test]
    fn test_vertex_property() {
        let mut vertex = Vertex::with_property("apple", "Edible skin");
        assert_eq!(vertex.property.as_string(), Some("Edible skin"));

        let old = vertex.set_property("Crunchy");
        assert_eq!(old.as_string(), Some("Edible skin"));
        assert_eq!(vertex.property.as_string(), Some("Crunchy"));
    }

    #[test]
    fn test_null_property_is_omitted() {
        let json = serde_json::to_string(&Vertex::new("apple")).unwrap();
        assert_eq!(json, r#"{"id":"apple"}"#);

        let parsed: Vertex = serde_json::from_str(&json).unwrap();
        assert!(parsed.property.is_null());
    }
}
