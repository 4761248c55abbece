//! Property values attached to vertices and edges
//!
//! The store never interprets a property: it copies, stores and returns it.
//! Every variant owns its data outright, so `Clone` is always a deep copy.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Opaque property value
///
/// Supports:
/// - Null (no property)
/// - Boolean
/// - Integer (i64)
/// - Float (f64)
/// - String
/// - Array (Vec<PropertyValue>)
/// - Map (sorted keys, so equal maps serialize identically)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    #[default]
    Null,
    Boolean(bool),
    Integer(i64),
    Float(f64),
    String(String),
    Array(Vec<PropertyValue>),
    Map(BTreeMap<String, PropertyValue>),
}

impl PropertyValue {
    /// Check if value is null
    pub fn is_null(&self) -> bool {
        matches!(self, PropertyValue::Null)
    }

    /// Get string value if this is a string
    pub fn as_string(&self) -> Option<&str> {
        match self {
            PropertyValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get integer value if this is an integer
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            PropertyValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Get float value if this is a float
    pub fn as_float(&self) -> Option<f64> {
        match self {
            PropertyValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Get boolean value if this is a boolean
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            PropertyValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Get array value if this is an array
    pub fn as_array(&self) -> Option<&Vec<PropertyValue>> {
        match self {
            PropertyValue::Array(arr) => Some(arr),
            _ => None,
        }
    }

    /// Get mutable array value if this is an array
    pub fn as_array_mut(&mut self) -> Option<&mut Vec<PropertyValue>> {
        match self {
            PropertyValue::Array(arr) => Some(arr),
            _ => None,
        }
    }

    /// Get map value if this is a map
    pub fn as_map(&self) -> Option<&BTreeMap<String, PropertyValue>> {
        match self {
            PropertyValue::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Get mutable map value if this is a map
    pub fn as_map_mut(&mut self) -> Option<&mut BTreeMap<String, PropertyValue>> {
        match self {
            PropertyValue::Map(map) => Some(map),
            _ => None,
        }
    }

    /// True unless a float anywhere inside is NaN or infinite.
    ///
    /// JSON has no encoding for non-finite numbers, so the store refuses them.
    pub fn is_finite(&self) -> bool {
        match self {
            PropertyValue::Float(f) => f.is_finite(),
            PropertyValue::Array(arr) => arr.iter().all(PropertyValue::is_finite),
            PropertyValue::Map(map) => map.values().all(PropertyValue::is_finite),
            _ => true,
        }
    }
}

/// Same JSON text `stringify` uses for this value
impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}

// Convenience conversions
impl From<String> for PropertyValue {
    fn from(s: String) -> Self {
        PropertyValue::String(s)
    }
}

impl From<&str> for PropertyValue {
    fn from(s: &str) -> Self {
        PropertyValue::String(s.to_string())
    }
}

impl From<i64> for PropertyValue {
    fn from(i: i64) -> Self {
        PropertyValue::Integer(i)
    }
}

impl From<i32> for PropertyValue {
    fn from(i: i32) -> Self {
        PropertyValue::Integer(i as i64)
    }
}

impl From<f64> for PropertyValue {
    fn from(f: f64) -> Self {
        PropertyValue::Float(f)
    }
}

impl From<bool> for PropertyValue {
    fn from(b: bool) -> Self {
        PropertyValue::Boolean(b)
    }
}

impl From<Vec<PropertyValue>> for PropertyValue {
    fn from(arr: Vec<PropertyValue>) -> Self {
        PropertyValue::Array(arr)
    }
}

impl From<BTreeMap<String, PropertyValue>> for PropertyValue {
    fn from(map: BTreeMap<String, PropertyValue>) -> Self {
        PropertyValue::Map(map)
    }
}

impl<T: Into<PropertyValue>> From<Option<T>> for PropertyValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(PropertyValue::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_value_conversions() {
        let string_prop: PropertyValue = "Edible skin".into();
        assert_eq!(string_prop.as_string(), Some("Edible skin"));

        let int_prop: PropertyValue = 42i64.into();
        assert_eq!(int_prop.as_integer(), Some(42));

        let float_prop: PropertyValue = 2.5.into();
        assert_eq!(float_prop.as_float(), Some(2.5));

        let bool_prop: PropertyValue = true.into();
        assert_eq!(bool_prop.as_boolean(), Some(true));

        let none_prop: PropertyValue = Option::<&str>::None.into();
        assert!(none_prop.is_null());
    }

    #[test]
    fn test_untagged_json_shape() {
        let mut map = BTreeMap::new();
        map.insert("weight".to_string(), PropertyValue::Integer(3));
        map.insert("color".to_string(), PropertyValue::from("red"));
        let value = PropertyValue::Array(vec![
            PropertyValue::Null,
            PropertyValue::Boolean(false),
            PropertyValue::Map(map),
        ]);

        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, r#"[null,false,{"color":"red","weight":3}]"#);

        let parsed: PropertyValue = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, value);
    }

    #[test]
    fn test_integer_and_float_are_distinguished() {
        let int: PropertyValue = serde_json::from_str("7").unwrap();
        assert_eq!(int, PropertyValue::Integer(7));

        let float: PropertyValue = serde_json::from_str("7.5").unwrap();
        assert_eq!(float, PropertyValue::Float(7.5));
    }

    #[test]
    fn test_clone_is_deep() {
        let mut map = BTreeMap::new();
        map.insert("tags".to_string(), PropertyValue::Array(vec!["a".into()]));
        let original = PropertyValue::Map(map);

        let mut copy = original.clone();
        copy.as_map_mut()
            .unwrap()
            .get_mut("tags")
            .unwrap()
            .as_array_mut()
            .unwrap()
            .push("b".into());

        let tags = original.as_map().unwrap().get("tags").unwrap();
        assert_eq!(tags.as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_display_matches_json() {
        let value = PropertyValue::Array(vec![1i64.into(), "say \"hi\"".into(), PropertyValue::Null]);
        assert_eq!(format!("{}", value), r#"[1,"say \"hi\"",null]"#);
        assert_eq!(format!("{}", value), serde_json::to_string(&value).unwrap());
    }

    #[test]
    fn test_is_finite() {
        assert!(PropertyValue::Float(1.5).is_finite());
        assert!(PropertyValue::from("nan").is_finite());
        assert!(!PropertyValue::Float(f64::NAN).is_finite());
        assert!(!PropertyValue::Float(f64::NEG_INFINITY).is_finite());

        let mut map = BTreeMap::new();
        map.insert(
            "deep".to_string(),
            PropertyValue::Array(vec![PropertyValue::Float(f64::INFINITY)]),
        );
        assert!(!PropertyValue::Map(map).is_finite());
    }
}
