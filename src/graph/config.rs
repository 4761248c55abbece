//! Store creation options

use serde::{Deserialize, Serialize};

/// Descriptive metadata carried by a store and its snapshots
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphOptions {
    /// Human-readable graph name
    pub name: String,
    /// Free-form description
    pub description: String,
}

impl GraphOptions {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// Rendering used by `DirectedGraphStore::stringify_with`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StringifyFormat {
    /// Single-line JSON
    #[default]
    Compact,
    /// Indented JSON
    Pretty,
}
