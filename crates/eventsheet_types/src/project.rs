// Project context - project-wide information handed to deserialization.
//
// The context is passed explicitly into `unserialize_from` calls (never held
// as ambient state) so event-graph and parameter deserialization can resolve
// project-wide type and extension information. Descriptors only forward it;
// they never mutate it.

use serde::{Deserialize, Serialize};

/// Project-wide context for deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    /// Project name.
    pub name: String,
    /// Project format version.
    pub version: String,
    /// Ids of the extensions the project has loaded.
    pub extensions: Vec<String>,
}

impl Project {
    /// Create a project context with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Check if an extension is loaded in the project.
    pub fn has_extension(&self, extension_id: &str) -> bool {
        self.extensions.iter().any(|e| e == extension_id)
    }
}
