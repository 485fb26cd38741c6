// Parameter descriptors - metadata for one positional argument of an
// events function.
//
// Order is significant and is carried by the owning Vec: the position of a
// descriptor matches the positional argument order at call sites.

use serde::{Deserialize, Serialize};

use crate::Project;

/// Metadata for one positional argument of an events function.
///
/// A descriptor is pure data: the code generator decides how the declared
/// `value_type` maps to a generated argument, and the editor decides how the
/// parameter is presented. Every field is freely settable; incomplete
/// descriptors are rejected by the consumers, not here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParameterDescriptor {
    /// Declared type of the parameter (e.g. "object", "string", "expression").
    #[serde(rename = "type")]
    pub value_type: String,
    /// Parameter name, used in sentences as `_PARAMn_` placeholders.
    pub name: String,
    /// Human-readable description shown in the editor.
    pub description: String,
    /// Default value applied when the call site leaves the argument empty.
    pub default_value: String,
    /// Whether the call site may omit this argument.
    pub optional: bool,
    /// Hidden from the editor UI; the value is supplied by generated code.
    pub code_only: bool,
}

impl ParameterDescriptor {
    /// Create a descriptor with the given type and name.
    pub fn new(value_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            value_type: value_type.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    /// Add a description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Add a default value.
    pub fn with_default_value(mut self, default_value: impl Into<String>) -> Self {
        self.default_value = default_value.into();
        self
    }

    /// Mark the parameter as optional.
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Mark the parameter as code-only (invisible in the editor).
    pub fn code_only(mut self) -> Self {
        self.code_only = true;
        self
    }

    /// Serialize the descriptor to a structured element.
    ///
    /// Field names are part of the save-format contract and must stay stable:
    /// `type`, `name`, `description`, `defaultValue`, `optional`, `codeOnly`.
    pub fn serialize_to(&self) -> serde_json::Value {
        serde_json::json!({
            "type": self.value_type,
            "name": self.name,
            "description": self.description,
            "defaultValue": self.default_value,
            "optional": self.optional,
            "codeOnly": self.code_only,
        })
    }

    /// Load a descriptor from a structured element.
    ///
    /// Missing fields take their defaults; a corrupt element propagates the
    /// reader's error. The project context is reserved for resolving
    /// project-wide type information and is not inspected here.
    pub fn unserialize_from(
        _project: &Project,
        element: &serde_json::Value,
    ) -> Result<Self, serde_json::Error> {
        serde_json::from_value(element.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameter_roundtrip() {
        let project = Project::default();
        let param = ParameterDescriptor::new("object", "Target")
            .with_description("The object to test")
            .with_default_value("Player")
            .optional();

        let element = param.serialize_to();
        let loaded = ParameterDescriptor::unserialize_from(&project, &element).unwrap();
        assert_eq!(loaded, param);
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let project = Project::default();
        let element = serde_json::json!({ "type": "string", "name": "Message" });

        let loaded = ParameterDescriptor::unserialize_from(&project, &element).unwrap();
        assert_eq!(loaded.value_type, "string");
        assert_eq!(loaded.name, "Message");
        assert_eq!(loaded.default_value, "");
        assert!(!loaded.optional);
        assert!(!loaded.code_only);
    }
}
