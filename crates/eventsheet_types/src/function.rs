// Events function - a named unit of visual-scripting logic that can be
// generated as a stand-alone callable and used as an action, condition or
// expression.
//
// The descriptor is a passive value holder: code generation is done by an
// external generator, and turning a set of functions into a usable extension
// is the job of the editor. No validation happens here; consumers reject
// incomplete descriptors before use.

use serde_json::{Map, Value};

use crate::{EventsList, ObjectGroupsContainer, ParameterDescriptor, Project};

// ─────────────────────────────────────────────────────────────────────────────
// Function Type
// ─────────────────────────────────────────────────────────────────────────────

/// How a generated function is exposed to event logic.
///
/// The tag drives the return-type conventions the code generator applies:
/// actions return nothing, conditions a boolean, expressions a number and
/// string expressions a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FunctionType {
    #[default]
    Action,
    Condition,
    Expression,
    StringExpression,
}

impl FunctionType {
    /// Stable string tag used in serialized documents. Must never change:
    /// previously saved projects depend on these exact values.
    pub fn as_tag(&self) -> &'static str {
        match self {
            FunctionType::Action => "Action",
            FunctionType::Condition => "Condition",
            FunctionType::Expression => "Expression",
            FunctionType::StringExpression => "StringExpression",
        }
    }

    /// Parse a string tag back into a function type.
    ///
    /// Unrecognized tags degrade to `Action` rather than erroring, so legacy
    /// or partially written documents still load.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "Condition" => FunctionType::Condition,
            "Expression" => FunctionType::Expression,
            "StringExpression" => FunctionType::StringExpression,
            _ => FunctionType::Action,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Events Function
// ─────────────────────────────────────────────────────────────────────────────

/// A named, user-authored unit of visual-scripting logic.
///
/// Binds together the function's identity (`name` plus display metadata), its
/// ordered parameter list, its event-graph body and the object groups visible
/// inside that body. The descriptor exclusively owns its body, parameters and
/// groups; `Clone` deep-copies all of them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventsFunction {
    name: String,
    full_name: String,
    description: String,
    sentence: String,
    function_type: FunctionType,
    parameters: Vec<ParameterDescriptor>,
    object_groups: ObjectGroupsContainer,
    events: EventsList,
}

impl EventsFunction {
    /// Create an empty function. Equivalent to `Default::default()`:
    /// empty strings, `Action` type, no parameters, no groups, no events.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the name of the function, used to derive the generated
    /// action/condition/expression name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set the name of the function.
    pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = name.into();
        self
    }

    /// Get the name displayed in the editor.
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// Set the name displayed in the editor.
    pub fn set_full_name(&mut self, full_name: impl Into<String>) -> &mut Self {
        self.full_name = full_name.into();
        self
    }

    /// Get the description displayed in the editor.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Set the description displayed in the editor.
    pub fn set_description(&mut self, description: impl Into<String>) -> &mut Self {
        self.description = description.into();
        self
    }

    /// Get the sentence used to render the function as a readable
    /// condition/action line in the events editor. Parameters appear as
    /// `_PARAMn_` placeholders.
    pub fn sentence(&self) -> &str {
        &self.sentence
    }

    /// Set the sentence used in the events editor.
    pub fn set_sentence(&mut self, sentence: impl Into<String>) -> &mut Self {
        self.sentence = sentence.into();
        self
    }

    /// Get the type of the function.
    pub fn function_type(&self) -> FunctionType {
        self.function_type
    }

    /// Set the type of the function.
    ///
    /// Changing the type reinterprets how the body and parameters are
    /// code-generated; keeping them consistent with the new type is the
    /// caller's responsibility. No cross-field validation is performed.
    pub fn set_function_type(&mut self, function_type: FunctionType) -> &mut Self {
        self.function_type = function_type;
        self
    }

    /// Get the parameters of the function, in call-site positional order.
    ///
    /// During code generation, extra parameters (like the runtime context)
    /// are added to the generated function; those never appear here.
    pub fn parameters(&self) -> &[ParameterDescriptor] {
        &self.parameters
    }

    /// Get the parameters mutably.
    pub fn parameters_mut(&mut self) -> &mut Vec<ParameterDescriptor> {
        &mut self.parameters
    }

    /// Get the object groups that can be used in the function.
    pub fn object_groups(&self) -> &ObjectGroupsContainer {
        &self.object_groups
    }

    /// Get the object groups mutably.
    pub fn object_groups_mut(&mut self) -> &mut ObjectGroupsContainer {
        &mut self.object_groups
    }

    /// Get the event-graph body of the function.
    pub fn events(&self) -> &EventsList {
        &self.events
    }

    /// Get the event-graph body mutably.
    pub fn events_mut(&mut self) -> &mut EventsList {
        &mut self.events
    }

    /// Serialize the function to a structured element.
    ///
    /// A pure function of the current state. Field names are part of the
    /// save-format contract: `name`, `fullName`, `description`, `sentence`,
    /// `functionType`, `parameters`, `objectGroups`, `events`.
    pub fn serialize_to(&self) -> Value {
        let mut element = Map::new();
        element.insert("name".to_string(), Value::String(self.name.clone()));
        element.insert("fullName".to_string(), Value::String(self.full_name.clone()));
        element.insert(
            "description".to_string(),
            Value::String(self.description.clone()),
        );
        element.insert("sentence".to_string(), Value::String(self.sentence.clone()));
        element.insert(
            "functionType".to_string(),
            Value::String(self.function_type.as_tag().to_string()),
        );
        element.insert(
            "parameters".to_string(),
            Value::Array(
                self.parameters
                    .iter()
                    .map(ParameterDescriptor::serialize_to)
                    .collect(),
            ),
        );
        element.insert("objectGroups".to_string(), self.object_groups.serialize_to());
        element.insert("events".to_string(), self.events.serialize_to());
        Value::Object(element)
    }

    /// Load the function from a structured element, replacing every field.
    ///
    /// Missing fields take their defaults (empty string, `Action`, empty
    /// sequences) so legacy or partially written documents load without
    /// erroring; a present-but-corrupt parameter list, groups container or
    /// body propagates the reader's error unmodified. The project context is
    /// forwarded to parameter and event deserialization.
    pub fn unserialize_from(
        &mut self,
        project: &Project,
        element: &Value,
    ) -> Result<(), serde_json::Error> {
        self.name = string_field(element, "name");
        self.full_name = string_field(element, "fullName");
        self.description = string_field(element, "description");
        self.sentence = string_field(element, "sentence");
        self.function_type = element
            .get("functionType")
            .and_then(Value::as_str)
            .map(FunctionType::from_tag)
            .unwrap_or_default();

        self.parameters.clear();
        if let Some(parameters) = element.get("parameters") {
            let items: Vec<Value> = serde_json::from_value(parameters.clone())?;
            for item in &items {
                self.parameters
                    .push(ParameterDescriptor::unserialize_from(project, item)?);
            }
        }

        self.object_groups = ObjectGroupsContainer::new();
        if let Some(object_groups) = element.get("objectGroups") {
            self.object_groups.unserialize_from(object_groups)?;
        }

        self.events.clear();
        if let Some(events) = element.get("events") {
            self.events.unserialize_from(project, events)?;
        }

        Ok(())
    }
}

fn string_field(element: &Value, field: &str) -> String {
    element
        .get(field)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}
