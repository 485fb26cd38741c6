// Event graph body - the ordered sequence of visual-scripting events that
// constitute a function's behavior.
//
// Events are consumed opaquely by this crate: an event carries its type id,
// its own payload (kept as raw JSON) and an optional list of sub-events.
// Interpreting or generating code from the graph is the job of external
// collaborators.

use serde_json::{Map, Value};

use crate::Project;

// ─────────────────────────────────────────────────────────────────────────────
// Event
// ─────────────────────────────────────────────────────────────────────────────

/// A single node of an event graph.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    /// Event type id (e.g. "BuiltinCommonInstructions::Standard").
    pub event_type: String,
    /// Disabled events are kept in the graph but skipped by code generation.
    pub disabled: bool,
    /// Event-specific payload, carried verbatim.
    pub config: Value,
    /// Nested events, executed in the scope of this event.
    pub sub_events: EventsList,
}

impl Default for Event {
    fn default() -> Self {
        Self {
            event_type: String::new(),
            disabled: false,
            config: Value::Null,
            sub_events: EventsList::new(),
        }
    }
}

impl Event {
    /// Create an event of the given type with no payload.
    pub fn new(event_type: impl Into<String>) -> Self {
        Self {
            event_type: event_type.into(),
            ..Self::default()
        }
    }

    /// Create an event of the given type with a payload.
    pub fn with_config(event_type: impl Into<String>, config: Value) -> Self {
        Self {
            event_type: event_type.into(),
            config,
            ..Self::default()
        }
    }

    /// Serialize the event to a structured element.
    pub fn serialize_to(&self) -> Value {
        let mut element = Map::new();
        element.insert("type".to_string(), Value::String(self.event_type.clone()));
        if self.disabled {
            element.insert("disabled".to_string(), Value::Bool(true));
        }
        if !self.config.is_null() {
            element.insert("config".to_string(), self.config.clone());
        }
        if !self.sub_events.is_empty() {
            element.insert("subEvents".to_string(), self.sub_events.serialize_to());
        }
        Value::Object(element)
    }

    /// Load an event from a structured element.
    ///
    /// Missing fields take their defaults. The project context is forwarded
    /// to nested sub-event deserialization.
    pub fn unserialize_from(project: &Project, element: &Value) -> Result<Self, serde_json::Error> {
        let mut event = Event::default();
        if let Some(event_type) = element.get("type").and_then(Value::as_str) {
            event.event_type = event_type.to_string();
        }
        event.disabled = element
            .get("disabled")
            .and_then(Value::as_bool)
            .unwrap_or(false);
        if let Some(config) = element.get("config") {
            event.config = config.clone();
        }
        if let Some(sub_events) = element.get("subEvents") {
            event.sub_events.unserialize_from(project, sub_events)?;
        }
        Ok(event)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Events List
// ─────────────────────────────────────────────────────────────────────────────

/// An ordered, mutable list of events.
///
/// The list exclusively owns its events; cloning it deep-copies the whole
/// graph, sub-events included.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventsList {
    events: Vec<Event>,
}

impl EventsList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of events at this level of the graph.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Check if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Total number of events, counting nested sub-events.
    pub fn events_count(&self) -> usize {
        self.events
            .iter()
            .map(|e| 1 + e.sub_events.events_count())
            .sum()
    }

    /// Append an event at the end of the list.
    pub fn push(&mut self, event: Event) {
        self.events.push(event);
    }

    /// Insert an event at the given position (clamped to the list length).
    pub fn insert(&mut self, position: usize, event: Event) {
        let position = position.min(self.events.len());
        self.events.insert(position, event);
    }

    /// Remove and return the event at the given position, if any.
    pub fn remove(&mut self, position: usize) -> Option<Event> {
        if position < self.events.len() {
            Some(self.events.remove(position))
        } else {
            None
        }
    }

    /// Get an event by position.
    pub fn get(&self, position: usize) -> Option<&Event> {
        self.events.get(position)
    }

    /// Get a mutable event by position.
    pub fn get_mut(&mut self, position: usize) -> Option<&mut Event> {
        self.events.get_mut(position)
    }

    /// Iterate over the events, in order.
    pub fn iter(&self) -> impl Iterator<Item = &Event> {
        self.events.iter()
    }

    /// Iterate mutably over the events, in order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Event> {
        self.events.iter_mut()
    }

    /// Remove all events.
    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Serialize the list to a structured element (an array, in order).
    pub fn serialize_to(&self) -> Value {
        Value::Array(self.events.iter().map(Event::serialize_to).collect())
    }

    /// Load the list from a structured element, replacing the current content.
    ///
    /// A corrupt element (not an array) propagates the reader's error and
    /// leaves the list empty.
    pub fn unserialize_from(
        &mut self,
        project: &Project,
        element: &Value,
    ) -> Result<(), serde_json::Error> {
        self.events.clear();
        let items: Vec<Value> = serde_json::from_value(element.clone())?;
        for item in &items {
            self.events.push(Event::unserialize_from(project, item)?);
        }
        Ok(())
    }
}
