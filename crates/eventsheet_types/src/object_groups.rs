// Object groups - named sets of object references usable as a single target
// within event logic.
//
// Each events function carries its own groups container, independent of the
// groups defined at the project or scene level.

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Object Group
// ─────────────────────────────────────────────────────────────────────────────

/// A named set of object names.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ObjectGroup {
    /// Group name, used as the target name in event logic.
    pub name: String,
    /// Names of the objects in the group, in insertion order.
    pub objects: Vec<String>,
}

impl ObjectGroup {
    /// Create an empty group with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            objects: Vec::new(),
        }
    }

    /// Add an object to the group if it is not already there.
    pub fn add_object(&mut self, object_name: impl Into<String>) {
        let object_name = object_name.into();
        if !self.objects.contains(&object_name) {
            self.objects.push(object_name);
        }
    }

    /// Remove an object from the group.
    pub fn remove_object(&mut self, object_name: &str) {
        self.objects.retain(|o| o != object_name);
    }

    /// Check if the group contains an object.
    pub fn contains(&self, object_name: &str) -> bool {
        self.objects.iter().any(|o| o == object_name)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Object Groups Container
// ─────────────────────────────────────────────────────────────────────────────

/// Ordered collection of object groups, looked up by name.
///
/// Insertion order is preserved across clone and serialization; names are not
/// checked for uniqueness here (the editor is responsible for that).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectGroupsContainer {
    groups: Vec<ObjectGroup>,
}

impl ObjectGroupsContainer {
    /// Create an empty container.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of groups.
    pub fn count(&self) -> usize {
        self.groups.len()
    }

    /// Check if the container is empty.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Check if a group with the given name exists.
    pub fn has(&self, name: &str) -> bool {
        self.groups.iter().any(|g| g.name == name)
    }

    /// Get a group by name.
    pub fn get(&self, name: &str) -> Option<&ObjectGroup> {
        self.groups.iter().find(|g| g.name == name)
    }

    /// Get a mutable group by name.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut ObjectGroup> {
        self.groups.iter_mut().find(|g| g.name == name)
    }

    /// Append a new empty group and return a mutable reference to it.
    pub fn insert_new(&mut self, name: impl Into<String>) -> &mut ObjectGroup {
        self.groups.push(ObjectGroup::new(name));
        let last = self.groups.len() - 1;
        &mut self.groups[last]
    }

    /// Insert a group at the given position (clamped to the container size).
    pub fn insert(&mut self, position: usize, group: ObjectGroup) {
        let position = position.min(self.groups.len());
        self.groups.insert(position, group);
    }

    /// Remove a group by name, returning it if it existed.
    pub fn remove(&mut self, name: &str) -> Option<ObjectGroup> {
        let position = self.groups.iter().position(|g| g.name == name)?;
        Some(self.groups.remove(position))
    }

    /// Rename a group, keeping its position and content.
    pub fn rename(&mut self, old_name: &str, new_name: impl Into<String>) -> bool {
        match self.get_mut(old_name) {
            Some(group) => {
                group.name = new_name.into();
                true
            }
            None => false,
        }
    }

    /// Iterate over the groups, in order.
    pub fn iter(&self) -> impl Iterator<Item = &ObjectGroup> {
        self.groups.iter()
    }

    /// Serialize the container to a structured element (an array, in order).
    pub fn serialize_to(&self) -> serde_json::Value {
        serde_json::json!(self.groups)
    }

    /// Load the container from a structured element, replacing the content.
    pub fn unserialize_from(&mut self, element: &serde_json::Value) -> Result<(), serde_json::Error> {
        self.groups = serde_json::from_value(element.clone())?;
        Ok(())
    }
}
