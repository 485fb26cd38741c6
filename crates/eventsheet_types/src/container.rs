// Functions container - the ordered, name-unique collection of events
// functions owned by an extension.
//
// Name uniqueness and duplicate detection live here, not in the functions
// themselves: a descriptor performs no validation of its own.

use crate::EventsFunction;

/// Errors that can occur when working with a functions container.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FunctionsContainerError {
    #[error("Function already exists: {0}")]
    FunctionAlreadyExists(String),
    #[error("Function not found: {0}")]
    FunctionNotFound(String),
}

/// Ordered collection of events functions, unique by name.
///
/// Functions keep their insertion order, which is the order the editor lists
/// them in. Lookup is by function name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventsFunctionsContainer {
    functions: Vec<EventsFunction>,
}

impl EventsFunctionsContainer {
    /// Create an empty container.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of functions.
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    /// Check if the container is empty.
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Check if a function with the given name exists.
    pub fn has(&self, name: &str) -> bool {
        self.functions.iter().any(|f| f.name() == name)
    }

    /// Get a function by name.
    pub fn get(&self, name: &str) -> Option<&EventsFunction> {
        self.functions.iter().find(|f| f.name() == name)
    }

    /// Get a mutable function by name.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut EventsFunction> {
        self.functions.iter_mut().find(|f| f.name() == name)
    }

    /// Append a new empty function with the given name and return a mutable
    /// reference to it.
    pub fn insert_new(
        &mut self,
        name: impl Into<String>,
    ) -> Result<&mut EventsFunction, FunctionsContainerError> {
        let name = name.into();
        if self.has(&name) {
            return Err(FunctionsContainerError::FunctionAlreadyExists(name));
        }
        let mut function = EventsFunction::new();
        function.set_name(name);
        self.functions.push(function);
        let last = self.functions.len() - 1;
        Ok(&mut self.functions[last])
    }

    /// Append an existing function, erroring if its name is already taken.
    pub fn insert(&mut self, function: EventsFunction) -> Result<(), FunctionsContainerError> {
        if self.has(function.name()) {
            return Err(FunctionsContainerError::FunctionAlreadyExists(
                function.name().to_string(),
            ));
        }
        self.functions.push(function);
        Ok(())
    }

    /// Remove a function by name, returning it.
    pub fn remove(&mut self, name: &str) -> Result<EventsFunction, FunctionsContainerError> {
        let position = self
            .functions
            .iter()
            .position(|f| f.name() == name)
            .ok_or_else(|| FunctionsContainerError::FunctionNotFound(name.to_string()))?;
        Ok(self.functions.remove(position))
    }

    /// Rename a function, keeping its position and content.
    ///
    /// Errors if the function does not exist or the new name is taken.
    pub fn rename(&mut self, old_name: &str, new_name: &str) -> Result<(), FunctionsContainerError> {
        if old_name != new_name && self.has(new_name) {
            return Err(FunctionsContainerError::FunctionAlreadyExists(
                new_name.to_string(),
            ));
        }
        let function = self
            .get_mut(old_name)
            .ok_or_else(|| FunctionsContainerError::FunctionNotFound(old_name.to_string()))?;
        function.set_name(new_name);
        Ok(())
    }

    /// Iterate over the functions, in order.
    pub fn iter(&self) -> impl Iterator<Item = &EventsFunction> {
        self.functions.iter()
    }

    /// Iterate mutably over the functions, in order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut EventsFunction> {
        self.functions.iter_mut()
    }

    /// All function names, in order.
    pub fn names(&self) -> Vec<&str> {
        self.functions.iter().map(|f| f.name()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FunctionType;

    #[test]
    fn test_empty_container() {
        let container = EventsFunctionsContainer::new();
        assert!(container.is_empty());
        assert_eq!(container.len(), 0);
        assert!(!container.has("Anything"));
    }

    #[test]
    fn test_insert_new_and_lookup() {
        let mut container = EventsFunctionsContainer::new();

        container
            .insert_new("OnCollision")
            .unwrap()
            .set_function_type(FunctionType::Condition);
        container.insert_new("Explode").unwrap();

        assert_eq!(container.len(), 2);
        assert_eq!(
            container.get("OnCollision").unwrap().function_type(),
            FunctionType::Condition
        );
        assert_eq!(container.names(), vec!["OnCollision", "Explode"]);
    }

    #[test]
    fn test_duplicate_name_fails() {
        let mut container = EventsFunctionsContainer::new();
        container.insert_new("Explode").unwrap();

        let result = container.insert_new("Explode");
        assert_eq!(
            result.err(),
            Some(FunctionsContainerError::FunctionAlreadyExists(
                "Explode".to_string()
            ))
        );
    }

    #[test]
    fn test_rename_keeps_order() {
        let mut container = EventsFunctionsContainer::new();
        container.insert_new("First").unwrap();
        container.insert_new("Second").unwrap();

        container.rename("First", "Initial").unwrap();
        assert_eq!(container.names(), vec!["Initial", "Second"]);

        let result = container.rename("Initial", "Second");
        assert_eq!(
            result,
            Err(FunctionsContainerError::FunctionAlreadyExists(
                "Second".to_string()
            ))
        );
    }

    #[test]
    fn test_remove() {
        let mut container = EventsFunctionsContainer::new();
        container.insert_new("Explode").unwrap();

        let removed = container.remove("Explode").unwrap();
        assert_eq!(removed.name(), "Explode");
        assert!(container.is_empty());

        let result = container.remove("Explode");
        assert_eq!(
            result.err(),
            Some(FunctionsContainerError::FunctionNotFound(
                "Explode".to_string()
            ))
        );
    }
}
