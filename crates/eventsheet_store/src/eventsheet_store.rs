//! Eventsheet Store
//!
//! Loads and saves events functions as part of a project directory.
//!
//! Layout on disk:
//! - `project.json` - the project manifest (name, version, extensions)
//! - `functions/<name>.func.json` - one serialized events function per file

use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::{debug, info, warn};

use eventsheet_types::{EventsFunction, EventsFunctionsContainer, Project};

/// Error type for project loading and saving.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Project path does not exist: {0}")]
    PathNotFound(PathBuf),

    #[error("Project manifest not found: {0}")]
    ManifestNotFound(PathBuf),

    #[error("Failed to read file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParseError(#[from] serde_json::Error),
}

/// A project loaded from disk: the context plus its functions.
#[derive(Debug)]
pub struct LoadedProject {
    /// Root path the project was loaded from.
    pub path: PathBuf,
    /// Project context, built from the manifest.
    pub project: Project,
    /// The project's events functions, in file-discovery order.
    pub functions: EventsFunctionsContainer,
}

/// Project store
pub struct ProjectStore;

impl ProjectStore {
    /// Load a project from the given path.
    pub async fn load(path: impl AsRef<Path>) -> Result<LoadedProject, StoreError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(StoreError::PathNotFound(path.to_path_buf()));
        }

        info!("Loading project from: {}", path.display());

        let manifest_path = path.join("project.json");
        if !manifest_path.exists() {
            return Err(StoreError::ManifestNotFound(manifest_path));
        }

        let manifest_content = fs::read_to_string(&manifest_path).await?;
        let project: Project = serde_json::from_str(&manifest_content)?;
        info!("Loaded project manifest: {}", project.name);

        let functions = Self::load_functions(path, &project).await?;
        info!("Loaded {} functions", functions.len());

        Ok(LoadedProject {
            path: path.to_path_buf(),
            project,
            functions,
        })
    }

    /// Load all functions from the functions/ directory.
    ///
    /// A malformed function file is logged and skipped so one bad document
    /// does not take the whole project down.
    async fn load_functions(
        project_path: &Path,
        project: &Project,
    ) -> Result<EventsFunctionsContainer, StoreError> {
        let functions_dir = project_path.join("functions");
        let mut functions = EventsFunctionsContainer::new();

        if !functions_dir.exists() {
            debug!("No functions directory found");
            return Ok(functions);
        }

        let mut entries = fs::read_dir(&functions_dir).await?;
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();

            // Only process .func.json files
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                if name.ends_with(".func.json") {
                    match Self::load_function(project, &path).await {
                        Ok(function) => {
                            debug!("Loaded function: {}", function.name());
                            if let Err(e) = functions.insert(function) {
                                warn!("Skipping function from {}: {}", path.display(), e);
                            }
                        }
                        Err(e) => {
                            warn!("Failed to load function from {}: {}", path.display(), e);
                        }
                    }
                }
            }
        }

        Ok(functions)
    }

    /// Load a single function document.
    async fn load_function(project: &Project, path: &Path) -> Result<EventsFunction, StoreError> {
        let content = fs::read_to_string(path).await?;
        let element: serde_json::Value = serde_json::from_str(&content)?;

        let mut function = EventsFunction::new();
        function.unserialize_from(project, &element)?;
        Ok(function)
    }

    /// Reload a specific function by name.
    pub async fn reload_function(
        project_path: &Path,
        project: &Project,
        function_name: &str,
    ) -> Result<Option<EventsFunction>, StoreError> {
        let function_path = project_path
            .join("functions")
            .join(format!("{}.func.json", function_name));

        if !function_path.exists() {
            return Ok(None);
        }

        let function = Self::load_function(project, &function_path).await?;
        Ok(Some(function))
    }

    /// Save a function to disk.
    pub async fn save_function(
        project_path: &Path,
        function: &EventsFunction,
    ) -> Result<(), StoreError> {
        let functions_dir = project_path.join("functions");
        if !functions_dir.exists() {
            fs::create_dir_all(&functions_dir).await?;
        }

        let function_path = functions_dir.join(format!("{}.func.json", function.name()));

        // Serialize with pretty formatting
        let content = serde_json::to_string_pretty(&function.serialize_to())?;
        fs::write(&function_path, content).await?;

        debug!("Saved function: {}", function.name());
        Ok(())
    }

    /// Save the project manifest to disk.
    pub async fn save_manifest(project_path: &Path, project: &Project) -> Result<(), StoreError> {
        let manifest_path = project_path.join("project.json");
        let content = serde_json::to_string_pretty(project)?;
        fs::write(&manifest_path, content).await?;

        debug!("Saved project manifest: {}", project.name);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eventsheet_types::{Event, FunctionType, ParameterDescriptor};
    use tempfile::TempDir;
    use tokio::fs;

    async fn create_test_project() -> TempDir {
        let dir = TempDir::new().unwrap();
        let path = dir.path();

        fs::write(
            path.join("project.json"),
            r#"{ "name": "Test Project", "version": "1.0.0", "extensions": ["physics"] }"#,
        )
        .await
        .unwrap();

        fs::create_dir(path.join("functions")).await.unwrap();
        fs::write(
            path.join("functions/OnCollision.func.json"),
            r#"{
                "name": "OnCollision",
                "fullName": "On collision",
                "sentence": "_PARAM0_ collides with something",
                "functionType": "Condition",
                "parameters": [ { "type": "object", "name": "Object" } ],
                "events": [ { "type": "std/Standard" } ]
            }"#,
        )
        .await
        .unwrap();

        dir
    }

    #[tokio::test]
    async fn test_load_project() {
        let dir = create_test_project().await;
        let loaded = ProjectStore::load(dir.path()).await.unwrap();

        assert_eq!(loaded.project.name, "Test Project");
        assert!(loaded.project.has_extension("physics"));
        assert_eq!(loaded.functions.len(), 1);

        let function = loaded.functions.get("OnCollision").unwrap();
        assert_eq!(function.function_type(), FunctionType::Condition);
        assert_eq!(function.parameters().len(), 1);
        assert_eq!(function.parameters()[0].name, "Object");
        assert_eq!(function.events().len(), 1);
    }

    #[tokio::test]
    async fn test_missing_manifest_is_an_error() {
        let dir = TempDir::new().unwrap();
        let result = ProjectStore::load(dir.path()).await;
        assert!(matches!(result, Err(StoreError::ManifestNotFound(_))));
    }

    #[tokio::test]
    async fn test_malformed_function_is_skipped() {
        let dir = create_test_project().await;
        fs::write(
            dir.path().join("functions/Broken.func.json"),
            r#"{ "name": "Broken", "events": "not an array" }"#,
        )
        .await
        .unwrap();

        let loaded = ProjectStore::load(dir.path()).await.unwrap();
        assert_eq!(loaded.functions.len(), 1);
        assert!(!loaded.functions.has("Broken"));
    }

    #[tokio::test]
    async fn test_save_and_reload_function() {
        let dir = create_test_project().await;
        let loaded = ProjectStore::load(dir.path()).await.unwrap();

        let mut function = EventsFunction::new();
        function
            .set_name("Explode")
            .set_full_name("Explode the object")
            .set_function_type(FunctionType::Action);
        function
            .parameters_mut()
            .push(ParameterDescriptor::new("object", "Target").with_default_value("Bomb"));
        function.events_mut().push(Event::new("std/Standard"));

        ProjectStore::save_function(dir.path(), &function)
            .await
            .unwrap();

        let reloaded = ProjectStore::reload_function(dir.path(), &loaded.project, "Explode")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(reloaded, function);
    }

    #[tokio::test]
    async fn test_reload_missing_function_is_none() {
        let dir = create_test_project().await;
        let loaded = ProjectStore::load(dir.path()).await.unwrap();

        let reloaded = ProjectStore::reload_function(dir.path(), &loaded.project, "Nope")
            .await
            .unwrap();
        assert!(reloaded.is_none());
    }
}
