use anyhow::{bail, Context};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use todo_form_core::FixtureStore;

/// Application configuration. Desktop builds read it from `TODO_FORM_*`
/// environment variables; web builds always use the default.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
pub struct AppConfig {
    /// JSON file with the users fixture. Must be set together with `todos_path`.
    pub users_path: Option<PathBuf>,
    /// JSON file with the todos fixture. Must be set together with `users_path`.
    pub todos_path: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration from environment variables
    #[cfg(feature = "desktop")]
    pub fn load() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::Environment::with_prefix("TODO_FORM"))
            .build()?;

        settings.try_deserialize()
    }

    #[cfg(not(feature = "desktop"))]
    pub fn load() -> anyhow::Result<Self> {
        Ok(Self::default())
    }

    /// Builds the fixture store this configuration points at.
    pub fn fixture_store(&self) -> anyhow::Result<FixtureStore> {
        match (&self.users_path, &self.todos_path) {
            (None, None) => {
                tracing::info!("Using embedded fixtures");
                Ok(FixtureStore::embedded()?)
            }
            (Some(users), Some(todos)) => {
                tracing::info!(?users, ?todos, "Loading fixtures from files");
                let users = read_fixture(users)?;
                let todos = read_fixture(todos)?;
                Ok(FixtureStore::from_json(&users, &todos)?)
            }
            _ => bail!("users_path and todos_path must be configured together"),
        }
    }
}

fn read_fixture(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read fixture file {}", path.display()))
}

/// Loads configuration and fixtures in one step for the root component.
pub fn load_fixtures() -> anyhow::Result<FixtureStore> {
    let config = AppConfig::load().context("Failed to load configuration")?;
    config.fixture_store()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_uses_embedded_fixtures() {
        // Arrange
        let config = AppConfig::default();

        // Act
        let store = config.fixture_store().unwrap();

        // Assert
        assert_eq!(store, FixtureStore::embedded().unwrap());
    }

    #[test]
    fn test_half_configured_paths_are_rejected() {
        let config = AppConfig {
            users_path: Some(PathBuf::from("users.json")),
            todos_path: None,
        };

        let err = config.fixture_store().unwrap_err();

        assert!(err.to_string().contains("configured together"));
    }

    #[test]
    fn test_missing_fixture_file_names_the_path() {
        let config = AppConfig {
            users_path: Some(PathBuf::from("/nonexistent/users.json")),
            todos_path: Some(PathBuf::from("/nonexistent/todos.json")),
        };

        let err = config.fixture_store().unwrap_err();

        assert!(err.to_string().contains("/nonexistent/users.json"));
    }
}
