//! JSON file implementation of the settings repository.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use shelf_core::{ListSettings, RepositoryError, SettingsRepository};

/// Stores `ListSettings` as pretty-printed JSON at a fixed path.
#[derive(Debug, Clone)]
pub struct JsonSettingsRepository {
    path: PathBuf,
}

impl JsonSettingsRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsRepository for JsonSettingsRepository {
    fn load(&self) -> Result<ListSettings, RepositoryError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "No settings file, using defaults");
                return Ok(ListSettings::with_defaults());
            }
            Err(e) => {
                return Err(RepositoryError::Storage(format!(
                    "{}: {e}",
                    self.path.display()
                )));
            }
        };
        serde_json::from_str(&raw)
            .map_err(|e| RepositoryError::Serialization(format!("{}: {e}", self.path.display())))
    }

    fn save(&self, settings: &ListSettings) -> Result<(), RepositoryError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|e| RepositoryError::Storage(format!("{}: {e}", parent.display())))?;
        }
        let json = serde_json::to_string_pretty(settings)
            .map_err(|e| RepositoryError::Serialization(e.to_string()))?;
        fs::write(&self.path, json)
            .map_err(|e| RepositoryError::Storage(format!("{}: {e}", self.path.display())))
    }
}
