//! Settings repository trait definition.
//!
//! This port defines the interface for list settings persistence.
//! Implementations handle all storage details internally.

use super::RepositoryError;
use crate::settings::ListSettings;

/// Repository for list settings persistence.
///
/// # Design Rules
///
/// - Works with domain `ListSettings` type directly
/// - Implementation handles serialization internally
pub trait SettingsRepository: Send + Sync {
    /// Load list settings.
    ///
    /// Returns default settings if none are stored.
    fn load(&self) -> Result<ListSettings, RepositoryError>;

    /// Save list settings.
    fn save(&self, settings: &ListSettings) -> Result<(), RepositoryError>;
}
