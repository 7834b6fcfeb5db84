//! List settings domain types and validation.
//!
//! These are pure domain types with no infrastructure dependencies.

use serde::{Deserialize, Serialize};

/// Default number of items requested per page.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Tab the explore call to action navigates to (the library).
pub const DEFAULT_EXPLORE_TAB_INDEX: usize = 0;

/// Content list settings.
///
/// All fields are optional to support partial updates and graceful defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ListSettings {
    /// Items requested per page from the data source (1-100).
    pub page_size: Option<u32>,

    /// Tab selected when the explore button is tapped.
    pub explore_tab_index: Option<usize>,

    /// Re-arm the pagination sentinel once the item count grows while it
    /// stays visible.
    pub sentinel_rearm_on_growth: Option<bool>,
}

impl ListSettings {
    /// Create settings with sensible defaults.
    #[must_use]
    pub const fn with_defaults() -> Self {
        Self {
            page_size: Some(DEFAULT_PAGE_SIZE),
            explore_tab_index: Some(DEFAULT_EXPLORE_TAB_INDEX),
            sentinel_rearm_on_growth: Some(true),
        }
    }

    #[must_use]
    pub const fn effective_page_size(&self) -> u32 {
        match self.page_size {
            Some(size) => size,
            None => DEFAULT_PAGE_SIZE,
        }
    }

    #[must_use]
    pub const fn effective_explore_tab_index(&self) -> usize {
        match self.explore_tab_index {
            Some(index) => index,
            None => DEFAULT_EXPLORE_TAB_INDEX,
        }
    }

    #[must_use]
    pub const fn effective_sentinel_rearm(&self) -> bool {
        match self.sentinel_rearm_on_growth {
            Some(rearm) => rearm,
            None => true,
        }
    }

    /// Merge another settings into this one, only updating fields that are Some.
    pub fn merge(&mut self, other: &ListSettingsUpdate) {
        if let Some(page_size) = other.page_size {
            self.page_size = page_size;
        }
        if let Some(tab) = other.explore_tab_index {
            self.explore_tab_index = tab;
        }
        if let Some(rearm) = other.sentinel_rearm_on_growth {
            self.sentinel_rearm_on_growth = rearm;
        }
    }
}

/// Partial settings update.
///
/// Each field is `Option<Option<T>>`:
/// - `None` = don't change this field
/// - `Some(None)` = reset field to its default
/// - `Some(Some(value))` = set field to value
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListSettingsUpdate {
    pub page_size: Option<Option<u32>>,
    pub explore_tab_index: Option<Option<usize>>,
    pub sentinel_rearm_on_growth: Option<Option<bool>>,
}

/// Settings validation error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("Page size must be between 1 and 100, got {0}")]
    InvalidPageSize(u32),

    #[error("Explore tab index must be below 5, got {0}")]
    InvalidTabIndex(usize),
}

/// Validate settings values.
pub fn validate_settings(settings: &ListSettings) -> Result<(), SettingsError> {
    if let Some(page_size) = settings.page_size {
        if !(1..=100).contains(&page_size) {
            return Err(SettingsError::InvalidPageSize(page_size));
        }
    }

    // One tab per screen kind
    if let Some(tab) = settings.explore_tab_index {
        if tab >= crate::domain::ScreenKind::ALL.len() {
            return Err(SettingsError::InvalidTabIndex(tab));
        }
    }

    Ok(())
}
