//! List snapshots supplied by the data source on every render.

use serde::{Deserialize, Serialize};

use super::ContentItem;
use crate::error::ListError;

/// Lifecycle of the backing data source.
///
/// Cycles for the life of the screen: `Initial → Loading → HasData | Failed →
/// Loading → ...`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataState {
    #[default]
    Initial,
    Loading,
    /// A fetch succeeded, possibly with zero items.
    HasData,
    Failed,
    /// A state this build does not recognise (e.g. sent by a newer source).
    #[serde(other)]
    Unknown,
}

/// Immutable facts the presentation engine decides from.
///
/// Always satisfies `items.len() <= total_count`; constructors reject or
/// clamp anything else.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "RawListSnapshot")]
pub struct ListSnapshot {
    data_state: DataState,
    items: Vec<ContentItem>,
    total_count: usize,
    is_loading_more: bool,
}

#[derive(Deserialize)]
struct RawListSnapshot {
    data_state: DataState,
    #[serde(default)]
    items: Vec<ContentItem>,
    total_count: Option<usize>,
    #[serde(default)]
    is_loading_more: bool,
}

impl TryFrom<RawListSnapshot> for ListSnapshot {
    type Error = ListError;

    fn try_from(raw: RawListSnapshot) -> Result<Self, Self::Error> {
        let total_count = raw.total_count.unwrap_or(raw.items.len());
        Self::new(raw.data_state, raw.items, total_count, raw.is_loading_more)
    }
}

impl ListSnapshot {
    /// Build a snapshot, rejecting `items.len() > total_count`.
    pub fn new(
        data_state: DataState,
        items: Vec<ContentItem>,
        total_count: usize,
        is_loading_more: bool,
    ) -> Result<Self, ListError> {
        if items.len() > total_count {
            return Err(ListError::MalformedSnapshot {
                loaded: items.len(),
                total: total_count,
            });
        }
        Ok(Self {
            data_state,
            items,
            total_count,
            is_loading_more,
        })
    }

    /// Build a snapshot, raising `total_count` to `items.len()` if it is lower.
    pub fn clamped(
        data_state: DataState,
        items: Vec<ContentItem>,
        total_count: usize,
        is_loading_more: bool,
    ) -> Self {
        if items.len() > total_count {
            tracing::warn!(
                loaded = items.len(),
                total = total_count,
                "Snapshot reports fewer items than loaded, clamping total"
            );
        }
        let total_count = total_count.max(items.len());
        Self {
            data_state,
            items,
            total_count,
            is_loading_more,
        }
    }

    /// Snapshot of a freshly created screen.
    pub const fn initial() -> Self {
        Self {
            data_state: DataState::Initial,
            items: Vec::new(),
            total_count: 0,
            is_loading_more: false,
        }
    }

    pub const fn data_state(&self) -> DataState {
        self.data_state
    }

    pub fn items(&self) -> &[ContentItem] {
        &self.items
    }

    pub const fn total_count(&self) -> usize {
        self.total_count
    }

    pub const fn is_loading_more(&self) -> bool {
        self.is_loading_more
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Replace the loaded items after a local removal.
    ///
    /// `total_count` shrinks by the number of removed items so the snapshot
    /// invariant keeps holding.
    #[must_use]
    pub fn with_items(&self, items: Vec<ContentItem>) -> Self {
        let removed = self.items.len().saturating_sub(items.len());
        let total_count = self.total_count.saturating_sub(removed).max(items.len());
        Self {
            data_state: self.data_state,
            items,
            total_count,
            is_loading_more: self.is_loading_more,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(n: u64) -> Vec<ContentItem> {
        (0..n).map(|i| ContentItem::new(i, format!("item {i}"))).collect()
    }

    #[test]
    fn test_new_rejects_more_items_than_total() {
        let err = ListSnapshot::new(DataState::HasData, items(3), 2, false).unwrap_err();
        assert!(matches!(
            err,
            ListError::MalformedSnapshot {
                loaded: 3,
                total: 2
            }
        ));
    }

    #[test]
    fn test_clamped_raises_total() {
        let snapshot = ListSnapshot::clamped(DataState::HasData, items(3), 1, false);
        assert_eq!(snapshot.total_count(), 3);
        assert_eq!(snapshot.len(), 3);
    }

    #[test]
    fn test_with_items_shrinks_total() {
        let snapshot = ListSnapshot::new(DataState::HasData, items(5), 20, false).unwrap();
        let updated = snapshot.with_items(items(4));
        assert_eq!(updated.total_count(), 19);
        assert_eq!(updated.data_state(), DataState::HasData);
    }

    #[test]
    fn test_deserialize_defaults_total_to_item_count() {
        let json = r#"{"data_state":"has_data","items":[{"id":1,"name":"Swift"}]}"#;
        let snapshot: ListSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.total_count(), 1);
        assert!(!snapshot.is_loading_more());
    }

    #[test]
    fn test_deserialize_rejects_malformed() {
        let json = r#"{"data_state":"loading","items":[{"id":1},{"id":2}],"total_count":1}"#;
        assert!(serde_json::from_str::<ListSnapshot>(json).is_err());
    }

    #[test]
    fn test_unrecognised_state_deserializes_as_unknown() {
        let json = r#"{"data_state":"refreshing","items":[]}"#;
        let snapshot: ListSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.data_state(), DataState::Unknown);
    }
}
