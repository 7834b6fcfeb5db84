//! Upward reporting of user actions on content rows.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::ContentItem;

/// A user action on a single content item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentAction {
    /// The item was saved for offline use.
    Save,
    /// The item was removed from the downloads list.
    Delete,
}

impl fmt::Display for ContentAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Save => f.write_str("save"),
            Self::Delete => f.write_str("delete"),
        }
    }
}

/// Receives actions the list relays upward.
///
/// Delivery is fire-and-forget: no return value, no retry.
pub trait ActionCallback: Send + Sync {
    fn report(&self, action: ContentAction, item: &ContentItem);
}

/// A callback that discards every action.
///
/// Used for screens constructed without an action handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopActionCallback;

impl ActionCallback for NoopActionCallback {
    fn report(&self, _action: ContentAction, _item: &ContentItem) {}
}
