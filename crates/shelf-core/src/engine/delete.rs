//! Row deletion on the downloads screen.
//!
//! A delete gesture captures the row index *and* the identity of the item
//! rendered there. The removal itself runs later, against whatever list is
//! current at that point, and resolves the item by identity.

use tracing::{error, info, warn};

use crate::domain::{ContentId, ContentItem, ListSnapshot};
use crate::error::ListError;
use crate::ports::{ActionCallback, ContentAction};

/// A delete gesture waiting to be applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingDelete {
    index: usize,
    content_id: ContentId,
}

impl PendingDelete {
    /// Pin the item rendered at `index`.
    ///
    /// `index` comes from the rendered list itself, so an out-of-range value
    /// is a caller bug.
    pub fn capture(snapshot: &ListSnapshot, index: usize) -> Result<Self, ListError> {
        let Some(item) = snapshot.items().get(index) else {
            let err = ListError::IndexOutOfRange {
                index,
                len: snapshot.len(),
            };
            error!(%err, "Delete gesture outside the rendered list");
            return Err(err);
        };
        Ok(Self {
            index,
            content_id: item.id,
        })
    }

    pub const fn content_id(&self) -> ContentId {
        self.content_id
    }

    /// Remove the pinned item from `items` and report it.
    ///
    /// Returns `None` without reporting if the item is no longer listed.
    pub fn apply(
        self,
        items: &[ContentItem],
        callback: &dyn ActionCallback,
    ) -> Option<(Vec<ContentItem>, ContentItem)> {
        let position = match items.get(self.index) {
            Some(item) if item.id == self.content_id => self.index,
            _ => {
                let Some(position) = items.iter().position(|item| item.id == self.content_id) else {
                    warn!(
                        content_id = %self.content_id,
                        index = self.index,
                        "Item to delete is gone from the list, skipping"
                    );
                    return None;
                };
                warn!(
                    content_id = %self.content_id,
                    from = self.index,
                    to = position,
                    "List changed before delete dispatch, item moved"
                );
                position
            }
        };

        let mut updated = items.to_vec();
        let removed = updated.remove(position);
        info!(content_id = %removed.id, "Relaying delete action");
        callback.report(ContentAction::Delete, &removed);
        Some((updated, removed))
    }
}

/// Remove the item at `index` and report it as a `Delete` action.
pub fn delete(
    snapshot: &ListSnapshot,
    index: usize,
    callback: &dyn ActionCallback,
) -> Result<(Vec<ContentItem>, ContentItem), ListError> {
    let pending = PendingDelete::capture(snapshot, index)?;
    pending
        .apply(snapshot.items(), callback)
        .ok_or(ListError::IndexOutOfRange {
            index,
            len: snapshot.len(),
        })
}
