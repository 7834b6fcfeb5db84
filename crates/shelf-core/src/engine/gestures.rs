//! Per-row gesture relay.

use tracing::{debug, info};

use crate::domain::ContentItem;
use crate::ports::{ActionCallback, ContentAction};

/// Relay the primary row gesture (the save icon).
///
/// `succeeded` is the outcome reported by the card; only successful saves
/// are reported upward. Returns whether the callback was invoked.
pub fn relay_primary_gesture(
    item: &ContentItem,
    succeeded: bool,
    callback: &dyn ActionCallback,
) -> bool {
    if !succeeded {
        debug!(content_id = %item.id, "Save gesture did not succeed, nothing to report");
        return false;
    }
    info!(content_id = %item.id, "Relaying save action");
    callback.report(ContentAction::Save, item);
    true
}

/// Secondary row gesture (bookmark toggle).
///
/// Cards only display the bookmark state for now; toggling from the list is
/// disabled until the card interaction is redesigned.
pub fn relay_secondary_gesture(item: &ContentItem) {
    debug!(content_id = %item.id, "Bookmark toggle from list is disabled");
}
