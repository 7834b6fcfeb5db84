//! Errors raised by the presentation core.
//!
//! The engine performs no I/O, so every variant here is either a malformed
//! input or a caller precondition that was violated.

use thiserror::Error;

use crate::domain::ContentId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListError {
    /// A row index did not point into the rendered list.
    #[error("index {index} out of range for list of {len} items")]
    IndexOutOfRange { index: usize, len: usize },

    /// A row was activated while no user was signed in.
    #[error("no authenticated user while activating content {content_id}")]
    MissingSession { content_id: ContentId },

    /// A snapshot claimed fewer items in total than it carried.
    #[error("malformed snapshot: {loaded} items loaded but total count is {total}")]
    MalformedSnapshot { loaded: usize, total: usize },
}

impl ListError {
    /// Whether this error is a caller bug rather than bad data.
    pub const fn is_precondition_violation(&self) -> bool {
        matches!(
            self,
            Self::IndexOutOfRange { .. } | Self::MissingSession { .. }
        )
    }
}
