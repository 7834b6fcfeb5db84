//! Domain types for content list screens.
//!
//! These are pure data types with no rendering or I/O concerns.

mod content;
mod screen;
mod snapshot;

pub use content::{ContentId, ContentItem, User};
pub use screen::{
    FAILED_DESCRIPTOR, FailedDescriptor, ScreenDescriptor, ScreenKind, describe,
    is_personal_collection,
};
pub use snapshot::{DataState, ListSnapshot};
