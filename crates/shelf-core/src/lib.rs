//! Core domain types and presentation logic for shelf content lists.
//!
//! A content list screen (library, downloads, in-progress, completed,
//! bookmarked) is driven by a [`ListSnapshot`] supplied by an external data
//! source. The [`engine`] turns `(ScreenKind, ListSnapshot)` into a
//! [`RenderMode`] and the derived affordances; everything it talks to lives
//! behind the [`ports`] traits.
//!
//! ```text
//! data source ──snapshot──▶ engine::decide ──RenderMode──▶ rendering surface
//!      ▲                         │
//!      └──── load_more ◀── should_load_more
//! ```

#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod engine;
pub mod error;
pub mod ports;
pub mod settings;

pub use domain::{
    ContentId, ContentItem, DataState, FAILED_DESCRIPTOR, FailedDescriptor, ListSnapshot,
    ScreenDescriptor, ScreenKind, User, describe, is_personal_collection,
};
pub use engine::{
    DownloadsBody, PendingDelete, RenderMode, RowKind, cta_visible, decide, delete,
    downloads_body, relay_primary_gesture, relay_secondary_gesture, row_kind, should_load_more,
};
pub use error::ListError;
pub use ports::{
    ActionCallback, ContentAction, Navigator, NoopActionCallback, Paginatable, RepositoryError,
    SessionProvider, SettingsRepository,
};
pub use settings::{
    DEFAULT_EXPLORE_TAB_INDEX, DEFAULT_PAGE_SIZE, ListSettings, ListSettingsUpdate, SettingsError,
    validate_settings,
};

#[cfg(test)]
use serde_json as _;
