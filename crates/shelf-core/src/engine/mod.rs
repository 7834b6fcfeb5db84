//! List presentation engine.
//!
//! Pure decision functions over `(ScreenKind, ListSnapshot)`. Nothing in here
//! holds state between calls; the only effects are the calls made on the
//! injected [`ActionCallback`](crate::ports::ActionCallback).

mod affordances;
mod delete;
mod gestures;
mod render_mode;

pub use affordances::{DownloadsBody, RowKind, cta_visible, downloads_body, row_kind, should_load_more};
pub use delete::{PendingDelete, delete};
pub use gestures::{relay_primary_gesture, relay_secondary_gesture};
pub use render_mode::{RenderMode, decide};
