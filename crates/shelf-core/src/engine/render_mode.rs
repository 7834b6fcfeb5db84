//! Render mode resolution.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::domain::{DataState, ListSnapshot, ScreenKind};

/// Which sub-view the rendering surface must display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum RenderMode {
    /// Full-screen spinner, nothing to show yet.
    Loading,
    /// Empty-state placeholder for the screen.
    Empty,
    /// Generic failure with a retry button.
    Failed,
    /// The item list, optionally covered by a centred spinner.
    List { with_overlay_spinner: bool },
}

impl RenderMode {
    pub const fn is_list(self) -> bool {
        matches!(self, Self::List { .. })
    }

    pub const fn shows_overlay_spinner(self) -> bool {
        matches!(
            self,
            Self::List {
                with_overlay_spinner: true
            }
        )
    }
}

/// Resolve the render mode for `screen` given the current snapshot.
///
/// Downloads always renders as a list: its emptiness depends on the local
/// download registry as well as the snapshot, and the caller resolves that
/// with [`downloads_body`](super::downloads_body).
pub fn decide(screen: ScreenKind, snapshot: &ListSnapshot) -> RenderMode {
    if screen == ScreenKind::Downloads {
        return RenderMode::List {
            with_overlay_spinner: false,
        };
    }

    let has_items = !snapshot.is_empty();
    let mode = match (snapshot.data_state(), has_items) {
        (DataState::Initial, _) | (DataState::Loading, false) => RenderMode::Loading,
        (DataState::HasData, false) => RenderMode::Empty,
        (DataState::HasData, true) => RenderMode::List {
            with_overlay_spinner: false,
        },
        // Stale rows stay visible during a reload. While paging, the footer
        // indicator is already spinning.
        (DataState::Loading, true) => RenderMode::List {
            with_overlay_spinner: !snapshot.is_loading_more(),
        },
        (DataState::Failed, _) => RenderMode::Failed,
        (DataState::Unknown, _) => {
            warn!(
                screen = %screen,
                items = snapshot.len(),
                total = snapshot.total_count(),
                "Unexpected list state, falling back to empty view"
            );
            RenderMode::Empty
        }
    };

    debug!(screen = %screen, state = ?snapshot.data_state(), ?mode, "Resolved render mode");
    mode
}
