//! Derived affordances: pagination, call to action, row kind.

use serde::Serialize;

use crate::domain::{ListSnapshot, ScreenKind, describe};

/// Whether the pagination sentinel should be shown (and request more).
///
/// Never true for a snapshot carrying more items than its total.
pub fn should_load_more(snapshot: &ListSnapshot) -> bool {
    snapshot.total_count() > snapshot.len()
}

/// Whether the empty-state call to action is shown.
///
/// The library's remedy is adjusting search filters, so it never gets one.
pub fn cta_visible(screen: ScreenKind, snapshot: &ListSnapshot) -> bool {
    describe(screen).cta_label.is_some() && snapshot.is_empty() && screen != ScreenKind::Library
}

/// How rows are rendered on a screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RowKind {
    /// Tapping opens the detail view.
    Navigable,
    /// Navigable, plus swipe-to-delete.
    Deletable,
}

pub const fn row_kind(screen: ScreenKind) -> RowKind {
    match screen {
        ScreenKind::Downloads => RowKind::Deletable,
        _ => RowKind::Navigable,
    }
}

/// Body of the downloads list once the engine has chosen list mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DownloadsBody {
    Placeholder,
    Rows,
}

/// Resolve the downloads body from its two emptiness signals.
///
/// With a header section the rows are always shown. Without one, either the
/// requested items or the local download registry being empty shows the
/// placeholder. The two signals are not reconciled here.
pub const fn downloads_body(has_header: bool, items_empty: bool, registry_empty: bool) -> DownloadsBody {
    if !has_header && (items_empty || registry_empty) {
        DownloadsBody::Placeholder
    } else {
        DownloadsBody::Rows
    }
}
