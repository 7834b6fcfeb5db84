//! View-model types handed to the rendering surface.
//!
//! Everything here is derived; the surface only switches over these values
//! and never re-implements the decision logic.

use serde::Serialize;
use shelf_core::{
    ContentId, DownloadsBody, FAILED_DESCRIPTOR, FailedDescriptor, ListSnapshot, RenderMode,
    RowKind, ScreenDescriptor, ScreenKind, User, cta_visible, decide, describe, downloads_body,
    row_kind, should_load_more,
};

/// Facts about the hosting view that are not part of the data snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewContext {
    /// The list is wrapped in a section with a header view.
    pub has_header: bool,
    /// The local download registry holds nothing (downloads screen only).
    pub registry_empty: bool,
}

/// What tapping the call to action does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CtaAction {
    /// Switch to the browsing tab.
    Explore,
    /// Ask the data source to start over.
    Reload,
}

/// A call-to-action button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CallToAction {
    pub label: &'static str,
    pub action: CtaAction,
}

/// Navigation target produced when a row is activated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailRoute {
    pub content_id: ContentId,
    pub user: User,
}

/// Everything the surface needs to render one frame of a content list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListViewModel {
    pub screen: ScreenKind,
    pub mode: RenderMode,
    pub descriptor: ScreenDescriptor,
    /// Failure copy, present only in `Failed` mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<FailedDescriptor>,
    /// How the downloads list body is filled, downloads screen only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub downloads_body: Option<DownloadsBody>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub call_to_action: Option<CallToAction>,
    pub row_kind: RowKind,
    /// Render the pagination sentinel at the end of the list.
    pub show_load_more: bool,
    pub item_count: usize,
    pub total_count: usize,
}

impl ListViewModel {
    pub fn build(screen: ScreenKind, snapshot: &ListSnapshot, context: ViewContext) -> Self {
        let mode = decide(screen, snapshot);
        let descriptor = *describe(screen);

        let downloads_body = (screen == ScreenKind::Downloads).then(|| {
            downloads_body(context.has_header, snapshot.is_empty(), context.registry_empty)
        });
        let shows_placeholder =
            mode == RenderMode::Empty || downloads_body == Some(DownloadsBody::Placeholder);

        let call_to_action = if mode == RenderMode::Failed {
            Some(CallToAction {
                label: FAILED_DESCRIPTOR.retry_label,
                action: CtaAction::Reload,
            })
        } else if shows_placeholder && cta_visible(screen, snapshot) {
            descriptor.cta_label.map(|label| CallToAction {
                label,
                action: CtaAction::Explore,
            })
        } else {
            None
        };

        Self {
            screen,
            mode,
            descriptor,
            failure: (mode == RenderMode::Failed).then_some(FAILED_DESCRIPTOR),
            downloads_body,
            call_to_action,
            row_kind: row_kind(screen),
            show_load_more: mode.is_list() && should_load_more(snapshot),
            item_count: snapshot.len(),
            total_count: snapshot.total_count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shelf_core::{ContentItem, DataState};

    fn snapshot(state: DataState, loaded: u64, total: usize) -> ListSnapshot {
        let items = (0..loaded).map(|i| ContentItem::new(i, "video")).collect();
        ListSnapshot::new(state, items, total, false).unwrap()
    }

    #[test]
    fn test_failed_view_offers_reload() {
        let vm = ListViewModel::build(
            ScreenKind::Library,
            &snapshot(DataState::Failed, 0, 0),
            ViewContext::default(),
        );
        assert_eq!(vm.mode, RenderMode::Failed);
        assert_eq!(vm.failure, Some(FAILED_DESCRIPTOR));
        assert_eq!(
            vm.call_to_action,
            Some(CallToAction {
                label: "Reload",
                action: CtaAction::Reload
            })
        );
    }

    #[test]
    fn test_empty_library_has_no_button() {
        let vm = ListViewModel::build(
            ScreenKind::Library,
            &snapshot(DataState::HasData, 0, 0),
            ViewContext::default(),
        );
        assert_eq!(vm.mode, RenderMode::Empty);
        assert_eq!(vm.call_to_action, None);
    }

    #[test]
    fn test_empty_bookmarks_explore() {
        let vm = ListViewModel::build(
            ScreenKind::Bookmarked,
            &snapshot(DataState::HasData, 0, 0),
            ViewContext::default(),
        );
        assert_eq!(
            vm.call_to_action.map(|cta| cta.action),
            Some(CtaAction::Explore)
        );
        assert_eq!(vm.descriptor.empty_image_key, "artworkBookmarks");
    }

    #[test]
    fn test_loading_view_has_no_button() {
        let vm = ListViewModel::build(
            ScreenKind::Completed,
            &snapshot(DataState::Loading, 0, 0),
            ViewContext::default(),
        );
        assert_eq!(vm.mode, RenderMode::Loading);
        assert_eq!(vm.call_to_action, None);
        assert!(!vm.show_load_more);
    }

    #[test]
    fn test_downloads_placeholder_when_registry_empty() {
        let vm = ListViewModel::build(
            ScreenKind::Downloads,
            &snapshot(DataState::HasData, 2, 2),
            ViewContext {
                has_header: false,
                registry_empty: true,
            },
        );
        assert!(vm.mode.is_list());
        assert_eq!(vm.downloads_body, Some(DownloadsBody::Placeholder));
        assert_eq!(vm.row_kind, RowKind::Deletable);
    }

    #[test]
    fn test_downloads_empty_shows_explore() {
        let vm = ListViewModel::build(
            ScreenKind::Downloads,
            &snapshot(DataState::Initial, 0, 0),
            ViewContext::default(),
        );
        assert_eq!(vm.downloads_body, Some(DownloadsBody::Placeholder));
        assert_eq!(
            vm.call_to_action.map(|cta| cta.label),
            Some("Explore Tutorials")
        );
    }

    #[test]
    fn test_list_with_more_shows_sentinel() {
        let vm = ListViewModel::build(
            ScreenKind::InProgress,
            &snapshot(DataState::HasData, 10, 25),
            ViewContext::default(),
        );
        assert!(vm.show_load_more);
        assert_eq!(vm.downloads_body, None);
        assert_eq!((vm.item_count, vm.total_count), (10, 25));
    }

    #[test]
    fn test_view_model_serializes_mode_inline() {
        let vm = ListViewModel::build(
            ScreenKind::Library,
            &snapshot(DataState::HasData, 1, 1),
            ViewContext::default(),
        );
        let json = serde_json::to_value(&vm).unwrap();
        assert_eq!(json["mode"]["mode"], "list");
        assert_eq!(json["screen"], "library");
        assert!(json.get("failure").is_none());
    }
}
