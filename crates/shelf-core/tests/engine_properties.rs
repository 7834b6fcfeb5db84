//! End-to-end checks of the presentation engine through the public API.

use std::sync::Mutex;

use shelf_core::{
    ActionCallback, ContentAction, ContentId, ContentItem, DataState, ListSnapshot, RenderMode,
    ScreenKind, cta_visible, decide, delete, relay_primary_gesture, relay_secondary_gesture,
    should_load_more,
};

#[derive(Default)]
struct RecordingCallback {
    seen: Mutex<Vec<(ContentAction, ContentId)>>,
}

impl RecordingCallback {
    fn seen(&self) -> Vec<(ContentAction, ContentId)> {
        self.seen.lock().unwrap().clone()
    }
}

impl ActionCallback for RecordingCallback {
    fn report(&self, action: ContentAction, item: &ContentItem) {
        self.seen.lock().unwrap().push((action, item.id));
    }
}

fn courses(n: u64) -> Vec<ContentItem> {
    (1..=n)
        .map(|i| ContentItem::new(i, format!("Course {i}")))
        .collect()
}

fn snapshot(state: DataState, loaded: u64, total: usize, loading_more: bool) -> ListSnapshot {
    ListSnapshot::new(state, courses(loaded), total, loading_more).unwrap()
}

#[test]
fn test_paging_session_on_library() {
    let screen = ScreenKind::Library;

    let first = ListSnapshot::initial();
    assert_eq!(decide(screen, &first), RenderMode::Loading);
    assert!(!should_load_more(&first));

    let loaded = snapshot(DataState::HasData, 20, 45, false);
    assert_eq!(
        decide(screen, &loaded),
        RenderMode::List {
            with_overlay_spinner: false
        }
    );
    assert!(should_load_more(&loaded));

    let paging = snapshot(DataState::Loading, 20, 45, true);
    assert!(!decide(screen, &paging).shows_overlay_spinner());

    let done = snapshot(DataState::HasData, 45, 45, false);
    assert!(decide(screen, &done).is_list());
    assert!(!should_load_more(&done));
}

#[test]
fn test_failed_then_retry() {
    let screen = ScreenKind::Bookmarked;
    assert_eq!(
        decide(screen, &snapshot(DataState::Failed, 0, 0, false)),
        RenderMode::Failed
    );
    assert_eq!(
        decide(screen, &snapshot(DataState::Loading, 0, 0, false)),
        RenderMode::Loading
    );
    assert_eq!(
        decide(screen, &snapshot(DataState::HasData, 0, 0, false)),
        RenderMode::Empty
    );
    assert!(cta_visible(screen, &snapshot(DataState::HasData, 0, 0, false)));
}

#[test]
fn test_cta_library_vs_downloads() {
    let empty = snapshot(DataState::HasData, 0, 0, false);
    assert!(!cta_visible(ScreenKind::Library, &empty));
    assert!(cta_visible(ScreenKind::Downloads, &empty));
}

#[test]
fn test_delete_reports_exactly_the_removed_item() {
    let callback = RecordingCallback::default();
    let list = snapshot(DataState::HasData, 6, 6, false);

    let (remaining, removed) = delete(&list, 3, &callback).unwrap();

    assert_eq!(remaining.len(), 5);
    assert_eq!(removed.id, ContentId(4));
    assert!(remaining.iter().all(|item| item.id != ContentId(4)));
    assert_eq!(callback.seen(), vec![(ContentAction::Delete, ContentId(4))]);
}

#[test]
fn test_primary_gesture_reports_save_only_on_success() {
    let callback = RecordingCallback::default();
    let item = ContentItem::new(7, "Server Side Swift");

    assert!(!relay_primary_gesture(&item, false, &callback));
    assert!(relay_primary_gesture(&item, true, &callback));
    relay_secondary_gesture(&item);

    assert_eq!(callback.seen(), vec![(ContentAction::Save, ContentId(7))]);
}
