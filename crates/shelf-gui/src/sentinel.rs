//! Pagination sentinel at the end of the list.
//!
//! The engine only says *whether* more items exist. This guard decides
//! *when* to ask: once per exposure of the sentinel, and never while the
//! source already has a page in flight.

use shelf_core::{ListSnapshot, Paginatable, should_load_more};
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct PaginationSentinel {
    visible: bool,
    /// Item count at the time of the last request during this exposure.
    fired_at: Option<usize>,
    rearm_on_growth: bool,
}

impl PaginationSentinel {
    pub const fn new(rearm_on_growth: bool) -> Self {
        Self {
            visible: false,
            fired_at: None,
            rearm_on_growth,
        }
    }

    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    /// The sentinel scrolled into view. Returns whether `load_more` was called.
    pub fn on_visible(&mut self, snapshot: &ListSnapshot, source: &dyn Paginatable) -> bool {
        self.visible = true;
        self.try_fire(snapshot, source)
    }

    /// The sentinel left the viewport; the next exposure may fire again.
    pub const fn on_hidden(&mut self) {
        self.visible = false;
        self.fired_at = None;
    }

    /// A new snapshot arrived. Fires only if the sentinel is still on screen.
    pub fn on_snapshot(&mut self, snapshot: &ListSnapshot, source: &dyn Paginatable) -> bool {
        self.visible && self.try_fire(snapshot, source)
    }

    fn try_fire(&mut self, snapshot: &ListSnapshot, source: &dyn Paginatable) -> bool {
        if !should_load_more(snapshot) {
            self.fired_at = None;
            return false;
        }

        let loaded = snapshot.len();
        if let Some(at) = self.fired_at {
            if !(self.rearm_on_growth && loaded > at) {
                return false;
            }
        }

        if source.is_loading_more() {
            debug!(loaded, "Page request already in flight");
            return false;
        }

        debug!(loaded, total = snapshot.total_count(), "Requesting next page");
        self.fired_at = Some(loaded);
        source.load_more();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::mock;
    use shelf_core::{ContentItem, DataState};

    mock! {
        Source {}
        impl Paginatable for Source {
            fn load_more(&self);
            fn is_loading_more(&self) -> bool;
            fn reload(&self);
        }
    }

    fn snapshot(loaded: u64, total: usize) -> ListSnapshot {
        let items = (0..loaded).map(|i| ContentItem::new(i, "screencast")).collect();
        ListSnapshot::new(DataState::HasData, items, total, false).unwrap()
    }

    fn idle_source(expected_loads: usize) -> MockSource {
        let mut source = MockSource::new();
        source.expect_is_loading_more().return_const(false);
        source.expect_load_more().times(expected_loads).return_const(());
        source
    }

    #[test]
    fn test_fires_once_per_exposure() {
        let source = idle_source(1);
        let mut sentinel = PaginationSentinel::new(true);
        let page = snapshot(20, 40);

        assert!(sentinel.on_visible(&page, &source));
        assert!(!sentinel.on_visible(&page, &source));
        assert!(!sentinel.on_snapshot(&page, &source));
    }

    #[test]
    fn test_fires_again_after_hide() {
        let source = idle_source(2);
        let mut sentinel = PaginationSentinel::new(false);
        let page = snapshot(20, 40);

        assert!(sentinel.on_visible(&page, &source));
        sentinel.on_hidden();
        assert!(sentinel.on_visible(&page, &source));
    }

    #[test]
    fn test_rearms_when_page_arrives_while_visible() {
        let source = idle_source(2);
        let mut sentinel = PaginationSentinel::new(true);

        assert!(sentinel.on_visible(&snapshot(20, 60), &source));
        assert!(sentinel.on_snapshot(&snapshot(40, 60), &source));
    }

    #[test]
    fn test_no_rearm_when_disabled() {
        let source = idle_source(1);
        let mut sentinel = PaginationSentinel::new(false);

        assert!(sentinel.on_visible(&snapshot(20, 60), &source));
        assert!(!sentinel.on_snapshot(&snapshot(40, 60), &source));
    }

    #[test]
    fn test_nothing_more_to_load() {
        let source = idle_source(0);
        let mut sentinel = PaginationSentinel::new(true);

        assert!(!sentinel.on_visible(&snapshot(20, 20), &source));
    }

    #[test]
    fn test_skips_while_source_busy() {
        let mut source = MockSource::new();
        source.expect_is_loading_more().return_const(true);
        source.expect_load_more().never();
        let mut sentinel = PaginationSentinel::new(true);

        assert!(!sentinel.on_visible(&snapshot(5, 50), &source));
    }

    #[test]
    fn test_hidden_sentinel_ignores_snapshots() {
        let source = idle_source(0);
        let mut sentinel = PaginationSentinel::default();

        assert!(!sentinel.on_snapshot(&snapshot(5, 50), &source));
        assert!(!sentinel.is_visible());
    }
}
