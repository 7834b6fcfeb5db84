//! ListPresenter - the facade a rendering surface drives.
//!
//! Holds the current snapshot for one screen and turns surface gestures into
//! engine calls and port calls. Single-threaded: every method is expected to
//! run on the UI thread.

use shelf_core::{
    ContentItem, ListError, ListSettings, ListSnapshot, PendingDelete, ScreenKind, decide,
    relay_primary_gesture, relay_secondary_gesture, validate_settings,
};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, error, info};

use crate::deps::ListDeps;
use crate::error::GuiError;
use crate::sentinel::PaginationSentinel;
use crate::types::{CtaAction, DetailRoute, ListViewModel, ViewContext};

/// Presenter for a single content list screen.
///
/// # Construction
///
/// ```ignore
/// let deps = ListDeps::new(source, callback, session, navigator);
/// let presenter = ListPresenter::new(ScreenKind::Library, deps, settings)?;
/// ```
pub struct ListPresenter {
    screen: ScreenKind,
    deps: ListDeps,
    settings: ListSettings,
    snapshot: ListSnapshot,
    context: ViewContext,
    sentinel: PaginationSentinel,
    pending_tx: UnboundedSender<PendingDelete>,
    pending_rx: UnboundedReceiver<PendingDelete>,
}

impl ListPresenter {
    /// Create a presenter in the `Initial` state.
    pub fn new(screen: ScreenKind, deps: ListDeps, settings: ListSettings) -> Result<Self, GuiError> {
        validate_settings(&settings)?;
        let (pending_tx, pending_rx) = mpsc::unbounded_channel();
        Ok(Self {
            screen,
            deps,
            sentinel: PaginationSentinel::new(settings.effective_sentinel_rearm()),
            settings,
            snapshot: ListSnapshot::initial(),
            context: ViewContext::default(),
            pending_tx,
            pending_rx,
        })
    }

    pub const fn screen(&self) -> ScreenKind {
        self.screen
    }

    pub const fn snapshot(&self) -> &ListSnapshot {
        &self.snapshot
    }

    pub const fn settings(&self) -> &ListSettings {
        &self.settings
    }

    // =========================================================================
    // State updates
    // =========================================================================

    /// Replace the snapshot in one step.
    ///
    /// Returns whether the visible sentinel requested another page. A
    /// snapshot that takes the list off screen also hides the sentinel.
    pub fn apply_snapshot(&mut self, snapshot: ListSnapshot) -> bool {
        debug!(
            screen = %self.screen,
            state = ?snapshot.data_state(),
            items = snapshot.len(),
            total = snapshot.total_count(),
            "Applying snapshot"
        );
        self.snapshot = snapshot;
        if !self.list_rendered() {
            self.sentinel.on_hidden();
            return false;
        }
        self.sentinel
            .on_snapshot(&self.snapshot, self.deps.source.as_ref())
    }

    pub const fn set_view_context(&mut self, context: ViewContext) {
        self.context = context;
    }

    /// Current frame for the rendering surface.
    pub fn view_model(&self) -> ListViewModel {
        ListViewModel::build(self.screen, &self.snapshot, self.context)
    }

    // =========================================================================
    // Pagination
    // =========================================================================

    /// The surface scrolled to the end of the list.
    ///
    /// Ignored unless the list itself is rendered.
    pub fn on_sentinel_visible(&mut self) -> bool {
        if !self.list_rendered() {
            debug!(screen = %self.screen, "Sentinel reported outside list mode");
            return false;
        }
        self.sentinel
            .on_visible(&self.snapshot, self.deps.source.as_ref())
    }

    pub const fn on_sentinel_hidden(&mut self) {
        self.sentinel.on_hidden();
    }

    // =========================================================================
    // Row gestures
    // =========================================================================

    /// Primary card gesture; `succeeded` is the card's reported outcome.
    pub fn on_primary_tap(&self, index: usize, succeeded: bool) -> Result<bool, GuiError> {
        let item = self.item_at(index)?;
        Ok(relay_primary_gesture(
            item,
            succeeded,
            self.deps.callback.as_ref(),
        ))
    }

    /// Secondary card gesture (bookmark toggle). Currently inert.
    pub fn on_secondary_tap(&self, index: usize) -> Result<(), GuiError> {
        relay_secondary_gesture(self.item_at(index)?);
        Ok(())
    }

    /// Queue deletion of the row at `index`.
    ///
    /// Nothing changes until [`dispatch_pending`](Self::dispatch_pending)
    /// runs, so the gesture's own render pass never observes the removal.
    pub fn on_delete(&self, index: usize) -> Result<(), GuiError> {
        if self.screen != ScreenKind::Downloads {
            return Err(GuiError::Conflict(format!(
                "delete is not available on the {} screen",
                self.screen
            )));
        }
        let pending = PendingDelete::capture(&self.snapshot, index)?;
        debug!(content_id = %pending.content_id(), index, "Queued delete");
        // The receiver lives in `self`, so the channel is never closed here
        let _ = self.pending_tx.send(pending);
        Ok(())
    }

    /// Apply queued deletes against the current snapshot.
    ///
    /// Returns the removed items, in the order they were reported.
    pub fn dispatch_pending(&mut self) -> Vec<ContentItem> {
        let mut removed = Vec::new();
        while let Ok(pending) = self.pending_rx.try_recv() {
            if let Some((items, item)) =
                pending.apply(self.snapshot.items(), self.deps.callback.as_ref())
            {
                self.snapshot = self.snapshot.with_items(items);
                removed.push(item);
            }
        }
        removed
    }

    /// Resolve the detail route for the row at `index`.
    pub fn activate_row(&self, index: usize) -> Result<DetailRoute, GuiError> {
        let item = self.item_at(index)?;
        let Some(user) = self.deps.session.current_user() else {
            let err = ListError::MissingSession {
                content_id: item.id,
            };
            error!(%err, "Row activated without a session");
            return Err(err.into());
        };
        Ok(DetailRoute {
            content_id: item.id,
            user,
        })
    }

    // =========================================================================
    // Call to action
    // =========================================================================

    /// Handle a tap on the empty/failed state button.
    pub fn on_cta(&self) -> Result<CtaAction, GuiError> {
        let Some(cta) = self.view_model().call_to_action else {
            return Err(GuiError::Conflict(
                "no call to action in the current view".to_string(),
            ));
        };
        match cta.action {
            CtaAction::Explore => {
                let tab = self.settings.effective_explore_tab_index();
                info!(screen = %self.screen, tab, "Explore requested");
                self.deps.navigator.select_tab(tab);
            }
            CtaAction::Reload => {
                info!(screen = %self.screen, "Reload requested");
                self.deps.source.reload();
            }
        }
        Ok(cta.action)
    }

    fn list_rendered(&self) -> bool {
        decide(self.screen, &self.snapshot).is_list()
    }

    fn item_at(&self, index: usize) -> Result<&ContentItem, GuiError> {
        self.snapshot.items().get(index).ok_or_else(|| {
            let err = ListError::IndexOutOfRange {
                index,
                len: self.snapshot.len(),
            };
            error!(%err, "Row gesture outside the rendered list");
            err.into()
        })
    }
}
