//! In-memory stand-ins for the host app's ports.
//!
//! `MemorySource` pages through a generated catalogue. Fetches complete only
//! when [`MemorySource::settle`] is called, which lets the simulation show
//! every intermediate snapshot.

use std::sync::{Mutex, MutexGuard, PoisonError};

use shelf_core::{
    ActionCallback, ContentAction, ContentItem, DataState, ListSnapshot, Navigator, Paginatable,
    SessionProvider, User,
};
use tracing::{debug, info};

#[derive(Debug)]
struct SourceState {
    loaded: usize,
    data_state: DataState,
    loading_more: bool,
    fail_next: bool,
}

#[derive(Debug)]
pub struct MemorySource {
    catalog: Vec<ContentItem>,
    page_size: usize,
    state: Mutex<SourceState>,
}

impl MemorySource {
    pub fn new(total: usize, page_size: usize, fail_first: bool) -> Self {
        let catalog = (1..=total as u64)
            .map(|id| ContentItem::new(id, format!("Tutorial #{id}")))
            .collect();
        Self {
            catalog,
            page_size: page_size.max(1),
            state: Mutex::new(SourceState {
                loaded: 0,
                data_state: DataState::Initial,
                loading_more: false,
                fail_next: fail_first,
            }),
        }
    }

    fn state(&self) -> MutexGuard<'_, SourceState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Current snapshot, built atomically under the state lock.
    pub fn snapshot(&self) -> ListSnapshot {
        let state = self.state();
        ListSnapshot::clamped(
            state.data_state,
            self.catalog[..state.loaded].to_vec(),
            self.catalog.len(),
            state.loading_more,
        )
    }

    /// Complete the in-flight fetch, if any. Returns whether state changed.
    pub fn settle(&self) -> bool {
        let mut state = self.state();
        if state.data_state != DataState::Loading {
            return false;
        }
        if std::mem::take(&mut state.fail_next) {
            debug!("Simulated fetch failure");
            state.data_state = DataState::Failed;
            state.loading_more = false;
            return true;
        }
        state.loaded = (state.loaded + self.page_size).min(self.catalog.len());
        state.data_state = DataState::HasData;
        state.loading_more = false;
        debug!(loaded = state.loaded, "Page delivered");
        true
    }

    pub fn is_busy(&self) -> bool {
        self.state().data_state == DataState::Loading
    }
}

impl Paginatable for MemorySource {
    fn load_more(&self) {
        let mut state = self.state();
        if state.loading_more || state.loaded >= self.catalog.len() {
            return;
        }
        state.loading_more = true;
        state.data_state = DataState::Loading;
    }

    fn is_loading_more(&self) -> bool {
        self.state().loading_more
    }

    fn reload(&self) {
        let mut state = self.state();
        state.loaded = 0;
        state.loading_more = false;
        state.data_state = DataState::Loading;
    }
}

/// Logs every relayed action.
#[derive(Debug, Default)]
pub struct LoggingCallback;

impl ActionCallback for LoggingCallback {
    fn report(&self, action: ContentAction, item: &ContentItem) {
        info!(%action, content_id = %item.id, name = %item.name, "Content action");
    }
}

/// Always signed in as the same user.
#[derive(Debug)]
pub struct StaticSession(pub User);

impl SessionProvider for StaticSession {
    fn current_user(&self) -> Option<User> {
        Some(self.0.clone())
    }
}

/// Logs tab switches.
#[derive(Debug, Default)]
pub struct LoggingNavigator;

impl Navigator for LoggingNavigator {
    fn select_tab(&self, index: usize) {
        info!(tab = index, "Tab selected");
    }
}
