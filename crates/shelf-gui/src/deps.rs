//! Dependency injection for ListPresenter.
//!
//! All dependencies are injected as trait objects to keep the presenter
//! independent of the host app.

use std::sync::Arc;

use shelf_core::ports::{ActionCallback, Navigator, Paginatable, SessionProvider};

/// Dependencies required to construct a `ListPresenter`.
///
/// All fields are private to enforce construction via `ListDeps::new()`.
#[derive(Clone)]
pub struct ListDeps {
    /// Data source backing the list.
    pub(crate) source: Arc<dyn Paginatable>,
    /// Receiver of save/delete actions.
    pub(crate) callback: Arc<dyn ActionCallback>,
    /// Signed-in user lookup for detail routes.
    pub(crate) session: Arc<dyn SessionProvider>,
    /// Tab switching for the explore button.
    pub(crate) navigator: Arc<dyn Navigator>,
}

impl ListDeps {
    pub fn new(
        source: Arc<dyn Paginatable>,
        callback: Arc<dyn ActionCallback>,
        session: Arc<dyn SessionProvider>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            source,
            callback,
            session,
            navigator,
        }
    }
}
