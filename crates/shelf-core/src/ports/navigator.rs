//! Navigation port used by the empty-state call to action.

/// Switches the host app's top-level tab.
pub trait Navigator: Send + Sync {
    fn select_tab(&self, index: usize);
}
