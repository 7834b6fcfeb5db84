//! Data source port for paginated content lists.

/// A data source that can append further pages of content.
///
/// Implementations deliver new snapshots back to the screen on their own
/// schedule; every method here returns immediately.
pub trait Paginatable: Send + Sync {
    /// Request the next page.
    ///
    /// Only called while more items exist than are loaded. Implementations
    /// must ignore the call if a page request is already in flight.
    fn load_more(&self);

    /// Whether a page request is currently in flight.
    fn is_loading_more(&self) -> bool;

    /// Start over from the first page (user-initiated retry).
    fn reload(&self);
}
