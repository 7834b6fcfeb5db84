//! Port definitions (trait abstractions) for external collaborators.
//!
//! The presentation core never fetches, persists or navigates by itself.
//! Those effects go through the traits below, implemented by the host app.
//!
//! # Design Rules
//!
//! - Calls are fire-and-forget from the core's point of view
//! - Only domain types in signatures
//! - Implementations own deduplication, retries and cancellation

mod action_callback;
mod navigator;
mod paginatable;
mod session;
mod settings_repository;

use thiserror::Error;

pub use action_callback::{ActionCallback, ContentAction, NoopActionCallback};
pub use navigator::Navigator;
pub use paginatable::Paginatable;
pub use session::SessionProvider;
pub use settings_repository::SettingsRepository;

/// Storage errors surfaced by repository ports.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Storage backend error (filesystem, keychain, etc.).
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization or deserialization failed.
    #[error("Serialization error: {0}")]
    Serialization(String),
}
