//! Content list presenter facade for shelf.
//!
//! This crate provides `ListPresenter`, the layer between a rendering
//! surface and the pure presentation engine in `shelf-core`. It owns the
//! screen's current snapshot, the pagination sentinel and the deferred
//! delete queue, and talks to the host app only through injected ports.
//!
//! # Architecture
//!
//! ```text
//! Surface:     list view (any toolkit)
//!                    ↓ gestures        ↑ ListViewModel
//! Facade:      shelf-gui ── ListPresenter
//!                    ↓
//! Core:        shelf-core  (engine + ports)
//! ```
//!
//! # Rules
//!
//! 1. **No toolkit dependencies** - The surface maps `ListViewModel` to widgets
//! 2. **Trait-based injection** - All collaborators come in through `ListDeps`
//! 3. **Semantic errors** - Returns `GuiError`, surfaces map to their own

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

#[cfg(test)]
use serde_json as _;

mod deps;
mod error;
mod presenter;
mod sentinel;
pub mod types;

// Primary exports
pub use deps::ListDeps;
pub use error::GuiError;
pub use presenter::ListPresenter;
pub use sentinel::PaginationSentinel;
pub use types::{CallToAction, CtaAction, DetailRoute, ListViewModel, ViewContext};
