//! Command handlers.
//!
//! Handlers are thin wrappers that:
//! 1. Load CLI-specific input (files, settings)
//! 2. Call into `shelf-core` / `shelf-gui`
//! 3. Format output for the terminal
//!
//! Decision logic stays in the library crates.

pub mod decide;
pub mod describe;
pub mod settings;
pub mod simulate;
