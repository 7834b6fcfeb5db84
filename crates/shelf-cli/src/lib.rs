//! Command-line front end for shelf content lists.
//!
//! `describe` prints screen metadata, `decide` evaluates a snapshot file,
//! `simulate` drives a presenter against an in-memory paged catalogue and
//! `settings` manages the JSON settings file.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

#[cfg(test)]
use tempfile as _;

// Used by main.rs binary
use dotenvy as _;
use tracing_subscriber as _;

pub mod commands;
pub mod handlers;
pub mod parser;
pub mod settings_store;
pub mod simulation;

pub use commands::{Commands, SettingsCommand};
pub use parser::Cli;
pub use settings_store::JsonSettingsRepository;
