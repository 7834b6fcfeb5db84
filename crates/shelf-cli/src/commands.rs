//! Subcommand definitions.

use std::path::PathBuf;

use clap::Subcommand;
use shelf_core::ScreenKind;

#[derive(Subcommand)]
pub enum Commands {
    /// Print the empty-state metadata for a screen (all screens if omitted)
    Describe {
        /// library, downloads, in_progress, completed or bookmarked
        screen: Option<ScreenKind>,
    },
    /// Resolve the view model for a snapshot file
    Decide {
        /// Screen the snapshot belongs to
        #[arg(long)]
        screen: ScreenKind,
        /// Snapshot JSON file, or `-` for stdin
        #[arg(long)]
        snapshot: PathBuf,
        /// The list is rendered under a header section
        #[arg(long)]
        header: bool,
        /// The local download registry is empty
        #[arg(long)]
        registry_empty: bool,
    },
    /// Page through an in-memory catalogue with a live presenter
    Simulate {
        #[arg(long, default_value = "library")]
        screen: ScreenKind,
        /// Number of items in the catalogue
        #[arg(long, default_value_t = 45)]
        total: usize,
        /// Make the first fetch fail, then retry through the reload button
        #[arg(long)]
        fail_first: bool,
        /// Print each frame as a JSON line
        #[arg(long)]
        json: bool,
    },
    /// View or change list settings
    Settings {
        #[command(subcommand)]
        command: SettingsCommand,
    },
}

#[derive(Subcommand)]
pub enum SettingsCommand {
    /// Show the effective settings
    Show,
    /// Check the settings file without changing it
    Validate,
    /// Update settings
    Set {
        /// Items per page (1-100)
        #[arg(long)]
        page_size: Option<u32>,
        /// Tab opened by the explore button (0-4)
        #[arg(long)]
        explore_tab: Option<usize>,
        /// Re-arm the pagination sentinel as pages arrive
        #[arg(long)]
        rearm_on_growth: Option<bool>,
    },
}
