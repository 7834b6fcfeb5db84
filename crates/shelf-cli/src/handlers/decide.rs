//! Decide command handler.
//!
//! Reads a snapshot file and prints the resolved view model.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use shelf_core::{ListSnapshot, ScreenKind};
use shelf_gui::{ListViewModel, ViewContext};

/// Parse a snapshot from `path` (`-` reads stdin).
pub fn read_snapshot(path: &Path) -> Result<ListSnapshot> {
    let raw = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read snapshot from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read snapshot {}", path.display()))?
    };
    serde_json::from_str(&raw).context("Invalid snapshot")
}

pub fn execute(screen: ScreenKind, snapshot: &Path, context: ViewContext) -> Result<()> {
    let snapshot = read_snapshot(snapshot)?;
    let view_model = ListViewModel::build(screen, &snapshot, context);
    println!("{}", serde_json::to_string_pretty(&view_model)?);
    Ok(())
}
