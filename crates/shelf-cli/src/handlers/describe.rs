//! Describe command handler.

use anyhow::Result;
use shelf_core::{ScreenKind, describe};

/// Print the descriptor for `screen`, or for every screen.
pub fn execute(screen: Option<ScreenKind>) -> Result<()> {
    match screen {
        Some(screen) => println!("{}", serde_json::to_string_pretty(describe(screen))?),
        None => {
            let all: Vec<_> = ScreenKind::ALL
                .into_iter()
                .map(|screen| serde_json::json!({ "screen": screen, "descriptor": describe(screen) }))
                .collect();
            println!("{}", serde_json::to_string_pretty(&all)?);
        }
    }
    Ok(())
}
