//! Simulate command handler.
//!
//! Drives a `ListPresenter` against a `MemorySource`, scrolling to the end of
//! the list after every page, and prints each frame.

use std::sync::Arc;

use anyhow::Result;
use shelf_core::{ListSettings, Paginatable, RenderMode, ScreenKind, User};
use shelf_gui::{ListDeps, ListPresenter, ListViewModel};

use crate::simulation::{LoggingCallback, LoggingNavigator, MemorySource, StaticSession};

/// Upper bound on simulated frames, in case a source never settles.
const MAX_STEPS: usize = 200;

pub fn execute(
    screen: ScreenKind,
    total: usize,
    fail_first: bool,
    json: bool,
    settings: ListSettings,
) -> Result<()> {
    let source = Arc::new(MemorySource::new(
        total,
        settings.effective_page_size() as usize,
        fail_first,
    ));
    let deps = ListDeps::new(
        source.clone(),
        Arc::new(LoggingCallback),
        Arc::new(StaticSession(User {
            external_id: "local".to_string(),
            username: "simulator".to_string(),
        })),
        Arc::new(LoggingNavigator),
    );
    let mut presenter = ListPresenter::new(screen, deps, settings)?;

    presenter.apply_snapshot(source.snapshot());
    print_frame(0, &presenter.view_model(), json)?;
    source.reload();

    for step in 1..=MAX_STEPS {
        presenter.apply_snapshot(source.snapshot());
        if source.settle() {
            // Appended rows push the sentinel out of view until the next scroll
            presenter.on_sentinel_hidden();
            presenter.apply_snapshot(source.snapshot());
        }
        let frame = presenter.view_model();
        print_frame(step, &frame, json)?;

        if frame.mode == RenderMode::Failed {
            presenter.on_cta()?;
            continue;
        }
        if frame.show_load_more {
            presenter.on_sentinel_visible();
            continue;
        }
        if !source.is_busy() {
            break;
        }
    }
    Ok(())
}

fn print_frame(step: usize, frame: &ListViewModel, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(frame)?);
        return Ok(());
    }
    let mode = match frame.mode {
        RenderMode::Loading => "loading".to_string(),
        RenderMode::Empty => "empty".to_string(),
        RenderMode::Failed => "failed".to_string(),
        RenderMode::List {
            with_overlay_spinner,
        } => format!("list (overlay spinner: {with_overlay_spinner})"),
    };
    let cta = frame
        .call_to_action
        .map_or_else(|| "-".to_string(), |cta| cta.label.to_string());
    println!(
        "[{step:>3}] {:<32} items {:>4}/{:<4} load-more: {:<5} button: {cta}",
        mode, frame.item_count, frame.total_count, frame.show_load_more
    );
    Ok(())
}
