//! Settings command handlers.

use anyhow::{Context, Result};
use shelf_core::{ListSettings, ListSettingsUpdate, SettingsRepository, validate_settings};

use crate::settings_store::JsonSettingsRepository;

/// Load settings, falling back to defaults when no file is configured.
pub fn load(repo: Option<&JsonSettingsRepository>) -> Result<ListSettings> {
    let Some(repo) = repo else {
        return Ok(ListSettings::with_defaults());
    };
    let settings = repo.load().context("Failed to load settings")?;
    validate_settings(&settings)
        .with_context(|| format!("Invalid settings in {}", repo.path().display()))?;
    Ok(settings)
}

pub fn show(repo: Option<&JsonSettingsRepository>) -> Result<()> {
    let settings = load(repo)?;
    println!("page_size:                {}", settings.effective_page_size());
    println!(
        "explore_tab_index:        {}",
        settings.effective_explore_tab_index()
    );
    println!(
        "sentinel_rearm_on_growth: {}",
        settings.effective_sentinel_rearm()
    );
    Ok(())
}

pub fn validate(repo: Option<&JsonSettingsRepository>) -> Result<()> {
    load(repo)?;
    println!("Settings are valid.");
    Ok(())
}

pub fn set(repo: Option<&JsonSettingsRepository>, update: &ListSettingsUpdate) -> Result<()> {
    let repo = repo.context("No settings file configured; pass --settings or set SHELF_SETTINGS")?;
    let mut settings = repo.load().context("Failed to load settings")?;
    settings.merge(update);
    validate_settings(&settings)?;
    repo.save(&settings).context("Failed to save settings")?;
    tracing::info!(path = %repo.path().display(), "Settings saved");
    println!("Settings updated.");
    Ok(())
}
