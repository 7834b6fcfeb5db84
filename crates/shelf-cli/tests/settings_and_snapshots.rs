//! File-backed settings and snapshot loading.

use std::fs;

use shelf_cli::handlers;
use shelf_cli::JsonSettingsRepository;
use shelf_core::{
    DataState, ListSettings, ListSettingsUpdate, RenderMode, RepositoryError, ScreenKind,
    SettingsRepository,
};
use shelf_gui::{ListViewModel, ViewContext};
use tempfile::tempdir;

#[test]
fn test_missing_settings_file_yields_defaults() {
    let dir = tempdir().unwrap();
    let repo = JsonSettingsRepository::new(dir.path().join("absent.json"));

    assert_eq!(repo.load().unwrap(), ListSettings::with_defaults());
}

#[test]
fn test_settings_roundtrip_through_file() {
    let dir = tempdir().unwrap();
    let repo = JsonSettingsRepository::new(dir.path().join("nested").join("shelf.json"));
    let settings = ListSettings {
        page_size: Some(50),
        explore_tab_index: Some(2),
        sentinel_rearm_on_growth: Some(false),
    };

    repo.save(&settings).unwrap();

    assert_eq!(repo.load().unwrap(), settings);
}

#[test]
fn test_corrupt_settings_file_is_serialization_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("shelf.json");
    fs::write(&path, "{ not json").unwrap();

    let err = JsonSettingsRepository::new(&path).load().unwrap_err();
    assert!(matches!(err, RepositoryError::Serialization(_)));
}

#[test]
fn test_set_rejects_invalid_values_without_saving() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("shelf.json");
    let repo = JsonSettingsRepository::new(&path);

    let update = ListSettingsUpdate {
        page_size: Some(Some(0)),
        ..Default::default()
    };
    assert!(handlers::settings::set(Some(&repo), &update).is_err());
    assert!(!path.exists());
}

#[test]
fn test_load_rejects_out_of_range_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("shelf.json");
    fs::write(&path, r#"{"explore_tab_index": 9}"#).unwrap();

    let repo = JsonSettingsRepository::new(&path);
    assert!(handlers::settings::load(Some(&repo)).is_err());
}

#[test]
fn test_snapshot_file_to_view_model() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("snapshot.json");
    fs::write(
        &path,
        r#"{
            "data_state": "loading",
            "items": [{"id": 1, "name": "iOS Animations"}, {"id": 2, "name": "SwiftUI"}],
            "total_count": 2,
            "is_loading_more": false
        }"#,
    )
    .unwrap();

    let snapshot = handlers::decide::read_snapshot(&path).unwrap();
    assert_eq!(snapshot.data_state(), DataState::Loading);

    let vm = ListViewModel::build(ScreenKind::Completed, &snapshot, ViewContext::default());
    assert_eq!(
        vm.mode,
        RenderMode::List {
            with_overlay_spinner: true
        }
    );
}

#[test]
fn test_malformed_snapshot_file_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("snapshot.json");
    fs::write(
        &path,
        r#"{"data_state": "has_data", "items": [{"id": 1}, {"id": 2}], "total_count": 1}"#,
    )
    .unwrap();

    assert!(handlers::decide::read_snapshot(&path).is_err());
}
