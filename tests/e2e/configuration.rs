// End-to-end tests for configuring the scratch buffer identity

use crate::common::harness::ScratchTestHarness;
use scratch::config::ConfigError;
use scratch::{EditorHost, ScratchConfig, ScratchController, ScratchError};
use serde_json::json;

#[test]
fn test_non_string_name_is_a_configuration_error() {
    let result = ScratchTestHarness::with_options(json!({ "buffer_name": 123 }));

    assert!(matches!(
        result,
        Err(ScratchError::Configuration(ConfigError::InvalidType(_)))
    ));
}

#[test]
fn test_empty_name_is_a_configuration_error() {
    let result = ScratchTestHarness::with_options(json!({ "buffer_name": "" }));

    assert!(matches!(
        result,
        Err(ScratchError::Configuration(ConfigError::ValidationError(_)))
    ));
}

#[test]
fn test_custom_name_is_used_exactly() {
    let mut harness = ScratchTestHarness::with_options(json!({ "buffer_name": "notes" })).unwrap();

    let outcome = harness.open().unwrap();

    assert_eq!(harness.host.find_buffer_by_name("notes"), Some(outcome.buffer));
    assert_eq!(harness.host.find_buffer_by_name("_SCRATCH_"), None);
    harness.assert_on_scratch();
}

#[test]
fn test_empty_options_use_default_name() {
    let mut harness = ScratchTestHarness::with_options(json!({})).unwrap();

    let outcome = harness.open().unwrap();

    let buffer = harness.host.buffer(outcome.buffer).unwrap();
    assert_eq!(buffer.name.as_deref(), Some("_SCRATCH_"));
}

/// After renaming the identity, the old buffer is just another buffer
#[test]
fn test_reconfigure_switches_identity() {
    let mut harness = ScratchTestHarness::new();
    let old = harness.open().unwrap();

    harness
        .controller
        .configure(&json!({ "buffer_name": "notes" }))
        .unwrap();
    let new = harness.open().unwrap();

    assert_ne!(old.buffer, new.buffer);
    assert_eq!(harness.buffer_count(), 3);
    assert_eq!(harness.host.buffers_named("_SCRATCH_"), 1);
    assert_eq!(harness.host.buffers_named("notes"), 1);
}

/// A rejected configure leaves the running controller untouched
#[test]
fn test_rejected_configure_keeps_working() {
    let mut harness = ScratchTestHarness::new();
    harness.open().unwrap();

    assert!(harness
        .controller
        .configure(&json!({ "buffer_name": false }))
        .is_err());

    assert_eq!(harness.controller.buffer_name(), "_SCRATCH_");
    let outcome = harness.open().unwrap();
    assert!(outcome.placement.decision().reuse_window);
}

#[test]
fn test_config_file_drives_controller() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("scratch.json");
    std::fs::write(&path, r#"{ "buffer_name": "jot" }"#).unwrap();

    let config = ScratchConfig::load_from_file(&path).unwrap();
    let controller = ScratchController::new(config).unwrap();
    let mut host = scratch::MemoryHost::new();

    let outcome = controller.open(&mut host).unwrap();
    assert_eq!(host.find_buffer_by_name("jot"), Some(outcome.buffer));
}
