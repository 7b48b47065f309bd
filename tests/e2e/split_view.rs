// End-to-end tests for scratch placement across splits

use crate::common::harness::ScratchTestHarness;
use scratch::model::event::SplitDirection;
use scratch::{EditorHost, Placement};

/// ScratchSplit on first use creates the buffer in a new, focused split
#[test]
fn test_split_creates_new_window() {
    let mut harness = ScratchTestHarness::new();
    let original_window = harness.active_window();

    let outcome = harness.split().unwrap();

    assert_eq!(outcome.placement, Placement::Create { split: true });
    assert_eq!(harness.window_count(), 2);
    assert_ne!(harness.active_window(), original_window);
    harness.assert_on_scratch();
}

/// A visible scratch buffer is focused even when a new split is requested
#[test]
fn test_split_never_duplicates_visible_buffer() {
    let mut harness = ScratchTestHarness::new();
    let original_window = harness.active_window();
    harness.split().unwrap();
    let scratch_window = harness.active_window();

    harness.focus(original_window);
    let outcome = harness.split().unwrap();

    assert!(matches!(
        outcome.placement,
        Placement::FocusWindow { window, .. } if window == scratch_window
    ));
    assert_eq!(harness.active_window(), scratch_window);
    assert_eq!(harness.window_count(), 2);
    assert_eq!(harness.scratch_buffer_count(), 1);
}

/// Open from another window jumps to the window already showing the buffer
#[test]
fn test_open_focuses_existing_split() {
    let mut harness = ScratchTestHarness::new();
    let original_window = harness.active_window();
    harness.split().unwrap();
    let scratch_window = harness.active_window();
    harness.focus(original_window);

    let outcome = harness.open().unwrap();

    assert!(!outcome.placement.decision().create_new);
    assert!(outcome.placement.decision().reuse_window);
    assert_eq!(harness.active_window(), scratch_window);
    assert_eq!(harness.window_count(), 2);
}

/// With several windows showing the buffer, the first in layout order is focused
#[test]
fn test_first_of_several_windows_is_focused() {
    let mut harness = ScratchTestHarness::new();
    let created = harness.open().unwrap();
    let top_window = harness.active_window();

    harness
        .host
        .create_split_and_display(created.buffer, SplitDirection::Horizontal)
        .unwrap();
    harness
        .host
        .create_buffer_by_editing("other.txt", Some(SplitDirection::Vertical));
    assert_eq!(harness.host.windows_for_buffer(created.buffer).len(), 2);

    for _ in 0..2 {
        let outcome = harness.open().unwrap();
        assert_eq!(
            outcome.placement,
            Placement::FocusWindow {
                buffer: created.buffer,
                window: top_window
            }
        );
        assert_eq!(harness.active_window(), top_window);
    }
    assert_eq!(harness.window_count(), 3);
}

/// Running either command while already on the scratch buffer changes nothing
#[test]
fn test_commands_on_scratch_window_are_noops() {
    let mut harness = ScratchTestHarness::new();
    harness.split().unwrap();
    let window = harness.active_window();
    let buffers = harness.buffer_count();

    harness.open().unwrap();
    harness.split().unwrap();

    assert_eq!(harness.active_window(), window);
    assert_eq!(harness.window_count(), 2);
    assert_eq!(harness.buffer_count(), buffers);
}

/// The configured direction is used for new splits
#[test]
fn test_vertical_split_direction() {
    let mut harness =
        ScratchTestHarness::with_options(serde_json::json!({ "split_direction": "vertical" }))
            .unwrap();

    harness.split().unwrap();

    let snapshot = serde_json::to_value(harness.host.snapshot()).unwrap();
    assert_eq!(snapshot["windows"]["type"], "split");
    assert_eq!(snapshot["windows"]["direction"], "vertical");
}
