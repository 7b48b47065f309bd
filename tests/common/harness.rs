// ScratchTestHarness - in-memory editor plus controller for integration tests

use scratch::host::memory::MemoryHost;
use scratch::host::EditorHost;
use scratch::model::event::{BufferId, WindowId};
use scratch::{ScratchController, ScratchError, ScratchOutcome};
use serde_json::Value;

/// Install a test-friendly tracing subscriber (once per process)
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Drives a `ScratchController` against a `MemoryHost`
pub struct ScratchTestHarness {
    pub controller: ScratchController,
    pub host: MemoryHost,
}

impl ScratchTestHarness {
    /// Default configuration, one unnamed buffer in one window
    pub fn new() -> Self {
        init_tracing();
        Self {
            controller: ScratchController::default(),
            host: MemoryHost::new(),
        }
    }

    /// Harness whose controller was configured with `options`
    pub fn with_options(options: Value) -> Result<Self, ScratchError> {
        let mut harness = Self::new();
        harness.controller.configure(&options)?;
        Ok(harness)
    }

    pub fn open(&mut self) -> Result<ScratchOutcome, ScratchError> {
        self.controller.open(&mut self.host)
    }

    pub fn split(&mut self) -> Result<ScratchOutcome, ScratchError> {
        self.controller.split(&mut self.host)
    }

    /// Mark the buffer in the focused window as having unsaved changes
    pub fn modify_active_buffer(&mut self) {
        let active = self.host.active_buffer();
        self.host.set_modified(active, true).unwrap();
    }

    /// Load and show an ordinary file buffer in the focused window
    pub fn edit_file(&mut self, name: &str) -> BufferId {
        self.host.create_buffer_by_editing(name, None)
    }

    pub fn close_window(&mut self, window: WindowId) {
        self.host.close_window(window).unwrap();
    }

    pub fn focus(&mut self, window: WindowId) {
        self.host.focus_window(window).unwrap();
    }

    pub fn active_window(&self) -> WindowId {
        self.host.active_window()
    }

    pub fn active_buffer(&self) -> BufferId {
        self.host.active_buffer()
    }

    pub fn buffer_count(&self) -> usize {
        self.host.buffer_count()
    }

    pub fn window_count(&self) -> usize {
        self.host.window_count()
    }

    /// Number of buffers carrying the configured scratch name
    pub fn scratch_buffer_count(&self) -> usize {
        self.host.buffers_named(self.controller.buffer_name())
    }

    /// Assert that the focused window shows exactly one live scratch buffer
    pub fn assert_on_scratch(&self) {
        assert_eq!(
            self.scratch_buffer_count(),
            1,
            "expected exactly one buffer named {:?}",
            self.controller.buffer_name()
        );
        let active = self.host.buffer(self.active_buffer()).unwrap();
        assert_eq!(
            active.name.as_deref(),
            Some(self.controller.buffer_name()),
            "focused window does not show the scratch buffer"
        );
    }
}
