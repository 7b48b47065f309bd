//! Host editor boundary
//!
//! The placement logic never talks to an editor directly. Everything it needs from
//! the host (buffer lookup, window lookup, focusing, splitting, creating buffers and
//! setting buffer options) goes through the [`EditorHost`] trait. A real editor
//! integration implements it over its own buffer/window APIs; [`memory::MemoryHost`]
//! implements it over an in-memory buffer table and window tree.

pub mod memory;

use crate::model::event::{BufferId, SplitDirection, WindowId};
use serde::Serialize;
use std::fmt;

/// What happens to a buffer when it is no longer displayed in any window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HiddenBehavior {
    /// Keep the buffer loaded in memory
    Hide,
    /// Unload the buffer's contents
    Unload,
    /// Remove the buffer from the buffer table
    Wipe,
}

/// How the buffer relates to the file system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BufferKind {
    /// Backed by a file; writes go to disk
    File,
    /// Not related to any file and never written
    NoFile,
}

/// A single buffer attribute the placement logic can set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "option", content = "value", rename_all = "snake_case")]
pub enum BufferOption {
    Hidden(HiddenBehavior),
    Listed(bool),
    Kind(BufferKind),
    SwapFile(bool),
}

/// Errors reported by a host when it is handed a handle it does not know
///
/// These are never expected in correct operation: every handle the placement logic
/// passes to the host was obtained from the host moments earlier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostError {
    UnknownBuffer(BufferId),
    UnknownWindow(WindowId),
    InvalidHandle(i64),
}

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostError::UnknownBuffer(id) => write!(f, "{id} does not exist"),
            HostError::UnknownWindow(id) => write!(f, "{id} does not exist"),
            HostError::InvalidHandle(raw) => write!(f, "invalid handle: {raw}"),
        }
    }
}

impl std::error::Error for HostError {}

/// Capabilities the scratch placement logic consumes from the host editor
///
/// Queries take `&self`, mutations take `&mut self`. Each mutation is a single
/// atomic operation from the caller's point of view.
pub trait EditorHost {
    /// Buffer displayed in the focused window
    fn active_buffer(&self) -> BufferId;

    /// Whether a buffer has unsaved modifications
    fn buffer_modified(&self, buffer: BufferId) -> Result<bool, HostError>;

    /// Look up a buffer by its display name
    fn find_buffer_by_name(&self, name: &str) -> Option<BufferId>;

    /// First window (in layout order) currently displaying `buffer`
    fn find_window_for_buffer(&self, buffer: BufferId) -> Result<Option<WindowId>, HostError>;

    /// Move focus to `window`
    fn focus_window(&mut self, window: WindowId) -> Result<(), HostError>;

    /// Replace the focused window's contents with `buffer`
    fn display_buffer_in_current_window(&mut self, buffer: BufferId) -> Result<(), HostError>;

    /// Split the focused window, show `buffer` in the new window and focus it
    fn create_split_and_display(
        &mut self,
        buffer: BufferId,
        direction: SplitDirection,
    ) -> Result<WindowId, HostError>;

    /// Create a buffer named `name` by editing it, either in the focused window or in
    /// a new split, and return its handle
    fn create_buffer_by_editing(
        &mut self,
        name: &str,
        split: Option<SplitDirection>,
    ) -> BufferId;

    /// Set one attribute on a buffer
    fn set_buffer_option(&mut self, buffer: BufferId, option: BufferOption)
        -> Result<(), HostError>;
}
