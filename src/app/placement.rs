//! Placement policy for the scratch buffer.
//!
//! Given what the locator found and the state of the active buffer, pick exactly one
//! action. Priority order:
//!
//! 1. A modified active buffer counts as a request for a new window, so its window is
//!    never taken over.
//! 2. A visible scratch buffer is focused. This wins over a new-window request, so the
//!    buffer is never shown twice by this code.
//! 3. A hidden scratch buffer is shown in a new split or in the current window.
//! 4. Otherwise the buffer is created, in a new split or in the current window.

use crate::model::event::{BufferId, WindowId};
use serde::Serialize;

/// Inputs to a single placement decision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementRequest {
    /// The caller explicitly asked for a new split
    pub force_new_window: bool,
    /// The buffer in the focused window has unsaved changes
    pub active_buffer_modified: bool,
    /// Existing scratch buffer, if any
    pub existing: Option<BufferId>,
    /// First window showing the existing buffer, if any
    pub visible_in: Option<WindowId>,
}

/// The single action chosen for one invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Placement {
    /// Move focus to the window already showing the buffer
    FocusWindow { buffer: BufferId, window: WindowId },
    /// Split the current window and show the existing buffer there
    ShowInSplit { buffer: BufferId },
    /// Replace the current window's contents with the existing buffer
    ShowInCurrent { buffer: BufferId },
    /// Create the buffer, either in a new split or in the current window
    Create { split: bool },
}

/// Flattened form of a [`Placement`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlacementDecision {
    pub reuse_window: bool,
    pub create_new: bool,
    pub split: bool,
}

impl Placement {
    pub fn decision(&self) -> PlacementDecision {
        match *self {
            Placement::FocusWindow { .. } => PlacementDecision {
                reuse_window: true,
                create_new: false,
                split: false,
            },
            Placement::ShowInSplit { .. } => PlacementDecision {
                reuse_window: false,
                create_new: false,
                split: true,
            },
            Placement::ShowInCurrent { .. } => PlacementDecision {
                reuse_window: false,
                create_new: false,
                split: false,
            },
            Placement::Create { split } => PlacementDecision {
                reuse_window: false,
                create_new: true,
                split,
            },
        }
    }
}

/// Decide where the scratch buffer goes
pub fn resolve(request: PlacementRequest) -> Placement {
    let new_window = request.force_new_window || request.active_buffer_modified;

    match (request.existing, request.visible_in) {
        (Some(buffer), Some(window)) => Placement::FocusWindow { buffer, window },
        (Some(buffer), None) if new_window => Placement::ShowInSplit { buffer },
        (Some(buffer), None) => Placement::ShowInCurrent { buffer },
        (None, _) => Placement::Create { split: new_window },
    }
}
