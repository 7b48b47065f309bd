//! Placement and lifecycle logic for a single scratch buffer.
//!
//! - **[`app`]**: `ScratchController` and the locate → resolve → initialize pipeline
//! - **[`host`]**: the `EditorHost` boundary and an in-memory implementation
//! - **[`config`]**: scratch buffer configuration and validation
//! - **[`commands`]**: user-facing command names bound to controller actions
//! - **[`model`]**: buffer and window handles, split direction
//! - **[`view`]**: the window tree behind the in-memory host

pub mod app;
pub mod commands;
pub mod config;
pub mod host;
pub mod model;
pub mod view;

#[cfg(feature = "runtime")]
pub mod services;

pub use app::placement::{Placement, PlacementDecision};
pub use app::{ScratchController, ScratchError, ScratchOutcome};
pub use config::{ConfigError, ScratchConfig};
pub use host::memory::MemoryHost;
pub use host::EditorHost;
