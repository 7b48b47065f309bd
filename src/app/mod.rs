//! Scratch buffer controller
//!
//! Every command runs the same pipeline:
//! - **locate**: is a buffer with the configured name loaded, and which window shows it?
//! - **resolve**: pick one placement from that and the active buffer's modified flag
//! - **apply**: issue the matching host call, and initialize the buffer if it was created
//!
//! All lookups and validation happen before the first host mutation, so an invocation
//! that fails while locating or resolving leaves the editor untouched. The create path
//! is the one exception: the new buffer's handle only exists once the host has created
//! and displayed it, so a host error while applying the scratch attributes returns
//! `ContractViolation` with that buffer already in place and not initialized. Later
//! commands find it by name and reuse it as-is.

pub mod lifecycle;
pub mod locator;
pub mod placement;

use crate::commands::ScratchAction;
use crate::config::{ConfigError, ScratchConfig};
use crate::host::{EditorHost, HostError};
use crate::model::event::BufferId;
use placement::{Placement, PlacementRequest};
use serde_json::Value;

/// Errors surfaced by scratch commands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScratchError {
    /// Invalid options passed to `configure`
    Configuration(ConfigError),
    /// An internal call received a handle that is not valid
    ContractViolation(String),
}

impl std::fmt::Display for ScratchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Configuration(e) => write!(f, "Configuration error: {}", e),
            Self::ContractViolation(msg) => write!(f, "Contract violation: {}", msg),
        }
    }
}

impl std::error::Error for ScratchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Configuration(e) => Some(e),
            Self::ContractViolation(_) => None,
        }
    }
}

impl From<ConfigError> for ScratchError {
    fn from(e: ConfigError) -> Self {
        ScratchError::Configuration(e)
    }
}

impl From<HostError> for ScratchError {
    fn from(e: HostError) -> Self {
        ScratchError::ContractViolation(e.to_string())
    }
}

/// Result of one scratch command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScratchOutcome {
    /// The action that was carried out
    pub placement: Placement,
    /// The scratch buffer, now displayed in the focused window
    pub buffer: BufferId,
}

/// Long-lived owner of the scratch identity
///
/// Construct one at startup and hand it to whatever binds the commands. The host is
/// passed per call, so the controller holds no editor state of its own.
#[derive(Debug, Clone, Default)]
pub struct ScratchController {
    config: ScratchConfig,
}

impl ScratchController {
    /// Create a controller, validating the configuration
    pub fn new(config: ScratchConfig) -> Result<Self, ScratchError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ScratchConfig {
        &self.config
    }

    pub fn buffer_name(&self) -> &str {
        &self.config.buffer_name
    }

    /// Replace the configuration from user options
    ///
    /// On error the previous configuration stays in effect.
    pub fn configure(&mut self, options: &Value) -> Result<(), ScratchError> {
        match ScratchConfig::from_json(options) {
            Ok(config) => {
                tracing::debug!("Scratch buffer name set to {:?}", config.buffer_name);
                self.config = config;
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Rejected scratch configuration: {}", e);
                Err(e.into())
            }
        }
    }

    /// Show the scratch buffer, in the current window unless its buffer is modified
    pub fn open<H: EditorHost + ?Sized>(
        &self,
        host: &mut H,
    ) -> Result<ScratchOutcome, ScratchError> {
        self.show(host, false)
    }

    /// Show the scratch buffer in a new split
    pub fn split<H: EditorHost + ?Sized>(
        &self,
        host: &mut H,
    ) -> Result<ScratchOutcome, ScratchError> {
        self.show(host, true)
    }

    /// Run a command's action
    pub fn execute<H: EditorHost + ?Sized>(
        &self,
        action: ScratchAction,
        host: &mut H,
    ) -> Result<ScratchOutcome, ScratchError> {
        match action {
            ScratchAction::Open => self.open(host),
            ScratchAction::Split => self.split(host),
        }
    }

    fn show<H: EditorHost + ?Sized>(
        &self,
        host: &mut H,
        force_new_window: bool,
    ) -> Result<ScratchOutcome, ScratchError> {
        let name = self.config.buffer_name.as_str();

        let active = host.active_buffer();
        let active_buffer_modified = host.buffer_modified(active)?;

        let existing = locator::locate(&*host, name);
        let visible_in = match existing {
            Some(buffer) => locator::find_window_showing(&*host, buffer)?,
            None => None,
        };
        tracing::debug!(
            "Scratch lookup for {:?}: buffer={:?} window={:?} active_modified={}",
            name,
            existing,
            visible_in,
            active_buffer_modified
        );

        let placement = placement::resolve(PlacementRequest {
            force_new_window,
            active_buffer_modified,
            existing,
            visible_in,
        });
        tracing::debug!("Resolved scratch placement: {:?}", placement);

        let direction = self.config.split_direction;
        let buffer = match placement {
            Placement::FocusWindow { buffer, window } => {
                host.focus_window(window)?;
                buffer
            }
            Placement::ShowInSplit { buffer } => {
                host.create_split_and_display(buffer, direction)?;
                buffer
            }
            Placement::ShowInCurrent { buffer } => {
                host.display_buffer_in_current_window(buffer)?;
                buffer
            }
            Placement::Create { split } => {
                let buffer = host.create_buffer_by_editing(name, split.then_some(direction));
                if let Err(e) = lifecycle::initialize(host, buffer) {
                    tracing::warn!(
                        "Created {} for {:?} but could not initialize it: {}",
                        buffer,
                        name,
                        e
                    );
                    return Err(e);
                }
                tracing::info!("Created scratch buffer {:?} ({})", name, buffer);
                buffer
            }
        };

        Ok(ScratchOutcome { placement, buffer })
    }
}
