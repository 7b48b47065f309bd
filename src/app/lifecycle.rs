//! Scratch attributes applied to a freshly created buffer.

use super::ScratchError;
use crate::host::{BufferKind, BufferOption, EditorHost, HiddenBehavior};
use crate::model::event::BufferId;

/// The attributes that make a buffer behave as scratch space
pub const SCRATCH_OPTIONS: [BufferOption; 4] = [
    // Stay loaded when no window shows it
    BufferOption::Hidden(HiddenBehavior::Hide),
    // Reachable through buffer navigation
    BufferOption::Listed(true),
    // Never written to disk, no save prompts
    BufferOption::Kind(BufferKind::NoFile),
    BufferOption::SwapFile(false),
];

/// Apply [`SCRATCH_OPTIONS`] to `buffer`
///
/// Called once per creation, never when an existing buffer is reused.
pub fn initialize<H: EditorHost + ?Sized>(
    host: &mut H,
    buffer: BufferId,
) -> Result<(), ScratchError> {
    for option in SCRATCH_OPTIONS {
        host.set_buffer_option(buffer, option)?;
    }
    tracing::debug!("Initialized {} as scratch buffer", buffer);
    Ok(())
}
