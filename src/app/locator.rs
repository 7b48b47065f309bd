//! Buffer lookup by name and by visibility.

use super::ScratchError;
use crate::host::EditorHost;
use crate::model::event::{BufferId, WindowId};

/// Find the buffer whose display name is exactly `name`
///
/// A missing buffer is not an error; it is the normal state before the first
/// invocation.
pub fn locate<H: EditorHost + ?Sized>(host: &H, name: &str) -> Option<BufferId> {
    host.find_buffer_by_name(name)
}

/// First window (in layout order) displaying `buffer`, or `None` if it is hidden
///
/// `buffer` must be a live handle obtained from [`locate`]. A handle the host does
/// not know is a contract violation.
pub fn find_window_showing<H: EditorHost + ?Sized>(
    host: &H,
    buffer: BufferId,
) -> Result<Option<WindowId>, ScratchError> {
    Ok(host.find_window_for_buffer(buffer)?)
}
