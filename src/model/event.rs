use crate::host::HostError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a buffer in the host editor's buffer table
///
/// Handles are assigned by the host. Absence is expressed as `Option<BufferId>`,
/// so there is no sentinel value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct BufferId(pub usize);

/// Unique identifier for a window (a leaf of the split layout)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct WindowId(pub usize);

impl fmt::Display for BufferId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "buffer {}", self.0)
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "window {}", self.0)
    }
}

/// Conversion for host adapters over editors that hand out raw numeric handles,
/// with `-1` meaning "none". An adapter calls this at the `EditorHost` boundary so
/// that a sentinel turns into `HostError::InvalidHandle` instead of a bogus id.
/// `MemoryHost` allocates typed ids directly and never needs it.
impl TryFrom<i64> for BufferId {
    type Error = HostError;

    fn try_from(raw: i64) -> Result<Self, Self::Error> {
        usize::try_from(raw)
            .map(BufferId)
            .map_err(|_| HostError::InvalidHandle(raw))
    }
}

/// Same conversion for window handles.
impl TryFrom<i64> for WindowId {
    type Error = HostError;

    fn try_from(raw: i64) -> Result<Self, Self::Error> {
        usize::try_from(raw)
            .map(WindowId)
            .map_err(|_| HostError::InvalidHandle(raw))
    }
}

/// Direction of a split
///
/// `Horizontal` stacks the new window below the current one, `Vertical` places it
/// to the right.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum SplitDirection {
    #[default]
    Horizontal,
    Vertical,
}
