//! In-memory editor host
//!
//! `MemoryHost` keeps a buffer table and a window tree and implements
//! [`EditorHost`](super::EditorHost) over them. It behaves like a minimal modal
//! editor: editing a name that is already loaded reuses that buffer, buffers that
//! leave a window stay in the table, and the first window in layout order wins
//! lookups.

use super::{BufferKind, BufferOption, EditorHost, HiddenBehavior, HostError};
use crate::model::event::{BufferId, SplitDirection, WindowId};
use crate::view::split::{WindowLayout, WindowNode};
use serde::Serialize;
use std::collections::BTreeMap;

/// Per-buffer attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BufferOptions {
    pub hidden: HiddenBehavior,
    pub listed: bool,
    pub kind: BufferKind,
    pub swap_file: bool,
}

impl Default for BufferOptions {
    /// Options of an ordinary file buffer
    fn default() -> Self {
        Self {
            hidden: HiddenBehavior::Unload,
            listed: true,
            kind: BufferKind::File,
            swap_file: true,
        }
    }
}

impl BufferOptions {
    fn apply(&mut self, option: BufferOption) {
        match option {
            BufferOption::Hidden(behavior) => self.hidden = behavior,
            BufferOption::Listed(listed) => self.listed = listed,
            BufferOption::Kind(kind) => self.kind = kind,
            BufferOption::SwapFile(enabled) => self.swap_file = enabled,
        }
    }
}

/// A buffer in the in-memory buffer table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MemoryBuffer {
    pub id: BufferId,
    /// Display name; `None` for an unnamed buffer
    pub name: Option<String>,
    pub modified: bool,
    pub options: BufferOptions,
}

/// Serializable view of the whole host state
#[derive(Debug, Clone, Serialize)]
pub struct LayoutSnapshot {
    pub active_window: WindowId,
    pub windows: WindowNode,
    pub buffers: Vec<MemoryBuffer>,
}

/// In-memory implementation of the editor host
#[derive(Debug, Clone)]
pub struct MemoryHost {
    buffers: BTreeMap<BufferId, MemoryBuffer>,
    layout: WindowLayout,
    next_buffer_id: usize,
}

impl Default for MemoryHost {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryHost {
    /// Create a host with one unnamed, unmodified buffer in a single window
    pub fn new() -> Self {
        let initial = BufferId(1);
        let mut buffers = BTreeMap::new();
        buffers.insert(
            initial,
            MemoryBuffer {
                id: initial,
                name: None,
                modified: false,
                options: BufferOptions::default(),
            },
        );

        Self {
            buffers,
            layout: WindowLayout::new(initial),
            next_buffer_id: 2,
        }
    }

    fn allocate_buffer(&mut self, name: Option<&str>) -> BufferId {
        let id = BufferId(self.next_buffer_id);
        self.next_buffer_id += 1;
        self.buffers.insert(
            id,
            MemoryBuffer {
                id,
                name: name.map(str::to_string),
                modified: false,
                options: BufferOptions::default(),
            },
        );
        id
    }

    fn ensure_buffer(&self, buffer: BufferId) -> Result<(), HostError> {
        if self.buffers.contains_key(&buffer) {
            Ok(())
        } else {
            Err(HostError::UnknownBuffer(buffer))
        }
    }

    /// Load a buffer into the table without displaying it
    pub fn add_buffer(&mut self, name: Option<&str>) -> BufferId {
        self.allocate_buffer(name)
    }

    /// Mark a buffer as modified or saved
    pub fn set_modified(&mut self, buffer: BufferId, modified: bool) -> Result<(), HostError> {
        let entry = self
            .buffers
            .get_mut(&buffer)
            .ok_or(HostError::UnknownBuffer(buffer))?;
        entry.modified = modified;
        Ok(())
    }

    /// Rename a buffer (`:file NAME`)
    pub fn rename_buffer(&mut self, buffer: BufferId, name: &str) -> Result<(), HostError> {
        let entry = self
            .buffers
            .get_mut(&buffer)
            .ok_or(HostError::UnknownBuffer(buffer))?;
        entry.name = Some(name.to_string());
        Ok(())
    }

    /// Close a window; the buffer it showed stays loaded
    pub fn close_window(&mut self, window: WindowId) -> Result<(), String> {
        self.layout.close_window(window)
    }

    pub fn buffer(&self, buffer: BufferId) -> Option<&MemoryBuffer> {
        self.buffers.get(&buffer)
    }

    pub fn buffer_count(&self) -> usize {
        self.buffers.len()
    }

    /// Number of buffers whose display name is exactly `name`
    pub fn buffers_named(&self, name: &str) -> usize {
        self.buffers
            .values()
            .filter(|b| b.name.as_deref() == Some(name))
            .count()
    }

    pub fn window_count(&self) -> usize {
        self.layout.root().count_leaves()
    }

    pub fn active_window(&self) -> WindowId {
        self.layout.active_window()
    }

    pub fn windows_for_buffer(&self, buffer: BufferId) -> Vec<WindowId> {
        self.layout.windows_for_buffer(buffer)
    }

    pub fn buffer_in_window(&self, window: WindowId) -> Option<BufferId> {
        self.layout.buffer_for_window(window)
    }

    pub fn snapshot(&self) -> LayoutSnapshot {
        LayoutSnapshot {
            active_window: self.layout.active_window(),
            windows: self.layout.root().clone(),
            buffers: self.buffers.values().cloned().collect(),
        }
    }
}

impl EditorHost for MemoryHost {
    fn active_buffer(&self) -> BufferId {
        self.layout.active_buffer_id()
    }

    fn buffer_modified(&self, buffer: BufferId) -> Result<bool, HostError> {
        self.buffers
            .get(&buffer)
            .map(|b| b.modified)
            .ok_or(HostError::UnknownBuffer(buffer))
    }

    fn find_buffer_by_name(&self, name: &str) -> Option<BufferId> {
        self.buffers
            .values()
            .find(|b| b.name.as_deref() == Some(name))
            .map(|b| b.id)
    }

    fn find_window_for_buffer(&self, buffer: BufferId) -> Result<Option<WindowId>, HostError> {
        self.ensure_buffer(buffer)?;
        Ok(self.layout.windows_for_buffer(buffer).first().copied())
    }

    fn focus_window(&mut self, window: WindowId) -> Result<(), HostError> {
        if self.layout.set_active_window(window) {
            Ok(())
        } else {
            Err(HostError::UnknownWindow(window))
        }
    }

    fn display_buffer_in_current_window(&mut self, buffer: BufferId) -> Result<(), HostError> {
        self.ensure_buffer(buffer)?;
        self.layout.set_active_buffer_id(buffer);
        Ok(())
    }

    fn create_split_and_display(
        &mut self,
        buffer: BufferId,
        direction: SplitDirection,
    ) -> Result<WindowId, HostError> {
        self.ensure_buffer(buffer)?;
        Ok(self.layout.split_active(direction, buffer))
    }

    fn create_buffer_by_editing(
        &mut self,
        name: &str,
        split: Option<SplitDirection>,
    ) -> BufferId {
        // Editing a name that is already loaded switches to that buffer
        let buffer = match self.find_buffer_by_name(name) {
            Some(existing) => existing,
            None => self.allocate_buffer(Some(name)),
        };

        match split {
            Some(direction) => {
                self.layout.split_active(direction, buffer);
            }
            None => self.layout.set_active_buffer_id(buffer),
        }
        tracing::debug!("Edited {:?} as {} (split: {:?})", name, buffer, split);
        buffer
    }

    fn set_buffer_option(
        &mut self,
        buffer: BufferId,
        option: BufferOption,
    ) -> Result<(), HostError> {
        let entry = self
            .buffers
            .get_mut(&buffer)
            .ok_or(HostError::UnknownBuffer(buffer))?;
        entry.options.apply(option);
        Ok(())
    }
}
