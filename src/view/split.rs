/// Window layout for the in-memory host
///
/// Following the Emacs/Vim model:
/// - The layout is a tree: either a leaf (one window showing one buffer) or a
///   container holding two children split horizontally or vertically
/// - Splitting a window replaces its leaf with a container whose first child is the
///   old window and whose second child is the new one
/// - Exactly one window is active (receives input)
/// - Several windows may display the same buffer
///
/// ```text
/// ┌────────────────────┐      ┌──────────┬─────────┐
/// │     Buffer A       │      │          │         │
/// ├────────────────────┤      │  Buffer  │ Buffer  │
/// │     _SCRATCH_      │      │    A     │    B    │
/// └────────────────────┘      └──────────┴─────────┘
///  (horizontal split)          (vertical split)
/// ```
use crate::model::event::{BufferId, SplitDirection, WindowId};
use serde::Serialize;

/// A node in the window tree
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WindowNode {
    /// Leaf node: a window displaying a single buffer
    Leaf {
        buffer_id: BufferId,
        window_id: WindowId,
    },
    /// Internal node: two child layouts
    Split {
        direction: SplitDirection,
        /// First child (top or left)
        first: Box<Self>,
        /// Second child (bottom or right)
        second: Box<Self>,
    },
}

impl WindowNode {
    pub fn leaf(buffer_id: BufferId, window_id: WindowId) -> Self {
        Self::Leaf {
            buffer_id,
            window_id,
        }
    }

    pub fn split(direction: SplitDirection, first: WindowNode, second: WindowNode) -> Self {
        Self::Split {
            direction,
            first: Box::new(first),
            second: Box::new(second),
        }
    }

    /// Window ID if this is a leaf
    pub fn window_id(&self) -> Option<WindowId> {
        match self {
            Self::Leaf { window_id, .. } => Some(*window_id),
            Self::Split { .. } => None,
        }
    }

    /// Find the leaf for a window (mutable)
    fn find_leaf_mut(&mut self, target: WindowId) -> Option<&mut Self> {
        if self.window_id() == Some(target) {
            return Some(self);
        }

        match self {
            Self::Leaf { .. } => None,
            Self::Split { first, second, .. } => first
                .find_leaf_mut(target)
                .or_else(|| second.find_leaf_mut(target)),
        }
    }

    /// All windows with the buffer they display, in layout order (top-left first)
    pub fn leaves(&self) -> Vec<(WindowId, BufferId)> {
        match self {
            Self::Leaf {
                buffer_id,
                window_id,
            } => vec![(*window_id, *buffer_id)],
            Self::Split { first, second, .. } => {
                let mut leaves = first.leaves();
                leaves.extend(second.leaves());
                leaves
            }
        }
    }

    /// Count the number of windows
    pub fn count_leaves(&self) -> usize {
        match self {
            Self::Leaf { .. } => 1,
            Self::Split { first, second, .. } => first.count_leaves() + second.count_leaves(),
        }
    }
}

/// Manager for the window tree
#[derive(Debug, Clone)]
pub struct WindowLayout {
    root: WindowNode,
    active_window: WindowId,
    next_window_id: usize,
}

impl WindowLayout {
    /// Create a layout with a single window showing `buffer_id`
    pub fn new(buffer_id: BufferId) -> Self {
        let window_id = WindowId(1);
        Self {
            root: WindowNode::leaf(buffer_id, window_id),
            active_window: window_id,
            next_window_id: 2,
        }
    }

    pub fn root(&self) -> &WindowNode {
        &self.root
    }

    pub fn active_window(&self) -> WindowId {
        self.active_window
    }

    /// Set the active window. Returns false if the window does not exist.
    pub fn set_active_window(&mut self, window_id: WindowId) -> bool {
        if self.buffer_for_window(window_id).is_some() {
            self.active_window = window_id;
            true
        } else {
            false
        }
    }

    /// Buffer displayed in the active window
    pub fn active_buffer_id(&self) -> BufferId {
        // The active window is always a leaf of the tree
        self.buffer_for_window(self.active_window)
            .unwrap_or_else(|| unreachable!("active window missing from layout"))
    }

    /// Buffer displayed in a specific window
    pub fn buffer_for_window(&self, target: WindowId) -> Option<BufferId> {
        self.root
            .leaves()
            .into_iter()
            .find(|(window_id, _)| *window_id == target)
            .map(|(_, buffer_id)| buffer_id)
    }

    /// All windows displaying a specific buffer, in layout order
    pub fn windows_for_buffer(&self, target: BufferId) -> Vec<WindowId> {
        self.root
            .leaves()
            .into_iter()
            .filter(|(_, buffer_id)| *buffer_id == target)
            .map(|(window_id, _)| window_id)
            .collect()
    }

    /// Replace the buffer shown in the active window
    pub fn set_active_buffer_id(&mut self, new_buffer_id: BufferId) {
        if let Some(WindowNode::Leaf { buffer_id, .. }) = self.root.find_leaf_mut(self.active_window)
        {
            *buffer_id = new_buffer_id;
        }
    }

    fn allocate_window_id(&mut self) -> WindowId {
        let id = WindowId(self.next_window_id);
        self.next_window_id += 1;
        id
    }

    /// Split the active window, show `new_buffer_id` in the new window and make it active
    pub fn split_active(&mut self, direction: SplitDirection, new_buffer_id: BufferId) -> WindowId {
        let new_window_id = self.allocate_window_id();
        let active = self.active_window;

        if let Some(node) = self.root.find_leaf_mut(active) {
            let old_node = std::mem::replace(node, WindowNode::leaf(new_buffer_id, new_window_id));
            *node = WindowNode::split(
                direction,
                old_node,
                WindowNode::leaf(new_buffer_id, new_window_id),
            );
        }

        self.active_window = new_window_id;
        new_window_id
    }

    /// Close a window (if not the last one)
    pub fn close_window(&mut self, window_id: WindowId) -> Result<(), String> {
        if self.root.count_leaves() <= 1 {
            return Err("Cannot close the last window".to_string());
        }

        Self::remove_child(&mut self.root, window_id)?;

        // If we closed the active window, focus the first remaining one
        if self.active_window == window_id {
            if let Some((first, _)) = self.root.leaves().first() {
                self.active_window = *first;
            }
        }
        Ok(())
    }

    /// Replace the container holding `target` with the target's sibling
    fn remove_child(node: &mut WindowNode, target: WindowId) -> Result<(), String> {
        match node {
            WindowNode::Leaf { .. } => Err(format!("{target} not found")),
            WindowNode::Split { first, second, .. } => {
                if first.window_id() == Some(target) {
                    *node = (**second).clone();
                    Ok(())
                } else if second.window_id() == Some(target) {
                    *node = (**first).clone();
                    Ok(())
                } else {
                    Self::remove_child(first, target).or_else(|_| Self::remove_child(second, target))
                }
            }
        }
    }
}
