// SPDX-FileCopyrightText: 2026 Oneline Contributors
// SPDX-License-Identifier: MIT

//! Bounded undo/redo history over diagram edits.
//!
//! History is linear: a new edit invalidates the redo branch. All operations
//! are synchronous, gated by [`AppMode`], and nothing here is ever persisted;
//! a fresh load always starts with both stacks empty.

use crate::model::DiagramData;

/// Default cap on retained undo entries; the oldest entry is evicted first.
pub const MAX_HISTORY_DEPTH: usize = 100;

/// Whether the editing surface currently permits mutation.
///
/// `View` is read-only: edits, undo, and redo are all no-ops. Toggling the
/// mode only gates permissions and never touches the stacks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AppMode {
    #[default]
    View,
    Edit,
}

/// Undo/redo stacks holding full prior [`DiagramData`] values.
#[derive(Debug, Clone)]
pub struct EditHistory {
    undo: Vec<DiagramData>,
    redo: Vec<DiagramData>,
    mode: AppMode,
    max_depth: usize,
}

impl EditHistory {
    pub fn new() -> Self {
        Self::with_max_depth(MAX_HISTORY_DEPTH)
    }

    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            undo: Vec::new(),
            redo: Vec::new(),
            mode: AppMode::default(),
            max_depth,
        }
    }

    pub fn mode(&self) -> AppMode {
        self.mode
    }

    pub fn enter_edit_mode(&mut self) {
        self.mode = AppMode::Edit;
    }

    pub fn exit_edit_mode(&mut self) {
        self.mode = AppMode::View;
    }

    /// Records the state just before a committed edit.
    ///
    /// No-op outside `Edit` mode. Clears the redo stack and evicts the oldest
    /// undo entries beyond the depth cap.
    pub fn record_edit(&mut self, previous: DiagramData) {
        if self.mode != AppMode::Edit {
            return;
        }

        self.undo.push(previous);
        self.redo.clear();

        if self.undo.len() > self.max_depth {
            let excess = self.undo.len() - self.max_depth;
            self.undo.drain(0..excess);
        }
    }

    /// Pops the most recent undo entry, parking `current` on the redo stack.
    ///
    /// Returns `None` (leaving both stacks untouched) when the undo stack is
    /// empty or the mode is `View`.
    pub fn undo(&mut self, current: &DiagramData) -> Option<DiagramData> {
        if self.mode != AppMode::Edit {
            return None;
        }

        let restored = self.undo.pop()?;
        self.redo.push(current.clone());
        Some(restored)
    }

    /// Symmetric counterpart of [`EditHistory::undo`].
    pub fn redo(&mut self, current: &DiagramData) -> Option<DiagramData> {
        if self.mode != AppMode::Edit {
            return None;
        }

        let restored = self.redo.pop()?;
        self.undo.push(current.clone());
        Some(restored)
    }

    pub fn can_undo(&self) -> bool {
        self.mode == AppMode::Edit && !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        self.mode == AppMode::Edit && !self.redo.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo.len()
    }

    /// Empties both stacks. Called after a successful load or an app reset;
    /// the mode is left as-is.
    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }
}

impl Default for EditHistory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
