// SPDX-FileCopyrightText: 2026 Oneline Contributors
// SPDX-License-Identifier: MIT

//! The controller owning the in-memory editing state.
//!
//! The editing surface reports mutations here and reads the current diagram
//! back; nothing else holds mutable diagram state. Save status transitions
//! are driven solely by transport outcomes.

use std::time::SystemTime;

use serde_json::Value;

use crate::client::{StorageClient, TransportError};
use crate::history::{AppMode, EditHistory};
use crate::model::{DiagramData, PersistedSnapshot};

/// Outcome of the most recent save, surfaced to the UI.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SaveStatus {
    #[default]
    Idle,
    Saving,
    Saved,
    Error,
}

#[derive(Debug, Clone, Default)]
pub struct Workspace {
    diagram: DiagramData,
    component_types: Vec<Value>,
    history: EditHistory,
    save_status: SaveStatus,
    last_saved_at: Option<SystemTime>,
}

impl Workspace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn diagram(&self) -> &DiagramData {
        &self.diagram
    }

    pub fn component_types(&self) -> &[Value] {
        &self.component_types
    }

    pub fn set_component_types(&mut self, component_types: Vec<Value>) {
        self.component_types = component_types;
    }

    pub fn history(&self) -> &EditHistory {
        &self.history
    }

    pub fn mode(&self) -> AppMode {
        self.history.mode()
    }

    pub fn enter_edit_mode(&mut self) {
        self.history.enter_edit_mode();
    }

    pub fn exit_edit_mode(&mut self) {
        self.history.exit_edit_mode();
    }

    pub fn save_status(&self) -> SaveStatus {
        self.save_status
    }

    pub fn last_saved_at(&self) -> Option<SystemTime> {
        self.last_saved_at
    }

    /// Assembles the full snapshot for persistence.
    pub fn snapshot(&self) -> PersistedSnapshot {
        PersistedSnapshot {
            diagram_data: self.diagram.clone(),
            component_types: self.component_types.clone(),
        }
    }

    /// Installs a loaded snapshot (or the empty default when nothing was
    /// persisted). History never survives a load; save status resets.
    pub fn apply_loaded(&mut self, snapshot: Option<PersistedSnapshot>) {
        let snapshot = snapshot.unwrap_or_default();
        self.diagram = snapshot.diagram_data;
        self.component_types = snapshot.component_types;
        self.history.clear();
        self.save_status = SaveStatus::Idle;
    }

    /// Commits an edit: the current diagram becomes the undo entry and
    /// `next` becomes current. A complete no-op outside edit mode.
    pub fn record_edit(&mut self, next: DiagramData) {
        if self.history.mode() != AppMode::Edit {
            return;
        }

        let previous = std::mem::replace(&mut self.diagram, next);
        self.history.record_edit(previous);
    }

    /// Steps the diagram one edit back. Returns whether anything changed.
    pub fn undo(&mut self) -> bool {
        match self.history.undo(&self.diagram) {
            Some(restored) => {
                self.diagram = restored;
                true
            }
            None => false,
        }
    }

    /// Steps the diagram one undone edit forward. Returns whether anything
    /// changed.
    pub fn redo(&mut self) -> bool {
        match self.history.redo(&self.diagram) {
            Some(restored) => {
                self.diagram = restored;
                true
            }
            None => false,
        }
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Persists the current snapshot, driving [`SaveStatus`].
    ///
    /// On failure the in-memory diagram is left intact and the error is
    /// re-raised so the caller can arm a retry.
    pub async fn save(&mut self, client: &StorageClient) -> Result<(), TransportError> {
        self.save_status = SaveStatus::Saving;
        match client.save(&self.snapshot()).await {
            Ok(()) => {
                self.save_status = SaveStatus::Saved;
                self.last_saved_at = Some(SystemTime::now());
                Ok(())
            }
            Err(err) => {
                self.save_status = SaveStatus::Error;
                Err(err)
            }
        }
    }

    /// Loads from the backend and installs the result. Never fails: a failed
    /// or empty load resets to the blank diagram.
    pub async fn load(&mut self, client: &StorageClient) {
        let loaded = client.load().await;
        self.apply_loaded(loaded);
    }
}
