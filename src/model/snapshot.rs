// SPDX-FileCopyrightText: 2026 Oneline Contributors
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The editable diagram state produced by the editing surface.
///
/// Node, link, and group contents are opaque to this crate; they are carried
/// as raw JSON values and round-trip unchanged across save/load. The only
/// shape requirement is that `nodes` and `links` are present as sequences;
/// `groups` may be absent in older payloads and defaults to empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiagramData {
    pub nodes: Vec<Value>,
    pub links: Vec<Value>,
    #[serde(default)]
    pub groups: Vec<Value>,
}

/// The atomic unit of persistence: the diagram plus the component-type
/// catalog it was authored against.
///
/// A snapshot is valid iff `diagramData` is present and object-typed with
/// `nodes`/`links` sequences, and `componentTypes` is a sequence. Failing to
/// deserialize into this type IS the validity check; there is no separate
/// runtime scan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedSnapshot {
    pub diagram_data: DiagramData,
    pub component_types: Vec<Value>,
}

impl PersistedSnapshot {
    /// The cold-start default: all sequences empty.
    pub fn empty() -> Self {
        Self::default()
    }
}
