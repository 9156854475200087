// SPDX-FileCopyrightText: 2026 Oneline Contributors
// SPDX-License-Identifier: MIT

//! Core data model.
//!
//! The snapshot shapes here mirror the wire format exactly; typed
//! deserialization doubles as the structural validator for both the HTTP
//! boundary and the client load path.

pub mod snapshot;

pub use snapshot::{DiagramData, PersistedSnapshot};
