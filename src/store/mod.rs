// SPDX-FileCopyrightText: 2026 Oneline Contributors
// SPDX-License-Identifier: MIT

//! Persistence for the diagram record on disk.
//!
//! The store owns a single JSON document with create-on-first-access
//! semantics and full-record atomic replacement.

pub mod diagram_file;

pub use diagram_file::{DiagramFile, StoreError, WriteDurability};
