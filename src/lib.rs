// SPDX-FileCopyrightText: 2026 Oneline Contributors
// SPDX-License-Identifier: MIT

//! Oneline — persistence backend and edit history for single-line electrical
//! diagrams.
//!
//! The diagram contents themselves are opaque here: this crate owns the
//! save/load protocol (store, HTTP surface, transport client) and the
//! undo/redo contract of the editing surface, nothing else.

pub mod client;
pub mod history;
pub mod model;
pub mod server;
pub mod store;
pub mod workspace;
