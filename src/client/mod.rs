// SPDX-FileCopyrightText: 2026 Oneline Contributors
// SPDX-License-Identifier: MIT

//! Save/load transport against the diagram backend.
//!
//! The failure policy is deliberately asymmetric: load failures are logged
//! and downgraded to "no diagram yet" so the UI can fall back to a blank
//! diagram instead of crashing, while save failures are always surfaced to
//! the caller. Both operations are single-shot; retry policy, if any, belongs
//! to the caller.

use std::fmt;

use reqwest::header::ACCEPT;
use reqwest::StatusCode;

use crate::model::PersistedSnapshot;

#[derive(Debug)]
pub enum TransportError {
    Http { source: reqwest::Error },
    Status { status: u16 },
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http { source } => write!(f, "http transport error: {source}"),
            Self::Status { status } => write!(f, "server responded with status {status}"),
        }
    }
}

impl std::error::Error for TransportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Http { source } => Some(source),
            Self::Status { .. } => None,
        }
    }
}

/// Client for the diagram backend's `/api/diagram` resource.
#[derive(Debug, Clone)]
pub struct StorageClient {
    base_url: String,
    http: reqwest::Client,
}

impl StorageClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_http(base_url, reqwest::Client::new())
    }

    pub fn with_http(base_url: impl Into<String>, http: reqwest::Client) -> Self {
        Self {
            base_url: base_url.into(),
            http,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self) -> String {
        format!("{}/api/diagram", self.base_url.trim_end_matches('/'))
    }

    /// Loads the persisted snapshot.
    ///
    /// `None` means "no diagram persisted yet" — either the backend said so
    /// (204) or the load failed (network error, non-success status, or a body
    /// that does not parse as a snapshot). Failures are logged; the caller
    /// should initialize a blank diagram rather than treat `None` as fatal.
    pub async fn load(&self) -> Option<PersistedSnapshot> {
        match self.fetch().await {
            Ok(snapshot) => snapshot,
            Err(err) => {
                eprintln!("oneline: failed to load diagram: {err}");
                None
            }
        }
    }

    async fn fetch(&self) -> Result<Option<PersistedSnapshot>, TransportError> {
        let response = self
            .http
            .get(self.endpoint())
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|source| TransportError::Http { source })?;

        if response.status() == StatusCode::NO_CONTENT {
            return Ok(None);
        }

        if !response.status().is_success() {
            return Err(TransportError::Status {
                status: response.status().as_u16(),
            });
        }

        let snapshot = response
            .json::<PersistedSnapshot>()
            .await
            .map_err(|source| TransportError::Http { source })?;
        Ok(Some(snapshot))
    }

    /// Saves the full snapshot.
    ///
    /// Unlike [`StorageClient::load`], failures here are surfaced: the caller
    /// must react (flip its save status to error, arm a retry) because a
    /// swallowed save failure is silent data loss.
    pub async fn save(&self, snapshot: &PersistedSnapshot) -> Result<(), TransportError> {
        let response = self
            .http
            .post(self.endpoint())
            .json(snapshot)
            .send()
            .await
            .map_err(|source| {
                eprintln!("oneline: failed to save diagram: {source}");
                TransportError::Http { source }
            })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            eprintln!("oneline: failed to save diagram (status {status})");
            return Err(TransportError::Status { status });
        }

        Ok(())
    }
}
