// SPDX-FileCopyrightText: 2026 Oneline Contributors
// SPDX-License-Identifier: MIT

//! HTTP surface for the diagram store.
//!
//! One resource, `/api/diagram`: GET returns the persisted snapshot (204 when
//! nothing is persisted yet), POST fully replaces it, OPTIONS answers CORS
//! preflight. Every response carries permissive CORS headers so the editing
//! UI can be served from anywhere.

use std::sync::Arc;

use axum::body::{Body, Bytes};
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::Response;
use axum::routing::get;
use axum::Router;
use serde_json::{json, Value};

use crate::model::PersistedSnapshot;
use crate::store::DiagramFile;

pub fn router(store: Arc<DiagramFile>) -> Router {
    Router::new()
        .route(
            "/api/diagram",
            get(load_diagram).post(save_diagram).options(preflight),
        )
        .fallback(not_found)
        .with_state(store)
}

async fn load_diagram(State(store): State<Arc<DiagramFile>>) -> Response {
    match store.read() {
        Ok(Some(snapshot)) => match serde_json::to_value(&snapshot) {
            Ok(value) => json_response(StatusCode::OK, Some(&value)),
            Err(err) => {
                eprintln!("oneline: failed to serialize diagram record: {err}");
                message_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to load diagram data")
            }
        },
        Ok(None) => json_response(StatusCode::NO_CONTENT, None),
        Err(err) => {
            eprintln!("oneline: failed to load diagram: {err}");
            message_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to load diagram data")
        }
    }
}

async fn save_diagram(State(store): State<Arc<DiagramFile>>, body: Bytes) -> Response {
    // An empty body is treated like an empty object, so it fails the key
    // check below rather than the JSON parse.
    let payload: Value = if body.is_empty() {
        Value::Object(serde_json::Map::new())
    } else {
        match serde_json::from_slice(&body) {
            Ok(value) => value,
            Err(_) => return message_response(StatusCode::BAD_REQUEST, "Invalid payload"),
        }
    };

    {
        let Value::Object(fields) = &payload else {
            return message_response(StatusCode::BAD_REQUEST, "Invalid payload");
        };
        if !fields.contains_key("diagramData") || !fields.contains_key("componentTypes") {
            return message_response(
                StatusCode::BAD_REQUEST,
                "Payload must include diagramData and componentTypes",
            );
        }
    }

    let snapshot: PersistedSnapshot = match serde_json::from_value(payload) {
        Ok(snapshot) => snapshot,
        Err(_) => return message_response(StatusCode::BAD_REQUEST, "Invalid payload"),
    };

    match store.write(&snapshot) {
        Ok(()) => message_response(StatusCode::OK, "Diagram saved"),
        Err(err) => {
            eprintln!("oneline: failed to save diagram: {err}");
            message_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to save diagram data")
        }
    }
}

async fn preflight() -> Response {
    json_response(StatusCode::NO_CONTENT, None)
}

async fn not_found() -> Response {
    message_response(StatusCode::NOT_FOUND, "Not found")
}

fn message_response(status: StatusCode, message: &str) -> Response {
    json_response(status, Some(&json!({ "message": message })))
}

fn json_response(status: StatusCode, body: Option<&Value>) -> Response {
    let contents = match body {
        Some(value) => Body::from(value.to_string()),
        None => Body::empty(),
    };

    Response::builder()
        .status(status)
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*")
        .header(header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type")
        .header(header::ACCESS_CONTROL_ALLOW_METHODS, "GET,POST,OPTIONS")
        .body(contents)
        .expect("static response parts are valid")
}
