//! Control endpoints for the bug toggle.

use axum::{extract::State, http::StatusCode, Json};
use serde_json::json;

use crate::AppState;

pub async fn enable_bug(State(state): State<AppState>) -> (StatusCode, Json<serde_json::Value>) {
    let enabled = state.bug.enable();
    (
        StatusCode::OK,
        Json(json!({ "message": "Bug mode enabled", "bug_enabled": enabled })),
    )
}

pub async fn disable_bug(State(state): State<AppState>) -> (StatusCode, Json<serde_json::Value>) {
    let enabled = state.bug.disable();
    (
        StatusCode::OK,
        Json(json!({ "message": "Bug mode disabled", "bug_enabled": enabled })),
    )
}

pub async fn status(State(state): State<AppState>) -> (StatusCode, Json<serde_json::Value>) {
    let enabled = state.bug.is_enabled();
    let message = if enabled {
        "API will return 500 errors"
    } else {
        "API is operating normally"
    };
    (
        StatusCode::OK,
        Json(json!({ "bug_enabled": enabled, "message": message })),
    )
}
