pub mod demo;
pub mod inventory;
pub mod orders;
pub mod products;

use axum::{extract::State, http::StatusCode, response::Response, Json};
use chrono::Utc;
use serde_json::json;
use tracing::info;

use crate::{error::error_response, AppState, SERVICE_NAME};

pub async fn root(State(state): State<AppState>) -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "service": SERVICE_NAME,
            "status": "running",
            "version": env!("CARGO_PKG_VERSION"),
            "timestamp": Utc::now(),
            "bug_mode": state.bug.is_enabled(),
        })),
    )
}

/// Liveness probe. Never gated by the bug toggle.
pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    info!("Health check requested");
    (
        StatusCode::OK,
        Json(json!({ "status": "healthy", "timestamp": Utc::now() })),
    )
}

pub async fn not_found() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not Found")
}

#[cfg(test)]
mod tests {
    use axum::http::{Method, StatusCode};

    use crate::test_utils::{app, send};

    #[tokio::test]
    async fn root_reports_bug_mode() {
        let (app, state) = app(false);
        let (status, body) = send(&app, Method::GET, "/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["service"], "Demo E-Commerce API");
        assert_eq!(body["status"], "running");
        assert_eq!(body["bug_mode"], false);

        state.bug.enable();
        let (_, body) = send(&app, Method::GET, "/").await;
        assert_eq!(body["bug_mode"], true);
    }

    #[tokio::test]
    async fn health_ignores_toggle() {
        let (app, _) = app(true);
        let (status, body) = send(&app, Method::GET, "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert!(body["timestamp"].is_string());
    }

    #[tokio::test]
    async fn unknown_route_uses_error_body() {
        let (app, _) = app(false);
        let (status, body) = send(&app, Method::GET, "/api/customers").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Not Found");
        assert_eq!(body["status_code"], 404);
    }
}
