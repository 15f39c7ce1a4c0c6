use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    response::Response,
    Router,
};
use tower::ServiceExt;

use crate::{build_router, toggle::BugToggle, AppState};

/// Router wired exactly like production, plus a handle on its state.
pub fn app(bug_enabled: bool) -> (Router, AppState) {
    let state = AppState {
        bug: BugToggle::new(bug_enabled),
    };
    (build_router(state.clone()), state)
}

pub async fn raw(app: &Router, method: Method, uri: &str) -> Response {
    app.clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
}

pub async fn send(app: &Router, method: Method, uri: &str) -> (StatusCode, serde_json::Value) {
    let res = raw(app, method, uri).await;
    let status = res.status();
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}
