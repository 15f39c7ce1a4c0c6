//! Request outcome logging.
//!
//! Every request passes through [`track_requests`], which times the
//! downstream handler and emits one event whose level follows the status band.

use std::time::Instant;

use axum::{extract::Request, http::StatusCode, middleware::Next, response::Response};
use tracing::{error, info, warn};

/// Log level bucket for a finished request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    ClientError,
    ServerError,
}

impl Outcome {
    pub fn from_status(status: StatusCode) -> Self {
        let code = status.as_u16();
        if code >= 500 {
            Outcome::ServerError
        } else if code >= 400 {
            Outcome::ClientError
        } else {
            Outcome::Success
        }
    }
}

pub async fn track_requests(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();
    let start = Instant::now();

    let response = next.run(req).await;

    let status = response.status();
    let duration_ms = start.elapsed().as_secs_f64() * 1000.0;

    match Outcome::from_status(status) {
        Outcome::ServerError => error!(
            %method,
            %path,
            status = status.as_u16(),
            duration_ms,
            "Request failed"
        ),
        Outcome::ClientError => warn!(
            %method,
            %path,
            status = status.as_u16(),
            duration_ms,
            "Request rejected"
        ),
        Outcome::Success => info!(
            %method,
            %path,
            status = status.as_u16(),
            duration_ms,
            "Request completed"
        ),
    }

    response
}
