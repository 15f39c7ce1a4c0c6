use axum::{
    http::StatusCode,
    middleware,
    response::Response,
    routing::{get, post},
    Router,
};
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod catalog;
mod config;
mod error;
mod handlers;
mod models;
#[cfg(test)]
mod test_utils;
mod toggle;
mod tracking;

use crate::config::{Config, LogFormat};
use crate::error::error_response;
use crate::toggle::BugToggle;

pub const SERVICE_NAME: &str = "Demo E-Commerce API";

/// Shared application state — cheap to clone (the toggle is behind an Arc).
#[derive(Clone)]
pub struct AppState {
    pub bug: BugToggle,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present (ignored in production where env vars are injected)
    dotenv::dotenv().ok();

    let config = Config::from_env()?;
    init_tracing(config.log_format)?;

    info!("╔══════════════════════════════════════╗");
    info!("║  Demo E-Commerce API — Rust + Axum   ║");
    info!("║  products · orders · inventory       ║");
    info!("╚══════════════════════════════════════╝");

    if config.telemetry_connection_string.is_some() {
        info!("Telemetry connection string present, emitting JSON logs for export");
    }
    if config.enable_bug {
        warn!("ENABLE_BUG is set - business endpoints start in failure mode");
    }

    let state = AppState {
        bug: BugToggle::new(config.enable_bug),
    };

    let app = build_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    info!("Listening on http://{}", addr);
    info!("Break it: POST http://{}/demo/enable-bug  →  restore: POST http://{}/demo/disable-bug", addr, addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn init_tracing(format: LogFormat) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info,storefront_demo=debug"))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    match format {
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Json => builder.json().try_init(),
    }
    .map_err(|e| anyhow::anyhow!("failed to initialise tracing: {}", e))
}

fn build_router(state: AppState) -> Router {
    let routes = Router::new()
        // ── Service ─────────────────────────────────────────────────────────
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))

        // ── Products ────────────────────────────────────────────────────────
        .route("/api/products", get(handlers::products::list_products))
        .route("/api/products/:id", get(handlers::products::get_product))

        // ── Orders ──────────────────────────────────────────────────────────
        .route("/api/orders", post(handlers::orders::create_order))

        // ── Inventory ───────────────────────────────────────────────────────
        .route("/api/inventory", get(handlers::inventory::get_inventory))

        // ── Bug toggle ──────────────────────────────────────────────────────
        .route("/demo/enable-bug", post(handlers::demo::enable_bug))
        .route("/demo/disable-bug", post(handlers::demo::disable_bug))
        .route("/demo/status", get(handlers::demo::status))

        .fallback(handlers::not_found)
        .with_state(state);

    with_middleware(routes)
}

/// Catch-all for panics, then outcome tracking around it so a caught panic
/// is still logged as a 500.
fn with_middleware(router: Router) -> Router {
    router
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(middleware::from_fn(tracking::track_requests))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

fn panic_response(_: Box<dyn std::any::Any + Send + 'static>) -> Response {
    error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
}
