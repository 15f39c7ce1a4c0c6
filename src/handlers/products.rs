use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use crate::{
    catalog,
    error::{AppError, AppResult},
    AppState,
};

// ── List ──────────────────────────────────────────────────────────────────────

pub async fn list_products(
    State(state): State<AppState>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    info!("Fetching all products");
    state.bug.check("Database connection failed")?;

    let products = catalog::all_products();
    info!(count = products.len(), "Listed products");

    Ok((
        StatusCode::OK,
        Json(serde_json::json!({
            "success": true,
            "count": products.len(),
            "products": products,
        })),
    ))
}

// ── Get by ID ─────────────────────────────────────────────────────────────────

pub async fn get_product(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    let Path(id) = id.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    info!(id, "Fetching product");

    // Unknown ids are 404 whether or not the toggle is on.
    let product = catalog::product_by_id(id)?;
    state.bug.check(format!("Failed to fetch product {}", id))?;

    Ok((
        StatusCode::OK,
        Json(serde_json::json!({
            "success": true,
            "product": product,
        })),
    ))
}
