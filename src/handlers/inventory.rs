use axum::{extract::State, http::StatusCode, Json};
use tracing::info;

use crate::{catalog, error::AppResult, AppState};

pub async fn get_inventory(
    State(state): State<AppState>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    info!("Checking inventory");
    state.bug.check("Inventory service unavailable")?;

    let summary = catalog::inventory_summary();
    info!(
        total_items = summary.total_items,
        low_stock = summary.low_stock_items.len(),
        "Inventory checked"
    );

    Ok((
        StatusCode::OK,
        Json(serde_json::json!({
            "success": true,
            "total_items": summary.total_items,
            "low_stock_items": summary.low_stock_items,
        })),
    ))
}
