use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use tracing::info;

use crate::{error::AppResult, models::Order, AppState};

#[derive(Debug, Serialize)]
pub struct OrderCreated {
    pub success: bool,
    #[serde(flatten)]
    pub order: Order,
}

// ── Create ────────────────────────────────────────────────────────────────────

/// The request body is accepted but not read; every call yields a fresh order.
pub async fn create_order(
    State(state): State<AppState>,
) -> AppResult<(StatusCode, Json<OrderCreated>)> {
    info!("Creating new order");
    state.bug.check("Order processing failed")?;

    let order = Order::create(&mut rand::thread_rng());
    info!(order_id = %order.order_id, "Created order");

    Ok((
        StatusCode::OK,
        Json(OrderCreated {
            success: true,
            order,
        }),
    ))
}
