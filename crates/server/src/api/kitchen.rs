//! Kitchen API handlers.

use axum::{extract::State, http::StatusCode, Json};
use kitchen_core::{validate_flavor, validate_order_id, Donut, Kitchen, KitchenStatus};
use serde::Deserialize;
use std::sync::Arc;

use super::handlers::{bad_request, ErrorResponse};
use crate::metrics::DONUTS_SUBMITTED_TOTAL;
use crate::state::AppState;

/// Request body for adding a single donut
#[derive(Debug, Deserialize)]
pub struct AddDonutBody {
    pub flavor: String,
    pub order_id: String,
}

/// Submit one donut straight to the kitchen
pub async fn add_donut(
    State(state): State<Arc<AppState>>,
    Json(body): Json<AddDonutBody>,
) -> Result<StatusCode, (StatusCode, Json<ErrorResponse>)> {
    validate_flavor(&body.flavor).map_err(bad_request)?;
    validate_order_id(&body.order_id).map_err(bad_request)?;

    state.kitchen().submit(&body.flavor, &body.order_id).await;
    DONUTS_SUBMITTED_TOTAL.inc();

    Ok(StatusCode::OK)
}

/// List every donut with its current stage
pub async fn list_donuts(State(state): State<Arc<AppState>>) -> Json<Vec<Donut>> {
    Json(state.kitchen().snapshot().await)
}

/// Per-stage counts and worker state
pub async fn get_status(State(state): State<Arc<AppState>>) -> Json<KitchenStatus> {
    Json(state.kitchen().status().await)
}
