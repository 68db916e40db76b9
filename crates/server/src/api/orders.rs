//! Order API handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use kitchen_core::{validate_order_id, OrderRequest, OrderStatusReport};
use serde::Deserialize;
use std::sync::Arc;

use super::handlers::{bad_request, ErrorResponse};
use crate::metrics::{DONUTS_SUBMITTED_TOTAL, ORDERS_PLACED_TOTAL};
use crate::state::AppState;

/// Request body for a status check
#[derive(Debug, Deserialize)]
pub struct StatusQueryBody {
    pub order_id: String,
}

/// Place a new order and return its initial status
pub async fn place_order(
    State(state): State<Arc<AppState>>,
    Json(body): Json<OrderRequest>,
) -> Result<(StatusCode, Json<OrderStatusReport>), (StatusCode, Json<ErrorResponse>)> {
    let report = state.desk().place_order(&body).await.map_err(bad_request)?;

    ORDERS_PLACED_TOTAL.inc();
    DONUTS_SUBMITTED_TOTAL.inc_by(body.donut_count());

    Ok((StatusCode::CREATED, Json(report)))
}

/// Get the status of an order by id
pub async fn get_order_status(
    State(state): State<Arc<AppState>>,
    Path(order_id): Path<String>,
) -> Json<OrderStatusReport> {
    Json(state.desk().check_status(&order_id).await)
}

/// Get the status of the order named in the request body
pub async fn check_status(
    State(state): State<Arc<AppState>>,
    Json(body): Json<StatusQueryBody>,
) -> Result<Json<OrderStatusReport>, (StatusCode, Json<ErrorResponse>)> {
    validate_order_id(&body.order_id).map_err(bad_request)?;
    Ok(Json(state.desk().check_status(&body.order_id).await))
}
