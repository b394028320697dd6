//! Order endpoints: place an order, read it back, move its status

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};
use shared::error::{AppError, ErrorCode};
use shared::models::{OrderCreated, OrderDetail};
use shared::request::{CreateOrderRequest, UpdateOrderStatusRequest};

use crate::state::AppState;

use super::{ApiResult, bad_body};

fn parse_order_id(path: Result<Path<i64>, PathRejection>) -> Result<i64, AppError> {
    let Path(id) = path.map_err(|rejection| {
        AppError::invalid_request("Invalid order id").with_detail("reason", rejection.body_text())
    })?;
    Ok(id)
}

/// POST /api/orders
pub async fn create_order(
    State(state): State<AppState>,
    payload: Result<Json<CreateOrderRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<OrderCreated>), AppError> {
    let Json(payload) = payload.map_err(|r| bad_body(r, "Invalid order data"))?;
    tracing::debug!(
        table_number = ?payload.table_number,
        items = ?payload.order_items.as_ref().map(Vec::len),
        total_amount = ?payload.total_amount,
        payment_method = ?payload.payment_method,
        "Received order data"
    );

    let order = payload.validate()?;

    let order_id = state.store.insert_order(&order).await.map_err(|e| {
        tracing::error!(
            table_number = %order.table_number,
            items = order.items.len(),
            error = %e,
            "Error saving order"
        );
        e
    })?;

    tracing::info!(order_id, table_number = %order.table_number, "Order created");
    Ok((StatusCode::CREATED, Json(OrderCreated::new(order_id))))
}

/// GET /api/orders/{id}
pub async fn get_order(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<OrderDetail> {
    let order_id = parse_order_id(path)?;

    let order = state
        .store
        .find_order(order_id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::OrderNotFound).with_detail("order_id", order_id))?;

    let detail = OrderDetail::try_from(order).map_err(|e| {
        AppError::internal(ErrorCode::InternalError.message())
            .with_detail("order_id", order_id)
            .with_detail("cause", e.to_string())
    })?;
    Ok(Json(detail))
}

/// PUT /api/orders/{id}/status
pub async fn update_order_status(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<UpdateOrderStatusRequest>, JsonRejection>,
) -> Result<&'static str, AppError> {
    let order_id = parse_order_id(path)?;
    let Json(payload) = payload.map_err(|r| bad_body(r, "Invalid status data"))?;
    let status = payload.validate()?;

    let updated = state
        .store
        .update_order_status(order_id, &status)
        .await
        .map_err(|e| {
            tracing::error!(order_id, status = %status, error = %e, "Error updating order status");
            e
        })?;

    if !updated {
        return Err(AppError::new(ErrorCode::OrderNotFound).with_detail("order_id", order_id));
    }

    tracing::info!(order_id, status = %status, "Order status updated");
    Ok("Order status updated successfully")
}
