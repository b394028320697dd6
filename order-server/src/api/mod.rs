//! API routes for order-server

pub mod food_items;
pub mod health;
pub mod orders;
pub mod requests;
pub mod table_info;

use axum::extract::rejection::JsonRejection;
use axum::routing::{get, post, put};
use axum::{Json, Router};
use http::{HeaderName, HeaderValue};
use shared::error::AppError;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::state::AppState;

type ApiResult<T> = Result<Json<T>, AppError>;

/// Turn a body that could not be parsed into a 400 with a short message
fn bad_body(rejection: JsonRejection, message: &str) -> AppError {
    AppError::invalid_request(message).with_detail("reason", rejection.body_text())
}

/// Custom request ID generator
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&Uuid::new_v4().to_string())
            .ok()
            .map(RequestId::new)
    }
}

/// Build the router with every route and middleware attached
pub fn create_router(state: AppState) -> Router {
    let x_request_id = HeaderName::from_static("x-request-id");

    Router::new()
        .route("/health", get(health::health_check))
        .route("/api/food-items", get(food_items::list_food_items))
        .route("/api/table-info", get(table_info::get_table_info))
        .route("/api/orders", post(orders::create_order))
        .route("/api/orders/{id}", get(orders::get_order))
        .route("/api/orders/{id}/status", put(orders::update_order_status))
        .route("/api/requests", post(requests::create_request))
        // CORS - any origin
        .layer(CorsLayer::permissive())
        // Trace - request/response spans at INFO
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::new(x_request_id.clone()))
        .layer(SetRequestIdLayer::new(x_request_id, XRequestId))
        .with_state(state)
}
