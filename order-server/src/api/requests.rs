//! Service request endpoint

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use shared::error::AppError;
use shared::models::NewServiceRequest;
use shared::request::CreateServiceRequest;

use crate::state::AppState;

use super::bad_body;

/// POST /api/requests
///
/// Accepts whatever the table sends; blank fields are stored as empty text.
pub async fn create_request(
    State(state): State<AppState>,
    payload: Result<Json<CreateServiceRequest>, JsonRejection>,
) -> Result<(StatusCode, &'static str), AppError> {
    let Json(payload) = payload.map_err(|r| bad_body(r, "Invalid request data"))?;
    let request = NewServiceRequest::from(payload);

    state
        .store
        .insert_service_request(&request)
        .await
        .map_err(|e| {
            tracing::error!(
                table_number = %request.table_number,
                error = %e,
                "Error saving request"
            );
            e
        })?;

    tracing::info!(table_number = %request.table_number, "Service request saved");
    Ok((StatusCode::CREATED, "Request saved successfully"))
}
