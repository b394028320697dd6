//! Table lookup by QR token or table number

use axum::{
    Json,
    extract::{Query, State},
};
use shared::error::{AppError, ErrorCode};
use shared::models::DiningTable;
use shared::request::TableInfoQuery;

use crate::state::AppState;

use super::ApiResult;

/// GET /api/table-info?qrCodeImage=... | ?tableNumber=...
pub async fn get_table_info(
    State(state): State<AppState>,
    Query(query): Query<TableInfoQuery>,
) -> ApiResult<DiningTable> {
    let lookup = query.lookup()?;

    let table = state
        .store
        .find_table(&lookup)
        .await
        .map_err(|e| {
            tracing::error!(column = lookup.column(), error = %e, "Error fetching table info");
            e
        })?
        .ok_or_else(|| {
            AppError::new(ErrorCode::TableNotFound)
                .with_detail(lookup.column(), lookup.value().to_string())
        })?;

    Ok(Json(table))
}
