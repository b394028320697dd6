//! Menu endpoint

use axum::{
    Json,
    extract::{Query, State},
};
use shared::models::{FoodItem, type_filter};
use shared::request::FoodItemsQuery;

use crate::state::AppState;

use super::ApiResult;

/// GET /api/food-items?type=DRINK
pub async fn list_food_items(
    State(state): State<AppState>,
    Query(query): Query<FoodItemsQuery>,
) -> ApiResult<Vec<FoodItem>> {
    let item_type = type_filter(query.item_type.as_deref());
    tracing::debug!(item_type = ?item_type, "Listing published food items");

    let rows = state.store.list_food_items(item_type).await.map_err(|e| {
        tracing::error!(item_type = ?item_type, error = %e, "Error fetching food items");
        e
    })?;

    Ok(Json(rows.into_iter().map(FoodItem::from).collect()))
}
