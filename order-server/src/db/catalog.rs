//! Menu (food_items) queries

use shared::models::FoodItemRow;
use sqlx::PgPool;

/// Published menu entries, optionally restricted to one category, by id.
pub async fn list_published(
    pool: &PgPool,
    item_type: Option<&str>,
) -> Result<Vec<FoodItemRow>, sqlx::Error> {
    let rows: Vec<FoodItemRow> = if let Some(item_type) = item_type {
        sqlx::query_as(
            r#"
            SELECT id, name, price, type, image, published_at
            FROM food_items
            WHERE published_at IS NOT NULL AND type = $1
            ORDER BY id ASC
            "#,
        )
        .bind(item_type)
        .fetch_all(pool)
        .await?
    } else {
        sqlx::query_as(
            r#"
            SELECT id, name, price, type, image, published_at
            FROM food_items
            WHERE published_at IS NOT NULL
            ORDER BY id ASC
            "#,
        )
        .fetch_all(pool)
        .await?
    };
    Ok(rows)
}
