//! Order persistence

use shared::error::ErrorCode;
use shared::models::{NewOrder, Order};
use sqlx::PgPool;

use crate::error::{ServiceError, ServiceResult};

/// Insert a validated order, returning its id.
pub async fn insert_order(pool: &PgPool, order: &NewOrder) -> ServiceResult<i64> {
    let items = order.items_json()?;

    let (id,): (i64,) = sqlx::query_as(
        r#"
        INSERT INTO orders (
            table_number, items, total_amount, payment_method, order_date, status, total_price
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING id
        "#,
    )
    .bind(&order.table_number)
    .bind(&items)
    .bind(order.total_amount)
    .bind(&order.payment_method)
    .bind(order.order_date)
    .bind(order.status())
    .bind(order.total_price())
    .fetch_one(pool)
    .await
    .map_err(|e| ServiceError::from_write(e, ErrorCode::OrderTableUnknown))?;

    Ok(id)
}

/// Overwrite the status column. Returns false when no row has that id.
pub async fn update_status(pool: &PgPool, order_id: i64, status: &str) -> ServiceResult<bool> {
    let result = sqlx::query("UPDATE orders SET status = $1 WHERE id = $2")
        .bind(status)
        .bind(order_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

pub async fn find_order(pool: &PgPool, order_id: i64) -> ServiceResult<Option<Order>> {
    let row: Option<Order> = sqlx::query_as(
        r#"
        SELECT id, table_number, items, total_amount, total_price,
               payment_method, order_date, status
        FROM orders
        WHERE id = $1
        "#,
    )
    .bind(order_id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}
