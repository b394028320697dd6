//! Service request persistence

use shared::models::NewServiceRequest;
use sqlx::PgPool;

pub async fn insert_request(pool: &PgPool, request: &NewServiceRequest) -> Result<(), sqlx::Error> {
    sqlx::query("INSERT INTO requests (table_number, notes) VALUES ($1, $2)")
        .bind(&request.table_number)
        .bind(&request.notes)
        .execute(pool)
        .await?;
    Ok(())
}
