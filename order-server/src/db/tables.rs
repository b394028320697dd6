//! Dining table lookups
//!
//! The whole row is read back as JSONB so columns added to `tables` later
//! show up in responses without touching this code.

use shared::models::{DiningTable, TableLookup};
use sqlx::PgPool;

pub async fn find_table(
    pool: &PgPool,
    lookup: &TableLookup,
) -> Result<Option<DiningTable>, sqlx::Error> {
    // Compare as text so integer table_number columns work too.
    let sql = match lookup {
        TableLookup::QrCode(_) => {
            "SELECT to_jsonb(t) FROM tables t WHERE t.qr_code_image::text = $1 LIMIT 1"
        }
        TableLookup::Number(_) => {
            "SELECT to_jsonb(t) FROM tables t WHERE t.table_number::text = $1 LIMIT 1"
        }
    };

    let row: Option<(serde_json::Value,)> = sqlx::query_as(sql)
        .bind(lookup.value())
        .fetch_optional(pool)
        .await?;

    Ok(row.map(|(value,)| DiningTable::from(value)))
}
