//! Food Item Model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Sentinel type meaning "every category"
pub const ALL_TYPES: &str = "ALL";

/// Menu entry as stored in `food_items`
///
/// Maintained out-of-band; this service only reads it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct FoodItemRow {
    pub id: i64,
    pub name: String,
    pub price: Option<Decimal>,
    #[serde(rename = "type")]
    #[cfg_attr(feature = "db", sqlx(rename = "type"))]
    pub item_type: Option<String>,
    pub image: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
}

impl FoodItemRow {
    pub fn is_published(&self) -> bool {
        self.published_at.is_some()
    }
}

/// Public menu entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    pub id: i64,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(rename = "type")]
    pub item_type: String,
    pub image: String,
}

impl From<FoodItemRow> for FoodItem {
    fn from(row: FoodItemRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            price: row.price.unwrap_or(Decimal::ZERO),
            item_type: row
                .item_type
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| ALL_TYPES.to_string()),
            image: row.image.unwrap_or_default(),
        }
    }
}

/// Reduce a raw `type` query value to a concrete category, if any.
///
/// Missing, blank and [`ALL_TYPES`] all mean "no category restriction".
pub fn type_filter(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim)
        .filter(|t| !t.is_empty() && *t != ALL_TYPES)
}
