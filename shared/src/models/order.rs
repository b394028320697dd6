//! Order Model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Status every order starts in
pub const ORDER_STATUS_WAITING: &str = "waiting";

/// One line of an order
///
/// Clients may send `amount`/`price` instead of `quantity`/`unit_price`; the
/// stored form always uses the canonical names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub name: String,
    #[serde(alias = "amount")]
    pub quantity: i32,
    #[serde(alias = "price", alias = "unitPrice", with = "rust_decimal::serde::float")]
    pub unit_price: Decimal,
}

/// Order row as stored in `orders`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Order {
    pub id: i64,
    pub table_number: String,
    /// JSON text of `Vec<OrderItem>`
    pub items: String,
    pub total_amount: Decimal,
    pub total_price: Decimal,
    pub payment_method: Option<String>,
    pub order_date: DateTime<Utc>,
    pub status: String,
}

impl Order {
    /// Decode the stored items blob
    pub fn parsed_items(&self) -> Result<Vec<OrderItem>, serde_json::Error> {
        serde_json::from_str(&self.items)
    }
}

/// Order as returned to staff clients, items decoded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDetail {
    pub id: i64,
    pub table_number: String,
    pub items: Vec<OrderItem>,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_amount: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_price: Decimal,
    pub payment_method: Option<String>,
    pub order_date: DateTime<Utc>,
    pub status: String,
}

impl TryFrom<Order> for OrderDetail {
    type Error = serde_json::Error;

    fn try_from(order: Order) -> Result<Self, Self::Error> {
        let items = order.parsed_items()?;
        Ok(Self {
            id: order.id,
            table_number: order.table_number,
            items,
            total_amount: order.total_amount,
            total_price: order.total_price,
            payment_method: order.payment_method,
            order_date: order.order_date,
            status: order.status,
        })
    }
}

/// A validated order ready to be inserted
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub table_number: String,
    pub items: Vec<OrderItem>,
    pub total_amount: Decimal,
    pub payment_method: Option<String>,
    pub order_date: DateTime<Utc>,
}

impl NewOrder {
    /// Serialized form of the items column
    pub fn items_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.items)
    }

    /// Always equal to `total_amount` at creation
    pub fn total_price(&self) -> Decimal {
        self.total_amount
    }

    pub fn status(&self) -> &'static str {
        ORDER_STATUS_WAITING
    }
}

/// Creation confirmation (`201 Created`)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreated {
    pub message: String,
    pub order_id: i64,
}

impl OrderCreated {
    pub fn new(order_id: i64) -> Self {
        Self {
            message: "Order created successfully".to_string(),
            order_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn item_accepts_client_aliases() {
        let item: OrderItem =
            serde_json::from_value(json!({ "name": "Pizza", "amount": 2, "price": 10 })).unwrap();
        assert_eq!(item.name, "Pizza");
        assert_eq!(item.quantity, 2);
        assert_eq!(item.unit_price, Decimal::from(10));
    }

    #[test]
    fn items_round_trip_through_blob() {
        let new_order = NewOrder {
            table_number: "12".into(),
            items: vec![OrderItem {
                name: "Pizza".into(),
                quantity: 2,
                unit_price: Decimal::new(1050, 2),
            }],
            total_amount: Decimal::new(2100, 2),
            payment_method: Some("cash".into()),
            order_date: Utc::now(),
        };

        let order = Order {
            id: 1,
            table_number: new_order.table_number.clone(),
            items: new_order.items_json().unwrap(),
            total_amount: new_order.total_amount,
            total_price: new_order.total_price(),
            payment_method: new_order.payment_method.clone(),
            order_date: new_order.order_date,
            status: new_order.status().to_string(),
        };

        assert_eq!(order.parsed_items().unwrap(), new_order.items);
        assert_eq!(order.total_price, order.total_amount);
        assert_eq!(order.status, ORDER_STATUS_WAITING);

        let detail = OrderDetail::try_from(order).unwrap();
        assert_eq!(detail.items, new_order.items);
        assert_eq!(detail.status, ORDER_STATUS_WAITING);
    }

    #[test]
    fn corrupt_items_blob_fails_detail_conversion() {
        let order = Order {
            id: 9,
            table_number: "1".into(),
            items: "not json".into(),
            total_amount: Decimal::ZERO,
            total_price: Decimal::ZERO,
            payment_method: None,
            order_date: Utc::now(),
            status: ORDER_STATUS_WAITING.into(),
        };
        assert!(OrderDetail::try_from(order).is_err());
    }

    #[test]
    fn created_response_is_camel_case() {
        let json = serde_json::to_value(OrderCreated::new(42)).unwrap();
        assert_eq!(json, json!({ "message": "Order created successfully", "orderId": 42 }));
    }
}
