//! Request types
//!
//! Every endpoint's body or query string is a typed struct with all fields
//! optional at the serde level, so a shape problem turns into an [`AppError`]
//! naming the field instead of a generic deserializer message.

use chrono::Utc;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};

use crate::error::{AppError, AppResult, ErrorCode};
use crate::models::{NewOrder, NewServiceRequest, OrderItem, TableLookup};

/// Accept any JSON value as text: strings as-is, everything else as its JSON form
fn json_as_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Int(i64),
        Float(f64),
        Bool(bool),
        Other(serde_json::Value),
    }

    Ok(Option::<Raw>::deserialize(deserializer)?.map(|raw| match raw {
        Raw::Text(s) => s,
        Raw::Int(n) => n.to_string(),
        Raw::Float(f) => f.to_string(),
        Raw::Bool(b) => b.to_string(),
        Raw::Other(v) => v.to_string(),
    }))
}

/// GET /api/food-items
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FoodItemsQuery {
    #[serde(rename = "type")]
    pub item_type: Option<String>,
}

/// GET /api/table-info
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableInfoQuery {
    pub qr_code_image: Option<String>,
    pub table_number: Option<String>,
}

impl TableInfoQuery {
    pub fn lookup(&self) -> AppResult<TableLookup> {
        TableLookup::from_params(self.qr_code_image.as_deref(), self.table_number.as_deref())
            .ok_or_else(|| AppError::new(ErrorCode::InvalidRequest))
    }
}

/// POST /api/orders
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    #[serde(default, deserialize_with = "json_as_text")]
    pub table_number: Option<String>,
    #[serde(default)]
    pub order_items: Option<Vec<OrderItem>>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub total_amount: Option<Decimal>,
    #[serde(default)]
    pub payment_method: Option<String>,
}

impl CreateOrderRequest {
    /// Check the shape and turn the request into an insertable order
    pub fn validate(self) -> AppResult<NewOrder> {
        // Stored exactly as sent; whitespace only matters for the presence check.
        let table_number = self
            .table_number
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| AppError::required("tableNumber"))?;

        let items = self
            .order_items
            .ok_or_else(|| AppError::required("orderItems"))?;
        if items.is_empty() {
            return Err(AppError::new(ErrorCode::OrderEmpty).with_detail("field", "orderItems"));
        }
        for (idx, item) in items.iter().enumerate() {
            if item.name.trim().is_empty() {
                return Err(AppError::validation("Invalid order data")
                    .with_detail("field", format!("orderItems[{idx}].name")));
            }
            if item.quantity <= 0 {
                return Err(AppError::with_message(ErrorCode::ValueOutOfRange, "Invalid order data")
                    .with_detail("field", format!("orderItems[{idx}].quantity")));
            }
            if item.unit_price.is_sign_negative() {
                return Err(AppError::with_message(ErrorCode::ValueOutOfRange, "Invalid order data")
                    .with_detail("field", format!("orderItems[{idx}].unit_price")));
            }
        }

        let total_amount = self
            .total_amount
            .ok_or_else(|| AppError::required("totalAmount"))?;
        if total_amount.is_sign_negative() {
            return Err(AppError::with_message(ErrorCode::ValueOutOfRange, "Invalid order data")
                .with_detail("field", "totalAmount"));
        }

        Ok(NewOrder {
            table_number,
            items,
            total_amount,
            payment_method: self.payment_method,
            order_date: Utc::now(),
        })
    }
}

/// PUT /api/orders/{id}/status
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateOrderStatusRequest {
    #[serde(default)]
    pub status: Option<String>,
}

impl UpdateOrderStatusRequest {
    /// Any non-blank status is accepted verbatim; there is no fixed vocabulary.
    pub fn validate(self) -> AppResult<String> {
        self.status
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| AppError::required("status"))
    }
}

/// POST /api/requests
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateServiceRequest {
    #[serde(default, deserialize_with = "json_as_text")]
    pub table_number: Option<String>,
    #[serde(default, deserialize_with = "json_as_text")]
    pub notes: Option<String>,
}

impl From<CreateServiceRequest> for NewServiceRequest {
    fn from(req: CreateServiceRequest) -> Self {
        Self {
            table_number: req.table_number.unwrap_or_default(),
            notes: req.notes.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn order_request(value: serde_json::Value) -> CreateOrderRequest {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn valid_order_is_accepted() {
        let order = order_request(json!({
            "tableNumber": "12",
            "orderItems": [{ "name": "Pizza", "amount": 2, "price": 10 }],
            "totalAmount": 20,
            "paymentMethod": "cash"
        }))
        .validate()
        .unwrap();

        assert_eq!(order.table_number, "12");
        assert_eq!(order.items.len(), 1);
        assert_eq!(order.total_amount, Decimal::from(20));
        assert_eq!(order.payment_method.as_deref(), Some("cash"));
    }

    #[test]
    fn numeric_table_number_is_accepted() {
        let order = order_request(json!({
            "tableNumber": 12,
            "orderItems": [{ "name": "Pizza", "quantity": 1, "unit_price": 9.5 }],
            "totalAmount": 9.5
        }))
        .validate()
        .unwrap();

        assert_eq!(order.table_number, "12");
        assert_eq!(order.total_amount, Decimal::new(95, 1));
        assert!(order.payment_method.is_none());
    }

    #[test]
    fn missing_table_number_is_rejected() {
        let err = order_request(json!({
            "orderItems": [],
            "totalAmount": 0,
            "paymentMethod": "cash"
        }))
        .validate()
        .unwrap_err();

        assert_eq!(err.code, ErrorCode::RequiredField);
        assert_eq!(err.http_status(), http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn empty_items_are_rejected() {
        let err = order_request(json!({
            "tableNumber": "3",
            "orderItems": [],
            "totalAmount": 0
        }))
        .validate()
        .unwrap_err();

        assert_eq!(err.code, ErrorCode::OrderEmpty);
        assert_eq!(err.http_status(), http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn bad_line_items_are_rejected() {
        let zero_quantity = order_request(json!({
            "tableNumber": "3",
            "orderItems": [{ "name": "Tea", "quantity": 0, "unit_price": 2 }],
            "totalAmount": 0
        }))
        .validate()
        .unwrap_err();
        assert_eq!(zero_quantity.code, ErrorCode::ValueOutOfRange);

        let blank_name = order_request(json!({
            "tableNumber": "3",
            "orderItems": [{ "name": " ", "quantity": 1, "unit_price": 2 }],
            "totalAmount": 2
        }))
        .validate()
        .unwrap_err();
        assert_eq!(blank_name.code, ErrorCode::ValidationFailed);
    }

    #[test]
    fn missing_or_negative_total_is_rejected() {
        let missing = order_request(json!({
            "tableNumber": "3",
            "orderItems": [{ "name": "Tea", "quantity": 1, "unit_price": 2 }]
        }))
        .validate()
        .unwrap_err();
        assert_eq!(missing.code, ErrorCode::RequiredField);

        let negative = order_request(json!({
            "tableNumber": "3",
            "orderItems": [{ "name": "Tea", "quantity": 1, "unit_price": 2 }],
            "totalAmount": -1
        }))
        .validate()
        .unwrap_err();
        assert_eq!(negative.code, ErrorCode::ValueOutOfRange);
    }

    #[test]
    fn status_must_be_supplied() {
        let req: UpdateOrderStatusRequest = serde_json::from_value(json!({})).unwrap();
        assert_eq!(req.validate().unwrap_err().code, ErrorCode::RequiredField);

        let req: UpdateOrderStatusRequest = serde_json::from_value(json!({ "status": "  " })).unwrap();
        assert!(req.validate().is_err());

        let req: UpdateOrderStatusRequest =
            serde_json::from_value(json!({ "status": "served" })).unwrap();
        assert_eq!(req.validate().unwrap(), "served");
    }

    #[test]
    fn status_is_kept_as_sent() {
        let req: UpdateOrderStatusRequest =
            serde_json::from_value(json!({ "status": " served " })).unwrap();
        assert_eq!(req.validate().unwrap(), " served ");
    }

    #[test]
    fn table_number_is_kept_as_sent() {
        let order = order_request(json!({
            "tableNumber": "12 ",
            "orderItems": [{ "name": "Tea", "quantity": 1, "unit_price": 2 }],
            "totalAmount": 2
        }))
        .validate()
        .unwrap();
        assert_eq!(order.table_number, "12 ");

        let err = order_request(json!({
            "tableNumber": "   ",
            "orderItems": [{ "name": "Tea", "quantity": 1, "unit_price": 2 }],
            "totalAmount": 2
        }))
        .validate()
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::RequiredField);
    }

    #[test]
    fn service_request_fields_default_to_empty() {
        let req: CreateServiceRequest = serde_json::from_value(json!({})).unwrap();
        assert_eq!(NewServiceRequest::from(req), NewServiceRequest::default());

        let req: CreateServiceRequest =
            serde_json::from_value(json!({ "tableNumber": 5, "notes": "need napkins" })).unwrap();
        let new_request = NewServiceRequest::from(req);
        assert_eq!(new_request.table_number, "5");
        assert_eq!(new_request.notes, "need napkins");
    }

    #[test]
    fn service_request_scalars_become_text() {
        let req: CreateServiceRequest =
            serde_json::from_value(json!({ "tableNumber": "5", "notes": 5 })).unwrap();
        assert_eq!(NewServiceRequest::from(req).notes, "5");

        let req: CreateServiceRequest =
            serde_json::from_value(json!({ "tableNumber": true, "notes": false })).unwrap();
        let new_request = NewServiceRequest::from(req);
        assert_eq!(new_request.table_number, "true");
        assert_eq!(new_request.notes, "false");

        let req: CreateServiceRequest =
            serde_json::from_value(json!({ "tableNumber": "5", "notes": ["water", 2] })).unwrap();
        assert_eq!(NewServiceRequest::from(req).notes, r#"["water",2]"#);

        let req: CreateServiceRequest =
            serde_json::from_value(json!({ "tableNumber": null, "notes": null })).unwrap();
        assert_eq!(NewServiceRequest::from(req), NewServiceRequest::default());
    }

    #[test]
    fn table_query_needs_a_key() {
        let err = TableInfoQuery::default().lookup().unwrap_err();
        assert_eq!(err.http_status(), http::StatusCode::BAD_REQUEST);
    }
}
