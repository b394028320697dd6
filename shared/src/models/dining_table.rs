//! Dining Table Model

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Dining table record
///
/// The `tables` schema is owned elsewhere and may carry any number of extra
/// columns, so the row is kept as a JSON object and returned verbatim.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DiningTable(pub Map<String, Value>);

impl DiningTable {
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.0.get(column)
    }

    pub fn qr_code_image(&self) -> Option<&str> {
        self.get("qr_code_image").and_then(Value::as_str)
    }

    /// Table number as text, whether stored as a string or a number
    pub fn table_number(&self) -> Option<String> {
        match self.get("table_number")? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    /// Whether this row answers the given lookup
    pub fn matches(&self, lookup: &TableLookup) -> bool {
        match lookup {
            TableLookup::QrCode(token) => self.qr_code_image() == Some(token.as_str()),
            TableLookup::Number(number) => self.table_number().as_deref() == Some(number.as_str()),
        }
    }
}

impl From<Value> for DiningTable {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => Self(map),
            _ => Self::default(),
        }
    }
}

/// How a table is identified by the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableLookup {
    /// Printed QR token (`qr_code_image` column)
    QrCode(String),
    /// Human table number (`table_number` column)
    Number(String),
}

impl TableLookup {
    /// Pick the lookup key, QR token first. Blank values count as absent.
    pub fn from_params(qr_code_image: Option<&str>, table_number: Option<&str>) -> Option<Self> {
        let present = |v: Option<&str>| v.map(str::trim).filter(|s| !s.is_empty()).map(str::to_string);

        present(qr_code_image)
            .map(Self::QrCode)
            .or_else(|| present(table_number).map(Self::Number))
    }

    pub fn column(&self) -> &'static str {
        match self {
            Self::QrCode(_) => "qr_code_image",
            Self::Number(_) => "table_number",
        }
    }

    pub fn value(&self) -> &str {
        match self {
            Self::QrCode(v) | Self::Number(v) => v,
        }
    }
}
