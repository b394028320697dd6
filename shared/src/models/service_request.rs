//! Service Request Model

use serde::{Deserialize, Serialize};

/// Assistance call from a table (napkins, water, the bill...)
///
/// Write-only from the API's point of view; the store stamps `created_at`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NewServiceRequest {
    pub table_number: String,
    pub notes: String,
}
