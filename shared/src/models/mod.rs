//! Data models
//!
//! Row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]` so the
//! crate stays usable without a database driver.

pub mod dining_table;
pub mod food_item;
pub mod order;
pub mod service_request;

// Re-exports
pub use dining_table::*;
pub use food_item::*;
pub use order::*;
pub use service_request::*;
