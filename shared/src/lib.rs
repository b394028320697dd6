//! Shared types for the table ordering backend
//!
//! Data models, request shapes and the error taxonomy used by the
//! order-server crate and by its tests.

pub mod error;
pub mod models;
pub mod request;

// Re-exports
pub use http;
pub use serde::{Deserialize, Serialize};
