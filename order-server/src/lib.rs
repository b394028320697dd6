//! order-server: table-side ordering backend
//!
//! Serves the menu, resolves tables from QR codes, takes orders, moves
//! order status and records service requests. Every request maps to one
//! parameterised SQL statement against PostgreSQL.

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod state;

pub use config::Config;
pub use state::AppState;
