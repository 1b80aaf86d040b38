//! Atelier Stock Core
//!
//! Order and warehouse logic for a tailoring workshop management system:
//! stock sufficiency evaluation for order line items, purchase alert
//! lifecycle, order status transitions, and a cached tailor directory.
//!
//! Persistence is consumed through the trait seams in [`store`]; the
//! surrounding application wires them to its database and calls
//! [`services::StockService::check_order_stock`] from its order handlers.

pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod store;

pub use config::Config;
pub use error::{AppError, AppResult};
