//! Business logic services for the atelier stock core

pub mod alerts;
pub mod contacts;
pub mod stock;

pub use alerts::AlertService;
pub use contacts::TailorDirectory;
pub use stock::StockService;
