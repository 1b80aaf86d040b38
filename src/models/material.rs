//! Material models

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A fabric or accessory tracked in the warehouse
///
/// Read fresh from the store on every evaluation; the evaluator never
/// mutates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Material {
    pub id: Uuid,
    /// Short warehouse code, e.g. "FAB-0042"
    pub code: String,
    pub name: String,
    /// Display unit, e.g. "m" or "pcs"
    pub unit: String,
    pub qty_on_hand: Decimal,
    /// Threshold below which replenishment is recommended
    pub safety_stock: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
