//! Persistence interfaces consumed by the services
//!
//! The surrounding application implements these over its database; tests
//! implement them in memory. The stock checker itself owns no persistent
//! state and writes to nothing but the purchase alert table, through
//! `AlertStore` exclusively.

use async_trait::async_trait;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::error::AppResult;
use crate::models::{AlertPriority, Material, PurchaseAlert, TailorContact};

/// Product to material resolution
#[async_trait]
pub trait ProductCatalog: Send + Sync {
    /// Resolve the material a product consumes, if one is linked
    async fn material_for_product(&self, product_id: Uuid) -> AppResult<Option<Uuid>>;
}

/// Material snapshot reads
#[async_trait]
pub trait MaterialStore: Send + Sync {
    async fn load_material(&self, material_id: Uuid) -> AppResult<Option<Material>>;

    async fn list_materials(&self) -> AppResult<Vec<Material>>;
}

/// Purchase alert persistence
#[async_trait]
pub trait AlertStore: Send + Sync {
    /// Find an alert for the pair whose status is still active
    /// (pending or ordered)
    async fn find_active_alert(
        &self,
        material_id: Uuid,
        order_id: Option<Uuid>,
    ) -> AppResult<Option<PurchaseAlert>>;

    async fn create_alert(&self, input: NewPurchaseAlert) -> AppResult<PurchaseAlert>;

    async fn update_alert(&self, alert_id: Uuid, changes: AlertChanges)
        -> AppResult<PurchaseAlert>;
}

/// Tailor contact directory reads
#[async_trait]
pub trait ContactStore: Send + Sync {
    async fn list_tailors(&self) -> AppResult<Vec<TailorContact>>;
}

/// Fields for a newly raised purchase alert
#[derive(Debug, Clone)]
pub struct NewPurchaseAlert {
    pub material_id: Uuid,
    pub order_id: Option<Uuid>,
    pub current_stock: Decimal,
    pub safety_stock: Decimal,
    pub required_stock: Decimal,
    pub priority: AlertPriority,
    pub notes: String,
    pub created_by: Option<Uuid>,
}

/// Fields updated on an existing active alert
#[derive(Debug, Clone)]
pub struct AlertChanges {
    pub current_stock: Decimal,
    pub required_stock: Decimal,
    pub priority: AlertPriority,
    pub notes: String,
}
