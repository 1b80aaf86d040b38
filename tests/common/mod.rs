//! Shared test fixtures: in-memory store implementations and builders
#![allow(dead_code)]

use std::collections::HashMap;
use std::str::FromStr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use atelier_stock::error::{AppError, AppResult};
use atelier_stock::models::{AlertStatus, Material, OrderLineItem, PurchaseAlert, TailorContact};
use atelier_stock::services::{AlertService, StockService};
use atelier_stock::store::{
    AlertChanges, AlertStore, ContactStore, MaterialStore, NewPurchaseAlert, ProductCatalog,
};

/// Helper to create Decimal from string
pub fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

pub fn material(name: &str, unit: &str, qty_on_hand: &str, safety_stock: &str) -> Material {
    let now = Utc::now();
    Material {
        id: Uuid::new_v4(),
        code: format!("FAB-{}", &Uuid::new_v4().to_string()[..8]),
        name: name.to_string(),
        unit: unit.to_string(),
        qty_on_hand: dec(qty_on_hand),
        safety_stock: dec(safety_stock),
        created_at: now,
        updated_at: now,
    }
}

pub fn line(product_id: Uuid, quantity: &str) -> OrderLineItem {
    OrderLineItem {
        product_id,
        quantity: dec(quantity),
    }
}

pub fn tailor(name: &str) -> TailorContact {
    TailorContact {
        id: Uuid::new_v4(),
        name: name.to_string(),
        phone: "555-0100".to_string(),
        specialty: Some("suits".to_string()),
        active: true,
    }
}

/// Build a stock service over the given stores with the default alert policy
pub fn stock_service(
    catalog: Arc<dyn ProductCatalog>,
    materials: Arc<dyn MaterialStore>,
    alerts: Arc<dyn AlertStore>,
) -> StockService {
    StockService::new(catalog, materials, AlertService::new(alerts, 7))
}

// ============================================================================
// In-memory stores
// ============================================================================

#[derive(Default)]
pub struct InMemoryCatalog {
    links: Mutex<HashMap<Uuid, Uuid>>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn link(&self, product_id: Uuid, material_id: Uuid) {
        self.links.lock().unwrap().insert(product_id, material_id);
    }
}

#[async_trait]
impl ProductCatalog for InMemoryCatalog {
    async fn material_for_product(&self, product_id: Uuid) -> AppResult<Option<Uuid>> {
        Ok(self.links.lock().unwrap().get(&product_id).copied())
    }
}

/// Catalog whose lookups always fail, for degraded-report tests
pub struct FailingCatalog;

#[async_trait]
impl ProductCatalog for FailingCatalog {
    async fn material_for_product(&self, _product_id: Uuid) -> AppResult<Option<Uuid>> {
        Err(AppError::Storage("catalog offline".to_string()))
    }
}

#[derive(Default)]
pub struct InMemoryMaterials {
    materials: Mutex<HashMap<Uuid, Material>>,
}

impl InMemoryMaterials {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, material: Material) {
        self.materials
            .lock()
            .unwrap()
            .insert(material.id, material);
    }
}

#[async_trait]
impl MaterialStore for InMemoryMaterials {
    async fn load_material(&self, material_id: Uuid) -> AppResult<Option<Material>> {
        Ok(self.materials.lock().unwrap().get(&material_id).cloned())
    }

    async fn list_materials(&self) -> AppResult<Vec<Material>> {
        Ok(self.materials.lock().unwrap().values().cloned().collect())
    }
}

#[derive(Default)]
pub struct InMemoryAlerts {
    rows: Mutex<Vec<PurchaseAlert>>,
}

impl InMemoryAlerts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn all(&self) -> Vec<PurchaseAlert> {
        self.rows.lock().unwrap().clone()
    }

    pub fn push(&self, alert: PurchaseAlert) {
        self.rows.lock().unwrap().push(alert);
    }
}

#[async_trait]
impl AlertStore for InMemoryAlerts {
    async fn find_active_alert(
        &self,
        material_id: Uuid,
        order_id: Option<Uuid>,
    ) -> AppResult<Option<PurchaseAlert>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|a| {
                a.material_id == material_id && a.order_id == order_id && a.status.is_active()
            })
            .cloned())
    }

    async fn create_alert(&self, input: NewPurchaseAlert) -> AppResult<PurchaseAlert> {
        let now = Utc::now();
        let alert = PurchaseAlert {
            id: Uuid::new_v4(),
            material_id: input.material_id,
            order_id: input.order_id,
            current_stock: input.current_stock,
            safety_stock: input.safety_stock,
            required_stock: input.required_stock,
            priority: input.priority,
            status: AlertStatus::Pending,
            notes: Some(input.notes),
            created_by: input.created_by,
            created_at: now,
            updated_at: now,
        };
        self.rows.lock().unwrap().push(alert.clone());
        Ok(alert)
    }

    async fn update_alert(
        &self,
        alert_id: Uuid,
        changes: AlertChanges,
    ) -> AppResult<PurchaseAlert> {
        let mut rows = self.rows.lock().unwrap();
        let alert = rows
            .iter_mut()
            .find(|a| a.id == alert_id)
            .ok_or_else(|| AppError::NotFound("Alert".to_string()))?;

        alert.current_stock = changes.current_stock;
        alert.required_stock = changes.required_stock;
        alert.priority = changes.priority;
        alert.notes = Some(changes.notes);
        alert.updated_at = Utc::now();
        Ok(alert.clone())
    }
}

/// Alert store whose writes always fail, for swallow-and-warn tests
pub struct FailingAlerts;

#[async_trait]
impl AlertStore for FailingAlerts {
    async fn find_active_alert(
        &self,
        _material_id: Uuid,
        _order_id: Option<Uuid>,
    ) -> AppResult<Option<PurchaseAlert>> {
        Err(AppError::Storage("alerts table unavailable".to_string()))
    }

    async fn create_alert(&self, _input: NewPurchaseAlert) -> AppResult<PurchaseAlert> {
        Err(AppError::Storage("alerts table unavailable".to_string()))
    }

    async fn update_alert(
        &self,
        _alert_id: Uuid,
        _changes: AlertChanges,
    ) -> AppResult<PurchaseAlert> {
        Err(AppError::Storage("alerts table unavailable".to_string()))
    }
}

/// Contact store counting how often the directory actually hits it
pub struct CountingContacts {
    tailors: Vec<TailorContact>,
    hits: AtomicUsize,
}

impl CountingContacts {
    pub fn new(tailors: Vec<TailorContact>) -> Self {
        Self {
            tailors,
            hits: AtomicUsize::new(0),
        }
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ContactStore for CountingContacts {
    async fn list_tailors(&self) -> AppResult<Vec<TailorContact>> {
        self.hits.fetch_add(1, Ordering::SeqCst);
        Ok(self.tailors.clone())
    }
}
