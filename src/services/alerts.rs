//! Purchase alert lifecycle
//!
//! Creates or updates alert rows from stock analysis results. Alerting is
//! at-most-effort: a persistence failure is logged and reported as `None`
//! so the stock check can still return a usable report.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use crate::error::AppResult;
use crate::models::{AlertPriority, AlertStatus, Material, PurchaseAlert};
use crate::services::stock::StockAnalysis;
use crate::store::{AlertChanges, AlertStore, NewPurchaseAlert};

/// Alert service owning creation and update of purchase alerts
pub struct AlertService {
    store: Arc<dyn AlertStore>,
    /// Days after which an active alert counts as overdue
    overdue_after_days: i64,
}

/// Response projection of a purchase alert joined with its material
#[derive(Debug, Clone, Serialize)]
pub struct AlertView {
    pub id: Uuid,
    pub material_id: Uuid,
    pub material_name: String,
    pub material_code: String,
    pub current_stock: Decimal,
    pub safety_stock: Decimal,
    pub required_stock: Decimal,
    pub priority: AlertPriority,
    pub status: AlertStatus,
    pub unit: String,
    pub alert_date: DateTime<Utc>,
    pub is_overdue: bool,
    pub alert_age_days: i64,
}

impl AlertService {
    /// Create a new AlertService instance
    pub fn new(store: Arc<dyn AlertStore>, overdue_after_days: i64) -> Self {
        Self {
            store,
            overdue_after_days,
        }
    }

    /// Create or update the active alert for a (material, order) pair
    ///
    /// Returns `None` when the alert could not be persisted; the caller
    /// surfaces that as a warning instead of failing the stock check.
    pub async fn upsert_alert(
        &self,
        material: &Material,
        order_id: Option<Uuid>,
        analysis: &StockAnalysis,
        user_id: Option<Uuid>,
    ) -> Option<AlertView> {
        match self.try_upsert(material, order_id, analysis, user_id).await {
            Ok(alert) => Some(self.format_alert_view(&alert, material)),
            Err(e) => {
                tracing::error!(
                    material_id = %material.id,
                    error = %e,
                    "purchase alert could not be persisted"
                );
                None
            }
        }
    }

    async fn try_upsert(
        &self,
        material: &Material,
        order_id: Option<Uuid>,
        analysis: &StockAnalysis,
        user_id: Option<Uuid>,
    ) -> AppResult<PurchaseAlert> {
        if let Some(existing) = self.store.find_active_alert(material.id, order_id).await? {
            // Keep the larger shortage; a re-check must not shrink an
            // already requested purchase.
            let required_stock = existing.required_stock.max(analysis.shortage_amount);
            let update_note = format!(
                "Required quantity updated to {}{}",
                required_stock, material.unit
            );
            let notes = match &existing.notes {
                Some(notes) => format!("{}\n{}", notes, update_note),
                None => update_note,
            };

            self.store
                .update_alert(
                    existing.id,
                    AlertChanges {
                        current_stock: material.qty_on_hand,
                        required_stock,
                        priority: analysis.severity,
                        notes,
                    },
                )
                .await
        } else {
            let notes = match order_id {
                Some(order_id) => format!(
                    "Auto-generated for order {}: requires {}{}",
                    order_id, analysis.shortage_amount, material.unit
                ),
                None => format!(
                    "Auto-generated: requires {}{}",
                    analysis.shortage_amount, material.unit
                ),
            };

            self.store
                .create_alert(NewPurchaseAlert {
                    material_id: material.id,
                    order_id,
                    current_stock: material.qty_on_hand,
                    safety_stock: material.safety_stock,
                    required_stock: analysis.shortage_amount,
                    priority: analysis.severity,
                    notes,
                    created_by: user_id,
                })
                .await
        }
    }

    /// Project an alert row and its material into the response shape
    pub fn format_alert_view(&self, alert: &PurchaseAlert, material: &Material) -> AlertView {
        let now = Utc::now();
        AlertView {
            id: alert.id,
            material_id: alert.material_id,
            material_name: material.name.clone(),
            material_code: material.code.clone(),
            current_stock: alert.current_stock,
            safety_stock: alert.safety_stock,
            required_stock: alert.required_stock,
            priority: alert.priority,
            status: alert.status,
            unit: material.unit.clone(),
            alert_date: alert.created_at,
            is_overdue: alert.is_overdue(now, self.overdue_after_days),
            alert_age_days: alert.age_in_days(now),
        }
    }
}
