//! Stock sufficiency checking for order line items
//!
//! Evaluates whether the materials an order consumes leave the warehouse
//! below safety levels, and raises purchase alerts through the alert
//! service. Stock shortage is advisory only: an order is never blocked by
//! inventory state, so `check_order_stock` absorbs every failure into
//! warnings instead of returning an error.

use std::collections::BTreeMap;
use std::sync::Arc;

use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use crate::error::AppResult;
use crate::models::{AlertPriority, Material, OrderLineItem};
use crate::services::alerts::{AlertService, AlertView};
use crate::store::{MaterialStore, ProductCatalog};

/// Stock service evaluating material sufficiency for orders
pub struct StockService {
    products: Arc<dyn ProductCatalog>,
    materials: Arc<dyn MaterialStore>,
    alerts: AlertService,
}

/// Per-material sufficiency analysis
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StockAnalysis {
    pub current_stock: Decimal,
    pub safety_stock: Decimal,
    pub required_qty: Decimal,
    pub stock_after_order: Decimal,
    pub is_below_safety: bool,
    pub will_be_below_safety: bool,
    pub is_out_of_stock: bool,
    pub will_be_out_of_stock: bool,
    pub needs_alert: bool,
    /// Quantity by which projected stock falls short of the safety level
    pub shortage_amount: Decimal,
    pub severity: AlertPriority,
}

/// Analysis of one material, tagged with its identity for reporting
#[derive(Debug, Clone, Serialize)]
pub struct MaterialStockAnalysis {
    pub material_id: Uuid,
    pub material_name: String,
    pub unit: String,
    #[serde(flatten)]
    pub analysis: StockAnalysis,
}

/// Aggregated outcome of a stock check for an order
#[derive(Debug, Clone, Serialize)]
pub struct StockCheckReport {
    /// Alerts created or updated during this check
    pub alerts: Vec<AlertView>,
    /// Human-readable notes: safety breaches, skipped materials, absorbed
    /// failures
    pub warnings: Vec<String>,
    /// Always true: stock shortage never blocks order placement
    pub can_proceed: bool,
    pub stock_analysis: Vec<MaterialStockAnalysis>,
}

impl StockCheckReport {
    fn empty() -> Self {
        Self {
            alerts: Vec::new(),
            warnings: Vec::new(),
            can_proceed: true,
            stock_analysis: Vec::new(),
        }
    }
}

impl StockService {
    /// Create a new StockService instance
    pub fn new(
        products: Arc<dyn ProductCatalog>,
        materials: Arc<dyn MaterialStore>,
        alerts: AlertService,
    ) -> Self {
        Self {
            products,
            materials,
            alerts,
        }
    }

    /// Sum the material quantities an order requires
    ///
    /// One unit of product consumes one unit of its linked material.
    /// Products without a material link contribute nothing; the upstream
    /// data model leaves accessories unlinked on purpose.
    // TODO: support per-product consumption ratios instead of the 1:1
    // assumption once the bill-of-materials tables land.
    pub async fn aggregate_requirements(
        &self,
        line_items: &[OrderLineItem],
    ) -> AppResult<BTreeMap<Uuid, Decimal>> {
        let mut required = BTreeMap::new();

        for item in line_items {
            let material_id = match self.products.material_for_product(item.product_id).await? {
                Some(id) => id,
                None => {
                    tracing::debug!(
                        product_id = %item.product_id,
                        "line item has no linked material, skipping"
                    );
                    continue;
                }
            };

            *required.entry(material_id).or_insert(Decimal::ZERO) += item.quantity;
        }

        Ok(required)
    }

    /// Analyze one material snapshot against a required quantity
    ///
    /// Pure computation; severity is decided by the first matching rule.
    pub fn analyze(material: &Material, required_qty: Decimal) -> StockAnalysis {
        let current = material.qty_on_hand;
        let safety = material.safety_stock;
        let after = current - required_qty;

        let is_below_safety = current < safety;
        let will_be_below_safety = after < safety;
        let is_out_of_stock = current <= Decimal::ZERO;
        let will_be_out_of_stock = after <= Decimal::ZERO;
        let needs_alert = is_below_safety || will_be_below_safety;

        let shortage_amount = if will_be_below_safety {
            (safety - after).max(Decimal::ZERO)
        } else {
            Decimal::ZERO
        };

        // A safety stock of zero (or below) leaves only the out-of-stock
        // rules with any effect.
        let severity = if is_out_of_stock || will_be_out_of_stock {
            AlertPriority::Critical
        } else if current < safety * Decimal::new(5, 1) {
            AlertPriority::High
        } else if after < safety * Decimal::new(25, 2) {
            AlertPriority::High
        } else if is_below_safety || will_be_below_safety {
            AlertPriority::Medium
        } else {
            AlertPriority::Low
        };

        StockAnalysis {
            current_stock: current,
            safety_stock: safety,
            required_qty,
            stock_after_order: after,
            is_below_safety,
            will_be_below_safety,
            is_out_of_stock,
            will_be_out_of_stock,
            needs_alert,
            shortage_amount,
            severity,
        }
    }

    /// Check material sufficiency for an order and raise purchase alerts
    ///
    /// Never fails: lookup and persistence problems become warnings in the
    /// report and the remaining materials are still processed.
    pub async fn check_order_stock(
        &self,
        line_items: &[OrderLineItem],
        order_id: Option<Uuid>,
        user_id: Option<Uuid>,
    ) -> StockCheckReport {
        let mut report = StockCheckReport::empty();

        let required = match self.aggregate_requirements(line_items).await {
            Ok(required) => required,
            Err(e) => {
                tracing::error!(error = %e, "stock requirement aggregation failed");
                report
                    .warnings
                    .push(format!("Stock check could not be completed: {}", e));
                return report;
            }
        };

        for (material_id, required_qty) in required {
            let material = match self.materials.load_material(material_id).await {
                Ok(Some(material)) => material,
                Ok(None) => {
                    report.warnings.push(format!(
                        "Material {} not found; its stock was not checked",
                        material_id
                    ));
                    continue;
                }
                Err(e) => {
                    tracing::error!(material_id = %material_id, error = %e, "material lookup failed");
                    report.warnings.push(format!(
                        "Material {} could not be loaded: {}",
                        material_id, e
                    ));
                    continue;
                }
            };

            let analysis = Self::analyze(&material, required_qty);

            if analysis.needs_alert {
                report.warnings.push(format!(
                    "{}: {}{} < {}{} (safety level)",
                    material.name,
                    material.qty_on_hand,
                    material.unit,
                    material.safety_stock,
                    material.unit
                ));

                if order_id.is_some() {
                    match self
                        .alerts
                        .upsert_alert(&material, order_id, &analysis, user_id)
                        .await
                    {
                        Some(view) => report.alerts.push(view),
                        None => report.warnings.push(format!(
                            "Purchase alert for {} could not be recorded",
                            material.name
                        )),
                    }
                }
            }

            report.stock_analysis.push(MaterialStockAnalysis {
                material_id: material.id,
                material_name: material.name.clone(),
                unit: material.unit.clone(),
                analysis,
            });
        }

        report
    }

    /// List materials currently below safety level or out of stock
    ///
    /// Standalone reporting query, independent of any order.
    pub async fn materials_with_stock_issues(&self) -> AppResult<Vec<MaterialStockAnalysis>> {
        let materials = self.materials.list_materials().await?;

        Ok(materials
            .into_iter()
            .filter(|m| m.qty_on_hand <= Decimal::ZERO || m.qty_on_hand < m.safety_stock)
            .map(|m| {
                let analysis = Self::analyze(&m, Decimal::ZERO);
                MaterialStockAnalysis {
                    material_id: m.id,
                    material_name: m.name,
                    unit: m.unit,
                    analysis,
                }
            })
            .collect())
    }
}
