//! Purchase alert models

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle status of a purchase alert
///
/// `pending -> ordered -> fulfilled` (or `-> cancelled`) is driven by the
/// purchasing workflow; the stock checker only ever creates `pending`
/// alerts and updates active ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertStatus {
    Pending,
    Ordered,
    Fulfilled,
    Cancelled,
}

impl AlertStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertStatus::Pending => "pending",
            AlertStatus::Ordered => "ordered",
            AlertStatus::Fulfilled => "fulfilled",
            AlertStatus::Cancelled => "cancelled",
        }
    }

    /// An active alert still requires purchasing action
    pub fn is_active(&self) -> bool {
        matches!(self, AlertStatus::Pending | AlertStatus::Ordered)
    }
}

/// Urgency of a purchase alert, derived from the stock analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertPriority {
    Low,
    Medium,
    High,
    Critical,
}

impl AlertPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertPriority::Low => "low",
            AlertPriority::Medium => "medium",
            AlertPriority::High => "high",
            AlertPriority::Critical => "critical",
        }
    }
}

/// A persisted replenishment request for a material
///
/// At most one active alert exists per (material, order) pair within a
/// single logical request; a repeated stock check updates the existing row
/// instead of duplicating it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseAlert {
    pub id: Uuid,
    pub material_id: Uuid,
    /// Absent when the alert was raised outside any order context
    pub order_id: Option<Uuid>,
    pub current_stock: Decimal,
    pub safety_stock: Decimal,
    /// Shortage amount to purchase
    pub required_stock: Decimal,
    pub priority: AlertPriority,
    pub status: AlertStatus,
    pub notes: Option<String>,
    pub created_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PurchaseAlert {
    /// Whole days since the alert was raised
    pub fn age_in_days(&self, now: DateTime<Utc>) -> i64 {
        (now - self.created_at).num_days()
    }

    /// An alert is overdue once it has stayed active past the policy
    /// threshold
    pub fn is_overdue(&self, now: DateTime<Utc>, threshold_days: i64) -> bool {
        self.status.is_active() && self.age_in_days(now) > threshold_days
    }
}
