//! Order models and the order status state machine

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::error::{AppError, AppResult};

/// One product line of a customer order
///
/// Quantities are validated upstream at order intake; the stock evaluator
/// assumes positive quantities.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct OrderLineItem {
    pub product_id: Uuid,
    #[validate(custom = "validate_positive_quantity")]
    pub quantity: Decimal,
}

fn validate_positive_quantity(quantity: &Decimal) -> Result<(), ValidationError> {
    if *quantity <= Decimal::ZERO {
        return Err(ValidationError::new("quantity_not_positive"));
    }
    Ok(())
}

impl OrderLineItem {
    /// Intake-time validation, mapped onto the application error type
    pub fn ensure_valid(&self) -> AppResult<()> {
        self.validate().map_err(|_| AppError::Validation {
            field: "quantity".to_string(),
            message: "Quantity must be positive".to_string(),
        })
    }
}

/// Status of a customer order in the workshop workflow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    InProduction,
    QualityCheck,
    Shipped,
    Completed,
    Cancelled,
}

/// The single authoritative transition table. Every status change in the
/// application must go through `OrderStatus::transition_to`.
const ALLOWED_TRANSITIONS: &[(OrderStatus, OrderStatus)] = &[
    (OrderStatus::Pending, OrderStatus::Confirmed),
    (OrderStatus::Pending, OrderStatus::Cancelled),
    (OrderStatus::Confirmed, OrderStatus::InProduction),
    (OrderStatus::Confirmed, OrderStatus::Cancelled),
    (OrderStatus::InProduction, OrderStatus::QualityCheck),
    (OrderStatus::InProduction, OrderStatus::Cancelled),
    // Rework loop
    (OrderStatus::QualityCheck, OrderStatus::InProduction),
    (OrderStatus::QualityCheck, OrderStatus::Shipped),
    (OrderStatus::QualityCheck, OrderStatus::Cancelled),
    (OrderStatus::Shipped, OrderStatus::Completed),
];

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::InProduction => "in_production",
            OrderStatus::QualityCheck => "quality_check",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    /// Whether the order can move from this status to `next`
    pub fn can_transition_to(self, next: OrderStatus) -> bool {
        ALLOWED_TRANSITIONS.contains(&(self, next))
    }

    /// Move to `next`, or fail with `InvalidStatusTransition`
    pub fn transition_to(self, next: OrderStatus) -> AppResult<OrderStatus> {
        if self.can_transition_to(next) {
            Ok(next)
        } else {
            Err(AppError::InvalidStatusTransition(format!(
                "{} -> {}",
                self.as_str(),
                next.as_str()
            )))
        }
    }

    /// Terminal statuses admit no further transitions
    pub fn is_terminal(self) -> bool {
        ALLOWED_TRANSITIONS.iter().all(|(from, _)| *from != self)
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
