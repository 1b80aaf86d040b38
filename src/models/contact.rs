//! Tailor contact directory models

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A tailor the workshop dispatches production work to
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TailorContact {
    pub id: Uuid,
    pub name: String,
    pub phone: String,
    /// Main line of work, e.g. "suits" or "alterations"
    pub specialty: Option<String>,
    pub active: bool,
}
