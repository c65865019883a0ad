use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A catalog product.
///
/// JSON field names are camelCase to match the public API. Missing
/// fields bind to their defaults; no field-level validation is applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Product {
    /// Opaque identifier, assigned by the persistence layer when absent
    /// at first save. Immutable once assigned.
    pub id: Option<String>,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub stock_quantity: i32,
    /// Set once at first save, never overwritten afterwards.
    pub created_at: Option<NaiveDateTime>,
    /// Stamped at save time when absent.
    pub updated_at: Option<NaiveDateTime>,
}

impl Product {
    /// Whether the persistence layer still has to assign an identifier.
    pub fn needs_id(&self) -> bool {
        match &self.id {
            Some(id) => id.is_empty(),
            None => true,
        }
    }
}
