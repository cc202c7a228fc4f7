//! Attribute definitions.

use crate::ids::{AttributeId, CategoryId};
use serde::{Deserialize, Serialize};

/// A named, category-scoped characteristic (e.g., "RAM") with a controlled
/// value set, usable as a filter facet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AttributeDefinition {
    /// Unique attribute identifier.
    pub id: AttributeId,
    /// Category this attribute applies to.
    pub category_id: CategoryId,
    /// Display name (e.g., "RAM").
    pub name: String,
    /// Controlled value set (e.g., ["8 Go", "16 Go", "32 Go"]).
    pub values: Vec<String>,
    /// Whether the attribute is offered as a filter facet.
    pub filterable: bool,
    /// Sort order position in the filter sidebar.
    pub position: i32,
}

impl AttributeDefinition {
    /// Create a new filterable attribute for a category.
    pub fn new(
        category_id: CategoryId,
        name: impl Into<String>,
        values: Vec<String>,
    ) -> Self {
        Self {
            id: AttributeId::generate(),
            category_id,
            name: name.into(),
            values,
            filterable: true,
            position: 0,
        }
    }

    /// Check whether a value belongs to the controlled set.
    pub fn allows_value(&self, value: &str) -> bool {
        self.values.iter().any(|v| v == value)
    }

    /// Add a value to the controlled set if not already present.
    pub fn add_value(&mut self, value: impl Into<String>) {
        let value = value.into();
        if !self.values.contains(&value) {
            self.values.push(value);
        }
    }
}
