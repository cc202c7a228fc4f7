//! Category types for catalogue organization.

use crate::catalog::ProductKind;
use crate::ids::CategoryId;
use serde::{Deserialize, Serialize};

/// A catalogue category.
///
/// Categories form a flat parent-pointer hierarchy and belong to one side
/// of the business: the rental catalogue or the sales boutique.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    /// Unique category identifier.
    pub id: CategoryId,
    /// Parent category ID (None for root categories).
    pub parent_id: Option<CategoryId>,
    /// Category name.
    pub name: String,
    /// URL-friendly slug.
    pub slug: String,
    /// Category description.
    pub description: Option<String>,
    /// Category image URL.
    pub image_url: Option<String>,
    /// Rental catalogue or sales boutique.
    pub kind: ProductKind,
    /// Sort order position within parent.
    pub position: i32,
}

impl Category {
    /// Create a new root category.
    pub fn new_root(name: impl Into<String>, slug: impl Into<String>, kind: ProductKind) -> Self {
        Self {
            id: CategoryId::generate(),
            parent_id: None,
            name: name.into(),
            slug: slug.into(),
            description: None,
            image_url: None,
            kind,
            position: 0,
        }
    }

    /// Create a new child category. The child inherits the parent's kind.
    pub fn new_child(parent: &Category, name: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            id: CategoryId::generate(),
            parent_id: Some(parent.id.clone()),
            name: name.into(),
            slug: slug.into(),
            description: None,
            image_url: None,
            kind: parent.kind,
            position: 0,
        }
    }

    /// Check if this is a root category.
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}
