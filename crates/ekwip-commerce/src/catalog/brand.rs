//! Brand types.

use crate::ids::BrandId;
use serde::{Deserialize, Serialize};

/// An equipment brand (e.g., Lenovo, HP), usable as a filter facet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Brand {
    /// Unique brand identifier.
    pub id: BrandId,
    /// Brand name.
    pub name: String,
    /// URL-friendly slug.
    pub slug: String,
    /// Logo image URL.
    pub logo_url: Option<String>,
    /// Sort order position in filter lists.
    pub position: i32,
}

impl Brand {
    /// Create a new brand.
    pub fn new(name: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            id: BrandId::generate(),
            name: name.into(),
            slug: slug.into(),
            logo_url: None,
            position: 0,
        }
    }
}
