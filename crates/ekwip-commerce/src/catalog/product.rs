//! Product types.

use crate::ids::{AttributeId, BrandId, CategoryId, ProductId};
use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Product visibility status in the catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ProductStatus {
    /// Product is in draft mode, not visible to customers.
    Draft,
    /// Product is active and visible.
    #[default]
    Active,
    /// Product is archived, not visible but data preserved.
    Archived,
}

impl ProductStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductStatus::Draft => "draft",
            ProductStatus::Active => "active",
            ProductStatus::Archived => "archived",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "draft" => Some(ProductStatus::Draft),
            "active" => Some(ProductStatus::Active),
            "archived" => Some(ProductStatus::Archived),
            _ => None,
        }
    }
}

/// Which side of the business a product belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ProductKind {
    /// Rented equipment, priced as a recurring monthly fee.
    Rental,
    /// Boutique product, priced as a one-time amount.
    #[default]
    Sale,
}

impl ProductKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductKind::Rental => "rental",
            ProductKind::Sale => "sale",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "rental" => Some(ProductKind::Rental),
            "sale" => Some(ProductKind::Sale),
            _ => None,
        }
    }
}

/// A product in the catalogue.
///
/// Ekwip products have no variant dimension: price, stock, and attribute
/// values live directly on the product. For rentals the price is the
/// monthly fee.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Internal reference (unique).
    pub sku: String,
    /// Product name.
    pub name: String,
    /// URL-friendly slug (unique).
    pub slug: String,
    /// Full description (may contain HTML/markdown).
    pub description: Option<String>,
    /// Brand, if the product carries one.
    pub brand_id: Option<BrandId>,
    /// Category the product is listed under.
    pub category_id: CategoryId,
    /// Rental catalogue or sales boutique.
    pub kind: ProductKind,
    /// Visibility status.
    pub status: ProductStatus,
    /// Price: monthly fee for rentals, one-time amount for sales.
    pub price: Money,
    /// Original price for showing discounts.
    pub compare_at_price: Option<Money>,
    /// Units in stock.
    pub stock_quantity: i64,
    /// Attribute values keyed by attribute ID (e.g., RAM -> "16 Go").
    pub attributes: BTreeMap<AttributeId, String>,
    /// Whether the product is highlighted on the home page.
    pub is_featured: bool,
    /// Main image URL.
    pub image_url: Option<String>,
    /// Unix timestamp of creation.
    pub created_at: i64,
    /// Unix timestamp of last update.
    pub updated_at: i64,
}

impl Product {
    /// Create a new active product.
    pub fn new(
        sku: impl Into<String>,
        name: impl Into<String>,
        slug: impl Into<String>,
        category_id: CategoryId,
        kind: ProductKind,
        price: Money,
    ) -> Self {
        let now = current_timestamp();
        Self {
            id: ProductId::generate(),
            sku: sku.into(),
            name: name.into(),
            slug: slug.into(),
            description: None,
            brand_id: None,
            category_id,
            kind,
            status: ProductStatus::Active,
            price,
            compare_at_price: None,
            stock_quantity: 0,
            attributes: BTreeMap::new(),
            is_featured: false,
            image_url: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if the product is visible to customers.
    pub fn is_published(&self) -> bool {
        self.status == ProductStatus::Active
    }

    /// Check if the product has units in stock.
    pub fn is_in_stock(&self) -> bool {
        self.stock_quantity > 0
    }

    /// Check if the product is on sale (has a higher compare-at price).
    pub fn is_on_sale(&self) -> bool {
        self.compare_at_price
            .map(|cap| cap.amount_cents > self.price.amount_cents)
            .unwrap_or(false)
    }

    /// Calculate the discount percentage if on sale.
    pub fn discount_percentage(&self) -> Option<f64> {
        self.compare_at_price.and_then(|cap| {
            if cap.amount_cents > self.price.amount_cents {
                let savings = cap.amount_cents - self.price.amount_cents;
                Some((savings as f64 / cap.amount_cents as f64) * 100.0)
            } else {
                None
            }
        })
    }

    /// Get the value of an attribute, if set.
    pub fn attribute(&self, id: &AttributeId) -> Option<&str> {
        self.attributes.get(id).map(String::as_str)
    }

    /// Set an attribute value.
    pub fn set_attribute(&mut self, id: AttributeId, value: impl Into<String>) {
        self.attributes.insert(id, value.into());
        self.updated_at = current_timestamp();
    }

    /// Set the brand.
    pub fn set_brand(&mut self, brand_id: BrandId) {
        self.brand_id = Some(brand_id);
        self.updated_at = current_timestamp();
    }
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    fn laptop() -> Product {
        Product::new(
            "EK-LAP-001",
            "ThinkPad T14",
            "thinkpad-t14",
            CategoryId::new("cat-laptops"),
            ProductKind::Rental,
            Money::new(4900, Currency::EUR),
        )
    }

    #[test]
    fn test_product_creation() {
        let product = laptop();
        assert_eq!(product.sku, "EK-LAP-001");
        assert_eq!(product.kind, ProductKind::Rental);
        assert!(product.is_published());
        assert!(!product.is_in_stock());
    }

    #[test]
    fn test_product_on_sale() {
        let mut product = laptop();
        product.compare_at_price = Some(Money::new(9800, Currency::EUR));

        assert!(product.is_on_sale());
        let discount = product.discount_percentage().unwrap();
        assert!((discount - 50.0).abs() < 0.01);
    }

    #[test]
    fn test_product_not_on_sale_when_compare_at_lower() {
        let mut product = laptop();
        product.compare_at_price = Some(Money::new(1000, Currency::EUR));
        assert!(!product.is_on_sale());
        assert!(product.discount_percentage().is_none());
    }

    #[test]
    fn test_product_attributes() {
        let mut product = laptop();
        let ram = AttributeId::new("attr-ram");
        product.set_attribute(ram.clone(), "16 Go");

        assert_eq!(product.attribute(&ram), Some("16 Go"));
        assert_eq!(product.attribute(&AttributeId::new("attr-cpu")), None);
    }

    #[test]
    fn test_status_parse() {
        assert_eq!(ProductStatus::parse("Active"), Some(ProductStatus::Active));
        assert_eq!(ProductStatus::parse("nope"), None);
        assert_eq!(ProductKind::parse("rental"), Some(ProductKind::Rental));
    }
}
