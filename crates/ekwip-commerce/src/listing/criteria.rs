//! Listing filter criteria.

use crate::catalog::Product;
use crate::ids::{AttributeId, BrandId};
use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// An inclusive price range.
///
/// A range with `min > max` is representable and matches nothing; the UI
/// can produce one transiently while the user drags the slider handles
/// past each other.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PriceRange {
    /// Lower bound (inclusive).
    pub min: Money,
    /// Upper bound (inclusive).
    pub max: Money,
}

impl PriceRange {
    /// Create a new price range.
    pub fn new(min: Money, max: Money) -> Self {
        Self { min, max }
    }

    /// Check if the range matches no price at all.
    pub fn is_empty(&self) -> bool {
        self.min.amount_cents > self.max.amount_cents
    }

    /// Check if a price falls within the range, inclusive on both ends.
    pub fn contains(&self, price: Money) -> bool {
        price.amount_cents >= self.min.amount_cents && price.amount_cents <= self.max.amount_cents
    }
}

/// Sort order for catalogue listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortKey {
    /// Sort by name A-Z.
    #[default]
    NameAsc,
    /// Sort by price, low to high.
    PriceAsc,
    /// Sort by price, high to low.
    PriceDesc,
}

impl SortKey {
    /// Query-string code, as used by the storefront sort selector.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::NameAsc => "name",
            SortKey::PriceAsc => "price-asc",
            SortKey::PriceDesc => "price-desc",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "name" => Some(SortKey::NameAsc),
            "price-asc" => Some(SortKey::PriceAsc),
            "price-desc" => Some(SortKey::PriceDesc),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortKey::NameAsc => "Name: A-Z",
            SortKey::PriceAsc => "Price: Low to High",
            SortKey::PriceDesc => "Price: High to Low",
        }
    }
}

/// User-selected filters for a catalogue listing.
///
/// Every field degrades gracefully: an empty brand set, an unset price
/// range, or an empty accepted-value set imposes no constraint.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct FilterCriteria {
    /// Keep only products whose brand is in this set (empty = no constraint).
    pub brands: BTreeSet<BrandId>,
    /// Keep only products priced within this range.
    pub price: Option<PriceRange>,
    /// Accepted value sets per attribute.
    pub attributes: BTreeMap<AttributeId, BTreeSet<String>>,
    /// Keep only products with stock.
    pub in_stock_only: bool,
}

impl FilterCriteria {
    /// Create criteria with no constraints.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a brand to the brand filter.
    pub fn with_brand(mut self, brand: impl Into<BrandId>) -> Self {
        self.brands.insert(brand.into());
        self
    }

    /// Set the price range.
    pub fn with_price_range(mut self, min: Money, max: Money) -> Self {
        self.price = Some(PriceRange::new(min, max));
        self
    }

    /// Add an accepted value for an attribute.
    pub fn with_attribute_value(
        mut self,
        attribute: impl Into<AttributeId>,
        value: impl Into<String>,
    ) -> Self {
        self.attributes
            .entry(attribute.into())
            .or_default()
            .insert(value.into());
        self
    }

    /// Keep only in-stock products.
    pub fn in_stock(mut self) -> Self {
        self.in_stock_only = true;
        self
    }

    /// Check if the criteria impose no constraint at all.
    pub fn is_unconstrained(&self) -> bool {
        self.brands.is_empty()
            && self.price.is_none()
            && !self.in_stock_only
            && self.attributes.values().all(|accepted| accepted.is_empty())
    }

    /// Check whether a product passes every active filter.
    pub fn matches(&self, product: &Product) -> bool {
        if !self.brands.is_empty() {
            match &product.brand_id {
                Some(brand) if self.brands.contains(brand) => {}
                _ => return false,
            }
        }

        if let Some(range) = &self.price {
            if !range.contains(product.price) {
                return false;
            }
        }

        if self.in_stock_only && product.stock_quantity <= 0 {
            return false;
        }

        for (attribute, accepted) in &self.attributes {
            if accepted.is_empty() {
                continue;
            }
            // A product missing the attribute is excluded while the
            // attribute is actively filtered.
            match product.attribute(attribute) {
                Some(value) if accepted.contains(value) => {}
                _ => return false,
            }
        }

        true
    }
}
