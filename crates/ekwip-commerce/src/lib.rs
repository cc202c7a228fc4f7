//! Commerce domain types and logic for the Ekwip storefront.
//!
//! Ekwip rents and sells IT equipment. This crate provides the in-memory
//! domain model shared by the rental catalogue, the sales boutique, and
//! the admin back-office:
//!
//! - **Catalog**: Products, brands, categories, attribute definitions
//! - **Listing**: The catalogue filter/sort engine, facets, pagination
//! - **Cart**: Boutique shopping cart with line items and VAT pricing
//! - **Checkout**: Orders and addresses
//! - **Banners / Customers**: Back-office managed content and clients
//!
//! # Example
//!
//! ```rust
//! use ekwip_commerce::prelude::*;
//!
//! let category = Category::new_root("Laptops", "laptops", ProductKind::Rental);
//! let mut product = Product::new(
//!     "EK-LAP-001",
//!     "ThinkPad T14",
//!     "thinkpad-t14",
//!     category.id.clone(),
//!     ProductKind::Rental,
//!     Money::new(4900, Currency::EUR),
//! );
//! product.stock_quantity = 12;
//!
//! let criteria = FilterCriteria::new().in_stock();
//! let listed = apply_filters_and_sort(&[product], &criteria, SortKey::PriceAsc);
//! assert_eq!(listed.len(), 1);
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod banner;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod customer;
pub mod listing;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{
        AttributeDefinition, Brand, Category, Product, ProductKind, ProductStatus,
    };

    // Listing
    pub use crate::listing::{
        apply_filters_and_sort, attribute_facets, brand_facet, paginate, Facet, FacetValue,
        FilterCriteria, ListingPage, Pagination, PriceRange, SortKey,
    };

    // Cart
    pub use crate::cart::{Cart, CartPricing, LineItem, LineItemPricing};

    // Checkout
    pub use crate::checkout::{Address, Order, OrderContact, OrderLineItem, OrderStatus};

    // Back-office
    pub use crate::banner::Banner;
    pub use crate::customer::Customer;
}
