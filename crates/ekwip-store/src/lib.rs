//! Repositories and application services for the Ekwip storefront.
//!
//! The domain crate (`ekwip-commerce`) is pure and I/O-free; this crate
//! supplies the collaborators around it:
//!
//! - **Repositories**: per-entity storage traits, so persistence stays an
//!   external, swappable collaborator
//! - **MemoryStore**: an in-memory implementation of every repository,
//!   used by tests and development seeding
//! - **Services**: `CatalogService` (listings, facets, product pages),
//!   `CheckoutService` (cart to order), `AdminService` (back-office)
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use ekwip_commerce::prelude::*;
//! use ekwip_store::memory::MemoryStore;
//! use ekwip_store::catalog::{CatalogService, ListingRequest};
//! use ekwip_store::repository::ProductRepository;
//!
//! let store = Arc::new(MemoryStore::new());
//! let category = Category::new_root("Laptops", "laptops", ProductKind::Rental);
//! let product = Product::new(
//!     "EK-LAP-001",
//!     "ThinkPad T14",
//!     "thinkpad-t14",
//!     category.id.clone(),
//!     ProductKind::Rental,
//!     Money::new(4900, Currency::EUR),
//! );
//! store.save(product).unwrap();
//!
//! let catalog = CatalogService::new(store.clone(), store.clone(), store.clone(), store);
//! let page = catalog.listing(&ListingRequest::new(ProductKind::Rental)).unwrap();
//! assert_eq!(page.len(), 1);
//! ```

pub mod admin;
pub mod catalog;
pub mod checkout;
pub mod error;
pub mod memory;
pub mod repository;

pub use error::StoreError;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::admin::AdminService;
    pub use crate::catalog::{CatalogService, ListingRequest};
    pub use crate::checkout::CheckoutService;
    pub use crate::error::StoreError;
    pub use crate::memory::MemoryStore;
    pub use crate::repository::{
        AttributeRepository, BannerRepository, BrandRepository, CartRepository,
        CategoryRepository, CustomerRepository, OrderRepository, ProductRepository,
    };
}
