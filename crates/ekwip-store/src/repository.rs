//! Repository traits.
//!
//! Persistence is an external collaborator: the services in this crate
//! only ever talk to these interfaces, so the backing store (in-memory,
//! SQL, remote API) can be swapped without touching domain logic.

use crate::error::StoreError;
use ekwip_commerce::banner::Banner;
use ekwip_commerce::cart::Cart;
use ekwip_commerce::catalog::{AttributeDefinition, Brand, Category, Product};
use ekwip_commerce::checkout::Order;
use ekwip_commerce::customer::Customer;
use ekwip_commerce::ids::{AttributeId, BannerId, BrandId, CategoryId, CustomerId, OrderId, ProductId};

/// Product storage.
pub trait ProductRepository: Send + Sync {
    /// Insert or replace a product.
    fn save(&self, product: Product) -> Result<(), StoreError>;

    /// Get a product by ID.
    fn get(&self, id: &ProductId) -> Result<Product, StoreError>;

    /// Find a product by slug.
    fn find_by_slug(&self, slug: &str) -> Result<Option<Product>, StoreError>;

    /// List all products, in insertion order.
    fn list(&self) -> Result<Vec<Product>, StoreError>;
}

/// Brand storage.
pub trait BrandRepository: Send + Sync {
    fn save(&self, brand: Brand) -> Result<(), StoreError>;
    fn get(&self, id: &BrandId) -> Result<Brand, StoreError>;

    /// List brands ordered by position, then name.
    fn list(&self) -> Result<Vec<Brand>, StoreError>;
}

/// Category storage.
pub trait CategoryRepository: Send + Sync {
    fn save(&self, category: Category) -> Result<(), StoreError>;
    fn get(&self, id: &CategoryId) -> Result<Category, StoreError>;
    fn find_by_slug(&self, slug: &str) -> Result<Option<Category>, StoreError>;

    /// List categories ordered by position, then name.
    fn list(&self) -> Result<Vec<Category>, StoreError>;

    /// List direct children of a category, ordered by position.
    fn children(&self, parent: &CategoryId) -> Result<Vec<Category>, StoreError>;
}

/// Attribute definition storage.
pub trait AttributeRepository: Send + Sync {
    fn save(&self, attribute: AttributeDefinition) -> Result<(), StoreError>;
    fn get(&self, id: &AttributeId) -> Result<AttributeDefinition, StoreError>;

    /// List a category's attribute definitions, ordered by position.
    fn list_for_category(&self, category: &CategoryId)
        -> Result<Vec<AttributeDefinition>, StoreError>;
}

/// Banner storage.
pub trait BannerRepository: Send + Sync {
    fn save(&self, banner: Banner) -> Result<(), StoreError>;
    fn get(&self, id: &BannerId) -> Result<Banner, StoreError>;
    fn delete(&self, id: &BannerId) -> Result<bool, StoreError>;

    /// List banners ordered by position.
    fn list(&self) -> Result<Vec<Banner>, StoreError>;
}

/// Customer storage.
pub trait CustomerRepository: Send + Sync {
    fn save(&self, customer: Customer) -> Result<(), StoreError>;
    fn get(&self, id: &CustomerId) -> Result<Customer, StoreError>;
    fn find_by_email(&self, email: &str) -> Result<Option<Customer>, StoreError>;
    fn list(&self) -> Result<Vec<Customer>, StoreError>;
}

/// Order storage.
pub trait OrderRepository: Send + Sync {
    fn save(&self, order: Order) -> Result<(), StoreError>;
    fn get(&self, id: &OrderId) -> Result<Order, StoreError>;
    fn find_by_number(&self, order_number: &str) -> Result<Option<Order>, StoreError>;

    /// List orders, most recently placed first.
    fn list(&self) -> Result<Vec<Order>, StoreError>;

    /// Count all orders (used for order number generation).
    fn count(&self) -> Result<usize, StoreError>;
}

/// Cart storage, keyed by session.
pub trait CartRepository: Send + Sync {
    fn save(&self, cart: Cart) -> Result<(), StoreError>;
    fn find_by_session(&self, session_id: &str) -> Result<Option<Cart>, StoreError>;
    fn delete_by_session(&self, session_id: &str) -> Result<bool, StoreError>;
}
