//! Back-office service.
//!
//! The admin surface manages products, banners, customers, and orders.
//! Forms live elsewhere; this service owns validation and persistence.

use crate::error::StoreError;
use crate::repository::{
    BannerRepository, CustomerRepository, OrderRepository, ProductRepository,
};
use ekwip_commerce::banner::Banner;
use ekwip_commerce::catalog::{Product, ProductStatus};
use ekwip_commerce::checkout::{Order, OrderStatus};
use ekwip_commerce::customer::Customer;
use ekwip_commerce::ids::{BannerId, CustomerId, OrderId, ProductId};
use std::sync::Arc;
use tracing::info;

/// Write-side service for the admin back-office.
pub struct AdminService {
    products: Arc<dyn ProductRepository>,
    banners: Arc<dyn BannerRepository>,
    customers: Arc<dyn CustomerRepository>,
    orders: Arc<dyn OrderRepository>,
}

impl AdminService {
    /// Create an admin service over the given repositories.
    pub fn new(
        products: Arc<dyn ProductRepository>,
        banners: Arc<dyn BannerRepository>,
        customers: Arc<dyn CustomerRepository>,
        orders: Arc<dyn OrderRepository>,
    ) -> Self {
        Self {
            products,
            banners,
            customers,
            orders,
        }
    }

    /// Create or update a product.
    ///
    /// Validates the fields the storefront depends on and enforces slug
    /// uniqueness across the whole catalogue.
    pub fn save_product(&self, product: Product) -> Result<(), StoreError> {
        if product.name.trim().is_empty() {
            return Err(StoreError::Invalid("product name is required".to_string()));
        }
        if product.slug.trim().is_empty() || product.slug.contains(' ') {
            return Err(StoreError::Invalid(format!(
                "invalid product slug: {:?}",
                product.slug
            )));
        }
        if product.price.is_negative() {
            return Err(StoreError::Invalid("price cannot be negative".to_string()));
        }
        if product.stock_quantity < 0 {
            return Err(StoreError::Invalid("stock cannot be negative".to_string()));
        }
        if let Some(existing) = self.products.find_by_slug(&product.slug)? {
            if existing.id != product.id {
                return Err(StoreError::DuplicateSlug(product.slug));
            }
        }

        info!(product = %product.id, slug = %product.slug, "product saved");
        self.products.save(product)
    }

    /// Archive a product, removing it from all listings.
    pub fn archive_product(&self, id: &ProductId) -> Result<(), StoreError> {
        let mut product = self.products.get(id)?;
        product.status = ProductStatus::Archived;
        info!(product = %id, "product archived");
        self.products.save(product)
    }

    /// Toggle a product's home-page highlight.
    pub fn set_featured(&self, id: &ProductId, featured: bool) -> Result<(), StoreError> {
        let mut product = self.products.get(id)?;
        product.is_featured = featured;
        self.products.save(product)
    }

    /// Create or update a banner.
    pub fn save_banner(&self, banner: Banner) -> Result<(), StoreError> {
        if banner.title.trim().is_empty() {
            return Err(StoreError::Invalid("banner title is required".to_string()));
        }
        if banner.image_url.trim().is_empty() {
            return Err(StoreError::Invalid("banner image is required".to_string()));
        }
        info!(banner = %banner.id, "banner saved");
        self.banners.save(banner)
    }

    /// Delete a banner.
    pub fn delete_banner(&self, id: &BannerId) -> Result<bool, StoreError> {
        self.banners.delete(id)
    }

    /// Banners to display on the home page right now, in carousel order.
    pub fn live_banners(&self, now: i64) -> Result<Vec<Banner>, StoreError> {
        Ok(self
            .banners
            .list()?
            .into_iter()
            .filter(|b| b.is_live(now))
            .collect())
    }

    /// Create or update a customer record, enforcing email uniqueness.
    pub fn save_customer(&self, customer: Customer) -> Result<(), StoreError> {
        if !customer.email.contains('@') {
            return Err(StoreError::Invalid(format!(
                "invalid email: {:?}",
                customer.email
            )));
        }
        if let Some(existing) = self.customers.find_by_email(&customer.email)? {
            if existing.id != customer.id {
                return Err(StoreError::DuplicateEmail(customer.email));
            }
        }
        self.customers.save(customer)
    }

    /// Get a customer record.
    pub fn customer(&self, id: &CustomerId) -> Result<Customer, StoreError> {
        self.customers.get(id)
    }

    /// List all customer records.
    pub fn customers(&self) -> Result<Vec<Customer>, StoreError> {
        self.customers.list()
    }

    /// List orders, most recent first.
    pub fn orders(&self) -> Result<Vec<Order>, StoreError> {
        self.orders.list()
    }

    /// Move an order through its lifecycle.
    pub fn update_order_status(
        &self,
        id: &OrderId,
        status: OrderStatus,
    ) -> Result<Order, StoreError> {
        let mut order = self.orders.get(id)?;
        order.transition_to(status)?;
        self.orders.save(order.clone())?;
        info!(order = %order.order_number, status = status.as_str(), "order status updated");
        Ok(order)
    }
}
