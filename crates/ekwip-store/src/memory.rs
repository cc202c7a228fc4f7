//! In-memory store.
//!
//! Backs every repository trait with `RwLock`-guarded vectors. Intended
//! for tests, seeding, and development; lookups are linear scans.

use crate::error::StoreError;
use crate::repository::{
    AttributeRepository, BannerRepository, BrandRepository, CartRepository, CategoryRepository,
    CustomerRepository, OrderRepository, ProductRepository,
};
use ekwip_commerce::banner::Banner;
use ekwip_commerce::cart::Cart;
use ekwip_commerce::catalog::{AttributeDefinition, Brand, Category, Product};
use ekwip_commerce::checkout::Order;
use ekwip_commerce::customer::Customer;
use ekwip_commerce::ids::{AttributeId, BannerId, BrandId, CategoryId, CustomerId, OrderId, ProductId};
use std::sync::RwLock;

/// In-memory implementation of every repository.
///
/// Entities are kept in insertion order; `list` methods apply the
/// ordering their trait documents.
#[derive(Debug, Default)]
pub struct MemoryStore {
    products: RwLock<Vec<Product>>,
    brands: RwLock<Vec<Brand>>,
    categories: RwLock<Vec<Category>>,
    attributes: RwLock<Vec<AttributeDefinition>>,
    banners: RwLock<Vec<Banner>>,
    customers: RwLock<Vec<Customer>>,
    orders: RwLock<Vec<Order>>,
    carts: RwLock<Vec<Cart>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn read<T>(lock: &RwLock<Vec<T>>) -> Result<std::sync::RwLockReadGuard<'_, Vec<T>>, StoreError> {
    lock.read().map_err(|_| StoreError::LockPoisoned)
}

fn write<T>(lock: &RwLock<Vec<T>>) -> Result<std::sync::RwLockWriteGuard<'_, Vec<T>>, StoreError> {
    lock.write().map_err(|_| StoreError::LockPoisoned)
}

impl ProductRepository for MemoryStore {
    fn save(&self, product: Product) -> Result<(), StoreError> {
        let mut products = write(&self.products)?;
        if let Some(existing) = products.iter_mut().find(|p| p.id == product.id) {
            *existing = product;
        } else {
            products.push(product);
        }
        Ok(())
    }

    fn get(&self, id: &ProductId) -> Result<Product, StoreError> {
        read(&self.products)?
            .iter()
            .find(|p| &p.id == id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(format!("product {id}")))
    }

    fn find_by_slug(&self, slug: &str) -> Result<Option<Product>, StoreError> {
        Ok(read(&self.products)?.iter().find(|p| p.slug == slug).cloned())
    }

    fn list(&self) -> Result<Vec<Product>, StoreError> {
        Ok(read(&self.products)?.clone())
    }
}

impl BrandRepository for MemoryStore {
    fn save(&self, brand: Brand) -> Result<(), StoreError> {
        let mut brands = write(&self.brands)?;
        if let Some(existing) = brands.iter_mut().find(|b| b.id == brand.id) {
            *existing = brand;
        } else {
            brands.push(brand);
        }
        Ok(())
    }

    fn get(&self, id: &BrandId) -> Result<Brand, StoreError> {
        read(&self.brands)?
            .iter()
            .find(|b| &b.id == id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(format!("brand {id}")))
    }

    fn list(&self) -> Result<Vec<Brand>, StoreError> {
        let mut brands = read(&self.brands)?.clone();
        brands.sort_by(|a, b| a.position.cmp(&b.position).then_with(|| a.name.cmp(&b.name)));
        Ok(brands)
    }
}

impl CategoryRepository for MemoryStore {
    fn save(&self, category: Category) -> Result<(), StoreError> {
        let mut categories = write(&self.categories)?;
        if let Some(existing) = categories.iter_mut().find(|c| c.id == category.id) {
            *existing = category;
        } else {
            categories.push(category);
        }
        Ok(())
    }

    fn get(&self, id: &CategoryId) -> Result<Category, StoreError> {
        read(&self.categories)?
            .iter()
            .find(|c| &c.id == id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(format!("category {id}")))
    }

    fn find_by_slug(&self, slug: &str) -> Result<Option<Category>, StoreError> {
        Ok(read(&self.categories)?.iter().find(|c| c.slug == slug).cloned())
    }

    fn list(&self) -> Result<Vec<Category>, StoreError> {
        let mut categories = read(&self.categories)?.clone();
        categories.sort_by(|a, b| a.position.cmp(&b.position).then_with(|| a.name.cmp(&b.name)));
        Ok(categories)
    }

    fn children(&self, parent: &CategoryId) -> Result<Vec<Category>, StoreError> {
        let mut children: Vec<Category> = read(&self.categories)?
            .iter()
            .filter(|c| c.parent_id.as_ref() == Some(parent))
            .cloned()
            .collect();
        children.sort_by_key(|c| c.position);
        Ok(children)
    }
}

impl AttributeRepository for MemoryStore {
    fn save(&self, attribute: AttributeDefinition) -> Result<(), StoreError> {
        let mut attributes = write(&self.attributes)?;
        if let Some(existing) = attributes.iter_mut().find(|a| a.id == attribute.id) {
            *existing = attribute;
        } else {
            attributes.push(attribute);
        }
        Ok(())
    }

    fn get(&self, id: &AttributeId) -> Result<AttributeDefinition, StoreError> {
        read(&self.attributes)?
            .iter()
            .find(|a| &a.id == id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(format!("attribute {id}")))
    }

    fn list_for_category(
        &self,
        category: &CategoryId,
    ) -> Result<Vec<AttributeDefinition>, StoreError> {
        let mut attributes: Vec<AttributeDefinition> = read(&self.attributes)?
            .iter()
            .filter(|a| &a.category_id == category)
            .cloned()
            .collect();
        attributes.sort_by_key(|a| a.position);
        Ok(attributes)
    }
}

impl BannerRepository for MemoryStore {
    fn save(&self, banner: Banner) -> Result<(), StoreError> {
        let mut banners = write(&self.banners)?;
        if let Some(existing) = banners.iter_mut().find(|b| b.id == banner.id) {
            *existing = banner;
        } else {
            banners.push(banner);
        }
        Ok(())
    }

    fn get(&self, id: &BannerId) -> Result<Banner, StoreError> {
        read(&self.banners)?
            .iter()
            .find(|b| &b.id == id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(format!("banner {id}")))
    }

    fn delete(&self, id: &BannerId) -> Result<bool, StoreError> {
        let mut banners = write(&self.banners)?;
        let len_before = banners.len();
        banners.retain(|b| &b.id != id);
        Ok(banners.len() < len_before)
    }

    fn list(&self) -> Result<Vec<Banner>, StoreError> {
        let mut banners = read(&self.banners)?.clone();
        banners.sort_by_key(|b| b.position);
        Ok(banners)
    }
}

impl CustomerRepository for MemoryStore {
    fn save(&self, customer: Customer) -> Result<(), StoreError> {
        let mut customers = write(&self.customers)?;
        if let Some(existing) = customers.iter_mut().find(|c| c.id == customer.id) {
            *existing = customer;
        } else {
            customers.push(customer);
        }
        Ok(())
    }

    fn get(&self, id: &CustomerId) -> Result<Customer, StoreError> {
        read(&self.customers)?
            .iter()
            .find(|c| &c.id == id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(format!("customer {id}")))
    }

    fn find_by_email(&self, email: &str) -> Result<Option<Customer>, StoreError> {
        let email = email.to_lowercase();
        Ok(read(&self.customers)?
            .iter()
            .find(|c| c.email.to_lowercase() == email)
            .cloned())
    }

    fn list(&self) -> Result<Vec<Customer>, StoreError> {
        Ok(read(&self.customers)?.clone())
    }
}

impl OrderRepository for MemoryStore {
    fn save(&self, order: Order) -> Result<(), StoreError> {
        let mut orders = write(&self.orders)?;
        if let Some(existing) = orders.iter_mut().find(|o| o.id == order.id) {
            *existing = order;
        } else {
            orders.push(order);
        }
        Ok(())
    }

    fn get(&self, id: &OrderId) -> Result<Order, StoreError> {
        read(&self.orders)?
            .iter()
            .find(|o| &o.id == id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(format!("order {id}")))
    }

    fn find_by_number(&self, order_number: &str) -> Result<Option<Order>, StoreError> {
        Ok(read(&self.orders)?
            .iter()
            .find(|o| o.order_number == order_number)
            .cloned())
    }

    fn list(&self) -> Result<Vec<Order>, StoreError> {
        let mut orders = read(&self.orders)?.clone();
        orders.sort_by(|a, b| b.placed_at.cmp(&a.placed_at));
        Ok(orders)
    }

    fn count(&self) -> Result<usize, StoreError> {
        Ok(read(&self.orders)?.len())
    }
}

impl CartRepository for MemoryStore {
    fn save(&self, cart: Cart) -> Result<(), StoreError> {
        let mut carts = write(&self.carts)?;
        if let Some(existing) = carts.iter_mut().find(|c| c.session_id == cart.session_id) {
            *existing = cart;
        } else {
            carts.push(cart);
        }
        Ok(())
    }

    fn find_by_session(&self, session_id: &str) -> Result<Option<Cart>, StoreError> {
        Ok(read(&self.carts)?
            .iter()
            .find(|c| c.session_id == session_id)
            .cloned())
    }

    fn delete_by_session(&self, session_id: &str) -> Result<bool, StoreError> {
        let mut carts = write(&self.carts)?;
        let len_before = carts.len();
        carts.retain(|c| c.session_id != session_id);
        Ok(carts.len() < len_before)
    }
}
