//! Checkout service.

use crate::error::StoreError;
use crate::repository::{CartRepository, OrderRepository, ProductRepository};
use ekwip_commerce::checkout::{Address, Order, OrderContact};
use ekwip_commerce::error::CommerceError;
use std::sync::Arc;
use tracing::info;

/// Turns carts into orders.
pub struct CheckoutService {
    products: Arc<dyn ProductRepository>,
    orders: Arc<dyn OrderRepository>,
    carts: Arc<dyn CartRepository>,
}

impl CheckoutService {
    /// Create a checkout service over the given repositories.
    pub fn new(
        products: Arc<dyn ProductRepository>,
        orders: Arc<dyn OrderRepository>,
        carts: Arc<dyn CartRepository>,
    ) -> Self {
        Self {
            products,
            orders,
            carts,
        }
    }

    /// Place an order from a session's cart.
    ///
    /// Validates current stock for every line, freezes pricing into an
    /// order, decrements stock, and clears the cart. Stock is checked
    /// against the catalogue at placement time, not at add-to-cart time,
    /// so a stale cart fails here rather than overselling.
    pub fn place_order(
        &self,
        session_id: &str,
        contact: OrderContact,
        shipping_address: Address,
    ) -> Result<Order, StoreError> {
        let cart = self
            .carts
            .find_by_session(session_id)?
            .ok_or_else(|| StoreError::NotFound(format!("cart for session {session_id}")))?;

        for item in &cart.items {
            let product = self.products.get(&item.product_id)?;
            if product.stock_quantity < item.quantity {
                return Err(CommerceError::InsufficientStock {
                    product_id: product.id.as_str().to_string(),
                    requested: item.quantity,
                    available: product.stock_quantity,
                }
                .into());
            }
        }

        let order_number = format!("EK-{:05}", self.orders.count()? + 1);
        let order = Order::from_cart(&cart, order_number, contact, shipping_address)?;

        for item in &cart.items {
            let mut product = self.products.get(&item.product_id)?;
            product.stock_quantity -= item.quantity;
            self.products.save(product)?;
        }

        self.orders.save(order.clone())?;
        self.carts.delete_by_session(session_id)?;

        info!(
            order_number = %order.order_number,
            items = order.line_items.len(),
            total = %order.grand_total,
            "order placed"
        );
        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;
    use ekwip_commerce::cart::Cart;
    use ekwip_commerce::catalog::{Product, ProductKind};
    use ekwip_commerce::ids::CategoryId;
    use ekwip_commerce::money::{Currency, Money};

    fn service(store: Arc<MemoryStore>) -> CheckoutService {
        CheckoutService::new(store.clone(), store.clone(), store)
    }

    fn seeded_product(store: &MemoryStore, stock: i64) -> Product {
        let mut product = Product::new(
            "EK-DOCK-01",
            "USB-C Dock",
            "usb-c-dock",
            CategoryId::new("cat-accessories"),
            ProductKind::Sale,
            Money::new(10000, Currency::EUR),
        );
        product.stock_quantity = stock;
        ProductRepository::save(store, product.clone()).unwrap();
        product
    }

    fn contact() -> OrderContact {
        OrderContact::new("marie@acme.fr")
    }

    fn shipping() -> Address {
        Address::new("Marie", "Dupont", "12 rue de la Paix", "Paris", "75002")
    }

    #[test]
    fn test_place_order_decrements_stock_and_clears_cart() {
        let store = Arc::new(MemoryStore::new());
        let product = seeded_product(store.as_ref(), 5);

        let mut cart = Cart::new("session-1");
        cart.add_item(&product, 2).unwrap();
        CartRepository::save(store.as_ref(), cart).unwrap();

        let order = service(store.clone())
            .place_order("session-1", contact(), shipping())
            .unwrap();

        assert_eq!(order.order_number, "EK-00001");
        assert_eq!(order.grand_total.amount_cents, 24000);
        assert_eq!(
            ProductRepository::get(store.as_ref(), &product.id)
                .unwrap()
                .stock_quantity,
            3
        );
        assert!(store.find_by_session("session-1").unwrap().is_none());
    }

    #[test]
    fn test_place_order_rejects_oversell() {
        let store = Arc::new(MemoryStore::new());
        let product = seeded_product(store.as_ref(), 1);

        let mut cart = Cart::new("session-1");
        cart.add_item(&product, 2).unwrap();
        CartRepository::save(store.as_ref(), cart).unwrap();

        let err = service(store.clone())
            .place_order("session-1", contact(), shipping())
            .unwrap_err();
        assert!(matches!(
            err,
            StoreError::Commerce(CommerceError::InsufficientStock { .. })
        ));

        // Nothing was decremented and the cart survives.
        assert_eq!(
            ProductRepository::get(store.as_ref(), &product.id)
                .unwrap()
                .stock_quantity,
            1
        );
        assert!(store.find_by_session("session-1").unwrap().is_some());
    }

    #[test]
    fn test_place_order_without_cart() {
        let store = Arc::new(MemoryStore::new());
        let err = service(store)
            .place_order("ghost", contact(), shipping())
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }

    #[test]
    fn test_order_numbers_are_sequential() {
        let store = Arc::new(MemoryStore::new());
        let product = seeded_product(store.as_ref(), 10);

        for (session, expected) in [("s1", "EK-00001"), ("s2", "EK-00002")] {
            let mut cart = Cart::new(session);
            cart.add_item(&product, 1).unwrap();
            CartRepository::save(store.as_ref(), cart).unwrap();
            let order = service(store.clone())
                .place_order(session, contact(), shipping())
                .unwrap();
            assert_eq!(order.order_number, expected);
        }
    }
}
