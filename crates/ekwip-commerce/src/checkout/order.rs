//! Order types.

use crate::cart::Cart;
use crate::checkout::Address;
use crate::error::CommerceError;
use crate::ids::{CustomerId, OrderId, OrderLineItemId, ProductId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Order status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OrderStatus {
    /// Order placed, awaiting confirmation.
    #[default]
    Pending,
    /// Order confirmed and being prepared.
    Confirmed,
    /// Order shipped.
    Shipped,
    /// Order delivered.
    Delivered,
    /// Order cancelled.
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Confirmed => "Confirmed",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    /// Check if the order is in a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }

    /// Check if the order can still be cancelled.
    pub fn can_cancel(&self) -> bool {
        matches!(self, OrderStatus::Pending | OrderStatus::Confirmed)
    }

    /// Check whether a transition to `next` is allowed.
    pub fn can_transition_to(&self, next: OrderStatus) -> bool {
        use OrderStatus::*;
        matches!(
            (self, next),
            (Pending, Confirmed)
                | (Pending, Cancelled)
                | (Confirmed, Shipped)
                | (Confirmed, Cancelled)
                | (Shipped, Delivered)
        )
    }
}

/// Customer contact details captured at checkout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderContact {
    /// Customer email.
    pub email: String,
    /// Phone number.
    pub phone: Option<String>,
    /// Back-office customer record, when the order was matched to one.
    pub customer_id: Option<CustomerId>,
}

impl OrderContact {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            phone: None,
            customer_id: None,
        }
    }
}

/// A placed order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    /// Unique order identifier.
    pub id: OrderId,
    /// Human-readable order number (e.g., "EK-20260806-0001").
    pub order_number: String,
    /// Customer contact details.
    pub contact: OrderContact,
    /// Order status.
    pub status: OrderStatus,
    /// Items in the order.
    pub line_items: Vec<OrderLineItem>,
    /// Shipping address.
    pub shipping_address: Address,
    /// Subtotal, VAT-exclusive.
    pub subtotal: Money,
    /// VAT amount.
    pub vat_total: Money,
    /// Shipping cost.
    pub shipping_total: Money,
    /// Final total.
    pub grand_total: Money,
    /// Customer note.
    pub note: Option<String>,
    /// Unix timestamp when the order was placed.
    pub placed_at: i64,
    /// Unix timestamp of last update.
    pub updated_at: i64,
}

impl Order {
    /// Build an order from a cart, freezing the cart's pricing.
    ///
    /// Returns an error if the cart is empty or pricing overflows.
    pub fn from_cart(
        cart: &Cart,
        order_number: impl Into<String>,
        contact: OrderContact,
        shipping_address: Address,
    ) -> Result<Self, CommerceError> {
        if cart.is_empty() {
            return Err(CommerceError::ValidationError(
                "cannot place an order from an empty cart".to_string(),
            ));
        }

        let pricing = cart.calculate_pricing()?;
        let line_items = cart
            .items
            .iter()
            .map(|item| OrderLineItem {
                id: OrderLineItemId::generate(),
                product_id: item.product_id.clone(),
                product_name: item.product_name.clone(),
                quantity: item.quantity,
                unit_price: item.unit_price,
                total_price: item.total_price,
            })
            .collect();

        let now = current_timestamp();
        Ok(Self {
            id: OrderId::generate(),
            order_number: order_number.into(),
            contact,
            status: OrderStatus::Pending,
            line_items,
            shipping_address,
            subtotal: pricing.subtotal,
            vat_total: pricing.vat_total,
            shipping_total: pricing.shipping_total,
            grand_total: pricing.grand_total,
            note: cart.note.clone(),
            placed_at: now,
            updated_at: now,
        })
    }

    /// Move the order to a new status.
    ///
    /// Returns an error for transitions the lifecycle does not allow
    /// (e.g., shipping a cancelled order).
    pub fn transition_to(&mut self, next: OrderStatus) -> Result<(), CommerceError> {
        if !self.status.can_transition_to(next) {
            return Err(CommerceError::InvalidOrderTransition {
                from: self.status.as_str().to_string(),
                to: next.as_str().to_string(),
            });
        }
        self.status = next;
        self.updated_at = current_timestamp();
        Ok(())
    }

    /// Get total item count.
    pub fn item_count(&self) -> i64 {
        self.line_items.iter().map(|i| i.quantity).sum()
    }
}

/// A line item on an order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderLineItem {
    /// Unique identifier.
    pub id: OrderLineItemId,
    /// Product ordered.
    pub product_id: ProductId,
    /// Product name at the time of ordering.
    pub product_name: String,
    /// Quantity.
    pub quantity: i64,
    /// Unit price at the time of ordering.
    pub unit_price: Money,
    /// Line total.
    pub total_price: Money,
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
    use crate::catalog::{Product, ProductKind};
    use crate::ids::CategoryId;
    use crate::money::Currency;

    fn cart_with_items() -> Cart {
        let product = Product::new(
            "EK-DOCK-01",
            "USB-C Dock",
            "usb-c-dock",
            CategoryId::new("cat-accessories"),
            ProductKind::Sale,
            Money::new(10000, Currency::EUR),
        );
        let mut cart = Cart::new("session-1");
        cart.add_item(&product, 2).unwrap();
        cart
    }

    fn shipping() -> Address {
        Address::new("Marie", "Dupont", "12 rue de la Paix", "Paris", "75002")
    }

    #[test]
    fn test_order_from_cart_freezes_pricing() {
        let cart = cart_with_items();
        let order = Order::from_cart(
            &cart,
            "EK-0001",
            OrderContact::new("marie@exemple.fr"),
            shipping(),
        )
        .unwrap();

        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.subtotal.amount_cents, 20000);
        assert_eq!(order.vat_total.amount_cents, 4000);
        assert_eq!(order.grand_total.amount_cents, 24000);
        assert_eq!(order.item_count(), 2);
    }

    #[test]
    fn test_order_from_empty_cart_fails() {
        let cart = Cart::new("session-1");
        let result = Order::from_cart(
            &cart,
            "EK-0002",
            OrderContact::new("marie@exemple.fr"),
            shipping(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_order_lifecycle() {
        let cart = cart_with_items();
        let mut order = Order::from_cart(
            &cart,
            "EK-0003",
            OrderContact::new("marie@exemple.fr"),
            shipping(),
        )
        .unwrap();

        order.transition_to(OrderStatus::Confirmed).unwrap();
        order.transition_to(OrderStatus::Shipped).unwrap();
        order.transition_to(OrderStatus::Delivered).unwrap();
        assert!(order.status.is_terminal());
    }

    #[test]
    fn test_invalid_transition_rejected() {
        let cart = cart_with_items();
        let mut order = Order::from_cart(
            &cart,
            "EK-0004",
            OrderContact::new("marie@exemple.fr"),
            shipping(),
        )
        .unwrap();

        // Cannot ship an order that was never confirmed.
        let err = order.transition_to(OrderStatus::Shipped).unwrap_err();
        assert!(matches!(err, CommerceError::InvalidOrderTransition { .. }));

        order.transition_to(OrderStatus::Cancelled).unwrap();
        assert!(order.transition_to(OrderStatus::Confirmed).is_err());
    }

    #[test]
    fn test_cancellation_window() {
        assert!(OrderStatus::Pending.can_cancel());
        assert!(OrderStatus::Confirmed.can_cancel());
        assert!(!OrderStatus::Shipped.can_cancel());
        assert!(!OrderStatus::Delivered.can_cancel());
    }
}
