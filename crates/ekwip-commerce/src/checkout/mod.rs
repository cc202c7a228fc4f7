//! Checkout module.
//!
//! Orders and addresses. The interactive checkout steps live in the UI
//! layer; this module owns the resulting order snapshot and its status
//! lifecycle.

mod address;
mod order;

pub use address::Address;
pub use order::{Order, OrderContact, OrderLineItem, OrderStatus};
