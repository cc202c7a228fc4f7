//! Back-office customer records.

use crate::checkout::Address;
use crate::ids::CustomerId;
use serde::{Deserialize, Serialize};

/// A client managed from the admin back-office.
///
/// Ekwip sells and rents to businesses, so the record is company-first
/// with a named contact.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Customer {
    /// Unique customer identifier.
    pub id: CustomerId,
    /// Company name.
    pub company: String,
    /// Contact first name.
    pub first_name: String,
    /// Contact last name.
    pub last_name: String,
    /// Contact email (unique).
    pub email: String,
    /// Phone number.
    pub phone: Option<String>,
    /// Billing/delivery address.
    pub address: Option<Address>,
    /// Free-form back-office note.
    pub note: Option<String>,
    /// Unix timestamp of creation.
    pub created_at: i64,
    /// Unix timestamp of last update.
    pub updated_at: i64,
}

impl Customer {
    /// Create a new customer record.
    pub fn new(
        company: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        let now = current_timestamp();
        Self {
            id: CustomerId::generate(),
            company: company.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            phone: None,
            address: None,
            note: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Display name for admin lists (e.g., "Acme SARL (Marie Dupont)").
    pub fn display_name(&self) -> String {
        format!("{} ({} {})", self.company, self.first_name, self.last_name)
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
