//! Address types.

use serde::{Deserialize, Serialize};

/// A postal address.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Address {
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Company name (most Ekwip customers are businesses).
    pub company: Option<String>,
    /// Address line 1.
    pub address1: String,
    /// Address line 2 (building, floor, etc.).
    pub address2: Option<String>,
    /// City.
    pub city: String,
    /// Postal code.
    pub zip: String,
    /// Country name.
    pub country: String,
    /// Phone number.
    pub phone: Option<String>,
}

impl Address {
    /// Create a new address.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        address1: impl Into<String>,
        city: impl Into<String>,
        zip: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            company: None,
            address1: address1.into(),
            address2: None,
            city: city.into(),
            zip: zip.into(),
            country: "France".to_string(),
            phone: None,
        }
    }

    /// Full recipient name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// One-line summary for order lists.
    pub fn summary(&self) -> String {
        format!("{}, {} {}, {}", self.address1, self.zip, self.city, self.country)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address() {
        let addr = Address::new("Marie", "Dupont", "12 rue de la Paix", "Paris", "75002");
        assert_eq!(addr.full_name(), "Marie Dupont");
        assert_eq!(addr.country, "France");
        assert!(addr.summary().contains("75002 Paris"));
    }
}
