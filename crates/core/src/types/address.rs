//! Postal addresses and reference data.

use serde::{Deserialize, Serialize};

use super::id::{AddressId, CustomerAddressId};

/// A postal address attached to a fulfillment group, payment, or customer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Address {
    /// Upstream address ID, if the address has been saved.
    pub id: Option<AddressId>,
    /// First name.
    pub first_name: Option<String>,
    /// Last name.
    pub last_name: Option<String>,
    /// Company name.
    pub company_name: Option<String>,
    /// Address line 1.
    pub address_line1: Option<String>,
    /// Address line 2.
    pub address_line2: Option<String>,
    /// City.
    pub city: Option<String>,
    /// State/province abbreviation (e.g., "TX").
    pub state_province_region: Option<String>,
    /// Postal/ZIP code.
    pub postal_code: Option<String>,
    /// ISO 3166-1 alpha-2 country code.
    pub iso_country_alpha2: Option<String>,
    /// Primary phone number.
    pub phone_primary: Option<String>,
}

impl Address {
    /// Get the addressee's full name.
    #[must_use]
    pub fn full_name(&self) -> String {
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => format!("{first} {last}"),
            (Some(first), None) => first.clone(),
            (None, Some(last)) => last.clone(),
            (None, None) => String::new(),
        }
    }
}

/// A saved address in a customer's address book.
///
/// The address itself lives in the address service and is referenced by
/// [`CustomerAddress::address_id`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerAddress {
    /// Address book entry ID.
    pub id: CustomerAddressId,
    /// Display name chosen by the customer (e.g., "Home").
    pub address_name: Option<String>,
    /// ID of the referenced address.
    pub address_id: AddressId,
    /// Whether this is the customer's default address.
    #[serde(default)]
    pub is_default: bool,
}

/// A state or province, for address dropdowns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct State {
    /// Abbreviation (e.g., "TX").
    pub abbreviation: String,
    /// Display name (e.g., "Texas").
    pub name: String,
}

/// A country, for address dropdowns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    /// ISO 3166-1 alpha-2 code (e.g., "US").
    pub abbreviation: String,
    /// Display name.
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name() {
        let mut address = Address {
            first_name: Some("Ada".to_string()),
            last_name: Some("Lovelace".to_string()),
            ..Address::default()
        };
        assert_eq!(address.full_name(), "Ada Lovelace");

        address.first_name = None;
        assert_eq!(address.full_name(), "Lovelace");

        address.last_name = None;
        assert_eq!(address.full_name(), "");
    }
}
