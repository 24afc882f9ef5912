//! Static, in-memory implementation of every checkout collaborator.
//!
//! The catalog is loaded once at startup from a YAML document (or the
//! built-in defaults) and never changes afterwards.
//!
//! ```yaml
//! fulfillment_options:
//!   - id: 1
//!     name: Standard
//!     flat_rate: { amount: "5.00", currency_code: USD }
//! states:
//!   - { abbreviation: TX, name: Texas }
//! countries:
//!   - { abbreviation: US, name: United States }
//! addresses:
//!   - { id: 100, first_name: Ada, address_line1: 1 Main St, city: Austin }
//! customer_addresses:
//!   - { customer_id: 7, id: 70, address_name: Home, address_id: 100, is_default: true }
//! ```

use std::collections::{HashMap, HashSet};
use std::path::Path;

use checkout_core::{
    Address, AddressId, Country, CurrencyCode, CustomerAddress, CustomerId, FulfillmentGroup,
    FulfillmentOption, FulfillmentOptionId, Money, State,
};
use serde::Deserialize;
use thiserror::Error;

use super::{
    AddressService, CustomerAddressService, FulfillmentEstimation, FulfillmentOptionPrice,
    FulfillmentOptionService, FulfillmentPriceError, FulfillmentPricingService,
    ReferenceDataService,
};

/// Errors loading a catalog document.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("invalid catalog: {0}")]
    Invalid(String),
}

/// On-disk catalog layout.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CatalogDocument {
    fulfillment_options: Vec<FulfillmentOption>,
    states: Vec<State>,
    countries: Vec<Country>,
    addresses: Vec<Address>,
    customer_addresses: Vec<CustomerAddressEntry>,
}

#[derive(Debug, Deserialize)]
struct CustomerAddressEntry {
    customer_id: CustomerId,
    #[serde(flatten)]
    address: CustomerAddress,
}

/// Catalog of fulfillment options, reference data and saved addresses.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    fulfillment_options: Vec<FulfillmentOption>,
    states: Vec<State>,
    countries: Vec<Country>,
    addresses: HashMap<AddressId, Address>,
    customer_addresses: HashMap<CustomerId, Vec<CustomerAddress>>,
}

impl InMemoryCatalog {
    /// Parse a catalog from YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed, an address has no ID, an
    /// option ID is repeated, or an address book entry references an unknown
    /// address.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, CatalogError> {
        let document: CatalogDocument = serde_yaml::from_str(yaml)?;
        Self::from_document(document)
    }

    /// Read and parse a catalog file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or fails validation.
    pub async fn load(path: &Path) -> Result<Self, CatalogError> {
        let yaml = tokio::fs::read_to_string(path).await?;
        Self::from_yaml_str(&yaml)
    }

    fn from_document(document: CatalogDocument) -> Result<Self, CatalogError> {
        let mut seen_options = HashSet::new();
        for option in &document.fulfillment_options {
            if !seen_options.insert(option.id) {
                return Err(CatalogError::Invalid(format!(
                    "duplicate fulfillment option id {}",
                    option.id
                )));
            }
        }

        let mut addresses = HashMap::with_capacity(document.addresses.len());
        for address in document.addresses {
            let id = address.id.ok_or_else(|| {
                CatalogError::Invalid(format!(
                    "address for '{}' has no id",
                    address.full_name()
                ))
            })?;
            addresses.insert(id, address);
        }

        let mut customer_addresses: HashMap<CustomerId, Vec<CustomerAddress>> = HashMap::new();
        for entry in document.customer_addresses {
            if !addresses.contains_key(&entry.address.address_id) {
                return Err(CatalogError::Invalid(format!(
                    "customer {} references unknown address {}",
                    entry.customer_id, entry.address.address_id
                )));
            }
            customer_addresses
                .entry(entry.customer_id)
                .or_default()
                .push(entry.address);
        }

        Ok(Self {
            fulfillment_options: document.fulfillment_options,
            states: document.states,
            countries: document.countries,
            addresses,
            customer_addresses,
        })
    }

    /// The built-in catalog: three flat-rate shipping options and a small set
    /// of states and countries.
    #[must_use]
    pub fn with_defaults() -> Self {
        let option = |id: i64, name: &str, description: &str, cents: i64| FulfillmentOption {
            id: FulfillmentOptionId::new(id),
            name: name.to_string(),
            long_description: Some(description.to_string()),
            flat_rate: Some(Money::from_cents(cents, CurrencyCode::USD)),
        };
        let state = |abbreviation: &str, name: &str| State {
            abbreviation: abbreviation.to_string(),
            name: name.to_string(),
        };
        let country = |abbreviation: &str, name: &str| Country {
            abbreviation: abbreviation.to_string(),
            name: name.to_string(),
        };

        Self {
            fulfillment_options: vec![
                option(1, "Standard", "5 - 7 Days", 500),
                option(2, "Priority", "3 - 5 Days", 1000),
                option(3, "Express", "1 - 2 Days", 2000),
            ],
            states: vec![
                state("CA", "California"),
                state("FL", "Florida"),
                state("IL", "Illinois"),
                state("NY", "New York"),
                state("TX", "Texas"),
                state("WA", "Washington"),
            ],
            countries: vec![
                country("CA", "Canada"),
                country("DE", "Germany"),
                country("FR", "France"),
                country("GB", "United Kingdom"),
                country("US", "United States"),
            ],
            addresses: HashMap::new(),
            customer_addresses: HashMap::new(),
        }
    }
}

impl FulfillmentOptionService for InMemoryCatalog {
    fn read_all_fulfillment_options(&self) -> Vec<FulfillmentOption> {
        self.fulfillment_options.clone()
    }
}

impl FulfillmentPricingService for InMemoryCatalog {
    fn estimate_cost_for_fulfillment_group(
        &self,
        group: &FulfillmentGroup,
        options: &[FulfillmentOption],
    ) -> Result<FulfillmentEstimation, FulfillmentPriceError> {
        if group.address.is_none() {
            return Err(FulfillmentPriceError::MissingAddress);
        }

        let fulfillment_option_prices = options
            .iter()
            .map(|option| {
                option
                    .flat_rate
                    .map(|price| FulfillmentOptionPrice {
                        option: option.clone(),
                        price,
                    })
                    .ok_or_else(|| FulfillmentPriceError::NoRate(option.name.clone()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(FulfillmentEstimation {
            fulfillment_option_prices,
        })
    }
}

impl CustomerAddressService for InMemoryCatalog {
    fn find_default_customer_address(&self, customer_id: CustomerId) -> Option<CustomerAddress> {
        self.customer_addresses
            .get(&customer_id)?
            .iter()
            .find(|entry| entry.is_default)
            .cloned()
    }
}

impl AddressService for InMemoryCatalog {
    fn read_address_by_id(&self, id: AddressId) -> Option<Address> {
        self.addresses.get(&id).cloned()
    }
}

impl ReferenceDataService for InMemoryCatalog {
    fn find_states(&self) -> Vec<State> {
        self.states.clone()
    }

    fn find_countries(&self) -> Vec<Country> {
        self.countries.clone()
    }
}
