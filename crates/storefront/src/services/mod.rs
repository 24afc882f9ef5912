//! Read-only collaborators the checkout page queries.
//!
//! Fulfillment, pricing, address book and reference data are owned by other
//! subsystems. The checkout builder only sees them through these traits, so
//! a deployment can back them with anything from a static catalog to remote
//! services.
//!
//! # Services
//!
//! - [`FulfillmentOptionService`] - Delivery options offered at checkout
//! - [`FulfillmentPricingService`] - Shipping cost estimates (may fail)
//! - [`CustomerAddressService`] - A customer's default saved address
//! - [`AddressService`] - Address lookup by ID
//! - [`ReferenceDataService`] - States and countries for dropdowns

pub mod carts;
pub mod catalog;

use std::sync::Arc;

use checkout_core::{
    Address, AddressId, Country, CustomerAddress, CustomerId, FulfillmentGroup,
    FulfillmentOption, Money, State,
};
use serde::Serialize;
use thiserror::Error;

pub use carts::{CartKey, CartStore};
pub use catalog::{CatalogError, InMemoryCatalog};

/// Fulfillment price estimation failed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FulfillmentPriceError {
    /// The group has no shipping address to price against.
    #[error("fulfillment group has no address")]
    MissingAddress,
    /// An option cannot be priced for this group.
    #[error("no rate for fulfillment option {0}")]
    NoRate(String),
}

/// Estimated cost of each fulfillment option for one group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FulfillmentEstimation {
    /// One entry per estimated option, in option order.
    pub fulfillment_option_prices: Vec<FulfillmentOptionPrice>,
}

/// The estimated price of one fulfillment option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FulfillmentOptionPrice {
    /// The option being priced.
    pub option: FulfillmentOption,
    /// Estimated cost.
    pub price: Money,
}

/// Lists the delivery options offered at checkout.
pub trait FulfillmentOptionService: Send + Sync {
    /// All fulfillment options.
    fn read_all_fulfillment_options(&self) -> Vec<FulfillmentOption>;
}

/// Estimates what each fulfillment option would cost for a group.
pub trait FulfillmentPricingService: Send + Sync {
    /// Estimate every option in `options` for `group`.
    ///
    /// # Errors
    ///
    /// Returns [`FulfillmentPriceError`] if the group cannot be priced.
    fn estimate_cost_for_fulfillment_group(
        &self,
        group: &FulfillmentGroup,
        options: &[FulfillmentOption],
    ) -> Result<FulfillmentEstimation, FulfillmentPriceError>;
}

/// Looks up a customer's saved addresses.
pub trait CustomerAddressService: Send + Sync {
    /// The customer's default address book entry, if any.
    fn find_default_customer_address(&self, customer_id: CustomerId) -> Option<CustomerAddress>;
}

/// Looks up addresses by ID.
pub trait AddressService: Send + Sync {
    /// The address with this ID, if it exists.
    fn read_address_by_id(&self, id: AddressId) -> Option<Address>;
}

/// States and countries for address dropdowns.
pub trait ReferenceDataService: Send + Sync {
    /// All states/provinces.
    fn find_states(&self) -> Vec<State>;
    /// All countries.
    fn find_countries(&self) -> Vec<Country>;
}

/// The full set of collaborators the checkout builder needs.
///
/// Cheaply cloneable; every service is behind an `Arc`.
#[derive(Clone)]
pub struct CheckoutServices {
    pub fulfillment_options: Arc<dyn FulfillmentOptionService>,
    pub fulfillment_pricing: Arc<dyn FulfillmentPricingService>,
    pub customer_addresses: Arc<dyn CustomerAddressService>,
    pub addresses: Arc<dyn AddressService>,
    pub reference_data: Arc<dyn ReferenceDataService>,
}

impl CheckoutServices {
    /// Back every service with one in-memory catalog.
    #[must_use]
    pub fn from_catalog(catalog: InMemoryCatalog) -> Self {
        let catalog = Arc::new(catalog);
        Self {
            fulfillment_options: catalog.clone(),
            fulfillment_pricing: catalog.clone(),
            customer_addresses: catalog.clone(),
            addresses: catalog.clone(),
            reference_data: catalog,
        }
    }
}

impl std::fmt::Debug for CheckoutServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CheckoutServices").finish_non_exhaustive()
    }
}
