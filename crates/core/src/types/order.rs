//! Order (cart) snapshot types.
//!
//! These mirror what the upstream cart service hands to the checkout page.
//! Nothing here mutates an order; the helpers only read it.

use serde::{Deserialize, Serialize};

use super::address::Address;
use super::id::{FulfillmentGroupId, FulfillmentOptionId, OrderId, PaymentId};
use super::money::{CurrencyCode, Money, MoneyError};
use super::status::{FulfillmentType, PaymentGatewayType, PaymentType};

/// A delivery method the customer can choose (e.g., "Standard", "Express").
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FulfillmentOption {
    /// Option ID.
    pub id: FulfillmentOptionId,
    /// Display name.
    pub name: String,
    /// Longer description shown next to the option.
    #[serde(default)]
    pub long_description: Option<String>,
    /// Flat shipping rate, if the option is priced per group.
    #[serde(default)]
    pub flat_rate: Option<Money>,
}

/// A set of order items delivered together.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FulfillmentGroup {
    /// Group ID.
    pub id: Option<FulfillmentGroupId>,
    /// Delivery type.
    #[serde(rename = "type")]
    pub fulfillment_type: FulfillmentType,
    /// Shipping address, once chosen.
    pub address: Option<Address>,
    /// Delivery option, once chosen.
    pub fulfillment_option: Option<FulfillmentOption>,
}

impl FulfillmentGroup {
    /// Whether this group is shipped.
    #[must_use]
    pub const fn is_shippable(&self) -> bool {
        self.fulfillment_type.is_shippable()
    }
}

/// A payment applied to an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderPayment {
    /// Payment ID.
    #[serde(default)]
    pub id: Option<PaymentId>,
    /// Payment kind.
    #[serde(rename = "type")]
    pub payment_type: PaymentType,
    /// Gateway the payment is routed through.
    #[serde(default)]
    pub gateway_type: PaymentGatewayType,
    /// Inactive payments were invalidated (e.g., after a gateway failure).
    #[serde(default = "default_active")]
    pub active: bool,
    /// Amount covered by this payment.
    #[serde(default)]
    pub amount: Option<Money>,
    /// Billing address captured with the payment.
    #[serde(default)]
    pub billing_address: Option<Address>,
}

const fn default_active() -> bool {
    true
}

impl OrderPayment {
    /// Create an active payment with no amount or address.
    #[must_use]
    pub const fn new(payment_type: PaymentType, gateway_type: PaymentGatewayType) -> Self {
        Self {
            id: None,
            payment_type,
            gateway_type,
            active: true,
            amount: None,
            billing_address: None,
        }
    }

    /// Whether this is an active payment of the given type.
    #[must_use]
    pub fn is_active_of_type(&self, payment_type: PaymentType) -> bool {
        self.active && self.payment_type == payment_type
    }
}

/// A customer's cart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Order {
    /// Order ID. A cart without an ID has never been saved upstream.
    pub id: Option<OrderId>,
    /// Contact email address.
    pub email_address: Option<String>,
    /// Order currency.
    pub currency: CurrencyCode,
    /// Fulfillment groups, in upstream order.
    pub fulfillment_groups: Vec<FulfillmentGroup>,
    /// Payments, in upstream order.
    pub payments: Vec<OrderPayment>,
    /// Order total including shipping and tax, once priced.
    pub total: Option<Money>,
}

impl Order {
    /// The first fulfillment group that ships, if any.
    #[must_use]
    pub fn first_shippable_group(&self) -> Option<&FulfillmentGroup> {
        self.fulfillment_groups
            .iter()
            .find(|group| group.is_shippable())
    }

    /// Iterate over the active payments of one type.
    pub fn active_payments_of_type(
        &self,
        payment_type: PaymentType,
    ) -> impl Iterator<Item = &OrderPayment> {
        self.payments
            .iter()
            .filter(move |payment| payment.is_active_of_type(payment_type))
    }

    /// The order total minus active payments applied up-front (gift cards,
    /// customer credit).
    ///
    /// Returns `Ok(None)` if the order has not been priced.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::CurrencyMismatch`] if a payment is in a
    /// different currency than the total.
    pub fn total_after_applied_payments(&self) -> Result<Option<Money>, MoneyError> {
        let Some(total) = self.total else {
            return Ok(None);
        };

        self.payments
            .iter()
            .filter(|payment| payment.active && payment.payment_type.is_applied_up_front())
            .filter_map(|payment| payment.amount)
            .try_fold(total, Money::checked_sub)
            .map(Some)
    }
}
