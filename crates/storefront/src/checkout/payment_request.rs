//! Summary of what the customer is about to pay, for client-side payment widgets.

use checkout_core::{Address, CurrencyCode, Money, Order, OrderId, PaymentType};
use serde::Serialize;

/// Payment request built from a saved cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    pub order_id: OrderId,
    pub currency: CurrencyCode,
    pub order_total: Option<Money>,
    /// Total left to pay once gift cards and customer credit are applied.
    pub total_after_applied_payments: Option<Money>,
    pub customer_email: Option<String>,
    pub shipping_address: Option<Address>,
    pub billing_address: Option<Address>,
}

impl PaymentRequest {
    /// Build the request for `cart`. Returns `None` for a cart that has no
    /// ID, i.e. one that was never saved upstream.
    #[must_use]
    pub fn from_cart(cart: &Order) -> Option<Self> {
        let order_id = cart.id?;

        let total_after_applied_payments =
            cart.total_after_applied_payments().unwrap_or_else(|err| {
                tracing::warn!(order_id = %order_id, error = %err, "Cannot net applied payments against order total");
                None
            });

        let shipping_address = cart
            .first_shippable_group()
            .and_then(|group| group.address.clone());

        let billing_address = cart
            .active_payments_of_type(PaymentType::CreditCard)
            .find_map(|payment| payment.billing_address.clone());

        Some(Self {
            order_id,
            currency: cart.currency,
            order_total: cart.total,
            total_after_applied_payments,
            customer_email: cart.email_address.clone(),
            shipping_address,
            billing_address,
        })
    }
}
