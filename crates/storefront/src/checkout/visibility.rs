//! Which checkout sections are shown, and which are already filled in.

use checkout_core::{Order, OrderPayment, PaymentType};
use serde::Serialize;

/// Number of fulfillment groups on the cart that ship.
#[must_use]
pub fn count_shippable_groups(cart: &Order) -> usize {
    cart.fulfillment_groups
        .iter()
        .filter(|group| group.is_shippable())
        .count()
}

/// Which sections already hold enough data to be shown as saved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PopulatedSections {
    #[serde(rename = "orderInfoPopulated")]
    pub order_info: bool,
    #[serde(rename = "billingPopulated")]
    pub billing: bool,
    #[serde(rename = "shippingPopulated")]
    pub shipping: bool,
}

impl PopulatedSections {
    /// Inspect the cart.
    ///
    /// - Order info: the email address is not blank.
    /// - Billing: an active credit card carries a billing address.
    /// - Shipping: a shippable group has both an address and an option.
    #[must_use]
    pub fn from_cart(cart: &Order) -> Self {
        let order_info = cart
            .email_address
            .as_deref()
            .is_some_and(|email| !email.trim().is_empty());

        let billing = cart
            .active_payments_of_type(PaymentType::CreditCard)
            .any(|payment| payment.billing_address.is_some());

        let shipping = cart.fulfillment_groups.iter().any(|group| {
            group.is_shippable() && group.address.is_some() && group.fulfillment_option.is_some()
        });

        Self {
            order_info,
            billing,
            shipping,
        }
    }
}

/// Show/hide flags for the checkout page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionVisibility {
    pub show_billing_info_section: bool,
    pub show_shipping_info_section: bool,
    pub show_all_payment_methods: bool,
    pub show_payment_method_section: bool,
    pub order_contains_third_party_payment: bool,
    pub order_contains_unconfirmed_credit_card: bool,
    /// The last active credit card that has already gone to a gateway.
    #[serde(rename = "unconfirmedCC")]
    pub unconfirmed_credit_card: Option<OrderPayment>,
}

impl SectionVisibility {
    /// Derive the flags from the cart.
    ///
    /// Shipping is shown only when something ships. Billing and the full
    /// payment method list are hidden once the order carries a third-party
    /// account payment or a card that has gone to a gateway. The payment
    /// method list is also hidden when applied payments (gift cards, credit)
    /// cover the whole total.
    #[must_use]
    pub fn derive(cart: &Order, shippable_groups: usize) -> Self {
        let order_contains_third_party_payment = cart
            .active_payments_of_type(PaymentType::ThirdPartyAccount)
            .next()
            .is_some();

        let unconfirmed_credit_card = cart
            .active_payments_of_type(PaymentType::CreditCard)
            .filter(|payment| !payment.gateway_type.is_temporary())
            .last()
            .cloned();
        let order_contains_unconfirmed_credit_card = unconfirmed_credit_card.is_some();

        let mut show_billing_info_section = true;
        let mut show_all_payment_methods = true;

        if order_contains_third_party_payment || order_contains_unconfirmed_credit_card {
            show_billing_info_section = false;
            show_all_payment_methods = false;
        } else if fully_covered_by_applied_payments(cart) {
            show_all_payment_methods = false;
        }

        Self {
            show_billing_info_section,
            show_shipping_info_section: shippable_groups > 0,
            show_all_payment_methods,
            show_payment_method_section: true,
            order_contains_third_party_payment,
            order_contains_unconfirmed_credit_card,
            unconfirmed_credit_card,
        }
    }
}

fn fully_covered_by_applied_payments(cart: &Order) -> bool {
    match cart.total_after_applied_payments() {
        Ok(remaining) => remaining.is_some_and(|money| money.is_zero()),
        Err(err) => {
            tracing::warn!(order_id = ?cart.id, error = %err, "Cannot net applied payments against order total");
            false
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use checkout_core::{
        Address, CurrencyCode, FulfillmentGroup, FulfillmentOption, FulfillmentOptionId,
        FulfillmentType, Money, PaymentGatewayType,
    };

    use super::*;

    fn group(fulfillment_type: FulfillmentType, address: bool, option: bool) -> FulfillmentGroup {
        FulfillmentGroup {
            fulfillment_type,
            address: address.then(Address::default),
            fulfillment_option: option.then(|| FulfillmentOption {
                id: FulfillmentOptionId::new(1),
                name: "Standard".to_string(),
                long_description: None,
                flat_rate: None,
            }),
            ..FulfillmentGroup::default()
        }
    }

    fn payment(payment_type: PaymentType, gateway: PaymentGatewayType) -> OrderPayment {
        OrderPayment::new(payment_type, gateway)
    }

    fn priced(cents: i64) -> Option<Money> {
        Some(Money::from_cents(cents, CurrencyCode::USD))
    }

    #[test]
    fn test_count_shippable_groups() {
        let cart = Order {
            fulfillment_groups: vec![
                group(FulfillmentType::PhysicalShip, false, false),
                group(FulfillmentType::Digital, false, false),
                group(FulfillmentType::PhysicalPickupOrShip, false, false),
                group(FulfillmentType::PhysicalPickup, false, false),
            ],
            ..Order::default()
        };
        assert_eq!(count_shippable_groups(&cart), 2);
        assert_eq!(count_shippable_groups(&Order::default()), 0);
    }

    #[test]
    fn test_no_shippable_groups_hides_shipping() {
        let cart = Order {
            fulfillment_groups: vec![group(FulfillmentType::Digital, false, false)],
            ..Order::default()
        };
        let visibility = SectionVisibility::derive(&cart, count_shippable_groups(&cart));
        assert!(!visibility.show_shipping_info_section);
        assert!(visibility.show_billing_info_section);
        assert!(visibility.show_payment_method_section);
    }

    #[test]
    fn test_third_party_payment_hides_billing_and_methods() {
        let cart = Order {
            payments: vec![payment(
                PaymentType::ThirdPartyAccount,
                PaymentGatewayType::Named("PAYPAL_EXPRESS".to_string()),
            )],
            total: priced(1000),
            ..Order::default()
        };
        let visibility = SectionVisibility::derive(&cart, 1);
        assert!(visibility.order_contains_third_party_payment);
        assert!(!visibility.show_billing_info_section);
        assert!(!visibility.show_all_payment_methods);
    }

    #[test]
    fn test_inactive_third_party_payment_is_ignored() {
        let mut paypal = payment(PaymentType::ThirdPartyAccount, PaymentGatewayType::Passthrough);
        paypal.active = false;
        let cart = Order {
            payments: vec![paypal],
            total: priced(1000),
            ..Order::default()
        };
        let visibility = SectionVisibility::derive(&cart, 1);
        assert!(!visibility.order_contains_third_party_payment);
        assert!(visibility.show_billing_info_section);
        assert!(visibility.show_all_payment_methods);
    }

    #[test]
    fn test_unconfirmed_card_hides_billing() {
        let first = payment(PaymentType::CreditCard, PaymentGatewayType::Passthrough);
        let mut last = payment(
            PaymentType::CreditCard,
            PaymentGatewayType::Named("BRAINTREE".to_string()),
        );
        last.amount = priced(500);
        let cart = Order {
            payments: vec![first, last.clone()],
            total: priced(1000),
            ..Order::default()
        };

        let visibility = SectionVisibility::derive(&cart, 1);
        assert!(visibility.order_contains_unconfirmed_credit_card);
        assert_eq!(visibility.unconfirmed_credit_card, Some(last));
        assert!(!visibility.show_billing_info_section);
        assert!(!visibility.show_all_payment_methods);
    }

    #[test]
    fn test_temporary_card_keeps_billing() {
        let cart = Order {
            payments: vec![payment(PaymentType::CreditCard, PaymentGatewayType::Temporary)],
            total: priced(1000),
            ..Order::default()
        };
        let visibility = SectionVisibility::derive(&cart, 1);
        assert!(!visibility.order_contains_unconfirmed_credit_card);
        assert!(visibility.show_billing_info_section);
        assert!(visibility.show_all_payment_methods);
    }

    #[test]
    fn test_zero_balance_hides_payment_methods_only() {
        let mut gift_card = payment(PaymentType::GiftCard, PaymentGatewayType::Passthrough);
        gift_card.amount = priced(2500);
        let cart = Order {
            payments: vec![gift_card],
            total: priced(2500),
            ..Order::default()
        };

        let visibility = SectionVisibility::derive(&cart, 1);
        assert!(!visibility.show_all_payment_methods);
        assert!(visibility.show_billing_info_section);
    }

    #[test]
    fn test_out_of_range_balance_shows_payment_methods() {
        let cart: Order = serde_json::from_value(serde_json::json!({
            "total": {"amount": "79228162514264337593543950335", "currency_code": "USD"},
            "payments": [{
                "active": true,
                "type": "GIFT_CARD",
                "gateway_type": "PASSTHROUGH",
                "amount": {"amount": "-79228162514264337593543950335", "currency_code": "USD"}
            }]
        }))
        .unwrap();

        let visibility = SectionVisibility::derive(&cart, 0);
        assert!(visibility.show_all_payment_methods);
    }

    #[test]
    fn test_unpriced_cart_shows_payment_methods() {
        let visibility = SectionVisibility::derive(&Order::default(), 0);
        assert!(visibility.show_all_payment_methods);
    }

    #[test]
    fn test_populated_sections() {
        let mut card = payment(PaymentType::CreditCard, PaymentGatewayType::Temporary);
        card.billing_address = Some(Address::default());
        let cart = Order {
            email_address: Some("shopper@example.com".to_string()),
            fulfillment_groups: vec![
                group(FulfillmentType::Digital, true, true),
                group(FulfillmentType::PhysicalShip, true, true),
            ],
            payments: vec![card],
            ..Order::default()
        };
        assert_eq!(
            PopulatedSections::from_cart(&cart),
            PopulatedSections {
                order_info: true,
                billing: true,
                shipping: true,
            }
        );
    }

    #[test]
    fn test_blank_and_partial_data_is_not_populated() {
        let mut inactive_card = payment(PaymentType::CreditCard, PaymentGatewayType::Temporary);
        inactive_card.active = false;
        inactive_card.billing_address = Some(Address::default());
        let cart = Order {
            email_address: Some("   ".to_string()),
            fulfillment_groups: vec![
                group(FulfillmentType::PhysicalShip, true, false),
                group(FulfillmentType::Digital, true, true),
            ],
            payments: vec![inactive_card],
            ..Order::default()
        };
        assert_eq!(
            PopulatedSections::from_cart(&cart),
            PopulatedSections::default()
        );
    }
}
