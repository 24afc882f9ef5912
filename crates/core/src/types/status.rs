//! Type enums for fulfillment and payments.

use serde::{Deserialize, Serialize};

/// How a fulfillment group is delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FulfillmentType {
    #[default]
    PhysicalShip,
    PhysicalPickupOrShip,
    PhysicalPickup,
    Digital,
    GiftCard,
}

impl FulfillmentType {
    /// Whether groups of this type need a shipping address and option.
    #[must_use]
    pub const fn is_shippable(self) -> bool {
        matches!(self, Self::PhysicalShip | Self::PhysicalPickupOrShip)
    }
}

/// Kind of payment applied to an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentType {
    CreditCard,
    /// Off-site account such as `PayPal` Express.
    ThirdPartyAccount,
    GiftCard,
    CustomerCredit,
    BankAccount,
    Check,
    Cod,
}

impl PaymentType {
    /// Whether the payment is applied up-front against the order total
    /// (gift cards, store credit) rather than settling the remainder.
    #[must_use]
    pub const fn is_applied_up_front(self) -> bool {
        matches!(self, Self::GiftCard | Self::CustomerCredit)
    }
}

/// The gateway a payment is routed through.
///
/// A `Temporary` gateway marks a card the customer has entered on the page
/// but which no gateway has seen yet. Any other gateway means the card has
/// been handed off and is awaiting confirmation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum PaymentGatewayType {
    #[default]
    Temporary,
    Passthrough,
    Named(String),
}

impl PaymentGatewayType {
    /// Whether this is the temporary, pre-gateway marker.
    #[must_use]
    pub const fn is_temporary(&self) -> bool {
        matches!(self, Self::Temporary)
    }

    /// Wire name of the gateway.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Temporary => "TEMPORARY",
            Self::Passthrough => "PASSTHROUGH",
            Self::Named(name) => name,
        }
    }
}

impl From<String> for PaymentGatewayType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "TEMPORARY" => Self::Temporary,
            "PASSTHROUGH" => Self::Passthrough,
            _ => Self::Named(value),
        }
    }
}

impl From<PaymentGatewayType> for String {
    fn from(value: PaymentGatewayType) -> Self {
        match value {
            PaymentGatewayType::Named(name) => name,
            other => other.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for PaymentGatewayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_shippable_types() {
        assert!(FulfillmentType::PhysicalShip.is_shippable());
        assert!(FulfillmentType::PhysicalPickupOrShip.is_shippable());
        assert!(!FulfillmentType::PhysicalPickup.is_shippable());
        assert!(!FulfillmentType::Digital.is_shippable());
        assert!(!FulfillmentType::GiftCard.is_shippable());
    }

    #[test]
    fn test_gateway_wire_names() {
        let gateway: PaymentGatewayType = serde_json::from_str("\"TEMPORARY\"").unwrap();
        assert!(gateway.is_temporary());

        let gateway: PaymentGatewayType = serde_json::from_str("\"BRAINTREE\"").unwrap();
        assert_eq!(gateway, PaymentGatewayType::Named("BRAINTREE".to_string()));
        assert_eq!(serde_json::to_string(&gateway).unwrap(), "\"BRAINTREE\"");
    }

    #[test]
    fn test_payment_type_serde() {
        let kind: PaymentType = serde_json::from_str("\"THIRD_PARTY_ACCOUNT\"").unwrap();
        assert_eq!(kind, PaymentType::ThirdPartyAccount);
        assert!(PaymentType::GiftCard.is_applied_up_front());
        assert!(!PaymentType::CreditCard.is_applied_up_front());
    }
}
