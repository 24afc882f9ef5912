//! Checkout form objects and their pre-population from cart data.

use checkout_core::{Address, CustomerId, FulfillmentOption, FulfillmentOptionId, Order, PaymentType};
use serde::{Deserialize, Serialize};

use crate::services::CheckoutServices;

/// Contact details section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderInfoForm {
    pub email_address: Option<String>,
}

/// Shipping address and delivery option section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShippingInfoForm {
    pub address: Option<Address>,
    /// Address book name, when the address came from the customer's saved addresses.
    pub address_name: Option<String>,
    pub fulfillment_option: Option<FulfillmentOption>,
    pub fulfillment_option_id: Option<FulfillmentOptionId>,
}

/// Billing address section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BillingInfoForm {
    pub address: Option<Address>,
}

/// The three checkout forms, as handed to the page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CheckoutForms {
    pub order_info_form: OrderInfoForm,
    pub shipping_info_form: ShippingInfoForm,
    pub billing_info_form: BillingInfoForm,
}

/// Fill the forms from what the cart and the customer's address book
/// already know. Fields with nothing to copy are left as they are.
///
/// - The order info form gets the cart email.
/// - The shipping form gets the first shippable group's address, or the
///   customer's default saved address when the group has none, plus the
///   group's fulfillment option.
/// - The billing form gets the billing address of the one active credit
///   card payment, if exactly one carries a billing address.
pub fn prepopulate_forms(
    cart: &Order,
    customer_id: Option<CustomerId>,
    services: &CheckoutServices,
    forms: &mut CheckoutForms,
) {
    if let Some(email) = &cart.email_address {
        forms.order_info_form.email_address = Some(email.clone());
    }

    if let Some(group) = cart.first_shippable_group() {
        let shipping = &mut forms.shipping_info_form;
        if let Some(address) = &group.address {
            shipping.address = Some(address.clone());
        } else if let Some((address, name)) =
            customer_id.and_then(|id| default_saved_address(id, services))
        {
            shipping.address = Some(address);
            shipping.address_name = name;
        }

        if let Some(option) = &group.fulfillment_option {
            shipping.fulfillment_option_id = Some(option.id);
            shipping.fulfillment_option = Some(option.clone());
        }
    }

    let mut billing_addresses = cart
        .active_payments_of_type(PaymentType::CreditCard)
        .filter_map(|payment| payment.billing_address.as_ref());
    if let (Some(address), None) = (billing_addresses.next(), billing_addresses.next()) {
        forms.billing_info_form.address = Some(address.clone());
    }
}

/// The customer's default address and its address book name.
fn default_saved_address(
    customer_id: CustomerId,
    services: &CheckoutServices,
) -> Option<(Address, Option<String>)> {
    let entry = services
        .customer_addresses
        .find_default_customer_address(customer_id)?;
    let Some(address) = services.addresses.read_address_by_id(entry.address_id) else {
        tracing::debug!(
            customer_id = %customer_id,
            address_id = %entry.address_id,
            "Default customer address points at a missing address"
        );
        return None;
    };
    Some((address, entry.address_name))
}
