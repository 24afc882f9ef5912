//! Assembly of the full checkout view model.

use checkout_core::{Country, CustomerId, FulfillmentOption, Order, State};
use chrono::Locale;
use serde::Serialize;

use super::expiration::{expiration_months, expiration_years};
use super::forms::{CheckoutForms, prepopulate_forms};
use super::params::CheckoutParams;
use super::payment_request::PaymentRequest;
use super::sections::{CheckoutSection, DrawnSections, HelpMessages, build_ordered_sections};
use super::visibility::{PopulatedSections, SectionVisibility, count_shippable_groups};
use crate::services::{CheckoutServices, FulfillmentEstimation};

/// Deployment-wide checkout settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutSettings {
    pub help_messages: HelpMessages,
    /// Number of years offered in the card expiration dropdown.
    pub expiration_year_count: usize,
}

/// Everything one page render depends on besides the collaborators.
#[derive(Debug, Clone, Copy)]
pub struct CheckoutRequest<'a> {
    /// The session cart, or `None` if the session has none.
    pub cart: Option<&'a Order>,
    pub customer_id: Option<CustomerId>,
    pub params: &'a CheckoutParams,
    /// Locale for month names.
    pub locale: Locale,
    /// First year of the expiration dropdown.
    pub current_year: i32,
}

/// The checkout page view model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutViewModel {
    #[serde(flatten)]
    pub visibility: SectionVisibility,
    #[serde(flatten)]
    pub populated: PopulatedSections,
    #[serde(flatten)]
    pub help_messages: HelpMessages,
    pub checkout_sections: Vec<CheckoutSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_request: Option<PaymentRequest>,
    pub num_shippable_fulfillment_groups: usize,
    pub fulfillment_options: Vec<FulfillmentOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimate_response: Option<FulfillmentEstimation>,
    pub states: Vec<State>,
    pub countries: Vec<Country>,
    pub expiration_months: Vec<String>,
    pub expiration_years: Vec<i32>,
    pub payment_processing_error: Option<String>,
    #[serde(flatten)]
    pub forms: CheckoutForms,
}

/// Builds [`CheckoutViewModel`]s against a set of collaborators.
#[derive(Debug, Clone, Copy)]
pub struct CheckoutViewStateBuilder<'a> {
    services: &'a CheckoutServices,
    settings: &'a CheckoutSettings,
}

impl<'a> CheckoutViewStateBuilder<'a> {
    #[must_use]
    pub const fn new(services: &'a CheckoutServices, settings: &'a CheckoutSettings) -> Self {
        Self { services, settings }
    }

    /// Build the view model for one request. Never fails: missing cart
    /// data leaves sections unpopulated and a failed price estimate is
    /// left out.
    #[must_use]
    pub fn build(&self, request: &CheckoutRequest<'_>) -> CheckoutViewModel {
        let empty = Order::default();
        let cart = request.cart.unwrap_or(&empty);

        let mut forms = CheckoutForms::default();
        prepopulate_forms(cart, request.customer_id, self.services, &mut forms);

        let shippable_groups = count_shippable_groups(cart);
        let visibility = SectionVisibility::derive(cart, shippable_groups);
        let populated = PopulatedSections::from_cart(cart);

        let drawn = DrawnSections {
            billing: visibility.show_billing_info_section,
            shipping: visibility.show_shipping_info_section,
        };
        let checkout_sections = build_ordered_sections(
            drawn,
            populated,
            &self.settings.help_messages,
            request.params.edit_request(),
        );

        let fulfillment_options = self.services.fulfillment_options.read_all_fulfillment_options();
        let estimate_response = self.estimate(cart, populated, &fulfillment_options);

        CheckoutViewModel {
            visibility,
            populated,
            help_messages: self.settings.help_messages.clone(),
            checkout_sections,
            payment_request: request.cart.and_then(PaymentRequest::from_cart),
            num_shippable_fulfillment_groups: shippable_groups,
            fulfillment_options,
            estimate_response,
            states: self.services.reference_data.find_states(),
            countries: self.services.reference_data.find_countries(),
            expiration_months: expiration_months(request.locale),
            expiration_years: expiration_years(
                request.current_year,
                self.settings.expiration_year_count,
            ),
            payment_processing_error: request.params.payment_processing_error.clone(),
            forms,
        }
    }

    fn estimate(
        &self,
        cart: &Order,
        populated: PopulatedSections,
        options: &[FulfillmentOption],
    ) -> Option<FulfillmentEstimation> {
        if cart.fulfillment_groups.is_empty() || !populated.shipping {
            return None;
        }
        let group = cart.first_shippable_group()?;

        match self
            .services
            .fulfillment_pricing
            .estimate_cost_for_fulfillment_group(group, options)
        {
            Ok(estimate) => Some(estimate),
            Err(err) => {
                tracing::debug!(order_id = ?cart.id, error = %err, "Fulfillment estimate unavailable");
                None
            }
        }
    }
}
