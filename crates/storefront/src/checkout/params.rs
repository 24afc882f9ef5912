//! Checkout request parameters.

/// Which sections the customer explicitly asked to edit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EditRequest {
    pub order_info: bool,
    pub billing: bool,
    pub shipping: bool,
}

/// Query parameters of the checkout page.
///
/// Edit flags are read leniently: `true`, `on`, `yes`, `y` and `t` (any case)
/// are true; anything else, including a missing parameter, is false.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckoutParams {
    pub edit_order_info: bool,
    pub edit_billing: bool,
    pub edit_shipping: bool,
    /// Gateway error text, passed through to the page untouched.
    pub payment_processing_error: Option<String>,
}

impl CheckoutParams {
    /// Build from decoded query pairs.
    ///
    /// When a parameter repeats, its first value wins. Unknown parameters
    /// are ignored.
    #[must_use]
    pub fn from_query_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut edit_order_info = None;
        let mut edit_billing = None;
        let mut edit_shipping = None;
        let mut payment_processing_error = None;

        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "edit-order-info" => &mut edit_order_info,
                "edit-billing" => &mut edit_billing,
                "edit-shipping" => &mut edit_shipping,
                "paymentProcessingError" => &mut payment_processing_error,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into());
            }
        }

        Self {
            edit_order_info: edit_order_info.as_deref().is_some_and(parse_flag),
            edit_billing: edit_billing.as_deref().is_some_and(parse_flag),
            edit_shipping: edit_shipping.as_deref().is_some_and(parse_flag),
            payment_processing_error,
        }
    }

    /// The edit flags as a named struct.
    #[must_use]
    pub const fn edit_request(&self) -> EditRequest {
        EditRequest {
            order_info: self.edit_order_info,
            billing: self.edit_billing,
            shipping: self.edit_shipping,
        }
    }
}

/// Interpret a flag value the way HTML checkbox and link parameters arrive.
#[must_use]
pub fn parse_flag(value: &str) -> bool {
    ["true", "on", "yes", "y", "t"]
        .iter()
        .any(|truthy| value.eq_ignore_ascii_case(truthy))
}
