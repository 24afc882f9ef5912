//! Ordered checkout sections and their display states.
//!
//! The page is drawn top to bottom as order info, billing, shipping, then
//! payment. Each drawn section carries the help message of the section
//! before it ("finish the step above first") and a display state:
//!
//! 1. The first section starts as a form; the rest start inactive.
//! 2. A section right after a populated section becomes a form.
//! 3. A populated section is shown saved.
//! 4. Payment stays inactive while a shown billing section is empty, since
//!    the customer has to re-enter a billing address after a gateway failure.
//! 5. A section the customer asked to edit is a form.
//!
//! Later rules win.

use serde::{Deserialize, Serialize};

use super::params::EditRequest;
use super::visibility::PopulatedSections;

/// The four sections of the checkout page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SectionView {
    OrderInfo,
    BillingInfo,
    ShippingInfo,
    PaymentInfo,
}

/// How a section is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SectionState {
    /// Editable form.
    Form,
    /// Read-only summary with an edit link.
    Saved,
    /// Collapsed; cannot be filled in yet.
    #[default]
    Inactive,
}

/// One drawn section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutSection {
    pub view: SectionView,
    pub populated: bool,
    pub state: SectionState,
    pub help_message: Option<String>,
}

impl CheckoutSection {
    fn new(view: SectionView, populated: bool, help_message: Option<&str>) -> Self {
        Self {
            view,
            populated,
            state: SectionState::Inactive,
            help_message: help_message.map(str::to_owned),
        }
    }
}

/// Help text configured for each section.
///
/// A message belongs to the section it names and is displayed on the next
/// drawn section, prompting the customer to finish this one first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HelpMessages {
    #[serde(rename = "orderInfoHelpMessage")]
    pub order_info: Option<String>,
    #[serde(rename = "billingInfoHelpMessage")]
    pub billing_info: Option<String>,
    #[serde(rename = "shippingInfoHelpMessage")]
    pub shipping_info: Option<String>,
}

/// Which optional sections are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawnSections {
    pub billing: bool,
    pub shipping: bool,
}

/// Build the ordered section list with states resolved.
#[must_use]
pub fn build_ordered_sections(
    drawn: DrawnSections,
    populated: PopulatedSections,
    help: &HelpMessages,
    edit: EditRequest,
) -> Vec<CheckoutSection> {
    let mut sections = Vec::with_capacity(4);
    // Help text of the most recently drawn section, carried forward.
    let mut carried = help.order_info.as_deref();

    sections.push(CheckoutSection::new(
        SectionView::OrderInfo,
        populated.order_info,
        None,
    ));

    if drawn.billing {
        sections.push(CheckoutSection::new(
            SectionView::BillingInfo,
            populated.billing,
            carried,
        ));
        carried = help.billing_info.as_deref();
    }

    if drawn.shipping {
        sections.push(CheckoutSection::new(
            SectionView::ShippingInfo,
            populated.shipping,
            carried,
        ));
        carried = help.shipping_info.as_deref();
    }

    sections.push(CheckoutSection::new(SectionView::PaymentInfo, false, carried));

    let billing_outstanding = drawn.billing && !populated.billing;
    let previous_populated: Vec<bool> = sections.iter().map(|section| section.populated).collect();

    for (index, section) in sections.iter_mut().enumerate() {
        let previous = index
            .checked_sub(1)
            .and_then(|prev| previous_populated.get(prev).copied());
        resolve_state(section, previous, billing_outstanding, help, edit);
    }

    sections
}

/// Apply the state rules to one section.
///
/// `previous_populated` is `None` for the first drawn section.
fn resolve_state(
    section: &mut CheckoutSection,
    previous_populated: Option<bool>,
    billing_outstanding: bool,
    help: &HelpMessages,
    edit: EditRequest,
) {
    section.state = match previous_populated {
        None | Some(true) => SectionState::Form,
        Some(false) => SectionState::Inactive,
    };

    if section.populated {
        section.state = SectionState::Saved;
    }

    if section.view == SectionView::PaymentInfo && billing_outstanding {
        section.state = SectionState::Inactive;
        section.help_message.clone_from(&help.billing_info);
    }

    let edit_requested = match section.view {
        SectionView::OrderInfo => edit.order_info,
        SectionView::BillingInfo => edit.billing,
        SectionView::ShippingInfo => edit.shipping,
        SectionView::PaymentInfo => false,
    };
    if edit_requested {
        section.state = SectionState::Form;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const ALL: DrawnSections = DrawnSections {
        billing: true,
        shipping: true,
    };

    fn help() -> HelpMessages {
        HelpMessages {
            order_info: Some("order".to_string()),
            billing_info: Some("billing".to_string()),
            shipping_info: Some("shipping".to_string()),
        }
    }

    fn populated(order_info: bool, billing: bool, shipping: bool) -> PopulatedSections {
        PopulatedSections {
            order_info,
            billing,
            shipping,
        }
    }

    fn states(sections: &[CheckoutSection]) -> Vec<(SectionView, SectionState)> {
        sections.iter().map(|s| (s.view, s.state)).collect()
    }

    #[test]
    fn test_fixed_order_with_all_sections() {
        let sections = build_ordered_sections(
            ALL,
            PopulatedSections::default(),
            &help(),
            EditRequest::default(),
        );
        let views: Vec<SectionView> = sections.iter().map(|s| s.view).collect();
        assert_eq!(
            views,
            [
                SectionView::OrderInfo,
                SectionView::BillingInfo,
                SectionView::ShippingInfo,
                SectionView::PaymentInfo,
            ]
        );
    }

    #[test]
    fn test_empty_cart_states() {
        let sections = build_ordered_sections(
            ALL,
            PopulatedSections::default(),
            &help(),
            EditRequest::default(),
        );
        assert_eq!(
            states(&sections),
            [
                (SectionView::OrderInfo, SectionState::Form),
                (SectionView::BillingInfo, SectionState::Inactive),
                (SectionView::ShippingInfo, SectionState::Inactive),
                (SectionView::PaymentInfo, SectionState::Inactive),
            ]
        );
    }

    #[test]
    fn test_help_messages_chain_from_previous_section() {
        let sections = build_ordered_sections(
            ALL,
            populated(true, true, true),
            &help(),
            EditRequest::default(),
        );
        let messages: Vec<Option<&str>> =
            sections.iter().map(|s| s.help_message.as_deref()).collect();
        assert_eq!(
            messages,
            [None, Some("order"), Some("billing"), Some("shipping")]
        );
    }

    #[test]
    fn test_help_messages_skip_hidden_sections() {
        let no_billing = DrawnSections {
            billing: false,
            shipping: true,
        };
        let sections = build_ordered_sections(
            no_billing,
            PopulatedSections::default(),
            &help(),
            EditRequest::default(),
        );
        let messages: Vec<Option<&str>> =
            sections.iter().map(|s| s.help_message.as_deref()).collect();
        assert_eq!(messages, [None, Some("order"), Some("shipping")]);

        let only_billing = DrawnSections {
            billing: true,
            shipping: false,
        };
        let sections = build_ordered_sections(
            only_billing,
            populated(true, true, false),
            &help(),
            EditRequest::default(),
        );
        assert_eq!(
            sections.last().unwrap().help_message.as_deref(),
            Some("billing")
        );

        let neither = DrawnSections {
            billing: false,
            shipping: false,
        };
        let sections = build_ordered_sections(
            neither,
            PopulatedSections::default(),
            &help(),
            EditRequest::default(),
        );
        assert_eq!(sections.len(), 2);
        assert_eq!(
            sections.last().unwrap().help_message.as_deref(),
            Some("order")
        );
    }

    #[test]
    fn test_section_after_populated_section_is_form() {
        let sections = build_ordered_sections(
            ALL,
            populated(true, false, true),
            &help(),
            EditRequest::default(),
        );
        assert_eq!(
            states(&sections),
            [
                (SectionView::OrderInfo, SectionState::Saved),
                (SectionView::BillingInfo, SectionState::Form),
                (SectionView::ShippingInfo, SectionState::Saved),
                (SectionView::PaymentInfo, SectionState::Inactive),
            ]
        );
    }

    #[test]
    fn test_payment_inactive_until_billing_populated() {
        let sections = build_ordered_sections(
            ALL,
            populated(true, false, true),
            &help(),
            EditRequest::default(),
        );
        let payment = sections.last().unwrap();
        assert_eq!(payment.state, SectionState::Inactive);
        assert_eq!(payment.help_message.as_deref(), Some("billing"));
    }

    #[test]
    fn test_payment_form_once_everything_populated() {
        let sections = build_ordered_sections(
            ALL,
            populated(true, true, true),
            &help(),
            EditRequest::default(),
        );
        assert_eq!(
            states(&sections),
            [
                (SectionView::OrderInfo, SectionState::Saved),
                (SectionView::BillingInfo, SectionState::Saved),
                (SectionView::ShippingInfo, SectionState::Saved),
                (SectionView::PaymentInfo, SectionState::Form),
            ]
        );
    }

    #[test]
    fn test_hidden_billing_never_blocks_payment() {
        let no_billing = DrawnSections {
            billing: false,
            shipping: true,
        };
        let sections = build_ordered_sections(
            no_billing,
            populated(true, false, true),
            &help(),
            EditRequest::default(),
        );
        assert_eq!(
            states(&sections),
            [
                (SectionView::OrderInfo, SectionState::Saved),
                (SectionView::ShippingInfo, SectionState::Saved),
                (SectionView::PaymentInfo, SectionState::Form),
            ]
        );
    }

    #[test]
    fn test_edit_overrides_saved() {
        let edit = EditRequest {
            order_info: false,
            billing: true,
            shipping: true,
        };
        let sections = build_ordered_sections(ALL, populated(true, true, true), &help(), edit);
        assert_eq!(
            states(&sections),
            [
                (SectionView::OrderInfo, SectionState::Saved),
                (SectionView::BillingInfo, SectionState::Form),
                (SectionView::ShippingInfo, SectionState::Form),
                (SectionView::PaymentInfo, SectionState::Form),
            ]
        );
    }

    #[test]
    fn test_edit_activates_inactive_section() {
        let edit = EditRequest {
            order_info: true,
            billing: false,
            shipping: true,
        };
        let sections =
            build_ordered_sections(ALL, PopulatedSections::default(), &help(), edit);
        assert_eq!(
            states(&sections),
            [
                (SectionView::OrderInfo, SectionState::Form),
                (SectionView::BillingInfo, SectionState::Inactive),
                (SectionView::ShippingInfo, SectionState::Form),
                (SectionView::PaymentInfo, SectionState::Inactive),
            ]
        );
    }

    #[test]
    fn test_first_section_form_when_unpopulated_regardless_of_others() {
        for billing in [false, true] {
            for shipping in [false, true] {
                let sections = build_ordered_sections(
                    ALL,
                    populated(false, billing, shipping),
                    &help(),
                    EditRequest::default(),
                );
                assert_eq!(sections.first().unwrap().state, SectionState::Form);
            }
        }
    }
}
