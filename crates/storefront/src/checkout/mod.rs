//! Checkout page view state.
//!
//! [`CheckoutViewStateBuilder`] turns the session cart, the customer and
//! the request parameters into a [`CheckoutViewModel`]: which sections are
//! shown, what state each is in, and what the forms are pre-filled with.
//!
//! # Modules
//!
//! - [`params`] - Request parameters (edit flags, processing error)
//! - [`visibility`] - Section visibility and populated flags
//! - [`sections`] - Ordered sections and their states
//! - [`forms`] - Form pre-population
//! - [`expiration`] - Card expiration dropdowns
//! - [`payment_request`] - Payment summary for client widgets
//! - [`view_model`] - The builder and the assembled view model

pub mod expiration;
pub mod forms;
pub mod params;
pub mod payment_request;
pub mod sections;
pub mod view_model;
pub mod visibility;

pub use forms::{BillingInfoForm, CheckoutForms, OrderInfoForm, ShippingInfoForm};
pub use params::{CheckoutParams, EditRequest};
pub use payment_request::PaymentRequest;
pub use sections::{CheckoutSection, HelpMessages, SectionState, SectionView};
pub use view_model::{CheckoutRequest, CheckoutSettings, CheckoutViewModel, CheckoutViewStateBuilder};
pub use visibility::{PopulatedSections, SectionVisibility};
