//! Core types for the checkout domain.
//!
//! This module provides type-safe wrappers for common commerce concepts.

pub mod address;
pub mod id;
pub mod money;
pub mod order;
pub mod status;

pub use address::{Address, Country, CustomerAddress, State};
pub use id::*;
pub use money::{CurrencyCode, Money, MoneyError};
pub use order::{FulfillmentGroup, FulfillmentOption, Order, OrderPayment};
pub use status::*;
