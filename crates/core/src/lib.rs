//! Checkout Core - Shared domain types.
//!
//! This crate provides the commerce types the checkout page is assembled from:
//! - `storefront` - Checkout view-state builder and HTTP surface
//! - `cli` - Command-line rendering of checkout view models
//!
//! # Architecture
//!
//! The core crate contains only types and small pure helpers - no I/O, no
//! service lookups, no HTTP. Orders, payments and addresses are owned by
//! upstream cart services; these types are the read-only snapshot handed to
//! the checkout page.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, money, addresses, orders, payments and fulfillment

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
