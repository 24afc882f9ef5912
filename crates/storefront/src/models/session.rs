//! Session-related types.
//!
//! The session holds only identifiers; the cart snapshot itself lives in
//! the cart store under the session's cart key.

/// Session keys for checkout data.
pub mod keys {
    /// Key for the session's cart store key.
    pub const CART_KEY: &str = "cart_key";

    /// Key for the ID of the signed-in customer, if any.
    pub const CUSTOMER_ID: &str = "customer_id";
}
