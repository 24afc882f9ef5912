//! Session middleware configuration.
//!
//! Sessions live in memory; they only carry the cart and customer handed
//! over by the upstream cart service.

use tower_sessions::cookie::time::Duration;
use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer};

use crate::config::{CheckoutConfig, MAX_CART_TTL};

/// Session cookie name.
pub const SESSION_COOKIE_NAME: &str = "checkout_session";

/// Create the session layer with an in-memory store.
///
/// Sessions expire after the same idle period as stored carts.
#[must_use]
pub fn create_session_layer(config: &CheckoutConfig) -> SessionManagerLayer<MemoryStore> {
    let inactivity =
        Duration::try_from(config.cart_ttl.min(MAX_CART_TTL)).unwrap_or(Duration::WEEK);

    SessionManagerLayer::new(MemoryStore::default())
        .with_name(SESSION_COOKIE_NAME)
        .with_expiry(Expiry::OnInactivity(inactivity))
        .with_secure(config.secure_cookies())
        .with_same_site(tower_sessions::cookie::SameSite::Lax)
        .with_http_only(true)
        .with_path("/")
}
