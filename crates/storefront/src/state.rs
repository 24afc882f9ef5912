//! Application state shared across handlers.

use std::sync::Arc;

use crate::checkout::CheckoutSettings;
use crate::config::{CheckoutConfig, MAX_CART_TTL};
use crate::services::{CartStore, CheckoutServices};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// configuration, the checkout collaborators and the cart store.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: CheckoutConfig,
    settings: CheckoutSettings,
    services: CheckoutServices,
    carts: CartStore,
}

impl AppState {
    /// Create a new application state.
    ///
    /// The cart store expires entries after the configured cart TTL.
    #[must_use]
    pub fn new(config: CheckoutConfig, services: CheckoutServices) -> Self {
        let settings = config.checkout_settings();
        let carts = CartStore::new(config.cart_ttl.min(MAX_CART_TTL));

        Self {
            inner: Arc::new(AppStateInner {
                config,
                settings,
                services,
                carts,
            }),
        }
    }

    /// Get a reference to the service configuration.
    #[must_use]
    pub fn config(&self) -> &CheckoutConfig {
        &self.inner.config
    }

    /// Get a reference to the view-state builder settings.
    #[must_use]
    pub fn settings(&self) -> &CheckoutSettings {
        &self.inner.settings
    }

    /// Get a reference to the checkout collaborators.
    #[must_use]
    pub fn services(&self) -> &CheckoutServices {
        &self.inner.services
    }

    /// Get a reference to the cart store.
    #[must_use]
    pub fn carts(&self) -> &CartStore {
        &self.inner.carts
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.inner.config)
            .field("carts", &self.inner.carts)
            .finish_non_exhaustive()
    }
}
