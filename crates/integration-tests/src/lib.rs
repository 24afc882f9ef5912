//! Integration tests for the checkout service.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p checkout-integration-tests
//! ```
//!
//! Each test spawns the full router (sessions, request IDs, tracing) on an
//! ephemeral port and talks to it over HTTP with a cookie-keeping client.

use std::net::SocketAddr;

use checkout_storefront::config::CheckoutConfig;
use checkout_storefront::routes::build_router;
use checkout_storefront::services::{CheckoutServices, InMemoryCatalog};
use checkout_storefront::state::AppState;
use reqwest::Client;
use tokio::net::TcpListener;

/// A checkout server running in the background of the test runtime.
#[derive(Debug)]
pub struct TestServer {
    addr: SocketAddr,
}

impl TestServer {
    /// Spawn a server backed by the built-in catalog and default config.
    ///
    /// # Panics
    ///
    /// Panics if the listener cannot be bound.
    pub async fn spawn() -> Self {
        Self::spawn_with(InMemoryCatalog::with_defaults(), |_| None).await
    }

    /// Spawn a server with a custom catalog and environment lookup.
    ///
    /// # Panics
    ///
    /// Panics if the configuration is invalid or the listener cannot be bound.
    pub async fn spawn_with<F>(catalog: InMemoryCatalog, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = CheckoutConfig::from_lookup(lookup).expect("invalid test configuration");
        let state = AppState::new(config, CheckoutServices::from_catalog(catalog));
        let app = build_router(state);

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind test listener");
        let addr = listener.local_addr().expect("listener has no address");

        tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        Self { addr }
    }

    /// Absolute URL for a path on this server.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }
}

/// An HTTP client that keeps the session cookie between requests.
///
/// # Panics
///
/// Panics if the client cannot be built.
#[must_use]
pub fn session_client() -> Client {
    Client::builder()
        .cookie_store(true)
        .build()
        .expect("Failed to create HTTP client")
}
