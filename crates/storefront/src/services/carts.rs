//! Session-scoped cart snapshots.
//!
//! The upstream cart service owns carts. It hands the current snapshot to
//! the checkout service, which keeps it here under a key minted for the
//! handing-off session until that session goes idle. Two sessions checking
//! out the same order hold separate snapshots. Handlers acquire the
//! snapshot once per request and pass it by reference; nothing in this
//! crate mutates a stored cart.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use checkout_core::Order;
use moka::future::Cache;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum number of carts held at once.
const MAX_CARTS: u64 = 10_000;

/// Opaque key of one session's cart snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CartKey(Uuid);

impl CartKey {
    /// Mint a fresh, unguessable key.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for CartKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// In-memory cart snapshot store with idle expiry.
#[derive(Clone)]
pub struct CartStore {
    carts: Cache<CartKey, Arc<Order>>,
}

impl CartStore {
    /// Create a store whose entries expire after `time_to_idle` without access.
    #[must_use]
    pub fn new(time_to_idle: Duration) -> Self {
        Self {
            carts: Cache::builder()
                .max_capacity(MAX_CARTS)
                .time_to_idle(time_to_idle)
                .build(),
        }
    }

    /// Fetch the snapshot stored under `key`.
    pub async fn get(&self, key: CartKey) -> Option<Arc<Order>> {
        self.carts.get(&key).await
    }

    /// Replace the snapshot stored under `key`.
    pub async fn put(&self, key: CartKey, order: Order) {
        self.carts.insert(key, Arc::new(order)).await;
    }

    /// Drop the snapshot stored under `key`.
    pub async fn remove(&self, key: CartKey) {
        self.carts.invalidate(&key).await;
    }
}

impl fmt::Debug for CartStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartStore")
            .field("entries", &self.carts.entry_count())
            .finish()
    }
}
