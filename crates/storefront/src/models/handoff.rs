//! Cart hand-off from the upstream cart service.

use checkout_core::{CustomerId, Order, OrderId};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Body of `PUT /checkout/cart`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartHandoff {
    /// Signed-in customer, if the shopper is not anonymous.
    #[serde(default)]
    pub customer_id: Option<CustomerId>,
    /// The cart snapshot.
    pub order: Order,
}

impl CartHandoff {
    /// The order ID the snapshot is stored under.
    ///
    /// # Errors
    ///
    /// Returns `AppError::BadRequest` if the order was never saved upstream.
    pub fn order_id(&self) -> Result<OrderId, AppError> {
        self.order
            .id
            .ok_or_else(|| AppError::BadRequest("order has no id".to_string()))
    }
}
