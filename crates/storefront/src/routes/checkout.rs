//! Checkout route handlers.
//!
//! The upstream cart service hands the current cart over with
//! `PUT /checkout/cart`; the snapshot goes into the cart store under a key
//! owned by the session. `GET /checkout` then renders the view model for
//! whatever cart the session points at.

use axum::{
    Json,
    extract::{Query, State},
    http::{HeaderMap, StatusCode, header::ACCEPT_LANGUAGE},
};
use checkout_core::CustomerId;
use chrono::Datelike;
use tower_sessions::Session;
use tracing::instrument;

use crate::checkout::expiration::negotiate_locale;
use crate::checkout::{CheckoutParams, CheckoutRequest, CheckoutViewModel, CheckoutViewStateBuilder};
use crate::error::{Result, add_breadcrumb, set_sentry_customer};
use crate::models::{CartHandoff, session_keys};
use crate::services::CartKey;
use crate::state::AppState;

// =============================================================================
// Session Helpers
// =============================================================================

/// Get the cart key from the session.
async fn get_cart_key(session: &Session) -> Result<Option<CartKey>> {
    Ok(session.get::<CartKey>(session_keys::CART_KEY).await?)
}

/// Get the customer ID from the session.
async fn get_customer_id(session: &Session) -> Result<Option<CustomerId>> {
    Ok(session.get::<CustomerId>(session_keys::CUSTOMER_ID).await?)
}

// =============================================================================
// Handlers
// =============================================================================

/// Render the checkout view model for the session cart.
#[instrument(skip(state, headers, session))]
pub async fn show(
    State(state): State<AppState>,
    Query(query): Query<Vec<(String, String)>>,
    headers: HeaderMap,
    session: Session,
) -> Result<Json<CheckoutViewModel>> {
    let params = CheckoutParams::from_query_pairs(query);
    let customer_id = get_customer_id(&session).await?;
    let cart = match get_cart_key(&session).await? {
        Some(cart_key) => {
            let cart = state.carts().get(cart_key).await;
            if cart.is_none() {
                tracing::debug!(cart_key = %cart_key, "Session cart expired from store");
            }
            cart
        }
        None => None,
    };

    let accept_language = headers
        .get(ACCEPT_LANGUAGE)
        .and_then(|value| value.to_str().ok());
    let locale = negotiate_locale(accept_language, state.config().default_locale);

    let request = CheckoutRequest {
        cart: cart.as_deref(),
        customer_id,
        params: &params,
        locale,
        current_year: chrono::Utc::now().year(),
    };
    let view = CheckoutViewStateBuilder::new(state.services(), state.settings()).build(&request);

    tracing::debug!(
        sections = view.checkout_sections.len(),
        has_cart = cart.is_some(),
        "Built checkout view"
    );

    Ok(Json(view))
}

/// Store a cart snapshot and point the session at it.
#[instrument(skip(state, session, handoff))]
pub async fn store_cart(
    State(state): State<AppState>,
    session: Session,
    Json(handoff): Json<CartHandoff>,
) -> Result<StatusCode> {
    let cart_id = handoff.order_id()?;

    let cart_key = match get_cart_key(&session).await? {
        Some(cart_key) => cart_key,
        None => {
            let cart_key = CartKey::generate();
            session.insert(session_keys::CART_KEY, cart_key).await?;
            cart_key
        }
    };

    match handoff.customer_id {
        Some(customer_id) => {
            session.insert(session_keys::CUSTOMER_ID, customer_id).await?;
            set_sentry_customer(&customer_id);
        }
        None => {
            session.remove::<CustomerId>(session_keys::CUSTOMER_ID).await?;
        }
    }

    state.carts().put(cart_key, handoff.order).await;

    let cart_label = cart_id.to_string();
    add_breadcrumb("checkout", "Cart handed off", &[("cart_id", cart_label.as_str())]);
    tracing::info!(cart_id = %cart_id, "Stored checkout cart");

    Ok(StatusCode::NO_CONTENT)
}

/// Drop the session cart.
#[instrument(skip(state, session))]
pub async fn forget_cart(State(state): State<AppState>, session: Session) -> Result<StatusCode> {
    if let Some(cart_key) = session.remove::<CartKey>(session_keys::CART_KEY).await? {
        state.carts().remove(cart_key).await;
        tracing::info!(cart_key = %cart_key, "Forgot checkout cart");
    }
    Ok(StatusCode::NO_CONTENT)
}
