//! Render the checkout view model for a cart snapshot.
//!
//! # Usage
//!
//! ```bash
//! checkout-cli render --cart cart.json --locale de_DE --edit-billing
//! ```

use std::io::Write;
use std::path::{Path, PathBuf};

use checkout_core::{CustomerId, Order};
use checkout_storefront::checkout::expiration::parse_locale;
use checkout_storefront::checkout::{CheckoutParams, CheckoutRequest, CheckoutViewStateBuilder};
use checkout_storefront::config::{CheckoutConfig, ConfigError};
use checkout_storefront::services::{CatalogError, CheckoutServices, InMemoryCatalog};
use chrono::Datelike;
use thiserror::Error;

/// Errors rendering a view model.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("failed to read cart {path}: {source}")]
    ReadCart {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid cart JSON: {0}")]
    ParseCart(#[from] serde_json::Error),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error("unknown locale '{0}'")]
    UnknownLocale(String),
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

/// What to render.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    pub cart: PathBuf,
    pub catalog: Option<PathBuf>,
    pub customer: Option<CustomerId>,
    pub edit_order_info: bool,
    pub edit_billing: bool,
    pub edit_shipping: bool,
    pub payment_error: Option<String>,
    pub locale: Option<String>,
    pub year: Option<i32>,
}

/// Render with settings from the environment.
///
/// # Errors
///
/// Returns an error if the configuration, cart or catalog is invalid, or
/// the output cannot be written.
pub async fn render(options: &RenderOptions, out: &mut impl Write) -> Result<(), RenderError> {
    let config = CheckoutConfig::from_env()?;
    render_with_config(options, &config, out).await
}

/// Render with explicit settings.
///
/// # Errors
///
/// Returns an error if the cart or catalog is invalid, or the output
/// cannot be written.
pub async fn render_with_config(
    options: &RenderOptions,
    config: &CheckoutConfig,
    out: &mut impl Write,
) -> Result<(), RenderError> {
    let cart = read_cart(&options.cart).await?;

    let catalog_path = options.catalog.as_ref().or(config.catalog_path.as_ref());
    let catalog = match catalog_path {
        Some(path) => InMemoryCatalog::load(path).await?,
        None => InMemoryCatalog::with_defaults(),
    };
    let services = CheckoutServices::from_catalog(catalog);

    let locale = match options.locale.as_deref() {
        Some(name) => {
            parse_locale(name).ok_or_else(|| RenderError::UnknownLocale(name.to_string()))?
        }
        None => config.default_locale,
    };

    let params = CheckoutParams {
        edit_order_info: options.edit_order_info,
        edit_billing: options.edit_billing,
        edit_shipping: options.edit_shipping,
        payment_processing_error: options.payment_error.clone(),
    };

    let settings = config.checkout_settings();
    let request = CheckoutRequest {
        cart: Some(&cart),
        customer_id: options.customer,
        params: &params,
        locale,
        current_year: options.year.unwrap_or_else(|| chrono::Utc::now().year()),
    };
    let view = CheckoutViewStateBuilder::new(&services, &settings).build(&request);

    tracing::debug!(order_id = ?cart.id, "Rendered checkout view");

    serde_json::to_writer_pretty(&mut *out, &view).map_err(std::io::Error::from)?;
    writeln!(out)?;
    Ok(())
}

async fn read_cart(path: &Path) -> Result<Order, RenderError> {
    let json = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| RenderError::ReadCart {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(serde_json::from_str(&json)?)
}
