//! Checkout service configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//!
//! - `CHECKOUT_HOST` - Bind address (default: 127.0.0.1)
//! - `CHECKOUT_PORT` - Listen port (default: 3000)
//! - `CHECKOUT_BASE_URL` - Public URL (default: <http://localhost:3000>); `https` enables secure cookies
//! - `CHECKOUT_DEFAULT_LOCALE` - Locale for month names when the request names none (default: `en_US`)
//! - `CHECKOUT_EXPIRATION_YEARS` - Years offered for card expiration, 1-50 (default: 10)
//! - `CHECKOUT_CART_TTL_SECONDS` - Idle expiry of stored carts and sessions, 1 to 31536000 (default: 604800, one week)
//! - `CHECKOUT_CATALOG_PATH` - YAML catalog file (default: built-in catalog)
//! - `CHECKOUT_ORDER_INFO_HELP_MESSAGE` - Help text pointing back to the order info section
//! - `CHECKOUT_BILLING_INFO_HELP_MESSAGE` - Help text pointing back to the billing section
//! - `CHECKOUT_SHIPPING_INFO_HELP_MESSAGE` - Help text pointing back to the shipping section
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

use chrono::Locale;
use thiserror::Error;
use url::Url;

use crate::checkout::expiration::{FALLBACK_LOCALE, parse_locale};
use crate::checkout::{CheckoutSettings, HelpMessages};

const DEFAULT_ORDER_INFO_HELP: &str = "Please complete your contact information first.";
const DEFAULT_BILLING_INFO_HELP: &str = "Please complete your billing address first.";
const DEFAULT_SHIPPING_INFO_HELP: &str = "Please complete your shipping information first.";

const MAX_EXPIRATION_YEARS: usize = 50;

/// Longest idle expiry accepted for carts and sessions (one year).
pub const MAX_CART_TTL: Duration = Duration::from_secs(365 * 24 * 60 * 60);

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Checkout service configuration.
#[derive(Debug, Clone)]
pub struct CheckoutConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL
    pub base_url: Url,
    /// Fallback locale for month names
    pub default_locale: Locale,
    /// Number of card expiration years offered
    pub expiration_years: usize,
    /// Idle expiry of stored carts
    pub cart_ttl: Duration,
    /// Catalog file; the built-in catalog is used when absent
    pub catalog_path: Option<PathBuf>,
    /// Section help messages
    pub help_messages: HelpMessages,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment name
    pub sentry_environment: Option<String>,
}

impl CheckoutConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = Env(lookup);

        let host: IpAddr = env.parse_or("CHECKOUT_HOST", "127.0.0.1")?;
        let port: u16 = env.parse_or("CHECKOUT_PORT", "3000")?;
        let base_url: Url = env.parse_or("CHECKOUT_BASE_URL", "http://localhost:3000")?;

        let default_locale = match env.get_optional("CHECKOUT_DEFAULT_LOCALE") {
            Some(name) => parse_locale(&name).ok_or_else(|| {
                ConfigError::InvalidEnvVar(
                    "CHECKOUT_DEFAULT_LOCALE".to_string(),
                    format!("unknown locale '{name}'"),
                )
            })?,
            None => FALLBACK_LOCALE,
        };

        let expiration_years: usize = env.parse_or("CHECKOUT_EXPIRATION_YEARS", "10")?;
        if !(1..=MAX_EXPIRATION_YEARS).contains(&expiration_years) {
            return Err(ConfigError::InvalidEnvVar(
                "CHECKOUT_EXPIRATION_YEARS".to_string(),
                format!("must be between 1 and {MAX_EXPIRATION_YEARS}"),
            ));
        }

        let cart_ttl = Duration::from_secs(env.parse_or("CHECKOUT_CART_TTL_SECONDS", "604800")?);
        if cart_ttl.is_zero() || cart_ttl > MAX_CART_TTL {
            return Err(ConfigError::InvalidEnvVar(
                "CHECKOUT_CART_TTL_SECONDS".to_string(),
                format!("must be between 1 and {}", MAX_CART_TTL.as_secs()),
            ));
        }
        let catalog_path = env.get_optional("CHECKOUT_CATALOG_PATH").map(PathBuf::from);

        let help_messages = HelpMessages {
            order_info: Some(env.get_or_default(
                "CHECKOUT_ORDER_INFO_HELP_MESSAGE",
                DEFAULT_ORDER_INFO_HELP,
            )),
            billing_info: Some(env.get_or_default(
                "CHECKOUT_BILLING_INFO_HELP_MESSAGE",
                DEFAULT_BILLING_INFO_HELP,
            )),
            shipping_info: Some(env.get_or_default(
                "CHECKOUT_SHIPPING_INFO_HELP_MESSAGE",
                DEFAULT_SHIPPING_INFO_HELP,
            )),
        };

        Ok(Self {
            host,
            port,
            base_url,
            default_locale,
            expiration_years,
            cart_ttl,
            catalog_path,
            help_messages,
            sentry_dsn: env.get_optional("SENTRY_DSN"),
            sentry_environment: env.get_optional("SENTRY_ENVIRONMENT"),
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Whether cookies must be marked `Secure`.
    #[must_use]
    pub fn secure_cookies(&self) -> bool {
        self.base_url.scheme() == "https"
    }

    /// The settings the view-state builder needs.
    #[must_use]
    pub fn checkout_settings(&self) -> CheckoutSettings {
        CheckoutSettings {
            help_messages: self.help_messages.clone(),
            expiration_year_count: self.expiration_years,
        }
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Variable lookup with the usual accessors.
struct Env<F>(F);

impl<F> Env<F>
where
    F: Fn(&str) -> Option<String>,
{
    /// Get an optional variable. Blank values count as unset.
    fn get_optional(&self, key: &str) -> Option<String> {
        (self.0)(key).filter(|value| !value.trim().is_empty())
    }

    /// Get a variable with a default value.
    fn get_or_default(&self, key: &str, default: &str) -> String {
        self.get_optional(key)
            .unwrap_or_else(|| default.to_string())
    }

    /// Parse a variable, falling back to `default` when unset.
    fn parse_or<T>(&self, key: &str, default: &str) -> Result<T, ConfigError>
    where
        T: std::str::FromStr,
        T::Err: std::fmt::Display,
    {
        self.get_or_default(key, default)
            .trim()
            .parse::<T>()
            .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<CheckoutConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        CheckoutConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:3000");
        assert_eq!(config.base_url.as_str(), "http://localhost:3000/");
        assert!(!config.secure_cookies());
        assert_eq!(config.default_locale, Locale::en_US);
        assert_eq!(config.expiration_years, 10);
        assert_eq!(config.cart_ttl, Duration::from_secs(604_800));
        assert!(config.catalog_path.is_none());
        assert_eq!(
            config.help_messages.billing_info.as_deref(),
            Some(DEFAULT_BILLING_INFO_HELP)
        );
        assert!(config.sentry_dsn.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("CHECKOUT_HOST", "0.0.0.0"),
            ("CHECKOUT_PORT", "8080"),
            ("CHECKOUT_BASE_URL", "https://shop.example.com"),
            ("CHECKOUT_DEFAULT_LOCALE", "fr-FR"),
            ("CHECKOUT_EXPIRATION_YEARS", "15"),
            ("CHECKOUT_CATALOG_PATH", "/etc/checkout/catalog.yaml"),
            ("CHECKOUT_SHIPPING_INFO_HELP_MESSAGE", "Ship first"),
            ("SENTRY_DSN", "https://key@sentry.example.com/1"),
        ])
        .unwrap();

        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8080");
        assert!(config.secure_cookies());
        assert_eq!(config.default_locale, Locale::fr_FR);
        assert_eq!(config.checkout_settings().expiration_year_count, 15);
        assert_eq!(
            config.catalog_path.unwrap().to_str(),
            Some("/etc/checkout/catalog.yaml")
        );
        assert_eq!(
            config.help_messages.shipping_info.as_deref(),
            Some("Ship first")
        );
        assert!(config.sentry_dsn.is_some());
    }

    #[test]
    fn test_cart_ttl_upper_bound() {
        let config = load(&[("CHECKOUT_CART_TTL_SECONDS", "31536000")]).unwrap();
        assert_eq!(config.cart_ttl, MAX_CART_TTL);
    }

    #[test]
    fn test_blank_values_use_defaults() {
        let config = load(&[("CHECKOUT_PORT", "  "), ("SENTRY_DSN", "")]).unwrap();
        assert_eq!(config.port, 3000);
        assert!(config.sentry_dsn.is_none());
    }

    #[test]
    fn test_invalid_values() {
        for (key, value) in [
            ("CHECKOUT_HOST", "localhost"),
            ("CHECKOUT_PORT", "99999"),
            ("CHECKOUT_BASE_URL", "not a url"),
            ("CHECKOUT_DEFAULT_LOCALE", "klingon"),
            ("CHECKOUT_EXPIRATION_YEARS", "0"),
            ("CHECKOUT_EXPIRATION_YEARS", "51"),
            ("CHECKOUT_CART_TTL_SECONDS", "-1"),
            ("CHECKOUT_CART_TTL_SECONDS", "0"),
            ("CHECKOUT_CART_TTL_SECONDS", "31536001"),
            ("CHECKOUT_CART_TTL_SECONDS", "99999999999999"),
        ] {
            let err = load(&[(key, value)]).unwrap_err();
            let ConfigError::InvalidEnvVar(name, _) = err;
            assert_eq!(name, key);
        }
    }
}
