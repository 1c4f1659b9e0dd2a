//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//!
//! - `GM_STORAGE_PATH` - JSON file backing the per-browser storage (default: `gamemania_storage.json`)
//! - `GM_FRAGMENT_BASE` - Base URL or directory for shared fragments (default: `public`)
//! - `GM_CHECKOUT_PATH` - Page the cart's "proceed" action navigates to (default: `checkout.html`)
//! - `GM_COUNTDOWN_SECONDS` - Offer countdown length (default: 18000, five hours)
//! - `GM_HELP_WHATSAPP_NUMBER` - Number behind the help widget's chat link
//! - `GM_CATALOG_PATH` - JSON catalog used by the search page (default: `catalog.json`)

use std::path::PathBuf;

use thiserror::Error;

use crate::countdown::DEFAULT_COUNTDOWN_SECS;
use crate::fragments::FragmentSource;
use crate::help::HelpContact;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// File backing the key-value storage
    pub storage_path: PathBuf,
    /// Base URL or directory holding `header.html`, `footer.html`, ...
    pub fragment_base: String,
    /// Checkout page path
    pub checkout_path: String,
    /// Countdown banner length in seconds
    pub countdown_seconds: u64,
    /// Help widget contact
    pub help: HelpContact,
    /// Search catalog file
    pub catalog_path: PathBuf,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            storage_path: PathBuf::from("gamemania_storage.json"),
            fragment_base: "public".to_string(),
            checkout_path: "checkout.html".to_string(),
            countdown_seconds: DEFAULT_COUNTDOWN_SECS,
            help: HelpContact::default(),
            catalog_path: PathBuf::from("catalog.json"),
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but invalid.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let countdown_seconds = match get("GM_COUNTDOWN_SECONDS") {
            Some(raw) => raw.trim().parse::<u64>().map_err(|e| {
                ConfigError::InvalidEnvVar("GM_COUNTDOWN_SECONDS".to_string(), e.to_string())
            })?,
            None => defaults.countdown_seconds,
        };

        let whatsapp_number = match get("GM_HELP_WHATSAPP_NUMBER") {
            Some(raw) if raw.chars().all(|c| c.is_ascii_digit()) => raw,
            Some(raw) => {
                return Err(ConfigError::InvalidEnvVar(
                    "GM_HELP_WHATSAPP_NUMBER".to_string(),
                    format!("expected digits only, got '{raw}'"),
                ));
            }
            None => defaults.help.whatsapp_number,
        };

        Ok(Self {
            storage_path: get("GM_STORAGE_PATH").map_or(defaults.storage_path, PathBuf::from),
            fragment_base: get("GM_FRAGMENT_BASE").unwrap_or(defaults.fragment_base),
            checkout_path: get("GM_CHECKOUT_PATH").unwrap_or(defaults.checkout_path),
            countdown_seconds,
            help: HelpContact {
                whatsapp_number,
                greeting: defaults.help.greeting,
            },
            catalog_path: get("GM_CATALOG_PATH").map_or(defaults.catalog_path, PathBuf::from),
        })
    }

    /// Fragment source for [`fragment_base`](Self::fragment_base).
    #[must_use]
    pub fn fragment_source(&self) -> FragmentSource {
        FragmentSource::from_location(&self.fragment_base)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = StorefrontConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, StorefrontConfig::default());
        assert_eq!(config.countdown_seconds, 18_000);
        assert_eq!(config.checkout_path, "checkout.html");
    }

    #[test]
    fn test_overrides() {
        let config = StorefrontConfig::from_lookup(lookup(&[
            ("GM_STORAGE_PATH", "/tmp/cart.json"),
            ("GM_FRAGMENT_BASE", "https://gamemania.example/"),
            ("GM_CHECKOUT_PATH", "/finalizar.html"),
            ("GM_COUNTDOWN_SECONDS", " 60 "),
            ("GM_HELP_WHATSAPP_NUMBER", "5511999990000"),
        ]))
        .unwrap();

        assert_eq!(config.storage_path, PathBuf::from("/tmp/cart.json"));
        assert_eq!(config.checkout_path, "/finalizar.html");
        assert_eq!(config.countdown_seconds, 60);
        assert_eq!(config.help.whatsapp_number, "5511999990000");
        assert!(matches!(
            config.fragment_source(),
            FragmentSource::Http { .. }
        ));
    }

    #[test]
    fn test_blank_values_use_defaults() {
        let config =
            StorefrontConfig::from_lookup(lookup(&[("GM_CHECKOUT_PATH", "  ")])).unwrap();
        assert_eq!(config.checkout_path, "checkout.html");
    }

    #[test]
    fn test_invalid_countdown() {
        let err = StorefrontConfig::from_lookup(lookup(&[("GM_COUNTDOWN_SECONDS", "5h")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(ref key, _) if key == "GM_COUNTDOWN_SECONDS"));
    }

    #[test]
    fn test_invalid_whatsapp_number() {
        let err =
            StorefrontConfig::from_lookup(lookup(&[("GM_HELP_WHATSAPP_NUMBER", "+55 37 9999")]))
                .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(_, _)));
    }
}
