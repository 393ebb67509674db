//! # Link Configuration
//!
//! Where generated checkout links point.
//! Defaults to the production checkout app; staging hosts can be set
//! explicitly or loaded from a TOML document.

use crate::error::{LinkError, LinkResult};
use serde::{Deserialize, Serialize};
use url::Url;

/// Production checkout application
pub const DEFAULT_BASE_URL: &str = "https://checkout.sibipro.com";

/// Link format version understood by the checkout app
pub const LINK_VERSION: &str = "3";

/// Checkout link configuration
///
/// Always holds a validated base URL: every constructor, including
/// deserialization, checks scheme and host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawLinkConfig")]
pub struct LinkConfig {
    /// Scheme and host of the checkout app. Path, query and fragment are ignored.
    base_url: Url,
}

/// Unvalidated shape of a config document
#[derive(Deserialize)]
struct RawLinkConfig {
    base_url: Url,
}

impl TryFrom<RawLinkConfig> for LinkConfig {
    type Error = LinkError;

    fn try_from(raw: RawLinkConfig) -> LinkResult<Self> {
        let config = Self {
            base_url: raw.base_url,
        };
        config.validate()?;
        Ok(config)
    }
}

impl LinkConfig {
    /// Create config for a custom checkout host
    pub fn new(base_url: &str) -> LinkResult<Self> {
        let base_url = Url::parse(base_url).map_err(|e| {
            LinkError::Configuration(format!("invalid base_url {:?}: {}", base_url, e))
        })?;
        let config = Self { base_url };
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string
    ///
    /// ```toml
    /// base_url = "https://checkout.staging.example.com"
    /// ```
    pub fn from_toml(toml_str: &str) -> LinkResult<Self> {
        toml::from_str(toml_str)
            .map_err(|e| LinkError::Configuration(format!("failed to parse config: {}", e)))
    }

    /// Configured checkout app URL
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Builder: set base URL
    pub fn with_base_url(mut self, base_url: Url) -> LinkResult<Self> {
        self.base_url = base_url;
        self.validate()?;
        Ok(self)
    }

    /// Links are only served over http(s) from a real host
    fn validate(&self) -> LinkResult<()> {
        match self.base_url.scheme() {
            "http" | "https" => {}
            other => {
                return Err(LinkError::Configuration(format!(
                    "base_url scheme must be http or https, got {}",
                    other
                )))
            }
        }

        if self.base_url.host_str().map_or(true, str::is_empty) {
            return Err(LinkError::Configuration(
                "base_url must have a host".to_string(),
            ));
        }

        Ok(())
    }

    /// Base URL reduced to `scheme://host[:port]/` with no query
    pub fn root_url(&self) -> Url {
        let mut url = self.base_url.clone();
        url.set_path("/");
        url.set_query(None);
        url.set_fragment(None);
        url
    }

    /// Check if pointing at the production checkout app
    pub fn is_production(&self) -> bool {
        self.base_url.host_str() == Some("checkout.sibipro.com")
    }
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
        }
    }
}
