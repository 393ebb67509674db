//! # Checkout Link Builder
//!
//! Validates a [`CheckoutRequest`] and renders it as a checkout URL.
//!
//! ```text
//! CheckoutRequest ──► validate + allocate url ids ──► QueryParams ──► sort ──► Url
//! ```
//!
//! Building is pure: the same request always yields the same link, and a
//! failing product aborts the build without producing a partial URL.

use crate::config::LinkConfig;
use crate::encode::encode_request;
use crate::error::LinkResult;
use crate::params::QueryParams;
use crate::request::CheckoutRequest;
use tracing::{debug, instrument};
use url::Url;

/// Builds checkout links against a configured checkout host
#[derive(Debug, Clone, Default)]
pub struct CheckoutLinkBuilder {
    config: LinkConfig,
}

impl CheckoutLinkBuilder {
    pub fn new(config: LinkConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LinkConfig {
        &self.config
    }

    /// Sorted query parameters for `request`, before rendering
    pub fn encode(&self, request: &CheckoutRequest) -> LinkResult<QueryParams> {
        encode_request(request)
    }

    /// Build the checkout link as a parsed `Url`
    #[instrument(skip(self, request), fields(products = request.products.len()))]
    pub fn build_url(&self, request: &CheckoutRequest) -> LinkResult<Url> {
        let params = self.encode(request)?;
        let mut url = self.config.root_url();
        params.apply_to(&mut url);

        debug!(params = params.len(), "built checkout link");
        Ok(url)
    }

    /// Build the checkout link
    pub fn build(&self, request: &CheckoutRequest) -> LinkResult<String> {
        self.build_url(request).map(String::from)
    }
}

/// Build a checkout link against the production checkout app
pub fn build_checkout_link(request: &CheckoutRequest) -> LinkResult<String> {
    CheckoutLinkBuilder::default().build(request)
}
