//! # Link Error Types
//!
//! Typed error handling for the checkout link builder.
//! All build operations return `Result<T, LinkError>`.

use thiserror::Error;

/// Core error type for checkout link operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LinkError {
    /// A product set both `fulfillmentMethod` and `fulfillmentMethodId`
    #[error("fulfillmentMethod and fulfillmentMethodId are mutually exclusive, received both (product {url_id})")]
    MutuallyExclusiveFulfillmentFields { url_id: String },

    /// `shipToOfficePropertyId` and `fulfillmentMethodId` disagree
    #[error("shipToOfficePropertyId must be provided if and only if fulfillmentMethodId is set to `ship-to-office` (product {url_id})")]
    ShipToOfficeMismatch { url_id: String },

    /// Configuration errors (bad base URL, unreadable config document)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Request payload could not be read into a `CheckoutRequest`
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl LinkError {
    /// Stable machine-readable name of the error kind
    pub fn kind(&self) -> &'static str {
        match self {
            LinkError::MutuallyExclusiveFulfillmentFields { .. } => {
                "MutuallyExclusiveFulfillmentFields"
            }
            LinkError::ShipToOfficeMismatch { .. } => "ShipToOfficeMismatch",
            LinkError::Configuration(_) => "Configuration",
            LinkError::InvalidRequest(_) => "InvalidRequest",
        }
    }

    /// Returns true if this error came from validating a product line
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            LinkError::MutuallyExclusiveFulfillmentFields { .. }
                | LinkError::ShipToOfficeMismatch { .. }
        )
    }

    /// Key of the offending product, for product validation errors
    pub fn url_id(&self) -> Option<&str> {
        match self {
            LinkError::MutuallyExclusiveFulfillmentFields { url_id }
            | LinkError::ShipToOfficeMismatch { url_id } => Some(url_id),
            _ => None,
        }
    }
}

/// Result type alias for link operations
pub type LinkResult<T> = Result<T, LinkError>;
