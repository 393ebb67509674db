//! # link-core
//!
//! Builds prefilled checkout links for the Sibi checkout app.
//!
//! This crate provides:
//! - `CheckoutRequest`, `ContactInfo`, and `ProductLine` describing the order
//! - `CheckoutLinkBuilder` and `build_checkout_link` to turn them into a URL
//! - `QueryParams`, the ordered multi-map links are rendered from
//! - `LinkConfig` for pointing links at a non-production host
//! - `LinkError` for typed error handling
//!
//! ## Example
//!
//! ```rust
//! use link_core::{build_checkout_link, CheckoutRequest, ProductLine};
//!
//! let request = CheckoutRequest::new()
//!     .with_po_number("123456")
//!     .with_product(ProductLine::new("123", "ge").with_quantity(2));
//!
//! let link = build_checkout_link(&request).unwrap();
//! assert_eq!(
//!     link,
//!     "https://checkout.sibipro.com/?1.quantity=2&1.shop=ge&1.sku=123&poNumber=123456&v=3"
//! );
//! ```

pub mod builder;
pub mod config;
pub mod encode;
pub mod error;
pub mod params;
pub mod product;
pub mod request;
pub mod url_id;
pub mod validate;

// Re-exports for convenience
pub use builder::{build_checkout_link, CheckoutLinkBuilder};
pub use config::{LinkConfig, DEFAULT_BASE_URL, LINK_VERSION};
pub use encode::encode_request;
pub use error::{LinkError, LinkResult};
pub use params::QueryParams;
pub use product::{ProductLine, ProductOption, SHIP_TO_OFFICE};
pub use request::{CheckoutRequest, ContactInfo};
pub use url_id::{allocate_url_ids, encode_url_id};
pub use validate::validate_product;
