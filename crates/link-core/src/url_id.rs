//! # URL-ID Allocation
//!
//! Every product's parameters are namespaced under a key. Callers may pick
//! the key (`urlId`); products without one get the next integer above the
//! largest numeric key in the request. Counting runs in `u128` above a
//! `u64` maximum, so a generated key never wraps onto a caller's key.

use crate::product::ProductLine;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use tracing::debug;

/// Characters left literal by `encodeURIComponent`
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Largest caller-supplied url id that reads as a non-negative integer, or 0
pub fn max_numeric_url_id(products: &[ProductLine]) -> u64 {
    products
        .iter()
        .filter_map(ProductLine::explicit_url_id)
        .filter_map(|id| id.trim().parse::<u64>().ok())
        .max()
        .unwrap_or(0)
}

/// Effective (unencoded) url id for every product, in input order
pub fn allocate_url_ids(products: &[ProductLine]) -> Vec<String> {
    let mut next = u128::from(max_numeric_url_id(products));

    products
        .iter()
        .map(|product| match product.explicit_url_id() {
            Some(id) => id.to_string(),
            None => {
                next += 1;
                debug!(url_id = %next, sku = %product.sku, "generated url id");
                next.to_string()
            }
        })
        .collect()
}

/// Percent-encode a url id for use as a parameter name prefix
pub fn encode_url_id(url_id: &str) -> String {
    utf8_percent_encode(url_id, URI_COMPONENT).to_string()
}
