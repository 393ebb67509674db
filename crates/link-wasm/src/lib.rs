//! # link-wasm
//!
//! WebAssembly bindings for checkout-link-rs.
//!
//! Exposes checkout link generation to browser and edge JavaScript callers
//! with the same camelCase request shape as the Rust API.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { buildCheckoutLink } from 'checkout-link-wasm';
//!
//! await init();
//!
//! const link = buildCheckoutLink({
//!   poNumber: '123456',
//!   products: [{ sku: '123', shop: 'ge', quantity: 2 }],
//! });
//!
//! try {
//!   buildCheckoutLink({ products: [{ sku: '1', shop: 'ge', fulfillmentMethodId: 'ship-to-office' }] });
//! } catch (e) {
//!   console.log(e.name); // "ShipToOfficeMismatch"
//! }
//! ```
//!
//! ## Building
//!
//! ```bash
//! wasm-pack build --target web
//! ```

use link_core::{CheckoutLinkBuilder, CheckoutRequest, LinkConfig, LinkError, LinkResult};
use wasm_bindgen::prelude::*;

/// Build a checkout link for the production checkout app.
///
/// `request` may be omitted, which yields the bare versioned link.
#[wasm_bindgen(js_name = buildCheckoutLink)]
pub fn build_checkout_link(request: JsValue) -> Result<String, JsValue> {
    let request = request_from_js(request).map_err(to_js_error)?;
    link_core::build_checkout_link(&request).map_err(to_js_error)
}

/// Build a checkout link against a custom checkout host.
#[wasm_bindgen(js_name = buildCheckoutLinkWithBase)]
pub fn build_checkout_link_with_base(request: JsValue, base_url: &str) -> Result<String, JsValue> {
    let request = request_from_js(request).map_err(to_js_error)?;
    build_with_base(&request, Some(base_url)).map_err(to_js_error)
}

/// Build a checkout link from a JSON-encoded request.
#[wasm_bindgen(js_name = buildCheckoutLinkFromJson)]
pub fn build_checkout_link_from_json(json: &str) -> Result<String, JsValue> {
    build_from_json(json, None).map_err(to_js_error)
}

/// Get library version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn request_from_js(value: JsValue) -> LinkResult<CheckoutRequest> {
    if value.is_undefined() || value.is_null() {
        return Ok(CheckoutRequest::default());
    }
    serde_wasm_bindgen::from_value(value).map_err(|e| LinkError::InvalidRequest(e.to_string()))
}

fn build_from_json(json: &str, base_url: Option<&str>) -> LinkResult<String> {
    let request: CheckoutRequest =
        serde_json::from_str(json).map_err(|e| LinkError::InvalidRequest(e.to_string()))?;
    build_with_base(&request, base_url)
}

fn build_with_base(request: &CheckoutRequest, base_url: Option<&str>) -> LinkResult<String> {
    let config = match base_url {
        Some(base_url) => LinkConfig::new(base_url)?,
        None => LinkConfig::default(),
    };
    CheckoutLinkBuilder::new(config).build(request)
}

/// JS `Error` named after the error kind, so callers can branch on `e.name`
fn to_js_error(err: LinkError) -> JsValue {
    let error = js_sys::Error::new(&err.to_string());
    error.set_name(err.kind());
    error.into()
}
