//! # Checkout Requests
//!
//! The order/checkout request a link is built from.

use crate::product::{nullable_vec, ProductLine};
use serde::{Deserialize, Serialize};

/// Contact information to prefill.
///
/// Providing any field selects "Manual Contact" in checkout. An empty
/// `ContactInfo` behaves the same as omitting it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl ContactInfo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, first: impl Into<String>, last: impl Into<String>) -> Self {
        self.first_name = Some(first.into());
        self.last_name = Some(last.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }
}

/// A request to build a checkout link
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    /// Address to search for. An exact match skips the property picker.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_search: Option<String>,

    /// Property to prefill. Takes priority over `address_search` when it resolves.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_instructions: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub po_number: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_info: Option<ContactInfo>,

    /// Whether the order can be edited after it is placed. Defaults to true.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_edit: Option<bool>,

    /// Where to send the user after the order is placed.
    /// Checkout appends the created order id(s) as repeated `orderId` parameters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_to: Option<String>,

    /// Origin tag for tracking (e.g. "smartjobs", "ordering-service")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// Products to add. With none, checkout opens the builder UI.
    #[serde(
        default,
        deserialize_with = "nullable_vec",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub products: Vec<ProductLine>,
}

impl CheckoutRequest {
    /// Create an empty request
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_address_search(mut self, address: impl Into<String>) -> Self {
        self.address_search = Some(address.into());
        self
    }

    pub fn with_property_id(mut self, property_id: impl Into<String>) -> Self {
        self.property_id = Some(property_id.into());
        self
    }

    pub fn with_special_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.special_instructions = Some(instructions.into());
        self
    }

    pub fn with_po_number(mut self, po_number: impl Into<String>) -> Self {
        self.po_number = Some(po_number.into());
        self
    }

    pub fn with_contact_info(mut self, contact: ContactInfo) -> Self {
        self.contact_info = Some(contact);
        self
    }

    pub fn with_can_edit(mut self, can_edit: bool) -> Self {
        self.can_edit = Some(can_edit);
        self
    }

    pub fn with_return_to(mut self, url: impl Into<String>) -> Self {
        self.return_to = Some(url.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Builder: add a product line
    pub fn with_product(mut self, product: ProductLine) -> Self {
        self.products.push(product);
        self
    }

    /// Add a product line
    pub fn add_product(&mut self, product: ProductLine) {
        self.products.push(product);
    }

    /// True only when editing was explicitly disabled
    pub fn edit_disabled(&self) -> bool {
        self.can_edit == Some(false)
    }

    /// Check if the request has no products
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
