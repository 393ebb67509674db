//! # Product Lines
//!
//! Line items carried by a checkout link.
//! Field names serialize in camelCase to match the JavaScript request shape.

use serde::{Deserialize, Deserializer, Serialize};

/// `fulfillmentMethodId` value that requires a ship-to-office property
pub const SHIP_TO_OFFICE: &str = "ship-to-office";

/// Extra product option ("Color" for PPG paint and similar)
///
/// `key` maps to the option id, `value` to the partner identifier,
/// e.g. `{ key: "ppg-paint-color", value: "PPG1006-1" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductOption {
    pub key: String,
    pub value: String,
}

impl ProductOption {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// One item to add to the cart
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductLine {
    /// Namespace key for this product's parameters. Generated when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url_id: Option<String>,

    /// Product SKU
    pub sku: String,

    /// Storefront. Mixed shops send the user to multi-shop checkout.
    pub shop: String,

    /// If omitted, checkout picks the best distribution center for the property
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distribution_center_id: Option<String>,

    /// Fulfillment method enum value (e.g. "PICKUP", "UNSPECIFIED").
    /// Mutually exclusive with `fulfillment_method_id`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fulfillment_method: Option<String>,

    /// Fulfillment method id (e.g. "sibi-pickup", "ship-to-office").
    /// Mutually exclusive with `fulfillment_method`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fulfillment_method_id: Option<String>,

    /// Required iff `fulfillment_method_id` is "ship-to-office"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ship_to_office_property_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requested_fulfillment_date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method_id: Option<String>,

    /// Defaults to 1. A quantity of 1 (or 0) is left out of the link.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_of_measure: Option<String>,

    #[serde(
        default,
        deserialize_with = "nullable_vec",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub addon_ids: Vec<String>,

    /// Ignored when `addon_ids` is non-empty
    #[serde(
        default,
        deserialize_with = "nullable_vec",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub addon_titles: Vec<String>,

    #[serde(
        default,
        deserialize_with = "nullable_vec",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub options: Vec<ProductOption>,

    /// Skip the warranty prompt for this product
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offered_warranty: Option<bool>,
}

impl ProductLine {
    /// Create a product line with the two required fields
    pub fn new(sku: impl Into<String>, shop: impl Into<String>) -> Self {
        Self {
            sku: sku.into(),
            shop: shop.into(),
            ..Default::default()
        }
    }

    /// Builder: set an explicit url id
    pub fn with_url_id(mut self, url_id: impl Into<String>) -> Self {
        self.url_id = Some(url_id.into());
        self
    }

    pub fn with_distribution_center(mut self, id: impl Into<String>) -> Self {
        self.distribution_center_id = Some(id.into());
        self
    }

    pub fn with_fulfillment_method(mut self, method: impl Into<String>) -> Self {
        self.fulfillment_method = Some(method.into());
        self
    }

    pub fn with_fulfillment_method_id(mut self, id: impl Into<String>) -> Self {
        self.fulfillment_method_id = Some(id.into());
        self
    }

    /// Builder: ship to an office property. Sets the matching fulfillment method id.
    pub fn ship_to_office(mut self, property_id: impl Into<String>) -> Self {
        self.fulfillment_method_id = Some(SHIP_TO_OFFICE.to_string());
        self.ship_to_office_property_id = Some(property_id.into());
        self
    }

    pub fn with_requested_fulfillment_date(mut self, date: impl Into<String>) -> Self {
        self.requested_fulfillment_date = Some(date.into());
        self
    }

    pub fn with_payment_method(mut self, id: impl Into<String>) -> Self {
        self.payment_method_id = Some(id.into());
        self
    }

    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = Some(quantity);
        self
    }

    pub fn with_unit_of_measure(mut self, unit: impl Into<String>) -> Self {
        self.unit_of_measure = Some(unit.into());
        self
    }

    pub fn with_addon_id(mut self, id: impl Into<String>) -> Self {
        self.addon_ids.push(id.into());
        self
    }

    pub fn with_addon_title(mut self, title: impl Into<String>) -> Self {
        self.addon_titles.push(title.into());
        self
    }

    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.push(ProductOption::new(key, value));
        self
    }

    pub fn with_offered_warranty(mut self, offered: bool) -> Self {
        self.offered_warranty = Some(offered);
        self
    }

    /// Caller-supplied url id, treating "" as absent
    pub fn explicit_url_id(&self) -> Option<&str> {
        non_empty(&self.url_id)
    }

    /// Quantity to put in the link, if it differs from the implicit 1
    pub fn effective_quantity(&self) -> Option<u32> {
        self.quantity.filter(|q| *q > 1)
    }

    /// Addon titles that will be emitted (none when addon ids are present)
    pub fn effective_addon_titles(&self) -> &[String] {
        if self.addon_ids.is_empty() {
            &self.addon_titles
        } else {
            &[]
        }
    }

    pub fn is_ship_to_office(&self) -> bool {
        self.fulfillment_method_id.as_deref() == Some(SHIP_TO_OFFICE)
    }
}

/// Borrow an optional string, treating "" as absent
pub(crate) fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Accept `null` wherever a list is expected
pub(crate) fn nullable_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
