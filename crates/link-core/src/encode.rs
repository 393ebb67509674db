//! # Parameter Encoding
//!
//! Maps a checkout request onto query parameters.
//!
//! Top-level fields use their own names (`poNumber`, `email`, ...). Product
//! fields are namespaced under the product's encoded url id, e.g.
//! `1.sku`, `first.addonId`.

use crate::config::LINK_VERSION;
use crate::error::LinkResult;
use crate::params::QueryParams;
use crate::product::{non_empty, ProductLine};
use crate::request::CheckoutRequest;
use crate::url_id::{allocate_url_ids, encode_url_id};
use crate::validate::validate_product;

/// Encode a whole request into sorted query parameters
pub fn encode_request(request: &CheckoutRequest) -> LinkResult<QueryParams> {
    let mut params = QueryParams::new();
    params.set("v", LINK_VERSION);

    encode_top_level(request, &mut params);

    let url_ids = allocate_url_ids(&request.products);
    for (product, url_id) in request.products.iter().zip(&url_ids) {
        validate_product(product, url_id)?;
        encode_product(product, &encode_url_id(url_id), &mut params);
    }

    params.sort();
    Ok(params)
}

fn encode_top_level(request: &CheckoutRequest, params: &mut QueryParams) {
    params.set_opt("addressSearch", non_empty(&request.address_search));
    params.set_opt("specialInstructions", non_empty(&request.special_instructions));
    params.set_opt("poNumber", non_empty(&request.po_number));

    if let Some(ref contact) = request.contact_info {
        params.set_opt("firstName", non_empty(&contact.first_name));
        params.set_opt("lastName", non_empty(&contact.last_name));
        params.set_opt("email", non_empty(&contact.email));
        params.set_opt("phone", non_empty(&contact.phone));
    }

    params.set_opt("returnTo", non_empty(&request.return_to));
    params.set_opt("source", non_empty(&request.source));
    params.set_opt("propertyId", non_empty(&request.property_id));

    if request.edit_disabled() {
        params.set("canEdit", "false");
    }
}

/// Write one product's parameters under `key` (already percent-encoded)
fn encode_product(product: &ProductLine, key: &str, params: &mut QueryParams) {
    let name = |suffix: &str| format!("{}.{}", key, suffix);

    params.set(name("sku"), product.sku.as_str());
    params.set(name("shop"), product.shop.as_str());

    let scalars = [
        ("distributionCenterId", &product.distribution_center_id),
        ("fulfillmentMethod", &product.fulfillment_method),
        ("fulfillmentMethodId", &product.fulfillment_method_id),
        ("shipToOfficePropertyId", &product.ship_to_office_property_id),
        ("requestedFulfillmentDate", &product.requested_fulfillment_date),
        ("paymentMethodId", &product.payment_method_id),
    ];
    for (suffix, value) in scalars {
        params.set_opt(name(suffix), non_empty(value));
    }

    if let Some(quantity) = product.effective_quantity() {
        params.set(name("quantity"), quantity.to_string());
    }
    params.set_opt(name("unit"), non_empty(&product.unit_of_measure));
    if product.offered_warranty == Some(true) {
        params.set(name("offeredWarranty"), "true");
    }

    for addon_id in &product.addon_ids {
        params.append(name("addonId"), addon_id.as_str());
    }
    for addon_title in product.effective_addon_titles() {
        params.append(name("addonTitle"), addon_title.as_str());
    }
    for option in &product.options {
        params.append(name("option"), format!("{},{}", option.key, option.value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LinkError;
    use crate::request::ContactInfo;

    fn product() -> ProductLine {
        ProductLine::new("123", "ge")
    }

    #[test]
    fn test_empty_request_only_has_version() {
        let params = encode_request(&CheckoutRequest::new()).unwrap();
        assert_eq!(params.into_pairs(), vec![("v".to_string(), "3".to_string())]);
    }

    #[test]
    fn test_top_level_fields() {
        let request = CheckoutRequest::new()
            .with_address_search("123 Main St")
            .with_special_instructions("Leave at gate")
            .with_po_number("PO-1")
            .with_contact_info(
                ContactInfo::new()
                    .with_name("John", "Doe")
                    .with_email("john.doe@example.com")
                    .with_phone("123-456-7890"),
            )
            .with_return_to("https://sibipro.com/asdf")
            .with_source("smartjobs")
            .with_property_id("prop-1");

        let params = encode_request(&request).unwrap();
        assert_eq!(
            params.names(),
            vec![
                "addressSearch",
                "email",
                "firstName",
                "lastName",
                "phone",
                "poNumber",
                "propertyId",
                "returnTo",
                "source",
                "specialInstructions",
                "v",
            ]
        );
        assert_eq!(params.get("firstName"), Some("John"));
    }

    #[test]
    fn test_empty_strings_are_not_emitted() {
        let request = CheckoutRequest::new()
            .with_po_number("")
            .with_contact_info(ContactInfo::new().with_email(""));
        assert_eq!(encode_request(&request).unwrap().names(), vec!["v"]);
    }

    #[test]
    fn test_can_edit() {
        let params = encode_request(&CheckoutRequest::new().with_can_edit(false)).unwrap();
        assert_eq!(params.get("canEdit"), Some("false"));

        let params = encode_request(&CheckoutRequest::new().with_can_edit(true)).unwrap();
        assert_eq!(params.get("canEdit"), None);
    }

    #[test]
    fn test_product_fields() {
        let request = CheckoutRequest::new().with_product(
            product()
                .with_distribution_center("dc1")
                .with_fulfillment_method("PICKUP")
                .with_requested_fulfillment_date("2024-12-31")
                .with_payment_method("pm1")
                .with_quantity(2)
                .with_unit_of_measure("Ozz")
                .with_offered_warranty(true),
        );

        let params = encode_request(&request).unwrap();
        assert_eq!(params.get("1.sku"), Some("123"));
        assert_eq!(params.get("1.shop"), Some("ge"));
        assert_eq!(params.get("1.distributionCenterId"), Some("dc1"));
        assert_eq!(params.get("1.fulfillmentMethod"), Some("PICKUP"));
        assert_eq!(params.get("1.requestedFulfillmentDate"), Some("2024-12-31"));
        assert_eq!(params.get("1.paymentMethodId"), Some("pm1"));
        assert_eq!(params.get("1.quantity"), Some("2"));
        assert_eq!(params.get("1.unit"), Some("Ozz"));
        assert_eq!(params.get("1.offeredWarranty"), Some("true"));
    }

    #[test]
    fn test_warranty_false_not_emitted() {
        let request =
            CheckoutRequest::new().with_product(product().with_offered_warranty(false));
        assert_eq!(encode_request(&request).unwrap().get("1.offeredWarranty"), None);
    }

    #[test]
    fn test_repeated_fields() {
        let request = CheckoutRequest::new().with_product(
            product()
                .with_addon_title("Install")
                .with_option("color", "red")
                .with_option("finish", "matte"),
        );

        let params = encode_request(&request).unwrap();
        assert_eq!(params.get_all("1.addonTitle"), vec!["Install"]);
        assert_eq!(params.get_all("1.option"), vec!["color,red", "finish,matte"]);
    }

    #[test]
    fn test_addon_titles_dropped_when_ids_present() {
        let request = CheckoutRequest::new().with_product(
            product()
                .with_addon_id("addon1")
                .with_addon_id("addon2")
                .with_addon_title("Install"),
        );

        let params = encode_request(&request).unwrap();
        assert_eq!(params.get_all("1.addonId"), vec!["addon1", "addon2"]);
        assert!(params.get_all("1.addonTitle").is_empty());
    }

    #[test]
    fn test_duplicate_url_ids_merge() {
        let request = CheckoutRequest::new()
            .with_product(ProductLine::new("sku1", "ge").with_url_id("a").with_addon_id("x"))
            .with_product(ProductLine::new("sku2", "ge").with_url_id("a").with_addon_id("y"));

        let params = encode_request(&request).unwrap();
        assert_eq!(params.get_all("a.sku"), vec!["sku2"]);
        assert_eq!(params.get_all("a.addonId"), vec!["x", "y"]);
    }

    #[test]
    fn test_validation_aborts_whole_request() {
        let request = CheckoutRequest::new()
            .with_product(product())
            .with_product(product().with_fulfillment_method_id("ship-to-office"));

        assert_eq!(
            encode_request(&request),
            Err(LinkError::ShipToOfficeMismatch {
                url_id: "2".into()
            })
        );
    }
}
