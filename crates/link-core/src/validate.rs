//! Pairing rules checked on each product before it is encoded.

use crate::error::{LinkError, LinkResult};
use crate::product::{non_empty, ProductLine};
use tracing::debug;

/// Check a product's fulfillment fields. `url_id` is only used for reporting.
pub fn validate_product(product: &ProductLine, url_id: &str) -> LinkResult<()> {
    if non_empty(&product.fulfillment_method).is_some()
        && non_empty(&product.fulfillment_method_id).is_some()
    {
        debug!(url_id, "both fulfillmentMethod and fulfillmentMethodId set");
        return Err(LinkError::MutuallyExclusiveFulfillmentFields {
            url_id: url_id.to_string(),
        });
    }

    let has_office = non_empty(&product.ship_to_office_property_id).is_some();
    if has_office != product.is_ship_to_office() {
        debug!(url_id, has_office, "ship-to-office fields disagree");
        return Err(LinkError::ShipToOfficeMismatch {
            url_id: url_id.to_string(),
        });
    }

    Ok(())
}
