//! Record types assembled from Shopify API responses. Everything here is
//! request-scoped: built for one command reply and dropped afterwards.

use rust_decimal::Decimal;

/// One order condensed for the summary listing. The date and time fields are
/// kept as the shop-local strings shown to the user, not re-interpreted.
#[derive(Debug, Clone)]
pub struct OrderSummary {
    pub order_number: i64,
    pub year: String,
    pub month: String,
    pub day: String,
    /// HH:MM portion of the creation timestamp.
    pub time: String,
    /// Shipping country when present, else billing country, else unknown.
    pub country_code: Option<String>,
    /// Shopify's internal order id, needed for the detail endpoint.
    pub remote_id: i64,
}

/// Full detail for a single order lookup.
#[derive(Debug, Clone)]
pub struct OrderDetail {
    /// Shopify display name, e.g. `#1001`.
    pub display_name: String,
    pub customer_name: String,
    pub email: String,
    pub price: Decimal,
    pub country_code: String,
    /// Line items in their order of appearance.
    pub products: Vec<ProductLine>,
}

#[derive(Debug, Clone)]
pub struct ProductLine {
    pub name: String,
    pub quantity: i64,
}
