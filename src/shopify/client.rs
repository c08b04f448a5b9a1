//! Thin typed client for the Shopify Admin REST API. Every operation is a
//! single GET authenticated by the access-token header; any non-2xx response
//! becomes an error and aborts the command that triggered the call.

use chrono::NaiveDate;
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::models::{OrderDetail, OrderSummary, ProductLine};
use crate::constants::RECENT_ORDERS_PAGE_LIMIT;
use crate::error::{BotError, Result};

const ACCESS_TOKEN_HEADER: &str = "X-Shopify-Access-Token";

pub struct ShopifyClient {
    client: Client,
    base_url: String,
    token: String,
}

impl ShopifyClient {
    /// A trailing slash on `base_url` is optional.
    pub fn new(base_url: &str, token: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        }
    }

    async fn fetch_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<T> {
        let url = format!("{}/{}", self.base_url, path);
        debug!(%url, "GET");
        let response = self
            .client
            .get(&url)
            .header(ACCESS_TOKEN_HEADER, self.token.as_str())
            .query(params)
            .send()
            .await?;
        debug!(status = %response.status(), %url, "response");
        Ok(response.error_for_status()?.json::<T>().await?)
    }

    /// Count of orders currently open in the shop.
    pub async fn open_order_count(&self) -> Result<i64> {
        let response: CountResponse = self
            .fetch_json("orders/count.json", &[("status", "open")])
            .await?;
        Ok(response.count)
    }

    /// All open orders condensed for the listing, in the order Shopify
    /// returns them (newest first).
    pub async fn list_open_orders(&self) -> Result<Vec<OrderSummary>> {
        let response: OrdersResponse = self
            .fetch_json("orders.json", &[("status", "open")])
            .await?;
        Ok(response.orders.into_iter().map(summarize).collect())
    }

    /// One page of recent orders of any status.
    pub async fn list_recent_orders(&self, limit: u16) -> Result<Vec<OrderSummary>> {
        let limit = limit.to_string();
        let response: OrdersResponse = self
            .fetch_json("orders.json", &[("status", "any"), ("limit", limit.as_str())])
            .await?;
        Ok(response.orders.into_iter().map(summarize).collect())
    }

    /// Count of orders closed and created on or after `since`.
    pub async fn closed_order_count(&self, since: NaiveDate) -> Result<i64> {
        let since = since.to_string();
        let response: CountResponse = self
            .fetch_json(
                "orders/count.json",
                &[("status", "closed"), ("created_at_min", since.as_str())],
            )
            .await?;
        Ok(response.count)
    }

    /// Looks an order number up among open orders first, then one page of
    /// recent orders, and fetches the full detail on a hit. A miss in both
    /// listings is a normal outcome, not an error.
    pub async fn get_order(&self, order_number: i64) -> Result<Option<OrderDetail>> {
        let mut hit = self
            .list_open_orders()
            .await?
            .into_iter()
            .find(|order| order.order_number == order_number);
        if hit.is_none() {
            hit = self
                .list_recent_orders(RECENT_ORDERS_PAGE_LIMIT)
                .await?
                .into_iter()
                .find(|order| order.order_number == order_number);
        }
        let Some(summary) = hit else {
            return Ok(None);
        };

        let response: OrderEnvelope = self
            .fetch_json(&format!("orders/{}.json", summary.remote_id), &[])
            .await?;
        Ok(Some(response.order.into()))
    }

    /// Current Shopify Payments balance.
    pub async fn balance(&self) -> Result<Decimal> {
        let response: BalanceResponse = self
            .fetch_json("shopify_payments/balance.json", &[])
            .await?;
        response
            .balance
            .first()
            .map(|entry| entry.amount)
            .ok_or(BotError::MalformedResponse("balance list was empty"))
    }
}

fn summarize(order: WireOrder) -> OrderSummary {
    let (year, month, day, time) = split_created_at(&order.created_at);
    let country_code = order
        .shipping_address
        .and_then(|address| address.country_code)
        .or_else(|| order.billing_address.and_then(|address| address.country_code));
    OrderSummary {
        order_number: order.order_number,
        year,
        month,
        day,
        time,
        country_code,
        remote_id: order.id,
    }
}

/// Shopify timestamps are RFC 3339 in the shop's local offset; the listing
/// shows the date parts and HH:MM verbatim, so slice them out positionally.
fn split_created_at(created_at: &str) -> (String, String, String, String) {
    let part =
        |range: std::ops::Range<usize>| created_at.get(range).unwrap_or_default().to_string();
    (part(0..4), part(5..7), part(8..10), part(11..16))
}

#[derive(Deserialize)]
struct CountResponse {
    count: i64,
}

#[derive(Deserialize)]
struct OrdersResponse {
    orders: Vec<WireOrder>,
}

#[derive(Deserialize)]
struct WireOrder {
    id: i64,
    order_number: i64,
    created_at: String,
    shipping_address: Option<WireAddress>,
    billing_address: Option<WireAddress>,
}

#[derive(Deserialize)]
struct WireAddress {
    country_code: Option<String>,
}

#[derive(Deserialize)]
struct OrderEnvelope {
    order: WireOrderDetail,
}

#[derive(Deserialize)]
struct BalanceResponse {
    balance: Vec<WireBalance>,
}

#[derive(Deserialize)]
struct WireBalance {
    amount: Decimal,
}

// The detail endpoint must carry a shipping address, a contact email and a
// shop-money total; an order payload without them is rejected at decode time.
#[derive(Deserialize)]
struct WireOrderDetail {
    name: String,
    contact_email: String,
    total_line_items_price_set: WirePriceSet,
    shipping_address: WireDetailAddress,
    line_items: Vec<WireLineItem>,
}

#[derive(Deserialize)]
struct WirePriceSet {
    shop_money: WireMoney,
}

#[derive(Deserialize)]
struct WireMoney {
    amount: Decimal,
}

#[derive(Deserialize)]
struct WireDetailAddress {
    name: String,
    country_code: String,
}

#[derive(Deserialize)]
struct WireLineItem {
    name: String,
    quantity: i64,
}

impl From<WireOrderDetail> for OrderDetail {
    fn from(wire: WireOrderDetail) -> Self {
        Self {
            display_name: wire.name,
            customer_name: wire.shipping_address.name,
            email: wire.contact_email,
            price: wire.total_line_items_price_set.shop_money.amount,
            country_code: wire.shipping_address.country_code,
            products: wire
                .line_items
                .into_iter()
                .map(|item| ProductLine {
                    name: item.name,
                    quantity: item.quantity,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::split_created_at;

    #[test]
    fn created_at_splits_into_date_and_time_parts() {
        let (year, month, day, time) = split_created_at("2024-03-08T09:41:27+01:00");
        assert_eq!(year, "2024");
        assert_eq!(month, "03");
        assert_eq!(day, "08");
        assert_eq!(time, "09:41");
    }

    #[test]
    fn truncated_timestamp_yields_empty_parts_instead_of_panicking() {
        let (year, month, day, time) = split_created_at("2024-03");
        assert_eq!(year, "2024");
        assert_eq!(month, "03");
        assert_eq!(day, "");
        assert_eq!(time, "");
    }
}
