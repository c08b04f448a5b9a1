//! Typed access to the Shopify Admin REST API. `client` owns the HTTP
//! operations, `models` the records they hand to the rest of the bot.

pub mod client;
pub mod models;

pub use client::ShopifyClient;
pub use models::{OrderDetail, OrderSummary, ProductLine};
