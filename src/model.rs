//! Shared application state, stored in serenity's global context so every
//! command handler can reach the API clients.

use std::sync::Arc;

use serenity::prelude::{Context, TypeMapKey};

use crate::config::Config;
use crate::facts::FactClient;
use crate::shopify::ShopifyClient;

/// The central, shared state of the application. An `Arc<AppState>` is
/// inserted into the global context at startup; both fields are immutable
/// for the lifetime of the process.
pub struct AppState {
    pub shopify: ShopifyClient,
    pub facts: FactClient,
}

impl AppState {
    pub fn from_config(config: &Config) -> Self {
        Self {
            shopify: ShopifyClient::new(&config.shopify_base_url, &config.shopify_api_key),
            facts: FactClient::new(&config.ninja_api_key),
        }
    }

    pub async fn from_ctx(ctx: &Context) -> Option<Arc<Self>> {
        ctx.data.read().await.get::<AppState>().cloned()
    }
}

impl TypeMapKey for AppState {
    type Value = Arc<AppState>;
}
