//! Environment-backed configuration, loaded once at startup and passed
//! explicitly to whatever needs it. There are no runtime knobs: every value
//! here is a secret or an endpoint for one of the external services.

use std::env;

use crate::error::BotError;

#[derive(Debug, Clone)]
pub struct Config {
    /// Shopify Admin API access token.
    pub shopify_api_key: String,
    /// Discord bot token used to open the gateway connection.
    pub discord_token: String,
    /// Base URL of the shop's Admin REST API, with or without a trailing slash.
    pub shopify_base_url: String,
    /// api-ninjas key for the fallback fact endpoint.
    pub ninja_api_key: String,
}

impl Config {
    /// Reads every required variable and reports all missing names at once,
    /// so a half-configured deployment never boots.
    pub fn from_env() -> Result<Self, BotError> {
        let mut missing = Vec::new();
        let shopify_api_key = require("SHOPIFY_API_KEY", &mut missing);
        let discord_token = require("DISCORD_WEBHOOK", &mut missing);
        let shopify_base_url = require("SHOPIFY_URL", &mut missing);
        let ninja_api_key = require("NINJA_KEY", &mut missing);

        match (shopify_api_key, discord_token, shopify_base_url, ninja_api_key) {
            (Some(shopify_api_key), Some(discord_token), Some(shopify_base_url), Some(ninja_api_key)) => {
                Ok(Self {
                    shopify_api_key,
                    discord_token,
                    shopify_base_url,
                    ninja_api_key,
                })
            }
            _ => Err(BotError::MissingEnv(missing)),
        }
    }
}

fn require(name: &'static str, missing: &mut Vec<&'static str>) -> Option<String> {
    match env::var(name) {
        Ok(value) => Some(value),
        Err(_) => {
            missing.push(name);
            None
        }
    }
}
