//! Client for the api-ninjas random-fact endpoint, used as filler content
//! when the shop has no open orders to list.

use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::error::Result;

const DEFAULT_ENDPOINT: &str = "https://api.api-ninjas.com/v1/facts";
const API_KEY_HEADER: &str = "X-Api-Key";

pub struct FactClient {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl FactClient {
    pub fn new(api_key: &str) -> Self {
        Self::with_endpoint(DEFAULT_ENDPOINT, api_key)
    }

    /// Points the client at a non-default endpoint. Tests use this to target
    /// a local mock server.
    pub fn with_endpoint(endpoint: &str, api_key: &str) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.to_string(),
            api_key: api_key.to_string(),
        }
    }

    /// One random fact. The service replies with a list; only the first
    /// entry is used, and an empty list falls back to a fixed sentence.
    pub async fn random_fact(&self) -> Result<String> {
        debug!(url = %self.endpoint, "GET");
        let response = self
            .client
            .get(&self.endpoint)
            .header(API_KEY_HEADER, self.api_key.as_str())
            .query(&[("limit", "1")])
            .send()
            .await?;
        debug!(status = %response.status(), "response");
        let facts: Vec<WireFact> = response.error_for_status()?.json().await?;
        Ok(facts
            .into_iter()
            .next()
            .map(|entry| entry.fact)
            .unwrap_or_else(|| "No quote found".to_string()))
    }
}

#[derive(Deserialize)]
struct WireFact {
    fact: String,
}
