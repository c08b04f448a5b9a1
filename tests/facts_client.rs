//! Tests for the api-ninjas fact client.

use httpmock::prelude::*;
use serde_json::json;

use shopclerk_bot::error::BotError;
use shopclerk_bot::facts::FactClient;

const KEY: &str = "ninja_test_key";

#[tokio::test]
async fn random_fact_sends_the_api_key_and_takes_the_first_entry() {
    let server = MockServer::start();
    let fact_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v1/facts")
            .query_param("limit", "1")
            .header("X-Api-Key", KEY);
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!([
                { "fact": "Bananas are berries, but strawberries are not." }
            ]));
    });

    let client = FactClient::with_endpoint(&server.url("/v1/facts"), KEY);
    let fact = client.random_fact().await.unwrap();

    assert_eq!(fact, "Bananas are berries, but strawberries are not.");
    fact_mock.assert();
}

#[tokio::test]
async fn empty_fact_list_falls_back_to_a_fixed_sentence() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/v1/facts");
        then.status(200).json_body(json!([]));
    });

    let client = FactClient::with_endpoint(&server.url("/v1/facts"), KEY);
    let fact = client.random_fact().await.unwrap();

    assert_eq!(fact, "No quote found");
}

#[tokio::test]
async fn non_success_status_surfaces_as_an_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/v1/facts");
        then.status(500);
    });

    let client = FactClient::with_endpoint(&server.url("/v1/facts"), KEY);
    let err = client.random_fact().await.unwrap_err();

    assert!(matches!(err, BotError::Api(_)));
}
