//! Integration tests for message delivery using HTTP stubbing.
//!
//! These tests exercise the full client path (URL construction, XML
//! serialization, rejection parsing) against stubbed responses without
//! making real network calls.

mod common;

use std::time::Duration;

use common::http_mock::MockHttpServer;
use cwc::{Client, ClientConfig, ConfigError, DeliveryError, Message, MessageParams};
use serde_json::json;

fn config_for(host: &str) -> ClientConfig {
    ClientConfig {
        api_key: Some("test-api-key".into()),
        host: Some(host.into()),
        delivery_agent: Some("Advocacy Inc".into()),
        delivery_agent_ack_email: Some("ack@advocacy.test".into()),
        delivery_agent_contact_name: Some("Pat Doe".into()),
        delivery_agent_contact_email: Some("pat@advocacy.test".into()),
        delivery_agent_contact_phone: Some("555-555-0100".into()),
    }
}

fn client_for(host: &str) -> Client {
    Client::new(config_for(host)).expect("full overrides should resolve")
}

fn sample_params() -> MessageParams {
    serde_json::from_value(json!({
        "campaign_id": "fair-farming-2016",
        "recipient": { "member_office": "HCA01" },
        "constituent": {
            "first_name": "Jane",
            "last_name": "Doe",
            "address": ["1 Main St"],
            "city": "Fresno",
            "state_abbreviation": "CA",
            "zip": "93650",
            "email": "jane@example.test",
        },
        "message": {
            "subject": "Support the bill",
            "library_of_congress_topics": ["Agriculture and Food"],
            "constituent_message": "Please support this bill.",
        },
    }))
    .expect("params should deserialize")
}

fn sample_message(client: &Client) -> Message {
    client
        .create_message(sample_params())
        .expect("params should assemble")
}

/// A 2xx response is success; the body is not inspected.
#[tokio::test]
async fn deliver_succeeds_on_200() {
    let server = MockHttpServer::start().await;

    server
        .expect_post("/v2/message")
        .with_query_param("apikey", "test-api-key")
        .with_header("content-type", "application/xml")
        .respond_with_body("<Response>whatever the service says</Response>")
        .mount()
        .await;

    let client = client_for(&server.url());
    let message = sample_message(&client);

    client.deliver(&message).await.expect("should succeed");
}

/// The POST body is the assembled XML document.
#[tokio::test]
async fn deliver_sends_assembled_xml() {
    let server = MockHttpServer::start().await;

    server
        .expect_post("/v2/message")
        .with_body_containing("<CampaignId>fair-farming-2016</CampaignId>")
        .with_body_containing("<MemberOffice>HCA01</MemberOffice>")
        .with_body_containing("<Agent><Name>Advocacy Inc</Name>")
        .expect_times(1)
        .mount()
        .await;

    let client = client_for(&server.url());
    let message = sample_message(&client);

    client.deliver(&message).await.expect("should succeed");
    server.verify().await;
}

/// A 400 response with `Error` elements yields them all, in document order.
#[tokio::test]
async fn deliver_collects_rejection_errors() {
    let server = MockHttpServer::start().await;

    server
        .expect_post("/v2/message")
        .respond_with_status_body(
            400,
            "<Errors>\
             <Error>Invalid zip</Error>\
             <Error>Unknown office</Error>\
             <Error>Missing subject</Error>\
             </Errors>",
        )
        .mount()
        .await;

    let client = client_for(&server.url());
    let message = sample_message(&client);

    let err = client.deliver(&message).await.expect_err("should be rejected");
    match err {
        DeliveryError::Rejected { errors, source } => {
            assert_eq!(errors, vec!["Invalid zip", "Unknown office", "Missing subject"]);
            assert!(source.is_some());
        }
        other => panic!("expected Rejected, got {other:?}"),
    }
}

/// A 400 response without `Error` elements falls back to the raw body.
#[tokio::test]
async fn deliver_falls_back_to_raw_body() {
    let server = MockHttpServer::start().await;

    server
        .expect_post("/v2/message")
        .respond_with_status_body(400, "campaign quota exhausted")
        .mount()
        .await;

    let client = client_for(&server.url());
    let message = sample_message(&client);

    let err = client.deliver(&message).await.expect_err("should be rejected");
    match err {
        DeliveryError::Rejected { errors, .. } => {
            assert_eq!(errors, vec!["campaign quota exhausted"]);
        }
        other => panic!("expected Rejected, got {other:?}"),
    }
}

/// Rejection errors surface verbatim in the error display.
#[tokio::test]
async fn rejection_display_joins_messages() {
    let server = MockHttpServer::start().await;

    server
        .expect_post("/v2/message")
        .respond_with_status_body(400, "<Errors><Error>a</Error><Error>b</Error></Errors>")
        .mount()
        .await;

    let client = client_for(&server.url());
    let message = sample_message(&client);

    let err = client.deliver(&message).await.expect_err("should be rejected");
    assert_eq!(err.to_string(), "message rejected by the service: a; b");
}

/// Non-400 error statuses propagate as transport failures, unwrapped.
#[tokio::test]
async fn deliver_propagates_server_errors() {
    let server = MockHttpServer::start().await;

    server
        .expect_post("/v2/message")
        .respond_with_status(500)
        .mount()
        .await;

    let client = client_for(&server.url());
    let message = sample_message(&client);

    let err = client.deliver(&message).await.expect_err("should fail");
    match err {
        DeliveryError::Transport(e) => {
            assert_eq!(e.status().map(|s| s.as_u16()), Some(500));
        }
        other => panic!("expected Transport, got {other:?}"),
    }
}

/// Timeouts are transport failures; timeout policy belongs to the caller.
#[tokio::test]
async fn deliver_times_out_as_transport_failure() {
    let server = MockHttpServer::start().await;

    server
        .expect_post("/v2/message")
        .respond_with_delay(Duration::from_secs(5))
        .mount()
        .await;

    let http_client = reqwest::Client::builder()
        .timeout(Duration::from_millis(100))
        .build()
        .expect("client build");

    let client = Client::with_http_client(http_client, config_for(&server.url()))
        .expect("full overrides should resolve");
    let message = sample_message(&client);

    let err = client.deliver(&message).await.expect_err("should time out");
    assert!(matches!(err, DeliveryError::Transport(_)));
}

/// Missing credentials fail at construction, never at delivery time.
#[tokio::test]
async fn construction_fails_eagerly_on_missing_key() {
    let mut config = config_for("https://cwc.example.test");
    config.host = None;

    let err = Client::new(config).expect_err("should fail");
    assert!(matches!(err, ConfigError::MissingConfiguration("host")));
}
