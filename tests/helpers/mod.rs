//! Shared setup for integration tests: app state wired to a mock email API.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use httpmock::MockServer;
use saiyana::config::{Config, LoggingConfig, ServerConfig};
use saiyana::routes::AppState;
use saiyana_notification::{EmailConfig, EmailService};
use tower::ServiceExt;

pub const OPS_INBOX: &str = "ops@saiyana.example";
pub const FROM_ADDRESS: &str = "quotes@saiyana.example";

pub fn test_config(email_api_url: &str) -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
        },
        logging: LoggingConfig::default(),
        email: EmailConfig {
            api_url: email_api_url.to_string(),
            api_key: "re_test_key".to_string(),
            from_address: FROM_ADDRESS.to_string(),
            contact_address: OPS_INBOX.to_string(),
            timeout_seconds: 5,
        },
    }
}

pub fn state_with_email(server: &MockServer) -> AppState {
    let config = test_config(&server.base_url());
    let email = EmailService::new(&config.email).expect("email service builds");
    AppState {
        config,
        email: Some(email),
    }
}

/// State for a deployment without email credentials.
pub fn state_without_email() -> AppState {
    let mut config = test_config("http://127.0.0.1:9");
    config.email.api_key = String::new();
    config.email.contact_address = String::new();
    AppState {
        config,
        email: None,
    }
}

pub fn quote_payload() -> serde_json::Value {
    serde_json::json!({
        "name": "Asha Rao",
        "email": "asha@example.com",
        "companyName": "Rao Pharma",
        "serviceType": "warehousing",
        "shipmentVolume": "200 pallets/month",
        "startDate": "2026-01-15",
        "requirements": "Need pallet storage for 200 units"
    })
}

pub fn message_payload() -> serde_json::Value {
    serde_json::json!({
        "name": "Asha Rao",
        "email": "asha@example.com",
        "message": "Need pallet storage for 200 units"
    })
}

pub async fn post_contact(
    app: Router,
    payload: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    post_contact_raw(app, payload.to_string()).await
}

pub async fn post_contact_raw(app: Router, body: String) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/contact")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body))
                .expect("request builds"),
        )
        .await
        .expect("handler responds");

    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body reads")
        .to_bytes();
    let json = serde_json::from_slice(&bytes).expect("response is json");
    (status, json)
}
