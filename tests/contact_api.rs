//! End-to-end tests for the submission relay, with the transactional-email
//! API stood in by httpmock.

mod helpers;

use axum::http::StatusCode;
use httpmock::prelude::*;
use saiyana::routes::router;
use serde_json::json;

/// Matches only sends addressed to the operator inbox.
fn admin_to() -> String {
    format!(r#"{{"to": ["{}"]}}"#, helpers::OPS_INBOX)
}

/// Matches only sends addressed back to the submitter.
fn customer_to() -> String {
    r#"{"to": ["asha@example.com"]}"#.to_string()
}

#[tokio::test]
async fn missing_required_field_is_rejected_without_dispatch() {
    let server = MockServer::start();
    let outbound = server.mock(|when, then| {
        when.method(POST).path("/emails");
        then.status(200).json_body(json!({ "id": "x" }));
    });

    let app = router(helpers::state_with_email(&server));
    let mut payload = helpers::quote_payload();
    payload.as_object_mut().unwrap().remove("companyName");

    let (status, body) = helpers::post_contact(app, &payload).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["error"], json!("companyName is required"));
    assert_eq!(outbound.hits(), 0);
}

#[tokio::test]
async fn invalid_email_is_rejected_without_dispatch() {
    let server = MockServer::start();
    let outbound = server.mock(|when, then| {
        when.method(POST).path("/emails");
        then.status(200).json_body(json!({ "id": "x" }));
    });

    let app = router(helpers::state_with_email(&server));
    let mut payload = helpers::message_payload();
    payload["email"] = json!("not-an-email");

    let (status, body) = helpers::post_contact(app, &payload).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("invalid email format"));
    assert_eq!(outbound.hits(), 0);
}

#[tokio::test]
async fn malformed_body_is_rejected_without_dispatch() {
    let server = MockServer::start();
    let outbound = server.mock(|when, then| {
        when.method(POST).path("/emails");
        then.status(200).json_body(json!({ "id": "x" }));
    });

    let app = router(helpers::state_with_email(&server));
    let (status, body) = helpers::post_contact_raw(app, "not json".to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("Invalid request format"));
    assert_eq!(outbound.hits(), 0);
}

#[tokio::test]
async fn unconfigured_email_is_a_server_configuration_error() {
    let app = router(helpers::state_without_email());

    let (status, body) = helpers::post_contact(app, &helpers::quote_payload()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["error"], json!("Server configuration error"));
}

#[tokio::test]
async fn operator_dispatch_failure_fails_the_request() {
    let server = MockServer::start();
    let admin = server.mock(|when, then| {
        when.method(POST)
            .path("/emails")
            .json_body_partial(admin_to());
        then.status(500)
            .json_body(json!({ "message": "provider down" }));
    });
    let customer = server.mock(|when, then| {
        when.method(POST)
            .path("/emails")
            .json_body_partial(customer_to());
        then.status(200).json_body(json!({ "id": "ack" }));
    });

    let app = router(helpers::state_with_email(&server));
    let (status, body) = helpers::post_contact(app, &helpers::quote_payload()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["error"], json!("Failed to send notification email"));
    // No raw provider details leak to the caller
    assert!(body.get("details").is_none());
    assert_eq!(admin.hits(), 1);
    assert_eq!(customer.hits(), 0);
}

#[tokio::test]
async fn acknowledgment_failure_downgrades_to_success_with_warning() {
    let server = MockServer::start();
    let admin = server.mock(|when, then| {
        when.method(POST)
            .path("/emails")
            .json_body_partial(admin_to());
        then.status(200).json_body(json!({ "id": "admin" }));
    });
    let customer = server.mock(|when, then| {
        when.method(POST)
            .path("/emails")
            .json_body_partial(customer_to());
        then.status(500).json_body(json!({ "message": "mailbox full" }));
    });

    let app = router(helpers::state_with_email(&server));
    let (status, body) = helpers::post_contact(app, &helpers::quote_payload()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    assert_eq!(
        body["warning"],
        json!("Quote received, but confirmation email could not be sent")
    );
    assert!(body.get("error").is_none());
    assert_eq!(admin.hits(), 1);
    assert_eq!(customer.hits(), 1);
}

#[tokio::test]
async fn successful_quote_sends_both_emails() {
    let server = MockServer::start();
    let admin = server.mock(|when, then| {
        when.method(POST)
            .path("/emails")
            .header("authorization", "Bearer re_test_key")
            .json_body_partial(admin_to())
            .json_body_partial(r#"{"subject": "New Quote Request from Rao Pharma"}"#)
            .json_body_partial(r#"{"reply_to": "asha@example.com"}"#)
            .body_contains("Need pallet storage for 200 units")
            .body_contains("January 15, 2026");
        then.status(200).json_body(json!({ "id": "admin" }));
    });
    let customer = server.mock(|when, then| {
        when.method(POST)
            .path("/emails")
            .json_body_partial(customer_to());
        then.status(200).json_body(json!({ "id": "ack" }));
    });

    let app = router(helpers::state_with_email(&server));
    let (status, body) = helpers::post_contact(app, &helpers::quote_payload()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    assert_eq!(
        body["message"],
        json!("Quote request received and confirmation emails sent")
    );
    assert!(body.get("warning").is_none());
    assert!(body.get("error").is_none());
    assert_eq!(admin.hits(), 1);
    assert_eq!(customer.hits(), 1);
}

#[tokio::test]
async fn contact_message_scenario_reaches_operator_verbatim() {
    let server = MockServer::start();
    let admin = server.mock(|when, then| {
        when.method(POST)
            .path("/emails")
            .json_body_partial(admin_to())
            .json_body_partial(r#"{"subject": "New Contact Form Submission from Asha Rao"}"#)
            .body_contains("Need pallet storage for 200 units");
        then.status(200).json_body(json!({ "id": "admin" }));
    });
    let customer = server.mock(|when, then| {
        when.method(POST)
            .path("/emails")
            .json_body_partial(customer_to());
        then.status(200).json_body(json!({ "id": "ack" }));
    });

    let app = router(helpers::state_with_email(&server));
    let (status, body) = helpers::post_contact(app, &helpers::message_payload()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    assert_eq!(admin.hits(), 1);
    assert_eq!(customer.hits(), 1);
}

#[tokio::test]
async fn free_text_is_escaped_before_it_reaches_the_provider() {
    let server = MockServer::start();
    let admin = server.mock(|when, then| {
        when.method(POST)
            .path("/emails")
            .json_body_partial(admin_to())
            .body_contains("&lt;script&gt;alert(1)&lt;/script&gt;");
        then.status(200).json_body(json!({ "id": "admin" }));
    });
    let customer = server.mock(|when, then| {
        when.method(POST)
            .path("/emails")
            .json_body_partial(customer_to());
        then.status(200).json_body(json!({ "id": "ack" }));
    });

    let app = router(helpers::state_with_email(&server));
    let mut payload = helpers::message_payload();
    payload["message"] = json!("<script>alert(1)</script>");

    let (status, _body) = helpers::post_contact(app, &payload).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(admin.hits(), 1);
    assert_eq!(customer.hits(), 1);
}
