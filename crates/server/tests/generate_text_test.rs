//! # Text Listing Endpoint Tests
//!
//! Drives `/generate-from-text` against a mocked chat-completion API.

mod common;

use anyhow::Result;
use common::{completion_body, TestApp, CHAT_COMPLETIONS_PATH};
use httpmock::Method::POST;
use listing_gen::FIELD_KEYS;
use reqwest::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn test_fenced_completion_returns_all_fields() -> Result<()> {
    let app = TestApp::spawn().await?;
    let ai_mock = app.mock_server.mock(|when, then| {
        when.method(POST)
            .path(CHAT_COMPLETIONS_PATH)
            .header("authorization", "Bearer test-key")
            .json_body_partial(r#"{"model": "mock-chat-model", "max_tokens": 600}"#)
            .body_contains("Product description: Red cotton kurti with block print");
        then.status(200).json_body(completion_body(
            "```json\n{\"product_name\": \"Red Cotton Kurti\", \"meesho_price\": 499, \"color\": [\"Red\", \"White\"], \"hsn_code\": null, \"unexpected\": \"x\"}\n```",
        ));
    });

    let response = app
        .client
        .post(app.url("/generate-from-text"))
        .json(&json!({"description": "  Red cotton kurti with block print  "}))
        .send()
        .await?;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await?;
    assert_eq!(body["success"], true);

    let fields = body["fields"].as_object().expect("fields should be an object");
    assert_eq!(fields.len(), FIELD_KEYS.len());
    for key in FIELD_KEYS {
        assert!(fields[key].is_string(), "{key} should be a string");
    }
    assert_eq!(fields["product_name"], "Red Cotton Kurti");
    assert_eq!(fields["meesho_price"], "499");
    assert_eq!(fields["color"], "Red, White");
    assert_eq!(fields["hsn_code"], "");
    assert!(fields.get("unexpected").is_none());
    assert_eq!(fields["brand"], "");

    ai_mock.assert();
    Ok(())
}

#[tokio::test]
async fn test_invalid_ai_json_is_a_server_error() -> Result<()> {
    let app = TestApp::spawn().await?;
    app.mock_server.mock(|when, then| {
        when.method(POST).path(CHAT_COMPLETIONS_PATH);
        then.status(200)
            .json_body(completion_body("Here are your fields: product_name = lamp"));
    });

    let response = app
        .client
        .post(app.url("/generate-from-text"))
        .json(&json!({"description": "table lamp"}))
        .send()
        .await?;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json().await?;
    assert_eq!(body["success"], false);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .starts_with("AI returned invalid JSON"));
    assert!(body.get("fields").is_none());
    Ok(())
}

#[tokio::test]
async fn test_missing_description_is_rejected() -> Result<()> {
    let app = TestApp::spawn().await?;
    let ai_mock = app.mock_server.mock(|when, then| {
        when.method(POST).path(CHAT_COMPLETIONS_PATH);
        then.status(200).json_body(completion_body("{}"));
    });

    let bodies = [
        Some(json!({})),
        Some(json!({"description": "   "})),
        Some(json!({"description": 42})),
        None,
    ];
    for body in bodies {
        let request = app.client.post(app.url("/generate-from-text"));
        let request = match &body {
            Some(body) => request.json(body),
            None => request.body("not json at all"),
        };
        let response = request.send().await?;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body: {body:?}");
        let payload: Value = response.json().await?;
        assert_eq!(
            payload,
            json!({"success": false, "error": "Missing 'description' in request body"})
        );
    }

    assert_eq!(ai_mock.hits(), 0);
    Ok(())
}

#[tokio::test]
async fn test_missing_credential_is_a_server_error() -> Result<()> {
    let app = TestApp::spawn_with(|config| config.openai_api_key = None).await?;

    let response = app
        .client
        .post(app.url("/generate-from-text"))
        .json(&json!({"description": "steel bottle"}))
        .send()
        .await?;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json().await?;
    assert_eq!(
        body,
        json!({"success": false, "error": "OPENAI_API_KEY not set on server"})
    );
    Ok(())
}

#[tokio::test]
async fn test_unavailable_provider_is_a_server_error() -> Result<()> {
    let app = TestApp::spawn_with(|config| config.ai_provider = "mystery".to_string()).await?;

    let response = app
        .client
        .post(app.url("/generate-from-text"))
        .json(&json!({"description": "steel bottle"}))
        .send()
        .await?;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json().await?;
    assert_eq!(body["error"], "AI provider is not available on server");
    Ok(())
}

#[tokio::test]
async fn test_upstream_failure_is_reported() -> Result<()> {
    let app = TestApp::spawn().await?;
    app.mock_server.mock(|when, then| {
        when.method(POST).path(CHAT_COMPLETIONS_PATH);
        then.status(429).body("Rate limit reached");
    });

    let response = app
        .client
        .post(app.url("/generate-from-text"))
        .json(&json!({"description": "steel bottle"}))
        .send()
        .await?;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json().await?;
    assert_eq!(body["success"], false);
    let error = body["error"].as_str().unwrap();
    assert!(error.contains("Rate limit reached"), "{error}");
    Ok(())
}

#[tokio::test]
async fn test_non_object_ai_json_is_rejected() -> Result<()> {
    let app = TestApp::spawn().await?;
    app.mock_server.mock(|when, then| {
        when.method(POST).path(CHAT_COMPLETIONS_PATH);
        then.status(200).json_body(completion_body("[\"Red\", \"Blue\"]"));
    });

    let response = app
        .client
        .post(app.url("/generate-from-text"))
        .json(&json!({"description": "steel bottle"}))
        .send()
        .await?;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json().await?;
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("expected a JSON object"));
    Ok(())
}
