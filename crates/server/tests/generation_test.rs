//! # Generation Endpoint Tests
//!
//! End-to-end tests for `POST /api/v1/generate-description` and
//! `POST /api/v1/generate-bulk`, with `httpmock` playing the Ollama backend.

mod common;

use anyhow::Result;
use common::TestApp;
use httpmock::Method::POST;
use serde_json::{json, Value};

#[tokio::test]
async fn test_generate_description_success() -> Result<()> {
    let app = TestApp::spawn().await?;
    let backend_mock = app
        .mock_server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/generate")
                .json_body_partial(
                    json!({"model": "mock-model", "stream": false, "options": {"num_predict": 500}})
                        .to_string(),
                )
                .body_contains("Product Name: Test Product")
                .body_contains("Category: Electronics")
                .body_contains("approximately 100 words");
            then.status(200).json_body(json!({
                "response": "this is a test product description.",
                "done": true
            }));
        })
        .await;

    let response = app
        .client
        .post(app.url("/api/v1/generate-description"))
        .json(&json!({
            "product_name": "Test Product",
            "raw_text": "This is a great product with amazing features",
            "category": "Electronics",
            "target_length": 100
        }))
        .send()
        .await?;

    assert!(
        response.status().is_success(),
        "Request failed with status: {}",
        response.status()
    );
    let body: Value = response.json().await?;
    assert_eq!(body["product_name"], "Test Product");
    assert_eq!(body["status"], "success");
    assert_eq!(
        body["generated_description"],
        "This is a test product description."
    );
    assert!(body.get("error_message").is_none());
    backend_mock.assert_hits_async(1).await;

    app.shutdown().await
}

#[tokio::test]
async fn test_generate_description_backend_failure_is_500() -> Result<()> {
    let app = TestApp::spawn().await?;
    app.mock_server
        .mock_async(|when, then| {
            when.method(POST).path("/api/generate");
            then.status(503).body("model is loading");
        })
        .await;

    let response = app
        .client
        .post(app.url("/api/v1/generate-description"))
        .json(&json!({
            "product_name": "Test Product",
            "raw_text": "Raw product information"
        }))
        .send()
        .await?;

    assert_eq!(
        response.status(),
        reqwest::StatusCode::INTERNAL_SERVER_ERROR
    );
    let body: Value = response.json().await?;
    let message = body["error"].as_str().unwrap_or_default();
    assert!(message.starts_with("Generation failed"), "got {message:?}");
    assert!(message.contains("model is loading"), "got {message:?}");

    app.shutdown().await
}

#[tokio::test]
async fn test_generate_bulk_isolates_failing_item() -> Result<()> {
    let app = TestApp::spawn().await?;
    let first = app
        .mock_server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/generate")
                .body_contains("Product Name: Product One");
            then.status(200)
                .json_body(json!({"response": "first description."}));
        })
        .await;
    let second = app
        .mock_server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/generate")
                .body_contains("Product Name: Product Two");
            then.status(500).body("out of memory");
        })
        .await;
    let third = app
        .mock_server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/generate")
                .body_contains("Product Name: Product Three");
            then.status(200)
                .json_body(json!({"response": "third description."}));
        })
        .await;

    let response = app
        .client
        .post(app.url("/api/v1/generate-bulk"))
        .json(&json!({
            "products": [
                {"product_name": "Product One", "raw_text": "Comes with a case."},
                {"product_name": "Product Two", "raw_text": "Has two speakers.", "target_length": null},
                {"product_name": "Product Three", "raw_text": "Made of steel.", "category": "Kitchen"}
            ]
        }))
        .send()
        .await?;

    assert!(response.status().is_success());
    let body: Value = response.json().await?;
    let results = body["results"].as_array().expect("results array");
    assert_eq!(results.len(), 3);

    assert_eq!(results[0]["product_name"], "Product One");
    assert_eq!(results[0]["status"], "success");
    assert_eq!(results[0]["generated_description"], "First description.");

    assert_eq!(results[1]["product_name"], "Product Two");
    assert_eq!(results[1]["status"], "error");
    assert_eq!(results[1]["generated_description"], "");
    let message = results[1]["error_message"].as_str().unwrap_or_default();
    assert!(!message.is_empty());
    assert!(message.contains("out of memory"), "got {message:?}");

    assert_eq!(results[2]["product_name"], "Product Three");
    assert_eq!(results[2]["status"], "success");
    assert_eq!(results[2]["generated_description"], "Third description.");

    first.assert_hits_async(1).await;
    second.assert_hits_async(1).await;
    third.assert_hits_async(1).await;

    app.shutdown().await
}

#[tokio::test]
async fn test_generate_bulk_with_no_products() -> Result<()> {
    let app = TestApp::spawn().await?;

    let response = app
        .client
        .post(app.url("/api/v1/generate-bulk"))
        .json(&json!({ "products": [] }))
        .send()
        .await?;

    assert!(response.status().is_success());
    let body: Value = response.json().await?;
    assert_eq!(body, json!({ "results": [] }));

    app.shutdown().await
}
