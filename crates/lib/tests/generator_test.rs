//! # Description Generator Tests
//!
//! Runs the full pipeline against the scripted `MockBackend` and checks what
//! reaches the backend as well as what comes back to the caller.

use prodesc::{
    DescriptionGenerator, DescriptionRequest, GenerationError, ResponseStatus, DEFAULT_MAX_TOKENS,
};
use prodesc_test_utils::{setup_tracing, MockBackend};

fn generator_with(backend: &MockBackend) -> DescriptionGenerator {
    DescriptionGenerator::builder()
        .backend(Box::new(backend.clone()))
        .build()
        .expect("generator should build with a backend")
}

#[tokio::test]
async fn test_generate_description_with_mock_backend() {
    setup_tracing();
    let backend = MockBackend::replying("This is a test product description.");
    let generator = generator_with(&backend);

    let request =
        DescriptionRequest::new("Test Product", "Raw product information").with_category("Test Category");
    let result = generator
        .generate_description(&request)
        .await
        .expect("generation should succeed");

    assert!(result.to_lowercase().contains("test product description"));

    let calls = backend.calls();
    assert_eq!(calls.len(), 1, "expected exactly one backend call");
    let (prompt, max_tokens) = &calls[0];
    assert_eq!(*max_tokens, DEFAULT_MAX_TOKENS);
    assert!(prompt.contains("Product Name: Test Product"));
    assert!(prompt.contains("Category: Test Category"));
    assert!(prompt.contains("Raw Information: Raw product information"));
    assert!(prompt.contains("approximately 150 words"));
}

#[tokio::test]
async fn test_generate_description_feeds_normalized_text_and_features() {
    setup_tracing();
    let backend = MockBackend::replying("ok");
    let generator = DescriptionGenerator::builder()
        .backend(Box::new(backend.clone()))
        .max_tokens(64)
        .max_features(1)
        .build()
        .unwrap();

    let request = DescriptionRequest::new(
        "Jacket",
        "Made   with recycled nylon!!  <b>Has</b> a hood with drawcords.\n\nWarm.",
    )
    .with_target_length(80);
    generator.generate_description(&request).await.unwrap();

    let (prompt, max_tokens) = backend.calls().remove(0);
    assert_eq!(max_tokens, 64);
    assert!(prompt.contains(
        "Raw Information: Made with recycled nylon!! b Has b a hood with drawcords. Warm."
    ));
    assert!(prompt.contains("Key Features:\n- Made with recycled nylon\n\nInstructions:"));
    assert!(prompt.contains("approximately 80 words"));
}

#[tokio::test]
async fn test_generate_description_post_processes_output() {
    setup_tracing();
    let backend = MockBackend::replying("  great jacket.\n\nstays  dry!   buy now  ");
    let generator = generator_with(&backend);

    let result = generator
        .generate_description(&DescriptionRequest::new("Jacket", "Waterproof."))
        .await
        .unwrap();

    assert_eq!(result, "Great jacket.Stays dry!Buy now");
}

#[tokio::test]
async fn test_generate_description_propagates_backend_error() {
    setup_tracing();
    let backend = MockBackend::new();
    backend.add_failure("Broken", "model not loaded");
    let generator = generator_with(&backend);

    let err = generator
        .generate_description(&DescriptionRequest::new("Broken", "text"))
        .await
        .expect_err("generation should fail");

    assert!(matches!(err, GenerationError::BackendApi { status: 500, .. }));
    assert!(err.to_string().contains("model not loaded"));
    assert_eq!(backend.calls().len(), 1, "failures must not be retried");
}

#[tokio::test]
async fn test_generate_bulk_isolates_failures_and_keeps_order() {
    setup_tracing();
    let backend = MockBackend::new();
    backend.add_reply("Product One", "first description.");
    backend.add_failure("Product Two", "backend exploded");
    backend.add_reply("Product Three", "third description.");
    let generator = generator_with(&backend);

    let requests = vec![
        DescriptionRequest::new("Product One", "Comes with a case."),
        DescriptionRequest::new("Product Two", "Has two speakers."),
        DescriptionRequest::new("Product Three", "Made of steel."),
    ];
    let results = generator.generate_bulk(&requests).await;

    assert_eq!(results.len(), 3);
    assert_eq!(results[0].product_name, "Product One");
    assert_eq!(results[0].status, ResponseStatus::Success);
    assert_eq!(results[0].generated_description, "First description.");
    assert!(results[0].error_message.is_none());

    assert_eq!(results[1].product_name, "Product Two");
    assert_eq!(results[1].status, ResponseStatus::Error);
    assert!(results[1].generated_description.is_empty());
    let message = results[1].error_message.as_deref().unwrap_or_default();
    assert!(message.contains("backend exploded"), "got {message:?}");

    assert_eq!(results[2].product_name, "Product Three");
    assert_eq!(results[2].status, ResponseStatus::Success);
    assert_eq!(results[2].generated_description, "Third description.");

    // Items are processed sequentially in submitted order.
    let prompts: Vec<String> = backend.calls().into_iter().map(|(p, _)| p).collect();
    assert!(prompts[0].contains("Product One"));
    assert!(prompts[1].contains("Product Two"));
    assert!(prompts[2].contains("Product Three"));
}

#[tokio::test]
async fn test_generate_bulk_with_every_item_failing() {
    setup_tracing();
    let backend = MockBackend::new();
    let generator = generator_with(&backend);

    let requests: Vec<_> = (0..4)
        .map(|i| DescriptionRequest::new(format!("Item {i}"), "text"))
        .collect();
    let results = generator.generate_bulk(&requests).await;

    assert_eq!(results.len(), requests.len());
    for (request, result) in requests.iter().zip(&results) {
        assert_eq!(result.product_name, request.product_name);
        assert_eq!(result.status, ResponseStatus::Error);
        assert!(result.error_message.as_deref().is_some_and(|m| !m.is_empty()));
    }
    assert!(generator.generate_bulk(&[]).await.is_empty());
}

#[tokio::test]
async fn test_builder_requires_backend() {
    let err = DescriptionGenerator::builder().build().unwrap_err();
    assert!(matches!(err, GenerationError::MissingBackend));
}

#[tokio::test]
async fn test_health_check_and_shutdown_delegate_to_backend() {
    let backend = MockBackend::new();
    let generator = generator_with(&backend);

    assert!(generator.health_check().await);
    backend.set_healthy(false);
    assert!(!generator.health_check().await);

    assert!(!backend.was_shut_down());
    generator.shutdown().await;
    assert!(backend.was_shut_down());
}
