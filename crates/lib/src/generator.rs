//! # Description Generator
//!
//! Ties the parsing pipeline to a generation backend:
//! normalize → extract features → build prompt → generate → post-process.

use crate::{
    errors::GenerationError,
    parsing::{extract_features, normalize, post_process, DEFAULT_MAX_FEATURES},
    prompts::{build_prompt, PromptInput},
    providers::ai::GenerationBackend,
    types::{DescriptionRequest, DescriptionResponse},
};
use tracing::{debug, error, info};

/// The default cap on tokens requested from the backend.
pub const DEFAULT_MAX_TOKENS: u32 = 500;

/// Generates product descriptions through a [`GenerationBackend`].
#[derive(Debug, Clone)]
pub struct DescriptionGenerator {
    backend: Box<dyn GenerationBackend>,
    max_tokens: u32,
    max_features: usize,
}

/// A builder for creating `DescriptionGenerator` instances.
#[derive(Default)]
pub struct DescriptionGeneratorBuilder {
    backend: Option<Box<dyn GenerationBackend>>,
    max_tokens: Option<u32>,
    max_features: Option<usize>,
}

impl DescriptionGeneratorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the generation backend.
    pub fn backend(mut self, backend: Box<dyn GenerationBackend>) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Sets the token budget for each backend call. Defaults to 500.
    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Sets how many features are passed into the prompt. Defaults to 10.
    pub fn max_features(mut self, max_features: usize) -> Self {
        self.max_features = Some(max_features);
        self
    }

    /// Builds the `DescriptionGenerator`, failing if no backend was set.
    pub fn build(self) -> Result<DescriptionGenerator, GenerationError> {
        Ok(DescriptionGenerator {
            backend: self.backend.ok_or(GenerationError::MissingBackend)?,
            max_tokens: self.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS),
            max_features: self.max_features.unwrap_or(DEFAULT_MAX_FEATURES),
        })
    }
}

impl DescriptionGenerator {
    pub fn builder() -> DescriptionGeneratorBuilder {
        DescriptionGeneratorBuilder::new()
    }

    /// Generates one description with a single backend round-trip.
    ///
    /// Backend failures are returned unchanged; there is no retry.
    pub async fn generate_description(
        &self,
        request: &DescriptionRequest,
    ) -> Result<String, GenerationError> {
        let normalized = normalize(&request.raw_text);
        let features = extract_features(&normalized, self.max_features);
        debug!(
            product = %request.product_name,
            features = features.len(),
            "Extracted features from raw text"
        );

        let prompt = build_prompt(&PromptInput {
            product_name: &request.product_name,
            normalized_text: &normalized,
            features: &features,
            category: request.category.as_deref(),
            target_length: request.target_length,
        });
        debug!(prompt = %prompt, "--> Sending prompt to generation backend");

        let generated = self
            .backend
            .generate(&prompt, self.max_tokens)
            .await
            .inspect_err(|e| {
                error!(
                    "Error generating description for {}: {e}",
                    request.product_name
                )
            })?;

        Ok(post_process(&generated))
    }

    /// Generates descriptions for every request, one at a time, in order.
    ///
    /// A failing item becomes an error-tagged response and does not stop the
    /// remaining items, so the output always lines up with the input.
    pub async fn generate_bulk(&self, requests: &[DescriptionRequest]) -> Vec<DescriptionResponse> {
        info!("Generating bulk descriptions for {} products", requests.len());

        let mut results = Vec::with_capacity(requests.len());
        for request in requests {
            let outcome = match self.generate_description(request).await {
                Ok(description) => DescriptionResponse::success(&request.product_name, description),
                Err(e) => DescriptionResponse::failure(&request.product_name, e.to_string()),
            };
            results.push(outcome);
        }

        let failed = results.iter().filter(|r| !r.is_success()).count();
        info!(
            "Bulk generation finished: {} succeeded, {failed} failed",
            results.len() - failed
        );
        results
    }

    pub async fn health_check(&self) -> bool {
        self.backend.health_check().await
    }

    /// Releases the backend's resources. Call once, when no requests remain.
    pub async fn shutdown(&self) {
        self.backend.shutdown().await;
    }
}
