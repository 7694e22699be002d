//! # Application State
//!
//! This module defines the shared application state (`AppState`) and the logic
//! for building it at startup. The state is read-only once built; handlers
//! share the generator and its backend connection pool through `Arc`s.

use crate::config::AppConfig;
use prodesc::{DescriptionGenerator, GenerationBackend, OllamaBackend};
use std::sync::Arc;
use tracing::info;

/// The shared application state, accessible from all request handlers.
#[derive(Clone, Debug)]
pub struct AppState {
    /// The description pipeline, wired to the configured backend.
    pub generator: Arc<DescriptionGenerator>,
}

/// Builds the shared application state from the configuration.
///
/// Creates the Ollama backend once; it lives until the server shuts down.
pub async fn build_app_state(config: AppConfig) -> anyhow::Result<AppState> {
    let backend = OllamaBackend::new(config.backend.ollama_options())?;
    info!(
        api_url = %config.backend.api_url,
        model = %config.backend.model,
        "Initialized generation backend (Ollama)."
    );
    build_app_state_with_backend(config, Box::new(backend))
}

/// Builds the application state around an already constructed backend.
pub fn build_app_state_with_backend(
    config: AppConfig,
    backend: Box<dyn GenerationBackend>,
) -> anyhow::Result<AppState> {
    let generator = DescriptionGenerator::builder()
        .backend(backend)
        .max_tokens(config.backend.max_tokens)
        .max_features(config.generation.max_features)
        .build()?;

    Ok(AppState {
        generator: Arc::new(generator),
    })
}
