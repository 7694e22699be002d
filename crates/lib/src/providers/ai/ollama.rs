use crate::{errors::GenerationError, providers::ai::GenerationBackend};
use async_trait::async_trait;
use reqwest::Client as ReqwestClient;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::time::Duration;
use tracing::{debug, error, info};

pub const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434";
pub const DEFAULT_OLLAMA_MODEL: &str = "llama2";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);
pub const DEFAULT_TEMPERATURE: f32 = 0.7;
pub const DEFAULT_TOP_P: f32 = 0.9;

// --- Ollama request and response structures ---

#[derive(Serialize)]
struct OllamaGenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    options: OllamaSamplingOptions,
}

#[derive(Serialize)]
struct OllamaSamplingOptions {
    num_predict: u32,
    temperature: f32,
    top_p: f32,
}

#[derive(Deserialize, Debug)]
struct OllamaGenerateResponse {
    #[serde(default)]
    response: String,
}

/// Connection and sampling settings for an [`OllamaBackend`].
#[derive(Debug, Clone, PartialEq)]
pub struct OllamaOptions {
    /// Base URL of the Ollama service, without the `/api/...` path.
    pub api_url: String,
    pub model: String,
    /// Applies to every request, connect time included.
    pub timeout: Duration,
    pub temperature: f32,
    pub top_p: f32,
}

impl Default for OllamaOptions {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_OLLAMA_URL.to_string(),
            model: DEFAULT_OLLAMA_MODEL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            temperature: DEFAULT_TEMPERATURE,
            top_p: DEFAULT_TOP_P,
        }
    }
}

// --- Ollama Backend implementation ---

/// A backend for a locally hosted Ollama service.
///
/// The underlying HTTP client keeps its connection pool for the lifetime of
/// the backend; clones share the same pool.
#[derive(Clone, Debug)]
pub struct OllamaBackend {
    client: ReqwestClient,
    options: OllamaOptions,
}

impl OllamaBackend {
    /// Creates a new `OllamaBackend`.
    pub fn new(options: OllamaOptions) -> Result<Self, GenerationError> {
        let client = ReqwestClient::builder()
            .timeout(options.timeout)
            .build()
            .map_err(GenerationError::ReqwestClientBuild)?;
        Ok(Self { client, options })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.options.api_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl GenerationBackend for OllamaBackend {
    /// Sends one non-streaming request to `/api/generate`.
    async fn generate(&self, prompt: &str, max_tokens: u32) -> Result<String, GenerationError> {
        let url = self.endpoint("/api/generate");
        let request_body = OllamaGenerateRequest {
            model: &self.options.model,
            prompt,
            stream: false,
            options: OllamaSamplingOptions {
                num_predict: max_tokens,
                temperature: self.options.temperature,
                top_p: self.options.top_p,
            },
        };

        debug!(%url, model = %self.options.model, "--> Sending prompt to Ollama");

        let response = self
            .client
            .post(&url)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| {
                error!("Error calling Ollama API: {e}");
                GenerationError::BackendRequest(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Ollama API returned {status}: {body}");
            return Err(GenerationError::BackendApi {
                status: status.as_u16(),
                body,
            });
        }

        let generated: OllamaGenerateResponse = response
            .json()
            .await
            .map_err(GenerationError::BackendDeserialization)?;

        debug!("<-- Ollama response: {}", generated.response);

        Ok(generated.response.trim().to_string())
    }

    /// Probes `/api/tags`; only an HTTP 200 counts as healthy.
    async fn health_check(&self) -> bool {
        match self.client.get(self.endpoint("/api/tags")).send().await {
            Ok(response) => response.status() == reqwest::StatusCode::OK,
            Err(e) => {
                debug!("Ollama health check failed: {e}");
                false
            }
        }
    }

    async fn shutdown(&self) {
        info!(api_url = %self.options.api_url, "Releasing Ollama client.");
    }
}
