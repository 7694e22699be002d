pub mod ollama;

use crate::errors::GenerationError;
use async_trait::async_trait;
use dyn_clone::DynClone;
use std::fmt::Debug;

/// A trait for interacting with a text-generation backend.
///
/// The HTTP-backed client and the in-memory test doubles are interchangeable
/// implementations of this capability.
#[async_trait]
pub trait GenerationBackend: Send + Sync + Debug + DynClone {
    /// Generates a completion for `prompt`, producing at most `max_tokens` tokens.
    async fn generate(&self, prompt: &str, max_tokens: u32) -> Result<String, GenerationError>;

    /// Reports whether the backend is reachable. Never fails.
    async fn health_check(&self) -> bool;

    /// Releases any resources held by the backend.
    async fn shutdown(&self) {}
}

dyn_clone::clone_trait_object!(GenerationBackend);
