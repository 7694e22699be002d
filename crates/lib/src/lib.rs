//! # Product Description Generation
//!
//! This crate turns raw, unstructured product text into a marketing
//! description. It cleans and parses the text, builds a prompt around the
//! features it finds, forwards that prompt to a locally hosted
//! text-generation backend and tidies up the result.
//!
//! The parsing utilities in [`parsing`] can also be used on their own.

pub mod errors;
pub mod generator;
pub mod parsing;
pub mod prompts;
pub mod providers;
pub mod types;

pub use errors::GenerationError;
pub use generator::{DescriptionGenerator, DescriptionGeneratorBuilder, DEFAULT_MAX_TOKENS};
pub use providers::ai::{
    ollama::{OllamaBackend, OllamaOptions},
    GenerationBackend,
};
pub use types::{
    BulkDescriptionRequest, BulkDescriptionResponse, DescriptionRequest, DescriptionResponse,
    ResponseStatus, DEFAULT_TARGET_LENGTH,
};
