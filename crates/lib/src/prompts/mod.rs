//! # Prompt Templates
//!
//! This module holds the prompt sent to the generation backend.

pub mod description;

pub use description::{build_prompt, PromptInput};
