//! # Request and Response Types
//!
//! The payloads exchanged with callers of the pipeline. They are shared by the
//! server and the CLI so both surfaces speak the same JSON.

use serde::{Deserialize, Deserializer, Serialize};

/// The target description length, in words, used when a request omits one.
pub const DEFAULT_TARGET_LENGTH: u32 = 150;

fn default_target_length() -> u32 {
    DEFAULT_TARGET_LENGTH
}

/// Accepts an absent field, an explicit `null`, or a number.
fn target_length_or_default<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<u32>::deserialize(deserializer)?.unwrap_or(DEFAULT_TARGET_LENGTH))
}

/// A single product to describe.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DescriptionRequest {
    /// Name of the product.
    pub product_name: String,
    /// Raw, unstructured product information.
    pub raw_text: String,
    /// Optional product category.
    #[serde(default)]
    pub category: Option<String>,
    /// Target description length in words.
    #[serde(
        default = "default_target_length",
        deserialize_with = "target_length_or_default"
    )]
    pub target_length: u32,
}

impl DescriptionRequest {
    pub fn new(product_name: impl Into<String>, raw_text: impl Into<String>) -> Self {
        Self {
            product_name: product_name.into(),
            raw_text: raw_text.into(),
            category: None,
            target_length: DEFAULT_TARGET_LENGTH,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_target_length(mut self, target_length: u32) -> Self {
        self.target_length = target_length;
        self
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Error,
}

/// The outcome for one product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DescriptionResponse {
    pub product_name: String,
    pub generated_description: String,
    pub status: ResponseStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl DescriptionResponse {
    pub fn success(product_name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            product_name: product_name.into(),
            generated_description: description.into(),
            status: ResponseStatus::Success,
            error_message: None,
        }
    }

    /// An error-tagged result: the description is empty and the message is kept.
    pub fn failure(product_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            product_name: product_name.into(),
            generated_description: String::new(),
            status: ResponseStatus::Error,
            error_message: Some(message.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == ResponseStatus::Success
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkDescriptionRequest {
    pub products: Vec<DescriptionRequest>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkDescriptionResponse {
    pub results: Vec<DescriptionResponse>,
}
