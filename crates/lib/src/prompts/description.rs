//! # Product Description Prompt
//!
//! Builds the instruction block for the description-writing task. The output
//! is a pure function of its inputs: no clock, no randomness, no I/O.

use crate::types::DEFAULT_TARGET_LENGTH;

/// The opening role instruction.
pub const DESCRIPTION_ROLE_PROMPT: &str = "You are a professional product description writer. Create an engaging, SEO-friendly product description.";

/// The closing cue after which the model starts writing.
pub const DESCRIPTION_GENERATION_CUE: &str = "Product Description:";

/// Everything the prompt is built from.
#[derive(Debug, Clone, Copy)]
pub struct PromptInput<'a> {
    pub product_name: &'a str,
    /// The normalized raw text.
    pub normalized_text: &'a str,
    pub features: &'a [String],
    pub category: Option<&'a str>,
    /// Target length of the description, in words.
    pub target_length: u32,
}

impl<'a> PromptInput<'a> {
    pub fn new(product_name: &'a str, normalized_text: &'a str, features: &'a [String]) -> Self {
        Self {
            product_name,
            normalized_text,
            features,
            category: None,
            target_length: DEFAULT_TARGET_LENGTH,
        }
    }
}

/// Renders the description prompt.
///
/// The `Category:` line is only emitted for a non-blank category, which is
/// printed as given. Every feature becomes one `- feature` line in input
/// order.
pub fn build_prompt(input: &PromptInput<'_>) -> String {
    let category_context = match input.category {
        Some(category) if !category.trim().is_empty() => format!("Category: {category}\n"),
        _ => String::new(),
    };
    let features_text = input
        .features
        .iter()
        .map(|feature| format!("- {feature}"))
        .collect::<Vec<_>>()
        .join("\n");

    let prompt = format!(
        r#"
{role}

Product Name: {product_name}
{category_context}
Raw Information: {normalized_text}

Key Features:
{features_text}

Instructions:
- Write a compelling product description of approximately {target_length} words
- Focus on benefits, not just features
- Use persuasive, customer-focused language
- Include relevant keywords naturally
- Structure with clear paragraphs
- End with a call-to-action feel

{cue}
"#,
        role = DESCRIPTION_ROLE_PROMPT,
        product_name = input.product_name,
        normalized_text = input.normalized_text,
        target_length = input.target_length,
        cue = DESCRIPTION_GENERATION_CUE,
    );

    prompt.trim().to_string()
}
