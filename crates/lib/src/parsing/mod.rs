//! # Text Parsing
//!
//! The text-processing half of the pipeline: cleaning raw product text,
//! pulling out feature sentences, keywords and key/value specifications,
//! and tidying up the text the backend sends back.
//!
//! Every function here is total. None of them allocate shared state beyond
//! the process-wide regexes and stop-word set, which are compiled once and
//! never mutated.

pub mod features;
pub mod keywords;
pub mod normalize;
pub mod postprocess;
pub mod specs;
pub mod stop_words;

pub use features::{extract_features, DEFAULT_MAX_FEATURES};
pub use keywords::{extract_keywords, filter_stop_words, DEFAULT_MAX_KEYWORDS};
pub use normalize::normalize;
pub use postprocess::post_process;
pub use specs::extract_specs;

use serde::Serialize;
use std::collections::BTreeMap;

/// Everything the extractors can find in a piece of raw text.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TextAnalysis {
    pub normalized: String,
    pub features: Vec<String>,
    pub keywords: Vec<String>,
    pub specs: BTreeMap<String, String>,
}

/// Normalizes `raw` and runs all three extractors over the result.
///
/// Specifications are read from the raw text, because normalization folds
/// newlines into spaces and would merge `Key: Value` lines together.
pub fn analyze(raw: &str, max_features: usize, max_keywords: usize) -> TextAnalysis {
    let normalized = normalize(raw);
    TextAnalysis {
        features: extract_features(&normalized, max_features),
        keywords: extract_keywords(&normalized, max_keywords),
        specs: extract_specs(raw),
        normalized,
    }
}
