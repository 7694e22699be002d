use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// The default cap on the number of features returned.
pub const DEFAULT_MAX_FEATURES: usize = 10;

/// Words that mark a sentence as describing a product attribute.
const FEATURE_INDICATORS: [&str; 8] = [
    "feature", "include", "with", "has", "contain", "made", "design", "quality",
];

/// Sentence lengths, in characters, are kept strictly between these bounds.
const MIN_SENTENCE_CHARS: usize = 10;
const MAX_SENTENCE_CHARS: usize = 200;
/// Bullet content must be longer than this.
const MIN_BULLET_CHARS: usize = 5;

static SENTENCE_TERMINATORS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[.!?]+").unwrap());
// Unanchored: normalized text is a single line, so a marker anywhere starts
// a bullet that runs to the end of its line.
static BULLET_MARKER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[-•*]\s*(.+)").unwrap());

/// Extracts up to `max_features` feature descriptions from `text`.
///
/// Sentences that mention one of the feature indicators come first, in the
/// order they appear, followed by the text after each bullet marker. Duplicates
/// keep their first occurrence.
pub fn extract_features(text: &str, max_features: usize) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }

    let sentences = SENTENCE_TERMINATORS
        .split(text)
        .map(str::trim)
        .filter(|sentence| is_feature_sentence(sentence));

    let bullets = BULLET_MARKER
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .filter(|point| point.chars().count() > MIN_BULLET_CHARS);

    let mut seen = HashSet::new();
    sentences
        .chain(bullets)
        .filter(|candidate| seen.insert(*candidate))
        .take(max_features)
        .map(str::to_string)
        .collect()
}

fn is_feature_sentence(sentence: &str) -> bool {
    let length = sentence.chars().count();
    if length <= MIN_SENTENCE_CHARS || length >= MAX_SENTENCE_CHARS {
        return false;
    }
    let lowered = sentence.to_lowercase();
    FEATURE_INDICATORS
        .iter()
        .any(|indicator| lowered.contains(indicator))
}
