use regex::Regex;
use std::sync::LazyLock;

/// Anything outside word characters, whitespace and basic punctuation.
static DISALLOWED_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s\-.,!?:]").unwrap());
static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Cleans raw product text.
///
/// Whitespace runs (newlines and tabs included) collapse to one space,
/// characters other than word characters, whitespace, `-`, `.`, `,`, `!`,
/// `?` and `:` become spaces, and the result is collapsed again and trimmed.
/// Blank input yields an empty string.
pub fn normalize(raw: &str) -> String {
    if raw.trim().is_empty() {
        return String::new();
    }

    let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    let cleaned = DISALLOWED_CHARS.replace_all(&collapsed, " ");
    let cleaned = WHITESPACE_RUN.replace_all(&cleaned, " ");

    cleaned.trim().to_string()
}
