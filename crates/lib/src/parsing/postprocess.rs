use regex::Regex;
use std::sync::LazyLock;

static SENTENCE_TERMINATORS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[.!?]+").unwrap());

/// Tidies the text returned by the generation backend.
///
/// Whitespace is collapsed, every sentence is trimmed and starts with an
/// uppercase letter, and terminator groups (`.`, `!`, `?`) are kept as they
/// were. Trimmed sentences are joined straight onto the preceding
/// terminator, so `"a. b"` becomes `"A.B"`.
pub fn post_process(generated: &str) -> String {
    if generated.trim().is_empty() {
        return String::new();
    }

    let collapsed = generated.split_whitespace().collect::<Vec<_>>().join(" ");

    let mut result = String::with_capacity(collapsed.len());
    let mut last_end = 0;
    for terminator in SENTENCE_TERMINATORS.find_iter(&collapsed) {
        push_sentence(&mut result, &collapsed[last_end..terminator.start()]);
        result.push_str(terminator.as_str());
        last_end = terminator.end();
    }
    push_sentence(&mut result, &collapsed[last_end..]);

    result.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn push_sentence(result: &mut String, segment: &str) {
    let sentence = segment.trim();
    if sentence.is_empty() {
        result.push_str(segment);
        return;
    }
    let mut chars = sentence.chars();
    if let Some(first) = chars.next() {
        result.extend(first.to_uppercase());
        result.push_str(chars.as_str());
    }
}
