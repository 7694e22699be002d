use super::stop_words::is_stop_word;
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

/// The default cap on the number of keywords returned.
pub const DEFAULT_MAX_KEYWORDS: usize = 10;

/// Tokens must be longer than this to count as keywords.
const MIN_KEYWORD_CHARS: usize = 2;

static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\w+\b").unwrap());

/// Returns the `max_keywords` most frequent non-stop-word tokens of `text`.
///
/// Tokens are lowercased. Ties keep the order in which the tokens were first
/// seen.
pub fn extract_keywords(text: &str, max_keywords: usize) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }

    let lowered = text.to_lowercase();
    // token -> (count, first position)
    let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();
    let keywords = WORD
        .find_iter(&lowered)
        .map(|m| m.as_str())
        .filter(|word| word.chars().count() > MIN_KEYWORD_CHARS && !is_stop_word(word));
    for (position, word) in keywords.enumerate() {
        counts.entry(word).or_insert((0, position)).0 += 1;
    }

    let mut ranked: Vec<_> = counts.into_iter().collect();
    ranked.sort_by(|(_, (count_a, first_a)), (_, (count_b, first_b))| {
        count_b.cmp(count_a).then(first_a.cmp(first_b))
    });
    ranked
        .into_iter()
        .take(max_keywords)
        .map(|(word, _)| word.to_string())
        .collect()
}

/// Removes stop words from `words`, compared case-insensitively.
///
/// The surviving words keep their original casing and order.
pub fn filter_stop_words<S: AsRef<str>>(words: &[S]) -> Vec<String> {
    words
        .iter()
        .map(|word| word.as_ref())
        .filter(|word| !is_stop_word(&word.to_lowercase()))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranks_by_frequency_then_first_occurrence() {
        let text = "Steel bottle. The bottle keeps water cold; steel lid, steel base. Water!";
        assert_eq!(
            extract_keywords(text, 3),
            vec!["steel", "bottle", "water"]
        );
    }

    #[test]
    fn drops_short_tokens_and_stop_words() {
        assert_eq!(
            extract_keywords("It is an ox and the cat", 10),
            vec!["cat"]
        );
    }

    #[test]
    fn filter_keeps_casing() {
        assert_eq!(
            filter_stop_words(&["The", "Quick", "fox", "AND", "dog"]),
            vec!["Quick", "fox", "dog"]
        );
    }
}
