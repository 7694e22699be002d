use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// `Key: Value`, `Key = Value` and `Key - Value`, applied in this order.
static SPEC_PATTERNS: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    [
        Regex::new(r"(\w+):\s*([^\n,;]+)").unwrap(),
        Regex::new(r"(\w+)\s*=\s*([^\n,;]+)").unwrap(),
        Regex::new(r"(\w+)\s*-\s*([^\n,;]+)").unwrap(),
    ]
});

/// Pulls key/value specification pairs such as `Color: Blue` out of `text`.
///
/// Keys are title-cased and values trimmed; both must be longer than one
/// character. When a key is matched more than once the last match wins,
/// across patterns as well as within one.
pub fn extract_specs(text: &str) -> BTreeMap<String, String> {
    let mut specs = BTreeMap::new();

    for pattern in SPEC_PATTERNS.iter() {
        for caps in pattern.captures_iter(text) {
            let key = caps[1].trim();
            let value = caps[2].trim();
            if key.chars().count() > 1 && value.chars().count() > 1 {
                specs.insert(title_case(key), value.to_string());
            }
        }
    }

    specs
}

/// Uppercases the first letter of every alphabetic run and lowercases the rest.
fn title_case(word: &str) -> String {
    let mut titled = String::with_capacity(word.len());
    let mut previous_is_letter = false;
    for c in word.chars() {
        if previous_is_letter {
            titled.extend(c.to_lowercase());
        } else {
            titled.extend(c.to_uppercase());
        }
        previous_is_letter = c.is_alphabetic();
    }
    titled
}
