//! Text normalizer: turns raw document text into a bag of lowercase alphanumeric tokens.

use std::sync::OnceLock;

use regex::Regex;

/// Lowercases `text`, drops every character outside `[a-z0-9]` and whitespace,
/// then splits on whitespace runs. Duplicates and order are kept.
pub fn normalize(text: &str) -> Vec<String> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"[^a-z0-9\s]+").unwrap());

    let lowered = text.to_lowercase();
    re.replace_all(&lowered, "")
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
