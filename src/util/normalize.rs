use std::collections::BTreeSet;

use super::lemma::lemmatize;

/// Turn free-form ingredient entries into a set of canonical tokens.
///
/// Every whitespace-separated word of every entry is a candidate on its own:
/// it is trimmed, stripped of every non-alphanumeric character (curly quotes
/// and ellipses included), lowercased and lemmatized, then kept
/// only if it is longer than one character and purely alphabetic.
pub fn normalize_ingredients<S: AsRef<str>>(raw: &[S]) -> BTreeSet<String> {
    raw.iter()
        .flat_map(|entry| entry.as_ref().split_whitespace())
        .filter_map(normalize_token)
        .collect()
}

fn normalize_token(token: &str) -> Option<String> {
    let cleaned: String = token
        .trim()
        .chars()
        .filter(|ch| ch.is_alphanumeric() || ch.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect();

    let lemma = lemmatize(&cleaned);
    is_valid_token(&lemma).then_some(lemma)
}

fn is_valid_token(token: &str) -> bool {
    token.chars().count() > 1
        && !token.trim().is_empty()
        && token.chars().all(|ch| ch.is_alphabetic() || ch == ' ')
}
