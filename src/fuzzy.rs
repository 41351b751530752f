//! Fuzzy matching
//!
//! Decides whether a query matches a piece of text, combining exact
//! substring containment with a word-level edit-distance fallback.

use crate::distance::similarity_ratio;
use crate::normalize::normalize;

/// Check whether `query` matches `text`.
///
/// Exact substring containment (case- and accent-insensitive) always
/// matches, regardless of `threshold`. Failing that, the query is split on
/// whitespace and every word must independently match: either contained in
/// the text, or within `threshold` similarity of some single text word, or
/// within `threshold` similarity of the text as a whole (the last case
/// covers typo'd queries against short titles).
///
/// The per-word requirement is conjunctive: a multi-word query only matches
/// text that accounts for every one of its words.
pub fn fuzzy_match(query: &str, text: &str, threshold: f64) -> bool {
    let query_n = normalize(query);
    let text_n = normalize(text);

    // Fast path: verbatim containment, handles multi-word queries where
    // order and spacing are exact.
    if !query_n.is_empty() && text_n.contains(&query_n) {
        return true;
    }

    let query_words: Vec<&str> = query_n.split_whitespace().collect();
    if query_words.is_empty() {
        return false;
    }

    let text_words: Vec<&str> = text_n.split_whitespace().collect();

    query_words
        .iter()
        .all(|word| word_matches(word, &text_n, &text_words, threshold))
}

/// A single query word matches if it is contained in the text, resembles
/// some text word, or resembles the whole text.
fn word_matches(word: &str, text_n: &str, text_words: &[&str], threshold: f64) -> bool {
    if text_n.contains(word) {
        return true;
    }
    if text_words
        .iter()
        .any(|tw| similarity_ratio(word, tw) >= threshold)
    {
        return true;
    }
    similarity_ratio(word, text_n) >= threshold
}
