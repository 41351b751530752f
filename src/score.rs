//! Relevance scoring
//!
//! Computes the tiered, additive relevance signal used to rank matched
//! records. The tiers are strictly ordered: a prefix match on a field is
//! worth more than a substring match, which is worth more than word-level
//! and fuzzy-partial credit. There is no secondary tie-break anywhere in
//! the engine, so this score is the sole ranking signal.

use crate::distance::similarity_ratio;
use crate::normalize::normalize;
use crate::record::{FieldAccess, FieldWeight};

/// Per-tier multipliers for the relevance score.
///
/// The defaults reproduce the reference ranking exactly; embedders can
/// tune individual tiers without forking the scorer.
#[derive(Debug, Clone)]
pub struct ScoringWeights {
    /// Field value starts with the query (highest tier).
    pub prefix: f64,
    /// Field value contains the query as a substring.
    pub substring: f64,
    /// A single query word is contained in the field value.
    pub word: f64,
    /// Minimum similarity ratio for fuzzy word credit.
    ///
    /// Fixed at 0.7 by default and deliberately independent of the
    /// caller-supplied matcher threshold in `SearchOptions`: the matcher
    /// threshold gates which records match at all, this one only gates
    /// partial scoring credit.
    pub fuzzy_floor: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            prefix: 3.0,
            substring: 2.0,
            word: 1.0,
            fuzzy_floor: 0.7,
        }
    }
}

/// Score a record against a query over a set of weighted fields.
///
/// Each present, non-empty field with a positive weight contributes
/// independently; contributions are additive across fields. A record with
/// no resemblance on any weighted field scores 0.
pub fn score<R: FieldAccess>(record: &R, query: &str, weights: &[FieldWeight]) -> f64 {
    score_with(record, query, weights, &ScoringWeights::default())
}

/// [`score`] with explicit tier multipliers.
pub fn score_with<R: FieldAccess>(
    record: &R,
    query: &str,
    weights: &[FieldWeight],
    tiers: &ScoringWeights,
) -> f64 {
    let query_n = normalize(query);
    if query_n.is_empty() {
        return 0.0;
    }

    let mut total = 0.0;
    for fw in weights.iter().filter(|fw| fw.is_active()) {
        let Some(value) = record.field(&fw.field) else {
            continue;
        };
        if value.is_empty() {
            continue;
        }
        total += field_score(&value, &query_n, fw.weight, tiers);
    }
    total
}

/// Tiered contribution of one field value. `query_n` is already normalized.
fn field_score(value: &str, query_n: &str, weight: f64, tiers: &ScoringWeights) -> f64 {
    let value_n = normalize(value);

    if value_n.starts_with(query_n) {
        return weight * tiers.prefix;
    }
    if value_n.contains(query_n) {
        return weight * tiers.substring;
    }

    // Word-level credit: each query word earns independently against the
    // whole field value.
    let mut acc = 0.0;
    for word in query_n.split_whitespace() {
        if value_n.contains(word) {
            acc += weight * tiers.word;
        } else {
            let ratio = similarity_ratio(word, &value_n);
            if ratio >= tiers.fuzzy_floor {
                acc += weight * ratio;
            }
        }
    }
    acc
}
