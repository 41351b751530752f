//! Collection search orchestration
//!
//! Ties together matching, scoring and highlighting over an arbitrary
//! collection of records and a field/weight schema, returning sorted,
//! capped results. Stateless: every call is a pure function over its
//! inputs, and results borrow the caller's collection.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::fuzzy::fuzzy_match;
use crate::highlight::highlight;
use crate::normalize::normalize;
use crate::record::{FieldAccess, FieldWeight};
use crate::score::score;

/// Search configuration. All fields have documented defaults, so
/// `SearchOptions::default()` (or an empty JSON object, via serde) is a
/// complete configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchOptions {
    /// Enable word-level approximate matching in addition to exact
    /// substring containment.
    pub fuzzy: bool,
    /// Minimum similarity ratio for a fuzzy match, nominally in [0, 1].
    /// Out-of-range values are accepted as-is: above 1 only the containment
    /// paths can match, below 0 everything fuzzily resembles everything.
    pub threshold: f64,
    /// Attach per-field highlighted text to each result.
    pub highlight: bool,
    /// Rank results by relevance score. When off, every match scores 1 and
    /// input order is kept.
    pub sort_by_relevance: bool,
    /// Cap on the number of results. `None` and `Some(0)` both mean no cap.
    pub max_results: Option<usize>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            fuzzy: true,
            threshold: 0.7,
            highlight: false,
            sort_by_relevance: true,
            max_results: None,
        }
    }
}

/// One matched record with its score and optional highlights.
///
/// Ephemeral: produced per query, owned solely by the caller, borrows the
/// searched collection. The engine holds no state between calls.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResult<'a, R> {
    pub record: &'a R,
    pub score: f64,
    /// Per-field highlighted text, present when requested via
    /// [`SearchOptions::highlight`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlights: Option<BTreeMap<String, String>>,
}

/// Search a collection of records against a free-text query.
///
/// An empty or whitespace-only query is the "no filter applied" signal:
/// every record comes back with score 0 in input order. This is distinct
/// from a non-empty query matching nothing, which returns an empty list.
///
/// With `options.fuzzy`, a record matches when [`fuzzy_match`] succeeds on
/// any weighted field; in exact mode a weighted field's normalized value
/// must contain the normalized query verbatim. Matching and scoring are
/// evaluated per field independently: a record matched on one field still
/// accumulates score credit (or none) from each field on its own terms.
pub fn search<'a, R: FieldAccess>(
    records: &'a [R],
    query: &str,
    weights: &[FieldWeight],
    options: &SearchOptions,
) -> Vec<SearchResult<'a, R>> {
    let query_n = normalize(query);
    if query_n.trim().is_empty() {
        return records
            .iter()
            .map(|record| SearchResult {
                record,
                score: 0.0,
                highlights: None,
            })
            .collect();
    }

    let mut results: Vec<SearchResult<'a, R>> = Vec::new();
    for record in records {
        if !record_matches(record, query, &query_n, weights, options) {
            continue;
        }
        let score = if options.sort_by_relevance {
            score(record, query, weights)
        } else {
            1.0
        };
        let highlights = options
            .highlight
            .then(|| collect_highlights(record, query, weights));
        results.push(SearchResult {
            record,
            score,
            highlights,
        });
    }

    debug!(
        "query {:?} matched {} of {} records",
        query,
        results.len(),
        records.len()
    );

    if options.sort_by_relevance {
        // Stable sort: equal scores keep input relative order, the only
        // tie-break the engine defines.
        results.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
    }

    if let Some(cap) = options.max_results {
        if cap > 0 {
            results.truncate(cap);
        }
    }

    results
}

/// Does any weighted field match the query under the configured mode?
fn record_matches<R: FieldAccess>(
    record: &R,
    query: &str,
    query_n: &str,
    weights: &[FieldWeight],
    options: &SearchOptions,
) -> bool {
    weights.iter().filter(|fw| fw.is_active()).any(|fw| {
        let Some(value) = record.field(&fw.field) else {
            return false;
        };
        if value.is_empty() {
            return false;
        }
        if options.fuzzy {
            fuzzy_match(query, &value, options.threshold)
        } else {
            normalize(&value).contains(query_n)
        }
    })
}

/// Highlighted text for every weighted field present on the record.
fn collect_highlights<R: FieldAccess>(
    record: &R,
    query: &str,
    weights: &[FieldWeight],
) -> BTreeMap<String, String> {
    let mut map = BTreeMap::new();
    for fw in weights.iter().filter(|fw| fw.is_active()) {
        if let Some(value) = record.field(&fw.field) {
            if !value.is_empty() {
                map.insert(fw.field.clone(), highlight(&value, query));
            }
        }
    }
    map
}
