//! In-memory fuzzy text search and relevance ranking
//!
//! A pure, synchronous function library: normalization, edit-distance
//! fuzzy matching, multi-field weighted relevance scoring and match
//! highlighting, applied across heterogeneous content collections to
//! produce ranked, grouped results for a live search box or per-page
//! filtering.
//!
//! The engine scans candidate collections on every query — there is no
//! index and no state between calls — which bounds its applicability to
//! collections comfortably held in memory (tens of thousands of records).
//! Records are anything implementing [`FieldAccess`]; `serde_json::Value`
//! works out of the box.
//!
//! ```
//! use omnisearch::{search, FieldWeight, SearchOptions};
//! use serde_json::json;
//!
//! let records = vec![
//!     json!({"title": "React Guide"}),
//!     json!({"title": "Vue Tutorial"}),
//!     json!({"title": "Advanced React Patterns"}),
//! ];
//! let weights = vec![FieldWeight::new("title", 3.0)];
//!
//! let results = search(&records, "react", &weights, &SearchOptions::default());
//! assert_eq!(results.len(), 2);
//! assert_eq!(results[0].record["title"], "React Guide");
//! ```

pub mod collection;
pub mod distance;
pub mod fuzzy;
pub mod global;
pub mod highlight;
pub mod normalize;
pub mod record;
pub mod score;

pub use collection::{search, SearchOptions, SearchResult};
pub use distance::{levenshtein, similarity_ratio};
pub use fuzzy::fuzzy_match;
pub use global::{search_all, Domain, DomainSource, GlobalSearchItem};
pub use highlight::{escape_html, highlight};
pub use normalize::normalize;
pub use record::{FieldAccess, FieldWeight};
pub use score::{score, score_with, ScoringWeights};
