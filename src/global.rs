//! Cross-domain search fan-out
//!
//! A thin layer over [`crate::collection::search`] that runs one search per
//! content domain (documents, images, clips, tracks), each with its own
//! field/weight schema, and maps the surviving records into a uniform,
//! presentation-ready item shape grouped by domain. Built for a live
//! command-palette search box: unlike the collection layer, an empty query
//! here yields empty lists, never an unfiltered dump of everything.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::collection::{search, SearchOptions};
use crate::record::{FieldAccess, FieldWeight};

/// Results per domain are capped for the palette view unless the caller
/// overrides via `SearchOptions::max_results`.
const DOMAIN_RESULT_CAP: usize = 5;

/// One logical content category, searched independently with its own
/// field schema. A closed enum: there is no "unknown category" at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    Documents,
    Images,
    Clips,
    Tracks,
}

impl Domain {
    /// Human-readable category tag.
    pub fn label(self) -> &'static str {
        match self {
            Domain::Documents => "Documents",
            Domain::Images => "Images",
            Domain::Clips => "Clips",
            Domain::Tracks => "Tracks",
        }
    }

    /// Hint for the icon a presentation surface should show.
    pub fn icon(self) -> &'static str {
        match self {
            Domain::Documents => "document",
            Domain::Images => "image",
            Domain::Clips => "clip",
            Domain::Tracks => "track",
        }
    }

    /// Field/weight schema used when searching this domain.
    pub fn field_weights(self) -> Vec<FieldWeight> {
        match self {
            Domain::Documents => vec![
                FieldWeight::new("title", 3.0),
                FieldWeight::new("subtitle", 2.0),
                FieldWeight::new("excerpt", 2.0),
                FieldWeight::new("body", 1.0),
            ],
            Domain::Images => vec![
                FieldWeight::new("title", 3.0),
                FieldWeight::new("description", 2.0),
            ],
            Domain::Clips => vec![
                FieldWeight::new("title", 3.0),
                FieldWeight::new("description", 2.0),
            ],
            Domain::Tracks => vec![
                FieldWeight::new("title", 3.0),
                FieldWeight::new("artist", 2.0),
                FieldWeight::new("album", 1.0),
            ],
        }
    }

    /// Field holding a record's primary label.
    fn title_field(self) -> &'static str {
        "title"
    }

    /// Field the short result description is drawn from.
    fn description_field(self) -> &'static str {
        match self {
            Domain::Documents => "excerpt",
            Domain::Images | Domain::Clips => "description",
            Domain::Tracks => "artist",
        }
    }
}

/// One domain's collection plus its static navigation target.
///
/// The target is per-domain, not per-record: every item projected from the
/// same source carries the same navigation target.
#[derive(Debug, Clone)]
pub struct DomainSource<'a, R> {
    pub domain: Domain,
    pub records: &'a [R],
    pub target: &'a str,
}

/// Normalized, presentation-ready projection of one matched record.
/// Produced fresh per query and discarded after render.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GlobalSearchItem {
    pub id: String,
    pub title: String,
    pub category: Domain,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub target: String,
    pub icon: &'static str,
}

/// Search every supplied domain and group projected results by domain.
///
/// Each populated source is searched with its domain's schema, ranked,
/// capped at [`DOMAIN_RESULT_CAP`] per domain (or `options.max_results`
/// when set), and projected into [`GlobalSearchItem`]s. Domains absent
/// from `sources` are absent from the output; an empty or whitespace-only
/// query maps every supplied domain to an empty list. Never errors.
pub fn search_all<R: FieldAccess>(
    query: &str,
    sources: &[DomainSource<'_, R>],
    options: &SearchOptions,
) -> BTreeMap<Domain, Vec<GlobalSearchItem>> {
    let mut grouped: BTreeMap<Domain, Vec<GlobalSearchItem>> = BTreeMap::new();

    if query.trim().is_empty() {
        // The palette never shows an unfiltered dump; this is deliberately
        // stricter than the collection layer's empty-query passthrough.
        for source in sources {
            grouped.entry(source.domain).or_default();
        }
        return grouped;
    }

    let cap = match options.max_results {
        Some(n) if n > 0 => n,
        _ => DOMAIN_RESULT_CAP,
    };
    let domain_options = SearchOptions {
        max_results: Some(cap),
        sort_by_relevance: true,
        ..options.clone()
    };

    for source in sources {
        let weights = source.domain.field_weights();
        let results = search(source.records, query, &weights, &domain_options);
        debug!(
            "domain {:?}: {} results for query {:?}",
            source.domain,
            results.len(),
            query
        );
        let items = results
            .iter()
            .map(|result| project(result.record, source))
            .collect();
        grouped.insert(source.domain, items);
    }

    grouped
}

/// Map a raw record into the uniform presentation shape.
fn project<R: FieldAccess>(record: &R, source: &DomainSource<'_, R>) -> GlobalSearchItem {
    let domain = source.domain;
    let description = record
        .field(domain.description_field())
        .filter(|d| !d.is_empty())
        .map(|d| d.into_owned());

    GlobalSearchItem {
        id: record
            .field("id")
            .map(|v| v.into_owned())
            .unwrap_or_default(),
        title: record
            .field(domain.title_field())
            .map(|v| v.into_owned())
            .unwrap_or_default(),
        category: domain,
        description,
        target: source.target.to_string(),
        icon: domain.icon(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn documents() -> Vec<Value> {
        vec![
            json!({"id": "d1", "title": "React Guide", "excerpt": "Getting started with React"}),
            json!({"id": "d2", "title": "Vue Tutorial", "excerpt": "All about Vue"}),
            json!({"id": "d3", "title": "Advanced React Patterns", "excerpt": "Render props and hooks"}),
        ]
    }

    fn tracks() -> Vec<Value> {
        vec![
            json!({"id": "t1", "title": "Reactor", "artist": "The Machines", "album": "Core"}),
            json!({"id": "t2", "title": "Lullaby", "artist": "Night Owls"}),
        ]
    }

    #[test]
    fn test_search_all_groups_by_domain() {
        let docs = documents();
        let trks = tracks();
        let sources = vec![
            DomainSource {
                domain: Domain::Documents,
                records: &docs,
                target: "/library",
            },
            DomainSource {
                domain: Domain::Tracks,
                records: &trks,
                target: "/music",
            },
        ];

        let grouped = search_all("react", &sources, &SearchOptions::default());

        let doc_items = &grouped[&Domain::Documents];
        assert_eq!(doc_items.len(), 2);
        assert_eq!(doc_items[0].id, "d1", "prefix match ranks first");
        assert_eq!(doc_items[0].title, "React Guide");
        assert_eq!(doc_items[0].category, Domain::Documents);
        assert_eq!(doc_items[0].description.as_deref(), Some("Getting started with React"));
        assert_eq!(doc_items[0].target, "/library");
        assert_eq!(doc_items[0].icon, "document");

        let track_items = &grouped[&Domain::Tracks];
        assert_eq!(track_items.len(), 1);
        assert_eq!(track_items[0].id, "t1");
        assert_eq!(track_items[0].description.as_deref(), Some("The Machines"));
        assert_eq!(track_items[0].target, "/music");
    }

    #[test]
    fn test_empty_query_yields_empty_lists() {
        let docs = documents();
        let sources = vec![DomainSource {
            domain: Domain::Documents,
            records: &docs,
            target: "/library",
        }];
        for query in ["", "   "] {
            let grouped = search_all(query, &sources, &SearchOptions::default());
            assert_eq!(grouped.len(), 1);
            assert!(
                grouped[&Domain::Documents].is_empty(),
                "palette suppresses the unfiltered dump for query {:?}",
                query
            );
        }
    }

    #[test]
    fn test_absent_domains_omitted() {
        let docs = documents();
        let sources = vec![DomainSource {
            domain: Domain::Documents,
            records: &docs,
            target: "/library",
        }];
        let grouped = search_all("react", &sources, &SearchOptions::default());
        assert!(grouped.contains_key(&Domain::Documents));
        assert!(!grouped.contains_key(&Domain::Images));
        assert!(!grouped.contains_key(&Domain::Tracks));
    }

    #[test]
    fn test_per_domain_cap() {
        let docs: Vec<Value> = (0..8)
            .map(|i| json!({"id": format!("d{}", i), "title": format!("React Guide {}", i)}))
            .collect();
        let sources = vec![DomainSource {
            domain: Domain::Documents,
            records: &docs,
            target: "/library",
        }];

        let grouped = search_all("react", &sources, &SearchOptions::default());
        assert_eq!(grouped[&Domain::Documents].len(), 5, "default palette cap");

        let options = SearchOptions {
            max_results: Some(2),
            ..Default::default()
        };
        let grouped = search_all("react", &sources, &options);
        assert_eq!(grouped[&Domain::Documents].len(), 2, "caller override");
    }

    #[test]
    fn test_empty_collection_keeps_entry() {
        let docs: Vec<Value> = Vec::new();
        let sources = vec![DomainSource {
            domain: Domain::Documents,
            records: &docs,
            target: "/library",
        }];
        let grouped = search_all("react", &sources, &SearchOptions::default());
        assert!(grouped[&Domain::Documents].is_empty());
    }

    #[test]
    fn test_missing_id_and_description_tolerated() {
        let records = vec![json!({"title": "React Guide"})];
        let sources = vec![DomainSource {
            domain: Domain::Documents,
            records: &records,
            target: "/library",
        }];
        let grouped = search_all("react", &sources, &SearchOptions::default());
        let items = &grouped[&Domain::Documents];
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, "");
        assert!(items[0].description.is_none());
    }

    #[test]
    fn test_domain_schemas() {
        let weights = Domain::Documents.field_weights();
        assert_eq!(weights.len(), 4);
        assert_eq!(weights[0].field, "title");
        assert_eq!(weights[0].weight, 3.0);
        assert_eq!(weights[3].field, "body");
        assert_eq!(weights[3].weight, 1.0);

        let weights = Domain::Tracks.field_weights();
        assert_eq!(weights[1].field, "artist");
        assert_eq!(weights[1].weight, 2.0);
    }

    #[test]
    fn test_item_serialization() {
        let item = GlobalSearchItem {
            id: "d1".to_string(),
            title: "React Guide".to_string(),
            category: Domain::Documents,
            description: None,
            target: "/library".to_string(),
            icon: Domain::Documents.icon(),
        };
        let value = serde_json::to_value(&item).expect("serializable");
        assert_eq!(value["category"], "documents");
        assert!(value.get("description").is_none(), "None is skipped");
    }
}
