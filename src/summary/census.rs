//! Component type tally and supplier collection.

use crate::model::SbomDocument;
use indexmap::IndexMap;
use serde_json::Value;
use std::collections::BTreeSet;

/// Component counts by type, unique suppliers and the sample component.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentCensus {
    /// Number of components in the document
    pub total_components: usize,
    /// Count per declared type, in first-seen order
    pub type_counts: IndexMap<String, usize>,
    /// Unique author identities, sorted
    pub suppliers: BTreeSet<String>,
    /// The first component verbatim, if any
    pub sample: Option<Value>,
}

impl ComponentCensus {
    /// Tally types and suppliers across all components.
    ///
    /// Type strings are counted exactly as written (case-sensitive, untrimmed).
    #[must_use]
    pub fn from_document(doc: &SbomDocument) -> Self {
        let mut type_counts: IndexMap<String, usize> = IndexMap::new();
        let mut suppliers = BTreeSet::new();

        for comp in &doc.components {
            *type_counts
                .entry(comp.type_or_unknown().to_string())
                .or_default() += 1;
            suppliers.extend(comp.supplier_names().into_iter().map(str::to_string));
        }

        Self {
            total_components: doc.components.len(),
            type_counts,
            suppliers,
            sample: doc.components.first().map(|c| c.raw.clone()),
        }
    }

    /// Sum of all per-type counts; always equals `total_components`.
    #[must_use]
    pub fn counted_total(&self) -> usize {
        self.type_counts.values().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AuthorEntry, Component};
    use serde_json::json;

    fn doc(components: Vec<Component>) -> SbomDocument {
        SbomDocument::new(components, Vec::new())
    }

    #[test]
    fn test_empty_document() {
        let census = ComponentCensus::from_document(&SbomDocument::default());
        assert_eq!(census.total_components, 0);
        assert!(census.type_counts.is_empty());
        assert!(census.suppliers.is_empty());
        assert!(census.sample.is_none());
    }

    #[test]
    fn test_types_in_first_seen_order() {
        let census = ComponentCensus::from_document(&doc(vec![
            Component::new("a").with_type("library"),
            Component::new("b").with_type("framework"),
            Component::new("c").with_type("library"),
            Component::new("d"),
            Component::new("e").with_type("Library"),
        ]));

        let types: Vec<(&str, usize)> = census
            .type_counts
            .iter()
            .map(|(t, n)| (t.as_str(), *n))
            .collect();
        assert_eq!(
            types,
            vec![("library", 2), ("framework", 1), ("unknown", 1), ("Library", 1)]
        );
        assert_eq!(census.counted_total(), census.total_components);
    }

    #[test]
    fn test_suppliers_deduplicated_and_sorted() {
        let census = ComponentCensus::from_document(&doc(vec![
            Component::new("a").with_author("Microsoft"),
            Component::new("b").with_authors(vec![
                AuthorEntry::named("App vNext"),
                AuthorEntry::named("Microsoft"),
            ]),
            Component::new("c").with_author("App vNext"),
            Component::new("d"),
        ]));
        let suppliers: Vec<&str> = census.suppliers.iter().map(String::as_str).collect();
        assert_eq!(suppliers, vec!["App vNext", "Microsoft"]);
    }

    #[test]
    fn test_author_shadows_authors() {
        let census = ComponentCensus::from_document(&doc(vec![
            Component::new("a")
                .with_author("Solo Author")
                .with_authors(vec![AuthorEntry::named("Ignored Author")]),
        ]));
        assert!(census.suppliers.contains("Solo Author"));
        assert!(!census.suppliers.contains("Ignored Author"));
    }

    #[test]
    fn test_sample_is_first_component() {
        let mut first = Component::new("first");
        first.raw = json!({"name": "first", "version": "1.0"});
        let mut second = Component::new("second");
        second.raw = json!({"name": "second"});

        let census = ComponentCensus::from_document(&doc(vec![first, second]));
        assert_eq!(census.sample, Some(json!({"name": "first", "version": "1.0"})));
    }
}
