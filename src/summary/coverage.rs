//! Dependency-graph coverage.
//!
//! Only direct reference presence is checked: a component is covered when
//! its `bom-ref` appears in some entry's `dependsOn`. Graph reachability is
//! not computed.

use crate::model::SbomDocument;
use serde_json::Value;
use std::collections::HashSet;

/// Number of unreferenced component names shown before eliding the rest.
pub const DEFAULT_PREVIEW_LIMIT: usize = 10;

/// Outcome of the dependency coverage check.
#[derive(Debug, Clone, PartialEq)]
pub enum DependencyCoverage {
    /// The document has no dependency entries; nothing further was computed
    NotDeclared,
    /// The document declares dependency entries
    Declared {
        /// Number of dependency entries
        entry_count: usize,
        /// The first entry verbatim
        sample: Value,
        /// Names of components never referenced as a dependency target,
        /// in component order; `None` for unnamed components
        unreferenced: Vec<Option<String>>,
    },
}

impl DependencyCoverage {
    /// Compute coverage for a document.
    #[must_use]
    pub fn from_document(doc: &SbomDocument) -> Self {
        let Some(first) = doc.dependencies.first() else {
            return Self::NotDeclared;
        };

        let referenced: HashSet<&str> = doc
            .dependencies
            .iter()
            .flat_map(|edge| edge.depends_on.iter().map(String::as_str))
            .collect();

        // An absent bom-ref never matches
        let unreferenced = doc
            .components
            .iter()
            .filter(|comp| {
                comp.bom_ref
                    .as_deref()
                    .is_none_or(|bom_ref| !referenced.contains(bom_ref))
            })
            .map(|comp| comp.name.clone())
            .collect();

        Self::Declared {
            entry_count: doc.dependencies.len(),
            sample: first.raw.clone(),
            unreferenced,
        }
    }

    /// Unreferenced component names (empty when no dependencies were declared)
    #[must_use]
    pub fn unreferenced(&self) -> &[Option<String>] {
        match self {
            Self::NotDeclared => &[],
            Self::Declared { unreferenced, .. } => unreferenced,
        }
    }

    /// Whether dependencies were declared and every component is referenced
    #[must_use]
    pub fn is_fully_referenced(&self) -> bool {
        matches!(self, Self::Declared { unreferenced, .. } if unreferenced.is_empty())
    }

    /// The first `limit` unreferenced names and whether more were elided.
    #[must_use]
    pub fn unreferenced_preview(&self, limit: usize) -> UnreferencedPreview<'_> {
        let all = self.unreferenced();
        UnreferencedPreview {
            names: &all[..all.len().min(limit)],
            truncated: all.len() > limit,
        }
    }
}

/// A bounded view of the unreferenced component names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnreferencedPreview<'a> {
    pub names: &'a [Option<String>],
    pub truncated: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Component, DependencyEdge};

    fn component(i: usize) -> Component {
        Component::new(format!("comp-{i}")).with_bom_ref(format!("ref-{i}"))
    }

    #[test]
    fn test_no_dependencies_is_not_declared() {
        let doc = SbomDocument::new(vec![component(0), component(1)], Vec::new());
        let coverage = DependencyCoverage::from_document(&doc);
        assert_eq!(coverage, DependencyCoverage::NotDeclared);
        assert!(coverage.unreferenced().is_empty());
        assert!(!coverage.is_fully_referenced());
    }

    #[test]
    fn test_all_referenced() {
        let doc = SbomDocument::new(
            vec![component(0), component(1)],
            vec![
                DependencyEdge::new("root", vec!["ref-0".into()]),
                DependencyEdge::new("ref-0", vec!["ref-1".into()]),
            ],
        );
        let coverage = DependencyCoverage::from_document(&doc);
        assert!(coverage.is_fully_referenced());
        match coverage {
            DependencyCoverage::Declared { entry_count, .. } => assert_eq!(entry_count, 2),
            DependencyCoverage::NotDeclared => panic!("Expected Declared"),
        }
    }

    #[test]
    fn test_unreferenced_in_component_order() {
        let unnamed = Component::default().with_bom_ref("ref-x");
        let doc = SbomDocument::new(
            vec![
                component(0),
                component(1),
                Component::new("no-ref"),
                unnamed,
                component(2),
            ],
            vec![DependencyEdge::new("ref-0", vec!["ref-1".into()])],
        );
        let coverage = DependencyCoverage::from_document(&doc);
        assert_eq!(
            coverage.unreferenced(),
            &[
                Some("comp-0".to_string()),
                Some("no-ref".to_string()),
                None,
                Some("comp-2".to_string()),
            ]
        );
    }

    #[test]
    fn test_dependent_ref_is_not_a_reference() {
        let doc = SbomDocument::new(
            vec![component(0)],
            vec![DependencyEdge::new("ref-0", Vec::new())],
        );
        let coverage = DependencyCoverage::from_document(&doc);
        assert_eq!(coverage.unreferenced(), &[Some("comp-0".to_string())]);
    }

    #[test]
    fn test_preview_truncates_after_limit() {
        let components: Vec<_> = (0..15).map(component).collect();
        let doc = SbomDocument::new(
            components,
            vec![DependencyEdge::new("root", vec!["elsewhere".into()])],
        );
        let coverage = DependencyCoverage::from_document(&doc);

        let preview = coverage.unreferenced_preview(DEFAULT_PREVIEW_LIMIT);
        assert_eq!(preview.names.len(), 10);
        assert_eq!(preview.names[9].as_deref(), Some("comp-9"));
        assert!(preview.truncated);
    }

    #[test]
    fn test_preview_exact_limit_not_truncated() {
        let components: Vec<_> = (0..10).map(component).collect();
        let doc = SbomDocument::new(
            components,
            vec![DependencyEdge::new("root", Vec::new())],
        );
        let coverage = DependencyCoverage::from_document(&doc);
        let preview = coverage.unreferenced_preview(10);
        assert_eq!(preview.names.len(), 10);
        assert!(!preview.truncated);
    }
}
