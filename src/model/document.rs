//! Core SBOM document, component and dependency structures.

use serde_json::Value;

/// Placeholder used wherever a type or author name is absent.
pub const UNKNOWN: &str = "unknown";

/// A parsed SBOM document.
///
/// Only the two sections the summary inspects are kept; everything else in
/// the source document is ignored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SbomDocument {
    /// Components in document order (absent section = empty)
    pub components: Vec<Component>,
    /// Dependency relationships in document order (absent section = empty)
    pub dependencies: Vec<DependencyEdge>,
}

impl SbomDocument {
    /// Create a document from already-parsed sections
    #[must_use]
    pub const fn new(components: Vec<Component>, dependencies: Vec<DependencyEdge>) -> Self {
        Self {
            components,
            dependencies,
        }
    }

    /// Number of components in the document
    #[must_use]
    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    /// Number of dependency entries in the document
    #[must_use]
    pub fn dependency_count(&self) -> usize {
        self.dependencies.len()
    }
}

/// A single component entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Component {
    /// Component name
    pub name: Option<String>,
    /// Declared component type (`type` in JSON)
    pub component_type: Option<String>,
    /// Dependency-graph identifier (`bom-ref` in JSON)
    pub bom_ref: Option<String>,
    /// Single author string
    pub author: Option<String>,
    /// Structured author list, consulted only when `author` is absent
    pub authors: Option<Vec<AuthorEntry>>,
    /// The component exactly as it appeared in the document
    pub raw: Value,
}

impl Component {
    /// Create a component with only a name set
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Set the declared type
    #[must_use]
    pub fn with_type(mut self, component_type: impl Into<String>) -> Self {
        self.component_type = Some(component_type.into());
        self
    }

    /// Set the `bom-ref`
    #[must_use]
    pub fn with_bom_ref(mut self, bom_ref: impl Into<String>) -> Self {
        self.bom_ref = Some(bom_ref.into());
        self
    }

    /// Set the single author
    #[must_use]
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Set the structured author list
    #[must_use]
    pub fn with_authors(mut self, authors: Vec<AuthorEntry>) -> Self {
        self.authors = Some(authors);
        self
    }

    /// Declared type, or `"unknown"` when absent
    #[must_use]
    pub fn type_or_unknown(&self) -> &str {
        self.component_type.as_deref().unwrap_or(UNKNOWN)
    }

    /// Name used for substring matching: empty when absent
    #[must_use]
    pub fn name_or_empty(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    /// Supplier identities contributed by this component.
    ///
    /// `author` wins outright; `authors` is only read when `author` is absent.
    /// The two are never merged.
    #[must_use]
    pub fn supplier_names(&self) -> Vec<&str> {
        if let Some(author) = &self.author {
            return vec![author.as_str()];
        }
        self.authors
            .as_ref()
            .map(|authors| authors.iter().map(AuthorEntry::name_or_unknown).collect())
            .unwrap_or_default()
    }
}

/// One entry of a component's `authors` list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthorEntry {
    pub name: Option<String>,
}

impl AuthorEntry {
    /// Create an author entry with a name
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }

    /// Author name, or `"unknown"` when absent
    #[must_use]
    pub fn name_or_unknown(&self) -> &str {
        self.name.as_deref().unwrap_or(UNKNOWN)
    }
}

/// A dependency relationship entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DependencyEdge {
    /// The dependent's `bom-ref` (`ref` in JSON); carried but never analysed
    pub dependent: Option<String>,
    /// `bom-ref`s this entry depends on (`dependsOn` in JSON)
    pub depends_on: Vec<String>,
    /// The entry exactly as it appeared in the document
    pub raw: Value,
}

impl DependencyEdge {
    /// Create an edge from a dependent to its targets
    #[must_use]
    pub fn new(dependent: impl Into<String>, depends_on: Vec<String>) -> Self {
        Self {
            dependent: Some(dependent.into()),
            depends_on,
            raw: Value::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_defaults_to_unknown() {
        assert_eq!(Component::new("lodash").type_or_unknown(), "unknown");
        assert_eq!(
            Component::new("lodash").with_type("library").type_or_unknown(),
            "library"
        );
    }

    #[test]
    fn test_author_wins_over_authors() {
        let comp = Component::new("Newtonsoft.Json")
            .with_author("James Newton-King")
            .with_authors(vec![AuthorEntry::named("Someone Else")]);
        assert_eq!(comp.supplier_names(), vec!["James Newton-King"]);
    }

    #[test]
    fn test_authors_entries_default_to_unknown() {
        let comp = Component::new("Polly")
            .with_authors(vec![AuthorEntry::named("App vNext"), AuthorEntry::default()]);
        assert_eq!(comp.supplier_names(), vec!["App vNext", "unknown"]);
    }

    #[test]
    fn test_no_author_fields_contributes_nothing() {
        assert!(Component::new("anonymous").supplier_names().is_empty());
    }

    #[test]
    fn test_name_or_empty() {
        assert_eq!(Component::default().name_or_empty(), "");
        assert_eq!(Component::new("Redis").name_or_empty(), "Redis");
    }
}
