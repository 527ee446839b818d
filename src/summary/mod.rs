//! Compliance summary of an SBOM document.
//!
//! [`summarize`] is a pure function over a loaded [`SbomDocument`]: it reads
//! nothing from disk and writes nothing out, so each stage can be tested on
//! hand-built documents. Rendering lives in [`crate::reports`].
//!
//! ```
//! use sbom_summary::model::{Component, EnvChecklist, SbomDocument};
//! use sbom_summary::summary::summarize;
//!
//! let doc = SbomDocument::new(vec![Component::new("StackExchange.Redis")], Vec::new());
//! let summary = summarize(&doc, &EnvChecklist::standard());
//!
//! assert_eq!(summary.census.total_components, 1);
//! assert!(summary.environment.found.contains("Redis"));
//! ```

mod census;
mod coverage;
mod environment;

pub use census::ComponentCensus;
pub use coverage::{DEFAULT_PREVIEW_LIMIT, DependencyCoverage, UnreferencedPreview};
pub use environment::EnvironmentDetection;

use crate::model::{EnvChecklist, SbomDocument};

/// All findings for one document, in report order.
#[derive(Debug, Clone, PartialEq)]
pub struct SbomSummary {
    /// Type tally, suppliers and sample component
    pub census: ComponentCensus,
    /// Dependency-graph coverage
    pub coverage: DependencyCoverage,
    /// Checklist matches against component names
    pub environment: EnvironmentDetection,
}

/// Run every analysis stage over a document.
#[must_use]
pub fn summarize(doc: &SbomDocument, checklist: &EnvChecklist) -> SbomSummary {
    let census = ComponentCensus::from_document(doc);
    let coverage = DependencyCoverage::from_document(doc);
    let environment = EnvironmentDetection::detect(doc, checklist);

    tracing::debug!(
        components = census.total_components,
        types = census.type_counts.len(),
        suppliers = census.suppliers.len(),
        unreferenced = coverage.unreferenced().len(),
        env_found = environment.found.len(),
        "Summary computed"
    );

    SbomSummary {
        census,
        coverage,
        environment,
    }
}
