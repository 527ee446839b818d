//! Document loading with logging.

use crate::error::Result;
use crate::model::SbomDocument;
use crate::parsers::parse_document;
use std::path::{Path, PathBuf};

/// A loaded SBOM document together with where it came from.
#[derive(Debug, Clone)]
pub struct LoadedDocument {
    /// Path the document was read from
    pub path: PathBuf,
    /// The parsed document
    pub document: SbomDocument,
}

impl LoadedDocument {
    /// Get a reference to the document
    #[must_use]
    pub const fn document(&self) -> &SbomDocument {
        &self.document
    }
}

/// Load an SBOM document, logging progress unless `quiet`.
pub fn load_document(path: &Path, quiet: bool) -> Result<LoadedDocument> {
    if !quiet {
        tracing::info!("Loading SBOM: {}", path.display());
    }

    let document = parse_document(path)?;

    if !quiet {
        tracing::info!(
            "Loaded {} components and {} dependency entries",
            document.component_count(),
            document.dependency_count()
        );
    }

    Ok(LoadedDocument {
        path: path.to_path_buf(),
        document,
    })
}
