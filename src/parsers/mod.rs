//! SBOM document parsing.
//!
//! Turns CycloneDX-shaped JSON into an [`SbomDocument`]. Only the
//! `components` and `dependencies` sections are read; schema conformance is
//! not checked.
//!
//! ```no_run
//! use sbom_summary::parsers::parse_document;
//! use std::path::Path;
//!
//! let doc = parse_document(Path::new("sbom.json")).unwrap();
//! println!("{} components", doc.component_count());
//! ```

mod cyclonedx;

pub use cyclonedx::parse_document_str;

use crate::error::{Result, SummaryError};
use crate::model::SbomDocument;
use std::path::Path;

/// Read and parse an SBOM document from a file.
///
/// The file is read in full and closed before parsing starts.
pub fn parse_document(path: &Path) -> Result<SbomDocument> {
    let content = std::fs::read_to_string(path).map_err(|e| SummaryError::io(path, e))?;
    parse_document_str(&content)
}
