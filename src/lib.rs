//! **Compliance summaries for Software Bills of Materials.**
//!
//! `sbom-summary` reads a CycloneDX-shaped SBOM and reports what an auditor
//! gathering PCI evidence needs to see: how many components of each type the
//! document declares, who supplied them, whether the dependency graph covers
//! every component, and which well-known infrastructure services appear in it.
//!
//! ## Core Concepts & Modules
//!
//! - **[`parsers`]**: reads JSON into an [`SbomDocument`]. Optional fields stay
//!   optional; nothing is rejected for being absent.
//! - **[`summary`]**: the pure analysis. [`summarize`] takes a document and the
//!   fixed [`EnvChecklist`] and returns an [`SbomSummary`].
//! - **[`reports`]**: renders a summary as line-oriented text.
//! - **[`pipeline`]**: file loading with logging, and output targets.
//! - **[`config`]**: YAML configuration discovery and merging.
//!
//! ## Getting Started
//!
//! ```no_run
//! use std::path::Path;
//! use sbom_summary::{EnvChecklist, SummaryReporter, parse_document, summarize};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let doc = parse_document(Path::new("sbom.json"))?;
//!     let summary = summarize(&doc, &EnvChecklist::standard());
//!
//!     println!("{}", SummaryReporter::new().render(&summary)?);
//!     Ok(())
//! }
//! ```

#![warn(clippy::unwrap_used)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod parsers;
pub mod pipeline;
pub mod reports;
pub mod summary;

// Re-export main types for convenience
pub use config::{AppConfig, AppConfigBuilder, ConfigError, ConfigOverrides, Validatable};
pub use error::{DocumentErrorKind, ErrorContext, Result, SummaryError};
pub use model::{AuthorEntry, Component, DependencyEdge, EnvChecklist, SbomDocument};
pub use parsers::{parse_document, parse_document_str};
pub use reports::SummaryReporter;
pub use summary::{SbomSummary, summarize};
