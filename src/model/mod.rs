//! In-memory representation of a loaded SBOM document.
//!
//! The parser turns loosely-typed CycloneDX JSON into these structures, with
//! every optional field carried as an `Option` and its default applied through
//! an accessor. Nothing here is mutated after loading.

mod checklist;
mod document;

pub use checklist::*;
pub use document::*;
