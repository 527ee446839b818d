//! Unified error types for sbom-summary.
//!
//! Every failure is terminal for a run: the report is only rendered once the
//! document has been read and parsed in full. Missing optional fields are
//! never errors; they degrade to documented defaults in [`crate::model`].

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for sbom-summary operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SummaryError {
    /// The input path does not resolve to a file
    #[error("SBOM file not found: {}", path.display())]
    InputNotFound { path: PathBuf },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// The content is not a usable SBOM document
    #[error("Invalid SBOM document: {context}")]
    InvalidDocument {
        context: String,
        #[source]
        source: DocumentErrorKind,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Specific document error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum DocumentErrorKind {
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    #[error("Top-level value must be a JSON object, found {0}")]
    NotAnObject(&'static str),

    #[error("Malformed '{section}' section: {message}")]
    InvalidSection { section: String, message: String },
}

/// Convenient Result type for sbom-summary operations
pub type Result<T> = std::result::Result<T, SummaryError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl SummaryError {
    /// Create a document error with context
    pub fn document(context: impl Into<String>, source: DocumentErrorKind) -> Self {
        Self::InvalidDocument {
            context: context.into(),
            source,
        }
    }

    /// Create a document error for a malformed section entry
    pub fn invalid_section(section: impl Into<String>, message: impl Into<String>) -> Self {
        Self::document(
            "unexpected structure",
            DocumentErrorKind::InvalidSection {
                section: section.into(),
                message: message.into(),
            },
        )
    }

    /// Create an IO error with path context.
    ///
    /// A `NotFound` source becomes [`SummaryError::InputNotFound`].
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            return Self::InputNotFound { path };
        }
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

impl From<std::io::Error> for SummaryError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for SummaryError {
    fn from(err: serde_json::Error) -> Self {
        Self::document(
            "JSON deserialization",
            DocumentErrorKind::InvalidJson(err.to_string()),
        )
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// The context string is chained in front of any context the error already
/// carries, so nested calls read outermost first.
///
/// ```ignore
/// let doc = parse_document_str(&content)
///     .with_context(|| format!("loading {}", path.display()))?;
/// ```
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure, evaluated only on error.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<SummaryError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

/// Add context to an error, chaining with any existing context.
fn add_context_to_error(err: SummaryError, new_ctx: &str) -> SummaryError {
    match err {
        SummaryError::InvalidDocument {
            context: existing,
            source,
        } => SummaryError::InvalidDocument {
            context: chain_context(new_ctx, &existing),
            source,
        },
        SummaryError::Io {
            path,
            message,
            source,
        } => SummaryError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        SummaryError::Config(msg) => SummaryError::Config(chain_context(new_ctx, &msg)),
        // The path is the whole story for a missing input
        not_found @ SummaryError::InputNotFound { .. } => not_found,
    }
}

/// Chain two context strings together as "`new`: `existing`".
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}
