//! CLI command handlers.
//!
//! Testable handlers invoked by main.rs.

mod summary;

pub use summary::{render_file, run_summary};
