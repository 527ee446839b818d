//! Pipeline orchestration: load → summarize → render → write.
//!
//! The stages run once, in order, with no stage re-entering an earlier one.
//! Loading and writing are the only steps that touch the filesystem.

mod load;
mod output;

pub use load::{LoadedDocument, load_document};
pub use output::{OutputTarget, should_use_color, write_output};

/// Process exit codes
pub mod exit_codes {
    /// The report was produced
    pub const SUCCESS: i32 = 0;
    /// Loading, parsing, configuration or output failed
    pub const ERROR: i32 = 1;
}
