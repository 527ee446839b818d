//! Summary command handler.
//!
//! Implements the default command: load the SBOM, compute the summary and
//! print it.

use crate::config::{AppConfig, Validatable};
use crate::error::SummaryError;
use crate::model::EnvChecklist;
use crate::pipeline::{OutputTarget, exit_codes, load_document, should_use_color, write_output};
use crate::reports::SummaryReporter;
use crate::summary::summarize;
use anyhow::Result;
use std::path::Path;

/// Run the summary command, returning the desired exit code.
///
/// Nothing is written unless the document loads and parses in full.
pub fn run_summary(config: &AppConfig) -> Result<i32> {
    let errors = config.validate();
    if !errors.is_empty() {
        let details: Vec<String> = errors.iter().map(ToString::to_string).collect();
        return Err(SummaryError::config(details.join("; ")).into());
    }

    let target = OutputTarget::from_option(config.output.file.clone());
    let reporter = SummaryReporter::new()
        .colored(should_use_color(config.output.no_color, &target))
        .preview_limit(config.report.preview_limit);

    let text = render_with(&config.sbom_path(), &reporter, config.behavior.quiet)?;
    write_output(&text, &target, config.behavior.quiet)?;

    Ok(exit_codes::SUCCESS)
}

/// Load a file and render its plain-text summary with the default layout.
pub fn render_file(path: &Path) -> Result<String> {
    render_with(path, &SummaryReporter::new(), true)
}

fn render_with(path: &Path, reporter: &SummaryReporter, quiet: bool) -> Result<String> {
    let loaded = load_document(path, quiet)?;
    let summary = summarize(loaded.document(), &EnvChecklist::standard());
    Ok(reporter.render(&summary)?)
}
