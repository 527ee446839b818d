//! Text summary report for shell output.

use super::ReportError;
use crate::summary::{
    ComponentCensus, DEFAULT_PREVIEW_LIMIT, DependencyCoverage, EnvironmentDetection, SbomSummary,
};
use serde_json::Value;

/// Rendering of a component that has no name.
const UNNAMED: &str = "(unnamed)";

/// Apply ANSI color formatting if colored output is enabled.
fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "yellow" => format!("\x1b[33m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

/// Renders an [`SbomSummary`] in fixed section order: totals, types,
/// suppliers, sample component, dependencies, environment.
pub struct SummaryReporter {
    /// Use colored output
    colored: bool,
    /// How many unreferenced component names to list
    preview_limit: usize,
}

impl SummaryReporter {
    /// Create a plain-text reporter with the default preview limit
    #[must_use]
    pub const fn new() -> Self {
        Self {
            colored: false,
            preview_limit: DEFAULT_PREVIEW_LIMIT,
        }
    }

    /// Enable or disable ANSI colors
    #[must_use]
    pub const fn colored(mut self, colored: bool) -> Self {
        self.colored = colored;
        self
    }

    /// Set how many unreferenced component names are listed
    #[must_use]
    pub const fn preview_limit(mut self, limit: usize) -> Self {
        self.preview_limit = limit;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }

    /// Render the full report.
    pub fn render(&self, summary: &SbomSummary) -> Result<String, ReportError> {
        let mut lines = Vec::new();
        self.push_census(&mut lines, &summary.census)?;
        self.push_coverage(&mut lines, &summary.coverage)?;
        self.push_environment(&mut lines, &summary.environment);
        Ok(lines.join("\n"))
    }

    fn push_census(
        &self,
        lines: &mut Vec<String>,
        census: &ComponentCensus,
    ) -> Result<(), ReportError> {
        lines.push(format!(
            "{} {}",
            self.color("Total components in SBOM:", "bold"),
            census.total_components
        ));

        lines.push(String::new());
        lines.push(self.color("Component types:", "bold"));
        for (component_type, count) in &census.type_counts {
            lines.push(format!("  {component_type}: {count}"));
        }

        lines.push(String::new());
        lines.push(self.color("Unique suppliers/authors:", "bold"));
        for supplier in &census.suppliers {
            lines.push(format!("  {supplier}"));
        }

        if let Some(sample) = &census.sample {
            lines.push(String::new());
            lines.push(self.color("Sample component:", "bold"));
            lines.push(pretty_json(sample)?);
        }
        Ok(())
    }

    fn push_coverage(
        &self,
        lines: &mut Vec<String>,
        coverage: &DependencyCoverage,
    ) -> Result<(), ReportError> {
        lines.push(String::new());

        let DependencyCoverage::Declared {
            entry_count,
            sample,
            ..
        } = coverage
        else {
            lines.push(self.color(
                "WARNING: No 'dependencies' section found in SBOM. \
                 Transitive dependencies may not be explicitly listed.",
                "yellow",
            ));
            lines.push(
                "If your build tooling does not support this, document this as a \
                 justified gap for PCI C.1.2.b."
                    .to_string(),
            );
            return Ok(());
        };

        lines.push(format!(
            "SBOM includes a 'dependencies' section with {entry_count} {} \
             (transitive relationships).",
            if *entry_count == 1 { "entry" } else { "entries" }
        ));
        lines.push(self.color("Sample dependency mapping:", "bold"));
        lines.push(pretty_json(sample)?);

        lines.push(String::new());
        if coverage.is_fully_referenced() {
            lines.push(self.color(
                "All components are referenced in dependency relationships.",
                "green",
            ));
            return Ok(());
        }

        lines.push(self.color(
            "Components not referenced as dependencies \
             (may be top-level or missing relationships):",
            "yellow",
        ));
        let preview = coverage.unreferenced_preview(self.preview_limit);
        for name in preview.names {
            lines.push(format!("  {}", name.as_deref().unwrap_or(UNNAMED)));
        }
        if preview.truncated {
            lines.push(format!(
                "  {}",
                self.color(
                    &format!(
                        "... and {} more",
                        coverage.unreferenced().len() - preview.names.len()
                    ),
                    "dim",
                )
            ));
        }
        Ok(())
    }

    fn push_environment(&self, lines: &mut Vec<String>, environment: &EnvironmentDetection) {
        lines.push(String::new());
        lines.push(self.color("Environment-level dependencies detected in SBOM:", "bold"));
        if environment.found.is_empty() {
            lines.push(
                "  None detected. If your production environment includes databases, \
                 caches, message brokers, or cloud services, ensure these are documented \
                 in the SBOM or justify their absence for PCI C.1.3."
                    .to_string(),
            );
        } else {
            for entry in &environment.found {
                lines.push(format!("  {entry}"));
            }
        }

        if !environment.missing.is_empty() {
            lines.push(String::new());
            lines.push(self.color(
                "WARNING: The following common environment-level dependencies \
                 were NOT detected in the SBOM:",
                "yellow",
            ));
            for entry in &environment.missing {
                lines.push(format!("  {entry}"));
            }
            lines.push(
                "If any of these are used in production, document them or justify \
                 their absence in the SBOM for PCI C.1.3 compliance."
                    .to_string(),
            );
        }
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}

/// Two-space indented JSON, keys in document order.
fn pretty_json(value: &Value) -> Result<String, ReportError> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Component, DependencyEdge, EnvChecklist, SbomDocument};
    use crate::summary::summarize;
    use serde_json::json;

    fn render(doc: &SbomDocument) -> String {
        SummaryReporter::new()
            .render(&summarize(doc, &EnvChecklist::standard()))
            .unwrap()
    }

    #[test]
    fn test_empty_document_report() {
        let out = render(&SbomDocument::default());
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[0], "Total components in SBOM: 0");
        assert_eq!(lines[2], "Component types:");
        assert_eq!(lines[3], "");
        assert_eq!(lines[4], "Unique suppliers/authors:");
        assert_eq!(lines[5], "");
        assert!(lines[6].starts_with("WARNING: No 'dependencies' section"));
        assert!(!out.contains("Sample component:"));
    }

    #[test]
    fn test_no_dependencies_skips_coverage_listing() {
        let doc = SbomDocument::new(vec![Component::new("orphan")], Vec::new());
        let out = render(&doc);
        assert!(out.contains("justified gap for PCI C.1.2.b."));
        assert!(!out.contains("Components not referenced"));
        assert!(!out.contains("All components are referenced"));
    }

    #[test]
    fn test_unreferenced_listing_with_ellipsis() {
        let components = (0..15)
            .map(|i| Component::new(format!("pkg-{i:02}")).with_bom_ref(format!("r{i}")))
            .collect();
        let doc = SbomDocument::new(
            components,
            vec![DependencyEdge::new("root", vec!["other".into()])],
        );
        let out = render(&doc);
        let lines: Vec<&str> = out.lines().collect();
        let start = lines
            .iter()
            .position(|l| l.starts_with("Components not referenced"))
            .unwrap();

        let listed: Vec<&str> = lines[start + 1..start + 11].to_vec();
        let expected: Vec<String> = (0..10).map(|i| format!("  pkg-{i:02}")).collect();
        assert_eq!(listed, expected);
        assert_eq!(lines[start + 11], "  ... and 5 more");
        assert_eq!(lines[start + 12], "");
    }

    #[test]
    fn test_all_referenced_message() {
        let doc = SbomDocument::new(
            vec![Component::new("lib").with_bom_ref("lib-ref")],
            vec![DependencyEdge::new("app", vec!["lib-ref".into()])],
        );
        let out = render(&doc);
        assert!(out.contains("SBOM includes a 'dependencies' section with 1 entry"));
        assert!(out.contains("All components are referenced in dependency relationships."));
    }

    #[test]
    fn test_unnamed_component_rendering() {
        let doc = SbomDocument::new(
            vec![Component::default()],
            vec![DependencyEdge::new("app", Vec::new())],
        );
        assert!(render(&doc).contains("  (unnamed)"));
    }

    #[test]
    fn test_sample_json_preserves_key_order() {
        let mut comp = Component::new("zeta");
        comp.raw = json!({"name": "zeta", "type": "library", "bom-ref": "z"});
        let out = render(&SbomDocument::new(vec![comp], Vec::new()));
        assert!(out.contains(
            "Sample component:\n{\n  \"name\": \"zeta\",\n  \"type\": \"library\",\n  \"bom-ref\": \"z\"\n}"
        ));
    }

    #[test]
    fn test_none_detected_message() {
        let out = render(&SbomDocument::new(vec![Component::new("left-pad")], Vec::new()));
        assert!(out.contains("  None detected."));
        assert!(out.contains("WARNING: The following common environment-level dependencies"));
    }

    #[test]
    fn test_colored_output_wraps_headers() {
        let summary = summarize(&SbomDocument::default(), &EnvChecklist::standard());
        let out = SummaryReporter::new().colored(true).render(&summary).unwrap();
        assert!(out.contains("\x1b[1mComponent types:\x1b[0m"));

        let plain = SummaryReporter::new().render(&summary).unwrap();
        assert!(!plain.contains('\x1b'));
    }

    #[test]
    fn test_preview_limit_is_configurable() {
        let components = (0..4)
            .map(|i| Component::new(format!("c{i}")).with_bom_ref(format!("r{i}")))
            .collect();
        let doc = SbomDocument::new(components, vec![DependencyEdge::new("x", Vec::new())]);
        let out = SummaryReporter::new()
            .preview_limit(2)
            .render(&summarize(&doc, &EnvChecklist::standard()))
            .unwrap();
        assert!(out.contains("  c0\n  c1\n  ... and 2 more"));
        assert!(!out.contains("  c2"));
    }
}
