//! Configuration types.

use super::defaults::DEFAULT_SBOM_PATH;
use crate::summary::DEFAULT_PREVIEW_LIMIT;
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::path::PathBuf;

/// Top-level configuration, loadable from YAML and overridable from the CLI.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Where the SBOM comes from
    pub input: InputConfig,
    /// Where the report goes
    pub output: OutputConfig,
    /// Report layout
    pub report: ReportSettings,
    /// Progress logging
    pub behavior: BehaviorConfig,
}

impl AppConfig {
    /// Create an `AppConfig` builder.
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// The SBOM path to read, falling back to `sbom.json`.
    #[must_use]
    pub fn sbom_path(&self) -> PathBuf {
        self.input
            .sbom_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SBOM_PATH))
    }
}

/// Input configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Path to the SBOM document
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sbom_path: Option<PathBuf>,
}

/// Output configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output file path (stdout if not set)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Disable colored output
    pub no_color: bool,
}

/// Report layout settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportSettings {
    /// Number of unreferenced component names listed before eliding
    pub preview_limit: usize,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            preview_limit: DEFAULT_PREVIEW_LIMIT,
        }
    }
}

/// Behavior flags
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Suppress progress logging
    pub quiet: bool,
}

// ============================================================================
// Builder for AppConfig
// ============================================================================

/// Builder for constructing `AppConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    /// Set the SBOM path.
    pub fn sbom_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.input.sbom_path = Some(path.into());
        self
    }

    /// Set the output file.
    pub fn output_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.output.file = Some(path.into());
        self
    }

    /// Disable colored output.
    pub const fn no_color(mut self, no_color: bool) -> Self {
        self.config.output.no_color = no_color;
        self
    }

    /// Set the unreferenced-name preview length.
    pub const fn preview_limit(mut self, limit: usize) -> Self {
        self.config.report.preview_limit = limit;
        self
    }

    /// Suppress progress logging.
    pub const fn quiet(mut self, quiet: bool) -> Self {
        self.config.behavior.quiet = quiet;
        self
    }

    /// Build the configuration.
    #[must_use]
    pub fn build(self) -> AppConfig {
        self.config
    }
}

// ============================================================================
// Command-line overrides
// ============================================================================

/// Settings given on the command line or in the environment.
///
/// `None` means "not given"; any `Some` value replaces the file setting, even
/// when it equals the built-in default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    /// Positional SBOM argument, or `SBOM_PATH` when no argument was given
    pub sbom_path: Option<PathBuf>,
    /// `-O/--output-file`
    pub output_file: Option<PathBuf>,
    /// `--preview-limit`
    pub preview_limit: Option<usize>,
    /// `--no-color`
    pub no_color: bool,
    /// `-q/--quiet`
    pub quiet: bool,
}

impl ConfigOverrides {
    /// Fall back to the `SBOM_PATH` value when no path argument was given.
    ///
    /// An empty value counts as unset.
    #[must_use]
    pub fn with_env_sbom_path(mut self, env_value: Option<OsString>) -> Self {
        if self.sbom_path.is_none() {
            self.sbom_path = env_value.filter(|v| !v.is_empty()).map(PathBuf::from);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sbom_path() {
        assert_eq!(AppConfig::default().sbom_path(), PathBuf::from("sbom.json"));
    }

    #[test]
    fn test_builder() {
        let config = AppConfig::builder()
            .sbom_path("/audit/sbom.json")
            .output_file("summary.txt")
            .no_color(true)
            .preview_limit(25)
            .quiet(true)
            .build();

        assert_eq!(config.sbom_path(), PathBuf::from("/audit/sbom.json"));
        assert_eq!(config.output.file, Some(PathBuf::from("summary.txt")));
        assert!(config.output.no_color);
        assert_eq!(config.report.preview_limit, 25);
        assert!(config.behavior.quiet);
    }

    #[test]
    fn test_env_sbom_path_used_without_argument() {
        let overrides =
            ConfigOverrides::default().with_env_sbom_path(Some(OsString::from("/env/sbom.json")));
        assert_eq!(overrides.sbom_path, Some(PathBuf::from("/env/sbom.json")));
    }

    #[test]
    fn test_argument_wins_over_env_sbom_path() {
        let overrides = ConfigOverrides {
            sbom_path: Some(PathBuf::from("arg.json")),
            ..ConfigOverrides::default()
        }
        .with_env_sbom_path(Some(OsString::from("/env/sbom.json")));
        assert_eq!(overrides.sbom_path, Some(PathBuf::from("arg.json")));
    }

    #[test]
    fn test_empty_env_sbom_path_is_unset() {
        let overrides = ConfigOverrides::default().with_env_sbom_path(Some(OsString::new()));
        assert_eq!(overrides.sbom_path, None);
    }

    #[test]
    fn test_default_preview_limit() {
        assert_eq!(ReportSettings::default().preview_limit, 10);
    }
}
