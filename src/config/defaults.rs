//! Default values for sbom-summary configuration.

/// Input path used when none is given on the command line, in the
/// environment, or in a config file.
pub const DEFAULT_SBOM_PATH: &str = "sbom.json";

/// Environment variable naming the input SBOM.
pub const SBOM_PATH_ENV: &str = "SBOM_PATH";

/// Directory under the user config directory searched for a config file.
pub const CONFIG_DIR_NAME: &str = "sbom-summary";

/// Recognized config file names, in search order.
pub const CONFIG_FILE_NAMES: &[&str] = &[
    ".sbom-summary.yaml",
    ".sbom-summary.yml",
    "sbom-summary.yaml",
    "sbom-summary.yml",
    ".sbom-summaryrc",
];
