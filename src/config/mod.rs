//! Configuration for sbom-summary.
//!
//! Settings come from three layers, later ones winning:
//! built-in defaults, a discovered YAML config file, and the command line
//! (including the `SBOM_PATH` environment variable).
//!
//! # Configuration File
//!
//! Place a `.sbom-summary.yaml` file in your project root or
//! `~/.config/sbom-summary/`:
//!
//! ```yaml
//! input:
//!   sbom_path: build/sbom.json
//! report:
//!   preview_limit: 20
//! ```

mod defaults;
pub mod file;
mod types;
mod validation;

pub use defaults::{CONFIG_DIR_NAME, CONFIG_FILE_NAMES, DEFAULT_SBOM_PATH, SBOM_PATH_ENV};
pub use types::{
    AppConfig, AppConfigBuilder, BehaviorConfig, ConfigOverrides, InputConfig, OutputConfig,
    ReportSettings,
};
pub use validation::{ConfigError, Validatable};

pub use file::{
    ConfigFileError, discover_config_file, generate_example_config, load_config_file,
    load_or_default, search_dirs,
};
