//! sbom-summary: SBOM compliance summary for PCI evidence gathering.

use anyhow::{Context, Result};
use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};
use sbom_summary::{
    AppConfig, ConfigOverrides, cli,
    config::{
        CONFIG_FILE_NAMES, SBOM_PATH_ENV, discover_config_file, generate_example_config,
        search_dirs,
    },
    pipeline::exit_codes,
};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "sbom-summary")]
#[command(version)]
#[command(about = "Summarize an SBOM for PCI compliance evidence", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Summary produced
    1  Error occurred (missing file, invalid JSON, bad configuration)

INPUT PATH (first match wins):
    SBOM argument, $SBOM_PATH, input.sbom_path in the config file, ./sbom.json

EXAMPLES:
    # Summarize ./sbom.json
    sbom-summary

    # Summarize a specific SBOM and keep the evidence
    sbom-summary build/sbom.cdx.json -O evidence/pci-c1-sbom.txt

    # Path from the environment
    SBOM_PATH=/repos/eshop/sbom.json sbom-summary")]
struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long, global = true)]
    no_color: bool,

    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(flatten)]
    summary: SummaryArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Arguments for the default summary command
#[derive(Args)]
struct SummaryArgs {
    /// Path to the SBOM (falls back to $SBOM_PATH, the config file, then ./sbom.json)
    sbom: Option<PathBuf>,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Number of unreferenced component names to list (default: 10)
    #[arg(long)]
    preview_limit: Option<usize>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Show, discover, or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (merged from defaults + file)
    Show,
    /// Print config file search paths and discovered config file
    Path,
    /// Generate an example .sbom-summary.yaml in the current directory
    Init,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries only the report
    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    let overrides = cli_overrides(&cli);

    match cli.command {
        None => {
            let (config, loaded_from) =
                AppConfig::from_file_with_overrides(cli.config.as_deref(), &overrides);
            if let Some(path) = &loaded_from {
                tracing::debug!("Using config file {}", path.display());
            }
            match cli::run_summary(&config) {
                Ok(exit_codes::SUCCESS) => Ok(()),
                Ok(exit_code) => std::process::exit(exit_code),
                Err(err) => {
                    tracing::error!("{err:#}");
                    std::process::exit(exit_codes::ERROR);
                }
            }
        }

        Some(Commands::Completions { shell }) => {
            generate(shell, &mut Cli::command(), "sbom-summary", &mut io::stdout());
            Ok(())
        }

        Some(Commands::Config { action }) => match action {
            ConfigAction::Show => {
                let (config, loaded_from) =
                    AppConfig::from_file_with_overrides(cli.config.as_deref(), &overrides);
                if let Some(path) = &loaded_from {
                    eprintln!("# Loaded from: {}", path.display());
                } else {
                    eprintln!("# No config file found; showing defaults");
                }
                let yaml =
                    serde_yaml_ng::to_string(&config).context("failed to serialize config")?;
                print!("{yaml}");
                Ok(())
            }
            ConfigAction::Path => {
                eprintln!("Config file search paths (in order):");
                for dir in search_dirs() {
                    eprintln!("  {}", dir.display());
                }
                eprintln!();
                eprintln!("Recognized file names:");
                for name in CONFIG_FILE_NAMES {
                    eprintln!("  {name}");
                }
                eprintln!();
                match discover_config_file(cli.config.as_deref()) {
                    Some(path) => eprintln!("Active config file: {}", path.display()),
                    None => eprintln!("No config file found."),
                }
                Ok(())
            }
            ConfigAction::Init => {
                let target = std::env::current_dir()
                    .context("cannot determine current directory")?
                    .join(CONFIG_FILE_NAMES[0]);
                if target.exists() {
                    anyhow::bail!(
                        "{} already exists. Remove it first to re-initialize.",
                        target.display()
                    );
                }
                std::fs::write(&target, generate_example_config())
                    .with_context(|| format!("failed to write {}", target.display()))?;
                eprintln!("Created {}", target.display());
                Ok(())
            }
        },
    }
}

/// Settings given on the command line, to be layered over the config file.
fn cli_overrides(cli: &Cli) -> ConfigOverrides {
    ConfigOverrides {
        sbom_path: cli.summary.sbom.clone(),
        output_file: cli.summary.output_file.clone(),
        preview_limit: cli.summary.preview_limit,
        no_color: cli.no_color,
        quiet: cli.quiet,
    }
    .with_env_sbom_path(std::env::var_os(SBOM_PATH_ENV))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_overrides_carry_explicit_values() {
        let cli = Cli::try_parse_from([
            "sbom-summary",
            "build/sbom.json",
            "--preview-limit",
            "10",
            "-O",
            "summary.txt",
            "--no-color",
        ])
        .unwrap();
        let overrides = cli_overrides(&cli);

        assert_eq!(overrides.sbom_path, Some(PathBuf::from("build/sbom.json")));
        assert_eq!(overrides.preview_limit, Some(10));
        assert_eq!(overrides.output_file, Some(PathBuf::from("summary.txt")));
        assert!(overrides.no_color);
        assert!(!overrides.quiet);
    }

    #[test]
    fn test_cli_without_preview_limit_leaves_it_unset() {
        let cli = Cli::try_parse_from(["sbom-summary", "-q"]).unwrap();
        let overrides = cli_overrides(&cli);
        assert_eq!(overrides.preview_limit, None);
        assert!(overrides.quiet);
    }
}
