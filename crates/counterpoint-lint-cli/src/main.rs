//! counterpoint-lint CLI tool.
//!
//! Usage:
//! ```bash
//! counterpoint-lint check [OPTIONS] <UPPER> <LOWER>
//! counterpoint-lint list-rules
//! counterpoint-lint init
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use counterpoint_lint_core::Severity;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

mod commands;
mod config_resolver;

/// Voice-leading checker for two-voice counterpoint
#[derive(Parser)]
#[command(name = "counterpoint-lint")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check two voices for voice-leading problems
    Check {
        /// Upper voice, e.g. "E4 D4 C4"
        upper: String,

        /// Lower voice, e.g. "C3 G3 C3"
        lower: String,

        /// Key, e.g. "C major" (default: from config, else C major)
        #[arg(short, long)]
        key: Option<String>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Only run specific rules (comma-separated names or codes)
        #[arg(long)]
        rules: Option<String>,

        /// Lowest severity that makes the command fail (default: from config, else error)
        #[arg(long)]
        fail_on: Option<FailOn>,
    },

    /// List available rules
    ListRules,

    /// Initialize configuration file
    Init {
        /// Overwrite existing config
        #[arg(long)]
        force: bool,
    },
}

/// Output format for check results.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output.
    #[default]
    Text,
    /// JSON output.
    Json,
    /// One-line-per-issue compact format.
    Compact,
    /// Diagnostics with the offending note highlighted in its line.
    Pretty,
}

/// Severity threshold accepted by `--fail-on`.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum FailOn {
    /// Fail on any issue.
    Info,
    /// Fail on warnings and errors.
    Warning,
    /// Fail on errors only.
    Error,
}

impl From<FailOn> for Severity {
    fn from(value: FailOn) -> Self {
        match value {
            FailOn::Info => Self::Info,
            FailOn::Warning => Self::Warning,
            FailOn::Error => Self::Error,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Check {
            upper,
            lower,
            key,
            format,
            rules,
            fail_on,
        } => {
            let source = config_resolver::resolve(Path::new("."), cli.config.as_deref());
            let failed = commands::check::run(
                &commands::check::Inputs {
                    upper: &upper,
                    lower: &lower,
                    key: key.as_deref(),
                },
                format,
                rules,
                fail_on.map(Severity::from),
                &source,
            )?;
            if failed {
                std::process::exit(1);
            }
            Ok(())
        }
        Commands::ListRules => {
            commands::list_rules::run();
            Ok(())
        }
        Commands::Init { force } => commands::init::run(force),
    }
}
