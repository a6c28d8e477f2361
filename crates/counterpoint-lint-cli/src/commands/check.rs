//! Check command implementation.

use anyhow::{Context, Result};
use counterpoint_lint_core::{Analyzer, Config, Severity};
use counterpoint_lint_rules::{configured_rules, select_rules};

use super::output::Sources;
use crate::config_resolver::ConfigSource;
use crate::OutputFormat;

/// Key used when neither the command line nor the config names one.
pub const DEFAULT_KEY: &str = "C major";

/// Raw command-line inputs for one check.
pub struct Inputs<'a> {
    /// Upper voice line.
    pub upper: &'a str,
    /// Lower voice line.
    pub lower: &'a str,
    /// Key from `--key`, if given.
    pub key: Option<&'a str>,
}

/// Runs the check command.
///
/// Returns `true` when an issue at or above the failure threshold was found.
pub fn run(
    inputs: &Inputs<'_>,
    format: OutputFormat,
    rules_filter: Option<String>,
    fail_on: Option<Severity>,
    source: &ConfigSource,
) -> Result<bool> {
    let config = load_config(source)?;

    let key = resolve_key(inputs.key, &config);
    let threshold = fail_on.or(config.fail_on).unwrap_or(Severity::Error);

    let rules = match rules_filter {
        Some(filter) => {
            let names: Vec<&str> = filter.split(',').map(str::trim).collect();
            select_rules(&names, &config)
        }
        None => configured_rules(&config),
    };

    let analyzer = Analyzer::builder().rules(rules).config(config).build();

    tracing::info!(
        "Checking two voices in {} with {} rules",
        key,
        analyzer.rule_count()
    );

    let result = analyzer.analyze(inputs.upper, inputs.lower, &key);

    super::output::print(
        &result,
        format,
        &Sources {
            upper: inputs.upper,
            lower: inputs.lower,
            key: &key,
        },
    )?;

    Ok(result.has_issues_at(threshold))
}

fn load_config(source: &ConfigSource) -> Result<Config> {
    tracing::debug!("Using config: {source}");
    match source.path() {
        None => Ok(Config::default()),
        Some(p) => {
            Config::from_file(p).with_context(|| format!("Failed to load config: {}", p.display()))
        }
    }
}

fn resolve_key(explicit: Option<&str>, config: &Config) -> String {
    explicit
        .map(str::to_string)
        .or_else(|| config.analyzer.key.clone())
        .unwrap_or_else(|| DEFAULT_KEY.to_string())
}
