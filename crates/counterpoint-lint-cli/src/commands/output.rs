//! Shared output formatting for lint results.

use anyhow::Result;
use counterpoint_lint_core::{InputSource, Issue, IssueDiagnostic, LintResult, Severity, VoiceId};
use miette::{NamedSource, Report};
use std::fmt::Write;

use crate::OutputFormat;

/// The strings an analysis ran over, used to render source snippets.
pub struct Sources<'a> {
    /// Upper voice line.
    pub upper: &'a str,
    /// Lower voice line.
    pub lower: &'a str,
    /// Key string.
    pub key: &'a str,
}

impl Sources<'_> {
    fn named(&self, source: InputSource) -> NamedSource<String> {
        let (name, text) = match source {
            InputSource::Key => ("key", self.key),
            InputSource::Voice(VoiceId::Upper) => ("upper", self.upper),
            InputSource::Voice(VoiceId::Lower) => ("lower", self.lower),
        };
        NamedSource::new(name, text.to_string())
    }
}

/// Print lint results in the specified format.
pub fn print(result: &LintResult, format: OutputFormat, sources: &Sources<'_>) -> Result<()> {
    match format {
        OutputFormat::Text => print!("{}", render_text(result)),
        OutputFormat::Json => return print_json(result),
        OutputFormat::Compact => print_compact(result),
        OutputFormat::Pretty => print!("{}", render_pretty(result, sources)),
    }
    Ok(())
}

fn render_text(result: &LintResult) -> String {
    let (errors, warnings, infos) = result.count_by_severity();
    let mut out = String::new();

    for issue in &result.issues {
        let color = match issue.severity {
            Severity::Error => "\x1b[31m",
            Severity::Warning => "\x1b[33m",
            Severity::Info => "\x1b[34m",
        };
        let _ = writeln!(out, "{color}{}\x1b[0m", issue.format());
    }

    let summary_color = if errors > 0 {
        "\x1b[31m"
    } else if warnings > 0 {
        "\x1b[33m"
    } else {
        "\x1b[32m"
    };

    let _ = writeln!(
        out,
        "{}Found {} error(s), {} warning(s), {} info(s) in {} note(s)\x1b[0m",
        summary_color, errors, warnings, infos, result.notes_checked
    );
    out
}

fn print_json(result: &LintResult) -> Result<()> {
    let json = serde_json::to_string_pretty(result)?;
    println!("{json}");
    Ok(())
}

fn print_compact(result: &LintResult) {
    for issue in &result.issues {
        println!("{issue}");
    }
}

/// Diagnostics and summary as one block, so both land on the same stream.
fn render_pretty(result: &LintResult, sources: &Sources<'_>) -> String {
    let mut out = String::new();
    for issue in &result.issues {
        let _ = writeln!(out, "{:?}", report(issue, sources));
    }

    let (errors, warnings, infos) = result.count_by_severity();
    let _ = writeln!(
        out,
        "Found {errors} error(s), {warnings} warning(s), {infos} info(s)"
    );
    out
}

fn report(issue: &Issue, sources: &Sources<'_>) -> Report {
    let diagnostic = Report::new(IssueDiagnostic::from(issue));
    match issue.span {
        Some(span) => diagnostic.with_source_code(sources.named(span.source)),
        None => diagnostic,
    }
}
