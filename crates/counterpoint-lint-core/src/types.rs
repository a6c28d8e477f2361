//! Core types for counterpoint issues and results.

use miette::{Diagnostic, SourceSpan};
use serde::{Deserialize, Serialize};

/// Rule name attached to note and key parse errors.
pub const PARSE_RULE: &str = "parse";

/// Rule name attached to the voice length mismatch warning.
pub const ALIGNMENT_RULE: &str = "voice-alignment";

/// Severity level for issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational message, does not fail the check.
    Info,
    /// Warning that should be addressed.
    Warning,
    /// Error that must be fixed.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Identifies one of the two analyzed voices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoiceId {
    /// The upper melodic line.
    Upper,
    /// The lower melodic line.
    Lower,
}

impl VoiceId {
    /// Both voices, upper first. Single-voice rules report in this order.
    pub const ALL: [Self; 2] = [Self::Upper, Self::Lower];
}

impl std::fmt::Display for VoiceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Upper => write!(f, "upper"),
            Self::Lower => write!(f, "lower"),
        }
    }
}

/// The kind of problem an [`Issue`] describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IssueKind {
    /// Two voices move in similar motion from a fifth to a fifth.
    Parallel5ths,
    /// Two voices move in similar motion from an octave (or unison) to an octave (or unison).
    Parallel8ves,
    /// A melodic leap larger than the allowed limit (an octave by default).
    LeapOverOctave,
    /// A leading tone that is not followed by the tonic a semitone above.
    UnresolvedLeadingTone,
    /// The two voices have a different number of notes.
    LengthMismatch,
    /// A note token or the key string could not be parsed.
    ParseError,
}

impl std::fmt::Display for IssueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Parallel5ths => "Parallel5ths",
            Self::Parallel8ves => "Parallel8ves",
            Self::LeapOverOctave => "LeapOverOctave",
            Self::UnresolvedLeadingTone => "UnresolvedLeadingTone",
            Self::LengthMismatch => "LengthMismatch",
            Self::ParseError => "ParseError",
        };
        f.write_str(name)
    }
}

/// Which input string a [`TokenSpan`] points into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputSource {
    /// The key string.
    Key,
    /// One of the voice lines.
    Voice(VoiceId),
}

/// Byte range of a token inside one of the analysis inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TokenSpan {
    /// Input the offsets refer to.
    pub source: InputSource,
    /// Byte offset of the token start.
    pub offset: usize,
    /// Length of the token in bytes.
    pub length: usize,
}

impl TokenSpan {
    /// Creates a span into the key string.
    #[must_use]
    pub fn in_key(offset: usize, length: usize) -> Self {
        Self {
            source: InputSource::Key,
            offset,
            length,
        }
    }

    /// Creates a span into a voice line.
    #[must_use]
    pub fn in_voice(voice: VoiceId, offset: usize, length: usize) -> Self {
        Self {
            source: InputSource::Voice(voice),
            offset,
            length,
        }
    }
}

impl From<TokenSpan> for SourceSpan {
    fn from(span: TokenSpan) -> Self {
        SourceSpan::from((span.offset, span.length))
    }
}

/// A suggested fix for an issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Human-readable description of the fix.
    pub message: String,
}

impl Suggestion {
    /// Creates a new suggestion.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// A counterpoint problem found during analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// What kind of problem this is.
    pub kind: IssueKind,
    /// Name of the rule that emitted it (e.g., "parallel-motion").
    pub rule: String,
    /// Severity of this issue.
    pub severity: Severity,
    /// Index into the voice(s); the earlier of a compared pair.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<usize>,
    /// Voice the issue belongs to, for single-voice findings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voice: Option<VoiceId>,
    /// Human-readable description.
    pub detail: String,
    /// Optional suggestion for fixing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<Suggestion>,
    /// Where in the input the offending token sits.
    #[serde(skip)]
    pub span: Option<TokenSpan>,
}

impl Issue {
    /// Creates a new issue with no location.
    #[must_use]
    pub fn new(
        kind: IssueKind,
        rule: impl Into<String>,
        severity: Severity,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            rule: rule.into(),
            severity,
            position: None,
            voice: None,
            detail: detail.into(),
            suggestion: None,
            span: None,
        }
    }

    /// Tags the issue with a voice and a position in that voice.
    #[must_use]
    pub fn in_voice(mut self, voice: VoiceId, position: usize) -> Self {
        self.voice = Some(voice);
        self.position = Some(position);
        self
    }

    /// Tags the issue with a position shared by both voices.
    #[must_use]
    pub fn at_position(mut self, position: usize) -> Self {
        self.position = Some(position);
        self
    }

    /// Attaches the source span of the offending token.
    #[must_use]
    pub fn with_span(mut self, span: TokenSpan) -> Self {
        self.span = Some(span);
        self
    }

    /// Adds a suggestion to this issue.
    #[must_use]
    pub fn with_suggestion(mut self, suggestion: Suggestion) -> Self {
        self.suggestion = Some(suggestion);
        self
    }

    /// Returns a short location label such as `upper@3`, `@3` or `upper`.
    #[must_use]
    pub fn location_label(&self) -> Option<String> {
        match (self.voice, self.position) {
            (Some(voice), Some(position)) => Some(format!("{voice}@{position}")),
            (Some(voice), None) => Some(voice.to_string()),
            (None, Some(position)) => Some(format!("@{position}")),
            (None, None) => None,
        }
    }

    /// Formats the issue for terminal output.
    #[must_use]
    pub fn format(&self) -> String {
        use std::fmt::Write;
        let mut output = match self.location_label() {
            Some(label) => format!("{} {} at {label}\n", self.kind, self.rule),
            None => format!("{} {}\n", self.kind, self.rule),
        };
        let _ = writeln!(output, "  {}: {}", self.severity, self.detail);
        if let Some(suggestion) = &self.suggestion {
            let _ = writeln!(output, "  = help: {}", suggestion.message);
        }
        output
    }
}

impl std::fmt::Display for Issue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(label) = self.location_label() {
            write!(f, "{label}: ")?;
        }
        write!(f, "{} [{}] {}", self.severity, self.kind, self.detail)
    }
}

/// Converts an Issue to a miette Diagnostic for rich error display.
#[derive(Debug, thiserror::Error, Diagnostic)]
#[error("{message}")]
pub struct IssueDiagnostic {
    message: String,
    #[help]
    help: Option<String>,
    #[label("{label_message}")]
    span: Option<SourceSpan>,
    label_message: String,
}

impl From<&Issue> for IssueDiagnostic {
    fn from(issue: &Issue) -> Self {
        Self {
            message: format!("[{}] {}", issue.kind, issue.detail),
            help: issue.suggestion.as_ref().map(|s| s.message.clone()),
            span: issue.span.map(SourceSpan::from),
            label_message: issue.rule.clone(),
        }
    }
}

/// Result of running an analysis.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct LintResult {
    /// All issues found, in discovery order.
    pub issues: Vec<Issue>,
    /// Number of notes successfully parsed across both voices.
    pub notes_checked: usize,
}

impl LintResult {
    /// Creates a new empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when no issue of any kind was reported.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    /// Returns true if there are any errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.issues.iter().any(|i| i.severity == Severity::Error)
    }

    /// Counts issues by severity as `(errors, warnings, infos)`.
    #[must_use]
    pub fn count_by_severity(&self) -> (usize, usize, usize) {
        let count = |severity| self.issues.iter().filter(|i| i.severity == severity).count();
        (
            count(Severity::Error),
            count(Severity::Warning),
            count(Severity::Info),
        )
    }

    /// Checks if any issues meet or exceed the given severity threshold.
    #[must_use]
    pub fn has_issues_at(&self, severity: Severity) -> bool {
        self.issues.iter().any(|i| i.severity >= severity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_issue(severity: Severity) -> Issue {
        Issue::new(
            IssueKind::Parallel5ths,
            "parallel-motion",
            severity,
            "Parallel fifths from C4/F3 to D4/G3",
        )
        .at_position(0)
    }

    #[test]
    fn location_label_variants() {
        let issue = Issue::new(IssueKind::ParseError, PARSE_RULE, Severity::Error, "x");
        assert_eq!(issue.location_label(), None);
        assert_eq!(
            issue.clone().at_position(2).location_label().as_deref(),
            Some("@2")
        );
        assert_eq!(
            issue.in_voice(VoiceId::Lower, 5).location_label().as_deref(),
            Some("lower@5")
        );
    }

    #[test]
    fn display_is_one_line() {
        let issue = make_issue(Severity::Error);
        insta::assert_snapshot!(
            issue.to_string(),
            @"@0: error [Parallel5ths] Parallel fifths from C4/F3 to D4/G3"
        );
    }

    #[test]
    fn format_includes_suggestion() {
        let issue = make_issue(Severity::Error)
            .with_suggestion(Suggestion::new("Use contrary motion"));
        let formatted = issue.format();
        assert!(formatted.starts_with("Parallel5ths parallel-motion at @0\n"));
        assert!(formatted.contains("= help: Use contrary motion"));
    }

    #[test]
    fn format_omits_help_when_none() {
        let formatted = make_issue(Severity::Warning).format();
        assert!(!formatted.contains("help:"));
    }

    #[test]
    fn serializes_kind_and_voice_names() {
        let issue = Issue::new(
            IssueKind::LeapOverOctave,
            "leap-over-octave",
            Severity::Error,
            "leap",
        )
        .in_voice(VoiceId::Upper, 0)
        .with_span(TokenSpan::in_voice(VoiceId::Upper, 0, 2));
        let value = toml::Value::try_from(&issue).unwrap();
        assert_eq!(value["kind"].as_str(), Some("LeapOverOctave"));
        assert_eq!(value["voice"].as_str(), Some("upper"));
        assert_eq!(value["severity"].as_str(), Some("error"));
        assert!(value.get("span").is_none());
    }

    #[test]
    fn diagnostic_carries_span_and_help() {
        let issue = make_issue(Severity::Error)
            .with_span(TokenSpan::in_voice(VoiceId::Upper, 3, 2))
            .with_suggestion(Suggestion::new("Use contrary motion"));
        let diag = IssueDiagnostic::from(&issue);
        assert_eq!(diag.span, Some(SourceSpan::from((3, 2))));
        assert_eq!(diag.help.as_deref(), Some("Use contrary motion"));
        assert!(diag.to_string().starts_with("[Parallel5ths]"));
    }

    #[test]
    fn has_issues_at_threshold() {
        let mut result = LintResult::new();
        assert!(result.is_clean());
        result.issues.push(make_issue(Severity::Warning));
        assert!(!result.has_issues_at(Severity::Error));
        assert!(result.has_issues_at(Severity::Warning));
        assert!(!result.has_errors());
    }

    #[test]
    fn count_by_severity_tallies() {
        let mut result = LintResult::new();
        result.issues.push(make_issue(Severity::Warning));
        result.issues.push(make_issue(Severity::Error));
        result.issues.push(make_issue(Severity::Error));
        assert_eq!(result.count_by_severity(), (2, 1, 0));
    }
}
