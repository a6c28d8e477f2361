//! Core analyzer for orchestrating rule execution.

use crate::config::Config;
use crate::context::AnalysisContext;
use crate::key::Key;
use crate::rule::{Rule, RuleBox};
use crate::types::{
    Issue, IssueKind, LintResult, Severity, Suggestion, TokenSpan, VoiceId, ALIGNMENT_RULE,
    PARSE_RULE,
};
use crate::voice::parse_line;

use tracing::{debug, info};

/// Builder for configuring an [`Analyzer`].
#[derive(Default)]
pub struct AnalyzerBuilder {
    rules: Vec<RuleBox>,
    config: Option<Config>,
}

impl AnalyzerBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a rule to the analyzer.
    #[must_use]
    pub fn rule<R: Rule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Adds a boxed rule to the analyzer.
    #[must_use]
    pub fn rule_box(mut self, rule: RuleBox) -> Self {
        self.rules.push(rule);
        self
    }

    /// Adds several boxed rules, keeping their order.
    #[must_use]
    pub fn rules<I>(mut self, rules: I) -> Self
    where
        I: IntoIterator<Item = RuleBox>,
    {
        self.rules.extend(rules);
        self
    }

    /// Sets the configuration.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Builds the analyzer.
    #[must_use]
    pub fn build(self) -> Analyzer {
        Analyzer {
            rules: self.rules,
            config: self.config.unwrap_or_default(),
        }
    }
}

/// The main analyzer that orchestrates rule execution.
///
/// Use [`Analyzer::builder()`] to construct an instance. An analyzer holds no
/// mutable state, so one instance can serve any number of analyses.
pub struct Analyzer {
    rules: Vec<RuleBox>,
    config: Config,
}

impl Analyzer {
    /// Creates a new builder for configuring an analyzer.
    #[must_use]
    pub fn builder() -> AnalyzerBuilder {
        AnalyzerBuilder::new()
    }

    /// Returns the number of registered rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Analyzes an upper and a lower voice line in the given key.
    ///
    /// Problems are reported as issues, never as errors. An unparseable key
    /// stops the analysis and yields that single issue.
    #[must_use]
    pub fn analyze(&self, upper: &str, lower: &str, key: &str) -> LintResult {
        let mut result = LintResult::new();

        let key = match Key::parse(key) {
            Ok(parsed) => parsed,
            Err(err) => {
                debug!("Key parse failed, skipping analysis: {}", err);
                result.issues.push(
                    Issue::new(
                        IssueKind::ParseError,
                        PARSE_RULE,
                        Severity::Error,
                        err.to_string(),
                    )
                    .with_span(TokenSpan::in_key(0, key.len())),
                );
                return result;
            }
        };

        let upper = parse_line(upper, VoiceId::Upper);
        let lower = parse_line(lower, VoiceId::Lower);
        result.notes_checked = upper.notes.len() + lower.notes.len();
        result.issues.extend(upper.issues);
        result.issues.extend(lower.issues);

        let ctx = AnalysisContext::new(key, &upper.notes, &lower.notes);

        if upper.notes.len() != lower.notes.len() {
            result.issues.push(
                Issue::new(
                    IssueKind::LengthMismatch,
                    ALIGNMENT_RULE,
                    Severity::Warning,
                    format!(
                        "Voices differ in length: upper has {} notes, lower has {}; \
                         paired checks cover the first {}",
                        upper.notes.len(),
                        lower.notes.len(),
                        ctx.paired_len()
                    ),
                )
                .with_suggestion(Suggestion::new(
                    "Give both voices one note per beat for the whole passage",
                )),
            );
        }

        for rule in &self.rules {
            if !self.config.is_rule_enabled(rule.name()) {
                debug!("Skipping disabled rule: {}", rule.name());
                continue;
            }

            let issues = rule.check(&ctx);
            debug!("{} reported {} issue(s)", rule.name(), issues.len());
            result
                .issues
                .extend(self.apply_severity_override(rule.name(), issues));
        }

        info!(
            "Analysis complete in {}: {} issue(s) over {} notes",
            key,
            result.issues.len(),
            result.notes_checked
        );

        result
    }

    /// Applies severity overrides from configuration.
    fn apply_severity_override(&self, rule_name: &str, mut issues: Vec<Issue>) -> Vec<Issue> {
        if let Some(severity) = self.config.rule_severity(rule_name) {
            for issue in &mut issues {
                issue.severity = severity;
            }
        }
        issues
    }
}
