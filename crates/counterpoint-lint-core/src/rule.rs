//! Rule trait for defining counterpoint checks.

use crate::context::AnalysisContext;
use crate::types::{Issue, Severity};

/// A voice-leading rule evaluated over a parsed voice pair.
///
/// Rules are independent passes: each receives the same [`AnalysisContext`]
/// and returns its issues in the order it discovers them. The analyzer keeps
/// rule output in registration order.
///
/// # Example
///
/// ```ignore
/// use counterpoint_lint_core::{AnalysisContext, Issue, IssueKind, Rule, VoiceId};
///
/// pub struct NoRepeatedNotes;
///
/// impl Rule for NoRepeatedNotes {
///     fn name(&self) -> &'static str { "no-repeated-notes" }
///     fn code(&self) -> &'static str { "CP900" }
///
///     fn check(&self, ctx: &AnalysisContext) -> Vec<Issue> {
///         let notes = ctx.voice(VoiceId::Upper);
///         notes
///             .windows(2)
///             .enumerate()
///             .filter(|(_, w)| w[0].pitch_value() == w[1].pitch_value())
///             .map(|(i, _)| { /* build issue */ })
///             .collect()
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Returns the kebab-case name of this rule (e.g., "parallel-motion").
    fn name(&self) -> &'static str;

    /// Returns the rule code (e.g., "CP001").
    fn code(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns the default severity for issues from this rule.
    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    /// Checks the voice pair and returns any issues found.
    fn check(&self, ctx: &AnalysisContext) -> Vec<Issue>;
}

/// Type alias for boxed Rule trait objects.
pub type RuleBox = Box<dyn Rule>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::IssueKind;

    struct TestRule;

    impl Rule for TestRule {
        fn name(&self) -> &'static str {
            "test-rule"
        }
        fn code(&self) -> &'static str {
            "TEST001"
        }
        fn description(&self) -> &'static str {
            "A test rule"
        }

        fn check(&self, _ctx: &AnalysisContext) -> Vec<Issue> {
            vec![Issue::new(
                IssueKind::LeapOverOctave,
                self.name(),
                self.default_severity(),
                "Test issue",
            )]
        }
    }

    #[test]
    fn test_rule_trait() {
        let rule = TestRule;
        assert_eq!(rule.name(), "test-rule");
        assert_eq!(rule.code(), "TEST001");
        assert_eq!(rule.default_severity(), Severity::Error);
    }
}
