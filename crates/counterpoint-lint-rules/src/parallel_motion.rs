//! Rule to forbid parallel fifths and parallel octaves/unisons.
//!
//! # Rationale
//!
//! Two voices that hold a perfect fifth or an octave while moving in the
//! same direction lose their independence; the classical style forbids it.
//!
//! # Detection
//!
//! For each pair of adjacent aligned positions, the intervals between the
//! voices are reduced to interval classes (mod 12). When both voices step in
//! the same nonzero direction and both classes are 7, the pair is parallel
//! fifths; when both are 0 it is parallel octaves. Unisons share class 0 with
//! octaves and are reported as `Parallel8ves`. Contrary and oblique motion are
//! exempt.

use counterpoint_lint_core::{
    AnalysisContext, Issue, IssueKind, Note, Rule, Severity, Suggestion, VoiceId,
};
use std::cmp::Ordering;

/// Rule code for parallel-motion.
pub const CODE: &str = "CP001";

/// Rule name for parallel-motion.
pub const NAME: &str = "parallel-motion";

const FIFTH: u32 = 7;
const OCTAVE: u32 = 0;

/// Forbids parallel fifths and octaves between the two voices.
#[derive(Debug, Clone)]
pub struct ParallelMotion {
    /// Custom severity.
    pub severity: Severity,
}

impl Default for ParallelMotion {
    fn default() -> Self {
        Self::new()
    }
}

impl ParallelMotion {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            severity: Severity::Error,
        }
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

impl Rule for ParallelMotion {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Forbids parallel fifths and octaves/unisons in similar motion"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, ctx: &AnalysisContext) -> Vec<Issue> {
        let pairs: Vec<(&Note, &Note)> = ctx.aligned().collect();
        let mut issues = Vec::new();

        for (i, window) in pairs.windows(2).enumerate() {
            let (upper, lower) = window[0];
            let (next_upper, next_lower) = window[1];

            let upper_step = direction(upper, next_upper);
            if upper_step == Ordering::Equal || upper_step != direction(lower, next_lower) {
                continue;
            }

            let intervals = (
                interval_class(upper, lower),
                interval_class(next_upper, next_lower),
            );
            let kind = match intervals {
                (FIFTH, FIFTH) => IssueKind::Parallel5ths,
                (OCTAVE, OCTAVE) => IssueKind::Parallel8ves,
                _ => continue,
            };

            let label = if kind == IssueKind::Parallel5ths {
                "fifths"
            } else {
                "octaves"
            };

            issues.push(
                Issue::new(
                    kind,
                    NAME,
                    self.severity,
                    format!(
                        "Parallel {label} between positions {i} and {}: \
                         {upper}/{lower} to {next_upper}/{next_lower}",
                        i + 1
                    ),
                )
                .at_position(i)
                .with_span(upper.span_in(VoiceId::Upper))
                .with_suggestion(Suggestion::new(
                    "Approach the second interval by contrary or oblique motion",
                )),
            );
        }

        issues
    }
}

/// Absolute interval between two simultaneous notes, reduced mod 12.
fn interval_class(a: &Note, b: &Note) -> u32 {
    a.pitch_value().abs_diff(b.pitch_value()) % 12
}

/// Melodic direction from one note to the next.
fn direction(from: &Note, to: &Note) -> Ordering {
    to.pitch_value().cmp(&from.pitch_value())
}

#[cfg(test)]
mod tests {
    use super::*;
    use counterpoint_lint_core::{parse_line, Key, TokenSpan};

    fn check_lines(upper: &str, lower: &str) -> Vec<Issue> {
        let key = Key::parse("C major").expect("valid key");
        let upper = parse_line(upper, VoiceId::Upper);
        let lower = parse_line(lower, VoiceId::Lower);
        let ctx = AnalysisContext::new(key, &upper.notes, &lower.notes);
        ParallelMotion::new().check(&ctx)
    }

    #[test]
    fn test_detects_parallel_fifths() {
        let issues = check_lines("C4 D4", "F3 G3");
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].kind, IssueKind::Parallel5ths);
        assert_eq!(issues[0].position, Some(0));
        assert_eq!(issues[0].voice, None);
        assert_eq!(issues[0].rule, NAME);
    }

    #[test]
    fn test_detects_parallel_octaves_descending() {
        let issues = check_lines("E4 D4", "E3 D3");
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].kind, IssueKind::Parallel8ves);
    }

    #[test]
    fn test_unisons_count_as_octaves() {
        let issues = check_lines("C4 D4", "C4 D4");
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].kind, IssueKind::Parallel8ves);
    }

    #[test]
    fn test_compound_fifths_are_detected() {
        // Twelfth (19 semitones) to twelfth.
        let issues = check_lines("G4 A4", "C3 D3");
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].kind, IssueKind::Parallel5ths);
    }

    #[test]
    fn test_contrary_motion_is_exempt() {
        // Fifth to twelfth with the voices moving apart.
        assert!(check_lines("C4 D5", "F3 G2").is_empty());
    }

    #[test]
    fn test_oblique_motion_is_exempt() {
        // Octave to octave with the lower voice holding.
        assert!(check_lines("C4 C5", "C3 C3").is_empty());
    }

    #[test]
    fn test_crossed_voices_use_absolute_interval() {
        let issues = check_lines("F3 G3", "C4 D4");
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].kind, IssueKind::Parallel5ths);
    }

    #[test]
    fn test_reports_each_pair_in_order() {
        let issues = check_lines("C4 D4 E4 F4 E4", "F3 G3 A3 F3 E3");
        let found: Vec<_> = issues.iter().map(|i| (i.kind, i.position)).collect();
        assert_eq!(
            found,
            vec![
                (IssueKind::Parallel5ths, Some(0)),
                (IssueKind::Parallel5ths, Some(1)),
                (IssueKind::Parallel8ves, Some(3)),
            ]
        );
    }

    #[test]
    fn test_only_shared_prefix_is_checked() {
        assert!(check_lines("C4 D4 E4", "F3").is_empty());
        assert_eq!(check_lines("C4 D4 E4", "F3 G3").len(), 1);
    }

    #[test]
    fn test_extreme_octaves_do_not_overflow() {
        // Pitch values near i32::MIN and i32::MAX.
        assert!(check_lines("C-178956971 C178956969", "C3 D3").is_empty());
        assert!(check_lines("C178956969 C-178956971", "C3 D3").is_empty());

        let issues = check_lines("C-178956971 C178956969", "C-178956970 C178956968");
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].kind, IssueKind::Parallel8ves);
    }

    #[test]
    fn test_detail_names_both_intervals() {
        let issues = check_lines("c4 D4", "F3 G3");
        insta::assert_snapshot!(
            issues[0].detail,
            @"Parallel fifths between positions 0 and 1: c4/F3 to D4/G3"
        );
    }

    #[test]
    fn test_span_points_at_upper_note() {
        let issues = check_lines("E4 C4 D4", "A3 F3 G3");
        assert_eq!(issues.len(), 2);
        assert_eq!(
            issues[1].span,
            Some(TokenSpan::in_voice(VoiceId::Upper, 3, 2))
        );
    }
}
