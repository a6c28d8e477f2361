//! Rule to forbid melodic leaps wider than an octave.
//!
//! # Configuration
//!
//! - `max_leap`: Largest allowed leap in semitones (default: 12)

use counterpoint_lint_core::{
    AnalysisContext, Issue, IssueKind, Rule, RuleConfig, Severity, Suggestion, VoiceId,
};

/// Rule code for leap-over-octave.
pub const CODE: &str = "CP002";

/// Rule name for leap-over-octave.
pub const NAME: &str = "leap-over-octave";

/// Default leap limit: one octave.
pub const DEFAULT_MAX_LEAP: u32 = 12;

/// Flags adjacent notes in one voice that are further apart than the limit.
#[derive(Debug, Clone)]
pub struct LeapOverOctave {
    /// Largest allowed leap in semitones.
    pub max_leap: u32,
    /// Custom severity.
    pub severity: Severity,
}

impl Default for LeapOverOctave {
    fn default() -> Self {
        Self::new()
    }
}

impl LeapOverOctave {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            max_leap: DEFAULT_MAX_LEAP,
            severity: Severity::Error,
        }
    }

    /// Creates the rule from its `[rules.leap-over-octave]` config block.
    #[must_use]
    pub fn from_config(config: &RuleConfig) -> Self {
        let max_leap = config.get_int("max_leap", i64::from(DEFAULT_MAX_LEAP));
        let max_leap = u32::try_from(max_leap).unwrap_or_else(|_| {
            tracing::warn!(
                "Ignoring invalid max_leap {} for {}, using {}",
                max_leap,
                NAME,
                DEFAULT_MAX_LEAP
            );
            DEFAULT_MAX_LEAP
        });
        Self::new().max_leap(max_leap)
    }

    /// Sets the largest allowed leap in semitones.
    #[must_use]
    pub fn max_leap(mut self, semitones: u32) -> Self {
        self.max_leap = semitones;
        self
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

impl Rule for LeapOverOctave {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Forbids melodic leaps larger than an octave"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, ctx: &AnalysisContext) -> Vec<Issue> {
        let mut issues = Vec::new();

        for voice in VoiceId::ALL {
            for (i, pair) in ctx.voice(voice).windows(2).enumerate() {
                let (from, to) = (&pair[0], &pair[1]);
                let leap = from.pitch_value().abs_diff(to.pitch_value());
                if leap <= self.max_leap {
                    continue;
                }

                issues.push(
                    Issue::new(
                        IssueKind::LeapOverOctave,
                        NAME,
                        self.severity,
                        format!(
                            "Leap of {leap} semitones from {from} to {to} exceeds {} semitones",
                            self.max_leap
                        ),
                    )
                    .in_voice(voice, i)
                    .with_span(from.span_in(voice))
                    .with_suggestion(Suggestion::new(
                        "Move the second note by octave or fill the leap with steps",
                    )),
                );
            }
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use counterpoint_lint_core::{parse_line, Config, Key};

    fn check_with(rule: &LeapOverOctave, upper: &str, lower: &str) -> Vec<Issue> {
        let key = Key::parse("C major").expect("valid key");
        let upper = parse_line(upper, VoiceId::Upper);
        let lower = parse_line(lower, VoiceId::Lower);
        let ctx = AnalysisContext::new(key, &upper.notes, &lower.notes);
        rule.check(&ctx)
    }

    fn check_lines(upper: &str, lower: &str) -> Vec<Issue> {
        check_with(&LeapOverOctave::new(), upper, lower)
    }

    #[test]
    fn test_detects_leap_over_octave() {
        let issues = check_lines("C4 D5", "C3 C3");
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].kind, IssueKind::LeapOverOctave);
        assert_eq!(issues[0].voice, Some(VoiceId::Upper));
        assert_eq!(issues[0].position, Some(0));
        assert!(issues[0].detail.contains("Leap of 14 semitones"));
    }

    #[test]
    fn test_exact_octave_is_allowed() {
        assert!(check_lines("C4 C5 C4", "G2 G3 G2").is_empty());
    }

    #[test]
    fn test_one_semitone_past_octave_is_flagged() {
        let issues = check_lines("C4 C#5", "C3 C3");
        assert_eq!(issues.len(), 1);
        assert!(issues[0].detail.contains("Leap of 13 semitones"));
    }

    #[test]
    fn test_upper_voice_reported_before_lower() {
        let issues = check_lines("C5 C4 D5", "C2 D3 D3");
        let found: Vec<_> = issues.iter().map(|i| (i.voice, i.position)).collect();
        assert_eq!(
            found,
            vec![(Some(VoiceId::Upper), Some(1)), (Some(VoiceId::Lower), Some(0))]
        );
    }

    #[test]
    fn test_checks_full_length_of_each_voice() {
        let issues = check_lines("C4 D4 E4 G5", "C3");
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].position, Some(2));
    }

    #[test]
    fn test_custom_max_leap() {
        let rule = LeapOverOctave::new().max_leap(7);
        let issues = check_with(&rule, "C4 A4", "C3 G3");
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].voice, Some(VoiceId::Upper));
    }

    #[test]
    fn test_from_config() {
        let config = Config::parse("[rules.leap-over-octave]\nmax_leap = 5\n").unwrap();
        let rule = LeapOverOctave::from_config(config.rule(NAME).unwrap());
        assert_eq!(rule.max_leap, 5);

        let config = Config::parse("[rules.leap-over-octave]\nmax_leap = -3\n").unwrap();
        let rule = LeapOverOctave::from_config(config.rule(NAME).unwrap());
        assert_eq!(rule.max_leap, DEFAULT_MAX_LEAP);
    }
}
