//! Rule requiring the leading tone to resolve up to the tonic.
//!
//! Only the note immediately after a leading tone is inspected. The last note
//! of a voice has no successor and is never flagged.

use counterpoint_lint_core::{
    pitch_class_name, AnalysisContext, Issue, IssueKind, Note, Rule, Severity, Suggestion,
    VoiceId,
};

/// Rule code for unresolved-leading-tone.
pub const CODE: &str = "CP003";

/// Rule name for unresolved-leading-tone.
pub const NAME: &str = "unresolved-leading-tone";

/// Flags leading tones that are not followed by the tonic a semitone above.
#[derive(Debug, Clone)]
pub struct UnresolvedLeadingTone {
    /// Custom severity.
    pub severity: Severity,
}

impl Default for UnresolvedLeadingTone {
    fn default() -> Self {
        Self::new()
    }
}

impl UnresolvedLeadingTone {
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

impl Rule for UnresolvedLeadingTone {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Requires the leading tone to rise a semitone to the tonic"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, ctx: &AnalysisContext) -> Vec<Issue> {
        let tonic = ctx.key.tonic();
        let leading_tone = ctx.key.leading_tone();
        let mut issues = Vec::new();

        for voice in VoiceId::ALL {
            for (i, pair) in ctx.voice(voice).windows(2).enumerate() {
                let (note, next) = (&pair[0], &pair[1]);
                if note.pitch_class() != leading_tone || resolves(note, next, tonic) {
                    continue;
                }

                issues.push(
                    Issue::new(
                        IssueKind::UnresolvedLeadingTone,
                        NAME,
                        self.severity,
                        format!(
                            "Leading tone {note} moves to {next} instead of rising to the tonic"
                        ),
                    )
                    .in_voice(voice, i)
                    .with_span(note.span_in(voice))
                    .with_suggestion(Suggestion::new(format!(
                        "Follow {note} with {} a semitone above",
                        pitch_class_name(tonic)
                    ))),
                );
            }
        }

        issues
    }
}

/// The next note must be the tonic and sit one semitone above in pitch-class terms.
fn resolves(note: &Note, next: &Note, tonic: u8) -> bool {
    let step = (i32::from(next.pitch_class()) - i32::from(note.pitch_class())).rem_euclid(12);
    next.pitch_class() == tonic && step == 1
}
