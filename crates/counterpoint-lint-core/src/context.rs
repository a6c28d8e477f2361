//! Context types for rule execution.

use crate::key::Key;
use crate::note::Note;
use crate::types::VoiceId;

/// Parsed inputs handed to every rule.
///
/// Rules only see successfully parsed notes; parse errors have already been
/// reported by the analyzer.
#[derive(Debug, Clone, Copy)]
pub struct AnalysisContext<'a> {
    /// The resolved key.
    pub key: Key,
    upper: &'a [Note],
    lower: &'a [Note],
}

impl<'a> AnalysisContext<'a> {
    /// Creates a new analysis context.
    #[must_use]
    pub fn new(key: Key, upper: &'a [Note], lower: &'a [Note]) -> Self {
        Self { key, upper, lower }
    }

    /// Notes of the given voice, full length.
    #[must_use]
    pub fn voice(&self, voice: VoiceId) -> &'a [Note] {
        match voice {
            VoiceId::Upper => self.upper,
            VoiceId::Lower => self.lower,
        }
    }

    /// Number of positions both voices share.
    #[must_use]
    pub fn paired_len(&self) -> usize {
        self.upper.len().min(self.lower.len())
    }

    /// Iterates aligned `(upper, lower)` note pairs over the shared prefix.
    pub fn aligned(&self) -> impl Iterator<Item = (&'a Note, &'a Note)> + 'a {
        self.upper.iter().zip(self.lower.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::Mode;

    fn notes(tokens: &[&str]) -> Vec<Note> {
        tokens.iter().map(|t| Note::parse(t).unwrap()).collect()
    }

    #[test]
    fn aligned_stops_at_shorter_voice() {
        let upper = notes(&["C4", "D4", "E4"]);
        let lower = notes(&["C3", "D3"]);
        let ctx = AnalysisContext::new(Key::new(0, Mode::Major), &upper, &lower);

        assert_eq!(ctx.paired_len(), 2);
        assert_eq!(ctx.aligned().count(), 2);
        assert_eq!(ctx.voice(VoiceId::Upper).len(), 3);
        assert_eq!(ctx.voice(VoiceId::Lower).len(), 2);
    }
}
