//! Parsing a whole melodic line into notes.

use crate::note::Note;
use crate::types::{Issue, IssueKind, Severity, Suggestion, TokenSpan, VoiceId, PARSE_RULE};

/// Result of parsing one voice line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedVoice {
    /// Which voice this line belongs to.
    pub voice: VoiceId,
    /// Successfully parsed notes, in token order.
    pub notes: Vec<Note>,
    /// One `ParseError` issue per unparseable token, in token order.
    pub issues: Vec<Issue>,
}

/// Parses a whitespace-separated line of note tokens.
///
/// Bad tokens are reported as issues and skipped; the remaining tokens are
/// still parsed. Issue positions are token indices within the line.
#[must_use]
pub fn parse_line(line: &str, voice: VoiceId) -> ParsedVoice {
    let mut notes = Vec::new();
    let mut issues = Vec::new();

    for (index, (offset, token)) in tokenize(line).into_iter().enumerate() {
        match Note::parse(token) {
            Ok(note) => notes.push(note.at_offset(offset)),
            Err(err) => issues.push(
                Issue::new(
                    IssueKind::ParseError,
                    PARSE_RULE,
                    Severity::Error,
                    format!("Could not parse note '{token}': {err}"),
                )
                .in_voice(voice, index)
                .with_span(TokenSpan::in_voice(voice, offset, token.len()))
                .with_suggestion(Suggestion::new(
                    "Write notes as letter, optional accidental, octave (e.g. C4, F#3, Bb2)",
                )),
            ),
        }
    }

    tracing::debug!(
        "Parsed {} voice: {} notes, {} bad tokens",
        voice,
        notes.len(),
        issues.len()
    );

    ParsedVoice {
        voice,
        notes,
        issues,
    }
}

/// Splits on runs of whitespace, yielding each token with its byte offset.
fn tokenize(line: &str) -> Vec<(usize, &str)> {
    let mut start: Option<usize> = None;
    let mut tokens = Vec::new();

    for (i, c) in line.char_indices() {
        match (c.is_whitespace(), start) {
            (true, Some(s)) => {
                tokens.push((s, &line[s..i]));
                start = None;
            }
            (false, None) => start = Some(i),
            _ => {}
        }
    }
    if let Some(s) = start {
        tokens.push((s, &line[s..]));
    }

    tokens
}
