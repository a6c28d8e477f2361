//! Note tokens and pitch arithmetic.
//!
//! A note token is a letter `A`-`G` (either case), an optional accidental
//! (`#` or `b`) and a signed octave number, e.g. `C4`, `f#3`, `Bb-1`.
//! Octave 4 starting at C is pitch value 60.

use crate::types::{TokenSpan, VoiceId};
use thiserror::Error;

/// Pitch-class names, sharp spelling, indexed by pitch class.
const PITCH_CLASS_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Errors produced when a note token cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NoteParseError {
    /// The token was empty.
    #[error("empty note token")]
    Empty,

    /// The token does not start with a note letter.
    #[error("'{token}' does not start with a note letter A-G")]
    InvalidLetter {
        /// The offending token.
        token: String,
    },

    /// The part after the letter and accidental is not an integer octave.
    #[error("'{token}' has no valid octave number")]
    InvalidOctave {
        /// The offending token.
        token: String,
    },
}

/// A single parsed note.
///
/// `pitch_class` always equals `pitch_value` modulo 12.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    raw: String,
    pitch_value: i32,
    pitch_class: u8,
    offset: usize,
}

impl Note {
    /// Parses a single note token.
    ///
    /// # Errors
    ///
    /// Returns [`NoteParseError`] if the token does not match the note grammar.
    pub fn parse(token: &str) -> Result<Self, NoteParseError> {
        if token.is_empty() {
            return Err(NoteParseError::Empty);
        }

        let (pitch_class, rest) =
            parse_spelling(token).ok_or_else(|| NoteParseError::InvalidLetter {
                token: token.to_string(),
            })?;

        let invalid_octave = || NoteParseError::InvalidOctave {
            token: token.to_string(),
        };

        // i32's parser accepts an optional sign followed by digits only
        let octave: i32 = rest.parse().map_err(|_| invalid_octave())?;
        let pitch_value = octave
            .checked_add(1)
            .and_then(|o| o.checked_mul(12))
            .and_then(|v| v.checked_add(i32::from(pitch_class)))
            .ok_or_else(invalid_octave)?;

        Ok(Self {
            raw: token.to_string(),
            pitch_value,
            pitch_class,
            offset: 0,
        })
    }

    /// Records the byte offset of this note's token within its line.
    #[must_use]
    pub(crate) fn at_offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    /// The original token text.
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Absolute pitch in semitones (C4 = 60).
    #[must_use]
    pub fn pitch_value(&self) -> i32 {
        self.pitch_value
    }

    /// Pitch class, 0-11 with 0 = C.
    #[must_use]
    pub fn pitch_class(&self) -> u8 {
        self.pitch_class
    }

    /// Span of this note's token inside the given voice line.
    #[must_use]
    pub fn span_in(&self, voice: VoiceId) -> TokenSpan {
        TokenSpan::in_voice(voice, self.offset, self.raw.len())
    }
}

impl std::str::FromStr for Note {
    type Err = NoteParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for Note {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Returns the sharp-spelled name of a pitch class (e.g. `C#` for 1).
#[must_use]
pub fn pitch_class_name(pitch_class: u8) -> &'static str {
    PITCH_CLASS_NAMES[usize::from(pitch_class % 12)]
}

/// Parses a letter with an optional accidental from the start of `s`.
///
/// Returns the wrapped pitch class and the unconsumed remainder.
pub(crate) fn parse_spelling(s: &str) -> Option<(u8, &str)> {
    let mut chars = s.chars();
    let base = letter_pitch_class(chars.next()?)?;
    let rest = chars.as_str();

    let (shift, rest) = if let Some(stripped) = rest.strip_prefix('#') {
        (1, stripped)
    } else if let Some(stripped) = rest.strip_prefix('b') {
        (-1, stripped)
    } else {
        (0, rest)
    };

    let pitch_class = u8::try_from((base + shift).rem_euclid(12)).ok()?;
    Some((pitch_class, rest))
}

fn letter_pitch_class(letter: char) -> Option<i32> {
    match letter.to_ascii_uppercase() {
        'C' => Some(0),
        'D' => Some(2),
        'E' => Some(4),
        'F' => Some(5),
        'G' => Some(7),
        'A' => Some(9),
        'B' => Some(11),
        _ => None,
    }
}
