//! Key strings such as `"C major"` or `"f# minor"`.

use crate::note::{parse_spelling, pitch_class_name};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Mode of a key.
///
/// Parsed and carried along, but no rule looks at it yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Major mode.
    Major,
    /// Minor mode.
    Minor,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Major => write!(f, "major"),
            Self::Minor => write!(f, "minor"),
        }
    }
}

/// Error produced when a key string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyParseError {
    /// The string does not match `<letter>[#|b] major|minor`.
    #[error("Could not parse key '{input}' (use like 'C major')")]
    Unrecognized {
        /// The offending input.
        input: String,
    },
}

/// A tonic pitch class plus a mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Key {
    tonic: u8,
    mode: Mode,
}

impl Key {
    /// Creates a key; the tonic is reduced modulo 12.
    #[must_use]
    pub fn new(tonic: u8, mode: Mode) -> Self {
        Self {
            tonic: tonic % 12,
            mode,
        }
    }

    /// Parses a key string such as `"C major"`, `"Bbmajor"` or `"g# MINOR"`.
    ///
    /// # Errors
    ///
    /// Returns [`KeyParseError::Unrecognized`] for anything else.
    pub fn parse(input: &str) -> Result<Self, KeyParseError> {
        let unrecognized = || KeyParseError::Unrecognized {
            input: input.to_string(),
        };

        let (tonic, rest) = parse_spelling(input.trim()).ok_or_else(unrecognized)?;
        let mode = match rest.trim_start().to_ascii_lowercase().as_str() {
            "major" => Mode::Major,
            "minor" => Mode::Minor,
            _ => return Err(unrecognized()),
        };

        Ok(Self { tonic, mode })
    }

    /// Pitch class of the tonic.
    #[must_use]
    pub fn tonic(&self) -> u8 {
        self.tonic
    }

    /// The key's mode.
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Pitch class one semitone below the tonic.
    #[must_use]
    pub fn leading_tone(&self) -> u8 {
        (self.tonic + 11) % 12
    }
}

impl std::str::FromStr for Key {
    type Err = KeyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", pitch_class_name(self.tonic), self.mode)
    }
}
