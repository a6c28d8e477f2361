//! # counterpoint-lint-core
//!
//! Core framework for two-voice counterpoint linting.
//!
//! This crate provides the foundational types for checking voice leading:
//!
//! - [`Note`] and [`Key`] parsers for note tokens (`C4`, `F#3`) and keys (`G major`)
//! - [`Rule`] trait for independent rule passes over a voice pair
//! - [`Analyzer`] for orchestrating parsing and rule execution
//! - [`Issue`] for representing findings
//!
//! ## Example
//!
//! ```ignore
//! use counterpoint_lint_core::Analyzer;
//!
//! let analyzer = Analyzer::builder()
//!     .rule(MyRule::new())
//!     .build();
//!
//! let result = analyzer.analyze("C4 D4 E4", "C3 B2 C3", "C major");
//! for issue in &result.issues {
//!     println!("{issue}");
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analyzer;
mod config;
mod context;
mod key;
mod note;
mod rule;
mod types;
mod voice;

pub use analyzer::{Analyzer, AnalyzerBuilder};
pub use config::{AnalyzerConfig, Config, ConfigError, RuleConfig};
pub use context::AnalysisContext;
pub use key::{Key, KeyParseError, Mode};
pub use note::{pitch_class_name, Note, NoteParseError};
pub use rule::{Rule, RuleBox};
pub use types::{
    InputSource, Issue, IssueDiagnostic, IssueKind, LintResult, Severity, Suggestion, TokenSpan,
    VoiceId, ALIGNMENT_RULE, PARSE_RULE,
};
pub use voice::{parse_line, ParsedVoice};
