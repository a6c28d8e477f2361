//! # counterpoint-lint-rules
//!
//! Built-in voice-leading rules for counterpoint-lint.
//!
//! ## Available Rules
//!
//! | Code | Name | Description |
//! |------|------|-------------|
//! | CP001 | `parallel-motion` | Forbids parallel fifths and octaves/unisons in similar motion |
//! | CP002 | `leap-over-octave` | Forbids melodic leaps larger than an octave |
//! | CP003 | `unresolved-leading-tone` | Requires the leading tone to rise to the tonic |
//!
//! ## Usage
//!
//! ```ignore
//! use counterpoint_lint_core::Analyzer;
//! use counterpoint_lint_rules::{LeapOverOctave, ParallelMotion};
//!
//! let analyzer = Analyzer::builder()
//!     .rule(ParallelMotion::new())
//!     .rule(LeapOverOctave::new().max_leap(9))
//!     .build();
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// The leap rule; exposes its config keys and defaults.
pub mod leap_over_octave;
mod parallel_motion;
mod presets;
mod unresolved_leading_tone;

pub use leap_over_octave::LeapOverOctave;
pub use parallel_motion::ParallelMotion;
pub use presets::{configured_rules, default_rules, select_rules};
pub use unresolved_leading_tone::UnresolvedLeadingTone;

/// Re-export core types for convenience.
pub use counterpoint_lint_core::{Issue, Rule, Severity};
