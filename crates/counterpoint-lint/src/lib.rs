//! # counterpoint-lint
//!
//! Two-voice counterpoint checker.
//!
//! This is the main facade crate that re-exports the core types and the
//! built-in rules, and offers a one-call [`analyze`] entry point.
//!
//! ## Quick Start
//!
//! ```rust
//! use counterpoint_lint::{analyze, IssueKind};
//!
//! let issues = analyze("C4 D4", "F3 G3", "C major");
//! assert_eq!(issues[0].kind, IssueKind::Parallel5ths);
//! ```
//!
//! ## Programmatic Usage
//!
//! ```rust,ignore
//! use counterpoint_lint::{Analyzer, Config};
//! use counterpoint_lint::rules::configured_rules;
//!
//! let config = Config::from_file("counterpoint-lint.toml".as_ref())?;
//! let analyzer = Analyzer::builder()
//!     .rules(configured_rules(&config))
//!     .config(config)
//!     .build();
//!
//! let result = analyzer.analyze(upper, lower, "G major");
//! ```

#![forbid(unsafe_code)]

// Re-export core types and traits
pub use counterpoint_lint_core::*;

/// Built-in rules and rule sets.
pub mod rules {
    pub use counterpoint_lint_rules::*;
}

/// Version of the engine.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Checks two voice lines in a key with the default rules.
///
/// Returns issues in discovery order: parse errors, a length mismatch
/// warning, parallel motion, leaps, then unresolved leading tones. An
/// unparseable key yields exactly one `ParseError`. The function is pure.
#[must_use]
pub fn analyze(upper: &str, lower: &str, key: &str) -> Vec<Issue> {
    Analyzer::builder()
        .rules(rules::default_rules())
        .build()
        .analyze(upper, lower, key)
        .issues
}
