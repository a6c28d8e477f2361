//! Rule sets and lookup by name or code.

use crate::{leap_over_octave, LeapOverOctave, ParallelMotion, UnresolvedLeadingTone};
use counterpoint_lint_core::{Config, RuleBox};

/// Returns the default rules in reporting order.
///
/// Includes:
/// - `parallel-motion` (CP001) - parallel fifths and octaves
/// - `leap-over-octave` (CP002) - melodic leaps wider than an octave
/// - `unresolved-leading-tone` (CP003) - leading tone not rising to the tonic
#[must_use]
pub fn default_rules() -> Vec<RuleBox> {
    vec![
        Box::new(ParallelMotion::new()),
        Box::new(LeapOverOctave::new()),
        Box::new(UnresolvedLeadingTone::new()),
    ]
}

/// Returns the default rules with rule options taken from `config`.
///
/// Enabling and severity overrides are applied later by the analyzer.
#[must_use]
pub fn configured_rules(config: &Config) -> Vec<RuleBox> {
    let leap = config
        .rule(leap_over_octave::NAME)
        .map_or_else(LeapOverOctave::new, LeapOverOctave::from_config);

    vec![
        Box::new(ParallelMotion::new()),
        Box::new(leap),
        Box::new(UnresolvedLeadingTone::new()),
    ]
}

/// Returns the configured rules whose name or code appears in `names`.
///
/// Rules keep their default order regardless of the order of `names`.
/// Unknown names are logged and ignored.
#[must_use]
pub fn select_rules(names: &[&str], config: &Config) -> Vec<RuleBox> {
    for name in names {
        let known = default_rules()
            .iter()
            .any(|r| r.name() == *name || r.code() == *name);
        if !known {
            tracing::warn!("Unknown rule: {}", name);
        }
    }

    configured_rules(config)
        .into_iter()
        .filter(|r| names.iter().any(|n| r.name() == *n || r.code() == *n))
        .collect()
}
