//! Option validation and loading errors.

use thiserror::Error;

/// A single problem found while validating [`HistoryOptions`](super::HistoryOptions).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OptionViolation {
    #[error("Reset type must not be empty")]
    EmptyResetType,

    #[error("Reset type '{action_type}' is a control action and never reaches the base reducer")]
    ShadowsControlAction { action_type: String },
}

/// Errors that can occur when loading or building history options.
#[derive(Debug, Error)]
pub enum OptionsError {
    /// The options document could not be parsed.
    #[error("Failed to parse history options: {0}")]
    Parse(String),

    /// The options parsed but failed validation.
    #[error("Invalid history options ({} violation(s)): {}", .violations.len(), describe(.violations))]
    Invalid { violations: Vec<OptionViolation> },
}

fn describe(violations: &[OptionViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
