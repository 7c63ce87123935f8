//! Configuration for the history reducer.
//!
//! The only recognized option is the set of reset action types. Options are
//! validated with Stillwater's `Validation` so that every problem is
//! reported in one pass instead of stopping at the first.
//!
//! # Example
//!
//! ```rust
//! use rewind::options::HistoryOptions;
//!
//! let options = HistoryOptions::from_json(r#"{ "resetTypes": ["SETUP_EDITOR_STATE"] }"#)
//!     .unwrap();
//! assert!(options.is_reset("SETUP_EDITOR_STATE"));
//!
//! let err = HistoryOptions::from_json(r#"{ "resetTypes": ["", "REDO"] }"#).unwrap_err();
//! assert!(err.to_string().contains("2 violation(s)"));
//! ```

pub mod builder;
pub mod error;

pub use builder::OptionsBuilder;
pub use error::{OptionViolation, OptionsError};

use crate::core::CONTROL_TYPES;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Options recognized by the history reducer.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct HistoryOptions {
    /// Action types whose dispatch collapses history to a single checkpoint.
    pub reset_types: BTreeSet<String>,
}

impl HistoryOptions {
    pub fn builder() -> OptionsBuilder {
        OptionsBuilder::new()
    }

    /// Parse options from JSON and validate them.
    pub fn from_json(json: &str) -> Result<Self, OptionsError> {
        let options: Self =
            serde_json::from_str(json).map_err(|e| OptionsError::Parse(e.to_string()))?;
        options.validated()
    }

    /// Whether dispatching `action_type` resets the history.
    pub fn is_reset(&self, action_type: &str) -> bool {
        self.reset_types.contains(action_type)
    }

    /// Check every reset type, accumulating ALL violations.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<OptionViolation>> {
        let checks: Vec<Validation<(), NonEmptyVec<OptionViolation>>> = self
            .reset_types
            .iter()
            .map(|action_type| check_reset_type(action_type))
            .collect();

        Validation::all_vec(checks).map(|_| ())
    }

    pub(crate) fn validated(self) -> Result<Self, OptionsError> {
        match self.validate() {
            Validation::Success(()) => Ok(self),
            Validation::Failure(errors) => Err(OptionsError::Invalid {
                violations: errors.iter().cloned().collect(),
            }),
        }
    }
}

fn check_reset_type(action_type: &str) -> Validation<(), NonEmptyVec<OptionViolation>> {
    if action_type.trim().is_empty() {
        Validation::fail(OptionViolation::EmptyResetType)
    } else if CONTROL_TYPES.contains(&action_type) {
        Validation::fail(OptionViolation::ShadowsControlAction {
            action_type: action_type.to_string(),
        })
    } else {
        Validation::success(())
    }
}
