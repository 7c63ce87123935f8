//! Builder API for history options.

use crate::options::error::OptionsError;
use crate::options::HistoryOptions;
use std::collections::BTreeSet;

/// Builder for [`HistoryOptions`] with a fluent API.
///
/// # Example
///
/// ```rust
/// use rewind::options::HistoryOptions;
///
/// let options = HistoryOptions::builder()
///     .reset_type("SETUP_EDITOR_STATE")
///     .reset_type("RESET_POST")
///     .build()
///     .unwrap();
///
/// assert!(options.is_reset("RESET_POST"));
/// assert!(!options.is_reset("EDIT_POST"));
/// ```
#[derive(Debug, Default)]
pub struct OptionsBuilder {
    reset_types: BTreeSet<String>,
}

impl OptionsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an action type that collapses history when dispatched.
    pub fn reset_type(mut self, action_type: impl Into<String>) -> Self {
        self.reset_types.insert(action_type.into());
        self
    }

    /// Add several reset action types at once.
    pub fn reset_types<I, T>(mut self, action_types: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.reset_types
            .extend(action_types.into_iter().map(Into::into));
        self
    }

    /// Build the options, reporting every violation at once.
    pub fn build(self) -> Result<HistoryOptions, OptionsError> {
        let options = HistoryOptions {
            reset_types: self.reset_types,
        };
        options.validated()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::error::OptionViolation;

    #[test]
    fn empty_builder_has_no_reset_types() {
        let options = OptionsBuilder::new().build().unwrap();
        assert!(options.reset_types.is_empty());
    }

    #[test]
    fn reset_types_are_deduplicated() {
        let options = OptionsBuilder::new()
            .reset_type("RESET_POST")
            .reset_types(["RESET_POST", "SETUP_EDITOR_STATE"])
            .build()
            .unwrap();

        assert_eq!(options.reset_types.len(), 2);
    }

    #[test]
    fn build_rejects_control_types() {
        let result = OptionsBuilder::new().reset_type("UNDO").build();

        match result {
            Err(OptionsError::Invalid { violations }) => {
                assert_eq!(
                    violations,
                    vec![OptionViolation::ShadowsControlAction {
                        action_type: "UNDO".to_string()
                    }]
                );
            }
            other => panic!("Expected Invalid, got {other:?}"),
        }
    }
}
