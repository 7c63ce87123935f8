//! Macros for declaring action types.

/// Generate an [`Action`](crate::core::Action) implementation for a
/// unit-variant enum. Each variant's type name is its identifier.
///
/// Add `#[derive(Default)]` and mark a variant `#[default]` to use the enum
/// with a history reducer, which dispatches the default value as its empty
/// action.
///
/// # Example
///
/// ```
/// use rewind::action_enum;
/// use rewind::core::Action;
///
/// action_enum! {
///     #[derive(Default)]
///     pub enum PostAction {
///         #[default]
///         Init,
///         EditPost,
///         ResetPost,
///     }
/// }
///
/// assert_eq!(PostAction::ResetPost.action_type(), "ResetPost");
/// assert_eq!(PostAction::default(), PostAction::Init);
/// ```
#[macro_export]
macro_rules! action_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::Action for $name {
            fn action_type(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{Action, HistoryAction, Snapshot};
    use crate::enhancer::{enhance, HistoryReducer};
    use crate::options::HistoryOptions;

    action_enum! {
        #[derive(Default)]
        enum ToggleAction {
            #[default]
            Init,
            Toggle,
            Load,
        }
    }

    fn toggle(state: Option<&Snapshot<bool>>, action: &ToggleAction) -> Snapshot<bool> {
        match (state, action) {
            (None, _) => Snapshot::new(false),
            (Some(state), ToggleAction::Toggle) => Snapshot::new(!**state),
            (Some(state), _) => state.clone(),
        }
    }

    #[test]
    fn action_type_is_variant_name() {
        assert_eq!(ToggleAction::Init.action_type(), "Init");
        assert_eq!(ToggleAction::Toggle.action_type(), "Toggle");
        assert_eq!(ToggleAction::Load.action_type(), "Load");
    }

    #[test]
    fn generated_actions_serialize() {
        let json = serde_json::to_string(&ToggleAction::Toggle).unwrap();
        let parsed: ToggleAction = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, ToggleAction::Toggle);
    }

    #[test]
    fn generated_actions_drive_history() {
        let options = HistoryOptions::builder().reset_type("Load").build().unwrap();
        let reducer: HistoryReducer<bool, ToggleAction, _> = enhance(toggle, options);

        let state = reducer.reduce(None, &HistoryAction::Dispatch(ToggleAction::Toggle));
        let state = reducer.reduce(Some(state), &HistoryAction::CreateUndoLevel);
        assert_eq!(state.past().len(), 2);

        let state = reducer.reduce(Some(state), &HistoryAction::Dispatch(ToggleAction::Load));
        assert_eq!(state.past().len(), 1);
        assert!(**state.present());
    }
}
