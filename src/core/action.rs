//! Actions dispatched through the history reducer.
//!
//! Document edits are opaque to the engine apart from their type name, which
//! is matched against the configured reset types. The three control actions
//! are recognized by the engine itself and never reach the base reducer.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Type name of the undo control action.
pub const UNDO: &str = "UNDO";

/// Type name of the redo control action.
pub const REDO: &str = "REDO";

/// Type name of the checkpoint control action.
pub const CREATE_UNDO_LEVEL: &str = "CREATE_UNDO_LEVEL";

/// Type name carried by the default (empty) [`DynAction`].
pub const INIT: &str = "@@INIT";

/// All action types reserved by the engine.
pub const CONTROL_TYPES: [&str; 3] = [UNDO, REDO, CREATE_UNDO_LEVEL];

/// An action understood by a base reducer.
///
/// The `Default` value of an action type is used as the empty action when
/// the history is first initialized.
///
/// # Example
///
/// ```rust
/// use rewind::core::Action;
///
/// #[derive(Default)]
/// enum EditorAction {
///     #[default]
///     Init,
///     InsertText(String),
///     ResetBlocks,
/// }
///
/// impl Action for EditorAction {
///     fn action_type(&self) -> &str {
///         match self {
///             Self::Init => "INIT",
///             Self::InsertText(_) => "INSERT_TEXT",
///             Self::ResetBlocks => "RESET_BLOCKS",
///         }
///     }
/// }
///
/// assert_eq!(EditorAction::ResetBlocks.action_type(), "RESET_BLOCKS");
/// ```
pub trait Action {
    /// The action's type identifier.
    fn action_type(&self) -> &str;
}

/// Input to the history reducer: a control action or a document edit.
#[derive(Clone, Debug, PartialEq)]
pub enum HistoryAction<A> {
    /// Step back to the previous checkpoint, discarding a provisional edit
    /// into the redo list first if one exists.
    Undo,

    /// Re-apply the nearest undone state.
    Redo,

    /// Commit the present state as a checkpoint.
    CreateUndoLevel,

    /// Forward an edit to the base reducer.
    Dispatch(A),
}

impl<A: Action> HistoryAction<A> {
    /// Route a string-typed action by its type name.
    ///
    /// Actions named [`UNDO`], [`REDO`] or [`CREATE_UNDO_LEVEL`] become the
    /// matching control variant; everything else is dispatched as an edit.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rewind::core::{DynAction, HistoryAction};
    ///
    /// let undo = HistoryAction::classify(DynAction::new("UNDO"));
    /// assert_eq!(undo, HistoryAction::Undo);
    ///
    /// let edit = HistoryAction::classify(DynAction::new("INSERT_BLOCKS"));
    /// assert!(matches!(edit, HistoryAction::Dispatch(_)));
    /// ```
    pub fn classify(action: A) -> Self {
        let control = match action.action_type() {
            UNDO => Some(Self::Undo),
            REDO => Some(Self::Redo),
            CREATE_UNDO_LEVEL => Some(Self::CreateUndoLevel),
            _ => None,
        };
        match control {
            Some(control) => control,
            None => Self::Dispatch(action),
        }
    }
}

impl<A: Action> Action for HistoryAction<A> {
    fn action_type(&self) -> &str {
        match self {
            Self::Undo => UNDO,
            Self::Redo => REDO,
            Self::CreateUndoLevel => CREATE_UNDO_LEVEL,
            Self::Dispatch(action) => action.action_type(),
        }
    }
}

impl<A> From<A> for HistoryAction<A> {
    fn from(action: A) -> Self {
        Self::Dispatch(action)
    }
}

/// A loosely typed action: a type name plus an arbitrary JSON payload.
///
/// Serializes flat, with the type under the `"type"` key:
/// `{"type": "UPDATE_BLOCK", "clientId": "a1", "attributes": {...}}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DynAction {
    #[serde(rename = "type")]
    pub action_type: String,

    #[serde(flatten)]
    pub payload: Map<String, Value>,
}

impl DynAction {
    /// Create an action with the given type and an empty payload.
    pub fn new(action_type: impl Into<String>) -> Self {
        Self {
            action_type: action_type.into(),
            payload: Map::new(),
        }
    }

    /// Add a payload field.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.payload.insert(key.into(), value.into());
        self
    }

    /// Look up a payload field.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.payload.get(key)
    }
}

impl Default for DynAction {
    fn default() -> Self {
        Self::new(INIT)
    }
}

impl Action for DynAction {
    fn action_type(&self) -> &str {
        &self.action_type
    }
}
