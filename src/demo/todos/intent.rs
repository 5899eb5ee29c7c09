use serde::{Deserialize, Serialize};

use crate::demo::todos::state::VisibilityFilter;
use crate::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TodoIntent {
    /// Append a new, active todo. Ignored for blank text or when ids run out.
    AddTodo { text: String },
    ToggleTodo { id: u64 },
    RemoveTodo { id: u64 },
    SetVisibilityFilter { filter: VisibilityFilter },
    /// Any other `type` tag.
    #[serde(other)]
    Unknown,
}

impl Intent for TodoIntent {
    fn kind(&self) -> &'static str {
        match self {
            TodoIntent::AddTodo { .. } => "ADD_TODO",
            TodoIntent::ToggleTodo { .. } => "TOGGLE_TODO",
            TodoIntent::RemoveTodo { .. } => "REMOVE_TODO",
            TodoIntent::SetVisibilityFilter { .. } => "SET_VISIBILITY_FILTER",
            TodoIntent::Unknown => "UNKNOWN",
        }
    }
}
