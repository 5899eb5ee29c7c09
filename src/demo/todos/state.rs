use serde::{Deserialize, Serialize};

use crate::mvi::State;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: u64,
    pub text: String,
    pub completed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VisibilityFilter {
    #[default]
    ShowAll,
    ShowActive,
    ShowCompleted,
}

impl VisibilityFilter {
    pub fn matches(self, todo: &Todo) -> bool {
        match self {
            VisibilityFilter::ShowAll => true,
            VisibilityFilter::ShowActive => !todo.completed,
            VisibilityFilter::ShowCompleted => todo.completed,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TodoState {
    pub todos: Vec<Todo>,
    pub filter: VisibilityFilter,
}

impl State for TodoState {}

impl TodoState {
    /// Todos that pass the current filter, in insertion order.
    pub fn visible_todos(&self) -> Vec<&Todo> {
        self.todos
            .iter()
            .filter(|todo| self.filter.matches(todo))
            .collect()
    }

    /// Id the next added todo will get, `None` once ids are exhausted.
    pub fn next_id(&self) -> Option<u64> {
        match self.todos.iter().map(|todo| todo.id).max() {
            Some(max) => max.checked_add(1),
            None => Some(0),
        }
    }
}
