use crate::demo::todos::intent::TodoIntent;
use crate::demo::todos::state::{Todo, TodoState};
use crate::mvi::{Action, Reducer};

pub struct TodoReducer;

impl Reducer for TodoReducer {
    type State = TodoState;
    type Intent = TodoIntent;

    fn reduce(state: Option<Self::State>, action: Action<Self::Intent>) -> Self::State {
        let state = state.unwrap_or_default();
        let Action::Intent(intent) = action else {
            return state;
        };

        match intent {
            TodoIntent::AddTodo { text } => {
                let text = text.trim();
                if text.is_empty() {
                    return state;
                }
                let Some(id) = state.next_id() else {
                    return state;
                };
                let mut todos = state.todos;
                todos.push(Todo {
                    id,
                    text: text.to_string(),
                    completed: false,
                });
                TodoState { todos, ..state }
            }
            TodoIntent::ToggleTodo { id } => TodoState {
                todos: state
                    .todos
                    .into_iter()
                    .map(|todo| {
                        if todo.id == id {
                            Todo {
                                completed: !todo.completed,
                                ..todo
                            }
                        } else {
                            todo
                        }
                    })
                    .collect(),
                ..state
            },
            TodoIntent::RemoveTodo { id } => {
                let mut todos = state.todos;
                todos.retain(|todo| todo.id != id);
                TodoState { todos, ..state }
            }
            TodoIntent::SetVisibilityFilter { filter } => TodoState { filter, ..state },
            TodoIntent::Unknown => state,
        }
    }
}
