use minidux::demo::todos::{Todo, TodoIntent, TodoReducer, TodoState, VisibilityFilter};
use minidux::mvi::{Action, Reducer};

fn add(state: TodoState, text: &str) -> TodoState {
    TodoReducer::reduce(
        Some(state),
        TodoIntent::AddTodo {
            text: text.to_string(),
        }
        .into(),
    )
}

fn sample() -> TodoState {
    let state = TodoReducer::reduce(None, Action::Init);
    let state = add(state, "Learn reducers");
    add(state, "Write a store")
}

#[test]
fn absent_state_defaults_to_empty_show_all() {
    let state = TodoReducer::reduce(None, Action::Init);
    assert!(state.todos.is_empty());
    assert_eq!(state.filter, VisibilityFilter::ShowAll);
}

#[test]
fn add_todo_appends_active_item_with_next_id() {
    let state = sample();
    assert_eq!(
        state.todos,
        vec![
            Todo {
                id: 0,
                text: "Learn reducers".to_string(),
                completed: false,
            },
            Todo {
                id: 1,
                text: "Write a store".to_string(),
                completed: false,
            },
        ]
    );
}

#[test]
fn add_blank_todo_is_ignored() {
    let state = sample();
    assert_eq!(add(state.clone(), "   "), state);
}

#[test]
fn add_todo_when_ids_are_exhausted_is_identity() {
    let state = TodoState {
        todos: vec![Todo {
            id: u64::MAX,
            text: "Last id".to_string(),
            completed: false,
        }],
        filter: VisibilityFilter::ShowAll,
    };
    assert_eq!(state.next_id(), None);
    assert_eq!(add(state.clone(), "One more"), state);
}

#[test]
fn ids_keep_growing_after_removal() {
    let state = sample();
    let state = TodoReducer::reduce(Some(state), TodoIntent::RemoveTodo { id: 0 }.into());
    let state = add(state, "Third");
    assert_eq!(state.todos.iter().map(|t| t.id).collect::<Vec<_>>(), vec![1, 2]);
}

#[test]
fn toggle_flips_only_the_matching_todo() {
    let state = TodoReducer::reduce(Some(sample()), TodoIntent::ToggleTodo { id: 1 }.into());
    assert!(!state.todos[0].completed);
    assert!(state.todos[1].completed);

    let state = TodoReducer::reduce(Some(state), TodoIntent::ToggleTodo { id: 1 }.into());
    assert!(!state.todos[1].completed);
}

#[test]
fn toggle_unknown_id_is_identity() {
    let state = sample();
    let next = TodoReducer::reduce(Some(state.clone()), TodoIntent::ToggleTodo { id: 99 }.into());
    assert_eq!(next, state);
}

#[test]
fn visibility_filter_selects_todos() {
    let state = TodoReducer::reduce(Some(sample()), TodoIntent::ToggleTodo { id: 0 }.into());

    let active = TodoReducer::reduce(
        Some(state.clone()),
        TodoIntent::SetVisibilityFilter {
            filter: VisibilityFilter::ShowActive,
        }
        .into(),
    );
    let texts: Vec<&str> = active.visible_todos().iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, vec!["Write a store"]);

    let completed = TodoReducer::reduce(
        Some(state),
        TodoIntent::SetVisibilityFilter {
            filter: VisibilityFilter::ShowCompleted,
        }
        .into(),
    );
    let texts: Vec<&str> = completed.visible_todos().iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, vec!["Learn reducers"]);
}

#[test]
fn unknown_intent_is_identity() {
    let state = sample();
    assert_eq!(
        TodoReducer::reduce(Some(state.clone()), TodoIntent::Unknown.into()),
        state
    );
}

#[test]
fn reducer_never_mutates_previous_state() {
    let intents = vec![
        TodoIntent::AddTodo {
            text: "Another".to_string(),
        },
        TodoIntent::ToggleTodo { id: 0 },
        TodoIntent::RemoveTodo { id: 1 },
        TodoIntent::SetVisibilityFilter {
            filter: VisibilityFilter::ShowCompleted,
        },
        TodoIntent::Unknown,
    ];

    for intent in intents {
        // `reduce` takes its state by value, so this holds by ownership:
        // the caller's copy is never reachable from the reducer.
        let previous = sample();
        let snapshot = previous.clone();
        let _next = TodoReducer::reduce(Some(previous.clone()), intent.into());
        assert_eq!(previous, snapshot);
    }
}

#[test]
fn intents_deserialize_from_tagged_records() {
    let intent: TodoIntent =
        serde_json::from_str(r#"{"type":"SET_VISIBILITY_FILTER","filter":"SHOW_ACTIVE"}"#)
            .unwrap();
    assert_eq!(
        intent,
        TodoIntent::SetVisibilityFilter {
            filter: VisibilityFilter::ShowActive
        }
    );
}
