use crate::demo::counter::intent::CounterIntent;
use crate::demo::counter::state::CounterState;
use crate::mvi::{Action, Reducer};

pub struct CounterReducer;

impl Reducer for CounterReducer {
    type State = CounterState;
    type Intent = CounterIntent;

    fn reduce(state: Option<Self::State>, action: Action<Self::Intent>) -> Self::State {
        let state = state.unwrap_or_default();
        let Action::Intent(intent) = action else {
            return state;
        };

        // Saturating so the reducer stays total at the i64 bounds.
        match intent {
            CounterIntent::Increment => CounterState::new(state.value.saturating_add(1)),
            CounterIntent::Decrement => CounterState::new(state.value.saturating_sub(1)),
            CounterIntent::IncrementBy { amount } => {
                CounterState::new(state.value.saturating_add(amount))
            }
            CounterIntent::Reset => CounterState::default(),
            CounterIntent::Unknown => state,
        }
    }
}
