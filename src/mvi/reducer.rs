//! Reducer trait for MVI architecture.

use super::action::Action;
use super::intent::Intent;
use super::state::State;

/// Reducer transforms state based on intents.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (Option<State>, Action) -> State
///
/// - `None` means there is no state yet. Return the default.
/// - Actions the reducer does not recognize, `Action::Init` included,
///   must return the previous state unchanged.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: State;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Process an action and return the new state.
    ///
    /// This should be a pure function with no side effects.
    fn reduce(state: Option<Self::State>, action: Action<Self::Intent>) -> Self::State;
}
