use super::intent::Intent;
use super::state::UiState;

/// Transforms state in response to intents.
///
/// Reducers are the only place state transitions happen and must stay pure:
/// `(State, Intent) -> State`, no I/O and no randomness.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
