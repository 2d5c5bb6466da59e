//! Reducer trait for MVI architecture.

use super::intent::Intent;
use super::state::UiState;

/// Transforms state in response to intents.
///
/// All state transitions go through a reducer, and a reducer is a pure
/// function of `(State, Intent)`. Side effects (network calls, I/O)
/// happen at the dispatch site, keyed off the transition the reducer
/// made.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    /// Process an intent and return the new state.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
