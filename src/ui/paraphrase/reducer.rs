//! Reducer for the paraphrase view.

use crate::ui::mvi::Reducer;

use super::intent::ParaphraseIntent;
use super::state::{ParaphraseState, RequestPhase};

/// Reducer for the paraphrase request lifecycle.
///
/// Pure function — issuing the HTTP request is handled by the caller
/// around the dispatch call, keyed off the `Idle → Pending` transition.
pub struct ParaphraseReducer;

impl Reducer for ParaphraseReducer {
    type State = ParaphraseState;
    type Intent = ParaphraseIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            // Editing stays allowed while a request is pending; only the
            // submit trigger is gated on the phase.
            ParaphraseIntent::InsertChar(ch) => {
                state.input.push(ch);
                state
            }

            ParaphraseIntent::DeleteChar => {
                state.input.pop();
                state
            }

            ParaphraseIntent::Paste(text) => {
                state.input.push_str(&text);
                state
            }

            ParaphraseIntent::Submit => {
                if state.can_submit() {
                    state.phase = RequestPhase::Pending;
                }
                state
            }

            ParaphraseIntent::Settled { output } => match state.phase {
                RequestPhase::Pending => {
                    state.output = output;
                    state.phase = RequestPhase::Idle;
                    state
                }
                // No request in flight: nothing to settle.
                RequestPhase::Idle => state,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_input(input: &str) -> ParaphraseState {
        ParaphraseState {
            input: input.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn submit_with_input_goes_pending() {
        let new = ParaphraseReducer::reduce(with_input("hello"), ParaphraseIntent::Submit);
        assert_eq!(new.phase, RequestPhase::Pending);
        assert_eq!(new.input, "hello");
    }

    #[test]
    fn submit_with_empty_input_is_noop() {
        let state = ParaphraseState::default();
        let new = ParaphraseReducer::reduce(state.clone(), ParaphraseIntent::Submit);
        assert_eq!(new, state);
    }

    #[test]
    fn submit_while_pending_is_noop() {
        let state = ParaphraseReducer::reduce(with_input("hello"), ParaphraseIntent::Submit);
        let new = ParaphraseReducer::reduce(state.clone(), ParaphraseIntent::Submit);
        assert_eq!(new, state);
    }

    #[test]
    fn settled_writes_output_and_returns_to_idle() {
        let state = ParaphraseReducer::reduce(with_input("hello world"), ParaphraseIntent::Submit);
        let new = ParaphraseReducer::reduce(
            state,
            ParaphraseIntent::Settled {
                output: "hi planet".to_string(),
            },
        );
        assert_eq!(new.output, "hi planet");
        assert_eq!(new.phase, RequestPhase::Idle);
    }

    #[test]
    fn settled_while_idle_is_ignored() {
        let state = with_input("hello");
        let new = ParaphraseReducer::reduce(
            state.clone(),
            ParaphraseIntent::Settled {
                output: "stale".to_string(),
            },
        );
        assert_eq!(new, state);
    }

    #[test]
    fn settled_overwrites_previous_output() {
        let mut state = with_input("first");
        state = ParaphraseReducer::reduce(state, ParaphraseIntent::Submit);
        state = ParaphraseReducer::reduce(
            state,
            ParaphraseIntent::Settled {
                output: "one".to_string(),
            },
        );
        state = ParaphraseReducer::reduce(state, ParaphraseIntent::Submit);
        state = ParaphraseReducer::reduce(
            state,
            ParaphraseIntent::Settled {
                output: "two".to_string(),
            },
        );
        assert_eq!(state.output, "two");
        assert_eq!(state.phase, RequestPhase::Idle);
    }

    #[test]
    fn insert_and_delete_edit_input() {
        let mut state = ParaphraseState::default();
        state = ParaphraseReducer::reduce(state, ParaphraseIntent::InsertChar('h'));
        state = ParaphraseReducer::reduce(state, ParaphraseIntent::InsertChar('i'));
        assert_eq!(state.input, "hi");
        state = ParaphraseReducer::reduce(state, ParaphraseIntent::DeleteChar);
        assert_eq!(state.input, "h");
    }

    #[test]
    fn delete_on_empty_input_is_noop() {
        let new = ParaphraseReducer::reduce(ParaphraseState::default(), ParaphraseIntent::DeleteChar);
        assert!(new.input.is_empty());
    }

    #[test]
    fn paste_appends_text() {
        let mut state = with_input("hello ");
        state = ParaphraseReducer::reduce(state, ParaphraseIntent::Paste("world".to_string()));
        assert_eq!(state.input, "hello world");
    }

    #[test]
    fn editing_while_pending_is_allowed() {
        let mut state = ParaphraseReducer::reduce(with_input("hello"), ParaphraseIntent::Submit);
        state = ParaphraseReducer::reduce(state, ParaphraseIntent::InsertChar('!'));
        assert_eq!(state.input, "hello!");
        assert_eq!(state.phase, RequestPhase::Pending);
    }
}
