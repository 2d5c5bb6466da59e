//! State for the paraphrase view.

use crate::ui::mvi::UiState;

/// Placeholder written to the output pane when a request fails.
///
/// Every failure kind collapses to this one string; the concrete error
/// only goes to the diagnostic log.
pub const CONNECTION_ERROR_TEXT: &str = "Error connecting to server";

/// Phase of the outbound paraphrase request.
///
/// `Pending` holds strictly between an accepted submit and its settle.
/// The submit guard keys off this, so at most one request is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestPhase {
    #[default]
    Idle,
    Pending,
}

/// The whole view state: input text, last result, request phase.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParaphraseState {
    /// Current user text. No validation; empty only disables submit.
    pub input: String,
    /// Last settled result, or [`CONNECTION_ERROR_TEXT`] after a failure.
    pub output: String,
    pub phase: RequestPhase,
}

impl UiState for ParaphraseState {}

impl ParaphraseState {
    pub fn is_pending(&self) -> bool {
        self.phase == RequestPhase::Pending
    }

    /// True when a submit would be accepted: nothing in flight and
    /// something to send.
    pub fn can_submit(&self) -> bool {
        self.phase == RequestPhase::Idle && !self.input.is_empty()
    }
}
