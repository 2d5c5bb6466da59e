use tracing::{debug, error};

use crate::client::ClientError;
use crate::ui::mvi::Reducer;
use crate::ui::paraphrase::{
    ParaphraseIntent, ParaphraseReducer, ParaphraseState, CONNECTION_ERROR_TEXT,
};

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    /// Paraphrase view state (MVI pattern).
    paraphrase: ParaphraseState,
}

impl App {
    pub fn new() -> Self {
        Self {
            should_quit: false,
            paraphrase: ParaphraseState::default(),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn paraphrase(&self) -> &ParaphraseState {
        &self.paraphrase
    }

    /// Dispatch an intent to the paraphrase reducer.
    pub fn dispatch(&mut self, intent: ParaphraseIntent) {
        dispatch_mvi!(self, paraphrase, ParaphraseReducer, intent);
    }

    /// Try to start a paraphrase request.
    ///
    /// Returns the text to send when the guard accepted the submit
    /// (input non-empty, no request in flight); the caller performs the
    /// actual network call. Otherwise the submit is inert.
    pub fn submit(&mut self) -> Option<String> {
        if !self.paraphrase.can_submit() {
            return None;
        }
        let text = self.paraphrase.input.clone();
        self.dispatch(ParaphraseIntent::Submit);
        debug!(chars = text.chars().count(), "submit accepted");
        Some(text)
    }

    /// Commit a request outcome to view state.
    ///
    /// Failures collapse to the fixed placeholder; the concrete error
    /// goes to the log only.
    pub fn on_settled(&mut self, result: Result<String, ClientError>) {
        let output = match result {
            Ok(text) => text,
            Err(err) => {
                error!(error = %err, "paraphrase request failed");
                CONNECTION_ERROR_TEXT.to_string()
            }
        };
        self.dispatch(ParaphraseIntent::Settled { output });
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
