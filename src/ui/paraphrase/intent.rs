//! Intents for the paraphrase view.

use crate::ui::mvi::Intent;

/// Intents that can be dispatched to the paraphrase reducer.
#[derive(Debug, Clone)]
pub enum ParaphraseIntent {
    /// Append a character to the input (newline included).
    InsertChar(char),

    /// Remove the last character from the input.
    DeleteChar,

    /// Append pasted text to the input.
    Paste(String),

    /// User asked to paraphrase. Inert unless the input is non-empty
    /// and no request is in flight.
    Submit,

    /// The in-flight request settled. `output` is either the server's
    /// paraphrased text or the fixed error placeholder.
    Settled { output: String },
}

impl Intent for ParaphraseIntent {}
