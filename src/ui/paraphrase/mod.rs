mod intent;
mod reducer;
mod state;

pub use intent::ParaphraseIntent;
pub use reducer::ParaphraseReducer;
pub use state::{ParaphraseState, RequestPhase, CONNECTION_ERROR_TEXT};
