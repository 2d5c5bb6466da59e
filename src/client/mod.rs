//! HTTP client for the paraphrase endpoint.

mod error;
mod paraphrase;

pub use error::ClientError;
pub use paraphrase::{ParaphraseClient, DEFAULT_BASE_URL};
