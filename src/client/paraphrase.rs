use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::client::error::ClientError;

/// Base URL of the paraphrase server when nothing overrides it.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Serialize)]
struct ParaphraseRequest<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct ParaphraseResponse {
    /// Absent field decodes to the empty string rather than an error.
    #[serde(default)]
    paraphrased: String,
}

/// Client for the single `/paraphrase` endpoint.
///
/// One POST per call, body `{"text": ...}`, result taken from the
/// `paraphrased` field of the JSON response. The response status is
/// deliberately left unchecked: the server reports problems in-band,
/// and anything that decodes is treated as a result.
///
/// There is no overall request deadline and no retry; only the
/// connect timeout bounds how long establishing the connection may
/// take. A connected-but-silent server keeps the call pending.
pub struct ParaphraseClient {
    client: Client,
    base_url: String,
}

impl ParaphraseClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .build()
            .expect("failed to build HTTP client");

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send `text` to the server and return the paraphrased result.
    pub async fn paraphrase(&self, text: &str) -> Result<String, ClientError> {
        let url = format!("{}/paraphrase", self.base_url);
        debug!(url = %url, chars = text.chars().count(), "dispatching paraphrase request");

        let response = self
            .client
            .post(&url)
            .json(&ParaphraseRequest { text })
            .send()
            .await
            .map_err(|source| ClientError::Request {
                url: url.clone(),
                source,
            })?;

        let body: ParaphraseResponse = response.json().await.map_err(ClientError::Decode)?;
        debug!(chars = body.paraphrased.chars().count(), "paraphrase request settled");
        Ok(body.paraphrased)
    }
}

impl Default for ParaphraseClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
