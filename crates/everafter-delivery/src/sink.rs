// Write-only sink client
//
// One JSON POST per delivery attempt. The endpoint (a spreadsheet
// web-app) does not expose a readable response to its callers, so the
// status code and body are ignored on purpose: "delivered" means only
// that the local write completed without a transport error. A sink
// that accepts the bytes and later fails silently is indistinguishable
// from success. That is a property of the boundary, not a bug.

use serde::Serialize;
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::transport::TransportConfig;

/// HTTP client for the opaque RSVP submission sink.
pub struct SinkClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl SinkClient {
    /// Create a new sink client from a `TransportConfig`.
    pub fn new(endpoint: Url, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Ok(Self { http, endpoint })
    }

    /// Create a sink client with a pre-built `reqwest::Client`.
    pub fn from_reqwest(endpoint: &str, http: reqwest::Client) -> Result<Self, Error> {
        let endpoint = Url::parse(endpoint)?;
        Ok(Self { http, endpoint })
    }

    /// The sink endpoint URL.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Issue a single fire-and-forget delivery attempt.
    ///
    /// Exactly one network write per call; no retries. `Ok(())` means
    /// the write left the machine without a local transport error —
    /// nothing more.
    pub async fn deliver<T: Serialize + ?Sized>(&self, payload: &T) -> Result<(), Error> {
        let response = self
            .http
            .post(self.endpoint.clone())
            .json(payload)
            .send()
            .await?;

        // Opaque sink: status and body carry no contract.
        debug!(status = %response.status(), "sink write completed");
        Ok(())
    }
}
