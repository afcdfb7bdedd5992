use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;

use crate::domain::errors::TransportError;

use super::transport::Transport;

/// Blocking HTTP transport.
///
/// Every call builds its own client with idle pooling disabled, so the connection
/// is opened and closed within the call.
#[derive(Clone, Debug, Default)]
pub struct HttpTransport;

impl HttpTransport {
    pub fn new() -> Self {
        Self
    }

    fn client() -> Result<Client, TransportError> {
        Client::builder()
            .pool_max_idle_per_host(0)
            .timeout(None::<Duration>)
            .build()
            .map_err(TransportError::FailedToBuildClient)
    }
}

impl Transport for HttpTransport {
    fn post_json(&self, url: &str, body: String) -> Result<String, TransportError> {
        let response = Self::client()?
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .map_err(|source| TransportError::FailedToSendRequest {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Rpc endpoint {} answered with status {}", url, status);
        }

        response
            .text()
            .map_err(|source| TransportError::FailedToReadBody {
                url: url.to_string(),
                source,
            })
    }
}
