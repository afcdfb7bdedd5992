use crate::domain::errors::TransportError;

/// A transport able to deliver one JSON-RPC request body and return the raw response body.
#[cfg_attr(test, mockall::automock)]
pub trait Transport {
    /// Posts `body` to `url` and returns the response body as text.
    ///
    /// # Arguments
    ///
    /// * `url` - The RPC endpoint.
    /// * `body` - The serialized JSON request.
    ///
    /// # Returns
    ///
    /// * `Result<String, TransportError>` - The response body, whatever its HTTP status,
    ///   or an error if the endpoint could not be reached.
    fn post_json(&self, url: &str, body: String) -> Result<String, TransportError>;
}
