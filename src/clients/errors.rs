//! Transport error types for the Twilio API client.
//!
//! A [`TransportError`] means no HTTP response was received at all. Any
//! response that does arrive, whatever its status code, is a successful
//! transport and is classified by the REST layer.

use thiserror::Error;

/// Error returned when the transport cannot produce a response.
///
/// # Example
///
/// ```rust
/// use twilio_api::clients::TransportError;
///
/// let error = TransportError::InvalidUrl {
///     url: "ht!tp://bad".to_string(),
/// };
/// assert!(error.to_string().contains("ht!tp://bad"));
/// ```
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network or connection error, including timeouts.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The request URL could not be resolved.
    #[error("Invalid request URL '{url}'.")]
    InvalidUrl {
        /// The URL that could not be used.
        url: String,
    },
}
