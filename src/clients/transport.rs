//! The transport seam between the REST layer and the network.

use crate::clients::{HttpRequest, HttpResponse, TransportError};

/// Executes one HTTP request and returns the raw response.
///
/// Returning `Err` signals that no response was received. Any response that
/// is received, whatever its status code, must be returned as `Ok`.
///
/// [`HttpClient`](crate::clients::HttpClient) is the production
/// implementation. Tests can supply their own to script responses.
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use twilio_api::clients::{HttpRequest, HttpResponse, Transport, TransportError};
///
/// struct AlwaysNoContent;
///
/// impl Transport for AlwaysNoContent {
///     async fn send(&self, _request: &HttpRequest) -> Result<HttpResponse, TransportError> {
///         Ok(HttpResponse::new(204, HashMap::new(), ""))
///     }
/// }
/// ```
#[allow(async_fn_in_trait)]
pub trait Transport: Send + Sync {
    /// Sends the request and waits for the complete response.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if no response could be obtained.
    async fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError>;
}
