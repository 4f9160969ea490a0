//! HTTP response types for the Twilio API client.
//!
//! This module provides the [`HttpResponse`] type returned by a
//! [`Transport`](crate::clients::Transport).

use std::collections::HashMap;

/// A raw HTTP response from the Twilio API.
///
/// The body is kept as text; interpretation belongs to the response
/// classifier. Header names are stored lowercase. A body that arrived but
/// could not be read as UTF-8 text is left empty and the reason is kept in
/// `body_error`, so decoding it fails instead of seeing altered text.
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use twilio_api::clients::HttpResponse;
///
/// let mut headers = HashMap::new();
/// headers.insert("twilio-request-id".to_string(), vec!["RQ123".to_string()]);
///
/// let response = HttpResponse::new(200, headers, r#"{"sid":"RE1"}"#);
/// assert!(response.is_ok());
/// assert_eq!(response.request_id(), Some("RQ123"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, keyed by lowercase name.
    pub headers: HashMap<String, Vec<String>>,
    /// The raw response body.
    pub body: String,
    /// Why the body could not be read, if it could not.
    pub body_error: Option<String>,
}

impl HttpResponse {
    /// Creates a new response, lowercasing header names.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: impl Into<String>) -> Self {
        let headers = headers
            .into_iter()
            .map(|(name, values)| (name.to_lowercase(), values))
            .collect();

        Self {
            code,
            headers,
            body: body.into(),
            body_error: None,
        }
    }

    /// Creates a response whose status arrived but whose body did not.
    #[must_use]
    pub fn unreadable(
        code: u16,
        headers: HashMap<String, Vec<String>>,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            body_error: Some(reason.into()),
            ..Self::new(code, headers, "")
        }
    }

    /// Returns `true` if the status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the first value of a header.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the request ID assigned by the API, if present.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.header("twilio-request-id")
    }

    /// Returns the content type of the body, if present.
    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        self.header("content-type")
    }
}
