//! Error types for REST operations.
//!
//! Every operation, single-shot or paginated, fails with exactly one of
//! three [`ApiError`] kinds:
//!
//! - **[`ApiError::Connection`]**: the transport produced no response
//! - **[`ApiError::Server`]**: a response arrived with an unexpected status
//! - **[`ApiError::Decode`]**: the status matched but the body did not
//!   deserialize into the declared type
//!
//! # Example
//!
//! ```rust,ignore
//! use twilio_api::rest::ApiError;
//!
//! match Recording::delete(account_sid, "RE123").execute(&client).await {
//!     Ok(()) => println!("deleted"),
//!     Err(ApiError::Server(e)) if e.code == Some(20404) => println!("already gone"),
//!     Err(ApiError::Connection { .. }) => println!("network down"),
//!     Err(e) => println!("other error: {e}"),
//! }
//! ```

use serde_json::Value;
use thiserror::Error;

use crate::clients::TransportError;
use crate::rest::OperationKind;

/// Message used when a rejected response carries no vendor error document.
pub const NO_CONTENT_MESSAGE: &str = "Server Error, no content";

/// Error type for REST operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The transport could not produce any response.
    ///
    /// Never retried; terminal for the call that triggered it.
    #[error("{resource} {operation} failed: unable to connect to server")]
    Connection {
        /// The resource name (e.g., "Recording").
        resource: &'static str,
        /// The operation being attempted.
        operation: OperationKind,
        /// The underlying transport failure.
        #[source]
        source: TransportError,
    },

    /// The server answered with a status other than the expected one.
    #[error(transparent)]
    Server(#[from] ServerError),

    /// The body of a successful response could not be deserialized.
    #[error("{resource} {operation} failed: unable to decode response: {source}")]
    Decode {
        /// The resource name.
        resource: &'static str,
        /// The operation being attempted.
        operation: OperationKind,
        /// The underlying parse error.
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    /// Returns the error message.
    ///
    /// For rejected requests this is the vendor message; otherwise it is the
    /// display text of the error.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Server(e) => e.message.clone(),
            other => other.to_string(),
        }
    }

    /// Returns the vendor error code, if the server supplied one.
    #[must_use]
    pub const fn code(&self) -> Option<u32> {
        match self {
            Self::Server(e) => e.code,
            _ => None,
        }
    }

    /// Returns the vendor "more info" URL, if the server supplied one.
    #[must_use]
    pub fn more_info(&self) -> Option<&str> {
        match self {
            Self::Server(e) => e.more_info.as_deref(),
            _ => None,
        }
    }

    /// Returns the status reported inside the vendor error document.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Server(e) => e.status,
            _ => None,
        }
    }

    /// Returns the HTTP status code of the rejected response.
    #[must_use]
    pub const fn http_status(&self) -> Option<u16> {
        match self {
            Self::Server(e) => Some(e.http_status),
            _ => None,
        }
    }

    /// Returns the request ID of the rejected response.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Self::Server(e) => e.request_id.as_deref(),
            _ => None,
        }
    }

    /// Returns `true` if no response was received.
    #[must_use]
    pub const fn is_connection(&self) -> bool {
        matches!(self, Self::Connection { .. })
    }
}

/// A request rejected by the server.
///
/// Populated from the vendor error document when the body contains one,
/// otherwise carries [`NO_CONTENT_MESSAGE`].
///
/// # Example
///
/// ```rust
/// use twilio_api::rest::ServerError;
///
/// let error = ServerError::from_response(500, r#"{"message":"boom","code":20500}"#, None);
/// assert_eq!(error.message, "boom");
/// assert_eq!(error.code, Some(20500));
///
/// let error = ServerError::from_response(502, "<html>Bad Gateway</html>", None);
/// assert_eq!(error.message, "Server Error, no content");
/// ```
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct ServerError {
    /// The vendor error message.
    pub message: String,
    /// The vendor error code.
    pub code: Option<u32>,
    /// URL of the vendor documentation for this error.
    pub more_info: Option<String>,
    /// The status field of the vendor error document.
    pub status: Option<u16>,
    /// The HTTP status code of the response.
    pub http_status: u16,
    /// The `Twilio-Request-Id` header of the response.
    pub request_id: Option<String>,
}

impl ServerError {
    /// Builds a server error from a rejected response.
    #[must_use]
    pub fn from_response(http_status: u16, body: &str, request_id: Option<&str>) -> Self {
        let request_id = request_id.map(ToString::to_string);

        match RestException::from_json(body) {
            Some(exception) => Self {
                message: exception
                    .message
                    .unwrap_or_else(|| NO_CONTENT_MESSAGE.to_string()),
                code: exception.code,
                more_info: exception.more_info,
                status: exception.status,
                http_status,
                request_id,
            },
            None => Self {
                message: NO_CONTENT_MESSAGE.to_string(),
                code: None,
                more_info: None,
                status: None,
                http_status,
                request_id,
            },
        }
    }
}

/// A vendor error document.
///
/// Twilio returns errors in the format:
/// ```json
/// {
///   "code": 20404,
///   "message": "The requested resource was not found",
///   "more_info": "https://www.twilio.com/docs/errors/20404",
///   "status": 404
/// }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RestException {
    /// The error message.
    pub message: Option<String>,
    /// The vendor error code.
    pub code: Option<u32>,
    /// The documentation URL.
    pub more_info: Option<String>,
    /// The status echoed in the body.
    pub status: Option<u16>,
}

impl RestException {
    /// Parses a vendor error document.
    ///
    /// Returns `None` unless the body is a JSON object with a `message` or a
    /// `code`. Numeric fields are accepted as numbers or numeric strings.
    #[must_use]
    pub fn from_json(body: &str) -> Option<Self> {
        let value: Value = serde_json::from_str(body).ok()?;
        let object = value.as_object()?;

        if !object.contains_key("message") && !object.contains_key("code") {
            return None;
        }

        let text = |key: &str| object.get(key).and_then(Value::as_str).map(ToString::to_string);

        Some(Self {
            message: text("message"),
            code: object.get("code").and_then(as_u64).and_then(|n| u32::try_from(n).ok()),
            more_info: text("more_info"),
            status: object
                .get("status")
                .and_then(as_u64)
                .and_then(|n| u16::try_from(n).ok()),
        })
    }
}

fn as_u64(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

// Verify ApiError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ApiError>();
};
