//! Configuration error types for the Twilio API client.
//!
//! This module contains the error type returned while building a
//! [`TwilioConfig`](crate::TwilioConfig) and its validated newtypes.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use twilio_api::{AuthToken, ConfigError};
//!
//! let result = AuthToken::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyAuthToken)));
//! ```

use thiserror::Error;

/// Errors that can occur during client configuration.
///
/// This enum represents all possible errors that can occur when creating
/// or validating configuration types. Each variant provides a clear,
/// actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Account SID is malformed.
    #[error("Invalid account SID '{sid}'. Expected 'AC' followed by 32 hexadecimal characters.")]
    InvalidAccountSid {
        /// The invalid SID that was provided.
        sid: String,
    },

    /// Auth token cannot be empty.
    #[error("Auth token cannot be empty. Please provide a valid Twilio auth token.")]
    EmptyAuthToken,

    /// Base URL is invalid.
    #[error("Invalid base URL '{url}'. Please provide a URL with scheme and host (e.g., 'https://api.twilio.com').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// Domain name is not one of the known API domains.
    #[error("Unknown API domain '{domain}'. Expected one of: api, conversations, pricing, taskrouter, trunking.")]
    UnknownDomain {
        /// The unrecognized domain name.
        domain: String,
    },

    /// Page size is outside the range accepted by the API.
    #[error("Invalid page size {size}. Page size must be between 1 and {max}.")]
    InvalidPageSize {
        /// The rejected page size.
        size: u32,
        /// The largest page size the API accepts.
        max: u32,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_account_sid_error_message() {
        let error = ConfigError::InvalidAccountSid {
            sid: "XX123".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("XX123"));
        assert!(message.contains("'AC'"));
    }

    #[test]
    fn test_invalid_page_size_error_message() {
        let error = ConfigError::InvalidPageSize { size: 0, max: 1000 };
        let message = error.to_string();
        assert!(message.contains("Invalid page size 0"));
        assert!(message.contains("1000"));
    }

    #[test]
    fn test_missing_required_field_error_message() {
        let error = ConfigError::MissingRequiredField {
            field: "account_sid",
        };
        let message = error.to_string();
        assert!(message.contains("account_sid"));
        assert!(message.contains("must be set"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::EmptyAuthToken;
        let _: &dyn std::error::Error = &error;
    }
}
