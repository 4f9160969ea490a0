//! Configuration types for the Twilio API client.
//!
//! This module provides the configuration used to build a
//! [`RestClient`](crate::RestClient) and the values the request executor
//! reads on every call.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`TwilioConfig`]: The immutable client configuration
//! - [`TwilioConfigBuilder`]: A builder for constructing [`TwilioConfig`] instances
//! - [`AccountSid`]: A validated account SID newtype
//! - [`AuthToken`]: A validated auth token newtype with masked debug output
//! - [`BaseUrl`]: A validated base URL used to override domain hosts
//! - [`Domain`]: The API domain a resource lives under
//!
//! # Example
//!
//! ```rust
//! use twilio_api::{AccountSid, AuthToken, TwilioConfig};
//!
//! let config = TwilioConfig::builder()
//!     .account_sid(AccountSid::new("ACaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa").unwrap())
//!     .auth_token(AuthToken::new("token").unwrap())
//!     .default_page_size(100)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.default_page_size(), 100);
//! ```

mod domain;
mod newtypes;

pub use domain::Domain;
pub use newtypes::{AccountSid, AuthToken, BaseUrl};

use std::collections::HashMap;
use std::time::Duration;

use crate::error::ConfigError;
use crate::rest::SuccessStatuses;

/// Page size sent on first-page requests when a reader does not set one.
pub const DEFAULT_PAGE_SIZE: u32 = 50;

/// Largest page size the API accepts.
pub const MAX_PAGE_SIZE: u32 = 1000;

/// Configuration for the Twilio API client.
///
/// Holds credentials, the default page size, the success status expected for
/// each operation kind, and host overrides. There is no process-wide state:
/// the executor reads everything it needs from this value.
///
/// # Thread Safety
///
/// `TwilioConfig` is `Clone`, `Send`, and `Sync`.
///
/// # Example
///
/// ```rust
/// use twilio_api::{AccountSid, AuthToken, BaseUrl, Domain, TwilioConfig};
///
/// let config = TwilioConfig::builder()
///     .account_sid(AccountSid::new("ACaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa").unwrap())
///     .auth_token(AuthToken::new("token").unwrap())
///     .domain_base_url(Domain::Taskrouter, BaseUrl::new("http://localhost:9000").unwrap())
///     .build()
///     .unwrap();
///
/// assert_eq!(config.base_url(Domain::Taskrouter), "http://localhost:9000");
/// assert_eq!(config.base_url(Domain::Api), "https://api.twilio.com");
/// ```
#[derive(Clone, Debug)]
pub struct TwilioConfig {
    account_sid: AccountSid,
    auth_token: AuthToken,
    default_page_size: u32,
    success_statuses: SuccessStatuses,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
    base_url_override: Option<BaseUrl>,
    domain_base_urls: HashMap<Domain, BaseUrl>,
}

impl TwilioConfig {
    /// Creates a new builder for constructing a `TwilioConfig`.
    #[must_use]
    pub fn builder() -> TwilioConfigBuilder {
        TwilioConfigBuilder::new()
    }

    /// Returns the account SID.
    #[must_use]
    pub const fn account_sid(&self) -> &AccountSid {
        &self.account_sid
    }

    /// Returns the auth token.
    #[must_use]
    pub const fn auth_token(&self) -> &AuthToken {
        &self.auth_token
    }

    /// Returns the page size used when a reader does not set one.
    #[must_use]
    pub const fn default_page_size(&self) -> u32 {
        self.default_page_size
    }

    /// Returns the success status expected for each operation kind.
    #[must_use]
    pub const fn success_statuses(&self) -> &SuccessStatuses {
        &self.success_statuses
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the transport timeout, if configured.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Resolves the base URL for a domain.
    ///
    /// A per-domain override wins over the global override, which wins over
    /// the production host.
    #[must_use]
    pub fn base_url(&self, domain: Domain) -> String {
        self.domain_base_urls
            .get(&domain)
            .or(self.base_url_override.as_ref())
            .map_or_else(|| domain.default_base_url(), |url| url.as_ref().to_string())
    }
}

// Verify TwilioConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<TwilioConfig>();
};

/// Builder for constructing [`TwilioConfig`] instances.
///
/// Required fields are `account_sid` and `auth_token`.
///
/// # Defaults
///
/// - `default_page_size`: 50
/// - `success_statuses`: 201 create, 200 fetch/read/update, 204 delete
/// - `user_agent_prefix`: `None`
/// - `timeout`: `None` (the transport's own default)
/// - host overrides: none
#[derive(Debug, Default)]
pub struct TwilioConfigBuilder {
    account_sid: Option<AccountSid>,
    auth_token: Option<AuthToken>,
    default_page_size: Option<u32>,
    success_statuses: Option<SuccessStatuses>,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
    base_url_override: Option<BaseUrl>,
    domain_base_urls: HashMap<Domain, BaseUrl>,
}

impl TwilioConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the account SID (required).
    #[must_use]
    pub fn account_sid(mut self, sid: AccountSid) -> Self {
        self.account_sid = Some(sid);
        self
    }

    /// Sets the auth token (required).
    #[must_use]
    pub fn auth_token(mut self, token: AuthToken) -> Self {
        self.auth_token = Some(token);
        self
    }

    /// Sets the page size used by readers that do not set their own.
    #[must_use]
    pub const fn default_page_size(mut self, size: u32) -> Self {
        self.default_page_size = Some(size);
        self
    }

    /// Overrides the success status expected per operation kind.
    #[must_use]
    pub const fn success_statuses(mut self, statuses: SuccessStatuses) -> Self {
        self.success_statuses = Some(statuses);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets the transport timeout for each request.
    ///
    /// A timed-out request surfaces as a connection failure.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Routes every domain to the given base URL.
    #[must_use]
    pub fn base_url_override(mut self, url: BaseUrl) -> Self {
        self.base_url_override = Some(url);
        self
    }

    /// Routes one domain to the given base URL.
    #[must_use]
    pub fn domain_base_url(mut self, domain: Domain, url: BaseUrl) -> Self {
        self.domain_base_urls.insert(domain, url);
        self
    }

    /// Builds the [`TwilioConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `account_sid` or
    /// `auth_token` are not set, and [`ConfigError::InvalidPageSize`] if the
    /// default page size is outside `1..=1000`.
    pub fn build(self) -> Result<TwilioConfig, ConfigError> {
        let account_sid = self.account_sid.ok_or(ConfigError::MissingRequiredField {
            field: "account_sid",
        })?;
        let auth_token = self.auth_token.ok_or(ConfigError::MissingRequiredField {
            field: "auth_token",
        })?;

        let default_page_size = self.default_page_size.unwrap_or(DEFAULT_PAGE_SIZE);
        if default_page_size == 0 || default_page_size > MAX_PAGE_SIZE {
            return Err(ConfigError::InvalidPageSize {
                size: default_page_size,
                max: MAX_PAGE_SIZE,
            });
        }

        Ok(TwilioConfig {
            account_sid,
            auth_token,
            default_page_size,
            success_statuses: self.success_statuses.unwrap_or_default(),
            user_agent_prefix: self.user_agent_prefix,
            timeout: self.timeout,
            base_url_override: self.base_url_override,
            domain_base_urls: self.domain_base_urls,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::OperationKind;

    fn sid() -> AccountSid {
        AccountSid::new("ACaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa").unwrap()
    }

    fn token() -> AuthToken {
        AuthToken::new("token").unwrap()
    }

    #[test]
    fn test_builder_requires_account_sid() {
        let result = TwilioConfigBuilder::new().auth_token(token()).build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField {
                field: "account_sid"
            })
        ));
    }

    #[test]
    fn test_builder_requires_auth_token() {
        let result = TwilioConfigBuilder::new().account_sid(sid()).build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField {
                field: "auth_token"
            })
        ));
    }

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = TwilioConfig::builder()
            .account_sid(sid())
            .auth_token(token())
            .build()
            .unwrap();

        assert_eq!(config.default_page_size(), DEFAULT_PAGE_SIZE);
        assert_eq!(config.success_statuses().expected(OperationKind::Create), 201);
        assert_eq!(config.success_statuses().expected(OperationKind::Delete), 204);
        assert!(config.user_agent_prefix().is_none());
        assert!(config.timeout().is_none());
        assert_eq!(config.base_url(Domain::Api), "https://api.twilio.com");
    }

    #[test]
    fn test_builder_rejects_out_of_range_page_size() {
        let zero = TwilioConfig::builder()
            .account_sid(sid())
            .auth_token(token())
            .default_page_size(0)
            .build();
        assert!(matches!(
            zero,
            Err(ConfigError::InvalidPageSize { size: 0, .. })
        ));

        let too_big = TwilioConfig::builder()
            .account_sid(sid())
            .auth_token(token())
            .default_page_size(MAX_PAGE_SIZE + 1)
            .build();
        assert!(matches!(too_big, Err(ConfigError::InvalidPageSize { .. })));
    }

    #[test]
    fn test_base_url_precedence() {
        let config = TwilioConfig::builder()
            .account_sid(sid())
            .auth_token(token())
            .base_url_override(BaseUrl::new("http://global.test").unwrap())
            .domain_base_url(Domain::Pricing, BaseUrl::new("http://pricing.test").unwrap())
            .build()
            .unwrap();

        assert_eq!(config.base_url(Domain::Pricing), "http://pricing.test");
        assert_eq!(config.base_url(Domain::Api), "http://global.test");
    }

    #[test]
    fn test_config_is_clone_and_debug_masks_token() {
        let config = TwilioConfig::builder()
            .account_sid(sid())
            .auth_token(AuthToken::new("very-secret").unwrap())
            .build()
            .unwrap();

        let cloned = config.clone();
        assert_eq!(cloned.account_sid(), config.account_sid());

        let debug_str = format!("{:?}", config);
        assert!(debug_str.contains("TwilioConfig"));
        assert!(!debug_str.contains("very-secret"));
    }
}
