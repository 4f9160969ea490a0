//! HTTP client for Twilio API communication.
//!
//! This module provides the [`HttpClient`] type, the `reqwest`-backed
//! [`Transport`] used by [`RestClient`](crate::RestClient) by default.

use std::collections::HashMap;
use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::clients::{HttpMethod, HttpRequest, HttpResponse, RequestTarget, Transport, TransportError};
use crate::config::{Domain, TwilioConfig};

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the Twilio API.
///
/// The client handles:
/// - Base URL resolution per [`Domain`], honoring configured overrides
/// - Default headers including User-Agent and Basic authorization
/// - Form-encoded bodies for POST and PUT
/// - Relative and absolute continuation URIs
///
/// It performs no retries: one call to [`Transport::send`] is one HTTP
/// round trip.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust
/// use twilio_api::{AccountSid, AuthToken, TwilioConfig};
/// use twilio_api::clients::HttpClient;
///
/// let config = TwilioConfig::builder()
///     .account_sid(AccountSid::new("ACaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa").unwrap())
///     .auth_token(AuthToken::new("token").unwrap())
///     .build()
///     .unwrap();
///
/// let client = HttpClient::new(&config).unwrap();
/// assert_eq!(client.base_url(twilio_api::Domain::Api), "https://api.twilio.com");
/// ```
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Resolved base URL for every domain.
    base_urls: HashMap<Domain, String>,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Network`] if the underlying reqwest client
    /// cannot be created (e.g., TLS initialization failure).
    pub fn new(config: &TwilioConfig) -> Result<Self, TransportError> {
        let base_urls = Domain::all()
            .into_iter()
            .map(|domain| (domain, config.base_url(domain)))
            .collect();

        // Build User-Agent header
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}twilio-api-rust v{SDK_VERSION} | Rust {rust_version}");

        let credentials = format!(
            "{}:{}",
            config.account_sid().as_ref(),
            config.auth_token().as_ref()
        );

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert(
            "Authorization".to_string(),
            format!("Basic {}", STANDARD.encode(credentials)),
        );

        let mut builder = reqwest::Client::builder().use_rustls_tls();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            base_urls,
            default_headers,
        })
    }

    /// Returns the base URL requests for `domain` are sent to.
    #[must_use]
    pub fn base_url(&self, domain: Domain) -> String {
        self.base_urls
            .get(&domain)
            .cloned()
            .unwrap_or_else(|| domain.default_base_url())
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Resolves a request target into an absolute URL.
    ///
    /// Absolute continuation URIs are used unchanged. Relative ones must
    /// start with `/` and are joined to the domain's base URL.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::InvalidUrl`] if the result is not a valid URL.
    pub fn resolve_url(&self, target: &RequestTarget) -> Result<String, TransportError> {
        let url = match target {
            RequestTarget::Path { domain, path } => join(&self.base_url(*domain), path),
            RequestTarget::Uri { uri, .. } if is_absolute(uri) => uri.clone(),
            RequestTarget::Uri { domain, uri } if uri.starts_with('/') => {
                join(&self.base_url(*domain), uri)
            }
            RequestTarget::Uri { uri, .. } => {
                return Err(TransportError::InvalidUrl { url: uri.clone() })
            }
        };

        reqwest::Url::parse(&url).map_err(|_| TransportError::InvalidUrl { url: url.clone() })?;
        Ok(url)
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

impl Transport for HttpClient {
    async fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        let url = self.resolve_url(&request.target)?;

        tracing::debug!("Sending {} request to {}", request.method, url);

        let mut req_builder = match request.method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Put => self.client.put(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };

        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }

        if !request.query.is_empty() {
            req_builder = req_builder.query(request.query.as_slice());
        }

        if matches!(request.method, HttpMethod::Post | HttpMethod::Put) && !request.form.is_empty()
        {
            req_builder = req_builder.form(request.form.as_slice());
        }

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let headers = Self::parse_response_headers(res.headers());

        tracing::debug!("Received status {} from {}", code, url);

        // The status has arrived, so a failure from here on is not a connection failure.
        let response = match res.bytes().await {
            Ok(bytes) => match String::from_utf8(bytes.to_vec()) {
                Ok(body) => HttpResponse::new(code, headers, body),
                Err(error) => {
                    tracing::warn!("Body from {} is not valid UTF-8: {}", url, error);
                    HttpResponse::unreadable(code, headers, format!("invalid UTF-8: {error}"))
                }
            },
            Err(error) => {
                tracing::warn!("Failed to read body from {}: {}", url, error);
                HttpResponse::unreadable(code, headers, error.to_string())
            }
        };

        Ok(response)
    }
}

impl fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_urls", &self.base_urls)
            .finish_non_exhaustive()
    }
}

fn is_absolute(uri: &str) -> bool {
    uri.starts_with("https://") || uri.starts_with("http://")
}

fn join(base: &str, path: &str) -> String {
    if path.starts_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AccountSid, AuthToken, BaseUrl};

    const SID: &str = "ACaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa";

    fn create_test_config() -> TwilioConfig {
        TwilioConfig::builder()
            .account_sid(AccountSid::new(SID).unwrap())
            .auth_token(AuthToken::new("secret").unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_user_agent_header_format() {
        let client = HttpClient::new(&create_test_config()).unwrap();

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.contains("twilio-api-rust v"));
        assert!(user_agent.contains("Rust"));
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let config = TwilioConfig::builder()
            .account_sid(AccountSid::new(SID).unwrap())
            .auth_token(AuthToken::new("secret").unwrap())
            .user_agent_prefix("MyApp/1.0")
            .build()
            .unwrap();
        let client = HttpClient::new(&config).unwrap();

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("MyApp/1.0 | "));
    }

    #[test]
    fn test_basic_authorization_header() {
        let client = HttpClient::new(&create_test_config()).unwrap();

        let expected = format!("Basic {}", STANDARD.encode(format!("{SID}:secret")));
        assert_eq!(client.default_headers().get("Authorization"), Some(&expected));
    }

    #[test]
    fn test_debug_does_not_leak_credentials() {
        let client = HttpClient::new(&create_test_config()).unwrap();
        let debug_str = format!("{:?}", client);

        assert!(debug_str.contains("HttpClient"));
        assert!(!debug_str.contains("Basic"));
    }

    #[test]
    fn test_resolve_path_against_domain_base() {
        let client = HttpClient::new(&create_test_config()).unwrap();
        let target = RequestTarget::Path {
            domain: Domain::Trunking,
            path: "/v1/Trunks/TK1/PhoneNumbers/PN1".to_string(),
        };

        assert_eq!(
            client.resolve_url(&target).unwrap(),
            "https://trunking.twilio.com/v1/Trunks/TK1/PhoneNumbers/PN1"
        );
    }

    #[test]
    fn test_resolve_continuation_uris() {
        let config = TwilioConfig::builder()
            .account_sid(AccountSid::new(SID).unwrap())
            .auth_token(AuthToken::new("secret").unwrap())
            .domain_base_url(Domain::Api, BaseUrl::new("http://127.0.0.1:4010").unwrap())
            .build()
            .unwrap();
        let client = HttpClient::new(&config).unwrap();

        let relative = RequestTarget::Uri {
            domain: Domain::Api,
            uri: "/2010-04-01/Accounts/AC1/Recordings.json?Page=1".to_string(),
        };
        assert_eq!(
            client.resolve_url(&relative).unwrap(),
            "http://127.0.0.1:4010/2010-04-01/Accounts/AC1/Recordings.json?Page=1"
        );

        let absolute = RequestTarget::Uri {
            domain: Domain::Api,
            uri: "https://taskrouter.twilio.com/v1/Workspaces?Page=2".to_string(),
        };
        assert_eq!(
            client.resolve_url(&absolute).unwrap(),
            "https://taskrouter.twilio.com/v1/Workspaces?Page=2"
        );
    }

    #[test]
    fn test_resolve_rejects_unusable_continuation() {
        let client = HttpClient::new(&create_test_config()).unwrap();
        let target = RequestTarget::Uri {
            domain: Domain::Api,
            uri: "Recordings.json?Page=1".to_string(),
        };

        assert!(matches!(
            client.resolve_url(&target),
            Err(TransportError::InvalidUrl { .. })
        ));
    }
}
