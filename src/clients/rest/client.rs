//! REST client implementation for the Twilio API.
//!
//! This module provides the [`RestClient`] type: the single request
//! executor every resource operation runs through.

use serde::de::DeserializeOwned;

use crate::clients::{HttpClient, HttpRequest, HttpResponse, Transport, TransportError};
use crate::config::TwilioConfig;
use crate::rest::{classify, decode_page, decode_record, ApiError, OperationSpec, Page};

/// REST API client for the Twilio API.
///
/// Owns a [`Transport`] and the immutable [`TwilioConfig`]. Each call issues
/// exactly one request, classifies the response against the success status
/// configured for the operation kind, and decodes the body. There are no
/// retries.
///
/// The transport is generic so tests can substitute a scripted one; the
/// default is the `reqwest`-backed [`HttpClient`].
///
/// # Thread Safety
///
/// `RestClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use twilio_api::{AccountSid, AuthToken, RestClient, TwilioConfig};
/// use twilio_api::rest::resources::api::v2010::Recording;
/// use twilio_api::rest::{Deleter, Reader};
///
/// let config = TwilioConfig::builder()
///     .account_sid(AccountSid::new("ACaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa")?)
///     .auth_token(AuthToken::new("token")?)
///     .build()?;
/// let client = RestClient::new(config)?;
///
/// let mut recordings = Recording::read("ACaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa")
///     .by_date_created("2016-01-01")
///     .execute(&client)
///     .await?;
///
/// while let Some(recording) = recordings.next().await {
///     println!("{:?}", recording?.sid);
/// }
/// ```
#[derive(Debug)]
pub struct RestClient<C = HttpClient> {
    /// The transport requests are sent through.
    transport: C,
    /// The immutable client configuration.
    config: TwilioConfig,
}

// Verify RestClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestClient>();
};

impl RestClient<HttpClient> {
    /// Creates a new REST client backed by [`HttpClient`].
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Network`] if the HTTP client cannot be built.
    pub fn new(config: TwilioConfig) -> Result<Self, TransportError> {
        let transport = HttpClient::new(&config)?;
        Ok(Self { transport, config })
    }
}

impl<C: Transport> RestClient<C> {
    /// Creates a REST client with a caller-supplied transport.
    #[must_use]
    pub fn with_transport(config: TwilioConfig, transport: C) -> Self {
        Self { transport, config }
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &TwilioConfig {
        &self.config
    }

    /// Returns the underlying transport.
    #[must_use]
    pub const fn transport(&self) -> &C {
        &self.transport
    }

    /// Sends a request and classifies the response.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Connection`] if no response was received and
    /// [`ApiError::Server`] if the status is not the expected one.
    pub async fn send(
        &self,
        spec: &OperationSpec,
        request: &HttpRequest,
    ) -> Result<HttpResponse, ApiError> {
        let expected = self.config.success_statuses().expected(spec.kind);

        tracing::debug!(
            "{} {}: {} {}",
            spec.resource,
            spec.kind,
            request.method,
            request.target
        );

        let outcome = self.transport.send(request).await;
        classify(outcome, spec, expected)
    }

    /// Executes a single-shot operation and decodes one record.
    ///
    /// # Errors
    ///
    /// Returns any [`ApiError`] kind.
    pub async fn execute<T: DeserializeOwned>(
        &self,
        spec: &OperationSpec,
        request: HttpRequest,
    ) -> Result<T, ApiError> {
        let response = self.send(spec, &request).await?;
        decode_record(spec, &response)
    }

    /// Executes a single-shot operation whose body is ignored.
    ///
    /// Success only confirms that the expected status was returned.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Connection`] or [`ApiError::Server`].
    pub async fn execute_empty(
        &self,
        spec: &OperationSpec,
        request: HttpRequest,
    ) -> Result<(), ApiError> {
        self.send(spec, &request).await.map(|_| ())
    }

    /// Fetches and decodes one page of a list operation.
    ///
    /// # Errors
    ///
    /// Returns any [`ApiError`] kind. A single malformed record fails the
    /// whole page.
    pub async fn fetch_page<T: DeserializeOwned>(
        &self,
        spec: &OperationSpec,
        records_key: &str,
        request: HttpRequest,
    ) -> Result<Page<T>, ApiError> {
        let response = self.send(spec, &request).await?;
        let page: Page<T> = decode_page(spec, records_key, &response)?;

        tracing::debug!(
            "{} {}: received {} records under '{}' (next page: {})",
            spec.resource,
            spec.kind,
            page.len(),
            records_key,
            page.next_page_uri().unwrap_or("none")
        );

        Ok(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::{HttpMethod, TransportError};
    use crate::config::{AccountSid, AuthToken, Domain};
    use crate::rest::{OperationKind, SuccessStatuses};
    use serde::Deserialize;
    use std::collections::HashMap;
    use std::sync::Mutex;

    struct FixedTransport {
        response: Option<(u16, &'static str)>,
        calls: Mutex<usize>,
    }

    impl Transport for FixedTransport {
        async fn send(&self, _request: &HttpRequest) -> Result<HttpResponse, TransportError> {
            *self.calls.lock().unwrap() += 1;
            self.response
                .map(|(code, body)| HttpResponse::new(code, HashMap::new(), body))
                .ok_or(TransportError::InvalidUrl {
                    url: "unreachable".to_string(),
                })
        }
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct Record {
        sid: String,
    }

    fn config() -> TwilioConfig {
        TwilioConfig::builder()
            .account_sid(AccountSid::new("ACaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa").unwrap())
            .auth_token(AuthToken::new("token").unwrap())
            .build()
            .unwrap()
    }

    fn client(response: Option<(u16, &'static str)>) -> RestClient<FixedTransport> {
        RestClient::with_transport(
            config(),
            FixedTransport {
                response,
                calls: Mutex::new(0),
            },
        )
    }

    fn request() -> HttpRequest {
        HttpRequest::builder(HttpMethod::Get, Domain::Api, "/2010-04-01/Accounts/AC1/Sandbox.json")
            .build()
    }

    #[tokio::test]
    async fn test_execute_decodes_record() {
        let client = client(Some((200, r#"{"sid":"SB1"}"#)));
        let spec = OperationSpec::new("Sandbox", OperationKind::Fetch);

        let record: Record = client.execute(&spec, request()).await.unwrap();
        assert_eq!(record.sid, "SB1");
        assert_eq!(*client.transport().calls.lock().unwrap(), 1);
    }

    #[tokio::test]
    async fn test_execute_empty_ignores_body() {
        let client = client(Some((204, "")));
        let spec = OperationSpec::new("Worker", OperationKind::Delete);

        tokio_test::assert_ok!(client.execute_empty(&spec, request()).await);
    }

    #[tokio::test]
    async fn test_configured_success_status_is_used() {
        let config = TwilioConfig::builder()
            .account_sid(AccountSid::new("ACaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa").unwrap())
            .auth_token(AuthToken::new("token").unwrap())
            .success_statuses(SuccessStatuses::default().with(OperationKind::Create, 200))
            .build()
            .unwrap();
        let client = RestClient::with_transport(
            config,
            FixedTransport {
                response: Some((200, r#"{"sid":"CR1"}"#)),
                calls: Mutex::new(0),
            },
        );
        let spec = OperationSpec::new("Credential", OperationKind::Create);

        let record: Record = client.execute(&spec, request()).await.unwrap();
        assert_eq!(record.sid, "CR1");
    }

    #[tokio::test]
    async fn test_no_response_is_connection_error() {
        let client = client(None);
        let spec = OperationSpec::new("Sandbox", OperationKind::Fetch);

        let error = client.execute::<Record>(&spec, request()).await.unwrap_err();
        assert_eq!(
            error.to_string(),
            "Sandbox fetch failed: unable to connect to server"
        );
    }
}
