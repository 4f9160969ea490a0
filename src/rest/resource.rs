//! Operation traits for REST resources.
//!
//! Each resource operation is a small struct holding its path identifiers
//! and optional parameters. The struct implements [`Endpoint`] plus one of
//! [`Fetcher`], [`Creator`], [`Updater`], [`Deleter`] or [`Reader`], and
//! gets `execute()` for free. The request pipeline itself lives once in
//! [`RestClient`].
//!
//! # Implementing an Operation
//!
//! ```rust,ignore
//! use twilio_api::clients::Params;
//! use twilio_api::rest::{build_path, Endpoint, Reader};
//! use twilio_api::Domain;
//!
//! pub struct WidgetReader {
//!     account_sid: String,
//!     color: Option<String>,
//!     page_size: Option<u32>,
//! }
//!
//! impl Endpoint for WidgetReader {
//!     const RESOURCE: &'static str = "Widget";
//!     const DOMAIN: Domain = Domain::Api;
//!
//!     fn path(&self) -> String {
//!         build_path(
//!             "/2010-04-01/Accounts/{AccountSid}/Widgets.json",
//!             &[("AccountSid", self.account_sid.as_str())],
//!         )
//!     }
//! }
//!
//! impl Reader for WidgetReader {
//!     type Record = Widget;
//!     const RECORDS_KEY: &'static str = "widgets";
//!
//!     fn page_size(&self) -> Option<u32> {
//!         self.page_size
//!     }
//!
//!     fn filter_params(&self) -> Params {
//!         let mut params = Params::new();
//!         params.push_opt("Color", self.color.as_deref());
//!         params
//!     }
//! }
//! ```
//!
//! # Snapshot Semantics
//!
//! `execute()` consumes the operation. A reader's filters are read once to
//! build the first-page request; later pages follow the server's
//! continuation URI and never consult the reader again.

use serde::de::DeserializeOwned;

use crate::clients::{HttpRequest, Params, RestClient, Transport};
use crate::config::{Domain, MAX_PAGE_SIZE};
use crate::rest::{ApiError, OperationKind, OperationSpec, ResultSet};

/// Name, domain and path of a resource operation.
pub trait Endpoint {
    /// Resource name used in error messages (e.g., "Recording").
    const RESOURCE: &'static str;

    /// The API domain the resource lives under.
    const DOMAIN: Domain;

    /// Returns the resource path with identifiers substituted.
    fn path(&self) -> String;
}

/// Builds the request for a single-shot operation of the given kind.
fn single_shot_request<E: Endpoint + ?Sized>(
    endpoint: &E,
    kind: OperationKind,
    query: Params,
    form: Params,
) -> HttpRequest {
    HttpRequest::builder(kind.http_method(), E::DOMAIN, endpoint.path())
        .query(query)
        .form(form)
        .build()
}

/// Fetches a single resource (GET, expects 200 by default).
#[allow(async_fn_in_trait)]
pub trait Fetcher: Endpoint + Sized {
    /// The record type returned.
    type Record: DeserializeOwned;

    /// Query parameters to send. Most fetches have none.
    fn query_params(&self) -> Params {
        Params::new()
    }

    /// Builds the fetch request.
    fn build_request(&self) -> HttpRequest {
        single_shot_request(self, OperationKind::Fetch, self.query_params(), Params::new())
    }

    /// Sends the fetch and decodes the record.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on connection failure, rejection, or a body that
    /// does not decode.
    async fn execute<C: Transport>(self, client: &RestClient<C>) -> Result<Self::Record, ApiError> {
        let spec = OperationSpec::new(Self::RESOURCE, OperationKind::Fetch);
        client.execute(&spec, self.build_request()).await
    }
}

/// Creates a resource (POST, expects 201 by default).
#[allow(async_fn_in_trait)]
pub trait Creator: Endpoint + Sized {
    /// The record type returned.
    type Record: DeserializeOwned;

    /// Form parameters to send, unset optionals omitted.
    fn form_params(&self) -> Params;

    /// Builds the create request.
    fn build_request(&self) -> HttpRequest {
        single_shot_request(self, OperationKind::Create, Params::new(), self.form_params())
    }

    /// Sends the create and decodes the created record.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on connection failure, rejection, or a body that
    /// does not decode.
    async fn execute<C: Transport>(self, client: &RestClient<C>) -> Result<Self::Record, ApiError> {
        let spec = OperationSpec::new(Self::RESOURCE, OperationKind::Create);
        client.execute(&spec, self.build_request()).await
    }
}

/// Updates a resource (POST, expects 200 by default).
#[allow(async_fn_in_trait)]
pub trait Updater: Endpoint + Sized {
    /// The record type returned.
    type Record: DeserializeOwned;

    /// Form parameters to send, unset optionals omitted.
    fn form_params(&self) -> Params;

    /// Builds the update request.
    fn build_request(&self) -> HttpRequest {
        single_shot_request(self, OperationKind::Update, Params::new(), self.form_params())
    }

    /// Sends the update and decodes the updated record.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on connection failure, rejection, or a body that
    /// does not decode.
    async fn execute<C: Transport>(self, client: &RestClient<C>) -> Result<Self::Record, ApiError> {
        let spec = OperationSpec::new(Self::RESOURCE, OperationKind::Update);
        client.execute(&spec, self.build_request()).await
    }
}

/// Deletes a resource (DELETE, expects 204 by default).
#[allow(async_fn_in_trait)]
pub trait Deleter: Endpoint + Sized {
    /// Builds the delete request.
    fn build_request(&self) -> HttpRequest {
        single_shot_request(self, OperationKind::Delete, Params::new(), Params::new())
    }

    /// Sends the delete; `Ok(())` only if the expected status came back.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Connection`] or [`ApiError::Server`].
    async fn execute<C: Transport>(self, client: &RestClient<C>) -> Result<(), ApiError> {
        let spec = OperationSpec::new(Self::RESOURCE, OperationKind::Delete);
        client.execute_empty(&spec, self.build_request()).await
    }
}

/// Lists resources across server-side pages.
///
/// Filters are attached to the first request only, and only when set. The
/// page size (explicit or the configured default) is appended last as
/// `PageSize`. Subsequent pages are fetched from the continuation URI the
/// server returns, verbatim.
#[allow(async_fn_in_trait)]
pub trait Reader: Endpoint + Sized {
    /// The record type yielded.
    type Record: DeserializeOwned;

    /// JSON key the records are listed under.
    const RECORDS_KEY: &'static str;

    /// The requested page size, if set on this reader.
    fn page_size(&self) -> Option<u32>;

    /// Filter parameters that were explicitly set.
    fn filter_params(&self) -> Params {
        Params::new()
    }

    /// Builds the first-page request.
    ///
    /// An explicit page size outside `1..=MAX_PAGE_SIZE` is clamped into
    /// that range before it is sent.
    fn first_page_request(&self, default_page_size: u32) -> HttpRequest {
        let requested = self.page_size().unwrap_or(default_page_size);
        let page_size = requested.clamp(1, MAX_PAGE_SIZE);
        if page_size != requested {
            tracing::warn!(
                "{} read: page size {} out of range, sending {}",
                Self::RESOURCE,
                requested,
                page_size
            );
        }

        let mut query = self.filter_params();
        query.push("PageSize", page_size.to_string());

        HttpRequest::builder(OperationKind::Read.http_method(), Self::DOMAIN, self.path())
            .query(query)
            .build()
    }

    /// Builds a next-page request from a continuation URI.
    ///
    /// Has no access to reader state: the URI already encodes the filters.
    #[must_use]
    fn next_page_request(uri: &str) -> HttpRequest {
        HttpRequest::continuation(Self::DOMAIN, uri)
    }

    /// Fetches the first page and returns a lazy [`ResultSet`] over all
    /// records.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the first page cannot be fetched. Errors on
    /// later pages surface while iterating.
    async fn execute<'c, C: Transport>(
        self,
        client: &'c RestClient<C>,
    ) -> Result<ResultSet<'c, Self::Record, C>, ApiError> {
        let spec = OperationSpec::new(Self::RESOURCE, OperationKind::Read);
        let request = self.first_page_request(client.config().default_page_size());
        let page = client.fetch_page(&spec, Self::RECORDS_KEY, request).await?;

        Ok(ResultSet::new(
            client,
            spec,
            Self::RECORDS_KEY,
            Self::next_page_request,
            page,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::{HttpMethod, RequestTarget};
    use crate::rest::build_path;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Widget {}

    struct WidgetReader {
        account_sid: String,
        color: Option<String>,
        page_size: Option<u32>,
    }

    impl Endpoint for WidgetReader {
        const RESOURCE: &'static str = "Widget";
        const DOMAIN: Domain = Domain::Api;

        fn path(&self) -> String {
            build_path(
                "/2010-04-01/Accounts/{AccountSid}/Widgets.json",
                &[("AccountSid", self.account_sid.as_str())],
            )
        }
    }

    impl Reader for WidgetReader {
        type Record = Widget;
        const RECORDS_KEY: &'static str = "widgets";

        fn page_size(&self) -> Option<u32> {
            self.page_size
        }

        fn filter_params(&self) -> Params {
            let mut params = Params::new();
            params.push_opt("Color", self.color.as_deref());
            params
        }
    }

    struct WidgetDeleter {
        sid: String,
    }

    impl Endpoint for WidgetDeleter {
        const RESOURCE: &'static str = "Widget";
        const DOMAIN: Domain = Domain::Trunking;

        fn path(&self) -> String {
            build_path("/v1/Widgets/{Sid}", &[("Sid", self.sid.as_str())])
        }
    }

    impl Deleter for WidgetDeleter {}

    #[test]
    fn test_first_page_without_filters_sends_only_page_size() {
        let reader = WidgetReader {
            account_sid: "AC1".to_string(),
            color: None,
            page_size: None,
        };
        let request = reader.first_page_request(50);

        let query: Vec<_> = request.query.iter().collect();
        assert_eq!(query, vec![("PageSize", "50")]);
        assert_eq!(request.method, HttpMethod::Get);
    }

    #[test]
    fn test_first_page_appends_page_size_after_filters() {
        let reader = WidgetReader {
            account_sid: "AC1".to_string(),
            color: Some("red".to_string()),
            page_size: Some(5),
        };
        let request = reader.first_page_request(50);

        let query: Vec<_> = request.query.iter().collect();
        assert_eq!(query, vec![("Color", "red"), ("PageSize", "5")]);
    }

    #[test]
    fn test_out_of_range_page_size_is_clamped() {
        let widgets = |page_size| WidgetReader {
            account_sid: "AC1".to_string(),
            color: None,
            page_size: Some(page_size),
        };

        assert_eq!(widgets(0).first_page_request(50).query.get("PageSize"), Some("1"));
        assert_eq!(widgets(5000).first_page_request(50).query.get("PageSize"), Some("1000"));
        assert_eq!(widgets(1000).first_page_request(50).query.get("PageSize"), Some("1000"));
    }

    #[test]
    fn test_next_page_request_ignores_reader_state() {
        let uri = "/2010-04-01/Accounts/AC1/Widgets.json?Color=blue&PageSize=2&Page=1";
        let request = WidgetReader::next_page_request(uri);

        assert_eq!(
            request.target,
            RequestTarget::Uri {
                domain: Domain::Api,
                uri: uri.to_string(),
            }
        );
        assert!(request.query.is_empty());
    }

    #[test]
    fn test_deleter_builds_delete_request() {
        let request = WidgetDeleter {
            sid: "WD1".to_string(),
        }
        .build_request();

        assert_eq!(request.method, HttpMethod::Delete);
        assert_eq!(request.target.to_string(), "/v1/Widgets/WD1");
        assert_eq!(request.target.domain(), Domain::Trunking);
        assert!(request.form.is_empty());
    }
}
