//! HTTP request types for the Twilio API client.
//!
//! This module provides the [`HttpRequest`] type and its builder, the
//! ordered [`Params`] multimap used for query strings and form bodies, and
//! the [`RequestTarget`] a request is addressed to.

use std::fmt;

use crate::config::Domain;

/// HTTP methods supported by the Twilio API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// HTTP GET method for fetching and listing resources.
    Get,
    /// HTTP POST method for creating and updating resources.
    Post,
    /// HTTP PUT method.
    Put,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl HttpMethod {
    /// Returns the method name in upper case.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An ordered list of name/value parameters.
///
/// Keys may repeat: multi-valued parameters such as `Permissions` or `Issue`
/// are sent once per value, in insertion order.
///
/// # Example
///
/// ```rust
/// use twilio_api::clients::Params;
///
/// let mut params = Params::new();
/// params.push_opt("FriendlyName", Some("main"));
/// params.push_opt::<u32>("Minutes", None);
/// params.push_all("Issue", ["dropped-call", "one-way-audio"]);
///
/// assert_eq!(params.len(), 3);
/// assert!(!params.contains_key("Minutes"));
/// assert_eq!(params.get_all("Issue"), vec!["dropped-call", "one-way-audio"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Params(Vec<(String, String)>);

impl Params {
    /// Creates an empty parameter list.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Appends one parameter.
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.push((key.into(), value.into()));
    }

    /// Appends a parameter only if a value is present.
    ///
    /// Unset values are omitted entirely, never sent as empty strings.
    pub fn push_opt<V: fmt::Display>(&mut self, key: &str, value: Option<V>) {
        if let Some(value) = value {
            self.push(key, value.to_string());
        }
    }

    /// Appends one entry per value under the same key.
    pub fn push_all<I, V>(&mut self, key: &str, values: I)
    where
        I: IntoIterator<Item = V>,
        V: fmt::Display,
    {
        for value in values {
            self.push(key, value.to_string());
        }
    }

    /// Returns the first value for a key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns every value for a key, in insertion order.
    #[must_use]
    pub fn get_all(&self, key: &str) -> Vec<&str> {
        self.0
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    /// Returns `true` if at least one entry has the key.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.iter().any(|(k, _)| k == key)
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns the entries as a slice, suitable for URL encoding.
    #[must_use]
    pub fn as_slice(&self) -> &[(String, String)] {
        &self.0
    }
}

/// Where a request is sent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RequestTarget {
    /// A path under the base URL of a domain.
    Path {
        /// The domain whose base URL the path is joined to.
        domain: Domain,
        /// The resource path, starting with `/`.
        path: String,
    },
    /// A continuation URI returned by the server, used verbatim.
    ///
    /// Absolute URIs are sent as-is; relative ones are resolved against the
    /// domain's base URL.
    Uri {
        /// The domain a relative URI is resolved against.
        domain: Domain,
        /// The URI exactly as the server returned it.
        uri: String,
    },
}

impl RequestTarget {
    /// Returns the domain of this target.
    #[must_use]
    pub const fn domain(&self) -> Domain {
        match self {
            Self::Path { domain, .. } | Self::Uri { domain, .. } => *domain,
        }
    }
}

impl fmt::Display for RequestTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Path { path, .. } => f.write_str(path),
            Self::Uri { uri, .. } => f.write_str(uri),
        }
    }
}

/// An HTTP request to be sent to the Twilio API.
///
/// Built once per call and never modified afterwards. Use
/// [`HttpRequest::builder`] for resource paths and
/// [`HttpRequest::continuation`] for next-page URIs.
///
/// # Example
///
/// ```rust
/// use twilio_api::clients::{HttpMethod, HttpRequest};
/// use twilio_api::Domain;
///
/// let request = HttpRequest::builder(HttpMethod::Post, Domain::Taskrouter, "/v1/Workspaces/WS1")
///     .form_param("FriendlyName", "support")
///     .build();
///
/// assert_eq!(request.method, HttpMethod::Post);
/// assert_eq!(request.form.get("FriendlyName"), Some("support"));
/// assert!(request.query.is_empty());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub method: HttpMethod,
    /// Where the request is sent.
    pub target: RequestTarget,
    /// Query parameters appended to the URL.
    pub query: Params,
    /// Form-encoded body parameters.
    pub form: Params,
}

impl HttpRequest {
    /// Creates a new builder for a request against a resource path.
    #[must_use]
    pub fn builder(method: HttpMethod, domain: Domain, path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, domain, path)
    }

    /// Creates a GET request for a server-supplied continuation URI.
    ///
    /// The URI is not rewritten and no parameters are attached.
    #[must_use]
    pub fn continuation(domain: Domain, uri: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Get,
            target: RequestTarget::Uri {
                domain,
                uri: uri.into(),
            },
            query: Params::new(),
            form: Params::new(),
        }
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    method: HttpMethod,
    domain: Domain,
    path: String,
    query: Params,
    form: Params,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, domain: Domain, path: impl Into<String>) -> Self {
        Self {
            method,
            domain,
            path: path.into(),
            query: Params::new(),
            form: Params::new(),
        }
    }

    /// Replaces all query parameters.
    #[must_use]
    pub fn query(mut self, query: Params) -> Self {
        self.query = query;
        self
    }

    /// Adds a single query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push(key, value);
        self
    }

    /// Replaces all form parameters.
    #[must_use]
    pub fn form(mut self, form: Params) -> Self {
        self.form = form;
        self
    }

    /// Adds a single form parameter.
    #[must_use]
    pub fn form_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.form.push(key, value);
        self
    }

    /// Builds the request.
    #[must_use]
    pub fn build(self) -> HttpRequest {
        HttpRequest {
            method: self.method,
            target: RequestTarget::Path {
                domain: self.domain,
                path: self.path,
            },
            query: self.query,
            form: self.form,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_method_display_is_uppercase() {
        assert_eq!(HttpMethod::Get.to_string(), "GET");
        assert_eq!(HttpMethod::Delete.as_str(), "DELETE");
    }

    #[test]
    fn test_params_preserve_insertion_order_and_duplicates() {
        let mut params = Params::new();
        params.push("B", "1");
        params.push("A", "2");
        params.push("B", "3");

        let entries: Vec<_> = params.iter().collect();
        assert_eq!(entries, vec![("B", "1"), ("A", "2"), ("B", "3")]);
        assert_eq!(params.get("B"), Some("1"));
        assert_eq!(params.get_all("B"), vec!["1", "3"]);
    }

    #[test]
    fn test_push_opt_skips_unset_values() {
        let mut params = Params::new();
        params.push_opt::<String>("FriendlyName", None);
        params.push_opt("Beta", Some(false));

        assert_eq!(params.len(), 1);
        assert!(!params.contains_key("FriendlyName"));
        assert_eq!(params.get("Beta"), Some("false"));
    }

    #[test]
    fn test_builder_sets_path_target() {
        let request = HttpRequest::builder(HttpMethod::Get, Domain::Api, "/2010-04-01/Accounts/AC1/Recordings.json")
            .query_param("PageSize", "50")
            .build();

        assert_eq!(
            request.target,
            RequestTarget::Path {
                domain: Domain::Api,
                path: "/2010-04-01/Accounts/AC1/Recordings.json".to_string(),
            }
        );
        assert_eq!(request.query.get("PageSize"), Some("50"));
        assert!(request.form.is_empty());
    }

    #[test]
    fn test_continuation_keeps_uri_verbatim() {
        let uri = "/2010-04-01/Accounts/AC1/Recordings.json?PageSize=2&Page=1&PageToken=PAx";
        let request = HttpRequest::continuation(Domain::Api, uri);

        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.target.to_string(), uri);
        assert_eq!(request.target.domain(), Domain::Api);
        assert!(request.query.is_empty());
    }
}
