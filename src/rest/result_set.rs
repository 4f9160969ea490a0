//! Lazy, forward-only iteration over paginated results.
//!
//! A [`ResultSet`] holds the records of the current page, a cursor into
//! them, and the pending continuation URI. When the current page runs out it
//! fetches the next one on demand; nothing is prefetched.

use std::fmt;

use futures::stream::{self, Stream};
use serde::de::DeserializeOwned;

use crate::clients::{HttpClient, HttpRequest, RestClient, Transport};
use crate::rest::{ApiError, OperationSpec, Page};

/// A lazy sequence of records spanning server-side pages.
///
/// Produced by [`Reader::execute`](crate::rest::Reader::execute) after the
/// first page has been fetched. Records are yielded in server order. When a
/// page is exhausted and was not terminal, the next page is requested from
/// the continuation URI exactly as returned. A failed page fetch is yielded
/// as `Err` and ends the sequence.
///
/// Not restartable: to iterate again, execute a new reader.
///
/// # Example
///
/// ```rust,ignore
/// let mut countries = Country::read().page_size(50).execute(&client).await?;
///
/// while let Some(country) = countries.next().await {
///     let country = country?;
///     println!("{:?}", country.iso_country);
/// }
/// ```
pub struct ResultSet<'c, T, C = HttpClient> {
    client: &'c RestClient<C>,
    spec: OperationSpec,
    records_key: &'static str,
    next_page_request: fn(&str) -> HttpRequest,
    current: std::vec::IntoIter<T>,
    next_page_uri: Option<String>,
    page_size: Option<u32>,
    pages_fetched: usize,
}

impl<'c, T, C> ResultSet<'c, T, C>
where
    T: DeserializeOwned,
    C: Transport,
{
    pub(crate) fn new(
        client: &'c RestClient<C>,
        spec: OperationSpec,
        records_key: &'static str,
        next_page_request: fn(&str) -> HttpRequest,
        first_page: Page<T>,
    ) -> Self {
        let page_size = first_page.page_size();
        let (records, next_page_uri) = first_page.into_parts();

        Self {
            client,
            spec,
            records_key,
            next_page_request,
            current: records.into_iter(),
            next_page_uri,
            page_size,
            pages_fetched: 1,
        }
    }

    /// Advances to the next record, fetching the next page if needed.
    ///
    /// Returns `None` once the terminal page is exhausted, or after a page
    /// fetch has failed.
    pub async fn next(&mut self) -> Option<Result<T, ApiError>> {
        loop {
            if let Some(record) = self.current.next() {
                return Some(Ok(record));
            }

            let uri = self.next_page_uri.take()?;
            let request = (self.next_page_request)(&uri);

            match self
                .client
                .fetch_page::<T>(&self.spec, self.records_key, request)
                .await
            {
                Ok(page) => {
                    self.pages_fetched += 1;
                    if page.page_size().is_some() {
                        self.page_size = page.page_size();
                    }
                    let (records, next_page_uri) = page.into_parts();
                    self.current = records.into_iter();
                    self.next_page_uri = next_page_uri;
                }
                Err(error) => return Some(Err(error)),
            }
        }
    }

    /// Collects every remaining record, stopping at the first error.
    ///
    /// # Errors
    ///
    /// Returns the first page-fetch error encountered.
    pub async fn collect_all(mut self) -> Result<Vec<T>, ApiError> {
        let mut records = Vec::new();
        while let Some(record) = self.next().await {
            records.push(record?);
        }
        Ok(records)
    }

    /// Converts the result set into a [`Stream`] of records.
    pub fn into_stream(self) -> impl Stream<Item = Result<T, ApiError>> + 'c
    where
        T: 'c,
        C: 'c,
    {
        stream::unfold(self, |mut set| async move {
            set.next().await.map(|item| (item, set))
        })
    }
}

impl<T, C> ResultSet<'_, T, C> {
    /// Returns the continuation URI of the next page, if one is pending.
    #[must_use]
    pub fn next_page_uri(&self) -> Option<&str> {
        self.next_page_uri.as_deref()
    }

    /// Returns the number of pages fetched so far, including the first.
    #[must_use]
    pub const fn pages_fetched(&self) -> usize {
        self.pages_fetched
    }

    /// Returns the page size most recently reported by the server.
    #[must_use]
    pub const fn page_size(&self) -> Option<u32> {
        self.page_size
    }

    /// Returns the number of records left on the current page.
    #[must_use]
    pub fn buffered(&self) -> usize {
        self.current.len()
    }
}

impl<T, C> fmt::Debug for ResultSet<'_, T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResultSet")
            .field("spec", &self.spec)
            .field("records_key", &self.records_key)
            .field("buffered", &self.current.len())
            .field("next_page_uri", &self.next_page_uri)
            .field("pages_fetched", &self.pages_fetched)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::{HttpResponse, TransportError};
    use crate::config::{AccountSid, AuthToken, Domain, TwilioConfig};
    use crate::rest::OperationKind;
    use std::collections::{HashMap, VecDeque};
    use std::sync::Mutex;

    /// Replays queued bodies in order; `None` simulates a refused connection.
    struct QueuedTransport {
        bodies: Mutex<VecDeque<Option<&'static str>>>,
        targets: Mutex<Vec<String>>,
    }

    impl Transport for QueuedTransport {
        async fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
            self.targets.lock().unwrap().push(request.target.to_string());
            match self.bodies.lock().unwrap().pop_front().flatten() {
                Some(body) => Ok(HttpResponse::new(200, HashMap::new(), body)),
                None => Err(TransportError::InvalidUrl {
                    url: "refused".to_string(),
                }),
            }
        }
    }

    #[derive(Debug, serde::Deserialize, PartialEq)]
    struct Item {
        sid: String,
    }

    fn client(bodies: Vec<Option<&'static str>>) -> RestClient<QueuedTransport> {
        let config = TwilioConfig::builder()
            .account_sid(AccountSid::new("ACaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa").unwrap())
            .auth_token(AuthToken::new("token").unwrap())
            .build()
            .unwrap();
        RestClient::with_transport(
            config,
            QueuedTransport {
                bodies: Mutex::new(bodies.into()),
                targets: Mutex::new(Vec::new()),
            },
        )
    }

    fn result_set<'c>(
        client: &'c RestClient<QueuedTransport>,
        first_page: &str,
    ) -> ResultSet<'c, Item, QueuedTransport> {
        ResultSet::new(
            client,
            OperationSpec::new("Item", OperationKind::Read),
            "items",
            |uri| HttpRequest::continuation(Domain::Api, uri),
            Page::from_json("items", first_page).unwrap(),
        )
    }

    #[tokio::test]
    async fn test_terminal_first_page_never_touches_transport() {
        let client = client(vec![]);
        let mut set = result_set(&client, r#"{"items":[{"sid":"IT1"}],"page_size":1}"#);

        assert_eq!(set.buffered(), 1);
        assert_eq!(set.page_size(), Some(1));
        assert_eq!(set.next().await.unwrap().unwrap().sid, "IT1");
        assert!(set.next().await.is_none());
        assert_eq!(set.pages_fetched(), 1);
        assert!(client.transport().targets.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_next_follows_continuation_and_skips_empty_pages() {
        let client = client(vec![
            Some(r#"{"items":[],"next_page_uri":"/p2"}"#),
            Some(r#"{"items":[{"sid":"IT2"},{"sid":"IT3"}],"page_size":2}"#),
        ]);
        let mut set = result_set(&client, r#"{"items":[{"sid":"IT1"}],"next_page_uri":"/p1"}"#);
        assert_eq!(set.page_size(), None);

        assert_eq!(set.next().await.unwrap().unwrap().sid, "IT1");
        assert_eq!(set.next().await.unwrap().unwrap().sid, "IT2");
        assert_eq!(set.buffered(), 1);
        assert_eq!(set.pages_fetched(), 3);
        assert_eq!(set.page_size(), Some(2));
        assert_eq!(set.next_page_uri(), None);

        assert_eq!(set.next().await.unwrap().unwrap().sid, "IT3");
        assert!(set.next().await.is_none());
        assert_eq!(*client.transport().targets.lock().unwrap(), vec!["/p1", "/p2"]);
    }

    #[tokio::test]
    async fn test_failed_page_is_yielded_once_then_set_ends() {
        let client = client(vec![None]);
        let mut set = result_set(&client, r#"{"items":[],"next_page_uri":"/p1"}"#);

        let error = set.next().await.unwrap().unwrap_err();
        assert!(error.is_connection());
        assert!(set.next().await.is_none());
        assert_eq!(set.pages_fetched(), 1);
        assert_eq!(client.transport().targets.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_debug_reports_cursor_state() {
        let client = client(vec![]);
        let set = result_set(&client, r#"{"items":[{"sid":"IT1"}],"next_page_uri":"/p1"}"#);

        let debug = format!("{set:?}");
        assert!(debug.contains("buffered: 1"));
        assert!(debug.contains("/p1"));
    }
}
