//! One page of list results.
//!
//! List responses carry their records under a container key chosen per
//! resource family, alongside continuation metadata. Two envelopes exist:
//!
//! ```json
//! { "recordings": [ ... ], "next_page_uri": "/2010-04-01/...&Page=1", "page_size": 50 }
//! ```
//!
//! ```json
//! { "task_queues_statistics": [ ... ], "meta": { "next_page_url": "https://...", "page_size": 50 } }
//! ```

use serde::de::{DeserializeOwned, Error as _};
use serde_json::Value;

/// One server-delivered batch of records plus continuation metadata.
///
/// A page without a next-page URI is terminal. Pages are immutable once
/// decoded.
///
/// # Example
///
/// ```rust
/// use twilio_api::rest::Page;
///
/// let body = r#"{"items":[1,2,3],"next_page_uri":null,"page_size":3}"#;
/// let page: Page<u32> = Page::from_json("items", body).unwrap();
///
/// assert_eq!(page.records(), &[1, 2, 3]);
/// assert!(page.is_terminal());
/// assert_eq!(page.page_size(), Some(3));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Page<T> {
    records: Vec<T>,
    key: String,
    next_page_uri: Option<String>,
    page_size: Option<u32>,
}

impl<T: DeserializeOwned> Page<T> {
    /// Decodes a page from a list response body.
    ///
    /// Each element under `key` is decoded independently; one malformed
    /// element fails the whole page.
    ///
    /// # Errors
    ///
    /// Returns a [`serde_json::Error`] if the body is not JSON, `key` is
    /// missing or not an array, or any record fails to decode.
    pub fn from_json(key: &str, body: &str) -> Result<Self, serde_json::Error> {
        let mut value: Value = serde_json::from_str(body)?;

        let items = match value.get_mut(key).map(Value::take) {
            Some(Value::Array(items)) => items,
            Some(_) => {
                return Err(serde_json::Error::custom(format!(
                    "field `{key}` is not an array"
                )))
            }
            None => return Err(serde_json::Error::custom(format!("missing field `{key}`"))),
        };

        let records = items
            .into_iter()
            .map(serde_json::from_value)
            .collect::<Result<Vec<T>, _>>()?;

        let next_page_uri = non_empty_str(value.get("next_page_uri"))
            .or_else(|| non_empty_str(value.pointer("/meta/next_page_url")));

        let page_size = value
            .get("page_size")
            .or_else(|| value.pointer("/meta/page_size"))
            .and_then(Value::as_u64)
            .and_then(|n| u32::try_from(n).ok());

        Ok(Self {
            records,
            key: key.to_string(),
            next_page_uri,
            page_size,
        })
    }
}

impl<T> Page<T> {
    /// Returns the records on this page, in server order.
    #[must_use]
    pub fn records(&self) -> &[T] {
        &self.records
    }

    /// Consumes the page and returns its records.
    #[must_use]
    pub fn into_records(self) -> Vec<T> {
        self.records
    }

    /// Consumes the page and returns its records and next-page URI.
    #[must_use]
    pub fn into_parts(self) -> (Vec<T>, Option<String>) {
        (self.records, self.next_page_uri)
    }

    /// Returns the number of records on this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if this page has no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the container key the records were read from.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the next-page URI exactly as the server sent it.
    #[must_use]
    pub fn next_page_uri(&self) -> Option<&str> {
        self.next_page_uri.as_deref()
    }

    /// Returns `true` if another page follows this one.
    #[must_use]
    pub const fn has_next_page(&self) -> bool {
        self.next_page_uri.is_some()
    }

    /// Returns `true` if no page follows this one.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        self.next_page_uri.is_none()
    }

    /// Returns the page size reported by the server, if any.
    #[must_use]
    pub const fn page_size(&self) -> Option<u32> {
        self.page_size
    }
}

fn non_empty_str(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
}
