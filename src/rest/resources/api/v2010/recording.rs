//! Recording resource implementation.
//!
//! This module provides the [`Recording`] resource: audio recordings of
//! calls made or received by an account.
//!
//! # Operations
//!
//! - [`Recording::read`] - list recordings, optionally filtered by creation date
//! - [`Recording::fetch`] - fetch a single recording
//! - [`Recording::delete`] - delete a recording
//!
//! # Example
//!
//! ```rust,ignore
//! use twilio_api::rest::resources::api::v2010::Recording;
//! use twilio_api::rest::{Fetcher, Reader};
//!
//! let mut recordings = Recording::read("ACaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa")
//!     .by_date_created("2016-01-15")
//!     .page_size(20)
//!     .execute(&client)
//!     .await?;
//!
//! while let Some(recording) = recordings.next().await {
//!     let recording = recording?;
//!     println!("{:?} lasted {:?}s", recording.sid, recording.duration);
//! }
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::Params;
use crate::config::Domain;
use crate::rest::resources::api::v2010::RecordingTranscriptionReader;
use crate::rest::{build_path, Deleter, Endpoint, Fetcher, Reader};

const LIST_PATH: &str = "/2010-04-01/Accounts/{AccountSid}/Recordings.json";
const INSTANCE_PATH: &str = "/2010-04-01/Accounts/{AccountSid}/Recordings/{Sid}.json";

/// A call recording.
///
/// All fields are read-only and optional; the server may omit any of them.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Recording {
    /// The unique identifier of the recording (`RE...`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sid: Option<String>,

    /// The account that owns the recording.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_sid: Option<String>,

    /// The call the recording was made on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub call_sid: Option<String>,

    /// The API version used to create the recording.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,

    /// Length of the recording in seconds, as sent by the server.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,

    /// What the recording cost.
    #[serde(
        default,
        with = "crate::rest::formats::decimal",
        skip_serializing_if = "Option::is_none"
    )]
    pub price: Option<f64>,

    /// Currency of `price` (e.g., "USD").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_unit: Option<String>,

    /// When the recording was created.
    #[serde(
        default,
        with = "crate::rest::formats::rfc2822",
        skip_serializing_if = "Option::is_none"
    )]
    pub date_created: Option<DateTime<Utc>>,

    /// When the recording was last updated.
    #[serde(
        default,
        with = "crate::rest::formats::rfc2822",
        skip_serializing_if = "Option::is_none"
    )]
    pub date_updated: Option<DateTime<Utc>>,

    /// The URI of this resource, relative to the API host.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
}

impl Recording {
    /// Lists the recordings of an account.
    #[must_use]
    pub fn read(account_sid: impl Into<String>) -> RecordingReader {
        RecordingReader::new(account_sid)
    }

    /// Fetches one recording.
    #[must_use]
    pub fn fetch(account_sid: impl Into<String>, sid: impl Into<String>) -> RecordingFetcher {
        RecordingFetcher::new(account_sid, sid)
    }

    /// Deletes one recording.
    #[must_use]
    pub fn delete(account_sid: impl Into<String>, sid: impl Into<String>) -> RecordingDeleter {
        RecordingDeleter::new(account_sid, sid)
    }

    /// Lists the transcriptions of this recording.
    ///
    /// Returns `None` if the record lacks its account or recording SID.
    #[must_use]
    pub fn transcriptions(&self) -> Option<RecordingTranscriptionReader> {
        let account_sid = self.account_sid.as_deref()?;
        let sid = self.sid.as_deref()?;
        Some(RecordingTranscriptionReader::new(account_sid, sid))
    }
}

/// Lists recordings, newest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordingReader {
    account_sid: String,
    date_created: Option<String>,
    page_size: Option<u32>,
}

impl RecordingReader {
    /// Creates a reader for the recordings of an account.
    #[must_use]
    pub fn new(account_sid: impl Into<String>) -> Self {
        Self {
            account_sid: account_sid.into(),
            date_created: None,
            page_size: None,
        }
    }

    /// Only show recordings created on the given date (`YYYY-MM-DD`).
    ///
    /// The server also accepts inequalities through the `DateCreated<` and
    /// `DateCreated>` forms of the filter.
    #[must_use]
    pub fn by_date_created(mut self, date_created: impl Into<String>) -> Self {
        self.date_created = Some(date_created.into());
        self
    }

    /// Sets the number of records requested per page.
    #[must_use]
    pub const fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }
}

impl Endpoint for RecordingReader {
    const RESOURCE: &'static str = "Recording";
    const DOMAIN: Domain = Domain::Api;

    fn path(&self) -> String {
        build_path(LIST_PATH, &[("AccountSid", self.account_sid.as_str())])
    }
}

impl Reader for RecordingReader {
    type Record = Recording;
    const RECORDS_KEY: &'static str = "recordings";

    fn page_size(&self) -> Option<u32> {
        self.page_size
    }

    fn filter_params(&self) -> Params {
        let mut params = Params::new();
        params.push_opt("DateCreated", self.date_created.as_deref());
        params
    }
}

/// Fetches one recording.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordingFetcher {
    account_sid: String,
    sid: String,
}

impl RecordingFetcher {
    /// Creates a fetcher for one recording.
    #[must_use]
    pub fn new(account_sid: impl Into<String>, sid: impl Into<String>) -> Self {
        Self {
            account_sid: account_sid.into(),
            sid: sid.into(),
        }
    }
}

impl Endpoint for RecordingFetcher {
    const RESOURCE: &'static str = "Recording";
    const DOMAIN: Domain = Domain::Api;

    fn path(&self) -> String {
        build_path(
            INSTANCE_PATH,
            &[("AccountSid", self.account_sid.as_str()), ("Sid", self.sid.as_str())],
        )
    }
}

impl Fetcher for RecordingFetcher {
    type Record = Recording;
}

/// Deletes one recording.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordingDeleter {
    account_sid: String,
    sid: String,
}

impl RecordingDeleter {
    /// Creates a deleter for one recording.
    #[must_use]
    pub fn new(account_sid: impl Into<String>, sid: impl Into<String>) -> Self {
        Self {
            account_sid: account_sid.into(),
            sid: sid.into(),
        }
    }
}

impl Endpoint for RecordingDeleter {
    const RESOURCE: &'static str = "Recording";
    const DOMAIN: Domain = Domain::Api;

    fn path(&self) -> String {
        build_path(
            INSTANCE_PATH,
            &[("AccountSid", self.account_sid.as_str()), ("Sid", self.sid.as_str())],
        )
    }
}

impl Deleter for RecordingDeleter {}
