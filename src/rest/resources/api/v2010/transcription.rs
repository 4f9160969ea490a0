//! Transcription resource implementation.
//!
//! Transcriptions are text renderings of call recordings. They are listed
//! account-wide here, and per recording through
//! [`RecordingTranscriptionReader`](super::RecordingTranscriptionReader).

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::Domain;
use crate::rest::{build_path, Deleter, Endpoint, Fetcher, Reader};

const LIST_PATH: &str = "/2010-04-01/Accounts/{AccountSid}/Transcriptions.json";
const INSTANCE_PATH: &str = "/2010-04-01/Accounts/{AccountSid}/Transcriptions/{Sid}.json";

/// The processing status of a transcription.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TranscriptionStatus {
    /// Transcription is still running.
    InProgress,
    /// Text is available.
    Completed,
    /// Transcription failed.
    Failed,
    /// A status this client does not know about.
    #[default]
    #[serde(other)]
    Unknown,
}

impl TranscriptionStatus {
    /// Returns the wire value.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
            Self::Failed => "failed",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for TranscriptionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A transcription of a recording.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Transcription {
    /// The unique identifier of the transcription.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sid: Option<String>,

    /// The SID of the account that owns the transcription.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_sid: Option<String>,

    /// The API version used to process the transcription.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,

    /// When the transcription was created.
    #[serde(
        default,
        with = "crate::rest::formats::rfc2822",
        skip_serializing_if = "Option::is_none"
    )]
    pub date_created: Option<DateTime<Utc>>,

    /// When the transcription was last updated.
    #[serde(
        default,
        with = "crate::rest::formats::rfc2822",
        skip_serializing_if = "Option::is_none"
    )]
    pub date_updated: Option<DateTime<Utc>>,

    /// Length of the transcribed audio in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,

    /// The charge, as a signed decimal.
    #[serde(
        default,
        with = "crate::rest::formats::decimal",
        skip_serializing_if = "Option::is_none"
    )]
    pub price: Option<f64>,

    /// The ISO 4217 currency of `price`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_unit: Option<String>,

    /// The recording this transcription was made from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recording_sid: Option<String>,

    /// The processing status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TranscriptionStatus>,

    /// The transcribed text, once completed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transcription_text: Option<String>,

    /// Transcription engine type (e.g., "fast").
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    /// The URI of the transcription, relative to the API host.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
}

impl Transcription {
    /// Lists the transcriptions of an account.
    #[must_use]
    pub fn read(account_sid: impl Into<String>) -> TranscriptionReader {
        TranscriptionReader::new(account_sid)
    }

    /// Fetches one transcription.
    #[must_use]
    pub fn fetch(account_sid: impl Into<String>, sid: impl Into<String>) -> TranscriptionFetcher {
        TranscriptionFetcher::new(account_sid, sid)
    }

    /// Deletes one transcription.
    #[must_use]
    pub fn delete(account_sid: impl Into<String>, sid: impl Into<String>) -> TranscriptionDeleter {
        TranscriptionDeleter::new(account_sid, sid)
    }
}

/// Lists the transcriptions of an account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptionReader {
    account_sid: String,
    page_size: Option<u32>,
}

impl TranscriptionReader {
    #[must_use]
    pub fn new(account_sid: impl Into<String>) -> Self {
        Self {
            account_sid: account_sid.into(),
            page_size: None,
        }
    }

    /// Sets the number of records requested per page.
    #[must_use]
    pub const fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }
}

impl Endpoint for TranscriptionReader {
    const RESOURCE: &'static str = "Transcription";
    const DOMAIN: Domain = Domain::Api;

    fn path(&self) -> String {
        build_path(LIST_PATH, &[("AccountSid", self.account_sid.as_str())])
    }
}

impl Reader for TranscriptionReader {
    type Record = Transcription;
    const RECORDS_KEY: &'static str = "transcriptions";

    fn page_size(&self) -> Option<u32> {
        self.page_size
    }
}

/// Fetches one transcription.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptionFetcher {
    account_sid: String,
    sid: String,
}

impl TranscriptionFetcher {
    #[must_use]
    pub fn new(account_sid: impl Into<String>, sid: impl Into<String>) -> Self {
        Self {
            account_sid: account_sid.into(),
            sid: sid.into(),
        }
    }
}

impl Endpoint for TranscriptionFetcher {
    const RESOURCE: &'static str = "Transcription";
    const DOMAIN: Domain = Domain::Api;

    fn path(&self) -> String {
        build_path(
            INSTANCE_PATH,
            &[("AccountSid", self.account_sid.as_str()), ("Sid", self.sid.as_str())],
        )
    }
}

impl Fetcher for TranscriptionFetcher {
    type Record = Transcription;
}

/// Deletes one transcription.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptionDeleter {
    account_sid: String,
    sid: String,
}

impl TranscriptionDeleter {
    #[must_use]
    pub fn new(account_sid: impl Into<String>, sid: impl Into<String>) -> Self {
        Self {
            account_sid: account_sid.into(),
            sid: sid.into(),
        }
    }
}

impl Endpoint for TranscriptionDeleter {
    const RESOURCE: &'static str = "Transcription";
    const DOMAIN: Domain = Domain::Api;

    fn path(&self) -> String {
        build_path(
            INSTANCE_PATH,
            &[("AccountSid", self.account_sid.as_str()), ("Sid", self.sid.as_str())],
        )
    }
}

impl Deleter for TranscriptionDeleter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transcription_deserializes_status_and_type() {
        let json = r#"{
            "account_sid": "ACaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa",
            "api_version": "2008-08-01",
            "date_created": "Sun, 13 Feb 2011 02:12:08 +0000",
            "date_updated": "Sun, 13 Feb 2011 02:30:01 +0000",
            "duration": "1",
            "price": "-0.05000",
            "price_unit": "USD",
            "recording_sid": "REaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa",
            "sid": "TRaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa",
            "status": "in-progress",
            "transcription_text": null,
            "type": "fast",
            "uri": "/2010-04-01/Accounts/ACaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa/Transcriptions/TRaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa.json"
        }"#;

        let transcription: Transcription = serde_json::from_str(json).unwrap();

        assert_eq!(transcription.status, Some(TranscriptionStatus::InProgress));
        assert_eq!(transcription.kind.as_deref(), Some("fast"));
        assert_eq!(transcription.price, Some(-0.05));
        assert!(transcription.transcription_text.is_none());
    }

    #[test]
    fn test_unknown_status_does_not_fail() {
        let transcription: Transcription =
            serde_json::from_str(r#"{"status":"absent"}"#).unwrap();
        assert_eq!(transcription.status, Some(TranscriptionStatus::Unknown));
    }

    #[test]
    fn test_paths() {
        assert_eq!(
            Transcription::read("AC1").path(),
            "/2010-04-01/Accounts/AC1/Transcriptions.json"
        );
        assert_eq!(
            Transcription::fetch("AC1", "TR1").path(),
            "/2010-04-01/Accounts/AC1/Transcriptions/TR1.json"
        );
    }
}
