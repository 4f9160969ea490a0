//! Transcriptions scoped to one recording.
//!
//! Same record as [`Transcription`], addressed under
//! `/Recordings/{RecordingSid}/Transcriptions`.

use crate::config::Domain;
use crate::rest::resources::api::v2010::Transcription;
use crate::rest::{build_path, Deleter, Endpoint, Fetcher, Reader};

const LIST_PATH: &str =
    "/2010-04-01/Accounts/{AccountSid}/Recordings/{RecordingSid}/Transcriptions.json";
const INSTANCE_PATH: &str =
    "/2010-04-01/Accounts/{AccountSid}/Recordings/{RecordingSid}/Transcriptions/{Sid}.json";

/// Entry points for transcriptions of a single recording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordingTranscription;

impl RecordingTranscription {
    /// Lists the transcriptions of a recording.
    #[must_use]
    pub fn read(
        account_sid: impl Into<String>,
        recording_sid: impl Into<String>,
    ) -> RecordingTranscriptionReader {
        RecordingTranscriptionReader::new(account_sid, recording_sid)
    }

    /// Fetches one transcription of a recording.
    #[must_use]
    pub fn fetch(
        account_sid: impl Into<String>,
        recording_sid: impl Into<String>,
        sid: impl Into<String>,
    ) -> RecordingTranscriptionFetcher {
        RecordingTranscriptionFetcher::new(account_sid, recording_sid, sid)
    }

    /// Deletes one transcription of a recording.
    #[must_use]
    pub fn delete(
        account_sid: impl Into<String>,
        recording_sid: impl Into<String>,
        sid: impl Into<String>,
    ) -> RecordingTranscriptionDeleter {
        RecordingTranscriptionDeleter::new(account_sid, recording_sid, sid)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordingTranscriptionReader {
    account_sid: String,
    recording_sid: String,
    page_size: Option<u32>,
}

impl RecordingTranscriptionReader {
    #[must_use]
    pub fn new(account_sid: impl Into<String>, recording_sid: impl Into<String>) -> Self {
        Self {
            account_sid: account_sid.into(),
            recording_sid: recording_sid.into(),
            page_size: None,
        }
    }

    #[must_use]
    pub const fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }
}

impl Endpoint for RecordingTranscriptionReader {
    const RESOURCE: &'static str = "Transcription";
    const DOMAIN: Domain = Domain::Api;

    fn path(&self) -> String {
        build_path(
            LIST_PATH,
            &[
                ("AccountSid", self.account_sid.as_str()),
                ("RecordingSid", self.recording_sid.as_str()),
            ],
        )
    }
}

impl Reader for RecordingTranscriptionReader {
    type Record = Transcription;
    const RECORDS_KEY: &'static str = "transcriptions";

    fn page_size(&self) -> Option<u32> {
        self.page_size
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordingTranscriptionFetcher {
    account_sid: String,
    recording_sid: String,
    sid: String,
}

impl RecordingTranscriptionFetcher {
    #[must_use]
    pub fn new(
        account_sid: impl Into<String>,
        recording_sid: impl Into<String>,
        sid: impl Into<String>,
    ) -> Self {
        Self {
            account_sid: account_sid.into(),
            recording_sid: recording_sid.into(),
            sid: sid.into(),
        }
    }

    fn instance_path(&self) -> String {
        build_path(
            INSTANCE_PATH,
            &[
                ("AccountSid", self.account_sid.as_str()),
                ("RecordingSid", self.recording_sid.as_str()),
                ("Sid", self.sid.as_str()),
            ],
        )
    }
}

impl Endpoint for RecordingTranscriptionFetcher {
    const RESOURCE: &'static str = "Transcription";
    const DOMAIN: Domain = Domain::Api;

    fn path(&self) -> String {
        self.instance_path()
    }
}

impl Fetcher for RecordingTranscriptionFetcher {
    type Record = Transcription;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordingTranscriptionDeleter {
    inner: RecordingTranscriptionFetcher,
}

impl RecordingTranscriptionDeleter {
    #[must_use]
    pub fn new(
        account_sid: impl Into<String>,
        recording_sid: impl Into<String>,
        sid: impl Into<String>,
    ) -> Self {
        Self {
            inner: RecordingTranscriptionFetcher::new(account_sid, recording_sid, sid),
        }
    }
}

impl Endpoint for RecordingTranscriptionDeleter {
    const RESOURCE: &'static str = "Transcription";
    const DOMAIN: Domain = Domain::Api;

    fn path(&self) -> String {
        self.inner.instance_path()
    }
}

impl Deleter for RecordingTranscriptionDeleter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scoped_paths_include_recording_sid() {
        assert_eq!(
            RecordingTranscription::read("AC1", "RE1").path(),
            "/2010-04-01/Accounts/AC1/Recordings/RE1/Transcriptions.json"
        );
        assert_eq!(
            RecordingTranscription::delete("AC1", "RE1", "TR1").path(),
            "/2010-04-01/Accounts/AC1/Recordings/RE1/Transcriptions/TR1.json"
        );
    }
}
