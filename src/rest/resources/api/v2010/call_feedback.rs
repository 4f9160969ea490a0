//! Quality feedback left for a call.
//!
//! Each call has at most one feedback entry, addressed by the call SID.
//! It is created, fetched and updated at the same path.
//!
//! # Example
//!
//! ```rust,ignore
//! use twilio_api::rest::resources::api::v2010::{CallFeedback, FeedbackIssue};
//! use twilio_api::rest::Creator;
//!
//! let feedback = CallFeedback::create(account_sid, call_sid, 2)
//!     .issues([FeedbackIssue::DroppedCall, FeedbackIssue::PostDialDelay])
//!     .execute(&client)
//!     .await?;
//! ```

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::Params;
use crate::config::Domain;
use crate::rest::{build_path, Creator, Endpoint, Fetcher, Updater};

const PATH: &str = "/2010-04-01/Accounts/{AccountSid}/Calls/{CallSid}/Feedback.json";

/// A problem reported with a call.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum FeedbackIssue {
    AudioLatency,
    DigitsNotCaptured,
    DroppedCall,
    ImperfectAudio,
    IncorrectCallerId,
    OneWayAudio,
    PostDialDelay,
    UnsolicitedCall,
    #[serde(other)]
    Unknown,
}

impl FeedbackIssue {
    /// Returns the wire value.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::AudioLatency => "audio-latency",
            Self::DigitsNotCaptured => "digits-not-captured",
            Self::DroppedCall => "dropped-call",
            Self::ImperfectAudio => "imperfect-audio",
            Self::IncorrectCallerId => "incorrect-caller-id",
            Self::OneWayAudio => "one-way-audio",
            Self::PostDialDelay => "post-dial-delay",
            Self::UnsolicitedCall => "unsolicited-call",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for FeedbackIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Feedback for one call.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CallFeedback {
    /// The unique identifier of the feedback.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sid: Option<String>,

    /// The SID of the account that owns the feedback.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_sid: Option<String>,

    /// When the feedback was created.
    #[serde(
        default,
        with = "crate::rest::formats::rfc2822",
        skip_serializing_if = "Option::is_none"
    )]
    pub date_created: Option<DateTime<Utc>>,

    /// When the feedback was last updated.
    #[serde(
        default,
        with = "crate::rest::formats::rfc2822",
        skip_serializing_if = "Option::is_none"
    )]
    pub date_updated: Option<DateTime<Utc>>,

    /// Reported issues, one entry per category.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub issues: Vec<FeedbackIssue>,

    /// Caller-rated quality, 1 (worst) to 5 (best).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality_score: Option<u8>,
}

impl CallFeedback {
    /// Leaves feedback for a call.
    #[must_use]
    pub fn create(
        account_sid: impl Into<String>,
        call_sid: impl Into<String>,
        quality_score: u8,
    ) -> CallFeedbackCreator {
        CallFeedbackCreator {
            body: FeedbackBody::new(account_sid, call_sid, quality_score),
        }
    }

    #[must_use]
    pub fn fetch(account_sid: impl Into<String>, call_sid: impl Into<String>) -> CallFeedbackFetcher {
        CallFeedbackFetcher {
            account_sid: account_sid.into(),
            call_sid: call_sid.into(),
        }
    }

    /// Replaces the feedback of a call.
    #[must_use]
    pub fn update(
        account_sid: impl Into<String>,
        call_sid: impl Into<String>,
        quality_score: u8,
    ) -> CallFeedbackUpdater {
        CallFeedbackUpdater {
            body: FeedbackBody::new(account_sid, call_sid, quality_score),
        }
    }
}

fn feedback_path(account_sid: &str, call_sid: &str) -> String {
    build_path(PATH, &[("AccountSid", account_sid), ("CallSid", call_sid)])
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct FeedbackBody {
    account_sid: String,
    call_sid: String,
    quality_score: u8,
    issues: Option<Vec<FeedbackIssue>>,
}

impl FeedbackBody {
    fn new(account_sid: impl Into<String>, call_sid: impl Into<String>, quality_score: u8) -> Self {
        Self {
            account_sid: account_sid.into(),
            call_sid: call_sid.into(),
            quality_score,
            issues: None,
        }
    }

    fn path(&self) -> String {
        feedback_path(&self.account_sid, &self.call_sid)
    }

    fn params(&self) -> Params {
        let mut params = Params::new();
        params.push("QualityScore", self.quality_score.to_string());
        if let Some(issues) = &self.issues {
            params.push_all("Issue", issues.iter());
        }
        params
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallFeedbackCreator {
    body: FeedbackBody,
}

impl CallFeedbackCreator {
    /// Problems to report, each sent as a separate `Issue` entry.
    #[must_use]
    pub fn issues(mut self, issues: impl IntoIterator<Item = FeedbackIssue>) -> Self {
        self.body.issues = Some(issues.into_iter().collect());
        self
    }
}

impl Endpoint for CallFeedbackCreator {
    const RESOURCE: &'static str = "Feedback";
    const DOMAIN: Domain = Domain::Api;

    fn path(&self) -> String {
        self.body.path()
    }
}

impl Creator for CallFeedbackCreator {
    type Record = CallFeedback;

    fn form_params(&self) -> Params {
        self.body.params()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallFeedbackFetcher {
    account_sid: String,
    call_sid: String,
}

impl Endpoint for CallFeedbackFetcher {
    const RESOURCE: &'static str = "Feedback";
    const DOMAIN: Domain = Domain::Api;

    fn path(&self) -> String {
        feedback_path(&self.account_sid, &self.call_sid)
    }
}

impl Fetcher for CallFeedbackFetcher {
    type Record = CallFeedback;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallFeedbackUpdater {
    body: FeedbackBody,
}

impl CallFeedbackUpdater {
    #[must_use]
    pub fn issues(mut self, issues: impl IntoIterator<Item = FeedbackIssue>) -> Self {
        self.body.issues = Some(issues.into_iter().collect());
        self
    }
}

impl Endpoint for CallFeedbackUpdater {
    const RESOURCE: &'static str = "Feedback";
    const DOMAIN: Domain = Domain::Api;

    fn path(&self) -> String {
        self.body.path()
    }
}

impl Updater for CallFeedbackUpdater {
    type Record = CallFeedback;

    fn form_params(&self) -> Params {
        self.body.params()
    }
}
