//! Call feedback summaries.
//!
//! A summary aggregates call feedback over a date range. Creating one
//! queues an asynchronous job; poll it with [`CallFeedbackSummary::fetch`]
//! until [`FeedbackSummaryStatus::Completed`].

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{HttpMethod, Params};
use crate::config::Domain;
use crate::rest::{build_path, Creator, Deleter, Endpoint, Fetcher};

const LIST_PATH: &str = "/2010-04-01/Accounts/{AccountSid}/Calls/FeedbackSummary.json";
const INSTANCE_PATH: &str = "/2010-04-01/Accounts/{AccountSid}/Calls/FeedbackSummary/{Sid}.json";

/// Progress of a summary job.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum FeedbackSummaryStatus {
    Queued,
    InProgress,
    Completed,
    Failed,
    #[serde(other)]
    Unknown,
}

/// How often one issue was reported in the summarized period.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct FeedbackIssueCount {
    /// The number of issue reports in this category.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,

    /// The issue name (e.g., "imperfect-audio").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Share of all calls, as sent (e.g., "0.04%").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentage_of_total_calls: Option<String>,
}

/// Aggregated feedback over a date range.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct CallFeedbackSummary {
    /// The unique identifier of the summary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sid: Option<String>,

    /// The SID of the account that owns the summary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_sid: Option<String>,

    /// The number of calls in the date range.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub call_count: Option<u64>,

    /// The number of calls with feedback.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub call_feedback_count: Option<u64>,

    /// When the summary was created.
    #[serde(
        default,
        with = "crate::rest::formats::rfc2822",
        skip_serializing_if = "Option::is_none"
    )]
    pub date_created: Option<DateTime<Utc>>,

    /// When the summary was last updated.
    #[serde(
        default,
        with = "crate::rest::formats::rfc2822",
        skip_serializing_if = "Option::is_none"
    )]
    pub date_updated: Option<DateTime<Utc>>,

    /// The first day covered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,

    /// The last day covered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,

    /// Whether subaccount calls are counted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_subaccounts: Option<bool>,

    /// Issue counts by category.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub issues: Vec<FeedbackIssueCount>,

    /// The mean quality score.
    #[serde(
        default,
        with = "crate::rest::formats::decimal",
        skip_serializing_if = "Option::is_none"
    )]
    pub quality_score_average: Option<f64>,

    /// The median quality score.
    #[serde(
        default,
        with = "crate::rest::formats::decimal",
        skip_serializing_if = "Option::is_none"
    )]
    pub quality_score_median: Option<f64>,

    /// The standard deviation of quality scores.
    #[serde(
        default,
        with = "crate::rest::formats::decimal",
        skip_serializing_if = "Option::is_none"
    )]
    pub quality_score_standard_deviation: Option<f64>,

    /// Whether the summary has finished generating.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<FeedbackSummaryStatus>,
}

impl CallFeedbackSummary {
    /// Queues a summary of feedback between two dates, inclusive.
    #[must_use]
    pub fn create(
        account_sid: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> CallFeedbackSummaryCreator {
        CallFeedbackSummaryCreator {
            account_sid: account_sid.into(),
            start_date,
            end_date,
            include_subaccounts: None,
            status_callback: None,
            status_callback_method: None,
        }
    }

    #[must_use]
    pub fn fetch(
        account_sid: impl Into<String>,
        sid: impl Into<String>,
    ) -> CallFeedbackSummaryFetcher {
        CallFeedbackSummaryFetcher {
            account_sid: account_sid.into(),
            sid: sid.into(),
        }
    }

    #[must_use]
    pub fn delete(
        account_sid: impl Into<String>,
        sid: impl Into<String>,
    ) -> CallFeedbackSummaryDeleter {
        CallFeedbackSummaryDeleter {
            account_sid: account_sid.into(),
            sid: sid.into(),
        }
    }
}

/// Queues a feedback summary job.
///
/// Dates are sent as `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallFeedbackSummaryCreator {
    account_sid: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
    include_subaccounts: Option<bool>,
    status_callback: Option<String>,
    status_callback_method: Option<HttpMethod>,
}

impl CallFeedbackSummaryCreator {
    /// Also summarize feedback from subaccounts.
    #[must_use]
    pub const fn include_subaccounts(mut self, include: bool) -> Self {
        self.include_subaccounts = Some(include);
        self
    }

    /// URL notified when the job completes.
    #[must_use]
    pub fn status_callback(mut self, url: impl Into<String>) -> Self {
        self.status_callback = Some(url.into());
        self
    }

    #[must_use]
    pub const fn status_callback_method(mut self, method: HttpMethod) -> Self {
        self.status_callback_method = Some(method);
        self
    }
}

impl Endpoint for CallFeedbackSummaryCreator {
    const RESOURCE: &'static str = "FeedbackSummary";
    const DOMAIN: Domain = Domain::Api;

    fn path(&self) -> String {
        build_path(LIST_PATH, &[("AccountSid", self.account_sid.as_str())])
    }
}

impl Creator for CallFeedbackSummaryCreator {
    type Record = CallFeedbackSummary;

    fn form_params(&self) -> Params {
        let mut params = Params::new();
        params.push("StartDate", self.start_date.to_string());
        params.push("EndDate", self.end_date.to_string());
        params.push_opt("IncludeSubaccounts", self.include_subaccounts);
        params.push_opt("StatusCallback", self.status_callback.as_deref());
        params.push_opt("StatusCallbackMethod", self.status_callback_method);
        params
    }
}

fn instance_path(account_sid: &str, sid: &str) -> String {
    build_path(INSTANCE_PATH, &[("AccountSid", account_sid), ("Sid", sid)])
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallFeedbackSummaryFetcher {
    account_sid: String,
    sid: String,
}

impl Endpoint for CallFeedbackSummaryFetcher {
    const RESOURCE: &'static str = "FeedbackSummary";
    const DOMAIN: Domain = Domain::Api;

    fn path(&self) -> String {
        instance_path(&self.account_sid, &self.sid)
    }
}

impl Fetcher for CallFeedbackSummaryFetcher {
    type Record = CallFeedbackSummary;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallFeedbackSummaryDeleter {
    account_sid: String,
    sid: String,
}

impl Endpoint for CallFeedbackSummaryDeleter {
    const RESOURCE: &'static str = "FeedbackSummary";
    const DOMAIN: Domain = Domain::Api;

    fn path(&self) -> String {
        instance_path(&self.account_sid, &self.sid)
    }
}

impl Deleter for CallFeedbackSummaryDeleter {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_create_formats_dates_and_optional_params() {
        let request = CallFeedbackSummary::create("AC1", date(2014, 1, 1), date(2014, 1, 31))
            .include_subaccounts(true)
            .status_callback_method(HttpMethod::Post)
            .build_request();

        let form: Vec<_> = request.form.iter().collect();
        assert_eq!(
            form,
            vec![
                ("StartDate", "2014-01-01"),
                ("EndDate", "2014-01-31"),
                ("IncludeSubaccounts", "true"),
                ("StatusCallbackMethod", "POST"),
            ]
        );
        assert_eq!(
            request.target.to_string(),
            "/2010-04-01/Accounts/AC1/Calls/FeedbackSummary.json"
        );
    }

    #[test]
    fn test_summary_deserializes() {
        let json = r#"{
            "account_sid": "ACaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa",
            "call_count": 10200,
            "call_feedback_count": 729,
            "date_created": "Tue, 31 Aug 2010 20:36:28 +0000",
            "date_updated": "Tue, 31 Aug 2010 20:36:44 +0000",
            "end_date": "2011-01-01",
            "include_subaccounts": false,
            "issues": [
                {"count": 45, "description": "imperfect-audio", "percentage_of_total_calls": "0.04%"}
            ],
            "quality_score_average": 4.5,
            "quality_score_median": 4,
            "quality_score_standard_deviation": 1,
            "sid": "FSaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa",
            "start_date": "2011-01-01",
            "status": "completed"
        }"#;

        let summary: CallFeedbackSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.status, Some(FeedbackSummaryStatus::Completed));
        assert_eq!(summary.start_date, Some(date(2011, 1, 1)));
        assert_eq!(summary.quality_score_median, Some(4.0));
        assert_eq!(
            summary.issues[0].percentage_of_total_calls.as_deref(),
            Some("0.04%")
        );
    }
}
