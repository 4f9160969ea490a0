//! Statistics for every task queue in a workspace.
//!
//! Each record pairs a queue with its cumulative statistics over the
//! requested window and its real-time snapshot. The nested statistics
//! objects are kept as raw JSON since their shape varies by account
//! features.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::clients::Params;
use crate::config::Domain;
use crate::rest::{build_path, Endpoint, Reader};

const LIST_PATH: &str = "/v1/Workspaces/{WorkspaceSid}/TaskQueues/Statistics";

/// Statistics of one task queue.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct TaskQueuesStatistics {
    /// The SID of the account that owns the workspace.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_sid: Option<String>,

    /// The SID of the task queue the statistics describe.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_queue_sid: Option<String>,

    /// The SID of the workspace this belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace_sid: Option<String>,

    /// Totals over the requested interval, as returned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cumulative: Option<Value>,

    /// Current queue state, as returned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub realtime: Option<Value>,
}

impl TaskQueuesStatistics {
    #[must_use]
    pub fn read(workspace_sid: impl Into<String>) -> TaskQueuesStatisticsReader {
        TaskQueuesStatisticsReader::new(workspace_sid)
    }
}

/// Lists queue statistics, optionally narrowed to a time window or queue
/// name.
///
/// `Minutes` and `StartDate`/`EndDate` are alternative ways to bound the
/// cumulative window; the server decides precedence when both are given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskQueuesStatisticsReader {
    workspace_sid: String,
    end_date: Option<DateTime<Utc>>,
    friendly_name: Option<String>,
    minutes: Option<u32>,
    start_date: Option<DateTime<Utc>>,
    page_size: Option<u32>,
}

impl TaskQueuesStatisticsReader {
    #[must_use]
    pub fn new(workspace_sid: impl Into<String>) -> Self {
        Self {
            workspace_sid: workspace_sid.into(),
            end_date: None,
            friendly_name: None,
            minutes: None,
            start_date: None,
            page_size: None,
        }
    }

    #[must_use]
    pub const fn by_end_date(mut self, end_date: DateTime<Utc>) -> Self {
        self.end_date = Some(end_date);
        self
    }

    #[must_use]
    pub fn by_friendly_name(mut self, friendly_name: impl Into<String>) -> Self {
        self.friendly_name = Some(friendly_name.into());
        self
    }

    /// Cumulative window covering the last `minutes` minutes.
    #[must_use]
    pub const fn by_minutes(mut self, minutes: u32) -> Self {
        self.minutes = Some(minutes);
        self
    }

    #[must_use]
    pub const fn by_start_date(mut self, start_date: DateTime<Utc>) -> Self {
        self.start_date = Some(start_date);
        self
    }

    #[must_use]
    pub const fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }
}

fn iso8601(date: &DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Secs, true)
}

impl Endpoint for TaskQueuesStatisticsReader {
    const RESOURCE: &'static str = "TaskQueuesStatistics";
    const DOMAIN: Domain = Domain::Taskrouter;

    fn path(&self) -> String {
        build_path(LIST_PATH, &[("WorkspaceSid", self.workspace_sid.as_str())])
    }
}

impl Reader for TaskQueuesStatisticsReader {
    type Record = TaskQueuesStatistics;
    const RECORDS_KEY: &'static str = "task_queues_statistics";

    fn page_size(&self) -> Option<u32> {
        self.page_size
    }

    fn filter_params(&self) -> Params {
        let mut params = Params::new();
        params.push_opt("EndDate", self.end_date.as_ref().map(iso8601));
        params.push_opt("FriendlyName", self.friendly_name.as_deref());
        params.push_opt("Minutes", self.minutes);
        params.push_opt("StartDate", self.start_date.as_ref().map(iso8601));
        params
    }
}
