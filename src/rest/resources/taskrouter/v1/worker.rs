//! TaskRouter workers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::Domain;
use crate::rest::{build_path, Deleter, Endpoint, Fetcher};

const INSTANCE_PATH: &str = "/v1/Workspaces/{WorkspaceSid}/Workers/{Sid}";

/// An agent that can be assigned tasks.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Worker {
    /// The unique identifier of the worker.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sid: Option<String>,

    /// The SID of the account that owns the worker.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_sid: Option<String>,

    /// The SID of the workspace this belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace_sid: Option<String>,

    /// A human-readable name for the worker.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub friendly_name: Option<String>,

    /// The SID of the worker's current activity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_sid: Option<String>,

    /// The name of the worker's current activity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_name: Option<String>,

    /// JSON-encoded worker attributes, as sent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<String>,

    /// Whether the worker can currently take tasks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available: Option<bool>,

    /// When the worker was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_created: Option<DateTime<Utc>>,

    /// When the worker last changed activity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_status_changed: Option<DateTime<Utc>>,

    /// When the worker was last updated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_updated: Option<DateTime<Utc>>,

    /// The absolute URL of the worker.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Worker {
    #[must_use]
    pub fn fetch(workspace_sid: impl Into<String>, sid: impl Into<String>) -> WorkerFetcher {
        WorkerFetcher::new(workspace_sid, sid)
    }

    #[must_use]
    pub fn delete(workspace_sid: impl Into<String>, sid: impl Into<String>) -> WorkerDeleter {
        WorkerDeleter::new(workspace_sid, sid)
    }
}

fn instance_path(workspace_sid: &str, sid: &str) -> String {
    build_path(INSTANCE_PATH, &[("WorkspaceSid", workspace_sid), ("Sid", sid)])
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerFetcher {
    workspace_sid: String,
    sid: String,
}

impl WorkerFetcher {
    #[must_use]
    pub fn new(workspace_sid: impl Into<String>, sid: impl Into<String>) -> Self {
        Self {
            workspace_sid: workspace_sid.into(),
            sid: sid.into(),
        }
    }
}

impl Endpoint for WorkerFetcher {
    const RESOURCE: &'static str = "Worker";
    const DOMAIN: Domain = Domain::Taskrouter;

    fn path(&self) -> String {
        instance_path(&self.workspace_sid, &self.sid)
    }
}

impl Fetcher for WorkerFetcher {
    type Record = Worker;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerDeleter {
    workspace_sid: String,
    sid: String,
}

impl WorkerDeleter {
    #[must_use]
    pub fn new(workspace_sid: impl Into<String>, sid: impl Into<String>) -> Self {
        Self {
            workspace_sid: workspace_sid.into(),
            sid: sid.into(),
        }
    }
}

impl Endpoint for WorkerDeleter {
    const RESOURCE: &'static str = "Worker";
    const DOMAIN: Domain = Domain::Taskrouter;

    fn path(&self) -> String {
        instance_path(&self.workspace_sid, &self.sid)
    }
}

impl Deleter for WorkerDeleter {}
