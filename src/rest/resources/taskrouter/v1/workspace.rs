//! TaskRouter workspaces.
//!
//! A workspace is the container for a TaskRouter application's workers,
//! queues and activities.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::Params;
use crate::config::Domain;
use crate::rest::resources::taskrouter::v1::{TaskQueuesStatisticsReader, WorkerDeleter, WorkerFetcher};
use crate::rest::{build_path, Endpoint, Fetcher, Updater};

const INSTANCE_PATH: &str = "/v1/Workspaces/{Sid}";

/// A TaskRouter workspace.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Workspace {
    /// The unique identifier of the workspace.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sid: Option<String>,

    /// The SID of the account that owns the workspace.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_sid: Option<String>,

    /// A human-readable name for the workspace.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub friendly_name: Option<String>,

    /// URL that receives workspace events.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_callback_url: Option<String>,

    /// Activity assigned to new workers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_activity_sid: Option<String>,

    /// The activity assigned to new workers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_activity_name: Option<String>,

    /// Activity assigned to workers whose reservation timed out.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_activity_sid: Option<String>,

    /// The activity assigned to workers whose reservation timed out.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_activity_name: Option<String>,

    /// When the workspace was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_created: Option<DateTime<Utc>>,

    /// When the workspace was last updated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_updated: Option<DateTime<Utc>>,

    /// The absolute URL of the workspace.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Absolute URLs of related resources, keyed by name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<HashMap<String, String>>,
}

impl Workspace {
    #[must_use]
    pub fn fetch(sid: impl Into<String>) -> WorkspaceFetcher {
        WorkspaceFetcher { sid: sid.into() }
    }

    #[must_use]
    pub fn update(sid: impl Into<String>) -> WorkspaceUpdater {
        WorkspaceUpdater {
            sid: sid.into(),
            default_activity_sid: None,
            event_callback_url: None,
            friendly_name: None,
            timeout_activity_sid: None,
        }
    }

    /// Fetches one worker of this workspace.
    #[must_use]
    pub fn worker(&self, worker_sid: impl Into<String>) -> Option<WorkerFetcher> {
        let sid = self.sid.as_deref()?;
        Some(WorkerFetcher::new(sid, worker_sid))
    }

    /// Deletes one worker of this workspace.
    #[must_use]
    pub fn delete_worker(&self, worker_sid: impl Into<String>) -> Option<WorkerDeleter> {
        let sid = self.sid.as_deref()?;
        Some(WorkerDeleter::new(sid, worker_sid))
    }

    /// Lists statistics for the queues of this workspace.
    #[must_use]
    pub fn task_queues_statistics(&self) -> Option<TaskQueuesStatisticsReader> {
        let sid = self.sid.as_deref()?;
        Some(TaskQueuesStatisticsReader::new(sid))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceFetcher {
    sid: String,
}

impl Endpoint for WorkspaceFetcher {
    const RESOURCE: &'static str = "Workspace";
    const DOMAIN: Domain = Domain::Taskrouter;

    fn path(&self) -> String {
        build_path(INSTANCE_PATH, &[("Sid", self.sid.as_str())])
    }
}

impl Fetcher for WorkspaceFetcher {
    type Record = Workspace;
}

/// Updates a workspace. Only the fields that were set are sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceUpdater {
    sid: String,
    default_activity_sid: Option<String>,
    event_callback_url: Option<String>,
    friendly_name: Option<String>,
    timeout_activity_sid: Option<String>,
}

impl WorkspaceUpdater {
    #[must_use]
    pub fn default_activity_sid(mut self, sid: impl Into<String>) -> Self {
        self.default_activity_sid = Some(sid.into());
        self
    }

    #[must_use]
    pub fn event_callback_url(mut self, url: impl Into<String>) -> Self {
        self.event_callback_url = Some(url.into());
        self
    }

    #[must_use]
    pub fn friendly_name(mut self, name: impl Into<String>) -> Self {
        self.friendly_name = Some(name.into());
        self
    }

    #[must_use]
    pub fn timeout_activity_sid(mut self, sid: impl Into<String>) -> Self {
        self.timeout_activity_sid = Some(sid.into());
        self
    }
}

impl Endpoint for WorkspaceUpdater {
    const RESOURCE: &'static str = "Workspace";
    const DOMAIN: Domain = Domain::Taskrouter;

    fn path(&self) -> String {
        build_path(INSTANCE_PATH, &[("Sid", self.sid.as_str())])
    }
}

impl Updater for WorkspaceUpdater {
    type Record = Workspace;

    fn form_params(&self) -> Params {
        let mut params = Params::new();
        params.push_opt("DefaultActivitySid", self.default_activity_sid.as_deref());
        params.push_opt("EventCallbackUrl", self.event_callback_url.as_deref());
        params.push_opt("FriendlyName", self.friendly_name.as_deref());
        params.push_opt("TimeoutActivitySid", self.timeout_activity_sid.as_deref());
        params
    }
}
