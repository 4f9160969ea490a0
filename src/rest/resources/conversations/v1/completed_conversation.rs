//! Completed conversations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::Domain;
use crate::rest::{Endpoint, Reader};

const LIST_PATH: &str = "/v1/Conversations/Completed";

/// Lifecycle state of a conversation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ConversationStatus {
    Created,
    InProgress,
    Completed,
    Failed,
    #[serde(other)]
    Unknown,
}

/// A conversation that has ended.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CompletedConversation {
    /// The unique identifier of the conversation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sid: Option<String>,

    /// The final status of the conversation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ConversationStatus>,

    /// Length in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u64>,

    /// When the conversation was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_created: Option<DateTime<Utc>>,

    /// When the conversation started.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,

    /// When the conversation ended.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,

    /// The SID of the account that owns the conversation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_sid: Option<String>,

    /// The absolute URL of the conversation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl CompletedConversation {
    #[must_use]
    pub fn read() -> CompletedConversationReader {
        CompletedConversationReader::default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompletedConversationReader {
    page_size: Option<u32>,
}

impl CompletedConversationReader {
    #[must_use]
    pub const fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }
}

impl Endpoint for CompletedConversationReader {
    const RESOURCE: &'static str = "Completed";
    const DOMAIN: Domain = Domain::Conversations;

    fn path(&self) -> String {
        LIST_PATH.to_string()
    }
}

impl Reader for CompletedConversationReader {
    type Record = CompletedConversation;
    const RECORDS_KEY: &'static str = "conversations";

    fn page_size(&self) -> Option<u32> {
        self.page_size
    }
}
