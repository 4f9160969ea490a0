//! Notifications (error and warning logs) attached to a call.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::Domain;
use crate::rest::{build_path, Deleter, Endpoint, Fetcher};

const INSTANCE_PATH: &str =
    "/2010-04-01/Accounts/{AccountSid}/Calls/{CallSid}/Notifications/{Sid}.json";

/// A log entry generated while handling a call.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CallNotification {
    /// The unique identifier of the notification.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sid: Option<String>,

    /// The SID of the account that owns the notification.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_sid: Option<String>,

    /// The SID of the call the notification was raised on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub call_sid: Option<String>,

    /// The API version used to process the notification.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,

    /// "0" for an error, "1" for a warning.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log: Option<String>,

    /// The Twilio error code that raised the notification.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,

    /// A link to the error documentation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub more_info: Option<String>,

    /// The URL-encoded notification text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_text: Option<String>,

    /// When the notification was raised.
    #[serde(
        default,
        with = "crate::rest::formats::rfc2822",
        skip_serializing_if = "Option::is_none"
    )]
    pub message_date: Option<DateTime<Utc>>,

    /// The URL requested when the error occurred.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_url: Option<String>,

    /// The HTTP method of the failed request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_method: Option<String>,

    /// When the notification was created.
    #[serde(
        default,
        with = "crate::rest::formats::rfc2822",
        skip_serializing_if = "Option::is_none"
    )]
    pub date_created: Option<DateTime<Utc>>,

    /// When the notification was last updated.
    #[serde(
        default,
        with = "crate::rest::formats::rfc2822",
        skip_serializing_if = "Option::is_none"
    )]
    pub date_updated: Option<DateTime<Utc>>,

    /// The URI of the notification, relative to the API host.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
}

impl CallNotification {
    #[must_use]
    pub fn fetch(
        account_sid: impl Into<String>,
        call_sid: impl Into<String>,
        sid: impl Into<String>,
    ) -> CallNotificationFetcher {
        CallNotificationFetcher {
            ids: NotificationIds::new(account_sid, call_sid, sid),
        }
    }

    #[must_use]
    pub fn delete(
        account_sid: impl Into<String>,
        call_sid: impl Into<String>,
        sid: impl Into<String>,
    ) -> CallNotificationDeleter {
        CallNotificationDeleter {
            ids: NotificationIds::new(account_sid, call_sid, sid),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct NotificationIds {
    account_sid: String,
    call_sid: String,
    sid: String,
}

impl NotificationIds {
    fn new(
        account_sid: impl Into<String>,
        call_sid: impl Into<String>,
        sid: impl Into<String>,
    ) -> Self {
        Self {
            account_sid: account_sid.into(),
            call_sid: call_sid.into(),
            sid: sid.into(),
        }
    }

    fn path(&self) -> String {
        build_path(
            INSTANCE_PATH,
            &[
                ("AccountSid", self.account_sid.as_str()),
                ("CallSid", self.call_sid.as_str()),
                ("Sid", self.sid.as_str()),
            ],
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallNotificationFetcher {
    ids: NotificationIds,
}

impl Endpoint for CallNotificationFetcher {
    const RESOURCE: &'static str = "Notification";
    const DOMAIN: Domain = Domain::Api;

    fn path(&self) -> String {
        self.ids.path()
    }
}

impl Fetcher for CallNotificationFetcher {
    type Record = CallNotification;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallNotificationDeleter {
    ids: NotificationIds,
}

impl Endpoint for CallNotificationDeleter {
    const RESOURCE: &'static str = "Notification";
    const DOMAIN: Domain = Domain::Api;

    fn path(&self) -> String {
        self.ids.path()
    }
}

impl Deleter for CallNotificationDeleter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_path() {
        assert_eq!(
            CallNotification::delete("AC1", "CA1", "NO1").path(),
            "/2010-04-01/Accounts/AC1/Calls/CA1/Notifications/NO1.json"
        );
    }
}
