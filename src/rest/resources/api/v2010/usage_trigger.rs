//! Usage triggers.
//!
//! A trigger fires a webhook when a usage category crosses a threshold.
//! Triggers can be fetched and have their callback and name updated.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{HttpMethod, Params};
use crate::config::Domain;
use crate::rest::{build_path, Endpoint, Fetcher, Updater};

const INSTANCE_PATH: &str = "/2010-04-01/Accounts/{AccountSid}/Usage/Triggers/{Sid}.json";

/// How often a trigger re-arms.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TriggerRecurring {
    Daily,
    Monthly,
    Yearly,
    Alltime,
    #[serde(other)]
    Unknown,
}

/// The usage field the trigger value is compared against.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TriggerField {
    Count,
    Usage,
    Price,
    #[serde(other)]
    Unknown,
}

/// A usage trigger.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct UsageTrigger {
    /// The unique identifier of the trigger.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sid: Option<String>,

    /// The SID of the account that owns the trigger.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_sid: Option<String>,

    /// The API version used to process the trigger.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,

    /// The HTTP method used to request `callback_url`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_method: Option<String>,

    /// The URL requested when the trigger fires.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<String>,

    /// The current value of the watched usage field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_value: Option<String>,

    /// When the trigger was created.
    #[serde(
        default,
        with = "crate::rest::formats::rfc2822",
        skip_serializing_if = "Option::is_none"
    )]
    pub date_created: Option<DateTime<Utc>>,

    /// When the trigger last fired.
    #[serde(
        default,
        with = "crate::rest::formats::rfc2822",
        skip_serializing_if = "Option::is_none"
    )]
    pub date_fired: Option<DateTime<Utc>>,

    /// When the trigger was last updated.
    #[serde(
        default,
        with = "crate::rest::formats::rfc2822",
        skip_serializing_if = "Option::is_none"
    )]
    pub date_updated: Option<DateTime<Utc>>,

    /// A human-readable name for the trigger.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub friendly_name: Option<String>,

    /// How often the trigger resets, if at all.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurring: Option<TriggerRecurring>,

    /// The usage field compared against the trigger value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger_by: Option<TriggerField>,

    /// Threshold at which the trigger fires.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger_value: Option<String>,

    /// The usage category being watched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage_category: Option<String>,

    /// The URI of the usage records the trigger watches.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage_record_uri: Option<String>,

    /// The URI of the trigger, relative to the API host.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
}

impl UsageTrigger {
    #[must_use]
    pub fn fetch(account_sid: impl Into<String>, sid: impl Into<String>) -> UsageTriggerFetcher {
        UsageTriggerFetcher {
            account_sid: account_sid.into(),
            sid: sid.into(),
        }
    }

    #[must_use]
    pub fn update(account_sid: impl Into<String>, sid: impl Into<String>) -> UsageTriggerUpdater {
        UsageTriggerUpdater {
            account_sid: account_sid.into(),
            sid: sid.into(),
            callback_method: None,
            callback_url: None,
            friendly_name: None,
        }
    }
}

fn instance_path(account_sid: &str, sid: &str) -> String {
    build_path(INSTANCE_PATH, &[("AccountSid", account_sid), ("Sid", sid)])
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageTriggerFetcher {
    account_sid: String,
    sid: String,
}

impl Endpoint for UsageTriggerFetcher {
    const RESOURCE: &'static str = "Trigger";
    const DOMAIN: Domain = Domain::Api;

    fn path(&self) -> String {
        instance_path(&self.account_sid, &self.sid)
    }
}

impl Fetcher for UsageTriggerFetcher {
    type Record = UsageTrigger;
}

/// Updates a trigger. Only the fields that were set are sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageTriggerUpdater {
    account_sid: String,
    sid: String,
    callback_method: Option<HttpMethod>,
    callback_url: Option<String>,
    friendly_name: Option<String>,
}

impl UsageTriggerUpdater {
    /// HTTP method used to call `callback_url`.
    #[must_use]
    pub const fn callback_method(mut self, method: HttpMethod) -> Self {
        self.callback_method = Some(method);
        self
    }

    /// URL requested when the trigger fires.
    #[must_use]
    pub fn callback_url(mut self, url: impl Into<String>) -> Self {
        self.callback_url = Some(url.into());
        self
    }

    #[must_use]
    pub fn friendly_name(mut self, name: impl Into<String>) -> Self {
        self.friendly_name = Some(name.into());
        self
    }
}

impl Endpoint for UsageTriggerUpdater {
    const RESOURCE: &'static str = "Trigger";
    const DOMAIN: Domain = Domain::Api;

    fn path(&self) -> String {
        instance_path(&self.account_sid, &self.sid)
    }
}

impl Updater for UsageTriggerUpdater {
    type Record = UsageTrigger;

    fn form_params(&self) -> Params {
        let mut params = Params::new();
        params.push_opt("CallbackMethod", self.callback_method);
        params.push_opt("CallbackUrl", self.callback_url.as_deref());
        params.push_opt("FriendlyName", self.friendly_name.as_deref());
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_sends_only_set_fields() {
        let request = UsageTrigger::update("AC1", "UT1")
            .callback_method(HttpMethod::Get)
            .build_request();

        let form: Vec<_> = request.form.iter().collect();
        assert_eq!(form, vec![("CallbackMethod", "GET")]);
        assert_eq!(
            request.target.to_string(),
            "/2010-04-01/Accounts/AC1/Usage/Triggers/UT1.json"
        );
    }

    #[test]
    fn test_empty_update_sends_empty_form() {
        let request = UsageTrigger::update("AC1", "UT1").build_request();
        assert!(request.form.is_empty());
        assert_eq!(request.method, HttpMethod::Post);
    }

    #[test]
    fn test_trigger_enums_deserialize() {
        let trigger: UsageTrigger =
            serde_json::from_str(r#"{"recurring":"monthly","trigger_by":"price"}"#).unwrap();
        assert_eq!(trigger.recurring, Some(TriggerRecurring::Monthly));
        assert_eq!(trigger.trigger_by, Some(TriggerField::Price));
    }
}
