//! The account's developer sandbox.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::Domain;
use crate::rest::{build_path, Endpoint, Fetcher};

const PATH: &str = "/2010-04-01/Accounts/{AccountSid}/Sandbox.json";

/// Sandbox phone number and routing configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Sandbox {
    /// PIN callers enter to reach the sandbox.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pin: Option<u32>,

    /// The SID of the account that owns the sandbox.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_sid: Option<String>,

    /// The sandbox phone number, in E.164 format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,

    /// The SID of the application handling sandbox traffic.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_sid: Option<String>,

    /// The API version used to process the sandbox.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,

    /// The URL requested when a call comes in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice_url: Option<String>,

    /// The HTTP method used to request `voice_url`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice_method: Option<String>,

    /// The URL requested when a message comes in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sms_url: Option<String>,

    /// The HTTP method used to request `sms_url`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sms_method: Option<String>,

    /// The URL requested when a sandbox call ends.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_callback: Option<String>,

    /// The HTTP method used to request `status_callback`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_callback_method: Option<String>,

    /// When the sandbox was created.
    #[serde(
        default,
        with = "crate::rest::formats::rfc2822",
        skip_serializing_if = "Option::is_none"
    )]
    pub date_created: Option<DateTime<Utc>>,

    /// When the sandbox was last updated.
    #[serde(
        default,
        with = "crate::rest::formats::rfc2822",
        skip_serializing_if = "Option::is_none"
    )]
    pub date_updated: Option<DateTime<Utc>>,

    /// The URI of the sandbox, relative to the API host.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
}

impl Sandbox {
    #[must_use]
    pub fn fetch(account_sid: impl Into<String>) -> SandboxFetcher {
        SandboxFetcher {
            account_sid: account_sid.into(),
        }
    }
}

/// Fetches the sandbox. It is a singleton per account, so only the account
/// SID is needed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SandboxFetcher {
    account_sid: String,
}

impl Endpoint for SandboxFetcher {
    const RESOURCE: &'static str = "Sandbox";
    const DOMAIN: Domain = Domain::Api;

    fn path(&self) -> String {
        build_path(PATH, &[("AccountSid", self.account_sid.as_str())])
    }
}

impl Fetcher for SandboxFetcher {
    type Record = Sandbox;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::HttpMethod;

    #[test]
    fn test_fetch_needs_only_account_sid() {
        let request = Sandbox::fetch("AC1").build_request();

        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.target.domain(), Domain::Api);
        assert_eq!(request.target.to_string(), "/2010-04-01/Accounts/AC1/Sandbox.json");
        assert!(request.query.is_empty());
    }

    #[test]
    fn test_sandbox_decodes_pin_and_rfc2822_dates() {
        let json = r#"{
            "pin": 23019488,
            "phone_number": "+14155992671",
            "voice_method": "POST",
            "date_created": "Thu, 30 Jun 2011 22:53:01 +0000",
            "date_updated": null
        }"#;
        let sandbox: Sandbox = serde_json::from_str(json).unwrap();

        assert_eq!(sandbox.pin, Some(23_019_488));
        assert_eq!(sandbox.phone_number.as_deref(), Some("+14155992671"));
        assert_eq!(
            sandbox.date_created.map(|date| date.to_rfc3339()),
            Some("2011-06-30T22:53:01+00:00".to_string())
        );
        assert_eq!(sandbox.date_updated, None);
    }
}
