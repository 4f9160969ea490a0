//! Incoming phone number resource implementation.
//!
//! Phone numbers owned by an account. [`IncomingPhoneNumber::fetch`] and
//! [`IncomingPhoneNumber::delete`] address a single number; local numbers are
//! listed through [`LocalReader`](super::LocalReader).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::Domain;
use crate::rest::{build_path, Deleter, Endpoint, Fetcher};

const INSTANCE_PATH: &str = "/2010-04-01/Accounts/{AccountSid}/IncomingPhoneNumbers/{Sid}.json";

/// Voice/SMS/MMS capabilities of a number.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PhoneNumberCapabilities {
    /// Whether the number can make and receive calls.
    #[serde(default)]
    pub voice: bool,
    /// Whether the number can send and receive SMS.
    #[serde(default, rename = "SMS", alias = "sms")]
    pub sms: bool,
    /// Whether the number can send and receive MMS.
    #[serde(default, rename = "MMS", alias = "mms")]
    pub mms: bool,
}

/// A phone number owned by an account.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct IncomingPhoneNumber {
    /// The unique identifier of the phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sid: Option<String>,

    /// The SID of the account that owns the phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_sid: Option<String>,

    /// A human-readable name for the phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub friendly_name: Option<String>,

    /// The number in E.164 format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,

    /// What the number can be used for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capabilities: Option<PhoneNumberCapabilities>,

    /// Whether the number is new to the platform.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beta: Option<bool>,

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

    /// The API version used to process the phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,

    /// When the phone number was created.
    #[serde(
        default,
        with = "crate::rest::formats::rfc2822",
        skip_serializing_if = "Option::is_none"
    )]
    pub date_created: Option<DateTime<Utc>>,

    /// When the phone number was last updated.
    #[serde(
        default,
        with = "crate::rest::formats::rfc2822",
        skip_serializing_if = "Option::is_none"
    )]
    pub date_updated: Option<DateTime<Utc>>,

    /// The URI of the phone number, relative to the API host.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
}

impl IncomingPhoneNumber {
    /// Fetches one number.
    #[must_use]
    pub fn fetch(
        account_sid: impl Into<String>,
        sid: impl Into<String>,
    ) -> IncomingPhoneNumberFetcher {
        IncomingPhoneNumberFetcher::new(account_sid, sid)
    }

    /// Releases a number from the account.
    #[must_use]
    pub fn delete(
        account_sid: impl Into<String>,
        sid: impl Into<String>,
    ) -> IncomingPhoneNumberDeleter {
        IncomingPhoneNumberDeleter::new(account_sid, sid)
    }
}

fn instance_path(account_sid: &str, sid: &str) -> String {
    build_path(INSTANCE_PATH, &[("AccountSid", account_sid), ("Sid", sid)])
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomingPhoneNumberFetcher {
    account_sid: String,
    sid: String,
}

impl IncomingPhoneNumberFetcher {
    #[must_use]
    pub fn new(account_sid: impl Into<String>, sid: impl Into<String>) -> Self {
        Self {
            account_sid: account_sid.into(),
            sid: sid.into(),
        }
    }
}

impl Endpoint for IncomingPhoneNumberFetcher {
    const RESOURCE: &'static str = "IncomingPhoneNumber";
    const DOMAIN: Domain = Domain::Api;

    fn path(&self) -> String {
        instance_path(&self.account_sid, &self.sid)
    }
}

impl Fetcher for IncomingPhoneNumberFetcher {
    type Record = IncomingPhoneNumber;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomingPhoneNumberDeleter {
    account_sid: String,
    sid: String,
}

impl IncomingPhoneNumberDeleter {
    #[must_use]
    pub fn new(account_sid: impl Into<String>, sid: impl Into<String>) -> Self {
        Self {
            account_sid: account_sid.into(),
            sid: sid.into(),
        }
    }
}

impl Endpoint for IncomingPhoneNumberDeleter {
    const RESOURCE: &'static str = "IncomingPhoneNumber";
    const DOMAIN: Domain = Domain::Api;

    fn path(&self) -> String {
        instance_path(&self.account_sid, &self.sid)
    }
}

impl Deleter for IncomingPhoneNumberDeleter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capabilities_accept_vendor_casing() {
        let json = r#"{
            "sid": "PNaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa",
            "phone_number": "+15005550006",
            "capabilities": {"voice": true, "SMS": false, "MMS": true}
        }"#;
        let number: IncomingPhoneNumber = serde_json::from_str(json).unwrap();
        let capabilities = number.capabilities.unwrap();
        assert!(capabilities.voice);
        assert!(!capabilities.sms);
        assert!(capabilities.mms);
    }
}
