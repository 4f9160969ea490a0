//! SIP credential lists.
//!
//! A credential list groups the username/password pairs allowed to
//! authenticate against SIP domains. Its entries are managed through
//! [`SipCredential`](super::SipCredential).

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::Domain;
use crate::rest::resources::api::v2010::SipCredentialReader;
use crate::rest::{build_path, Deleter, Endpoint, Fetcher};

const INSTANCE_PATH: &str = "/2010-04-01/Accounts/{AccountSid}/SIP/CredentialLists/{Sid}.json";

/// A list of SIP credentials.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct SipCredentialList {
    /// The unique identifier of the credential list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sid: Option<String>,

    /// The SID of the account that owns the credential list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_sid: Option<String>,

    /// A human-readable name for the credential list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub friendly_name: Option<String>,

    /// When the credential list was created.
    #[serde(
        default,
        with = "crate::rest::formats::rfc2822",
        skip_serializing_if = "Option::is_none"
    )]
    pub date_created: Option<DateTime<Utc>>,

    /// When the credential list was last updated.
    #[serde(
        default,
        with = "crate::rest::formats::rfc2822",
        skip_serializing_if = "Option::is_none"
    )]
    pub date_updated: Option<DateTime<Utc>>,

    /// URIs of nested resources, keyed by name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subresource_uris: Option<HashMap<String, String>>,

    /// The URI of the credential list, relative to the API host.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
}

impl SipCredentialList {
    #[must_use]
    pub fn fetch(account_sid: impl Into<String>, sid: impl Into<String>) -> SipCredentialListFetcher {
        SipCredentialListFetcher::new(account_sid, sid)
    }

    #[must_use]
    pub fn delete(account_sid: impl Into<String>, sid: impl Into<String>) -> SipCredentialListDeleter {
        SipCredentialListDeleter::new(account_sid, sid)
    }

    /// Lists the credentials in this list, or `None` if the record lacks
    /// its identifiers.
    #[must_use]
    pub fn credentials(&self) -> Option<SipCredentialReader> {
        let account_sid = self.account_sid.as_deref()?;
        let sid = self.sid.as_deref()?;
        Some(SipCredentialReader::new(account_sid, sid))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SipCredentialListFetcher {
    account_sid: String,
    sid: String,
}

impl SipCredentialListFetcher {
    #[must_use]
    pub fn new(account_sid: impl Into<String>, sid: impl Into<String>) -> Self {
        Self {
            account_sid: account_sid.into(),
            sid: sid.into(),
        }
    }
}

impl Endpoint for SipCredentialListFetcher {
    const RESOURCE: &'static str = "CredentialList";
    const DOMAIN: Domain = Domain::Api;

    fn path(&self) -> String {
        build_path(
            INSTANCE_PATH,
            &[("AccountSid", self.account_sid.as_str()), ("Sid", self.sid.as_str())],
        )
    }
}

impl Fetcher for SipCredentialListFetcher {
    type Record = SipCredentialList;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SipCredentialListDeleter {
    account_sid: String,
    sid: String,
}

impl SipCredentialListDeleter {
    #[must_use]
    pub fn new(account_sid: impl Into<String>, sid: impl Into<String>) -> Self {
        Self {
            account_sid: account_sid.into(),
            sid: sid.into(),
        }
    }
}

impl Endpoint for SipCredentialListDeleter {
    const RESOURCE: &'static str = "CredentialList";
    const DOMAIN: Domain = Domain::Api;

    fn path(&self) -> String {
        build_path(
            INSTANCE_PATH,
            &[("AccountSid", self.account_sid.as_str()), ("Sid", self.sid.as_str())],
        )
    }
}

impl Deleter for SipCredentialListDeleter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_uses_sip_path() {
        assert_eq!(
            SipCredentialList::delete("AC1", "CL1").path(),
            "/2010-04-01/Accounts/AC1/SIP/CredentialLists/CL1.json"
        );
    }

    #[test]
    fn test_credentials_scoped_to_list() {
        let list = SipCredentialList {
            sid: Some("CL1".to_string()),
            account_sid: Some("AC1".to_string()),
            ..Default::default()
        };
        assert_eq!(
            list.credentials().unwrap().path(),
            "/2010-04-01/Accounts/AC1/SIP/CredentialLists/CL1/Credentials.json"
        );
    }
}
