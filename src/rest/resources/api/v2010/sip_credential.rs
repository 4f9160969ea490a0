//! SIP credentials within a credential list.
//!
//! Supports every operation: read, create, fetch, update and delete. The
//! password is write-only; it is sent on create/update and never returned.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::Params;
use crate::config::Domain;
use crate::rest::{build_path, Creator, Deleter, Endpoint, Fetcher, Reader, Updater};

const LIST_PATH: &str =
    "/2010-04-01/Accounts/{AccountSid}/SIP/CredentialLists/{CredentialListSid}/Credentials.json";
const INSTANCE_PATH: &str =
    "/2010-04-01/Accounts/{AccountSid}/SIP/CredentialLists/{CredentialListSid}/Credentials/{Sid}.json";

const RESOURCE: &str = "Credential";

/// A username entry of a SIP credential list.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct SipCredential {
    /// The unique identifier of the credential.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sid: Option<String>,

    /// The SID of the account that owns the credential.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_sid: Option<String>,

    /// The SID of the list the credential belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credential_list_sid: Option<String>,

    /// The SIP username.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// When the credential was created.
    #[serde(
        default,
        with = "crate::rest::formats::rfc2822",
        skip_serializing_if = "Option::is_none"
    )]
    pub date_created: Option<DateTime<Utc>>,

    /// When the credential was last updated.
    #[serde(
        default,
        with = "crate::rest::formats::rfc2822",
        skip_serializing_if = "Option::is_none"
    )]
    pub date_updated: Option<DateTime<Utc>>,

    /// The URI of the credential, relative to the API host.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
}

impl SipCredential {
    #[must_use]
    pub fn read(
        account_sid: impl Into<String>,
        credential_list_sid: impl Into<String>,
    ) -> SipCredentialReader {
        SipCredentialReader::new(account_sid, credential_list_sid)
    }

    #[must_use]
    pub fn create(
        account_sid: impl Into<String>,
        credential_list_sid: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> SipCredentialCreator {
        SipCredentialCreator {
            list: ListIds::new(account_sid, credential_list_sid),
            username: username.into(),
            password: password.into(),
        }
    }

    #[must_use]
    pub fn fetch(
        account_sid: impl Into<String>,
        credential_list_sid: impl Into<String>,
        sid: impl Into<String>,
    ) -> SipCredentialFetcher {
        SipCredentialFetcher {
            list: ListIds::new(account_sid, credential_list_sid),
            sid: sid.into(),
        }
    }

    #[must_use]
    pub fn update(
        account_sid: impl Into<String>,
        credential_list_sid: impl Into<String>,
        sid: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> SipCredentialUpdater {
        SipCredentialUpdater {
            list: ListIds::new(account_sid, credential_list_sid),
            sid: sid.into(),
            username: username.into(),
            password: password.into(),
        }
    }

    #[must_use]
    pub fn delete(
        account_sid: impl Into<String>,
        credential_list_sid: impl Into<String>,
        sid: impl Into<String>,
    ) -> SipCredentialDeleter {
        SipCredentialDeleter {
            list: ListIds::new(account_sid, credential_list_sid),
            sid: sid.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ListIds {
    account_sid: String,
    credential_list_sid: String,
}

impl ListIds {
    fn new(account_sid: impl Into<String>, credential_list_sid: impl Into<String>) -> Self {
        Self {
            account_sid: account_sid.into(),
            credential_list_sid: credential_list_sid.into(),
        }
    }

    fn list_path(&self) -> String {
        build_path(
            LIST_PATH,
            &[
                ("AccountSid", self.account_sid.as_str()),
                ("CredentialListSid", self.credential_list_sid.as_str()),
            ],
        )
    }

    fn instance_path(&self, sid: &str) -> String {
        build_path(
            INSTANCE_PATH,
            &[
                ("AccountSid", self.account_sid.as_str()),
                ("CredentialListSid", self.credential_list_sid.as_str()),
                ("Sid", sid),
            ],
        )
    }
}

fn credential_params(username: &str, password: &str) -> Params {
    let mut params = Params::new();
    params.push("Username", username);
    params.push("Password", password);
    params
}

/// Lists the credentials of a credential list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SipCredentialReader {
    list: ListIds,
    page_size: Option<u32>,
}

impl SipCredentialReader {
    #[must_use]
    pub fn new(account_sid: impl Into<String>, credential_list_sid: impl Into<String>) -> Self {
        Self {
            list: ListIds::new(account_sid, credential_list_sid),
            page_size: None,
        }
    }

    #[must_use]
    pub const fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }
}

impl Endpoint for SipCredentialReader {
    const RESOURCE: &'static str = RESOURCE;
    const DOMAIN: Domain = Domain::Api;

    fn path(&self) -> String {
        self.list.list_path()
    }
}

impl Reader for SipCredentialReader {
    type Record = SipCredential;
    const RECORDS_KEY: &'static str = "credentials";

    fn page_size(&self) -> Option<u32> {
        self.page_size
    }
}

/// Adds a credential. Sends `Username` and `Password`.
#[derive(Clone, PartialEq, Eq)]
pub struct SipCredentialCreator {
    list: ListIds,
    username: String,
    password: String,
}

impl fmt::Debug for SipCredentialCreator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SipCredentialCreator")
            .field("list", &self.list)
            .field("username", &self.username)
            .field("password", &"*****")
            .finish()
    }
}

impl Endpoint for SipCredentialCreator {
    const RESOURCE: &'static str = RESOURCE;
    const DOMAIN: Domain = Domain::Api;

    fn path(&self) -> String {
        self.list.list_path()
    }
}

impl Creator for SipCredentialCreator {
    type Record = SipCredential;

    fn form_params(&self) -> Params {
        credential_params(&self.username, &self.password)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SipCredentialFetcher {
    list: ListIds,
    sid: String,
}

impl Endpoint for SipCredentialFetcher {
    const RESOURCE: &'static str = RESOURCE;
    const DOMAIN: Domain = Domain::Api;

    fn path(&self) -> String {
        self.list.instance_path(&self.sid)
    }
}

impl Fetcher for SipCredentialFetcher {
    type Record = SipCredential;
}

/// Replaces a credential's username and password.
#[derive(Clone, PartialEq, Eq)]
pub struct SipCredentialUpdater {
    list: ListIds,
    sid: String,
    username: String,
    password: String,
}

impl fmt::Debug for SipCredentialUpdater {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SipCredentialUpdater")
            .field("list", &self.list)
            .field("sid", &self.sid)
            .field("username", &self.username)
            .field("password", &"*****")
            .finish()
    }
}

impl Endpoint for SipCredentialUpdater {
    const RESOURCE: &'static str = RESOURCE;
    const DOMAIN: Domain = Domain::Api;

    fn path(&self) -> String {
        self.list.instance_path(&self.sid)
    }
}

impl Updater for SipCredentialUpdater {
    type Record = SipCredential;

    fn form_params(&self) -> Params {
        credential_params(&self.username, &self.password)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SipCredentialDeleter {
    list: ListIds,
    sid: String,
}

impl Endpoint for SipCredentialDeleter {
    const RESOURCE: &'static str = RESOURCE;
    const DOMAIN: Domain = Domain::Api;

    fn path(&self) -> String {
        self.list.instance_path(&self.sid)
    }
}

impl Deleter for SipCredentialDeleter {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::HttpMethod;

    #[test]
    fn test_create_posts_username_and_password_to_list() {
        let request = SipCredential::create("AC1", "CL1", "alice", "s3cret").build_request();

        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(
            request.target.to_string(),
            "/2010-04-01/Accounts/AC1/SIP/CredentialLists/CL1/Credentials.json"
        );
        let form: Vec<_> = request.form.iter().collect();
        assert_eq!(form, vec![("Username", "alice"), ("Password", "s3cret")]);
        assert!(request.query.is_empty());
    }

    #[test]
    fn test_update_posts_to_instance() {
        let request = SipCredential::update("AC1", "CL1", "CR1", "alice", "n3w").build_request();

        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(
            request.target.to_string(),
            "/2010-04-01/Accounts/AC1/SIP/CredentialLists/CL1/Credentials/CR1.json"
        );
        assert_eq!(request.form.get("Password"), Some("n3w"));
    }

    #[test]
    fn test_debug_masks_password() {
        let creator = SipCredential::create("AC1", "CL1", "alice", "s3cret");
        let debug = format!("{creator:?}");
        assert!(!debug.contains("s3cret"));
        assert!(debug.contains("alice"));
    }
}
