//! Credential lists associated with a SIP trunk.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::Domain;
use crate::rest::{build_path, Deleter, Endpoint, Fetcher};

const INSTANCE_PATH: &str = "/v1/Trunks/{TrunkSid}/CredentialLists/{Sid}";

/// A credential list attached to a trunk.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct TrunkCredentialList {
    /// The unique identifier of the credential list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sid: Option<String>,

    /// The SID of the account that owns the credential list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_sid: Option<String>,

    /// The SID of the trunk the list is associated with.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trunk_sid: Option<String>,

    /// A human-readable name for the credential list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub friendly_name: Option<String>,

    /// When the credential list was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_created: Option<DateTime<Utc>>,

    /// When the credential list was last updated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_updated: Option<DateTime<Utc>>,

    /// The absolute URL of the credential list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl TrunkCredentialList {
    #[must_use]
    pub fn fetch(trunk_sid: impl Into<String>, sid: impl Into<String>) -> TrunkCredentialListFetcher {
        TrunkCredentialListFetcher {
            trunk_sid: trunk_sid.into(),
            sid: sid.into(),
        }
    }

    /// Detaches the credential list from the trunk. The list itself is kept.
    #[must_use]
    pub fn delete(trunk_sid: impl Into<String>, sid: impl Into<String>) -> TrunkCredentialListDeleter {
        TrunkCredentialListDeleter {
            trunk_sid: trunk_sid.into(),
            sid: sid.into(),
        }
    }
}

fn instance_path(trunk_sid: &str, sid: &str) -> String {
    build_path(INSTANCE_PATH, &[("TrunkSid", trunk_sid), ("Sid", sid)])
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrunkCredentialListFetcher {
    trunk_sid: String,
    sid: String,
}

impl Endpoint for TrunkCredentialListFetcher {
    const RESOURCE: &'static str = "CredentialList";
    const DOMAIN: Domain = Domain::Trunking;

    fn path(&self) -> String {
        instance_path(&self.trunk_sid, &self.sid)
    }
}

impl Fetcher for TrunkCredentialListFetcher {
    type Record = TrunkCredentialList;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrunkCredentialListDeleter {
    trunk_sid: String,
    sid: String,
}

impl Endpoint for TrunkCredentialListDeleter {
    const RESOURCE: &'static str = "CredentialList";
    const DOMAIN: Domain = Domain::Trunking;

    fn path(&self) -> String {
        instance_path(&self.trunk_sid, &self.sid)
    }
}

impl Deleter for TrunkCredentialListDeleter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_targets_trunking_domain() {
        let request = TrunkCredentialList::fetch("TK1", "CL1").build_request();
        assert_eq!(request.target.domain(), Domain::Trunking);
        assert_eq!(request.target.to_string(), "/v1/Trunks/TK1/CredentialLists/CL1");
    }
}
