//! Phone numbers associated with a SIP trunk.
//!
//! Only disassociation is supported: deleting the entry detaches the number
//! from the trunk without releasing it.

use crate::config::Domain;
use crate::rest::{build_path, Deleter, Endpoint};

const INSTANCE_PATH: &str = "/v1/Trunks/{TrunkSid}/PhoneNumbers/{Sid}";

/// Detaches a phone number from a trunk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrunkPhoneNumberDeleter {
    trunk_sid: String,
    sid: String,
}

impl TrunkPhoneNumberDeleter {
    #[must_use]
    pub fn new(trunk_sid: impl Into<String>, sid: impl Into<String>) -> Self {
        Self {
            trunk_sid: trunk_sid.into(),
            sid: sid.into(),
        }
    }
}

impl Endpoint for TrunkPhoneNumberDeleter {
    const RESOURCE: &'static str = "PhoneNumber";
    const DOMAIN: Domain = Domain::Trunking;

    fn path(&self) -> String {
        build_path(
            INSTANCE_PATH,
            &[("TrunkSid", self.trunk_sid.as_str()), ("Sid", self.sid.as_str())],
        )
    }
}

impl Deleter for TrunkPhoneNumberDeleter {}
