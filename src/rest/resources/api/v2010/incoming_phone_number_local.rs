//! Local incoming phone numbers.
//!
//! Lists the account's numbers of the "local" type. Records are regular
//! [`IncomingPhoneNumber`] values.

use crate::clients::Params;
use crate::config::Domain;
use crate::rest::resources::api::v2010::IncomingPhoneNumber;
use crate::rest::{build_path, Endpoint, Reader};

const LIST_PATH: &str = "/2010-04-01/Accounts/{AccountSid}/IncomingPhoneNumbers/Local.json";

/// Entry point for local numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Local;

impl Local {
    /// Lists the local numbers owned by an account.
    #[must_use]
    pub fn read(owner_account_sid: impl Into<String>) -> LocalReader {
        LocalReader::new(owner_account_sid)
    }
}

/// Lists local numbers, optionally filtered.
///
/// # Example
///
/// ```rust,ignore
/// let numbers = Local::read(account_sid)
///     .by_friendly_name("front desk")
///     .by_beta(false)
///     .execute(&client)
///     .await?
///     .collect_all()
///     .await?;
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalReader {
    owner_account_sid: String,
    beta: Option<bool>,
    friendly_name: Option<String>,
    phone_number: Option<String>,
    page_size: Option<u32>,
}

impl LocalReader {
    #[must_use]
    pub fn new(owner_account_sid: impl Into<String>) -> Self {
        Self {
            owner_account_sid: owner_account_sid.into(),
            beta: None,
            friendly_name: None,
            phone_number: None,
            page_size: None,
        }
    }

    /// Include (or exclude) numbers that are new to the platform.
    #[must_use]
    pub const fn by_beta(mut self, beta: bool) -> Self {
        self.beta = Some(beta);
        self
    }

    /// Only numbers whose friendly name matches.
    #[must_use]
    pub fn by_friendly_name(mut self, friendly_name: impl Into<String>) -> Self {
        self.friendly_name = Some(friendly_name.into());
        self
    }

    /// Only numbers matching this pattern (digits, `*` wildcards allowed).
    #[must_use]
    pub fn by_phone_number(mut self, phone_number: impl Into<String>) -> Self {
        self.phone_number = Some(phone_number.into());
        self
    }

    #[must_use]
    pub const fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }
}

impl Endpoint for LocalReader {
    const RESOURCE: &'static str = "Local";
    const DOMAIN: Domain = Domain::Api;

    fn path(&self) -> String {
        build_path(LIST_PATH, &[("AccountSid", self.owner_account_sid.as_str())])
    }
}

impl Reader for LocalReader {
    type Record = IncomingPhoneNumber;
    const RECORDS_KEY: &'static str = "incoming_phone_numbers";

    fn page_size(&self) -> Option<u32> {
        self.page_size
    }

    fn filter_params(&self) -> Params {
        let mut params = Params::new();
        params.push_opt("Beta", self.beta);
        params.push_opt("FriendlyName", self.friendly_name.as_deref());
        params.push_opt("PhoneNumber", self.phone_number.as_deref());
        params
    }
}
