//! Countries in which phone numbers can be searched and purchased.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::config::Domain;
use crate::rest::{build_path, Endpoint, Fetcher, Reader};

const LIST_PATH: &str = "/2010-04-01/Accounts/{AccountSid}/AvailablePhoneNumbers.json";
const INSTANCE_PATH: &str =
    "/2010-04-01/Accounts/{AccountSid}/AvailablePhoneNumbers/{CountryCode}.json";

/// A country with available phone numbers.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AvailablePhoneNumberCountry {
    /// ISO 3166-1 alpha-2 code (e.g., "US").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,

    /// Full country name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    /// Whether numbers in this country are in beta.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beta: Option<bool>,

    /// The URI of the country, relative to the API host.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,

    /// URIs of the number-type subresources (e.g., "local", "toll_free").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subresource_uris: Option<HashMap<String, String>>,
}

impl AvailablePhoneNumberCountry {
    /// Lists the countries available to an account.
    #[must_use]
    pub fn read(account_sid: impl Into<String>) -> AvailablePhoneNumberCountryReader {
        AvailablePhoneNumberCountryReader::new(account_sid)
    }

    /// Fetches one country by its ISO code.
    #[must_use]
    pub fn fetch(
        account_sid: impl Into<String>,
        country_code: impl Into<String>,
    ) -> AvailablePhoneNumberCountryFetcher {
        AvailablePhoneNumberCountryFetcher::new(account_sid, country_code)
    }
}

/// Lists available countries. Takes no filters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailablePhoneNumberCountryReader {
    account_sid: String,
    page_size: Option<u32>,
}

impl AvailablePhoneNumberCountryReader {
    #[must_use]
    pub fn new(account_sid: impl Into<String>) -> Self {
        Self {
            account_sid: account_sid.into(),
            page_size: None,
        }
    }

    #[must_use]
    pub const fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }
}

impl Endpoint for AvailablePhoneNumberCountryReader {
    const RESOURCE: &'static str = "AvailablePhoneNumberCountry";
    const DOMAIN: Domain = Domain::Api;

    fn path(&self) -> String {
        build_path(LIST_PATH, &[("AccountSid", self.account_sid.as_str())])
    }
}

impl Reader for AvailablePhoneNumberCountryReader {
    type Record = AvailablePhoneNumberCountry;
    const RECORDS_KEY: &'static str = "countries";

    fn page_size(&self) -> Option<u32> {
        self.page_size
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailablePhoneNumberCountryFetcher {
    account_sid: String,
    country_code: String,
}

impl AvailablePhoneNumberCountryFetcher {
    #[must_use]
    pub fn new(account_sid: impl Into<String>, country_code: impl Into<String>) -> Self {
        Self {
            account_sid: account_sid.into(),
            country_code: country_code.into(),
        }
    }
}

impl Endpoint for AvailablePhoneNumberCountryFetcher {
    const RESOURCE: &'static str = "AvailablePhoneNumberCountry";
    const DOMAIN: Domain = Domain::Api;

    fn path(&self) -> String {
        build_path(
            INSTANCE_PATH,
            &[
                ("AccountSid", self.account_sid.as_str()),
                ("CountryCode", self.country_code.as_str()),
            ],
        )
    }
}

impl Fetcher for AvailablePhoneNumberCountryFetcher {
    type Record = AvailablePhoneNumberCountry;
}
