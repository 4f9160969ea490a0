//! Messaging prices by country.
//!
//! Listing returns each country's name and ISO code; fetching a single
//! country also returns its inbound and per-carrier outbound SMS prices.
//!
//! # Example
//!
//! ```rust,ignore
//! use twilio_api::rest::resources::pricing::v1::MessagingCountry;
//! use twilio_api::rest::Fetcher;
//!
//! let us = MessagingCountry::fetch("US").execute(&client).await?;
//! for carrier in &us.outbound_sms_prices {
//!     println!("{:?}: {:?}", carrier.carrier, carrier.prices);
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::config::Domain;
use crate::rest::{build_path, Endpoint, Fetcher, Reader};

const LIST_PATH: &str = "/v1/Messaging/Countries";
const INSTANCE_PATH: &str = "/v1/Messaging/Countries/{IsoCountry}";

/// Price for one phone number type.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct NumberTypePrice {
    /// Number type (e.g., "local", "mobile", "shortcode").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_type: Option<String>,

    /// List price before discounts.
    #[serde(
        default,
        with = "crate::rest::formats::decimal",
        skip_serializing_if = "Option::is_none"
    )]
    pub base_price: Option<f64>,

    /// Price the account pays.
    #[serde(
        default,
        with = "crate::rest::formats::decimal",
        skip_serializing_if = "Option::is_none"
    )]
    pub current_price: Option<f64>,
}

/// Outbound SMS prices for one carrier.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct OutboundSmsPrice {
    /// The carrier name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carrier: Option<String>,

    /// Mobile country code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mcc: Option<String>,

    /// Mobile network code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mnc: Option<String>,

    /// Prices by number type.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub prices: Vec<NumberTypePrice>,
}

/// Messaging pricing for a country.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct MessagingCountry {
    /// The country name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    /// ISO 3166-1 alpha-2 code; identifies the resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iso_country: Option<String>,

    /// Present on fetch only.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub outbound_sms_prices: Vec<OutboundSmsPrice>,

    /// Present on fetch only.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub inbound_sms_prices: Vec<NumberTypePrice>,

    /// Currency of all prices (e.g., "USD").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_unit: Option<String>,

    /// The absolute URL of the pricing record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl MessagingCountry {
    #[must_use]
    pub fn read() -> MessagingCountryReader {
        MessagingCountryReader::default()
    }

    #[must_use]
    pub fn fetch(iso_country: impl Into<String>) -> MessagingCountryFetcher {
        MessagingCountryFetcher {
            iso_country: iso_country.into(),
        }
    }
}

/// Lists countries with messaging prices.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessagingCountryReader {
    page_size: Option<u32>,
}

impl MessagingCountryReader {
    #[must_use]
    pub const fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }
}

impl Endpoint for MessagingCountryReader {
    const RESOURCE: &'static str = "Country";
    const DOMAIN: Domain = Domain::Pricing;

    fn path(&self) -> String {
        LIST_PATH.to_string()
    }
}

impl Reader for MessagingCountryReader {
    type Record = MessagingCountry;
    const RECORDS_KEY: &'static str = "countries";

    fn page_size(&self) -> Option<u32> {
        self.page_size
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessagingCountryFetcher {
    iso_country: String,
}

impl Endpoint for MessagingCountryFetcher {
    const RESOURCE: &'static str = "Country";
    const DOMAIN: Domain = Domain::Pricing;

    fn path(&self) -> String {
        build_path(INSTANCE_PATH, &[("IsoCountry", self.iso_country.as_str())])
    }
}

impl Fetcher for MessagingCountryFetcher {
    type Record = MessagingCountry;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_deserializes_nested_prices() {
        let json = r#"{
            "country": "United States",
            "iso_country": "US",
            "outbound_sms_prices": [
                {
                    "carrier": "AT&T Wireless",
                    "mcc": "310",
                    "mnc": "410",
                    "prices": [
                        {"number_type": "local", "base_price": "0.0075", "current_price": "0.0070"}
                    ]
                }
            ],
            "inbound_sms_prices": [
                {"number_type": "local", "base_price": "0.0075", "current_price": "0.0075"}
            ],
            "price_unit": "USD",
            "url": "https://pricing.twilio.com/v1/Messaging/Countries/US"
        }"#;

        let country: MessagingCountry = serde_json::from_str(json).unwrap();

        assert_eq!(country.iso_country.as_deref(), Some("US"));
        assert_eq!(country.outbound_sms_prices[0].mnc.as_deref(), Some("410"));
        assert_eq!(country.outbound_sms_prices[0].prices[0].current_price, Some(0.007));
        assert_eq!(country.inbound_sms_prices.len(), 1);
    }

    #[test]
    fn test_list_record_has_no_prices() {
        let country: MessagingCountry = serde_json::from_str(
            r#"{"country":"Austria","iso_country":"AT","url":"https://pricing.twilio.com/v1/Messaging/Countries/AT"}"#,
        )
        .unwrap();
        assert!(country.outbound_sms_prices.is_empty());
        assert!(country.price_unit.is_none());
    }

    #[test]
    fn test_paths() {
        assert_eq!(MessagingCountry::read().path(), "/v1/Messaging/Countries");
        assert_eq!(MessagingCountry::fetch("AT").path(), "/v1/Messaging/Countries/AT");
    }
}
