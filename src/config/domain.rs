//! Twilio API domain definitions.
//!
//! This module provides the [`Domain`] enum naming the API hosts a request
//! can be addressed to. Each resource family lives under exactly one domain.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// An API domain (host family) exposed by Twilio.
///
/// The default base URL of a domain is `https://<name>.twilio.com`; it can be
/// overridden per domain or globally in [`TwilioConfig`](crate::TwilioConfig).
///
/// # Example
///
/// ```rust
/// use twilio_api::Domain;
///
/// assert_eq!(Domain::Api.default_base_url(), "https://api.twilio.com");
///
/// let domain: Domain = "taskrouter".parse().unwrap();
/// assert_eq!(domain, Domain::Taskrouter);
/// assert_eq!(domain.to_string(), "taskrouter");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Domain {
    /// The core voice/messaging API (`api.twilio.com`, version 2010-04-01).
    Api,
    /// Conversations API (`conversations.twilio.com`).
    Conversations,
    /// Pricing API (`pricing.twilio.com`).
    Pricing,
    /// `TaskRouter` API (`taskrouter.twilio.com`).
    Taskrouter,
    /// Elastic SIP trunking API (`trunking.twilio.com`).
    Trunking,
}

impl Domain {
    /// Returns the domain name as used in the host.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Api => "api",
            Self::Conversations => "conversations",
            Self::Pricing => "pricing",
            Self::Taskrouter => "taskrouter",
            Self::Trunking => "trunking",
        }
    }

    /// Returns the production base URL for this domain.
    #[must_use]
    pub fn default_base_url(&self) -> String {
        format!("https://{}.twilio.com", self.as_str())
    }

    /// Returns every known domain.
    #[must_use]
    pub const fn all() -> [Self; 5] {
        [
            Self::Api,
            Self::Conversations,
            Self::Pricing,
            Self::Taskrouter,
            Self::Trunking,
        ]
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Domain {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        Self::all()
            .into_iter()
            .find(|domain| domain.as_str() == normalized)
            .ok_or_else(|| ConfigError::UnknownDomain {
                domain: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_urls() {
        assert_eq!(Domain::Api.default_base_url(), "https://api.twilio.com");
        assert_eq!(
            Domain::Taskrouter.default_base_url(),
            "https://taskrouter.twilio.com"
        );
        assert_eq!(
            Domain::Conversations.default_base_url(),
            "https://conversations.twilio.com"
        );
    }

    #[test]
    fn test_parse_round_trips_display() {
        for domain in Domain::all() {
            let parsed: Domain = domain.to_string().parse().unwrap();
            assert_eq!(parsed, domain);
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("Trunking".parse::<Domain>().unwrap(), Domain::Trunking);
    }

    #[test]
    fn test_parse_rejects_unknown_domain() {
        let result = "video".parse::<Domain>();
        assert!(matches!(
            result,
            Err(ConfigError::UnknownDomain { domain }) if domain == "video"
        ));
    }
}
