//! Resources of the `pricing` domain, version `v1`.

mod messaging_country;

pub use messaging_country::{
    MessagingCountry, MessagingCountryFetcher, MessagingCountryReader, NumberTypePrice,
    OutboundSmsPrice,
};
