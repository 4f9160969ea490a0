//! The `pricing` domain (`pricing.twilio.com`).

pub mod v1;
