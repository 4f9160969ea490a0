//! The `api` domain (`api.twilio.com`).

pub mod v2010;
