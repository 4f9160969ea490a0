//! The `trunking` domain (`trunking.twilio.com`).

pub mod v1;
