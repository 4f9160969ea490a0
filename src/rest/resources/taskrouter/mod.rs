//! The `taskrouter` domain (`taskrouter.twilio.com`).

pub mod v1;
