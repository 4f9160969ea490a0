//! The `conversations` domain (`conversations.twilio.com`).

pub mod v1;
