//! REST client for the Twilio API.
//!
//! [`RestClient`] is the request executor shared by every resource
//! operation. Resource-level traits live in [`crate::rest`].

mod client;

pub use client::RestClient;
