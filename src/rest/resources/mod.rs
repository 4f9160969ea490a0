//! Twilio REST resources, organized by domain and API version.
//!
//! ```text
//! resources/
//!   api/v2010/            <- api.twilio.com/2010-04-01
//!   conversations/v1/     <- conversations.twilio.com/v1
//!   pricing/v1/           <- pricing.twilio.com/v1
//!   taskrouter/v1/        <- taskrouter.twilio.com/v1
//!   trunking/v1/          <- trunking.twilio.com/v1
//! ```
//!
//! Every resource follows the same shape: a record type deserialized from
//! the server's JSON, one struct per operation with fluent setters, and
//! associated functions on the record that create those structs.
//!
//! ```rust,ignore
//! use twilio_api::rest::resources::pricing::v1::MessagingCountry;
//! use twilio_api::rest::Reader;
//!
//! let countries = MessagingCountry::read()
//!     .page_size(100)
//!     .execute(&client)
//!     .await?
//!     .collect_all()
//!     .await?;
//! ```
//!
//! Records are value objects: every field is optional because the server
//! may omit any of them, and enumerated fields fall back to an `Unknown`
//! variant rather than failing the page.

pub mod api;
pub mod conversations;
pub mod pricing;
pub mod taskrouter;
pub mod trunking;
