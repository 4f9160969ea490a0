//! REST resource infrastructure for the Twilio API.
//!
//! This module provides the pieces every resource operation is built from:
//!
//! - **Operation traits**: [`Fetcher`], [`Creator`], [`Updater`], [`Deleter`]
//!   and [`Reader`], each with a provided `execute()`
//! - **[`ResultSet`]**: Lazy iteration over records spanning many pages
//! - **[`Page`]**: One server batch plus its continuation URI
//! - **[`classify`]**: Maps a transport outcome to a response or [`ApiError`]
//! - **[`OperationSpec`]**: Resource name and operation kind, which select the
//!   expected success status
//! - **Path building**: [`build_path`] with percent-encoded identifiers
//!
//! Concrete resources live in [`resources`], grouped by domain and version.
//!
//! # Example: Reading and Fetching
//!
//! ```rust,ignore
//! use twilio_api::{RestClient, TwilioConfig};
//! use twilio_api::rest::{Fetcher, Reader};
//! use twilio_api::rest::resources::api::v2010::Recording;
//!
//! let client = RestClient::new(config)?;
//!
//! // Lazily iterate over every recording created on a day
//! let mut recordings = Recording::read(account_sid)
//!     .by_date_created("2016-01-15")
//!     .execute(&client)
//!     .await?;
//! while let Some(recording) = recordings.next().await {
//!     println!("{:?}", recording?.sid);
//! }
//!
//! // Fetch a single recording
//! let recording = Recording::fetch(account_sid, "RE123").execute(&client).await?;
//! ```
//!
//! # Error Model
//!
//! Every operation fails with one of three [`ApiError`] variants:
//!
//! - [`ApiError::Connection`]: no response was received
//! - [`ApiError::Server`]: a response arrived with an unexpected status
//! - [`ApiError::Decode`]: the expected status arrived but the body did not
//!   match the record type

mod classify;
mod errors;
pub mod formats;
mod operation;
mod page;
mod path;
mod resource;
mod result_set;

pub mod resources;

pub use classify::{classify, decode_page, decode_record};
pub use errors::{ApiError, RestException, ServerError, NO_CONTENT_MESSAGE};
pub use operation::{OperationKind, OperationSpec, SuccessStatuses};
pub use page::Page;
pub use path::build_path;
pub use resource::{Creator, Deleter, Endpoint, Fetcher, Reader, Updater};
pub use result_set::ResultSet;
